use crate::db::{DbConnection, DbPool};
use crate::domain::customer::{
    CustomerRevenue, CustomerTotals, GenderSales, OccupationSales, TopCustomer,
};
use crate::domain::sales::{CategorySales, CountrySales, MonthlySales, ProductSales, SalesTotals};
use crate::repository::errors::RepositoryResult;

pub mod customer;
pub mod errors;
pub mod sales;
pub mod years;

#[cfg(test)]
pub mod mock;

#[derive(Clone)]
/// Diesel-backed repository implementation that wraps an r2d2 pool.
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository using the provided connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Sales-overview aggregates, all parameterized by a calendar year.
///
/// A year with no fact rows yields zeroed totals and empty vectors,
/// never an error.
pub trait SalesReader {
    fn sales_totals(&self, year: i32) -> RepositoryResult<SalesTotals>;
    fn monthly_sales(&self, year: i32) -> RepositoryResult<Vec<MonthlySales>>;
    fn sales_by_category(&self, year: i32) -> RepositoryResult<Vec<CategorySales>>;
    fn sales_by_country(&self, year: i32) -> RepositoryResult<Vec<CountrySales>>;
    fn top_products(&self, year: i32, limit: i64) -> RepositoryResult<Vec<ProductSales>>;
}

/// Customer-analysis aggregates, all parameterized by a calendar year.
pub trait CustomerReader {
    fn customer_totals(&self, year: i32) -> RepositoryResult<CustomerTotals>;
    fn sales_by_gender(&self, year: i32) -> RepositoryResult<Vec<GenderSales>>;
    fn sales_by_occupation(&self, year: i32) -> RepositoryResult<Vec<OccupationSales>>;
    fn customer_revenue(&self, year: i32) -> RepositoryResult<Vec<CustomerRevenue>>;
    fn top_customers(&self, year: i32, limit: i64) -> RepositoryResult<Vec<TopCustomer>>;
}

/// Calendar years available in the date dimension.
pub trait YearReader {
    /// Distinct calendar years, ascending.
    fn list_years(&self) -> RepositoryResult<Vec<i32>>;
}
