use mockall::mock;

use super::{CustomerReader, SalesReader, YearReader};
use crate::domain::customer::{
    CustomerRevenue, CustomerTotals, GenderSales, OccupationSales, TopCustomer,
};
use crate::domain::sales::{CategorySales, CountrySales, MonthlySales, ProductSales, SalesTotals};
use crate::repository::errors::RepositoryResult;

mock! {
    pub SalesReader {}

    impl SalesReader for SalesReader {
        fn sales_totals(&self, year: i32) -> RepositoryResult<SalesTotals>;
        fn monthly_sales(&self, year: i32) -> RepositoryResult<Vec<MonthlySales>>;
        fn sales_by_category(&self, year: i32) -> RepositoryResult<Vec<CategorySales>>;
        fn sales_by_country(&self, year: i32) -> RepositoryResult<Vec<CountrySales>>;
        fn top_products(&self, year: i32, limit: i64) -> RepositoryResult<Vec<ProductSales>>;
    }
}

mock! {
    pub CustomerReader {}

    impl CustomerReader for CustomerReader {
        fn customer_totals(&self, year: i32) -> RepositoryResult<CustomerTotals>;
        fn sales_by_gender(&self, year: i32) -> RepositoryResult<Vec<GenderSales>>;
        fn sales_by_occupation(&self, year: i32) -> RepositoryResult<Vec<OccupationSales>>;
        fn customer_revenue(&self, year: i32) -> RepositoryResult<Vec<CustomerRevenue>>;
        fn top_customers(&self, year: i32, limit: i64) -> RepositoryResult<Vec<TopCustomer>>;
    }
}

mock! {
    pub YearReader {}

    impl YearReader for YearReader {
        fn list_years(&self) -> RepositoryResult<Vec<i32>>;
    }
}
