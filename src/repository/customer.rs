use diesel::dsl::{count_distinct, count_star, sum};
use diesel::prelude::*;

use crate::domain::customer::{
    CustomerRevenue, CustomerTotals, GenderSales, OccupationSales, TopCustomer,
};
use crate::models::customer::{
    CustomerRevenueRow, CustomerTotalsRow, GenderSalesRow, OccupationSalesRow, TopCustomerRow,
};
use crate::repository::errors::RepositoryResult;
use crate::repository::{CustomerReader, DieselRepository};

impl CustomerReader for DieselRepository {
    fn customer_totals(&self, year: i32) -> RepositoryResult<CustomerTotals> {
        use crate::schema::{dim_date, fact_sales};

        let mut conn = self.conn()?;

        let row = fact_sales::table
            .inner_join(dim_date::table)
            .filter(dim_date::calendar_year.eq(year))
            .select((
                count_distinct(fact_sales::customer_key),
                count_star(),
                sum(fact_sales::sales_amount),
            ))
            .first::<CustomerTotalsRow>(&mut conn)?;

        Ok(row.into())
    }

    fn sales_by_gender(&self, year: i32) -> RepositoryResult<Vec<GenderSales>> {
        use crate::schema::{dim_customer, dim_date, fact_sales};

        let mut conn = self.conn()?;

        let rows = fact_sales::table
            .inner_join(dim_date::table)
            .inner_join(dim_customer::table)
            .filter(dim_date::calendar_year.eq(year))
            .group_by(dim_customer::gender)
            .select((
                dim_customer::gender,
                count_distinct(fact_sales::customer_key),
                sum(fact_sales::sales_amount),
            ))
            .order(dim_customer::gender.asc())
            .load::<GenderSalesRow>(&mut conn)?;

        Ok(rows.into_iter().map(GenderSales::from).collect())
    }

    fn sales_by_occupation(&self, year: i32) -> RepositoryResult<Vec<OccupationSales>> {
        use crate::schema::{dim_customer, dim_date, fact_sales};

        let mut conn = self.conn()?;

        let rows = fact_sales::table
            .inner_join(dim_date::table)
            .inner_join(dim_customer::table)
            .filter(dim_date::calendar_year.eq(year))
            .group_by(dim_customer::occupation)
            .select((
                dim_customer::occupation,
                count_distinct(fact_sales::customer_key),
                sum(fact_sales::sales_amount),
            ))
            .order(sum(fact_sales::sales_amount).desc())
            .load::<OccupationSalesRow>(&mut conn)?;

        Ok(rows.into_iter().map(OccupationSales::from).collect())
    }

    fn customer_revenue(&self, year: i32) -> RepositoryResult<Vec<CustomerRevenue>> {
        use crate::schema::{dim_customer, dim_date, fact_sales};

        let mut conn = self.conn()?;

        let rows = fact_sales::table
            .inner_join(dim_date::table)
            .inner_join(dim_customer::table)
            .filter(dim_date::calendar_year.eq(year))
            .group_by((dim_customer::customer_key, dim_customer::birth_date))
            .select((
                dim_customer::customer_key,
                dim_customer::birth_date,
                sum(fact_sales::sales_amount),
            ))
            .load::<CustomerRevenueRow>(&mut conn)?;

        Ok(rows.into_iter().map(CustomerRevenue::from).collect())
    }

    fn top_customers(&self, year: i32, limit: i64) -> RepositoryResult<Vec<TopCustomer>> {
        use crate::schema::{dim_customer, dim_date, fact_sales};

        let mut conn = self.conn()?;

        let rows = fact_sales::table
            .inner_join(dim_date::table)
            .inner_join(dim_customer::table)
            .filter(dim_date::calendar_year.eq(year))
            .group_by((
                dim_customer::customer_key,
                dim_customer::first_name,
                dim_customer::last_name,
            ))
            .select((
                dim_customer::first_name,
                dim_customer::last_name,
                sum(fact_sales::sales_amount),
                count_star(),
            ))
            .order(sum(fact_sales::sales_amount).desc())
            .limit(limit)
            .load::<TopCustomerRow>(&mut conn)?;

        Ok(rows.into_iter().map(TopCustomer::from).collect())
    }
}
