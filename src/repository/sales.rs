use diesel::dsl::{count_star, sum};
use diesel::prelude::*;

use crate::domain::sales::{CategorySales, CountrySales, MonthlySales, ProductSales, SalesTotals};
use crate::models::sales::{
    CategorySalesRow, CountrySalesRow, MonthlySalesRow, ProductSalesRow, SalesTotalsRow,
};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, SalesReader};

impl SalesReader for DieselRepository {
    fn sales_totals(&self, year: i32) -> RepositoryResult<SalesTotals> {
        use crate::schema::{dim_date, fact_sales};

        let mut conn = self.conn()?;

        let row = fact_sales::table
            .inner_join(dim_date::table)
            .filter(dim_date::calendar_year.eq(year))
            .select((
                sum(fact_sales::sales_amount),
                sum(fact_sales::total_cost),
                sum(fact_sales::order_quantity),
                count_star(),
            ))
            .first::<SalesTotalsRow>(&mut conn)?;

        Ok(row.into())
    }

    fn monthly_sales(&self, year: i32) -> RepositoryResult<Vec<MonthlySales>> {
        use crate::schema::{dim_date, fact_sales};

        let mut conn = self.conn()?;

        let rows = fact_sales::table
            .inner_join(dim_date::table)
            .filter(dim_date::calendar_year.eq(year))
            .group_by((dim_date::month_number, dim_date::month_name))
            .select((
                dim_date::month_number,
                dim_date::month_name,
                sum(fact_sales::sales_amount),
                sum(fact_sales::order_quantity),
            ))
            .order(dim_date::month_number.asc())
            .load::<MonthlySalesRow>(&mut conn)?;

        Ok(rows.into_iter().map(MonthlySales::from).collect())
    }

    fn sales_by_category(&self, year: i32) -> RepositoryResult<Vec<CategorySales>> {
        use crate::schema::{
            dim_date, dim_product, dim_product_category, dim_product_subcategory, fact_sales,
        };

        let mut conn = self.conn()?;

        let rows = fact_sales::table
            .inner_join(dim_date::table)
            .inner_join(
                dim_product::table
                    .inner_join(dim_product_subcategory::table.inner_join(dim_product_category::table)),
            )
            .filter(dim_date::calendar_year.eq(year))
            .group_by(dim_product_category::name)
            .select((dim_product_category::name, sum(fact_sales::sales_amount)))
            .order(sum(fact_sales::sales_amount).desc())
            .load::<CategorySalesRow>(&mut conn)?;

        Ok(rows.into_iter().map(CategorySales::from).collect())
    }

    fn sales_by_country(&self, year: i32) -> RepositoryResult<Vec<CountrySales>> {
        use crate::schema::{dim_date, dim_sales_territory, fact_sales};

        let mut conn = self.conn()?;

        let rows = fact_sales::table
            .inner_join(dim_date::table)
            .inner_join(dim_sales_territory::table)
            .filter(dim_date::calendar_year.eq(year))
            .group_by(dim_sales_territory::country)
            .select((dim_sales_territory::country, sum(fact_sales::sales_amount)))
            .order(sum(fact_sales::sales_amount).desc())
            .load::<CountrySalesRow>(&mut conn)?;

        Ok(rows.into_iter().map(CountrySales::from).collect())
    }

    fn top_products(&self, year: i32, limit: i64) -> RepositoryResult<Vec<ProductSales>> {
        use crate::schema::{dim_date, dim_product, fact_sales};

        let mut conn = self.conn()?;

        let rows = fact_sales::table
            .inner_join(dim_date::table)
            .inner_join(dim_product::table)
            .filter(dim_date::calendar_year.eq(year))
            .group_by((dim_product::product_key, dim_product::name))
            .select((
                dim_product::name,
                sum(fact_sales::sales_amount),
                sum(fact_sales::order_quantity),
            ))
            .order(sum(fact_sales::sales_amount).desc())
            .limit(limit)
            .load::<ProductSalesRow>(&mut conn)?;

        Ok(rows.into_iter().map(ProductSales::from).collect())
    }
}
