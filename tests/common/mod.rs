//! Helpers for integration tests.

use chrono::NaiveDate;
use diesel::prelude::*;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

use warehouse_dashboard::db::{DbPool, establish_connection_pool};
use warehouse_dashboard::schema::{
    dim_customer, dim_date, dim_product, dim_product_category, dim_product_subcategory,
    dim_sales_territory, fact_sales,
};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// File-backed warehouse created fresh per test and deleted on drop.
pub struct TestWarehouse {
    path: String,
    pool: DbPool,
}

impl TestWarehouse {
    pub fn new(path: &str) -> Self {
        // A leftover file from an aborted run would leak stale rows.
        let _ = std::fs::remove_file(path);

        let pool = establish_connection_pool(path).expect("warehouse pool");
        pool.get()
            .expect("pooled connection")
            .run_pending_migrations(MIGRATIONS)
            .expect("star schema migrations");

        Self {
            path: path.to_string(),
            pool,
        }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }
}

impl Drop for TestWarehouse {
    fn drop(&mut self) {
        for suffix in ["", "-shm", "-wal"] {
            let _ = std::fs::remove_file(format!("{}{suffix}", self.path));
        }
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

/// Seed a small two-year warehouse shared by the integration tests.
///
/// 2023 holds three orders: two for customer 1 (Mountain-200, USA
/// territory) and one for customer 2 (Sport Helmet, United Kingdom).
/// 2022 holds a single order so the year list has two entries.
pub fn seed_warehouse(pool: &DbPool) {
    let mut conn = pool.get().expect("get connection");

    diesel::insert_into(dim_date::table)
        .values(&vec![
            (
                dim_date::date_key.eq(20230115),
                dim_date::full_date.eq(date(2023, 1, 15)),
                dim_date::calendar_year.eq(2023),
                dim_date::month_number.eq(1),
                dim_date::month_name.eq("January"),
                dim_date::quarter.eq(1),
            ),
            (
                dim_date::date_key.eq(20230220),
                dim_date::full_date.eq(date(2023, 2, 20)),
                dim_date::calendar_year.eq(2023),
                dim_date::month_number.eq(2),
                dim_date::month_name.eq("February"),
                dim_date::quarter.eq(1),
            ),
            (
                dim_date::date_key.eq(20220310),
                dim_date::full_date.eq(date(2022, 3, 10)),
                dim_date::calendar_year.eq(2022),
                dim_date::month_number.eq(3),
                dim_date::month_name.eq("March"),
                dim_date::quarter.eq(1),
            ),
        ])
        .execute(&mut conn)
        .expect("seed dim_date");

    diesel::insert_into(dim_product_category::table)
        .values(&vec![
            (
                dim_product_category::category_key.eq(1),
                dim_product_category::name.eq("Bikes"),
            ),
            (
                dim_product_category::category_key.eq(2),
                dim_product_category::name.eq("Accessories"),
            ),
        ])
        .execute(&mut conn)
        .expect("seed dim_product_category");

    diesel::insert_into(dim_product_subcategory::table)
        .values(&vec![
            (
                dim_product_subcategory::subcategory_key.eq(1),
                dim_product_subcategory::category_key.eq(1),
                dim_product_subcategory::name.eq("Mountain Bikes"),
            ),
            (
                dim_product_subcategory::subcategory_key.eq(2),
                dim_product_subcategory::category_key.eq(2),
                dim_product_subcategory::name.eq("Helmets"),
            ),
        ])
        .execute(&mut conn)
        .expect("seed dim_product_subcategory");

    diesel::insert_into(dim_product::table)
        .values(&vec![
            (
                dim_product::product_key.eq(1),
                dim_product::name.eq("Mountain-200"),
                dim_product::subcategory_key.eq(Some(1)),
            ),
            (
                dim_product::product_key.eq(2),
                dim_product::name.eq("Sport Helmet"),
                dim_product::subcategory_key.eq(Some(2)),
            ),
        ])
        .execute(&mut conn)
        .expect("seed dim_product");

    diesel::insert_into(dim_customer::table)
        .values(&vec![
            (
                dim_customer::customer_key.eq(1),
                dim_customer::first_name.eq("Avery"),
                dim_customer::last_name.eq("Brooks"),
                dim_customer::birth_date.eq(date(1990, 6, 15)),
                dim_customer::gender.eq("F"),
                dim_customer::occupation.eq("Professional"),
            ),
            (
                dim_customer::customer_key.eq(2),
                dim_customer::first_name.eq("Casey"),
                dim_customer::last_name.eq("Morgan"),
                dim_customer::birth_date.eq(date(1958, 2, 1)),
                dim_customer::gender.eq("M"),
                dim_customer::occupation.eq("Manual"),
            ),
        ])
        .execute(&mut conn)
        .expect("seed dim_customer");

    diesel::insert_into(dim_sales_territory::table)
        .values(&vec![
            (
                dim_sales_territory::territory_key.eq(1),
                dim_sales_territory::region.eq("Northwest"),
                dim_sales_territory::country.eq("United States"),
                dim_sales_territory::territory_group.eq("North America"),
            ),
            (
                dim_sales_territory::territory_key.eq(2),
                dim_sales_territory::region.eq("United Kingdom"),
                dim_sales_territory::country.eq("United Kingdom"),
                dim_sales_territory::territory_group.eq("Europe"),
            ),
        ])
        .execute(&mut conn)
        .expect("seed dim_sales_territory");

    diesel::insert_into(fact_sales::table)
        .values(&vec![
            (
                fact_sales::id.eq(1),
                fact_sales::order_date_key.eq(20230115),
                fact_sales::product_key.eq(1),
                fact_sales::customer_key.eq(1),
                fact_sales::territory_key.eq(1),
                fact_sales::order_quantity.eq(2),
                fact_sales::sales_amount.eq(3000.0),
                fact_sales::total_cost.eq(1800.0),
            ),
            (
                fact_sales::id.eq(2),
                fact_sales::order_date_key.eq(20230220),
                fact_sales::product_key.eq(2),
                fact_sales::customer_key.eq(2),
                fact_sales::territory_key.eq(2),
                fact_sales::order_quantity.eq(1),
                fact_sales::sales_amount.eq(150.0),
                fact_sales::total_cost.eq(60.0),
            ),
            (
                fact_sales::id.eq(3),
                fact_sales::order_date_key.eq(20230220),
                fact_sales::product_key.eq(1),
                fact_sales::customer_key.eq(1),
                fact_sales::territory_key.eq(1),
                fact_sales::order_quantity.eq(1),
                fact_sales::sales_amount.eq(1500.0),
                fact_sales::total_cost.eq(900.0),
            ),
            (
                fact_sales::id.eq(4),
                fact_sales::order_date_key.eq(20220310),
                fact_sales::product_key.eq(2),
                fact_sales::customer_key.eq(2),
                fact_sales::territory_key.eq(1),
                fact_sales::order_quantity.eq(5),
                fact_sales::sales_amount.eq(500.0),
                fact_sales::total_cost.eq(250.0),
            ),
        ])
        .execute(&mut conn)
        .expect("seed fact_sales");
}
