use diesel::prelude::*;

use crate::domain::sales::{
    CategorySales as DomainCategorySales, CountrySales as DomainCountrySales,
    MonthlySales as DomainMonthlySales, ProductSales as DomainProductSales,
    SalesTotals as DomainSalesTotals,
};

/// Aggregate row behind the sales-overview metric cards.
///
/// Sums come back `NULL` when the selected year has no fact rows.
#[derive(Debug, Queryable)]
pub struct SalesTotalsRow {
    pub sales_amount: Option<f64>,
    pub total_cost: Option<f64>,
    pub order_quantity: Option<i64>,
    pub order_count: i64,
}

#[derive(Debug, Queryable)]
pub struct MonthlySalesRow {
    pub month_number: i32,
    pub month_name: String,
    pub sales_amount: Option<f64>,
    pub order_quantity: Option<i64>,
}

#[derive(Debug, Queryable)]
pub struct CategorySalesRow {
    pub category: String,
    pub sales_amount: Option<f64>,
}

#[derive(Debug, Queryable)]
pub struct CountrySalesRow {
    pub country: String,
    pub sales_amount: Option<f64>,
}

#[derive(Debug, Queryable)]
pub struct ProductSalesRow {
    pub product: String,
    pub sales_amount: Option<f64>,
    pub order_quantity: Option<i64>,
}

impl From<SalesTotalsRow> for DomainSalesTotals {
    fn from(value: SalesTotalsRow) -> Self {
        Self {
            sales_amount: value.sales_amount.unwrap_or_default(),
            total_cost: value.total_cost.unwrap_or_default(),
            order_quantity: value.order_quantity.unwrap_or_default(),
            order_count: value.order_count,
        }
    }
}

impl From<MonthlySalesRow> for DomainMonthlySales {
    fn from(value: MonthlySalesRow) -> Self {
        Self {
            month_number: value.month_number,
            month_name: value.month_name,
            sales_amount: value.sales_amount.unwrap_or_default(),
            order_quantity: value.order_quantity.unwrap_or_default(),
        }
    }
}

impl From<CategorySalesRow> for DomainCategorySales {
    fn from(value: CategorySalesRow) -> Self {
        Self {
            category: value.category,
            sales_amount: value.sales_amount.unwrap_or_default(),
        }
    }
}

impl From<CountrySalesRow> for DomainCountrySales {
    fn from(value: CountrySalesRow) -> Self {
        Self {
            country: value.country,
            sales_amount: value.sales_amount.unwrap_or_default(),
        }
    }
}

impl From<ProductSalesRow> for DomainProductSales {
    fn from(value: ProductSalesRow) -> Self {
        Self {
            product: value.product,
            sales_amount: value.sales_amount.unwrap_or_default(),
            order_quantity: value.order_quantity.unwrap_or_default(),
        }
    }
}
