use serde::{Deserialize, Serialize};

/// Warehouse-wide sales totals for a single calendar year.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SalesTotals {
    /// Total sales amount.
    pub sales_amount: f64,
    /// Total product cost.
    pub total_cost: f64,
    /// Total number of units sold.
    pub order_quantity: i64,
    /// Number of fact rows (orders) recorded for the year.
    pub order_count: i64,
}

impl SalesTotals {
    /// Profit derived from the recorded amount and cost.
    pub fn profit(&self) -> f64 {
        self.sales_amount - self.total_cost
    }
}

/// Sales aggregated per calendar month of the selected year.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlySales {
    /// Month number within the year (1-based).
    pub month_number: i32,
    /// Human-readable month name from the date dimension.
    pub month_name: String,
    /// Sales amount recorded in the month.
    pub sales_amount: f64,
    /// Units sold in the month.
    pub order_quantity: i64,
}

/// Sales aggregated per product category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategorySales {
    /// Product category name.
    pub category: String,
    /// Sales amount attributed to the category.
    pub sales_amount: f64,
}

/// Sales aggregated per sales-territory country.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CountrySales {
    /// Country name as displayed on the dashboard.
    pub country: String,
    /// Sales amount attributed to the country.
    pub sales_amount: f64,
}

/// One row of the top-products-by-revenue table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductSales {
    /// Product name.
    pub product: String,
    /// Sales amount attributed to the product.
    pub sales_amount: f64,
    /// Units of the product sold.
    pub order_quantity: i64,
}
