use chrono::NaiveDate;
use diesel::prelude::*;

use crate::domain::customer::{
    CustomerRevenue as DomainCustomerRevenue, CustomerTotals as DomainCustomerTotals,
    GenderSales as DomainGenderSales, OccupationSales as DomainOccupationSales,
    TopCustomer as DomainTopCustomer,
};

/// Aggregate row behind the customer-analysis metric cards.
///
/// The revenue sum comes back `NULL` when the selected year has no fact rows.
#[derive(Debug, Queryable)]
pub struct CustomerTotalsRow {
    pub customer_count: i64,
    pub order_count: i64,
    pub sales_amount: Option<f64>,
}

#[derive(Debug, Queryable)]
pub struct GenderSalesRow {
    pub gender: String,
    pub customer_count: i64,
    pub sales_amount: Option<f64>,
}

#[derive(Debug, Queryable)]
pub struct OccupationSalesRow {
    pub occupation: String,
    pub customer_count: i64,
    pub sales_amount: Option<f64>,
}

#[derive(Debug, Queryable)]
pub struct CustomerRevenueRow {
    pub customer_key: i32,
    pub birth_date: NaiveDate,
    pub sales_amount: Option<f64>,
}

#[derive(Debug, Queryable)]
pub struct TopCustomerRow {
    pub first_name: String,
    pub last_name: String,
    pub sales_amount: Option<f64>,
    pub order_count: i64,
}

impl From<CustomerTotalsRow> for DomainCustomerTotals {
    fn from(value: CustomerTotalsRow) -> Self {
        Self {
            customer_count: value.customer_count,
            order_count: value.order_count,
            sales_amount: value.sales_amount.unwrap_or_default(),
        }
    }
}

impl From<GenderSalesRow> for DomainGenderSales {
    fn from(value: GenderSalesRow) -> Self {
        Self {
            gender: value.gender,
            customer_count: value.customer_count,
            sales_amount: value.sales_amount.unwrap_or_default(),
        }
    }
}

impl From<OccupationSalesRow> for DomainOccupationSales {
    fn from(value: OccupationSalesRow) -> Self {
        Self {
            occupation: value.occupation,
            customer_count: value.customer_count,
            sales_amount: value.sales_amount.unwrap_or_default(),
        }
    }
}

impl From<CustomerRevenueRow> for DomainCustomerRevenue {
    fn from(value: CustomerRevenueRow) -> Self {
        Self {
            customer_key: value.customer_key,
            birth_date: value.birth_date,
            sales_amount: value.sales_amount.unwrap_or_default(),
        }
    }
}

impl From<TopCustomerRow> for DomainTopCustomer {
    fn from(value: TopCustomerRow) -> Self {
        Self {
            name: format!("{} {}", value.first_name, value.last_name),
            sales_amount: value.sales_amount.unwrap_or_default(),
            order_count: value.order_count,
        }
    }
}
