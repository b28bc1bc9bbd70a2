use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Customer-level totals for a single calendar year.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CustomerTotals {
    /// Number of distinct customers with at least one order in the year.
    pub customer_count: i64,
    /// Number of orders recorded for the year.
    pub order_count: i64,
    /// Total revenue recorded for the year.
    pub sales_amount: f64,
}

impl CustomerTotals {
    /// Average revenue per active customer; zero when no customer ordered.
    pub fn revenue_per_customer(&self) -> f64 {
        if self.customer_count == 0 {
            0.0
        } else {
            self.sales_amount / self.customer_count as f64
        }
    }
}

/// Revenue and customer counts aggregated per gender code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenderSales {
    /// Gender code as stored in the customer dimension.
    pub gender: String,
    /// Distinct customers with the gender code.
    pub customer_count: i64,
    /// Revenue attributed to the gender code.
    pub sales_amount: f64,
}

/// Revenue and customer counts aggregated per occupation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OccupationSales {
    /// Occupation as stored in the customer dimension.
    pub occupation: String,
    /// Distinct customers with the occupation.
    pub customer_count: i64,
    /// Revenue attributed to the occupation.
    pub sales_amount: f64,
}

/// Per-customer revenue for the selected year, input to age banding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomerRevenue {
    /// Customer dimension key.
    pub customer_key: i32,
    /// Customer birth date.
    pub birth_date: NaiveDate,
    /// Revenue attributed to the customer in the year.
    pub sales_amount: f64,
}

/// Fixed age brackets used by the customer analysis page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeBand {
    Under25,
    From25To34,
    From35To44,
    From45To54,
    From55To64,
    Over64,
}

impl AgeBand {
    /// All bands in ascending age order.
    pub const ALL: [AgeBand; 6] = [
        AgeBand::Under25,
        AgeBand::From25To34,
        AgeBand::From35To44,
        AgeBand::From45To54,
        AgeBand::From55To64,
        AgeBand::Over64,
    ];

    /// Band covering the given age in years.
    pub fn for_age(age: i32) -> Self {
        match age {
            i32::MIN..=24 => AgeBand::Under25,
            25..=34 => AgeBand::From25To34,
            35..=44 => AgeBand::From35To44,
            45..=54 => AgeBand::From45To54,
            55..=64 => AgeBand::From55To64,
            _ => AgeBand::Over64,
        }
    }

    /// Display label used on the dashboard.
    pub fn label(&self) -> &'static str {
        match self {
            AgeBand::Under25 => "Under 25",
            AgeBand::From25To34 => "25-34",
            AgeBand::From35To44 => "35-44",
            AgeBand::From45To54 => "45-54",
            AgeBand::From55To64 => "55-64",
            AgeBand::Over64 => "65+",
        }
    }
}

/// Revenue and customer counts aggregated per age band.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AgeBandSales {
    /// Age band display label.
    pub label: String,
    /// Distinct customers in the band.
    pub customer_count: i64,
    /// Revenue attributed to the band.
    pub sales_amount: f64,
}

/// One row of the top-customers-by-revenue table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TopCustomer {
    /// Customer display name.
    pub name: String,
    /// Revenue attributed to the customer.
    pub sales_amount: f64,
    /// Number of orders the customer placed in the year.
    pub order_count: i64,
}
