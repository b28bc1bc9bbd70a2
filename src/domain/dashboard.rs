use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::format::format_number;

/// Error returned when a string names no dashboard page.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown dashboard page: {0}")]
pub struct ParsePageError(String);

/// Analysis pages selectable from the dashboard sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DashboardPage {
    SalesOverview,
    CustomerAnalysis,
}

impl DashboardPage {
    /// All pages in sidebar order.
    pub const ALL: [DashboardPage; 2] = [DashboardPage::SalesOverview, DashboardPage::CustomerAnalysis];

    /// Title shown in the sidebar and page header.
    pub fn title(&self) -> &'static str {
        match self {
            DashboardPage::SalesOverview => "Sales Overview",
            DashboardPage::CustomerAnalysis => "Customer Analysis",
        }
    }

    /// Route serving the page.
    pub fn path(&self) -> &'static str {
        match self {
            DashboardPage::SalesOverview => "/",
            DashboardPage::CustomerAnalysis => "/customers",
        }
    }
}

impl FromStr for DashboardPage {
    type Err = ParsePageError;

    /// Parses the identifiers the pages serialize to.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sales_overview" => Ok(DashboardPage::SalesOverview),
            "customer_analysis" => Ok(DashboardPage::CustomerAnalysis),
            other => Err(ParsePageError(other.to_string())),
        }
    }
}

/// Sidebar entry describing one dashboard page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PageLink {
    /// Page identifier.
    pub page: DashboardPage,
    /// Title shown in the sidebar.
    pub title: String,
    /// Route serving the page.
    pub path: String,
}

impl From<DashboardPage> for PageLink {
    fn from(page: DashboardPage) -> Self {
        Self {
            page,
            title: page.title().to_string(),
            path: page.path().to_string(),
        }
    }
}

/// Summary metric rendered as a card at the top of a dashboard page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetricCard {
    /// Metric label.
    pub label: String,
    /// Human-readable value with a K/M/B suffix where applicable.
    pub value: String,
    /// Raw numeric value behind the card.
    pub raw: f64,
}

impl MetricCard {
    /// Build a card for a monetary or otherwise fractional value.
    pub fn new(label: impl Into<String>, raw: f64) -> Self {
        Self {
            label: label.into(),
            value: format_number(raw),
            raw,
        }
    }

    /// Build a card for an integral count.
    pub fn count(label: impl Into<String>, count: i64) -> Self {
        Self::new(label, count as f64)
    }
}
