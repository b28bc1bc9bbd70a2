use std::collections::BTreeMap;

use chrono::Datelike;
use serde::Serialize;

use crate::TOP_RESULTS_LIMIT;
use crate::domain::customer::{
    AgeBand, AgeBandSales, CustomerRevenue, GenderSales, OccupationSales, TopCustomer,
};
use crate::domain::dashboard::{DashboardPage, MetricCard};
use crate::repository::{CustomerReader, YearReader};
use crate::services::years::{YearCache, resolve_year};
use crate::services::{DashboardQuery, ServiceResult};

/// Data required to render the customer analysis page.
#[derive(Debug, Serialize)]
pub struct CustomerAnalysisData {
    /// Page identifier used by the sidebar.
    pub page: DashboardPage,
    /// Year the aggregates were computed for.
    pub year: i32,
    /// Years selectable in the sidebar.
    pub years: Vec<i32>,
    /// Summary metric cards.
    pub cards: Vec<MetricCard>,
    /// Revenue and customer counts per gender code.
    pub genders: Vec<GenderSales>,
    /// Revenue and customer counts per occupation, highest revenue first.
    pub occupations: Vec<OccupationSales>,
    /// Revenue and customer counts per age band, youngest first.
    pub age_bands: Vec<AgeBandSales>,
    /// Top customers by revenue.
    pub top_customers: Vec<TopCustomer>,
}

/// Loads every aggregate shown on the customer analysis page.
pub fn load_customer_analysis<R>(
    repo: &R,
    years: &YearCache,
    query: DashboardQuery,
) -> ServiceResult<CustomerAnalysisData>
where
    R: CustomerReader + YearReader + ?Sized,
{
    let available = years.get_or_load(repo)?;
    let year = resolve_year(query.year, &available);

    let totals = repo.customer_totals(year)?;
    let cards = vec![
        MetricCard::count("Customers", totals.customer_count),
        MetricCard::count("Orders", totals.order_count),
        MetricCard::new("Total Revenue", totals.sales_amount),
        MetricCard::new("Revenue per Customer", totals.revenue_per_customer()),
    ];

    let genders = repo.sales_by_gender(year)?;
    let occupations = repo.sales_by_occupation(year)?;
    let age_bands = age_band_breakdown(repo.customer_revenue(year)?, year);
    let top_customers = repo.top_customers(year, TOP_RESULTS_LIMIT)?;

    Ok(CustomerAnalysisData {
        page: DashboardPage::CustomerAnalysis,
        year,
        years: available,
        cards,
        genders,
        occupations,
        age_bands,
        top_customers,
    })
}

/// Bucket per-customer revenue rows into age bands.
///
/// Age is measured against the selected year. Bands nobody falls into
/// are omitted; the rest come back youngest first.
pub fn age_band_breakdown(rows: Vec<CustomerRevenue>, year: i32) -> Vec<AgeBandSales> {
    let mut bands: BTreeMap<AgeBand, (i64, f64)> = BTreeMap::new();

    for row in rows {
        let age = year - row.birth_date.year();
        let entry = bands.entry(AgeBand::for_age(age)).or_insert((0, 0.0));
        entry.0 += 1;
        entry.1 += row.sales_amount;
    }

    bands
        .into_iter()
        .map(|(band, (customer_count, sales_amount))| AgeBandSales {
            label: band.label().to_string(),
            customer_count,
            sales_amount,
        })
        .collect()
}
