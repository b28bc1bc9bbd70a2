use serde::Serialize;

use crate::TOP_RESULTS_LIMIT;
use crate::domain::dashboard::{DashboardPage, MetricCard};
use crate::domain::sales::{CategorySales, CountrySales, MonthlySales, ProductSales};
use crate::format::short_country_name;
use crate::repository::{SalesReader, YearReader};
use crate::services::years::{YearCache, resolve_year};
use crate::services::{DashboardQuery, ServiceResult};

/// Data required to render the sales overview page.
#[derive(Debug, Serialize)]
pub struct SalesOverviewData {
    /// Page identifier used by the sidebar.
    pub page: DashboardPage,
    /// Year the aggregates were computed for.
    pub year: i32,
    /// Years selectable in the sidebar.
    pub years: Vec<i32>,
    /// Summary metric cards.
    pub cards: Vec<MetricCard>,
    /// Monthly sales series ordered by month number.
    pub monthly: Vec<MonthlySales>,
    /// Sales per product category, highest revenue first.
    pub categories: Vec<CategorySales>,
    /// Sales per territory country with display names remapped.
    pub countries: Vec<CountrySales>,
    /// Top products by revenue.
    pub top_products: Vec<ProductSales>,
}

/// Loads every aggregate shown on the sales overview page.
pub fn load_sales_overview<R>(
    repo: &R,
    years: &YearCache,
    query: DashboardQuery,
) -> ServiceResult<SalesOverviewData>
where
    R: SalesReader + YearReader + ?Sized,
{
    let available = years.get_or_load(repo)?;
    let year = resolve_year(query.year, &available);

    let totals = repo.sales_totals(year)?;
    let cards = vec![
        MetricCard::new("Total Sales", totals.sales_amount),
        MetricCard::new("Total Cost", totals.total_cost),
        MetricCard::new("Total Profit", totals.profit()),
        MetricCard::count("Units Sold", totals.order_quantity),
        MetricCard::count("Orders", totals.order_count),
    ];

    let monthly = repo.monthly_sales(year)?;
    let categories = repo.sales_by_category(year)?;

    let countries = repo
        .sales_by_country(year)?
        .into_iter()
        .map(|mut row| {
            row.country = short_country_name(&row.country).to_string();
            row
        })
        .collect();

    let top_products = repo.top_products(year, TOP_RESULTS_LIMIT)?;

    Ok(SalesOverviewData {
        page: DashboardPage::SalesOverview,
        year,
        years: available,
        cards,
        monthly,
        categories,
        countries,
        top_products,
    })
}
