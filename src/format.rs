use std::collections::HashMap;

use lazy_static::lazy_static;

lazy_static! {
    /// Display names for countries whose warehouse names are too long for chart labels.
    static ref COUNTRY_SHORT_NAMES: HashMap<&'static str, &'static str> = {
        let mut names = HashMap::new();
        names.insert("United States", "USA");
        names.insert("United Kingdom", "UK");
        names
    };
}

/// Format a numeric value with K/M/B suffixes for dashboard metric cards.
///
/// Values of at least one billion or one million keep two decimal places,
/// the thousands range keeps one, and everything below a thousand is printed
/// plainly with two decimals.
pub fn format_number(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let magnitude = value.abs();

    if magnitude >= 1_000_000_000.0 {
        format!("{sign}{:.2}B", magnitude / 1_000_000_000.0)
    } else if magnitude >= 1_000_000.0 {
        format!("{sign}{:.2}M", magnitude / 1_000_000.0)
    } else if magnitude >= 1_000.0 {
        format!("{sign}{:.1}K", magnitude / 1_000.0)
    } else {
        format!("{sign}{magnitude:.2}")
    }
}

/// Map a warehouse country name onto its short display form.
///
/// Unknown names pass through unchanged.
pub fn short_country_name(name: &str) -> &str {
    COUNTRY_SHORT_NAMES.get(name).copied().unwrap_or(name)
}
