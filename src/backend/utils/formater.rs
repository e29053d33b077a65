//! Display formatting for lease values.

use crate::backend::api::models::RentAmount;
use chrono::{DateTime, NaiveDate};

/// Currency prefix for rent amounts.
pub const CURRENCY: &str = "AED";

/// Groups a number with comma thousands separators, keeping up to three
/// fraction digits.
pub fn group_thousands(value: f64) -> String {
    let rounded = format!("{:.3}", value.abs());
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let is_zero = grouped == "0" && frac_part.is_empty();
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };

    if frac_part.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac_part}")
    }
}

/// Formats rent as `AED 120,000`. Values that are not numeric are shown as sent.
pub fn format_rent(amount: &RentAmount) -> String {
    match amount.as_number() {
        Some(value) => format!("{CURRENCY} {}", group_thousands(value)),
        None => format!("{CURRENCY} {}", amount.to_string().trim()),
    }
}

/// Formats `2025-12-31` (or an RFC 3339 timestamp) as `31 December 2025`.
pub fn format_end_date(raw: &str) -> String {
    let raw = raw.trim();
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()));

    match date {
        Some(date) => date.format("%-d %B %Y").to_string(),
        None => raw.to_string(),
    }
}

/// Header badge text, e.g. `1 Active Lease` or `3 Active Leases`.
pub fn lease_badge(count: usize) -> String {
    let unit = if count == 1 { "Lease" } else { "Leases" };
    format!("{count} Active {unit}")
}
