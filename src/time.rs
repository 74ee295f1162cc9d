//! Wikibase time strings
//!
//! Wikibase times look like ISO-8601 but carry an explicit sign and allow
//! `00` month/day components for coarse dates, so `chrono` cannot parse
//! them directly. Formatting from a `chrono` date is straightforward.

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;

static WIKIBASE_TIME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]\d{4,}-(0\d|1[0-2])-([0-2]\d|3[01])T([01]\d|2[0-3]):[0-5]\d:[0-5]\dZ$")
        .expect("valid wikibase time pattern")
});

/// Check whether a string follows the Wikibase time syntax
///
/// Accepts `+2017-00-00T00:00:00Z` style year-only values.
pub fn is_wikibase_time(value: &str) -> bool {
    WIKIBASE_TIME_RE.is_match(value)
}

/// Format a calendar date as a Wikibase time string
pub fn wikibase_time_from_date(date: NaiveDate) -> String {
    format!(
        "{}-{:02}-{:02}T00:00:00Z",
        signed_year(date.year()),
        date.month(),
        date.day()
    )
}

/// Format a bare year as a Wikibase time string
pub fn wikibase_time_from_year(year: i32) -> String {
    format!("{}-00-00T00:00:00Z", signed_year(year))
}

fn signed_year(year: i32) -> String {
    let sign = if year < 0 { '-' } else { '+' };
    format!("{}{:04}", sign, year.unsigned_abs())
}
