//! Textual date parsing.
//!
//! The source data writes dates a handful of ways: `11-Dec-24`, `28-Jan`,
//! `Jan 28`, `January 28`. Patterns are tried in a fixed priority order and
//! the first match wins; that ordering is the tie-break for text that is
//! ambiguous between formats. Patterns without a year get one backfilled
//! from the row's year column when it resolved, else from the caller's
//! default year. Text matching no pattern is absent, never fabricated.

use chrono::{Datelike, NaiveDate};

/// Placeholder year spliced into the year-less patterns for parsing; a leap
/// year, so `29-Feb` stays parseable until the real year is known.
const PLACEHOLDER_YEAR: i32 = 2000;

/// Parse one date cell.
///
/// `year_hint` is the row's resolved year column; `default_year` is the
/// caller's fallback when that column is missing or unusable.
pub fn parse_date(value: &str, year_hint: Option<i32>, default_year: i32) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    // Day-month with a 2-digit year carries its own year: 11-Dec-24.
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%d-%b-%y") {
        return Some(date);
    }

    // Year-less patterns, backfilled: 28-Jan, Jan 28, January 28.
    let candidates = [
        (format!("{trimmed}-{PLACEHOLDER_YEAR}"), "%d-%b-%Y"),
        (format!("{trimmed} {PLACEHOLDER_YEAR}"), "%b %d %Y"),
        (format!("{trimmed} {PLACEHOLDER_YEAR}"), "%B %d %Y"),
    ];
    for (padded, format) in candidates {
        if let Ok(date) = NaiveDate::parse_from_str(&padded, format) {
            let year = year_hint.unwrap_or(default_year);
            // with_year is None when the day does not exist in the target
            // year (29-Feb backfilled into a non-leap year); that date is
            // absent rather than invented.
            return date.with_year(year);
        }
    }
    None
}
