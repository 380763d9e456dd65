use std::collections::BTreeMap;
use std::fmt;

use chrono::{Datelike, NaiveDate};

/// One row of a source table, exactly as read: column name to raw cell text.
///
/// Raw records are immutable once read and discarded after normalization;
/// nothing downstream holds onto them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    cells: BTreeMap<String, String>,
}

impl RawRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.cells.insert(column.into(), value.into());
    }

    /// Raw cell text for a column, untouched. A column the source never had
    /// and a cell a short row was missing both come back as `None`.
    pub fn field(&self, column: &str) -> Option<&str> {
        self.cells.get(column).map(String::as_str)
    }

    /// First of `columns` holding a non-blank cell.
    ///
    /// This is the fallback chain the source data needs for fields that
    /// moved between column names across exports (state, country, percent).
    pub fn first_of(&self, columns: &[&str]) -> Option<&str> {
        columns
            .iter()
            .filter_map(|column| self.field(column))
            .find(|value| !value.trim().is_empty())
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl FromIterator<(String, String)> for RawRecord {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

/// Calendar month bucket, ordered chronologically.
///
/// Renders as `YYYY-MM`, the key format the monthly series consume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl From<NaiveDate> for YearMonth {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// A source row after field normalization.
///
/// Every field is optional: a value the normalizer could not interpret is
/// `None` ("unknown"), never an error and never a substituted zero. Records
/// are only dropped wholesale when they lack the required location key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedRecord {
    /// Report year; from the `Year` column when usable, else the date.
    pub year: Option<i32>,
    /// Event date, when one of the recognized textual formats matched.
    pub date: Option<NaiveDate>,
    /// `(year, month)` bucket of `date`.
    pub month: Option<YearMonth>,
    pub company: Option<String>,
    /// US state, or the layoff tracker's free-text US location.
    pub state: Option<String>,
    pub country: Option<String>,
    pub note: Option<String>,
    /// Job title, with the closed canonicalization applied.
    pub role: Option<String>,
    /// Workforce reduction in percent, within [0, 100].
    pub percent_reduction: Option<f64>,
    pub num_laid_off: Option<i64>,
    pub employees_left: Option<i64>,
    /// Annual base salary in dollars; non-negative by construction.
    pub salary: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_is_raw_and_missing_is_none() {
        let mut row = RawRecord::new();
        row.insert("Company", "  Acme Bio  ");
        assert_eq!(row.field("Company"), Some("  Acme Bio  "));
        assert_eq!(row.field("Year"), None);
    }

    #[test]
    fn first_of_skips_blank_cells() {
        let mut row = RawRecord::new();
        row.insert("US State", "   ");
        row.insert("State_inferred", "Massachusetts");
        assert_eq!(
            row.first_of(&["US State", "State_inferred"]),
            Some("Massachusetts")
        );
        assert_eq!(row.first_of(&["Location (US)"]), None);
    }

    #[test]
    fn year_month_display_pads() {
        let ym = YearMonth::from(NaiveDate::from_ymd_opt(2024, 3, 9).unwrap());
        assert_eq!(ym.to_string(), "2024-03");
    }

    #[test]
    fn year_month_orders_chronologically() {
        let a = YearMonth {
            year: 2023,
            month: 12,
        };
        let b = YearMonth {
            year: 2024,
            month: 1,
        };
        assert!(a < b);
    }
}
