//! Row normalization: one raw record in, one normalized record (or a
//! deliberate drop) out.

use chrono::Datelike;
use tracing::{debug, trace};

use biodash_model::{NormalizedRecord, RawRecord, YearMonth, columns};

use crate::date::parse_date;
use crate::numeric::{parse_count, parse_currency};
use crate::percent::parse_percent;
use crate::text::{canonical_role, clean_text};
use crate::year::resolve_year;

/// Knobs for a normalization pass.
#[derive(Debug, Clone)]
pub struct NormalizeOptions {
    /// Year assumed for a year-less date when the year column is missing
    /// or unusable.
    pub default_year: i32,
    /// Drop records with no resolvable location. On for the layoff
    /// tracker; the salary survey keeps nationwide rows by turning it off.
    pub require_location: bool,
}

impl NormalizeOptions {
    pub fn new(default_year: i32) -> Self {
        Self {
            default_year,
            require_location: true,
        }
    }

    /// Keep records whose location never resolves.
    #[must_use]
    pub fn keep_missing_location(mut self) -> Self {
        self.require_location = false;
        self
    }
}

/// Normalize one row.
///
/// Total over cell contents: a field that cannot be interpreted becomes
/// unknown and the record survives. The only way to lose a record is the
/// missing-location precondition, which is a filter, not a failure.
pub fn normalize_record(row: &RawRecord, options: &NormalizeOptions) -> Option<NormalizedRecord> {
    let state = row.first_of(columns::STATE).and_then(clean_text);
    if options.require_location && state.is_none() {
        trace!("dropping record with no resolvable location");
        return None;
    }

    let year_column = row.field(columns::YEAR).and_then(resolve_year);
    let date = row
        .field(columns::DATE)
        .and_then(|text| parse_date(text, year_column, options.default_year));
    let year = year_column.or_else(|| date.map(|d| d.year()));
    let month = date.map(YearMonth::from);

    Some(NormalizedRecord {
        year,
        date,
        month,
        company: row.field(columns::COMPANY).and_then(clean_text),
        state,
        country: row.first_of(columns::COUNTRY_ANY).and_then(clean_text),
        note: row.field(columns::NOTES).and_then(clean_text),
        role: row.field(columns::JOB_TITLE).and_then(canonical_role),
        percent_reduction: row
            .first_of(columns::PERCENT_REDUCTION)
            .and_then(parse_percent),
        num_laid_off: row.field(columns::NUM_LAID_OFF).and_then(parse_count),
        employees_left: row.field(columns::EMPLOYEES_LEFT).and_then(parse_count),
        salary: row.field(columns::SALARY).and_then(parse_currency),
    })
}

/// Normalize a whole table, dropping records per the options.
pub fn normalize_table(rows: &[RawRecord], options: &NormalizeOptions) -> Vec<NormalizedRecord> {
    let records: Vec<NormalizedRecord> = rows
        .iter()
        .filter_map(|row| normalize_record(row, options))
        .collect();
    debug!(
        input = rows.len(),
        kept = records.len(),
        "normalized table"
    );
    records
}
