//! Recognized source-table column names (exact, case-sensitive).
//!
//! Two datasets feed the dashboard: the layoff tracker export and the
//! salary survey export. Both are comma-separated with the header on the
//! first line. Columns not listed here pass through ingestion untouched and
//! are ignored by normalization.

pub const DATE: &str = "Date";
pub const YEAR: &str = "Year";
pub const COMPANY: &str = "Company";
pub const NUM_LAID_OFF: &str = "No of employees affected";
pub const EMPLOYEES_LEFT: &str = "Employees left";
pub const LOCATION_US: &str = "Location (US)";
pub const NOTES: &str = "Notes";
pub const COUNTRY_NON_US: &str = "Country (non-US)";
pub const SALARY: &str = "Annual Base Salary";
pub const US_STATE: &str = "US State";
pub const STATE_INFERRED: &str = "State_inferred";
pub const JOB_TITLE: &str = "Job Title";
pub const COUNTRY: &str = "Country";

/// The reduction column appears with three spellings across exports.
pub const PERCENT_REDUCTION: &[&str] =
    &["% reduction", "% Reduction", "% Headcount Reduction"];

/// Location fallback chain: survey state, inferred state, tracker location.
pub const STATE: &[&str] = &[US_STATE, STATE_INFERRED, LOCATION_US];

/// Country fallback chain: survey country, tracker non-US country.
pub const COUNTRY_ANY: &[&str] = &[COUNTRY, COUNTRY_NON_US];
