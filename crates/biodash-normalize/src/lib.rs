#![deny(unsafe_code)]

//! Field normalization for the dashboard core.
//!
//! Normalization maps each raw row to a typed
//! [`NormalizedRecord`](biodash_model::NormalizedRecord), coercing every
//! recognized column to its semantic type. It is a total function over cell
//! contents: a value that cannot be interpreted becomes an explicit unknown
//! rather than an error, so one malformed column never costs an otherwise
//! usable record. The one exception is the required-location precondition,
//! which silently drops the record (a filter, not a failure).
//!
//! Parsing helpers live in their own modules so each messy shape the source
//! data takes (ambiguous dates, string percentages, currency text,
//! inconsistent year encodings) has exactly one implementation.

pub mod date;
pub mod numeric;
pub mod percent;
pub mod record;
pub mod text;
pub mod year;

pub use date::parse_date;
pub use numeric::{parse_count, parse_currency};
pub use percent::parse_percent;
pub use record::{NormalizeOptions, normalize_record, normalize_table};
pub use text::{canonical_role, clean_text};
pub use year::resolve_year;
