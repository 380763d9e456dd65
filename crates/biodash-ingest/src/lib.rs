#![deny(unsafe_code)]

//! CSV ingestion for the dashboard core.
//!
//! A source table is comma-separated text with the column headers on the
//! first line, read either from a filesystem path or over HTTP(S). Rows
//! come back as [`RawRecord`](biodash_model::RawRecord)s with cell text
//! exactly as read; all interpretation happens later, in normalization.
//!
//! Loading is the one fallible stage of the pipeline: a missing file, a
//! failed fetch, or malformed CSV framing propagates as an [`IngestError`].
//! There is no retry policy; the caller decides how to surface the failure.

mod csv_table;
mod error;
mod source;

pub use csv_table::{fetch_csv_url, read_csv_path, read_records};
pub use error::IngestError;
pub use source::{DataSource, load_records};
