#![deny(unsafe_code)]

//! Shared data model for the biodash dashboard core.
//!
//! The model is deliberately small: a raw row as read from a source table,
//! the normalized record the field normalizer produces, the month bucket
//! used by time series, the registry of recognized column names, the US
//! state table the choropleth needs, and the explicit UI selection state.

pub mod columns;
pub mod record;
pub mod selection;
pub mod states;

pub use record::{NormalizedRecord, RawRecord, YearMonth};
pub use selection::{Scene, Selection};
pub use states::{is_us_state, state_abbreviation};
