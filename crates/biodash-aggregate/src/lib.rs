#![deny(unsafe_code)]

//! Grouping and aggregation over normalized dashboard records.
//!
//! Two layers live here. The grouping engine ([`rollup`]) takes a list of
//! key extractors and a reducer and produces nested maps, with unknown
//! values excluded from numeric reductions but never conflated with zero.
//! On top of it, [`rollups`] holds the named aggregations the dashboard's
//! charts consume, and [`bundle`] packages them for the rendering layer.
//!
//! Aggregates are recomputed from scratch on every call: there is no cache
//! and no incremental update, so re-running on the same input always yields
//! the same output.

pub mod bundle;
pub mod group;
pub mod reduce;
pub mod rollups;

pub use bundle::{BundleOptions, DashboardBundle, build_bundle};
pub use group::{GroupKey, KeyFn, Rollup, ValueFn, rollup, rollup_records};
pub use reduce::{Reducer, Statistic, Summary, reduce, summarize};
