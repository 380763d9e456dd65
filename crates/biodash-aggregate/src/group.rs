//! Composite-key grouping.

use std::collections::BTreeMap;
use std::fmt;

use biodash_model::NormalizedRecord;

use crate::reduce::{Reducer, Statistic, reduce};

/// One level of a grouping key.
///
/// `Unknown` is a first-class bucket so rows with an unresolvable key stay
/// visible in the result instead of silently vanishing; callers that want
/// them gone filter before grouping. `Unknown` sorts after every known key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GroupKey {
    Known(String),
    Unknown,
}

impl GroupKey {
    /// Key from an optional record field; `None` buckets under `Unknown`.
    pub fn from_field<T: ToString>(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Known(value.to_string()),
            None => Self::Unknown,
        }
    }

    pub fn as_known(&self) -> Option<&str> {
        match self {
            Self::Known(key) => Some(key),
            Self::Unknown => None,
        }
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(key) => f.write_str(key),
            Self::Unknown => f.write_str("Unknown"),
        }
    }
}

/// Key extractor for one grouping level.
pub type KeyFn = dyn Fn(&NormalizedRecord) -> GroupKey;

/// Value extractor feeding a numeric reduction; `None` is unknown.
pub type ValueFn = dyn Fn(&NormalizedRecord) -> Option<f64>;

/// A rollup result: nested maps, one level per grouping key, with the
/// reduced statistic at the leaves.
#[derive(Debug, Clone, PartialEq)]
pub enum Rollup {
    Leaf(Statistic),
    Nested(BTreeMap<GroupKey, Rollup>),
}

impl Rollup {
    /// The nested map at this level; `None` on a leaf.
    pub fn groups(&self) -> Option<&BTreeMap<GroupKey, Rollup>> {
        match self {
            Self::Nested(groups) => Some(groups),
            Self::Leaf(_) => None,
        }
    }

    /// The reduced statistic; `None` on a nested node.
    pub fn statistic(&self) -> Option<&Statistic> {
        match self {
            Self::Leaf(statistic) => Some(statistic),
            Self::Nested(_) => None,
        }
    }
}

/// Group records by the key extractors, in order, and reduce each innermost
/// group.
///
/// Keys are unique per level by construction and insertion order never
/// matters; the result iterates in key order, and any presentation sort is
/// the caller's business. A key extractor that panics is a programming
/// error and is deliberately not caught here.
pub fn rollup(
    records: &[&NormalizedRecord],
    keys: &[&KeyFn],
    value: &ValueFn,
    reducer: Reducer,
) -> Rollup {
    match keys.split_first() {
        None => Rollup::Leaf(reduce(
            records.iter().map(|record| value(record)),
            reducer,
        )),
        Some((key, rest)) => {
            let mut groups: BTreeMap<GroupKey, Vec<&NormalizedRecord>> = BTreeMap::new();
            for record in records {
                groups.entry(key(record)).or_default().push(record);
            }
            Rollup::Nested(
                groups
                    .into_iter()
                    .map(|(group, members)| (group, rollup(&members, rest, value, reducer)))
                    .collect(),
            )
        }
    }
}

/// [`rollup`] over an owned record slice.
pub fn rollup_records(
    records: &[NormalizedRecord],
    keys: &[&KeyFn],
    value: &ValueFn,
    reducer: Reducer,
) -> Rollup {
    let refs: Vec<&NormalizedRecord> = records.iter().collect();
    rollup(&refs, keys, value, reducer)
}
