//! Reducers with explicit-unknown semantics.

/// Supported reductions over one grouped value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reducer {
    /// Size of the group, defined value or not.
    Count,
    Mean,
    Min,
    Max,
}

/// A reduced statistic.
///
/// `Value(None)` means the group had no defined values for the requested
/// reduction. It is never collapsed to zero: "no data observed" and "zero
/// observed" must stay distinguishable all the way to the screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Statistic {
    Count(u64),
    Value(Option<f64>),
}

impl Statistic {
    pub fn as_count(&self) -> Option<u64> {
        match self {
            Self::Count(count) => Some(*count),
            Self::Value(_) => None,
        }
    }

    pub fn as_value(&self) -> Option<f64> {
        match self {
            Self::Value(value) => *value,
            Self::Count(_) => None,
        }
    }
}

/// One-pass accumulation over a group's optional values.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Summary {
    /// All records observed, defined value or not.
    pub records: usize,
    /// Records with a defined value.
    pub defined: usize,
    sum: f64,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Summary {
    pub fn observe(&mut self, value: Option<f64>) {
        self.records += 1;
        if let Some(v) = value {
            self.defined += 1;
            self.sum += v;
            self.min = Some(self.min.map_or(v, |current| current.min(v)));
            self.max = Some(self.max.map_or(v, |current| current.max(v)));
        }
    }

    /// Mean over defined values; unknown when the group had none.
    pub fn mean(&self) -> Option<f64> {
        (self.defined > 0).then(|| self.sum / self.defined as f64)
    }
}

/// Accumulate a full iterator of optional values.
pub fn summarize(values: impl IntoIterator<Item = Option<f64>>) -> Summary {
    let mut summary = Summary::default();
    for value in values {
        summary.observe(value);
    }
    summary
}

/// Reduce a group's values to one statistic.
pub fn reduce(values: impl IntoIterator<Item = Option<f64>>, reducer: Reducer) -> Statistic {
    let summary = summarize(values);
    match reducer {
        Reducer::Count => Statistic::Count(summary.records as u64),
        Reducer::Mean => Statistic::Value(summary.mean()),
        Reducer::Min => Statistic::Value(summary.min),
        Reducer::Max => Statistic::Value(summary.max),
    }
}
