use std::fmt;
use std::path::PathBuf;

use biodash_model::RawRecord;

use crate::csv_table::{fetch_csv_url, read_csv_path};
use crate::error::IngestError;

/// Where a source table lives. Anything with an http(s) scheme is a URL;
/// everything else is treated as a filesystem path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Path(PathBuf),
    Url(String),
}

impl DataSource {
    pub fn parse(input: &str) -> Self {
        if input.starts_with("http://") || input.starts_with("https://") {
            Self::Url(input.to_string())
        } else {
            Self::Path(PathBuf::from(input))
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(path) => write!(f, "{}", path.display()),
            Self::Url(url) => f.write_str(url),
        }
    }
}

/// Load one dataset from wherever it lives.
pub fn load_records(source: &DataSource) -> Result<Vec<RawRecord>, IngestError> {
    match source {
        DataSource::Path(path) => read_csv_path(path),
        DataSource::Url(url) => fetch_csv_url(url),
    }
}
