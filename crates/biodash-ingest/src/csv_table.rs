use std::io::{Cursor, Read};
use std::path::Path;

use csv::ReaderBuilder;
use tracing::{debug, info};

use biodash_model::RawRecord;

use crate::error::IngestError;

/// Clean a header cell: strip a UTF-8 BOM, trim, and collapse inner runs of
/// whitespace to single spaces so `"% reduction "` and `"%  reduction"`
/// both resolve to the registered column name.
fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

/// Read a headered CSV table from any reader.
///
/// Rows may be ragged: cells past the header width are dropped, and a short
/// row simply has no entry for its missing trailing columns. Rows that are
/// blank in every cell are skipped. Cell text is kept exactly as read.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<RawRecord>, IngestError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(normalize_header)
        .collect();
    debug!(columns = headers.len(), "parsed header row");

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result?;
        if row.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        let record: RawRecord = headers
            .iter()
            .zip(row.iter())
            .map(|(header, cell)| (header.clone(), cell.to_string()))
            .collect();
        records.push(record);
    }
    Ok(records)
}

/// Read a CSV table from a filesystem path.
pub fn read_csv_path(path: &Path) -> Result<Vec<RawRecord>, IngestError> {
    let file = std::fs::File::open(path).map_err(|source| IngestError::Read {
        path: path.to_path_buf(),
        source: csv::Error::from(source),
    })?;
    let records = read_records(file)?;
    info!(rows = records.len(), path = %path.display(), "loaded csv table");
    Ok(records)
}

/// Fetch a CSV table over HTTP(S). One shot: no retries, no custom timeout;
/// any transport or non-success status error propagates to the caller.
pub fn fetch_csv_url(url: &str) -> Result<Vec<RawRecord>, IngestError> {
    let fetch = |url: &str| -> Result<String, reqwest::Error> {
        reqwest::blocking::get(url)?.error_for_status()?.text()
    };
    let body = fetch(url).map_err(|source| IngestError::Fetch {
        url: url.to_string(),
        source,
    })?;
    let records = read_records(Cursor::new(body))?;
    info!(rows = records.len(), url, "fetched csv table");
    Ok(records)
}
