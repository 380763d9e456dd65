//! Integration tests for CSV table loading from disk.

use std::io::Write;

use biodash_ingest::{DataSource, load_records, read_csv_path};

fn write_csv(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .expect("create temp csv");
    file.write_all(contents.as_bytes()).expect("write temp csv");
    file
}

#[test]
fn reads_headered_table_from_disk() {
    let file = write_csv(
        "Company,Year,Location (US)\n\
         Acme Bio,2024,Massachusetts\n\
         Beta Rx,2023,California\n",
    );
    let records = read_csv_path(file.path()).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].field("Company"), Some("Acme Bio"));
    assert_eq!(records[1].field("Location (US)"), Some("California"));
}

#[test]
fn bom_header_resolves_to_registered_name() {
    let file = write_csv("\u{feff}Date,Year\n11-Dec-24,2024\n");
    let records = read_csv_path(file.path()).unwrap();
    assert_eq!(records[0].field("Date"), Some("11-Dec-24"));
}

#[test]
fn ragged_rows_are_tolerated() {
    // Short row: trailing cells absent. Long row: extras dropped.
    let file = write_csv(
        "Company,Year,Notes\n\
         Acme Bio,2024\n\
         Beta Rx,2023,closure,spurious\n",
    );
    let records = read_csv_path(file.path()).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].field("Notes"), None);
    assert_eq!(records[1].field("Notes"), Some("closure"));
    assert_eq!(records[1].len(), 3);
}

#[test]
fn missing_file_propagates_error() {
    let source = DataSource::parse("/definitely/not/here.csv");
    let error = load_records(&source).unwrap_err();
    assert!(error.to_string().contains("/definitely/not/here.csv"));
}
