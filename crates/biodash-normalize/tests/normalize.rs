//! End-to-end normalization behavior over small raw tables.

use biodash_model::RawRecord;
use biodash_normalize::{NormalizeOptions, normalize_table};

fn row(cells: &[(&str, &str)]) -> RawRecord {
    let mut record = RawRecord::new();
    for (column, value) in cells {
        record.insert(*column, *value);
    }
    record
}

fn sample_rows() -> Vec<RawRecord> {
    vec![
        row(&[
            ("Date", "11-Dec-24"),
            ("Year", "2024"),
            ("Company", "Acme Bio"),
            ("% reduction", "25%"),
            ("No of employees affected", "120"),
            ("Location (US)", "Massachusetts"),
        ]),
        row(&[
            ("Date", "28-Jan"),
            ("Year", "24"),
            ("Company", "Beta Rx"),
            ("% reduction", "unknown"),
            ("No of employees affected", ""),
            ("Location (US)", "California"),
        ]),
        // No location: dropped, not an error.
        row(&[("Date", "3-Mar-25"), ("Year", "25"), ("Company", "Gamma Tx")]),
    ]
}

#[test]
fn records_survive_one_to_one_or_drop() {
    let records = normalize_table(&sample_rows(), &NormalizeOptions::new(2024));
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].company.as_deref(), Some("Acme Bio"));
    assert_eq!(records[1].company.as_deref(), Some("Beta Rx"));
}

#[test]
fn yearless_date_is_backfilled_from_year_column() {
    let records = normalize_table(&sample_rows(), &NormalizeOptions::new(2020));
    let beta = &records[1];
    assert_eq!(beta.year, Some(2024));
    assert_eq!(beta.date.unwrap().to_string(), "2024-01-28");
    assert_eq!(beta.month.unwrap().to_string(), "2024-01");
}

#[test]
fn malformed_cells_are_unknown_without_losing_the_record() {
    let records = normalize_table(&sample_rows(), &NormalizeOptions::new(2024));
    let beta = &records[1];
    assert_eq!(beta.percent_reduction, None);
    assert_eq!(beta.num_laid_off, None);
}

#[test]
fn normalization_is_idempotent() {
    let rows = sample_rows();
    let options = NormalizeOptions::new(2024);
    let first = normalize_table(&rows, &options);
    let second = normalize_table(&rows, &options);
    assert_eq!(first, second);
}
