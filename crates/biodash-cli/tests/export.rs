//! End-to-end export: CSV files in, JSON bundle out.

use std::fs;
use std::path::{Path, PathBuf};

use biodash_cli::cli::ExportArgs;
use biodash_cli::commands::run_export;

fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

#[test]
fn export_builds_the_bundle_from_both_tables() {
    let dir = tempfile::tempdir().unwrap();
    let salary = write_file(
        dir.path(),
        "Sal.csv",
        "US State,State_inferred,Job Title,Annual Base Salary,Year,Country\n\
         Massachusetts,,Scientist I,\"$100,000\",2024,United States\n\
         Massachusetts,,Scientist,\"$120,000\",2024,United States\n\
         ,California,Director,,2023,United States\n",
    );
    let layoffs = write_file(
        dir.path(),
        "fierce_layoffs.csv",
        "Date,Year,Company,% reduction,No of employees affected,Location (US),Notes,Country (non-US)\n\
         11-Dec-24,24,Acme Bio,25%,120,Massachusetts,site closure,\n\
         28-Jan,2025,Beta Rx,,,California,,\n\
         5-May-24,2024,Gamma Tx,10%,30,,,\n",
    );
    let out = dir.path().join("bundle.json");

    let args = ExportArgs {
        salary: salary.display().to_string(),
        layoffs: layoffs.display().to_string(),
        out: Some(out.clone()),
        top_states: 5,
        top_roles: 10,
        min_records: None,
        years: Vec::new(),
        default_year: Some(2024),
    };
    run_export(&args).unwrap();

    let bundle: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();

    // Salary survey: both Scientist spellings fold together and average.
    assert_eq!(
        bundle["averageSalariesByState"]["Massachusetts"],
        serde_json::json!(110_000.0)
    );
    assert_eq!(
        bundle["salaryByYearRole"]["2024"]["Scientist"],
        serde_json::json!(110_000.0)
    );

    // Layoff tracker: the locationless row is gone, the rest counted.
    let counts = bundle["layoffCountsByStateYear"].as_object().unwrap();
    assert_eq!(counts.len(), 2);
    assert_eq!(counts["Massachusetts"]["2024"], serde_json::json!(1));
    assert_eq!(counts["California"]["2025"], serde_json::json!(1));

    let months: Vec<&str> = bundle["layoffsPerMonth"]
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["month"].as_str().unwrap())
        .collect();
    assert_eq!(months, vec!["2024-12", "2025-01"]);

    // Default window is 2024-2025, so both events total.
    assert_eq!(
        bundle["layoffTotalsByState"]["Massachusetts"],
        serde_json::json!(1)
    );
    assert_eq!(
        bundle["layoffTotalsByState"]["California"],
        serde_json::json!(1)
    );
}

#[test]
fn export_fails_loudly_when_a_source_is_missing() {
    let dir = tempfile::tempdir().unwrap();
    let salary = write_file(dir.path(), "Sal.csv", "US State,Annual Base Salary\n");
    let args = ExportArgs {
        salary: salary.display().to_string(),
        layoffs: dir.path().join("nope.csv").display().to_string(),
        out: None,
        top_states: 5,
        top_roles: 10,
        min_records: None,
        years: Vec::new(),
        default_year: Some(2024),
    };
    let error = run_export(&args).unwrap_err();
    assert!(error.to_string().contains("load layoff table"));
}
