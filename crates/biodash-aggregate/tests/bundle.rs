//! Bundle shape tests: the JSON hand-off the rendering layer consumes.

use biodash_aggregate::{BundleOptions, build_bundle};
use biodash_model::{NormalizedRecord, YearMonth};

fn salary_record(state: &str, year: i32, role: &str, salary: Option<f64>) -> NormalizedRecord {
    NormalizedRecord {
        state: Some(state.to_string()),
        year: Some(year),
        role: Some(role.to_string()),
        salary,
        ..NormalizedRecord::default()
    }
}

fn sample_salary() -> Vec<NormalizedRecord> {
    vec![
        salary_record("Massachusetts", 2022, "Scientist", Some(100_000.0)),
        salary_record("Massachusetts", 2022, "Scientist", Some(120_000.0)),
        salary_record("California", 2023, "Director", None),
    ]
}

fn sample_layoffs() -> Vec<NormalizedRecord> {
    vec![
        NormalizedRecord {
            state: Some("Massachusetts".to_string()),
            year: Some(2024),
            month: Some(YearMonth {
                year: 2024,
                month: 1,
            }),
            ..NormalizedRecord::default()
        },
        NormalizedRecord {
            state: Some("Massachusetts".to_string()),
            ..NormalizedRecord::default()
        },
        NormalizedRecord {
            state: Some("California".to_string()),
            year: Some(2024),
            month: Some(YearMonth {
                year: 2024,
                month: 3,
            }),
            ..NormalizedRecord::default()
        },
    ]
}

#[test]
fn bundle_serializes_with_camel_case_keys_and_no_fabricated_values() {
    let bundle = build_bundle(&sample_salary(), &sample_layoffs(), &BundleOptions::default());
    let json = serde_json::to_string(&bundle).unwrap();
    insta::assert_snapshot!(
        json,
        @r#"{"averageSalariesByState":{"Massachusetts":110000.0},"salaryTrend":[{"year":2022,"average":110000.0}],"salaryTrendByState":{"California":[],"Massachusetts":[{"year":2022,"average":110000.0}]},"salaryByYearRole":{"2022":{"Scientist":110000.0},"2023":{}},"layoffCountsByStateYear":{"California":{"2024":1},"Massachusetts":{"2024":1,"Unknown":1}},"layoffsPerMonth":[{"month":"2024-01","total":1},{"month":"2024-03","total":1}],"layoffTotalsByState":{"California":1,"Massachusetts":1}}"#
    );
}

#[test]
fn bundle_rebuild_is_identical() {
    let salary = sample_salary();
    let layoffs = sample_layoffs();
    let options = BundleOptions::default();
    let first = serde_json::to_string(&build_bundle(&salary, &layoffs, &options)).unwrap();
    let second = serde_json::to_string(&build_bundle(&salary, &layoffs, &options)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn min_records_option_flows_through() {
    let options = BundleOptions {
        min_records: Some(3),
        ..BundleOptions::default()
    };
    let bundle = build_bundle(&sample_salary(), &sample_layoffs(), &options);
    // Massachusetts has only two salary observations.
    assert!(bundle.average_salaries_by_state.is_empty());
}
