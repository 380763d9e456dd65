//! Command implementations: load, normalize, aggregate, present.

use std::fs;

use anyhow::{Context, Result};
use chrono::Datelike;
use tracing::{info, info_span};

use biodash_aggregate::rollups::{
    average_salary_by_year, layoff_counts_by_state_year, layoff_totals_by_state,
    layoffs_per_month, role_stats, state_salary_stats,
};
use biodash_aggregate::{BundleOptions, build_bundle};
use biodash_ingest::{DataSource, load_records};
use biodash_model::NormalizedRecord;
use biodash_normalize::{NormalizeOptions, normalize_table};

use crate::cli::{ExportArgs, LayoffArgs, LayoffBreakdown, SalaryArgs, SalaryBreakdown};
use crate::summary::{
    print_layoff_counts, print_layoff_totals, print_monthly_series, print_role_stats,
    print_salary_trend, print_state_salaries,
};

fn resolve_default_year(arg: Option<i32>) -> i32 {
    arg.unwrap_or_else(|| chrono::Local::now().year())
}

/// Load and normalize the salary survey. Nationwide rows without a state
/// are kept; by-state rollups skip them on their own.
fn load_salary(csv: &str, default_year: i32) -> Result<Vec<NormalizedRecord>> {
    let source = DataSource::parse(csv);
    let span = info_span!("salary", source = %source);
    let _guard = span.enter();
    let rows =
        load_records(&source).with_context(|| format!("load salary table from {source}"))?;
    let options = NormalizeOptions::new(default_year).keep_missing_location();
    let records = normalize_table(&rows, &options);
    info!(records = records.len(), "salary table ready");
    Ok(records)
}

/// Load and normalize the layoff tracker. Rows with no US location are
/// dropped, matching the dashboard's filter.
fn load_layoffs(csv: &str, default_year: i32) -> Result<Vec<NormalizedRecord>> {
    let source = DataSource::parse(csv);
    let span = info_span!("layoffs", source = %source);
    let _guard = span.enter();
    let rows =
        load_records(&source).with_context(|| format!("load layoff table from {source}"))?;
    let records = normalize_table(&rows, &NormalizeOptions::new(default_year));
    info!(records = records.len(), "layoff table ready");
    Ok(records)
}

fn filter_country(records: Vec<NormalizedRecord>, country: Option<&str>) -> Vec<NormalizedRecord> {
    match country {
        Some(country) => records
            .into_iter()
            .filter(|record| record.country.as_deref() == Some(country))
            .collect(),
        None => records,
    }
}

pub fn run_salary(args: &SalaryArgs) -> Result<()> {
    let records = load_salary(&args.csv, resolve_default_year(args.default_year))?;
    let records = filter_country(records, args.country.as_deref());
    match args.by {
        SalaryBreakdown::State => {
            print_state_salaries(&state_salary_stats(&records, args.min_records));
        }
        SalaryBreakdown::Year => print_salary_trend(&average_salary_by_year(&records)),
        SalaryBreakdown::Role => print_role_stats(&role_stats(&records, args.top)),
    }
    Ok(())
}

pub fn run_layoffs(args: &LayoffArgs) -> Result<()> {
    let records = load_layoffs(&args.csv, resolve_default_year(args.default_year))?;
    match args.by {
        LayoffBreakdown::StateYear => {
            let counts = layoff_counts_by_state_year(&records)
                .into_iter()
                .map(|(state, years)| {
                    let years = years
                        .into_iter()
                        .map(|(year, count)| (year.to_string(), count))
                        .collect();
                    (state, years)
                })
                .collect();
            print_layoff_counts(&counts);
        }
        LayoffBreakdown::Month => print_monthly_series(&layoffs_per_month(&records)),
        LayoffBreakdown::State => {
            let totals = layoff_totals_by_state(&records, &args.years);
            print_layoff_totals(&totals, &args.years);
        }
    }
    Ok(())
}

pub fn run_export(args: &ExportArgs) -> Result<()> {
    let default_year = resolve_default_year(args.default_year);
    let salary = load_salary(&args.salary, default_year)?;
    let layoffs = load_layoffs(&args.layoffs, default_year)?;

    let mut options = BundleOptions {
        top_states: args.top_states,
        top_roles: args.top_roles,
        min_records: args.min_records,
        ..BundleOptions::default()
    };
    if !args.years.is_empty() {
        options.layoff_years = args.years.clone();
    }

    let bundle = build_bundle(&salary, &layoffs, &options);
    let json = serde_json::to_string_pretty(&bundle).context("serialize bundle")?;
    match &args.out {
        Some(path) => {
            fs::write(path, json)
                .with_context(|| format!("write bundle to {}", path.display()))?;
            info!(path = %path.display(), "wrote dashboard bundle");
        }
        None => println!("{json}"),
    }
    Ok(())
}
