//! The in-memory hand-off to the rendering layer, made explicit.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use biodash_model::NormalizedRecord;

use crate::rollups::{
    MonthlyCount, YearlyAverage, average_salary_by_state, average_salary_by_year,
    layoff_counts_by_state_year, layoff_totals_by_state, layoffs_per_month, salary_by_year_role,
    salary_trend_by_state, top_roles_by_count, top_states_by_count,
};

/// Shape knobs for a bundle build.
#[derive(Debug, Clone)]
pub struct BundleOptions {
    /// States on the salary-by-state line chart.
    pub top_states: usize,
    /// Roles on the grouped salary bar chart.
    pub top_roles: usize,
    /// Minimum salary observations a state needs before its average is
    /// published; `None` publishes every state.
    pub min_records: Option<usize>,
    /// Years the layoff map totals over; empty means every resolved year.
    pub layoff_years: Vec<i32>,
}

impl Default for BundleOptions {
    fn default() -> Self {
        Self {
            top_states: 5,
            top_roles: 10,
            min_records: None,
            layoff_years: vec![2024, 2025],
        }
    }
}

/// Everything the dashboard's charts consume.
///
/// Recomputed from scratch on every build; there is no cache to invalidate
/// and no state carried between runs. Keys serialize the way the rendering
/// layer expects them (camelCase fields, `Unknown` year bucket spelled
/// out).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardBundle {
    pub average_salaries_by_state: BTreeMap<String, f64>,
    pub salary_trend: Vec<YearlyAverage>,
    pub salary_trend_by_state: BTreeMap<String, Vec<YearlyAverage>>,
    pub salary_by_year_role: BTreeMap<i32, BTreeMap<String, f64>>,
    pub layoff_counts_by_state_year: BTreeMap<String, BTreeMap<String, u64>>,
    pub layoffs_per_month: Vec<MonthlyCount>,
    pub layoff_totals_by_state: BTreeMap<String, u64>,
}

/// Build the full bundle from normalized salary and layoff records.
pub fn build_bundle(
    salary: &[NormalizedRecord],
    layoffs: &[NormalizedRecord],
    options: &BundleOptions,
) -> DashboardBundle {
    let top_states = top_states_by_count(salary, options.top_states);
    let top_roles = top_roles_by_count(salary, options.top_roles);
    debug!(
        top_states = top_states.len(),
        top_roles = top_roles.len(),
        "building dashboard bundle"
    );

    let layoff_counts: BTreeMap<String, BTreeMap<String, u64>> =
        layoff_counts_by_state_year(layoffs)
            .into_iter()
            .map(|(state, years)| {
                let years = years
                    .into_iter()
                    .map(|(year, count)| (year.to_string(), count))
                    .collect();
                (state, years)
            })
            .collect();

    DashboardBundle {
        average_salaries_by_state: average_salary_by_state(salary, options.min_records),
        salary_trend: average_salary_by_year(salary),
        salary_trend_by_state: salary_trend_by_state(salary, &top_states),
        salary_by_year_role: salary_by_year_role(salary, &top_roles),
        layoff_counts_by_state_year: layoff_counts,
        layoffs_per_month: layoffs_per_month(layoffs),
        layoff_totals_by_state: layoff_totals_by_state(layoffs, &options.layoff_years),
    }
}
