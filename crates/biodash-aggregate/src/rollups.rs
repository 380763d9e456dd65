//! The dashboard's named aggregations, consolidated.
//!
//! Each of these existed in several near-duplicate ad-hoc forms across the
//! original chart code, with fixes applied to some copies and not others.
//! This module is the single implementation the rendering layer consumes.

use std::collections::BTreeMap;

use serde::Serialize;

use biodash_model::{NormalizedRecord, YearMonth};

use crate::group::{GroupKey, KeyFn, Rollup, rollup, rollup_records};
use crate::reduce::{Reducer, Statistic, Summary};

/// Mean salary for one year, for trend lines.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlyAverage {
    pub year: i32,
    pub average: f64,
}

/// Count and mean salary for one job title within a state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobStat {
    pub role: String,
    /// Salary observations behind the numbers.
    pub count: usize,
    /// Unknown when the title has records but no parseable salary.
    pub mean_salary: Option<f64>,
    /// More than one observation; single entries are shown but not
    /// expandable in the drill-down.
    pub multiple_entries: bool,
}

/// Min/max salary for one year of one role.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryRange {
    pub year: i32,
    pub min: f64,
    pub max: f64,
}

/// Layoff events in one month.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyCount {
    pub month: String,
    pub total: u64,
}

/// Per-state salary roll-up for tabular output.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StateStat {
    pub state: String,
    /// Every record that resolved to this state.
    pub records: usize,
    /// Records with a parseable salary.
    pub with_salary: usize,
    /// Unknown when no salary in the state parsed; rendered as "no data",
    /// never zero.
    pub mean_salary: Option<f64>,
}

/// Records from one country, by exact match on the normalized field.
pub fn filter_by_country<'a>(
    records: &'a [NormalizedRecord],
    country: &str,
) -> Vec<&'a NormalizedRecord> {
    records
        .iter()
        .filter(|record| record.country.as_deref() == Some(country))
        .collect()
}

/// Mean salary by state, rounded to whole dollars.
///
/// States whose mean is undefined (records but no parseable salary) are
/// absent from the result, never zero. With `min_records`, states with
/// fewer salary observations than the threshold are excluded; by default
/// nothing is.
pub fn average_salary_by_state(
    records: &[NormalizedRecord],
    min_records: Option<usize>,
) -> BTreeMap<String, f64> {
    let mut groups: BTreeMap<String, Summary> = BTreeMap::new();
    for record in records {
        let Some(state) = record.state.as_deref() else {
            continue;
        };
        groups
            .entry(state.to_string())
            .or_default()
            .observe(record.salary);
    }
    groups
        .into_iter()
        .filter_map(|(state, summary)| {
            if min_records.is_some_and(|minimum| summary.defined < minimum) {
                return None;
            }
            summary.mean().map(|mean| (state, mean.round()))
        })
        .collect()
}

/// Per-state record/salary counts and mean, for tabular summaries. Unlike
/// [`average_salary_by_state`] this keeps states whose mean is unknown, so
/// a summary can show them as "no data". The same optional threshold
/// applies.
pub fn state_salary_stats(
    records: &[NormalizedRecord],
    min_records: Option<usize>,
) -> Vec<StateStat> {
    let mut groups: BTreeMap<String, Summary> = BTreeMap::new();
    for record in records {
        let Some(state) = record.state.as_deref() else {
            continue;
        };
        groups
            .entry(state.to_string())
            .or_default()
            .observe(record.salary);
    }
    groups
        .into_iter()
        .filter(|(_, summary)| {
            !min_records.is_some_and(|minimum| summary.defined < minimum)
        })
        .map(|(state, summary)| StateStat {
            state,
            records: summary.records,
            with_salary: summary.defined,
            mean_salary: summary.mean(),
        })
        .collect()
}

/// Mean salary per year across every record, for the nationwide trend.
/// Records with an unknown year are left out of the series.
pub fn average_salary_by_year(records: &[NormalizedRecord]) -> Vec<YearlyAverage> {
    let mut by_year: BTreeMap<i32, Summary> = BTreeMap::new();
    for record in records {
        let Some(year) = record.year else {
            continue;
        };
        by_year.entry(year).or_default().observe(record.salary);
    }
    by_year
        .into_iter()
        .filter_map(|(year, summary)| {
            summary.mean().map(|average| YearlyAverage { year, average })
        })
        .collect()
}

/// Layoff event counts by state, then by year.
///
/// The year level keeps an explicit `Unknown` bucket so events with an
/// unresolvable year stay countable; records with no location were already
/// dropped by normalization, but any that slipped through without a state
/// are skipped here as well.
pub fn layoff_counts_by_state_year(
    records: &[NormalizedRecord],
) -> BTreeMap<String, BTreeMap<GroupKey, u64>> {
    let by_state: &KeyFn = &|record| GroupKey::from_field(record.state.as_deref());
    let by_year: &KeyFn = &|record| GroupKey::from_field(record.year);
    let rolled = rollup_records(records, &[by_state, by_year], &|_| None, Reducer::Count);

    let mut counts = BTreeMap::new();
    let Rollup::Nested(states) = rolled else {
        return counts;
    };
    for (state, years) in states {
        let GroupKey::Known(state) = state else {
            continue;
        };
        let Rollup::Nested(years) = years else {
            continue;
        };
        let per_year: BTreeMap<GroupKey, u64> = years
            .into_iter()
            .filter_map(|(year, leaf)| match leaf {
                Rollup::Leaf(Statistic::Count(count)) => Some((year, count)),
                _ => None,
            })
            .collect();
        counts.insert(state, per_year);
    }
    counts
}

/// Layoff event totals per state over a year window; an empty window means
/// every resolved year. Events with an unknown year never count toward a
/// window total.
pub fn layoff_totals_by_state(
    records: &[NormalizedRecord],
    years: &[i32],
) -> BTreeMap<String, u64> {
    let mut totals = BTreeMap::new();
    for record in records {
        let Some(state) = record.state.as_deref() else {
            continue;
        };
        let Some(year) = record.year else {
            continue;
        };
        if !years.is_empty() && !years.contains(&year) {
            continue;
        }
        *totals.entry(state.to_string()).or_insert(0u64) += 1;
    }
    totals
}

/// Layoff events per month, in chronological order. Records with no
/// parseable date have no month and are left out.
pub fn layoffs_per_month(records: &[NormalizedRecord]) -> Vec<MonthlyCount> {
    let mut by_month: BTreeMap<YearMonth, u64> = BTreeMap::new();
    for record in records {
        let Some(month) = record.month else {
            continue;
        };
        *by_month.entry(month).or_insert(0) += 1;
    }
    by_month
        .into_iter()
        .map(|(month, total)| MonthlyCount {
            month: month.to_string(),
            total,
        })
        .collect()
}

fn top_by_count<'a>(keys: impl Iterator<Item = Option<&'a str>>, n: usize) -> Vec<String> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for key in keys.flatten() {
        *counts.entry(key).or_default() += 1;
    }
    let mut ranked: Vec<(&str, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    ranked
        .into_iter()
        .take(n)
        .map(|(key, _)| key.to_string())
        .collect()
}

/// The `n` states with the most records, most frequent first; ties break
/// alphabetically so the result is stable.
pub fn top_states_by_count(records: &[NormalizedRecord], n: usize) -> Vec<String> {
    top_by_count(records.iter().map(|record| record.state.as_deref()), n)
}

/// The `n` job titles with the most records, most frequent first.
pub fn top_roles_by_count(records: &[NormalizedRecord], n: usize) -> Vec<String> {
    top_by_count(records.iter().map(|record| record.role.as_deref()), n)
}

/// Mean salary per year for each given state. Unknown years and undefined
/// means are omitted from a state's series rather than plotted as zero.
pub fn salary_trend_by_state(
    records: &[NormalizedRecord],
    states: &[String],
) -> BTreeMap<String, Vec<YearlyAverage>> {
    let mut trends = BTreeMap::new();
    for state in states {
        let mut by_year: BTreeMap<i32, Summary> = BTreeMap::new();
        for record in records {
            if record.state.as_deref() != Some(state.as_str()) {
                continue;
            }
            let Some(year) = record.year else {
                continue;
            };
            by_year.entry(year).or_default().observe(record.salary);
        }
        let series: Vec<YearlyAverage> = by_year
            .into_iter()
            .filter_map(|(year, summary)| {
                summary.mean().map(|average| YearlyAverage { year, average })
            })
            .collect();
        trends.insert(state.clone(), series);
    }
    trends
}

/// Mean salary by year and role for the given roles (grouped-bar data).
/// A year-role cell with no defined salary is simply absent — the renderer
/// decides how to draw a missing bar; this layer never fabricates a zero.
pub fn salary_by_year_role(
    records: &[NormalizedRecord],
    roles: &[String],
) -> BTreeMap<i32, BTreeMap<String, f64>> {
    let filtered: Vec<&NormalizedRecord> = records
        .iter()
        .filter(|record| {
            record
                .role
                .as_deref()
                .is_some_and(|role| roles.iter().any(|wanted| wanted == role))
        })
        .collect();
    let by_year: &KeyFn = &|record| GroupKey::from_field(record.year);
    let by_role: &KeyFn = &|record| GroupKey::from_field(record.role.as_deref());
    let rolled = rollup(&filtered, &[by_year, by_role], &|r| r.salary, Reducer::Mean);

    let mut cells = BTreeMap::new();
    let Rollup::Nested(years) = rolled else {
        return cells;
    };
    for (year, roles_rollup) in years {
        let Some(year) = year.as_known().and_then(|y| y.parse::<i32>().ok()) else {
            continue;
        };
        let Rollup::Nested(role_map) = roles_rollup else {
            continue;
        };
        let mut means = BTreeMap::new();
        for (role, leaf) in role_map {
            let GroupKey::Known(role) = role else {
                continue;
            };
            if let Rollup::Leaf(Statistic::Value(Some(mean))) = leaf {
                means.insert(role, mean);
            }
        }
        cells.insert(year, means);
    }
    cells
}

fn collect_job_stats<'a>(
    records: impl Iterator<Item = &'a NormalizedRecord>,
    limit: usize,
) -> Vec<JobStat> {
    let mut by_role: BTreeMap<String, Summary> = BTreeMap::new();
    for record in records {
        let Some(role) = record.role.as_deref() else {
            continue;
        };
        if record.salary.is_none() {
            continue;
        }
        by_role
            .entry(role.to_string())
            .or_default()
            .observe(record.salary);
    }
    let mut stats: Vec<JobStat> = by_role
        .into_iter()
        .map(|(role, summary)| JobStat {
            role,
            count: summary.defined,
            mean_salary: summary.mean(),
            multiple_entries: summary.defined > 1,
        })
        .collect();
    stats.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.role.cmp(&b.role)));
    stats.truncate(limit);
    stats
}

/// Count and mean salary per job title within one state, top `limit` titles
/// by observation count. State comparison ignores case, matching how the
/// map's feature names differ from survey spellings.
pub fn job_stats_for_state(
    records: &[NormalizedRecord],
    state: &str,
    limit: usize,
) -> Vec<JobStat> {
    collect_job_stats(
        records.iter().filter(|record| {
            record
                .state
                .as_deref()
                .is_some_and(|s| s.eq_ignore_ascii_case(state))
        }),
        limit,
    )
}

/// Count and mean salary per job title across every state.
pub fn role_stats(records: &[NormalizedRecord], limit: usize) -> Vec<JobStat> {
    collect_job_stats(records.iter(), limit)
}

/// Min/max salary per year for one role in one state, for the drill-down
/// table. Years with no defined salary are omitted.
pub fn role_salary_range_by_year(
    records: &[NormalizedRecord],
    state: &str,
    role: &str,
) -> Vec<SalaryRange> {
    let mut by_year: BTreeMap<i32, Summary> = BTreeMap::new();
    for record in records {
        if !record
            .state
            .as_deref()
            .is_some_and(|s| s.eq_ignore_ascii_case(state))
        {
            continue;
        }
        if record.role.as_deref() != Some(role) {
            continue;
        }
        let Some(year) = record.year else {
            continue;
        };
        by_year.entry(year).or_default().observe(record.salary);
    }
    by_year
        .into_iter()
        .filter_map(|(year, summary)| match (summary.min, summary.max) {
            (Some(min), Some(max)) => Some(SalaryRange { year, min, max }),
            _ => None,
        })
        .collect()
}
