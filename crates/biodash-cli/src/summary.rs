//! Terminal tables for the summary commands.
//!
//! Unknown statistics render as a dimmed "no data" cell, never as zero:
//! a state with no parseable salaries must not read as a state of unpaid
//! workers.

use std::collections::BTreeMap;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use biodash_aggregate::rollups::{JobStat, MonthlyCount, StateStat, YearlyAverage};

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn money_cell(value: Option<f64>) -> Cell {
    match value {
        Some(value) => Cell::new(format_dollars(value)),
        None => dim_cell("no data"),
    }
}

/// Whole-dollar rendering with thousands separators: `$125,000`.
pub fn format_dollars(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.abs().to_string();
    let mut grouped = String::new();
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

pub fn print_state_salaries(stats: &[StateStat]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("State"),
        header_cell("Records"),
        header_cell("With salary"),
        header_cell("Avg salary"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for stat in stats {
        table.add_row(vec![
            Cell::new(&stat.state),
            Cell::new(stat.records),
            Cell::new(stat.with_salary),
            money_cell(stat.mean_salary),
        ]);
    }
    println!("{table}");
}

pub fn print_salary_trend(trend: &[YearlyAverage]) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Year"), header_cell("Avg salary")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for point in trend {
        table.add_row(vec![
            Cell::new(point.year),
            money_cell(Some(point.average)),
        ]);
    }
    println!("{table}");
}

pub fn print_role_stats(stats: &[JobStat]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Job title"),
        header_cell("Records"),
        header_cell("Avg salary"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for stat in stats {
        table.add_row(vec![
            Cell::new(&stat.role),
            Cell::new(stat.count),
            money_cell(stat.mean_salary),
        ]);
    }
    println!("{table}");
}

pub fn print_layoff_counts(counts: &BTreeMap<String, BTreeMap<String, u64>>) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("State"),
        header_cell("Year"),
        header_cell("Events"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for (state, years) in counts {
        for (year, events) in years {
            let year_cell = if year == "Unknown" {
                dim_cell(year)
            } else {
                Cell::new(year)
            };
            table.add_row(vec![Cell::new(state), year_cell, Cell::new(*events)]);
        }
    }
    println!("{table}");
}

pub fn print_layoff_totals(totals: &BTreeMap<String, u64>, years: &[i32]) {
    let window = if years.is_empty() {
        "all years".to_string()
    } else {
        years
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    };
    println!("Layoff events by state ({window}):");
    let mut table = Table::new();
    table.set_header(vec![header_cell("State"), header_cell("Events")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (state, events) in totals {
        table.add_row(vec![Cell::new(state), Cell::new(*events)]);
    }
    println!("{table}");
}

pub fn print_monthly_series(series: &[MonthlyCount]) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Month"), header_cell("Events")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for point in series {
        table.add_row(vec![Cell::new(&point.month), Cell::new(point.total)]);
    }
    println!("{table}");
}

#[cfg(test)]
mod tests {
    use super::format_dollars;

    #[test]
    fn dollars_group_thousands() {
        assert_eq!(format_dollars(125_000.0), "$125,000");
        assert_eq!(format_dollars(98_500.4), "$98,500");
        assert_eq!(format_dollars(999.0), "$999");
        assert_eq!(format_dollars(1_000_000.0), "$1,000,000");
        assert_eq!(format_dollars(0.0), "$0");
    }
}
