//! CLI argument definitions for biodash.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "biodash",
    version,
    about = "Biotech salary and layoffs dashboard data core",
    long_about = "Turn ragged salary-survey and layoff-tracker CSV exports into\n\
                  normalized records and grouped aggregates.\n\n\
                  Summaries print as terminal tables; `export` writes the full\n\
                  aggregate bundle as JSON for the dashboard's rendering layer."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for humans, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Summarize the salary survey as terminal tables.
    Salary(SalaryArgs),

    /// Summarize the layoff tracker as terminal tables.
    Layoffs(LayoffArgs),

    /// Export the full aggregate bundle as JSON for the dashboard.
    Export(ExportArgs),
}

#[derive(Parser)]
pub struct SalaryArgs {
    /// Salary survey CSV: a file path or an http(s) URL.
    #[arg(value_name = "CSV")]
    pub csv: String,

    /// Breakdown to print.
    #[arg(long = "by", value_enum, default_value = "state")]
    pub by: SalaryBreakdown,

    /// Exclude states with fewer salary observations than this.
    #[arg(long = "min-records", value_name = "N")]
    pub min_records: Option<usize>,

    /// How many roles to list for the role breakdown.
    #[arg(long = "top", value_name = "N", default_value_t = 10)]
    pub top: usize,

    /// Keep only records from this country before aggregating.
    #[arg(long = "country", value_name = "NAME")]
    pub country: Option<String>,

    /// Year assumed for year-less dates when the year column is unusable
    /// (default: the current year).
    #[arg(long = "default-year", value_name = "YYYY")]
    pub default_year: Option<i32>,
}

#[derive(Parser)]
pub struct LayoffArgs {
    /// Layoff tracker CSV: a file path or an http(s) URL.
    #[arg(value_name = "CSV")]
    pub csv: String,

    /// Breakdown to print.
    #[arg(long = "by", value_enum, default_value = "state-year")]
    pub by: LayoffBreakdown,

    /// Restrict per-state totals to these years (repeatable); default
    /// keeps every resolved year.
    #[arg(long = "year", value_name = "YYYY")]
    pub years: Vec<i32>,

    /// Year assumed for year-less dates when the year column is unusable
    /// (default: the current year).
    #[arg(long = "default-year", value_name = "YYYY")]
    pub default_year: Option<i32>,
}

#[derive(Parser)]
pub struct ExportArgs {
    /// Salary survey CSV: a file path or an http(s) URL.
    #[arg(long = "salary", value_name = "CSV")]
    pub salary: String,

    /// Layoff tracker CSV: a file path or an http(s) URL.
    #[arg(long = "layoffs", value_name = "CSV")]
    pub layoffs: String,

    /// Write the JSON bundle here instead of stdout.
    #[arg(long = "out", value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// States on the salary-by-state line chart.
    #[arg(long = "top-states", value_name = "N", default_value_t = 5)]
    pub top_states: usize,

    /// Roles on the grouped salary bar chart.
    #[arg(long = "top-roles", value_name = "N", default_value_t = 10)]
    pub top_roles: usize,

    /// Exclude states with fewer salary observations than this.
    #[arg(long = "min-records", value_name = "N")]
    pub min_records: Option<usize>,

    /// Years the layoff map totals over (repeatable); default 2024 and
    /// 2025.
    #[arg(long = "year", value_name = "YYYY")]
    pub years: Vec<i32>,

    /// Year assumed for year-less dates when the year column is unusable
    /// (default: the current year).
    #[arg(long = "default-year", value_name = "YYYY")]
    pub default_year: Option<i32>,
}

/// Salary summary breakdowns.
#[derive(Clone, Copy, ValueEnum)]
pub enum SalaryBreakdown {
    State,
    Year,
    Role,
}

/// Layoff summary breakdowns.
#[derive(Clone, Copy, ValueEnum)]
pub enum LayoffBreakdown {
    StateYear,
    Month,
    State,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
