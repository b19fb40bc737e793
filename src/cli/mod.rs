//! Command-line parsing for the vacancy statistics tool.
//!
//! The goal of this module is to keep **argument parsing** and **command
//! dispatch** separate from the fetching/aggregation code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::classify::BUCKET_WIDTH;

/// Search term used when `--query` is not given.
pub const DEFAULT_QUERY: &str = "python";

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "hh", version, about = "Vacancy salary statistics from the hh.ru search API")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch vacancies and print both reports with charts.
    ///
    /// This is the default: a bare `hh` (or `hh --query ...`) behaves like
    /// `hh analyze`.
    Analyze(AnalyzeArgs),
    /// Median salary per city only.
    Cities(AnalyzeArgs),
    /// Vacancy counts per salary bracket only.
    Brackets(AnalyzeArgs),
}

/// Common options shared by all subcommands.
#[derive(Debug, Parser, Clone)]
pub struct AnalyzeArgs {
    /// Search query text.
    #[arg(short, long, default_value = DEFAULT_QUERY)]
    pub query: String,

    /// Results per page (the API caps this at 100).
    #[arg(long, default_value_t = 100)]
    pub per_page: u32,

    /// Minimum vacancies a city needs to enter the median report.
    #[arg(long, default_value_t = 5)]
    pub min_group_size: usize,

    /// Salary bracket width, in rubles.
    #[arg(long, default_value_t = BUCKET_WIDTH)]
    pub bucket_width: i64,

    /// How many cities (ranked by median) the median chart keeps.
    #[arg(long, default_value_t = 10)]
    pub top: usize,

    /// Seed for the bracket-label draw.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Cache fetched pages as JSON files in this directory.
    #[arg(long, value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Write SVG charts into this directory.
    #[arg(long, value_name = "DIR")]
    pub export_chart_dir: Option<PathBuf>,

    /// Terminal chart width (columns for the longest bar).
    #[arg(long, default_value_t = 60)]
    pub width: usize,

    /// Skip terminal charts.
    #[arg(long)]
    pub no_chart: bool,
}
