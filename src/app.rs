//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - fetches vacancies (optionally through the page cache)
//! - runs the classifiers
//! - prints reports and terminal charts
//! - writes optional SVG exports

use std::fs;
use std::path::Path;

use clap::Parser;

use crate::chart::ChartOptions;
use crate::cli::{AnalyzeArgs, Command};
use crate::domain::{AnalyzeConfig, ChartRecord};
use crate::error::AppError;

pub mod pipeline;

use pipeline::RunOutput;

/// Entry point for the `hh` binary.
pub fn run() -> Result<(), AppError> {
    // We want `hh` and `hh --query rust` to behave like `hh analyze ...`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of
    // the argv list before parsing. This preserves a clean clap structure
    // while keeping the one-shot UX.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Analyze(args) => handle_analyze(args, Scope::Both),
        Command::Cities(args) => handle_analyze(args, Scope::Cities),
        Command::Brackets(args) => handle_analyze(args, Scope::Brackets),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    Both,
    Cities,
    Brackets,
}

fn handle_analyze(args: AnalyzeArgs, scope: Scope) -> Result<(), AppError> {
    let config = analyze_config_from_args(&args);
    let run = pipeline::run_analysis(&config)?;

    print!("{}", crate::report::format_run_summary(&config, run.total_fetched));

    if scope != Scope::Cities {
        print_brackets(&config, &run)?;
    }
    if scope != Scope::Brackets {
        print_cities(&config, &run)?;
    }

    Ok(())
}

fn print_brackets(config: &AnalyzeConfig, run: &RunOutput) -> Result<(), AppError> {
    print!("{}", crate::report::format_salary_buckets(&run.salary_buckets));

    let opts = ChartOptions {
        title: format!("Proposal counts by salary: {}", config.query),
        x_label: "Salary".to_string(),
        y_label: "Proposals".to_string(),
    };
    show_chart(config, &run.bucket_records, &opts, "salary-brackets.svg")
}

fn print_cities(config: &AnalyzeConfig, run: &RunOutput) -> Result<(), AppError> {
    print!("{}", crate::report::format_city_medians(&run.city_medians));

    let opts = ChartOptions {
        title: format!("Median salaries by city: {}", config.query),
        x_label: "City".to_string(),
        y_label: "Median salary, rub.".to_string(),
    };
    show_chart(config, &run.median_records, &opts, "city-medians.svg")
}

/// Terminal chart plus optional SVG export for one record set.
fn show_chart(
    config: &AnalyzeConfig,
    records: &[ChartRecord],
    opts: &ChartOptions,
    file_name: &str,
) -> Result<(), AppError> {
    if records.is_empty() {
        return Ok(());
    }

    if config.chart {
        println!();
        print!(
            "{}",
            crate::chart::render_bar_chart(records, opts, config.chart_width)
        );
    }

    if let Some(dir) = &config.export_chart_dir {
        let path = ensure_export_dir(dir)?.join(file_name);
        crate::chart::render_bar_svg(&path, records, opts)?;
        println!("Wrote {}", path.display());
    }
    Ok(())
}

fn ensure_export_dir(dir: &Path) -> Result<&Path, AppError> {
    fs::create_dir_all(dir).map_err(|e| {
        AppError::new(
            2,
            format!("Failed to create chart directory '{}': {e}", dir.display()),
        )
    })?;
    Ok(dir)
}

pub fn analyze_config_from_args(args: &AnalyzeArgs) -> AnalyzeConfig {
    AnalyzeConfig {
        query: args.query.clone(),
        per_page: args.per_page,
        min_group_size: args.min_group_size,
        bucket_width: args.bucket_width,
        top_cities: args.top,
        label_seed: args.seed,
        cache_dir: args.cache_dir.clone(),
        export_chart_dir: args.export_chart_dir.clone(),
        chart_width: args.width,
        chart: !args.no_chart,
    }
}

/// Rewrite argv so `hh` defaults to `hh analyze`.
///
/// Rules:
/// - `hh`                      -> `hh analyze`
/// - `hh --query rust ...`     -> `hh analyze --query rust ...`
/// - `hh --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("analyze".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "analyze" | "cities" | "brackets");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "analyze flags".
    if arg1.starts_with('-') {
        argv.insert(1, "analyze".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}
