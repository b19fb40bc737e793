//! Shared analysis pipeline used by every subcommand.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! fetch -> filter/sort -> group -> aggregate -> chart records
//!
//! The subcommand handlers then focus on presentation (printing and chart
//! export).

use crate::classify::{Classify, CityMedian, MedianClassifier, RangeClassifier, SalaryBucket};
use crate::data::{fetch_all, CachedSource, HhClient, PageCache};
use crate::domain::{AnalyzeConfig, ChartRecord, Vacancy};
use crate::error::AppError;

/// All computed outputs of a single analysis run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub total_fetched: usize,
    /// Per-city medians, ascending city order (console report).
    pub city_medians: Vec<CityMedian>,
    /// Per-bracket counts, ascending bracket order (console report).
    pub salary_buckets: Vec<SalaryBucket>,
    /// Median chart input: ranked by median descending, top cities only.
    pub median_records: Vec<ChartRecord>,
    /// Bracket chart input: same order as `salary_buckets`.
    pub bucket_records: Vec<ChartRecord>,
}

/// Fetch vacancies over HTTP (optionally through the page cache) and analyze.
pub fn run_analysis(config: &AnalyzeConfig) -> Result<RunOutput, AppError> {
    let client = HhClient::from_env(config.per_page)?;
    let vacancies = match &config.cache_dir {
        Some(dir) => {
            let cache = PageCache::open(dir, config.per_page)?;
            let source = CachedSource::new(client, cache);
            fetch_all(&source, &config.query)?
        }
        None => fetch_all(&client, &config.query)?,
    };
    run_analysis_with_vacancies(config, vacancies)
}

/// Analyze an already-fetched vacancy list.
///
/// Split out so tests (and any future re-analysis path) can skip the network.
pub fn run_analysis_with_vacancies(
    config: &AnalyzeConfig,
    vacancies: Vec<Vacancy>,
) -> Result<RunOutput, AppError> {
    let total_fetched = vacancies.len();

    let by_city = MedianClassifier::new(vacancies.clone(), config.min_group_size)?;
    let by_salary = RangeClassifier::new(vacancies, config.bucket_width, config.label_seed)?;

    let city_medians = by_city.city_medians()?;
    let salary_buckets = by_salary.buckets()?;

    // Chart prep. Bracket records keep bracket order; median records are
    // ranked by value and truncated so the chart stays readable.
    let mut median_records = by_city.classify()?;
    median_records.sort_by(|a, b| b.value.partial_cmp(&a.value).unwrap_or(std::cmp::Ordering::Equal));
    median_records.truncate(config.top_cities);
    let bucket_records = by_salary.classify()?;

    Ok(RunOutput {
        total_fetched,
        city_medians,
        salary_buckets,
        median_records,
        bucket_records,
    })
}
