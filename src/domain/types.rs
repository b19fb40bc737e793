//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - decoded straight off the search API wire format
//! - cached to disk between runs
//! - fed to reporting and charting without further conversion

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Currency code the aggregations are restricted to.
///
/// The search API reports Russian rubles as `"RUR"` (the legacy ISO code),
/// not `"RUB"`.
pub const RUBLE_CODE: &str = "RUR";

/// Salary range attached to a vacancy.
///
/// Either bound may be absent, but not both: the API is always queried with
/// `only_with_salary=true`, so a vacancy carrying neither bound is treated as
/// a violated precondition downstream (see `classify::average_salary`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Salary {
    pub from: Option<f64>,
    pub to: Option<f64>,
    pub currency: String,
}

/// Region/city a vacancy is published in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Area {
    pub name: String,
}

/// One job listing returned by the search API.
///
/// The real payload carries many more fields; we only decode what the
/// aggregations consume. `serde` ignores the rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vacancy {
    pub name: String,
    pub salary: Salary,
    pub area: Area,
}

/// One page of search results.
///
/// The wire payload also carries `found`, `page`, `per_page` and more; only
/// the fields the pagination loop consumes are decoded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VacanciesPage {
    pub items: Vec<Vacancy>,
    /// Total page count for the query (not the current page index).
    pub pages: u32,
}

/// Display label + aggregate value, the unit every chart consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRecord {
    pub key: String,
    pub value: f64,
}

/// Full configuration of an analysis run, assembled from CLI args in
/// `app::analyze_config_from_args`.
#[derive(Debug, Clone)]
pub struct AnalyzeConfig {
    /// Search query text.
    pub query: String,
    /// Results per page (the API caps this at 100).
    pub per_page: u32,
    /// Minimum vacancies a city must have to appear in the median report.
    pub min_group_size: usize,
    /// Salary bucket width for the range report, in rubles.
    pub bucket_width: i64,
    /// How many cities (by descending median) the median chart keeps.
    pub top_cities: usize,
    /// Seed for the cosmetic unit-label draw in the range report.
    pub label_seed: u64,
    /// Directory for the opportunistic page cache; `None` disables caching.
    pub cache_dir: Option<PathBuf>,
    /// Directory to write SVG charts into; `None` skips the export.
    pub export_chart_dir: Option<PathBuf>,
    /// Terminal bar chart width (columns reserved for the bars themselves).
    pub chart_width: usize,
    /// Render terminal bar charts at all.
    pub chart: bool,
}
