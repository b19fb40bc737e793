//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - wire-shaped vacancy records as returned by the search API (`Vacancy`,
//!   `VacanciesPage`)
//! - the run configuration assembled from CLI args (`AnalyzeConfig`)
//! - the chart input record (`ChartRecord`)

pub mod types;

pub use types::*;
