//! Bar chart rendering.
//!
//! Two backends over the same `ChartRecord` input:
//! - `ascii`: deterministic horizontal bars for the terminal
//! - `svg`: a Plotters bar chart written to a file
//!
//! Neither backend transforms the data; bars appear exactly in record order.

pub mod ascii;
pub mod svg;

pub use ascii::*;
pub use svg::*;

/// Title and axis labels for one chart.
#[derive(Debug, Clone)]
pub struct ChartOptions {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
}
