//! ASCII bar chart for terminal output.
//!
//! This is intentionally "dumb" (fixed-width rows), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Bars are horizontal so the record keys (city names, salary brackets) stay
//! readable without any label rotation.

use crate::chart::ChartOptions;
use crate::domain::ChartRecord;

/// Render records as horizontal `#` bars, one row per record, in record
/// order. `width` caps the length of the longest bar, in columns.
pub fn render_bar_chart(records: &[ChartRecord], opts: &ChartOptions, width: usize) -> String {
    let width = width.max(10);

    let mut out = String::new();
    out.push_str(&format!(
        "{} ({} by {})\n",
        opts.title, opts.y_label, opts.x_label
    ));

    if records.is_empty() {
        out.push_str("(no data)\n");
        return out;
    }

    // Pad by character count, not byte length: city names are often Cyrillic.
    let label_width = records
        .iter()
        .map(|r| r.key.chars().count())
        .max()
        .unwrap_or(0);
    let max_value = records.iter().map(|r| r.value).fold(0.0_f64, f64::max);

    for r in records {
        let bar_len = if max_value > 0.0 && r.value > 0.0 {
            // Every non-zero value gets at least one column.
            ((r.value / max_value) * width as f64).round().max(1.0) as usize
        } else {
            0
        };
        out.push_str(&format!(
            "{:<label_width$} | {} {}\n",
            r.key,
            "#".repeat(bar_len),
            fmt_value(r.value)
        ));
    }
    out
}

fn fmt_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value:.1}")
    }
}
