//! Plotters-powered SVG bar chart export.
//!
//! Why the SVG backend instead of Plotters' default bitmap backend?
//! - no native font/raster dependencies (text ends up as SVG attributes)
//! - output diffs cleanly and opens anywhere
//!
//! Bars are vertical here, so x tick labels (city names, salary brackets)
//! are rotated to stay readable.

use std::path::Path;

use plotters::prelude::*;
use plotters::style::FontTransform;

use crate::chart::ChartOptions;
use crate::domain::ChartRecord;
use crate::error::AppError;

const CHART_SIZE: (u32, u32) = (1024, 768);

/// Write records as an SVG bar chart, bars in record order.
///
/// Fails (exit 3) on an empty record list; callers decide whether an empty
/// chart is worth skipping or aborting over.
pub fn render_bar_svg(
    path: &Path,
    records: &[ChartRecord],
    opts: &ChartOptions,
) -> Result<(), AppError> {
    if records.is_empty() {
        return Err(AppError::new(3, "No records to chart."));
    }

    let max_value = records.iter().map(|r| r.value).fold(0.0_f64, f64::max);
    let y_max = if max_value > 0.0 { max_value * 1.05 } else { 1.0 };

    let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| AppError::new(2, format!("Failed to draw chart background: {e}")))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .caption(&opts.title, ("sans-serif", 24))
        .set_label_area_size(LabelAreaPosition::Left, 70)
        // Rotated x labels need a tall bottom label area.
        .set_label_area_size(LabelAreaPosition::Bottom, 180)
        .build_cartesian_2d((0..records.len()).into_segmented(), 0.0..y_max)
        .map_err(|e| AppError::new(2, format!("Failed to build chart axes: {e}")))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc(&opts.x_label)
        .y_desc(&opts.y_label)
        .x_labels(records.len())
        .x_label_formatter(&|seg| match seg {
            SegmentValue::Exact(i) | SegmentValue::CenterOf(i) => records
                .get(*i)
                .map(|r| r.key.clone())
                .unwrap_or_default(),
            SegmentValue::Last => String::new(),
        })
        .x_label_style(
            ("sans-serif", 14)
                .into_font()
                .transform(FontTransform::Rotate90),
        )
        .label_style(("sans-serif", 14))
        .draw()
        .map_err(|e| AppError::new(2, format!("Failed to draw chart mesh: {e}")))?;

    chart
        .draw_series(records.iter().enumerate().map(|(i, r)| {
            let mut bar = Rectangle::new(
                [
                    (SegmentValue::Exact(i), 0.0),
                    (SegmentValue::Exact(i + 1), r.value),
                ],
                BLUE.mix(0.6).filled(),
            );
            bar.set_margin(0, 0, 3, 3);
            bar
        }))
        .map_err(|e| AppError::new(2, format!("Failed to draw chart bars: {e}")))?;

    root.present().map_err(|e| {
        AppError::new(
            2,
            format!("Failed to write chart SVG '{}': {e}", path.display()),
        )
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn options() -> ChartOptions {
        ChartOptions {
            title: "Proposal counts by salary: python".to_string(),
            x_label: "Salary".to_string(),
            y_label: "Proposals".to_string(),
        }
    }

    #[test]
    fn writes_an_svg_file() {
        let dir = std::env::temp_dir().join(format!("hh-stats-svg-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("brackets.svg");

        let records = vec![
            ChartRecord {
                key: "from 40000 to 60000 rub.".to_string(),
                value: 12.0,
            },
            ChartRecord {
                key: "from 60000 to 80000 rub.".to_string(),
                value: 7.0,
            },
        ];
        render_bar_svg(&path, &records, &options()).unwrap();

        let body = fs::read_to_string(&path).unwrap();
        assert!(body.starts_with("<?xml") || body.contains("<svg"));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn empty_records_are_an_error() {
        let path = std::env::temp_dir().join("hh-stats-empty.svg");
        let err = render_bar_svg(&path, &[], &options()).unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }
}
