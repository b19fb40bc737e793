//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the grouping/aggregation code stays clean and testable
//! - output changes are localized (important for future snapshot tests)

use crate::classify::{CityMedian, SalaryBucket};
use crate::domain::AnalyzeConfig;

/// Header printed once per run.
pub fn format_run_summary(config: &AnalyzeConfig, total_fetched: usize) -> String {
    let mut out = String::new();
    out.push_str("=== hh - Vacancy Salary Statistics ===\n");
    out.push_str(&format!("Query: {}\n", config.query));
    out.push_str(&format!(
        "Read {total_fetched} vacancies (per_page={}, ruble-denominated only in reports)\n",
        config.per_page
    ));
    out
}

/// One line per qualifying city, in the classifier's (ascending city) order.
pub fn format_city_medians(medians: &[CityMedian]) -> String {
    let mut out = String::new();
    out.push_str("\nMedian salary by city:\n");
    if medians.is_empty() {
        out.push_str("  (no city reached the minimum group size)\n");
        return out;
    }
    for m in medians {
        out.push_str(&format!(
            "{:^4} vacancies => {:>20} has a median salary of {}\n",
            m.count,
            m.city,
            fmt_salary(m.median)
        ));
    }
    out
}

/// One line per salary bracket, ascending by bracket.
pub fn format_salary_buckets(buckets: &[SalaryBucket]) -> String {
    let mut out = String::new();
    out.push_str("\nProposals by salary bracket:\n");
    if buckets.is_empty() {
        out.push_str("  (no ruble-denominated vacancies)\n");
        return out;
    }
    for b in buckets {
        out.push_str(&format!(
            "Salary {:<28} - {:^3} proposals\n",
            b.label, b.count
        ));
    }
    out
}

fn fmt_salary(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value:.1}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn city_lines_carry_count_city_and_median() {
        let lines = format_city_medians(&[CityMedian {
            city: "Moscow".to_string(),
            count: 6,
            median: 75_000.0,
        }]);
        assert!(lines.contains("Moscow"));
        assert!(lines.contains(" 6 "));
        assert!(lines.contains("75000"));
        assert!(!lines.contains("75000.0"));
    }

    #[test]
    fn fractional_medians_keep_one_decimal() {
        let lines = format_city_medians(&[CityMedian {
            city: "Tver".to_string(),
            count: 5,
            median: 42_500.5,
        }]);
        assert!(lines.contains("42500.5"));
    }

    #[test]
    fn bucket_lines_carry_label_and_count() {
        let lines = format_salary_buckets(&[SalaryBucket {
            lower: 40_000,
            upper: 60_000,
            label: "from 40000 to 60000 rub.".to_string(),
            count: 12,
        }]);
        assert!(lines.contains("from 40000 to 60000 rub."));
        assert!(lines.contains("12"));
    }

    #[test]
    fn empty_groups_render_a_stub() {
        assert!(format_city_medians(&[]).contains("minimum group size"));
        assert!(format_salary_buckets(&[]).contains("no ruble-denominated"));
    }
}
