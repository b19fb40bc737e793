//! Median salary per city.

use crate::classify::{average_salary, filter_and_sort, median, Classify};
use crate::domain::{ChartRecord, Vacancy};
use crate::error::AppError;

/// One qualifying city with its vacancy count and median ruble salary.
#[derive(Debug, Clone, PartialEq)]
pub struct CityMedian {
    pub city: String,
    pub count: usize,
    pub median: f64,
}

impl From<&CityMedian> for ChartRecord {
    fn from(cm: &CityMedian) -> Self {
        ChartRecord {
            key: format!("{} ({})", cm.city, cm.count),
            value: cm.median,
        }
    }
}

/// Groups vacancies by city and reports the median of the per-vacancy
/// average salaries, skipping cities below `min_group_size`.
#[derive(Debug)]
pub struct MedianClassifier {
    vacancies: Vec<Vacancy>,
    min_group_size: usize,
}

impl MedianClassifier {
    /// Fails (exit 3) when handed nothing to classify.
    pub fn new(vacancies: Vec<Vacancy>, min_group_size: usize) -> Result<Self, AppError> {
        if vacancies.is_empty() {
            return Err(AppError::new(3, "No vacancies to classify."));
        }
        Ok(Self {
            vacancies,
            min_group_size,
        })
    }

    /// Per-city medians in ascending city order.
    pub fn city_medians(&self) -> Result<Vec<CityMedian>, AppError> {
        let sorted = filter_and_sort(&self.vacancies, |v| Ok(v.area.name.clone()))?;

        let mut out = Vec::new();
        for group in sorted.chunk_by(|a, b| a.area.name == b.area.name) {
            if group.len() < self.min_group_size {
                continue;
            }
            let mut salaries = Vec::with_capacity(group.len());
            for v in group {
                salaries.push(average_salary(v)?);
            }
            // Groups are non-empty by construction.
            let Some(median) = median(&salaries) else {
                continue;
            };
            out.push(CityMedian {
                city: group[0].area.name.clone(),
                count: group.len(),
                median,
            });
        }
        Ok(out)
    }
}

impl Classify for MedianClassifier {
    fn classify(&self) -> Result<Vec<ChartRecord>, AppError> {
        Ok(self.city_medians()?.iter().map(ChartRecord::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::test_support::*;

    #[test]
    fn empty_input_is_rejected_at_construction() {
        let err = MedianClassifier::new(vec![], 5).unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn small_city_groups_are_dropped() {
        let mut input = Vec::new();
        for _ in 0..5 {
            input.push(ruble_vacancy("Moscow", 60_000.0, 60_000.0));
        }
        for _ in 0..4 {
            input.push(ruble_vacancy("Kazan", 50_000.0, 50_000.0));
        }

        let classifier = MedianClassifier::new(input, 5).unwrap();
        let medians = classifier.city_medians().unwrap();
        assert_eq!(medians.len(), 1);
        assert_eq!(medians[0].city, "Moscow");
    }

    #[test]
    fn moscow_median_end_to_end() {
        let mut input = Vec::new();
        for salary in [50_000.0, 60_000.0, 70_000.0, 80_000.0, 90_000.0, 100_000.0] {
            input.push(ruble_vacancy("Moscow", salary, salary));
        }
        input.push(ruble_vacancy("Tver", 30_000.0, 30_000.0));
        input.push(ruble_vacancy("Tver", 35_000.0, 35_000.0));

        let classifier = MedianClassifier::new(input, 5).unwrap();
        let records = classifier.classify().unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].key, "Moscow (6)");
        assert_eq!(records[0].value, 75_000.0);
    }

    #[test]
    fn output_follows_ascending_city_order() {
        let mut input = Vec::new();
        for city in ["Samara", "Kazan", "Moscow"] {
            for _ in 0..5 {
                input.push(ruble_vacancy(city, 40_000.0, 40_000.0));
            }
        }

        let classifier = MedianClassifier::new(input, 5).unwrap();
        let medians = classifier.city_medians().unwrap();
        let cities: Vec<&str> = medians.iter().map(|m| m.city.as_str()).collect();
        assert_eq!(cities, vec!["Kazan", "Moscow", "Samara"]);
    }

    #[test]
    fn non_ruble_vacancies_do_not_count_toward_groups() {
        let mut input = Vec::new();
        for _ in 0..4 {
            input.push(ruble_vacancy("Moscow", 60_000.0, 60_000.0));
        }
        // A fifth listing in euros must not push Moscow over the threshold.
        input.push(vacancy("Moscow", Some(5_000.0), Some(5_000.0), "EUR"));

        let classifier = MedianClassifier::new(input, 5).unwrap();
        assert!(classifier.city_medians().unwrap().is_empty());
    }
}
