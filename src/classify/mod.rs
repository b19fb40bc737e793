//! Vacancy grouping and aggregation.
//!
//! Two classifiers share the same skeleton: restrict to ruble-denominated
//! vacancies, sort by a derived key, group consecutive equal-key runs, fold
//! each group to one `ChartRecord`. The shared pieces live here as free
//! functions; `MedianClassifier` and `RangeClassifier` supply the key and the
//! fold.

use crate::domain::{ChartRecord, Vacancy, RUBLE_CODE};
use crate::error::AppError;

pub mod median;
pub mod range;

pub use median::*;
pub use range::*;

/// The polymorphic seam both classifiers implement: vacancies in, ordered
/// chart records out.
pub trait Classify {
    fn classify(&self) -> Result<Vec<ChartRecord>, AppError>;
}

/// Representative salary of one vacancy.
///
/// With one bound absent the other stands in; with both present we take the
/// midpoint. Both bounds absent violates the `only_with_salary` precondition
/// and is a hard error.
pub fn average_salary(vacancy: &Vacancy) -> Result<f64, AppError> {
    match (vacancy.salary.from, vacancy.salary.to) {
        (None, Some(to)) => Ok(to),
        (Some(from), None) => Ok(from),
        (Some(from), Some(to)) => Ok((from + to) / 2.0),
        (None, None) => Err(AppError::new(
            3,
            format!(
                "Vacancy '{}' has neither salary bound; was the API queried with only_with_salary?",
                vacancy.name
            ),
        )),
    }
}

/// Retain ruble-denominated vacancies, stable-sorted ascending by `key`.
///
/// Grouping downstream is adjacency-based, so sorting by the grouping key
/// first is mandatory, not cosmetic.
pub fn filter_and_sort<K, F>(vacancies: &[Vacancy], key: F) -> Result<Vec<Vacancy>, AppError>
where
    K: PartialOrd,
    F: Fn(&Vacancy) -> Result<K, AppError>,
{
    let mut keyed: Vec<(K, Vacancy)> = Vec::with_capacity(vacancies.len());
    for v in vacancies {
        if v.salary.currency != RUBLE_CODE {
            continue;
        }
        keyed.push((key(v)?, v.clone()));
    }
    keyed.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
    Ok(keyed.into_iter().map(|(_, v)| v).collect())
}

/// Median of a non-empty value list (midpoint of the two central elements
/// when the length is even). Returns `None` for an empty slice.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let index = (sorted.len() - 1) / 2;
    if sorted.len() % 2 == 1 {
        Some(sorted[index])
    } else {
        Some((sorted[index] + sorted[index + 1]) / 2.0)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::domain::{Area, Salary, Vacancy};

    pub fn vacancy(city: &str, from: Option<f64>, to: Option<f64>, currency: &str) -> Vacancy {
        Vacancy {
            name: format!("{city} vacancy"),
            salary: Salary {
                from,
                to,
                currency: currency.to_string(),
            },
            area: Area {
                name: city.to_string(),
            },
        }
    }

    pub fn ruble_vacancy(city: &str, from: f64, to: f64) -> Vacancy {
        vacancy(city, Some(from), Some(to), "RUR")
    }
}
