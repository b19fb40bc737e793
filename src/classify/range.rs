//! Vacancy counts per fixed-width salary bracket.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::classify::{average_salary, filter_and_sort, Classify};
use crate::domain::{ChartRecord, Vacancy};
use crate::error::AppError;

/// Default bracket width, in rubles.
pub const BUCKET_WIDTH: i64 = 20_000;

/// One in this many bracket labels gets the joke unit.
const JOKE_LABEL_ODDS: u32 = 25;

/// One salary bracket `[lower, upper)` with its vacancy count.
#[derive(Debug, Clone, PartialEq)]
pub struct SalaryBucket {
    pub lower: i64,
    pub upper: i64,
    pub label: String,
    pub count: usize,
}

impl From<&SalaryBucket> for ChartRecord {
    fn from(bucket: &SalaryBucket) -> Self {
        ChartRecord {
            key: bucket.label.clone(),
            value: bucket.count as f64,
        }
    }
}

/// Groups vacancies into half-open salary brackets of `bucket_width` rubles
/// and counts the proposals per bracket.
///
/// Bracket labels occasionally (1 in 25) swap the currency unit for "kg" — a
/// long-standing cosmetic joke in this report. The draw comes from a seeded
/// RNG so a given seed always produces the same labels.
#[derive(Debug)]
pub struct RangeClassifier {
    vacancies: Vec<Vacancy>,
    bucket_width: i64,
    label_seed: u64,
}

impl RangeClassifier {
    pub fn new(vacancies: Vec<Vacancy>, bucket_width: i64, label_seed: u64) -> Result<Self, AppError> {
        if vacancies.is_empty() {
            return Err(AppError::new(3, "No vacancies to classify."));
        }
        if bucket_width <= 0 {
            return Err(AppError::new(
                3,
                format!("Bucket width must be positive, got {bucket_width}."),
            ));
        }
        Ok(Self {
            vacancies,
            bucket_width,
            label_seed,
        })
    }

    /// Brackets in ascending salary order.
    pub fn buckets(&self) -> Result<Vec<SalaryBucket>, AppError> {
        let sorted = filter_and_sort(&self.vacancies, average_salary)?;

        let mut keys = Vec::with_capacity(sorted.len());
        for v in &sorted {
            keys.push(bucket_of(average_salary(v)?, self.bucket_width));
        }

        // The RNG restarts from the seed on every call, so repeated
        // classification of the same input yields identical labels.
        let mut rng = StdRng::seed_from_u64(self.label_seed);

        let mut out = Vec::new();
        let mut start = 0;
        while start < keys.len() {
            let lower = keys[start];
            let mut end = start + 1;
            while end < keys.len() && keys[end] == lower {
                end += 1;
            }
            let upper = lower + self.bucket_width;
            out.push(SalaryBucket {
                lower,
                upper,
                label: format!("from {lower} to {upper} {}", unit_label(&mut rng)),
                count: end - start,
            });
            start = end;
        }
        Ok(out)
    }
}

impl Classify for RangeClassifier {
    fn classify(&self) -> Result<Vec<ChartRecord>, AppError> {
        Ok(self.buckets()?.iter().map(ChartRecord::from).collect())
    }
}

/// Half-open bracket `[k*width, (k+1)*width)` containing `avg`.
fn bucket_of(avg: f64, width: i64) -> i64 {
    (avg / width as f64).floor() as i64 * width
}

fn unit_label(rng: &mut StdRng) -> &'static str {
    if rng.gen_range(1..=JOKE_LABEL_ODDS) == 1 {
        "kg"
    } else {
        "rub."
    }
}
