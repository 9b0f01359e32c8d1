//! Sample data generation
//!
//! Produces plausible random expenses from the last month so the reports and
//! the forecast have something to work with on a fresh install.

use chrono::{Duration, NaiveDate};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{Category, Transaction};

/// Categories sample expenses are drawn from
const SAMPLE_CATEGORIES: [Category; 5] = [
    Category::Food,
    Category::Travel,
    Category::Shopping,
    Category::Bills,
    Category::Entertainment,
];

const MAX_DAYS_BACK: i64 = 30;
const MIN_AMOUNT: f64 = 50.0;
const MAX_AMOUNT: f64 = 500.0;

/// Generate `count` random expenses dated within 30 days before `today`
pub fn generate_sample<R: Rng>(
    rng: &mut R,
    today: NaiveDate,
    count: usize,
) -> Vec<Transaction> {
    (0..count)
        .map(|_| {
            let days_back = rng.gen_range(0..=MAX_DAYS_BACK);
            let category = *SAMPLE_CATEGORIES
                .choose(&mut *rng)
                .unwrap_or(&Category::Other);
            let amount = (rng.gen_range(MIN_AMOUNT..MAX_AMOUNT) * 100.0).round() / 100.0;
            Transaction::new(today - Duration::days(days_back), category, amount)
        })
        .collect()
}
