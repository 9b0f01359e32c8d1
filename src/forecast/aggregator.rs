//! Monthly aggregation of expenses
//!
//! Groups a transaction snapshot by month-number and sums each group. The
//! year is ignored, so expenses from March 2024 and March 2025 land in the
//! same bucket.

use std::collections::BTreeMap;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Transaction;

/// One row of a monthly series
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlyTotal {
    /// Month-number, 1-12
    pub month: u32,
    /// Sum of all amounts spent in that month
    pub total: f64,
}

/// Total spending per month-number, ordered by month
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonthlySeries {
    totals: BTreeMap<u32, f64>,
}

impl MonthlySeries {
    /// Build the series from a transaction snapshot
    ///
    /// An empty snapshot gives an empty series.
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let mut totals = BTreeMap::new();
        for txn in transactions {
            *totals.entry(txn.month()).or_insert(0.0) += txn.amount;
        }
        Self { totals }
    }

    /// Fail with `InsufficientData` if the series has no rows
    pub fn require_data(self) -> ExpenseResult<Self> {
        if self.is_empty() {
            Err(ExpenseError::InsufficientData)
        } else {
            Ok(self)
        }
    }

    /// Rows in ascending month order
    pub fn rows(&self) -> impl Iterator<Item = MonthlyTotal> + '_ {
        self.totals
            .iter()
            .map(|(&month, &total)| MonthlyTotal { month, total })
    }

    /// Total for a single month, if any expense fell in it
    pub fn get(&self, month: u32) -> Option<f64> {
        self.totals.get(&month).copied()
    }

    /// Observed month-numbers in ascending order
    pub fn months(&self) -> Vec<u32> {
        self.totals.keys().copied().collect()
    }

    /// Rows as `(month, total)` points for fitting
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.rows()
            .map(|row| (f64::from(row.month), row.total))
            .collect()
    }

    /// Sum over every row
    pub fn total(&self) -> f64 {
        self.totals.values().sum()
    }

    /// Number of distinct months observed
    pub fn len(&self) -> usize {
        self.totals.len()
    }

    /// Check if no month was observed
    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }
}

/// Month-number of the most recent transaction date
///
/// This is taken from the maximum date, so a December 2024 expense is older
/// than a January 2025 one and the result is 1.
pub fn latest_month(transactions: &[Transaction]) -> Option<u32> {
    transactions
        .iter()
        .max_by_key(|txn| txn.date)
        .map(Transaction::month)
}

/// The month a forecast targets: the calendar month after `last_month`
pub fn next_month(last_month: u32) -> u32 {
    (last_month % 12) + 1
}
