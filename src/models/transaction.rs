//! Transaction model
//!
//! A recorded expense: when it happened, what it was for, and how much it cost.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use crate::error::ExpenseError;

/// A single recorded expense
///
/// Amounts are always finite and non-negative. Use [`parse_amount`] to turn
/// user input into an amount; it rejects anything else before it can reach
/// the forecasting code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Date the money was spent
    pub date: NaiveDate,

    /// Spending category
    pub category: Category,

    /// Amount spent
    pub amount: f64,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(date: NaiveDate, category: Category, amount: f64) -> Self {
        Self {
            date,
            category,
            amount,
        }
    }

    /// Month-number (1-12) of the transaction date, ignoring the year
    pub fn month(&self) -> u32 {
        self.date.month()
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), ExpenseError> {
        if !self.amount.is_finite() || self.amount < 0.0 {
            return Err(ExpenseError::malformed_amount(self.amount.to_string()));
        }
        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {:.2}",
            self.date.format("%Y-%m-%d"),
            self.category,
            self.amount
        )
    }
}

const CURRENCY_PREFIXES: [char; 4] = ['₹', '$', '€', '£'];

/// Parse an expense amount from user input
///
/// Accepts plain decimal numbers with an optional leading currency symbol
/// ("250", "99.5", "₹1200"). Rejects negatives, NaN and infinities.
pub fn parse_amount(input: &str) -> Result<f64, ExpenseError> {
    let trimmed = input.trim();
    let digits = trimmed
        .strip_prefix(CURRENCY_PREFIXES)
        .unwrap_or(trimmed)
        .trim_start();

    let amount: f64 = digits
        .parse()
        .map_err(|_| ExpenseError::malformed_amount(trimmed))?;

    if !amount.is_finite() || amount < 0.0 {
        return Err(ExpenseError::malformed_amount(trimmed));
    }

    Ok(amount)
}

/// Parse a calendar date in `YYYY-MM-DD` form
pub fn parse_date(input: &str) -> Result<NaiveDate, ExpenseError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|e| ExpenseError::InvalidDate(format!("{}: {}", input.trim(), e)))
}
