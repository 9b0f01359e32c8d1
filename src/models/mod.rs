//! Core data models for expense-forecast
//!
//! Expenses are deliberately small: a date, a category from a fixed set,
//! and a non-negative amount.

pub mod category;
pub mod transaction;

pub use category::Category;
pub use transaction::{parse_amount, parse_date, Transaction};
