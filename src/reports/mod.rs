//! Reports module for expense-forecast
//!
//! Budget status against the monthly budget and spending by category.

pub mod budget_status;
pub mod spending;

pub use budget_status::BudgetStatus;
pub use spending::{CategorySpending, CategorySummary};
