//! Terminal display formatting
//!
//! Plain-text tables and helpers shared by the CLI and the reports.

pub mod expense;
pub mod report;

pub use expense::{format_added, format_expense_table};
pub use report::{format_amount, format_bar, format_percentage, month_name};
