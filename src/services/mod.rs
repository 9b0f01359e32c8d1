//! Service layer for expense-forecast
//!
//! The service layer provides business logic on top of the storage layer,
//! handling input validation and audit logging.

pub mod expense;
pub mod forecast;
pub mod sample;

pub use expense::{AddExpenseInput, ExpenseService};
pub use forecast::ForecastService;
pub use sample::generate_sample;
