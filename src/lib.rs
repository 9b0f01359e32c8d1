//! expense-forecast - expense tracking with a naive next-month forecast
//!
//! Records discretionary expenses, compares total spending with a monthly
//! budget, and forecasts next month's spending from a linear trend over
//! monthly totals.
//!
//! # Architecture
//!
//! - `config`: data directory resolution and user settings
//! - `error`: custom error types
//! - `models`: expenses and categories
//! - `storage`: CSV record store, model slot, atomic JSON writes
//! - `forecast`: monthly aggregation, trend fitting, train/predict lifecycle
//! - `services`: business logic on top of storage
//! - `reports`: budget status and category breakdown
//! - `audit`: append-only audit log
//! - `display`, `cli`: terminal presentation
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_forecast::config::ExpensePaths;
//! use expense_forecast::services::ForecastService;
//! use expense_forecast::storage::Storage;
//!
//! let storage = Storage::new(ExpensePaths::new()?)?;
//! let service = ForecastService::new(&storage);
//! service.train()?;
//! if let Some(forecast) = service.predict()? {
//!     println!("next month: {:.2}", forecast.amount);
//! }
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod forecast;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
