//! Next-month spending forecast
//!
//! # Architecture
//!
//! - `aggregator`: snapshot -> `MonthlySeries` (total per month-number)
//! - `regression`: ordinary least squares `LinearTrend`
//! - `model`: the persisted `FittedModel` and the `Forecast` result
//! - `forecaster`: `Forecaster`, which ties the above to a `ModelStore`
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use expense_forecast::forecast::Forecaster;
//! use expense_forecast::models::{Category, Transaction};
//! use expense_forecast::storage::MemoryModelStore;
//!
//! let snapshot = vec![
//!     Transaction::new(NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(), Category::Food, 100.0),
//!     Transaction::new(NaiveDate::from_ymd_opt(2025, 2, 10).unwrap(), Category::Bills, 200.0),
//! ];
//!
//! let forecaster = Forecaster::new(MemoryModelStore::new());
//! forecaster.fit(&snapshot).unwrap();
//! let forecast = forecaster.predict(&snapshot).unwrap().unwrap();
//! assert_eq!(forecast.target_month, 3);
//! ```

pub mod aggregator;
pub mod forecaster;
pub mod model;
pub mod regression;

pub use aggregator::{latest_month, next_month, MonthlySeries, MonthlyTotal};
pub use forecaster::Forecaster;
pub use model::{FittedModel, Forecast, ModelState, MODEL_SCHEMA_VERSION};
pub use regression::LinearTrend;
