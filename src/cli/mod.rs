//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod expense;
pub mod forecast;
pub mod report;

pub use expense::{handle_add, handle_clear, handle_list, handle_sample};
pub use forecast::{handle_model, handle_predict, handle_train};
pub use report::{handle_budget, handle_history, handle_summary};
