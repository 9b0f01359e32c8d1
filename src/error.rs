//! Custom error types for expense-forecast
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for expense-forecast operations
#[derive(Error, Debug)]
pub enum ExpenseError {
    /// The transaction snapshot is empty, so there is nothing to fit or forecast from
    #[error("Insufficient data: no expenses have been recorded")]
    InsufficientData,

    /// Prediction was requested before any model was trained
    #[error("No trained model found")]
    ModelNotFound,

    /// An amount that is not a finite, non-negative number
    #[error("Malformed amount: {0}")]
    MalformedAmount(String),

    /// A category name outside the fixed category set
    #[error("Unknown category: {0}")]
    InvalidCategory(String),

    /// A date that could not be parsed
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// CSV record store errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// Validation errors for user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl ExpenseError {
    /// Create a malformed amount error
    pub fn malformed_amount(input: impl Into<String>) -> Self {
        Self::MalformedAmount(input.into())
    }

    /// Check if this error means "no forecast can be produced right now"
    ///
    /// These are the two conditions the forecaster reports as an absent
    /// result rather than a failure.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::InsufficientData | Self::ModelNotFound)
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Validation(_)
                | Self::MalformedAmount(_)
                | Self::InvalidCategory(_)
                | Self::InvalidDate(_)
        )
    }
}

impl From<std::io::Error> for ExpenseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ExpenseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for ExpenseError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

/// Result type alias for expense-forecast operations
pub type ExpenseResult<T> = Result<T, ExpenseError>;
