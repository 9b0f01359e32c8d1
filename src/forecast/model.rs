//! Fitted model and forecast types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::regression::LinearTrend;

/// Artifact schema this build writes and understands
pub const MODEL_SCHEMA_VERSION: u32 = 1;

/// A trained forecast model together with its fit metadata
///
/// This is exactly what gets persisted in the model slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FittedModel {
    /// Artifact schema version
    pub schema_version: u32,

    /// When the model was fitted (UTC)
    pub fitted_at: DateTime<Utc>,

    /// Trend of monthly total against month-number
    pub trend: LinearTrend,

    /// Month-numbers present in the training series
    pub months: Vec<u32>,
}

impl FittedModel {
    /// Wrap a freshly fitted trend
    pub fn new(trend: LinearTrend, months: Vec<u32>) -> Self {
        Self {
            schema_version: MODEL_SCHEMA_VERSION,
            fitted_at: Utc::now(),
            trend,
            months,
        }
    }

    /// Predicted total spending for a month-number
    pub fn predict_month(&self, month: u32) -> f64 {
        self.trend.predict_at(f64::from(month))
    }
}

/// A next-month spending forecast
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    /// Month-number of the most recent expense
    pub last_month: u32,
    /// Month-number being forecast
    pub target_month: u32,
    /// Predicted total spending for `target_month`
    pub amount: f64,
}

impl fmt::Display for Forecast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} (month {})", self.amount, self.target_month)
    }
}

/// Whether a model is currently available in the slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelState {
    /// Nothing has been fitted yet
    NoModel,
    /// A model is stored and ready to predict
    Trained,
}

impl fmt::Display for ModelState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoModel => write!(f, "No model"),
            Self::Trained => write!(f, "Trained"),
        }
    }
}
