//! Train/predict lifecycle of the spending forecast
//!
//! `fit` turns a snapshot into a monthly series, fits a trend on it and
//! stores the result in the model slot. `predict` reloads the stored model
//! and evaluates it at the month after the latest expense.
//!
//! Both operations report "nothing to do" as `Ok(None)`: an empty snapshot
//! on either side, or no stored model on predict. The `try_` variants
//! surface those cases as `InsufficientData` / `ModelNotFound` instead.

use tracing::{debug, info};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Transaction;
use crate::storage::ModelStore;

use super::aggregator::{latest_month, next_month, MonthlySeries};
use super::model::{FittedModel, Forecast, ModelState};
use super::regression::LinearTrend;

/// Fits and evaluates the next-month forecast against a model slot
pub struct Forecaster<S: ModelStore> {
    store: S,
}

impl<S: ModelStore> Forecaster<S> {
    /// Create a forecaster over the given model slot
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Get the underlying model slot
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Fit a model on `snapshot` and store it
    ///
    /// Returns `Ok(None)` without touching the stored model when the
    /// snapshot is empty.
    pub fn fit(&self, snapshot: &[Transaction]) -> ExpenseResult<Option<FittedModel>> {
        absent_when_unavailable(self.try_fit(snapshot))
    }

    /// Fit a model on `snapshot` and store it, failing on an empty snapshot
    pub fn try_fit(&self, snapshot: &[Transaction]) -> ExpenseResult<FittedModel> {
        let series = MonthlySeries::from_transactions(snapshot).require_data()?;
        let trend = LinearTrend::fit(&series.points())?;
        let model = FittedModel::new(trend, series.months());

        self.store.put(&model)?;

        info!(
            months = series.len(),
            intercept = trend.intercept(),
            slope = trend.slope(),
            "fitted spending trend"
        );
        Ok(model)
    }

    /// Forecast spending for the month after the latest expense in `snapshot`
    ///
    /// Returns `Ok(None)` when the snapshot is empty or nothing has been
    /// fitted yet. The stored model is used as-is even if it was fitted on
    /// an older snapshot.
    pub fn predict(&self, snapshot: &[Transaction]) -> ExpenseResult<Option<Forecast>> {
        absent_when_unavailable(self.try_predict(snapshot))
    }

    /// Forecast next month, failing with `InsufficientData` or `ModelNotFound`
    pub fn try_predict(&self, snapshot: &[Transaction]) -> ExpenseResult<Forecast> {
        let last_month = latest_month(snapshot).ok_or(ExpenseError::InsufficientData)?;
        let model = self.store.get()?.ok_or(ExpenseError::ModelNotFound)?;

        let target_month = next_month(last_month);
        let amount = model.predict_month(target_month);

        debug!(last_month, target_month, amount, "evaluated forecast");
        Ok(Forecast {
            last_month,
            target_month,
            amount,
        })
    }

    /// Whether a model is available to predict with
    pub fn state(&self) -> ExpenseResult<ModelState> {
        Ok(if self.store.contains()? {
            ModelState::Trained
        } else {
            ModelState::NoModel
        })
    }
}

/// Turn the two "no result" conditions into `None`, pass everything else on
fn absent_when_unavailable<T>(result: ExpenseResult<T>) -> ExpenseResult<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.is_unavailable() => {
            debug!(reason = %e, "no result");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
