//! Forecast service
//!
//! Connects the forecaster to the on-disk record store and model slot:
//! every call reads a fresh snapshot, and successful fits are audited.

use crate::audit::AuditEntry;
use crate::error::ExpenseResult;
use crate::forecast::{FittedModel, Forecast, Forecaster, ModelState};
use crate::models::Transaction;
use crate::storage::{FileModelStore, ModelStore, Storage, TransactionSource};

/// Service for training and querying the spending forecast
pub struct ForecastService<'a> {
    storage: &'a Storage,
    forecaster: Forecaster<&'a FileModelStore>,
}

impl<'a> ForecastService<'a> {
    /// Create a new forecast service
    pub fn new(storage: &'a Storage) -> Self {
        Self {
            storage,
            forecaster: Forecaster::new(&storage.model),
        }
    }

    /// Fit a new model on every recorded expense
    ///
    /// Returns `None` when there are no expenses; the stored model is kept.
    pub fn train(&self) -> ExpenseResult<Option<FittedModel>> {
        let snapshot = self.snapshot()?;
        let model = self.forecaster.fit(&snapshot)?;

        if let Some(model) = &model {
            self.storage.log(&AuditEntry::train(
                format!(
                    "{} months, next = {:.2} + {:.2} * month",
                    model.months.len(),
                    model.trend.intercept(),
                    model.trend.slope()
                ),
                model,
            ))?;
        }

        Ok(model)
    }

    /// Forecast next month's spending
    ///
    /// Returns `None` when there are no expenses or no model has been trained.
    pub fn predict(&self) -> ExpenseResult<Option<Forecast>> {
        let snapshot = self.snapshot()?;
        self.forecaster.predict(&snapshot)
    }

    /// Whether a trained model is available
    pub fn status(&self) -> ExpenseResult<ModelState> {
        self.forecaster.state()
    }

    /// The currently stored model, if any
    pub fn current_model(&self) -> ExpenseResult<Option<FittedModel>> {
        self.forecaster.store().get()
    }

    fn snapshot(&self) -> ExpenseResult<Vec<Transaction>> {
        TransactionSource::read_all(&self.storage.expenses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::config::paths::ExpensePaths;
    use crate::models::Category;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        (temp_dir, storage)
    }

    fn record(storage: &Storage, m: u32, amount: f64) {
        storage
            .expenses
            .append(&Transaction::new(
                NaiveDate::from_ymd_opt(2025, m, 10).unwrap(),
                Category::Shopping,
                amount,
            ))
            .unwrap();
    }

    #[test]
    fn test_train_and_predict_from_store() {
        let (_temp_dir, storage) = create_test_storage();
        record(&storage, 1, 100.0);
        record(&storage, 2, 200.0);

        let service = ForecastService::new(&storage);
        assert_eq!(service.status().unwrap(), ModelState::NoModel);
        assert!(service.predict().unwrap().is_none());

        let model = service.train().unwrap().unwrap();
        assert_eq!(model.months, vec![1, 2]);
        assert!(storage.paths().model_file().exists());
        assert_eq!(service.status().unwrap(), ModelState::Trained);

        let forecast = service.predict().unwrap().unwrap();
        assert_eq!(forecast.target_month, 3);
        assert!((forecast.amount - 300.0).abs() < 1e-9);

        let entries = storage.audit().read_all().unwrap();
        assert_eq!(entries.last().unwrap().operation, Operation::Train);
    }

    #[test]
    fn test_train_without_data_keeps_model_and_skips_audit() {
        let (_temp_dir, storage) = create_test_storage();
        record(&storage, 4, 80.0);

        let service = ForecastService::new(&storage);
        let first = service.train().unwrap().unwrap();

        storage.expenses.clear().unwrap();
        assert!(service.train().unwrap().is_none());
        assert_eq!(service.current_model().unwrap(), Some(first));
        assert_eq!(storage.audit().read_all().unwrap().len(), 1);

        // Store is empty again, so prediction is unavailable despite the model
        assert!(service.predict().unwrap().is_none());

        record(&storage, 4, 1.0);
        let forecast = service.predict().unwrap().unwrap();
        assert_eq!(forecast.target_month, 5);
        assert!((forecast.amount - 80.0).abs() < 1e-9);
    }
}
