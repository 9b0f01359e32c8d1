//! Single-slot storage for the forecast model
//!
//! There is only ever one current model. `put` replaces it, `get` returns it
//! if one has been stored.

use std::path::{Path, PathBuf};
use std::sync::RwLock;

use tracing::debug;

use crate::error::{ExpenseError, ExpenseResult};
use crate::forecast::model::{FittedModel, MODEL_SCHEMA_VERSION};

use super::file_io::{read_json_optional, write_json_atomic};

/// A slot holding at most one fitted model
pub trait ModelStore {
    /// Store `model`, replacing whatever was there
    fn put(&self, model: &FittedModel) -> ExpenseResult<()>;

    /// Get the stored model, if any
    fn get(&self) -> ExpenseResult<Option<FittedModel>>;

    /// Check if a model has been stored
    fn contains(&self) -> ExpenseResult<bool> {
        Ok(self.get()?.is_some())
    }
}

impl<T: ModelStore + ?Sized> ModelStore for &T {
    fn put(&self, model: &FittedModel) -> ExpenseResult<()> {
        (**self).put(model)
    }

    fn get(&self) -> ExpenseResult<Option<FittedModel>> {
        (**self).get()
    }

    fn contains(&self) -> ExpenseResult<bool> {
        (**self).contains()
    }
}

/// Model slot persisted as a JSON file at a fixed path
pub struct FileModelStore {
    path: PathBuf,
}

impl FileModelStore {
    /// Create a store for the given artifact path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the artifact file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ModelStore for FileModelStore {
    fn put(&self, model: &FittedModel) -> ExpenseResult<()> {
        write_json_atomic(&self.path, model)?;
        debug!(path = %self.path.display(), "stored forecast model");
        Ok(())
    }

    fn get(&self) -> ExpenseResult<Option<FittedModel>> {
        let model: Option<FittedModel> = read_json_optional(&self.path)?;

        if let Some(model) = &model {
            if model.schema_version > MODEL_SCHEMA_VERSION {
                return Err(ExpenseError::Storage(format!(
                    "Model artifact {} uses schema version {}, this build understands up to {}",
                    self.path.display(),
                    model.schema_version,
                    MODEL_SCHEMA_VERSION
                )));
            }
        }

        Ok(model)
    }

    fn contains(&self) -> ExpenseResult<bool> {
        Ok(self.path.exists())
    }
}

/// Model slot held in memory
#[derive(Default)]
pub struct MemoryModelStore {
    slot: RwLock<Option<FittedModel>>,
}

impl MemoryModelStore {
    /// Create an empty slot
    pub fn new() -> Self {
        Self::default()
    }
}

impl ModelStore for MemoryModelStore {
    fn put(&self, model: &FittedModel) -> ExpenseResult<()> {
        let mut slot = self.slot.write().map_err(|e| {
            ExpenseError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        *slot = Some(model.clone());
        Ok(())
    }

    fn get(&self) -> ExpenseResult<Option<FittedModel>> {
        let slot = self.slot.read().map_err(|e| {
            ExpenseError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(slot.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forecast::regression::LinearTrend;
    use tempfile::TempDir;

    fn model(intercept_at: f64) -> FittedModel {
        let trend = LinearTrend::fit(&[(1.0, intercept_at), (2.0, intercept_at + 10.0)]).unwrap();
        FittedModel::new(trend, vec![1, 2])
    }

    #[test]
    fn test_file_store_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileModelStore::new(temp_dir.path().join("models").join("m.json"));

        assert!(store.get().unwrap().is_none());
        assert!(!store.contains().unwrap());
    }

    #[test]
    fn test_file_store_put_creates_directory_and_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("models").join("m.json");
        let store = FileModelStore::new(path.clone());

        let stored = model(100.0);
        store.put(&stored).unwrap();

        assert!(path.exists());
        assert_eq!(store.get().unwrap(), Some(stored));
    }

    #[test]
    fn test_file_store_put_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileModelStore::new(temp_dir.path().join("m.json"));

        store.put(&model(100.0)).unwrap();
        let second = model(500.0);
        store.put(&second).unwrap();

        let loaded = store.get().unwrap().unwrap();
        assert_eq!(loaded, second);
        assert_eq!(loaded.predict_month(1), 500.0);
    }

    #[test]
    fn test_file_store_rejects_newer_schema() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileModelStore::new(temp_dir.path().join("m.json"));

        let mut future = model(1.0);
        future.schema_version = MODEL_SCHEMA_VERSION + 1;
        store.put(&future).unwrap();

        assert!(matches!(store.get(), Err(ExpenseError::Storage(_))));
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryModelStore::new();
        assert!(!store.contains().unwrap());

        store.put(&model(42.0)).unwrap();
        assert!(store.contains().unwrap());
        assert_eq!(store.get().unwrap().unwrap().predict_month(1), 42.0);
    }
}
