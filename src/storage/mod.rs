//! Storage layer for expense-forecast
//!
//! Two independent pieces of state live on disk:
//!
//! - the expense record store (`expenses.csv`), read as a whole snapshot
//! - the model slot (`expense_model.json`), holding the current forecast model

pub mod expenses;
pub mod file_io;
pub mod model_store;

pub use expenses::ExpenseStore;
pub use file_io::{read_json_optional, write_json_atomic};
pub use model_store::{FileModelStore, MemoryModelStore, ModelStore};

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::paths::ExpensePaths;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Transaction;

/// Read contract of a transaction log
///
/// Returns the complete current snapshot. Order is not significant.
pub trait TransactionSource {
    fn read_all(&self) -> ExpenseResult<Vec<Transaction>>;
}

impl TransactionSource for [Transaction] {
    fn read_all(&self) -> ExpenseResult<Vec<Transaction>> {
        Ok(self.to_vec())
    }
}

impl TransactionSource for Vec<Transaction> {
    fn read_all(&self) -> ExpenseResult<Vec<Transaction>> {
        Ok(self.clone())
    }
}

/// Main storage coordinator
pub struct Storage {
    paths: ExpensePaths,
    pub expenses: ExpenseStore,
    pub model: FileModelStore,
    audit: AuditLogger,
}

impl Storage {
    /// Create a new Storage instance, making sure the data directory exists
    pub fn new(paths: ExpensePaths) -> Result<Self, ExpenseError> {
        paths.ensure_directories()?;

        Ok(Self {
            expenses: ExpenseStore::new(paths.expenses_file()),
            model: FileModelStore::new(paths.model_file()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &ExpensePaths {
        &self.paths
    }

    /// Create the record store file if it does not exist yet
    pub fn init(&self) -> ExpenseResult<()> {
        self.expenses.init()
    }

    /// Get the audit logger
    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Append an entry to the audit log
    pub fn log(&self, entry: &AuditEntry) -> ExpenseResult<()> {
        self.audit.log(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert!(!storage.paths().expenses_file().exists());

        storage.init().unwrap();
        assert!(storage.paths().expenses_file().exists());
        assert!(!storage.paths().model_file().exists());
    }
}
