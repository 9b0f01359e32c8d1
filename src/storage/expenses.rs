//! Expense record store backed by expenses.csv
//!
//! Rows are `date,category,amount`. The store is append-only apart from
//! `clear`, which truncates it back to the header.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Transaction;

use super::TransactionSource;

const HEADER: [&str; 3] = ["date", "category", "amount"];

/// CSV-backed store of recorded expenses
pub struct ExpenseStore {
    path: PathBuf,
}

impl ExpenseStore {
    /// Create a store for the given CSV path
    ///
    /// Nothing is touched on disk until the first read or write.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the backing CSV file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Ensure the data directory and a header-only file exist
    pub fn init(&self) -> ExpenseResult<()> {
        if self.path.exists() {
            return Ok(());
        }

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ExpenseError::Storage(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        self.write_header_only()?;
        debug!(path = %self.path.display(), "initialized expense store");
        Ok(())
    }

    /// Append one expense to the store
    pub fn append(&self, txn: &Transaction) -> ExpenseResult<()> {
        txn.validate()?;
        self.init()?;

        let file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .map_err(|e| ExpenseError::Storage(format!("Failed to open expense store: {}", e)))?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        writer.serialize(txn)?;
        writer.flush()?;

        debug!(date = %txn.date, category = %txn.category, amount = txn.amount, "appended expense");
        Ok(())
    }

    /// Read every recorded expense, in file order
    ///
    /// A missing file reads as an empty store.
    pub fn read_all(&self) -> ExpenseResult<Vec<Transaction>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut reader = csv::Reader::from_path(&self.path)?;
        let mut transactions = Vec::new();

        for (index, row) in reader.deserialize::<Transaction>().enumerate() {
            // Line 1 is the header
            let line = index + 2;
            let txn = row.map_err(|e| {
                ExpenseError::Csv(format!("Failed to parse expense at line {}: {}", line, e))
            })?;
            txn.validate().map_err(|e| {
                ExpenseError::Csv(format!("Invalid expense at line {}: {}", line, e))
            })?;
            transactions.push(txn);
        }

        Ok(transactions)
    }

    /// Number of recorded expenses
    pub fn count(&self) -> ExpenseResult<usize> {
        Ok(self.read_all()?.len())
    }

    /// Remove every expense, keeping an empty header-only file
    ///
    /// Returns how many expenses were removed.
    pub fn clear(&self) -> ExpenseResult<usize> {
        let removed = self.count()?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        self.write_header_only()?;
        info!(removed, "cleared expense store");
        Ok(removed)
    }

    fn write_header_only(&self) -> ExpenseResult<()> {
        let mut writer = csv::Writer::from_path(&self.path)?;
        writer.write_record(HEADER)?;
        writer.flush()?;
        Ok(())
    }
}

impl TransactionSource for ExpenseStore {
    fn read_all(&self) -> ExpenseResult<Vec<Transaction>> {
        ExpenseStore::read_all(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, ExpenseStore) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data").join("expenses.csv");
        (temp_dir, ExpenseStore::new(path))
    }

    fn txn(y: i32, m: u32, d: u32, category: Category, amount: f64) -> Transaction {
        Transaction::new(NaiveDate::from_ymd_opt(y, m, d).unwrap(), category, amount)
    }

    #[test]
    fn test_missing_file_reads_empty() {
        let (_temp_dir, store) = create_test_store();
        assert!(store.read_all().unwrap().is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_init_writes_header() {
        let (_temp_dir, store) = create_test_store();
        store.init().unwrap();

        let contents = fs::read_to_string(store.path()).unwrap();
        assert_eq!(contents.trim(), "date,category,amount");
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn test_append_and_read() {
        let (_temp_dir, store) = create_test_store();

        store.append(&txn(2025, 9, 5, Category::Food, 250.0)).unwrap();
        store.append(&txn(2025, 9, 7, Category::Travel, 99.5)).unwrap();

        let all = store.read_all().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0], txn(2025, 9, 5, Category::Food, 250.0));
        assert_eq!(all[1].category, Category::Travel);
        assert_eq!(all[1].amount, 99.5);
    }

    #[test]
    fn test_append_rejects_negative_amount() {
        let (_temp_dir, store) = create_test_store();
        let result = store.append(&txn(2025, 1, 1, Category::Other, -3.0));
        assert!(matches!(result, Err(ExpenseError::MalformedAmount(_))));
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn test_clear() {
        let (_temp_dir, store) = create_test_store();
        store.append(&txn(2025, 1, 1, Category::Bills, 10.0)).unwrap();
        store.append(&txn(2025, 2, 1, Category::Bills, 20.0)).unwrap();

        assert_eq!(store.clear().unwrap(), 2);
        assert_eq!(store.count().unwrap(), 0);

        store.append(&txn(2025, 3, 1, Category::Food, 5.0)).unwrap();
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn test_reads_hand_written_file() {
        let (_temp_dir, store) = create_test_store();
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(
            store.path(),
            "date,category,amount\n2025-09-05,Food,120.5\n2025-10-01,Shopping,300\n",
        )
        .unwrap();

        let all = store.read_all().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[1], txn(2025, 10, 1, Category::Shopping, 300.0));
    }

    #[test]
    fn test_corrupt_row_reports_line() {
        let (_temp_dir, store) = create_test_store();
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(
            store.path(),
            "date,category,amount\n2025-09-05,Food,12\n2025-09-06,Food,twelve\n",
        )
        .unwrap();

        let err = store.read_all().unwrap_err();
        assert!(err.to_string().contains("line 3"));
    }
}
