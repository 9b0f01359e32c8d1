//! Expense service
//!
//! Records, lists and clears expenses. Amount text is validated here, so
//! nothing downstream ever sees a malformed amount.

use chrono::NaiveDate;
use tracing::info;

use crate::audit::{AuditEntry, EntityType};
use crate::error::ExpenseResult;
use crate::models::{parse_amount, Category, Transaction};
use crate::storage::Storage;

/// Input for recording a new expense
#[derive(Debug, Clone)]
pub struct AddExpenseInput {
    pub date: NaiveDate,
    pub category: Category,
    /// Amount as typed by the user
    pub amount: String,
}

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a new expense
    pub fn add(&self, input: AddExpenseInput) -> ExpenseResult<Transaction> {
        let amount = parse_amount(&input.amount)?;
        let txn = Transaction::new(input.date, input.category, amount);

        self.storage.expenses.append(&txn)?;
        self.storage.log(&AuditEntry::create(
            EntityType::Expense,
            format!("{} {:.2} on {}", txn.category, txn.amount, txn.date),
            &txn,
        ))?;

        Ok(txn)
    }

    /// Record several already-validated expenses
    pub fn add_all(&self, transactions: &[Transaction]) -> ExpenseResult<()> {
        for txn in transactions {
            self.storage.expenses.append(txn)?;
            self.storage.log(&AuditEntry::create(
                EntityType::Expense,
                format!("{} {:.2} on {}", txn.category, txn.amount, txn.date),
                txn,
            ))?;
        }
        Ok(())
    }

    /// List every recorded expense in the order they were added
    pub fn list(&self) -> ExpenseResult<Vec<Transaction>> {
        self.storage.expenses.read_all()
    }

    /// Remove every recorded expense
    ///
    /// The stored forecast model is left alone.
    pub fn clear(&self) -> ExpenseResult<usize> {
        let removed = self.storage.expenses.clear()?;
        self.storage.log(&AuditEntry::clear(removed))?;
        info!(removed, "all expenses cleared");
        Ok(removed)
    }

    /// Sum of every recorded amount
    pub fn total_spent(&self) -> ExpenseResult<f64> {
        Ok(self.list()?.iter().map(|t| t.amount).sum())
    }
}
