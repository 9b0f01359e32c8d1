//! Audit logging for expense-forecast
//!
//! Records every state change (expense added, store cleared, model fitted)
//! in an append-only JSONL log next to the settings file.
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_forecast::audit::{AuditEntry, AuditLogger, EntityType};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::create(EntityType::Expense, "Food 250.00", &txn))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
