//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kinds of state change that get audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// An expense was recorded
    Create,
    /// The record store was emptied
    Clear,
    /// A forecast model was fitted and replaced the stored one
    Train,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Clear => write!(f, "CLEAR"),
            Operation::Train => write!(f, "TRAIN"),
        }
    }
}

/// What the operation touched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Expense,
    Model,
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityType::Expense => write!(f, "Expense"),
            EntityType::Model => write!(f, "Model"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// Type of entity affected
    pub entity_type: EntityType,

    /// Human-readable one-line summary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// JSON snapshot of the entity after the operation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<serde_json::Value>,
}

impl AuditEntry {
    /// Entry for a newly recorded expense
    pub fn create<T: Serialize>(entity_type: EntityType, summary: impl Into<String>, entity: &T) -> Self {
        Self::with_payload(Operation::Create, entity_type, summary, entity)
    }

    /// Entry for a freshly fitted model
    pub fn train<T: Serialize>(summary: impl Into<String>, model: &T) -> Self {
        Self::with_payload(Operation::Train, EntityType::Model, summary, model)
    }

    /// Entry for emptying the record store
    pub fn clear(removed: usize) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Clear,
            entity_type: EntityType::Expense,
            summary: Some(format!("removed {} expenses", removed)),
            payload: None,
        }
    }

    fn with_payload<T: Serialize>(
        operation: Operation,
        entity_type: EntityType,
        summary: impl Into<String>,
        entity: &T,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            entity_type,
            summary: Some(summary.into()),
            payload: serde_json::to_value(entity).ok(),
        }
    }

    /// Format the entry as a single human-readable line
    pub fn format_human_readable(&self) -> String {
        let mut line = format!(
            "{} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.operation,
            self.entity_type
        );
        if let Some(summary) = &self.summary {
            line.push_str(": ");
            line.push_str(summary);
        }
        line
    }
}
