//! Domain model for a ledger transaction.
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::error::{LedgerError, LedgerResult};

/// Longest description accepted on create or update
pub const MAX_DESCRIPTION_LEN: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransactionKind {
    Income,
    #[default]
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }

    /// Case-insensitive parse; anything other than income/expense yields `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "income" => Some(TransactionKind::Income),
            "expense" => Some(TransactionKind::Expense),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: String,
    pub amount: f64,
    pub description: String,
    pub category: String,
    pub kind: TransactionKind,
    pub date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Transaction {
    pub fn generate_id() -> String {
        Uuid::new_v4().to_string()
    }

    /// Check the record invariants. Runs on create and again after every update.
    pub fn validate(&self) -> LedgerResult<()> {
        if !self.amount.is_finite() {
            return Err(LedgerError::validation("Amount must be a finite number"));
        }
        if self.amount < 0.0 {
            return Err(LedgerError::validation("Amount must not be negative"));
        }
        if self.description.trim().is_empty() {
            return Err(LedgerError::validation("Description must not be empty"));
        }
        if self.description.chars().count() > MAX_DESCRIPTION_LEN {
            return Err(LedgerError::validation(format!(
                "Description must be at most {} characters",
                MAX_DESCRIPTION_LEN
            )));
        }
        if self.category.trim().is_empty() {
            return Err(LedgerError::validation("Category must not be empty"));
        }
        Ok(())
    }
}

/// Drop sub-millisecond precision so stored and returned timestamps agree.
pub fn truncate_to_millis(instant: DateTime<Utc>) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(instant.timestamp_millis()).unwrap_or(instant)
}
