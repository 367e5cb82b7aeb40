//! Error type shared by all domain services.

use thiserror::Error;

pub type LedgerResult<T> = Result<T, LedgerError>;

#[derive(Debug, Error)]
pub enum LedgerError {
    /// A required field was absent from the request
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// A field was present but violated a record invariant
    #[error("{0}")]
    Validation(String),

    #[error("Transaction not found: {0}")]
    NotFound(String),

    /// A date parameter could not be parsed
    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    /// The store failed; the detail is logged but never shown to callers
    #[error("storage failure: {0}")]
    Storage(#[from] anyhow::Error),
}

impl LedgerError {
    pub fn validation(message: impl Into<String>) -> Self {
        LedgerError::Validation(message.into())
    }
}
