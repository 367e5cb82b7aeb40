//! # REST API Interface Layer
//!
//! HTTP endpoints under `/api/transactions`.
//!
//! - Request/response serialization through the `shared` DTOs
//! - Error translation from `LedgerError` to HTTP status codes
//! - Request logging

pub mod balance_apis;
pub mod error;
pub mod mappers;
pub mod transaction_apis;

pub use balance_apis::*;
pub use error::ApiError;
pub use transaction_apis::*;
