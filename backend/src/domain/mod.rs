//! # Domain Module
//!
//! Business logic for the ledger, independent of HTTP and of the storage
//! engine.
//!
//! ## Module Organization
//!
//! - **models**: the transaction record and its invariants
//! - **clock**: injectable time source
//! - **date_range**: day-range and kind filters built from query parameters
//! - **balance_service**: income/expense classification and totals
//! - **transaction_service**: CRUD, the income shortcut and date listings
//! - **commands**: internal inputs filled in by the REST mappers
//! - **error**: the error type every service returns
//!
//! ## Business Rules
//!
//! - Amounts are never negative; direction lives in the kind
//! - Descriptions and categories must be non-empty
//! - A day is `[00:00:00.000, 23:59:59.999]` in server-local time
//! - Balances classify by kind first and fall back to the category label

pub mod balance_service;
pub mod clock;
pub mod commands;
pub mod date_range;
pub mod error;
pub mod models;
pub mod transaction_service;

pub use balance_service::*;
pub use clock::*;
pub use date_range::*;
pub use error::*;
pub use transaction_service::*;
