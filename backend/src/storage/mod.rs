//! # Storage Module
//!
//! Persistence for ledger transactions. The domain layer only sees the
//! `TransactionStorage` and `Connection` traits; SQLite through SQLx is the
//! implementation shipped here.

pub mod connection;
pub mod repositories;
pub mod traits;

pub use connection::DbConnection;
pub use repositories::TransactionRepository;
pub use traits::{Connection, TransactionStorage};
