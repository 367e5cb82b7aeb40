//! # Storage Traits
//!
//! Storage abstraction consumed by the domain services.

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::date_range::TransactionFilter;
use crate::domain::models::transaction::Transaction;

/// Interface for transaction storage operations
#[async_trait]
pub trait TransactionStorage: Send + Sync {
    /// Store a new transaction
    async fn store_transaction(&self, transaction: &Transaction) -> Result<()>;

    /// Retrieve a specific transaction by ID
    async fn get_transaction(&self, transaction_id: &str) -> Result<Option<Transaction>>;

    /// List transactions matching the filter, most recent date first
    async fn list_transactions(&self, filter: &TransactionFilter) -> Result<Vec<Transaction>>;

    /// Overwrite every mutable column of an existing transaction.
    /// Returns false when no transaction has that ID.
    async fn update_transaction(&self, transaction: &Transaction) -> Result<bool>;

    /// Returns true if the transaction was found and deleted
    async fn delete_transaction(&self, transaction_id: &str) -> Result<bool>;
}

/// Factory for repositories bound to one storage backend
pub trait Connection: Send + Sync + Clone {
    type TransactionRepository: TransactionStorage + Clone;

    fn create_transaction_repository(&self) -> Self::TransactionRepository;
}
