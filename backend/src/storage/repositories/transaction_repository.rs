use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use crate::domain::date_range::TransactionFilter;
use crate::domain::models::transaction::{Transaction, TransactionKind};
use crate::storage::connection::DbConnection;
use crate::storage::traits::TransactionStorage;

const SELECT_COLUMNS: &str =
    "SELECT id, amount, description, category, kind, date, created_at, updated_at FROM transactions";

/// Repository for transaction operations
#[derive(Clone)]
pub struct TransactionRepository {
    db: DbConnection,
}

impl TransactionRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn row_to_transaction(row: &SqliteRow) -> Result<Transaction> {
        let kind: String = row.try_get("kind")?;
        let kind = TransactionKind::parse(&kind)
            .ok_or_else(|| anyhow!("Unknown transaction kind in storage: {}", kind))?;

        Ok(Transaction {
            id: row.try_get("id")?,
            amount: row.try_get("amount")?,
            description: row.try_get("description")?,
            category: row.try_get("category")?,
            kind,
            date: from_millis(row.try_get("date")?)?,
            created_at: from_millis(row.try_get("created_at")?)?,
            updated_at: from_millis(row.try_get("updated_at")?)?,
        })
    }
}

fn from_millis(millis: i64) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis)
        .ok_or_else(|| anyhow!("Timestamp out of range: {}", millis))
}

#[async_trait]
impl TransactionStorage for TransactionRepository {
    async fn store_transaction(&self, transaction: &Transaction) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO transactions (id, amount, description, category, kind, date, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&transaction.id)
        .bind(transaction.amount)
        .bind(&transaction.description)
        .bind(&transaction.category)
        .bind(transaction.kind.as_str())
        .bind(transaction.date.timestamp_millis())
        .bind(transaction.created_at.timestamp_millis())
        .bind(transaction.updated_at.timestamp_millis())
        .execute(self.db.pool())
        .await?;
        Ok(())
    }

    async fn get_transaction(&self, transaction_id: &str) -> Result<Option<Transaction>> {
        let query_str = format!("{} WHERE id = ?", SELECT_COLUMNS);
        let row = sqlx::query(&query_str)
            .bind(transaction_id)
            .fetch_optional(self.db.pool())
            .await?;

        row.as_ref().map(Self::row_to_transaction).transpose()
    }

    async fn list_transactions(&self, filter: &TransactionFilter) -> Result<Vec<Transaction>> {
        let mut conditions = Vec::new();
        if filter.date_range.is_some() {
            conditions.push("date >= ? AND date <= ?");
        }
        if filter.kind.is_some() {
            conditions.push("kind = ?");
        }

        let mut query_str = SELECT_COLUMNS.to_string();
        if !conditions.is_empty() {
            query_str.push_str(" WHERE ");
            query_str.push_str(&conditions.join(" AND "));
        }
        query_str.push_str(" ORDER BY date DESC, created_at DESC");

        let mut query = sqlx::query(&query_str);
        if let Some(range) = filter.date_range {
            query = query
                .bind(range.start.timestamp_millis())
                .bind(range.end.timestamp_millis());
        }
        if let Some(kind) = filter.kind {
            query = query.bind(kind.as_str());
        }

        let rows = query.fetch_all(self.db.pool()).await?;
        rows.iter().map(Self::row_to_transaction).collect()
    }

    async fn update_transaction(&self, transaction: &Transaction) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE transactions
            SET amount = ?, description = ?, category = ?, kind = ?, date = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(transaction.amount)
        .bind(&transaction.description)
        .bind(&transaction.category)
        .bind(transaction.kind.as_str())
        .bind(transaction.date.timestamp_millis())
        .bind(transaction.updated_at.timestamp_millis())
        .bind(&transaction.id)
        .execute(self.db.pool())
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_transaction(&self, transaction_id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM transactions WHERE id = ?")
            .bind(transaction_id)
            .execute(self.db.pool())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
