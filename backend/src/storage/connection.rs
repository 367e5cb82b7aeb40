use anyhow::Result;
use sqlx::{migrate::MigrateDatabase, Sqlite, SqlitePool};
use std::sync::Arc;
use tracing::info;

use crate::storage::repositories::TransactionRepository;
use crate::storage::traits::Connection;

/// DbConnection owns the SQLite pool shared by all repositories
#[derive(Clone)]
pub struct DbConnection {
    pool: Arc<SqlitePool>,
}

impl DbConnection {
    /// Open (creating if needed) the database at `url` and make sure the schema exists
    pub async fn new(url: &str) -> Result<Self> {
        if !Sqlite::database_exists(url).await.unwrap_or(false) {
            info!("Creating database {}", url);
            Sqlite::create_database(url).await?
        }

        let pool = SqlitePool::connect(url).await?;
        Self::setup_schema(&pool).await?;

        Ok(Self { pool: Arc::new(pool) })
    }

    /// Initialize a private in-memory database for a single test
    #[cfg(test)]
    pub async fn init_test() -> Result<Self> {
        let test_id = uuid::Uuid::new_v4().to_string();
        let db_url = format!("file:memdb_{}?mode=memory&cache=shared", test_id);

        Self::new(&db_url).await
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    async fn setup_schema(pool: &SqlitePool) -> Result<()> {
        // Timestamps are unix epoch milliseconds so range filters compare integers.
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS transactions (
                id TEXT PRIMARY KEY,
                amount REAL NOT NULL,
                description TEXT NOT NULL,
                category TEXT NOT NULL,
                kind TEXT NOT NULL CHECK (kind IN ('income', 'expense')),
                date INTEGER NOT NULL,
                created_at INTEGER NOT NULL,
                updated_at INTEGER NOT NULL
            );
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_transactions_date
            ON transactions(date DESC);
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }
}

impl Connection for DbConnection {
    type TransactionRepository = TransactionRepository;

    fn create_transaction_repository(&self) -> Self::TransactionRepository {
        TransactionRepository::new(self.clone())
    }
}
