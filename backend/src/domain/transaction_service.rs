//! Transaction service domain logic for the ledger.
use chrono::{DateTime, Utc};
use tracing::info;

use crate::domain::{
    clock::SharedClock,
    commands::transactions::{AddTodayIncomeCommand, CreateTransactionCommand, UpdateTransactionCommand},
    date_range::{DateRangeResolver, TransactionFilter},
    error::{LedgerError, LedgerResult},
    models::transaction::{truncate_to_millis, Transaction, TransactionKind},
};
use crate::storage::{Connection, TransactionStorage};

/// Category given to shortcut income when the caller supplies none
pub const DEFAULT_INCOME_CATEGORY: &str = "Income";

#[derive(Clone)]
pub struct TransactionService<C: Connection> {
    transaction_repository: C::TransactionRepository,
    date_range_resolver: DateRangeResolver,
    clock: SharedClock,
}

impl<C: Connection> TransactionService<C> {
    pub fn new(connection: &C, clock: SharedClock) -> Self {
        Self {
            transaction_repository: connection.create_transaction_repository(),
            date_range_resolver: DateRangeResolver::new(clock.clone()),
            clock,
        }
    }

    fn now(&self) -> DateTime<Utc> {
        truncate_to_millis(self.clock.now().with_timezone(&Utc))
    }

    pub async fn create_transaction(&self, command: CreateTransactionCommand) -> LedgerResult<Transaction> {
        let amount = command.amount.ok_or(LedgerError::MissingField("amount"))?;
        let description = command
            .description
            .ok_or(LedgerError::MissingField("description"))?;
        let category = command.category.ok_or(LedgerError::MissingField("category"))?;

        let now = self.now();
        let transaction = Transaction {
            id: Transaction::generate_id(),
            amount,
            description,
            category,
            kind: command.kind.unwrap_or_default(),
            date: command.date.map(truncate_to_millis).unwrap_or(now),
            created_at: now,
            updated_at: now,
        };
        transaction.validate()?;

        self.transaction_repository.store_transaction(&transaction).await?;
        info!(
            "Created {} transaction {} for {:.2}",
            transaction.kind.as_str(),
            transaction.id,
            transaction.amount
        );
        Ok(transaction)
    }

    /// All transactions, or only those on `date` (YYYY-MM-DD), most recent first
    pub async fn list_transactions(&self, date: Option<&str>) -> LedgerResult<Vec<Transaction>> {
        let filter = match date {
            Some(day) => TransactionFilter {
                date_range: Some(self.date_range_resolver.resolve_day(Some(day))?),
                kind: None,
            },
            None => TransactionFilter::all(),
        };

        let transactions = self.transaction_repository.list_transactions(&filter).await?;
        info!("Listed {} transactions", transactions.len());
        Ok(transactions)
    }

    /// Transactions on `date` (today when absent), optionally narrowed by kind
    pub async fn list_transactions_by_date(
        &self,
        date: Option<&str>,
        kind: Option<&str>,
    ) -> LedgerResult<Vec<Transaction>> {
        let filter = self.date_range_resolver.resolve(date, kind)?;
        let transactions = self.transaction_repository.list_transactions(&filter).await?;
        info!("Listed {} transactions for date filter", transactions.len());
        Ok(transactions)
    }

    pub async fn get_transaction(&self, transaction_id: &str) -> LedgerResult<Transaction> {
        self.transaction_repository
            .get_transaction(transaction_id)
            .await?
            .ok_or_else(|| LedgerError::NotFound(transaction_id.to_string()))
    }

    /// Merge the supplied fields into the stored record and re-run validation
    pub async fn update_transaction(
        &self,
        transaction_id: &str,
        command: UpdateTransactionCommand,
    ) -> LedgerResult<Transaction> {
        let mut transaction = self.get_transaction(transaction_id).await?;

        if let Some(amount) = command.amount {
            transaction.amount = amount;
        }
        if let Some(description) = command.description {
            transaction.description = description;
        }
        if let Some(category) = command.category {
            transaction.category = category;
        }
        if let Some(kind) = command.kind {
            transaction.kind = kind;
        }
        if let Some(date) = command.date {
            transaction.date = truncate_to_millis(date);
        }
        transaction.updated_at = self.now();
        transaction.validate()?;

        if !self.transaction_repository.update_transaction(&transaction).await? {
            // Deleted between the read and the write
            return Err(LedgerError::NotFound(transaction_id.to_string()));
        }

        info!("Updated transaction {}", transaction.id);
        Ok(transaction)
    }

    pub async fn delete_transaction(&self, transaction_id: &str) -> LedgerResult<()> {
        if !self.transaction_repository.delete_transaction(transaction_id).await? {
            return Err(LedgerError::NotFound(transaction_id.to_string()));
        }
        info!("Deleted transaction {}", transaction_id);
        Ok(())
    }

    /// Record income happening right now. A zero or absent amount counts as missing.
    pub async fn add_today_income(&self, command: AddTodayIncomeCommand) -> LedgerResult<Transaction> {
        let amount = command
            .amount
            .filter(|amount| *amount != 0.0)
            .ok_or(LedgerError::MissingField("amount"))?;
        let description = command
            .description
            .filter(|description| !description.trim().is_empty())
            .ok_or(LedgerError::MissingField("description"))?;
        let category = command
            .category
            .filter(|category| !category.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_INCOME_CATEGORY.to_string());

        let now = self.now();
        let transaction = Transaction {
            id: Transaction::generate_id(),
            amount: amount.abs(),
            description,
            category,
            kind: TransactionKind::Income,
            date: now,
            created_at: now,
            updated_at: now,
        };
        transaction.validate()?;

        self.transaction_repository.store_transaction(&transaction).await?;
        info!("Recorded today's income {} for {:.2}", transaction.id, transaction.amount);
        Ok(transaction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::clock::FixedClock;
    use crate::storage::DbConnection;
    use std::sync::Arc;

    const NOW: &str = "2024-03-15T14:30:00Z";

    async fn create_test_service() -> TransactionService<DbConnection> {
        create_test_service_at(NOW).await
    }

    async fn create_test_service_at(now: &str) -> TransactionService<DbConnection> {
        let db = DbConnection::init_test().await.unwrap();
        TransactionService::new(&db, Arc::new(FixedClock::at(now)))
    }

    fn utc(rfc3339: &str) -> DateTime<Utc> {
        rfc3339.parse().unwrap()
    }

    fn create_command(amount: f64, description: &str, date: Option<&str>) -> CreateTransactionCommand {
        CreateTransactionCommand {
            amount: Some(amount),
            description: Some(description.to_string()),
            category: Some("General".to_string()),
            kind: None,
            date: date.map(utc),
        }
    }

    #[tokio::test]
    async fn test_create_transaction_basic() {
        let service = create_test_service().await;

        let transaction = service
            .create_transaction(create_command(12.5, "Lunch", None))
            .await
            .unwrap();

        assert_eq!(transaction.amount, 12.5);
        assert_eq!(transaction.description, "Lunch");
        assert_eq!(transaction.kind, TransactionKind::Expense);
        assert_eq!(transaction.date, utc(NOW));
        assert_eq!(transaction.created_at, utc(NOW));
        assert!(!transaction.id.is_empty());
    }

    #[tokio::test]
    async fn test_create_then_fetch_round_trip() {
        let service = create_test_service().await;
        let command = CreateTransactionCommand {
            kind: Some(TransactionKind::Income),
            ..create_command(99.99, "Freelance", Some("2024-03-01T09:15:30.123Z"))
        };

        let created = service.create_transaction(command).await.unwrap();
        let fetched = service.get_transaction(&created.id).await.unwrap();

        assert_eq!(fetched, created);
        assert_eq!(fetched.amount, 99.99);
        assert_eq!(fetched.description, "Freelance");
        assert_eq!(fetched.category, "General");
        assert_eq!(fetched.kind, TransactionKind::Income);
        assert_eq!(fetched.date, utc("2024-03-01T09:15:30.123Z"));
    }

    #[tokio::test]
    async fn test_create_transaction_missing_fields() {
        let service = create_test_service().await;

        let result = service
            .create_transaction(CreateTransactionCommand { amount: None, ..create_command(1.0, "x", None) })
            .await;
        assert!(matches!(result, Err(LedgerError::MissingField("amount"))));

        let result = service
            .create_transaction(CreateTransactionCommand { description: None, ..create_command(1.0, "x", None) })
            .await;
        assert!(matches!(result, Err(LedgerError::MissingField("description"))));

        let result = service
            .create_transaction(CreateTransactionCommand { category: None, ..create_command(1.0, "x", None) })
            .await;
        assert!(matches!(result, Err(LedgerError::MissingField("category"))));
    }

    #[tokio::test]
    async fn test_create_transaction_rejects_negative_amount() {
        let service = create_test_service().await;
        let result = service.create_transaction(create_command(-5.0, "Refund", None)).await;
        assert!(matches!(result, Err(LedgerError::Validation(_))));

        let all = service.list_transactions(None).await.unwrap();
        assert!(all.is_empty(), "Rejected transaction must not be stored");
    }

    #[tokio::test]
    async fn test_create_transaction_rejects_empty_description() {
        let service = create_test_service().await;
        let result = service.create_transaction(create_command(5.0, "", None)).await;
        assert!(matches!(result, Err(LedgerError::Validation(_))));
    }

    #[tokio::test]
    async fn test_list_transactions_most_recent_first() {
        let service = create_test_service().await;
        for (description, date) in [
            ("first", "2024-03-01T10:00:00Z"),
            ("third", "2024-03-12T10:00:00Z"),
            ("second", "2024-03-05T10:00:00Z"),
        ] {
            service
                .create_transaction(create_command(1.0, description, Some(date)))
                .await
                .unwrap();
        }

        let listed = service.list_transactions(None).await.unwrap();
        let descriptions: Vec<&str> = listed.iter().map(|t| t.description.as_str()).collect();
        assert_eq!(descriptions, vec!["third", "second", "first"]);
    }

    #[tokio::test]
    async fn test_list_transactions_for_date() {
        let service = create_test_service().await;
        service
            .create_transaction(create_command(1.0, "last ms", Some("2024-03-15T23:59:59.999Z")))
            .await
            .unwrap();
        service
            .create_transaction(create_command(1.0, "next day", Some("2024-03-16T00:00:00.000Z")))
            .await
            .unwrap();

        let listed = service.list_transactions(Some("2024-03-15")).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].description, "last ms");
    }

    #[tokio::test]
    async fn test_list_transactions_invalid_date() {
        let service = create_test_service().await;
        let result = service.list_transactions(Some("not-a-date")).await;
        assert!(matches!(result, Err(LedgerError::InvalidDate(_))));
    }

    #[tokio::test]
    async fn test_list_transactions_by_date_and_kind() {
        let service = create_test_service().await;
        service
            .create_transaction(CreateTransactionCommand {
                kind: Some(TransactionKind::Income),
                ..create_command(100.0, "Salary", Some("2024-03-15T09:00:00Z"))
            })
            .await
            .unwrap();
        service
            .create_transaction(create_command(30.0, "Groceries", Some("2024-03-15T18:00:00Z")))
            .await
            .unwrap();
        service
            .create_transaction(create_command(7.0, "Yesterday", Some("2024-03-14T18:00:00Z")))
            .await
            .unwrap();

        let today = service.list_transactions_by_date(None, None).await.unwrap();
        assert_eq!(today.len(), 2);
        assert_eq!(today[0].description, "Groceries");

        let income = service
            .list_transactions_by_date(Some("2024-03-15"), Some("INCOME"))
            .await
            .unwrap();
        assert_eq!(income.len(), 1);
        assert_eq!(income[0].description, "Salary");

        let ignored_kind = service
            .list_transactions_by_date(Some("2024-03-15"), Some("bogus"))
            .await
            .unwrap();
        assert_eq!(ignored_kind.len(), 2);

        let yesterday = service
            .list_transactions_by_date(Some("2024-03-14"), Some("expense"))
            .await
            .unwrap();
        assert_eq!(yesterday.len(), 1);
    }

    #[tokio::test]
    async fn test_get_missing_transaction() {
        let service = create_test_service().await;
        let result = service.get_transaction("does-not-exist").await;
        assert!(matches!(result, Err(LedgerError::NotFound(id)) if id == "does-not-exist"));
    }

    #[tokio::test]
    async fn test_update_transaction_partial() {
        let service = create_test_service().await;
        let created = service
            .create_transaction(create_command(10.0, "Coffee", Some("2024-03-10T08:00:00Z")))
            .await
            .unwrap();

        let updated = service
            .update_transaction(
                &created.id,
                UpdateTransactionCommand {
                    amount: Some(12.0),
                    kind: Some(TransactionKind::Income),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.amount, 12.0);
        assert_eq!(updated.kind, TransactionKind::Income);
        assert_eq!(updated.description, "Coffee");
        assert_eq!(updated.date, created.date);
        assert_eq!(service.get_transaction(&created.id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_update_refreshes_updated_at() {
        let db = DbConnection::init_test().await.unwrap();
        let earlier = TransactionService::new(&db, Arc::new(FixedClock::at("2024-03-01T10:00:00Z")));
        let later = TransactionService::new(&db, Arc::new(FixedClock::at("2024-03-02T10:00:00Z")));

        let created = earlier.create_transaction(create_command(1.0, "Tea", None)).await.unwrap();
        let updated = later
            .update_transaction(
                &created.id,
                UpdateTransactionCommand {
                    description: Some("Green tea".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.created_at, utc("2024-03-01T10:00:00Z"));
        assert_eq!(updated.updated_at, utc("2024-03-02T10:00:00Z"));
    }

    #[tokio::test]
    async fn test_update_revalidates() {
        let service = create_test_service().await;
        let created = service.create_transaction(create_command(10.0, "Coffee", None)).await.unwrap();

        let result = service
            .update_transaction(
                &created.id,
                UpdateTransactionCommand {
                    amount: Some(-1.0),
                    ..Default::default()
                },
            )
            .await;
        assert!(matches!(result, Err(LedgerError::Validation(_))));

        let stored = service.get_transaction(&created.id).await.unwrap();
        assert_eq!(stored.amount, 10.0, "Invalid update must not be persisted");
    }

    #[tokio::test]
    async fn test_update_missing_transaction() {
        let service = create_test_service().await;
        let result = service
            .update_transaction("ghost", UpdateTransactionCommand::default())
            .await;
        assert!(matches!(result, Err(LedgerError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_then_fetch_is_not_found() {
        let service = create_test_service().await;
        let created = service.create_transaction(create_command(3.0, "Bus", None)).await.unwrap();

        service.delete_transaction(&created.id).await.unwrap();

        assert!(matches!(
            service.get_transaction(&created.id).await,
            Err(LedgerError::NotFound(_))
        ));
        assert!(matches!(
            service.delete_transaction(&created.id).await,
            Err(LedgerError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_add_today_income_forces_kind_and_date() {
        let service = create_test_service_at("2024-03-15T22:10:00-05:00").await;
        let resolver = DateRangeResolver::new(Arc::new(FixedClock::at("2024-03-15T22:10:00-05:00")));

        for category in [None, Some("Groceries".to_string()), Some("Expense".to_string())] {
            let transaction = service
                .add_today_income(AddTodayIncomeCommand {
                    amount: Some(-40.0),
                    description: Some("Sold bike".to_string()),
                    category: category.clone(),
                })
                .await
                .unwrap();

            assert_eq!(transaction.kind, TransactionKind::Income);
            assert_eq!(transaction.amount, 40.0);
            assert!(resolver.today().contains(transaction.date));
            assert_eq!(
                transaction.category,
                category.unwrap_or_else(|| DEFAULT_INCOME_CATEGORY.to_string())
            );
        }
    }

    #[tokio::test]
    async fn test_add_today_income_blank_category_defaults() {
        let service = create_test_service().await;
        let transaction = service
            .add_today_income(AddTodayIncomeCommand {
                amount: Some(5.0),
                description: Some("Tips".to_string()),
                category: Some("  ".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(transaction.category, DEFAULT_INCOME_CATEGORY);
    }

    #[tokio::test]
    async fn test_add_today_income_requires_amount_and_description() {
        let service = create_test_service().await;

        for command in [
            AddTodayIncomeCommand { amount: None, description: Some("x".to_string()), category: None },
            AddTodayIncomeCommand { amount: Some(0.0), description: Some("x".to_string()), category: None },
        ] {
            let result = service.add_today_income(command).await;
            assert!(matches!(result, Err(LedgerError::MissingField("amount"))));
        }

        for description in [None, Some(String::new())] {
            let result = service
                .add_today_income(AddTodayIncomeCommand { amount: Some(1.0), description, category: None })
                .await;
            assert!(matches!(result, Err(LedgerError::MissingField("description"))));
        }
    }
}
