//! Income/expense totals and net balance over a scope of transactions.
//!
//! Classification accepts two generations of records at once: the explicit
//! `kind`, and category labels containing "income" or "profit" from records
//! written before `kind` existed.

use tracing::info;

use crate::domain::clock::SharedClock;
use crate::domain::date_range::{DateRangeResolver, TransactionFilter};
use crate::domain::error::{LedgerError, LedgerResult};
use crate::domain::models::transaction::{Transaction, TransactionKind};
use crate::storage::{Connection, TransactionStorage};

const INCOME_CATEGORY_MARKERS: [&str; 2] = ["income", "profit"];

/// Aggregation window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceScope {
    Today,
    Lifetime,
}

impl BalanceScope {
    /// Absent means lifetime, `today` (any case) means today. Anything else is an
    /// invalid date rather than a silent lifetime.
    pub fn parse(date: Option<&str>) -> LedgerResult<Self> {
        match date {
            None => Ok(BalanceScope::Lifetime),
            Some(value) if value.trim().eq_ignore_ascii_case("today") => Ok(BalanceScope::Today),
            Some(value) => Err(LedgerError::InvalidDate(value.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceStatus {
    Profit,
    Loss,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BalanceSummary {
    pub scope: BalanceScope,
    pub total_income: f64,
    pub total_expense: f64,
    pub balance: f64,
    pub status: BalanceStatus,
}

/// True for explicit income, or for a category that reads like income
pub fn is_income(transaction: &Transaction) -> bool {
    if transaction.kind == TransactionKind::Income {
        return true;
    }
    let category = transaction.category.to_lowercase();
    INCOME_CATEGORY_MARKERS
        .iter()
        .any(|marker| category.contains(marker))
}

/// Reduce transactions to totals. Amounts are taken by absolute value so older
/// signed records still add up on the right side.
pub fn aggregate(scope: BalanceScope, transactions: &[Transaction]) -> BalanceSummary {
    let (total_income, total_expense) =
        transactions
            .iter()
            .fold((0.0, 0.0), |(income, expense), transaction| {
                if is_income(transaction) {
                    (income + transaction.amount.abs(), expense)
                } else {
                    (income, expense + transaction.amount.abs())
                }
            });

    let balance = total_income - total_expense;
    let status = if balance >= 0.0 {
        BalanceStatus::Profit
    } else {
        BalanceStatus::Loss
    };

    BalanceSummary {
        scope,
        total_income,
        total_expense,
        balance,
        status,
    }
}

#[derive(Clone)]
pub struct BalanceService<C: Connection> {
    transaction_repository: C::TransactionRepository,
    date_range_resolver: DateRangeResolver,
}

impl<C: Connection> BalanceService<C> {
    pub fn new(connection: &C, clock: SharedClock) -> Self {
        Self {
            transaction_repository: connection.create_transaction_repository(),
            date_range_resolver: DateRangeResolver::new(clock),
        }
    }

    /// One bulk read for the scope, then an in-memory reduction
    pub async fn get_balance(&self, scope: BalanceScope) -> LedgerResult<BalanceSummary> {
        let filter = match scope {
            BalanceScope::Today => TransactionFilter {
                date_range: Some(self.date_range_resolver.today()),
                kind: None,
            },
            BalanceScope::Lifetime => TransactionFilter::all(),
        };

        let transactions = self.transaction_repository.list_transactions(&filter).await?;
        let summary = aggregate(scope, &transactions);

        info!(
            "Balance over {} transactions ({:?}): income={:.2} expense={:.2} balance={:.2}",
            transactions.len(),
            scope,
            summary.total_income,
            summary.total_expense,
            summary.balance
        );
        Ok(summary)
    }
}
