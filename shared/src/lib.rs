use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A ledger entry as exposed over the REST API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Opaque identifier assigned on creation (UUID v4)
    pub id: String,
    /// Non-negative amount; direction is carried by `kind`
    pub amount: f64,
    /// Description of the transaction (max 256 characters)
    pub description: String,
    /// Free-form label such as "Income" or "Groceries"
    pub category: String,
    #[serde(rename = "type", alias = "kind")]
    pub kind: TransactionKind,
    /// When the transaction happened (RFC 3339)
    pub date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money coming in
    Income,
    /// Money going out
    #[default]
    Expense,
}

/// Body of `POST /api/transactions`.
///
/// Every field is optional at the wire level so that missing values are
/// reported with a specific message instead of a generic decode failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateTransactionRequest {
    pub amount: Option<f64>,
    pub description: Option<String>,
    pub category: Option<String>,
    /// Defaults to expense when omitted
    #[serde(rename = "type", alias = "kind", default)]
    pub kind: Option<TransactionKind>,
    /// Optional date override (RFC 3339) - uses current time if not provided
    pub date: Option<DateTime<Utc>>,
}

/// Body of `PUT /api/transactions/:id`; absent fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateTransactionRequest {
    pub amount: Option<f64>,
    pub description: Option<String>,
    pub category: Option<String>,
    #[serde(rename = "type", alias = "kind", default)]
    pub kind: Option<TransactionKind>,
    pub date: Option<DateTime<Utc>>,
}

/// Body of `POST /api/transactions/income-today`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IncomeTodayRequest {
    pub amount: Option<f64>,
    pub description: Option<String>,
    pub category: Option<String>,
}

/// Aggregation window reported by the balance endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BalanceFilterType {
    Today,
    Lifetime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BalanceStatus {
    Profit,
    Loss,
}

/// Response of `GET /api/transactions/balance`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceResponse {
    pub filter_type: BalanceFilterType,
    pub total_income: f64,
    pub total_expense: f64,
    pub balance: f64,
    pub status: BalanceStatus,
}

/// Confirmation returned after a delete
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteTransactionResponse {
    pub message: String,
}

/// Error body returned for every non-2xx response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
