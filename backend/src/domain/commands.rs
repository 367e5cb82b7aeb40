//! Domain-level command types.
//! The REST layer maps the public DTOs from the `shared` crate onto these;
//! they are never serialized directly.

pub mod transactions {
    use chrono::{DateTime, Utc};

    use crate::domain::models::transaction::TransactionKind;

    /// Input for creating a new transaction. Presence of required fields is
    /// checked by the service so it can name the missing one.
    #[derive(Debug, Clone, Default)]
    pub struct CreateTransactionCommand {
        pub amount: Option<f64>,
        pub description: Option<String>,
        pub category: Option<String>,
        pub kind: Option<TransactionKind>,
        pub date: Option<DateTime<Utc>>,
    }

    /// Partial update; `None` leaves the stored value unchanged.
    #[derive(Debug, Clone, Default)]
    pub struct UpdateTransactionCommand {
        pub amount: Option<f64>,
        pub description: Option<String>,
        pub category: Option<String>,
        pub kind: Option<TransactionKind>,
        pub date: Option<DateTime<Utc>>,
    }

    /// Input for recording income that happens now.
    #[derive(Debug, Clone, Default)]
    pub struct AddTodayIncomeCommand {
        pub amount: Option<f64>,
        pub description: Option<String>,
        pub category: Option<String>,
    }
}
