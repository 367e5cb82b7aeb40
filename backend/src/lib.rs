//! # Ledger Backend
//!
//! Personal finance ledger: income/expense records over a SQLite store, with
//! date-scoped listings and balance aggregation, served over REST.
//!
//! ## Architecture
//!
//! ```text
//! IO Layer (REST API, handlers)
//!     ↓
//! Domain Layer (Business logic, services)
//!     ↓
//! Storage Layer (Database, persistence)
//! ```

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use anyhow::{Context, Result};
use axum::{
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::domain::{BalanceService, SharedClock, SystemClock, TransactionService};
use crate::storage::DbConnection;

/// Services shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub transaction_service: TransactionService<DbConnection>,
    pub balance_service: BalanceService<DbConnection>,
}

impl AppState {
    pub fn new(db_conn: &DbConnection, clock: SharedClock) -> Self {
        Self {
            transaction_service: TransactionService::new(db_conn, clock.clone()),
            balance_service: BalanceService::new(db_conn, clock),
        }
    }
}

/// Open the database and build the application state
pub async fn initialize_backend(config: &Config) -> Result<AppState> {
    info!("Setting up database at {}", config.database_url);
    let db_conn = DbConnection::new(&config.database_url)
        .await
        .with_context(|| format!("Failed to open database {}", config.database_url))?;

    info!("Setting up domain services");
    Ok(AppState::new(&db_conn, Arc::new(SystemClock)))
}

/// Create the Axum router with all routes configured.
///
/// Literal segments (`income-today`, `balance`, `date`) rank above the `:id`
/// capture in axum's router, so they never reach the by-id handlers.
pub fn create_router(app_state: AppState, cors_origin: Option<&str>) -> Result<Router> {
    let allow_origin = match cors_origin {
        Some(origin) => AllowOrigin::exact(
            origin
                .parse::<HeaderValue>()
                .with_context(|| format!("Invalid CORS origin {}", origin))?,
        ),
        None => AllowOrigin::from(Any),
    };
    let cors = CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/transactions", get(io::list_transactions).post(io::create_transaction))
        .route("/transactions/income-today", post(io::add_today_income))
        .route("/transactions/balance", get(io::get_balance))
        .route("/transactions/date", get(io::list_transactions_by_date))
        .route(
            "/transactions/:id",
            get(io::get_transaction)
                .put(io::update_transaction)
                .delete(io::delete_transaction),
        );

    Ok(Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state))
}
