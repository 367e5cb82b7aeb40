//! # REST API for Transactions
//!
//! CRUD endpoints, the income shortcut and the date-filtered listing.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::Deserialize;
use tracing::info;

use crate::io::rest::error::ApiError;
use crate::io::rest::mappers::transaction_mapper::TransactionMapper;
use crate::AppState;
use shared::{
    CreateTransactionRequest, DeleteTransactionResponse, IncomeTodayRequest,
    Transaction as SharedTransaction, UpdateTransactionRequest,
};

const DELETED_MESSAGE: &str = "Transaction deleted successfully";

/// Query parameters for `GET /api/transactions`
#[derive(Debug, Default, Deserialize)]
pub struct TransactionListQuery {
    pub date: Option<String>,
}

/// Query parameters for `GET /api/transactions/date`
#[derive(Debug, Default, Deserialize)]
pub struct TransactionDateQuery {
    pub date: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

fn to_dto_list(transactions: Vec<crate::domain::models::transaction::Transaction>) -> Vec<SharedTransaction> {
    transactions.into_iter().map(TransactionMapper::to_dto).collect()
}

/// Create a new transaction
pub async fn create_transaction(
    State(state): State<AppState>,
    payload: Result<Json<CreateTransactionRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match payload {
        Ok(request) => request,
        Err(rejection) => return ApiError::from(rejection).into_response(),
    };
    info!("POST /api/transactions - request: {:?}", request);

    match state
        .transaction_service
        .create_transaction(TransactionMapper::to_create_command(request))
        .await
    {
        Ok(transaction) => (StatusCode::CREATED, Json(TransactionMapper::to_dto(transaction))).into_response(),
        Err(e) => ApiError(e).into_response(),
    }
}

/// List transactions, optionally restricted to one day
pub async fn list_transactions(
    State(state): State<AppState>,
    query: Result<Query<TransactionListQuery>, QueryRejection>,
) -> impl IntoResponse {
    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => return ApiError::from(rejection).into_response(),
    };
    info!("GET /api/transactions - query: {:?}", query);

    match state.transaction_service.list_transactions(query.date.as_deref()).await {
        Ok(transactions) => (StatusCode::OK, Json(to_dto_list(transactions))).into_response(),
        Err(e) => ApiError(e).into_response(),
    }
}

/// List one day's transactions (today by default), optionally by type
pub async fn list_transactions_by_date(
    State(state): State<AppState>,
    query: Result<Query<TransactionDateQuery>, QueryRejection>,
) -> impl IntoResponse {
    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => return ApiError::from(rejection).into_response(),
    };
    info!("GET /api/transactions/date - query: {:?}", query);

    match state
        .transaction_service
        .list_transactions_by_date(query.date.as_deref(), query.kind.as_deref())
        .await
    {
        Ok(transactions) => (StatusCode::OK, Json(to_dto_list(transactions))).into_response(),
        Err(e) => ApiError(e).into_response(),
    }
}

/// Get a transaction by ID
pub async fn get_transaction(
    State(state): State<AppState>,
    Path(transaction_id): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/transactions/{}", transaction_id);

    match state.transaction_service.get_transaction(&transaction_id).await {
        Ok(transaction) => (StatusCode::OK, Json(TransactionMapper::to_dto(transaction))).into_response(),
        Err(e) => ApiError(e).into_response(),
    }
}

/// Partially update a transaction
pub async fn update_transaction(
    State(state): State<AppState>,
    Path(transaction_id): Path<String>,
    payload: Result<Json<UpdateTransactionRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match payload {
        Ok(request) => request,
        Err(rejection) => return ApiError::from(rejection).into_response(),
    };
    info!("PUT /api/transactions/{} - request: {:?}", transaction_id, request);

    match state
        .transaction_service
        .update_transaction(&transaction_id, TransactionMapper::to_update_command(request))
        .await
    {
        Ok(transaction) => (StatusCode::OK, Json(TransactionMapper::to_dto(transaction))).into_response(),
        Err(e) => ApiError(e).into_response(),
    }
}

/// Delete a transaction
pub async fn delete_transaction(
    State(state): State<AppState>,
    Path(transaction_id): Path<String>,
) -> impl IntoResponse {
    info!("DELETE /api/transactions/{}", transaction_id);

    match state.transaction_service.delete_transaction(&transaction_id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(DeleteTransactionResponse {
                message: DELETED_MESSAGE.to_string(),
            }),
        )
            .into_response(),
        Err(e) => ApiError(e).into_response(),
    }
}

/// Record income happening now
pub async fn add_today_income(
    State(state): State<AppState>,
    payload: Result<Json<IncomeTodayRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match payload {
        Ok(request) => request,
        Err(rejection) => return ApiError::from(rejection).into_response(),
    };
    info!("POST /api/transactions/income-today - request: {:?}", request);

    match state
        .transaction_service
        .add_today_income(TransactionMapper::to_income_command(request))
        .await
    {
        Ok(transaction) => (StatusCode::CREATED, Json(TransactionMapper::to_dto(transaction))).into_response(),
        Err(e) => ApiError(e).into_response(),
    }
}
