//! # REST API for Balances

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::Deserialize;
use tracing::info;

use crate::domain::balance_service::BalanceScope;
use crate::io::rest::error::ApiError;
use crate::io::rest::mappers::balance_mapper::BalanceMapper;
use crate::AppState;

/// `date=today` limits the balance to today; no date means lifetime
#[derive(Debug, Default, Deserialize)]
pub struct BalanceQuery {
    pub date: Option<String>,
}

pub async fn get_balance(
    State(state): State<AppState>,
    query: Result<Query<BalanceQuery>, QueryRejection>,
) -> impl IntoResponse {
    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => return ApiError::from(rejection).into_response(),
    };
    info!("GET /api/transactions/balance - query: {:?}", query);

    let scope = match BalanceScope::parse(query.date.as_deref()) {
        Ok(scope) => scope,
        Err(e) => return ApiError(e).into_response(),
    };

    match state.balance_service.get_balance(scope).await {
        Ok(summary) => (StatusCode::OK, Json(BalanceMapper::to_dto(summary))).into_response(),
        Err(e) => ApiError(e).into_response(),
    }
}
