//! Conversion of domain errors into HTTP responses.
//!
//! Every failure body is `{"error": "..."}`. Storage failures are logged in
//! full and answered with a generic 500.

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use shared::ErrorResponse;
use tracing::{error, warn};

use crate::domain::LedgerError;

const NOT_FOUND_MESSAGE: &str = "Transaction not found";
const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Debug)]
pub struct ApiError(pub LedgerError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            LedgerError::MissingField(_) | LedgerError::Validation(_) | LedgerError::InvalidDate(_) => {
                StatusCode::BAD_REQUEST
            }
            LedgerError::NotFound(_) => StatusCode::NOT_FOUND,
            LedgerError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<LedgerError> for ApiError {
    fn from(error: LedgerError) -> Self {
        ApiError(error)
    }
}

/// Malformed JSON is a client error like any other validation failure
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError(LedgerError::validation(rejection.body_text()))
    }
}

/// Undecodable query strings (e.g. a repeated `type`) get the same body shape
impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError(LedgerError::validation(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self.0 {
            LedgerError::NotFound(id) => {
                warn!("Transaction {} not found", id);
                NOT_FOUND_MESSAGE.to_string()
            }
            LedgerError::Storage(e) => {
                error!("Storage failure: {:?}", e);
                INTERNAL_ERROR_MESSAGE.to_string()
            }
            other => {
                warn!("Rejected request: {}", other);
                other.to_string()
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_of(error: LedgerError) -> (StatusCode, ErrorResponse) {
        let response = ApiError(error).into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_validation_errors_are_bad_request() {
        let (status, body) = body_of(LedgerError::MissingField("amount")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "Missing required field: amount");

        let (status, body) = body_of(LedgerError::InvalidDate("tomorrow".to_string())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.error.contains("tomorrow"));
    }

    #[tokio::test]
    async fn test_not_found() {
        let (status, body) = body_of(LedgerError::NotFound("abc".to_string())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.error, NOT_FOUND_MESSAGE);
    }

    #[tokio::test]
    async fn test_storage_detail_is_not_leaked() {
        let (status, body) =
            body_of(LedgerError::Storage(anyhow::anyhow!("disk I/O error at /var/db/ledger.db"))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, INTERNAL_ERROR_MESSAGE);
    }
}
