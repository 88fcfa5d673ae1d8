//! API error handling
//!
//! Every failure maps to a distinct, stable error code so a client can
//! tell "fix your input" from "try again later" from "this does not
//! exist".

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use domain_goals::GoalError;
use domain_wallet::WalletError;
use infra_db::{DatabaseError, LedgerError};

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Insufficient funds: {0}")]
    InsufficientFunds(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match &self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg.clone()),
            ApiError::Validation(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "invalid_input", msg.clone())
            }
            ApiError::InsufficientFunds(msg) => {
                (StatusCode::BAD_REQUEST, "insufficient_funds", msg.clone())
            }
            ApiError::Unauthorized => {
                (StatusCode::UNAUTHORIZED, "unauthorized", "Unauthorized".to_string())
            }
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, "conflict", msg.clone()),
            ApiError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg.clone())
            }
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

impl From<LedgerError> for ApiError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::InsufficientBalance { .. } => {
                ApiError::InsufficientFunds(err.to_string())
            }
            LedgerError::InvalidAmount(_) => ApiError::Validation(err.to_string()),
            LedgerError::Wallet(WalletError::InsufficientFunds { .. }) => {
                ApiError::InsufficientFunds(err.to_string())
            }
            LedgerError::Wallet(_) => ApiError::Validation(err.to_string()),
            LedgerError::Allocation(_) => ApiError::Validation(err.to_string()),
            LedgerError::Goal(GoalError::AlreadyCompleted(_)) => {
                ApiError::Conflict(err.to_string())
            }
            LedgerError::Goal(_) => ApiError::Validation(err.to_string()),
            LedgerError::Database(db) => ApiError::from(db),
        }
    }
}

impl From<DatabaseError> for ApiError {
    fn from(err: DatabaseError) -> Self {
        if err.is_not_found() {
            return ApiError::NotFound(err.to_string());
        }
        match err {
            DatabaseError::DuplicateEntry(_) => ApiError::Conflict(err.to_string()),
            // Persistence failures surface as a generic internal error;
            // the rollback already happened in the repository.
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        ApiError::Validation(err.to_string())
    }
}
