//! Custom error types for the API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Errors surfaced by the registration, login, and order operations.
///
/// Every variant maps to exactly one HTTP status and one response body of
/// the form `{"error": "<message>"}`. Internal failures never leak their
/// cause to the caller; the real error is logged instead.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Registration conflict: the username or the email is already taken.
    /// Deliberately does not say which.
    #[error("User with this username or email already exists")]
    DuplicateUser,

    /// Login failure. Covers both unknown username and wrong password;
    /// the two cases are indistinguishable to the caller.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// A protected operation was called without a resolved principal.
    #[error("Authentication required")]
    Unauthenticated,

    /// Input validation failure with the offending field named.
    #[error("{0}")]
    Validation(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Any other internal failure, token issuance included.
    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::DuplicateUser => (StatusCode::BAD_REQUEST, self.to_string()),
            ApiError::InvalidCredentials => (StatusCode::UNAUTHORIZED, self.to_string()),
            ApiError::Unauthenticated => (StatusCode::UNAUTHORIZED, self.to_string()),
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Database(ref err) => {
                error!("Database error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            ApiError::Internal(ref err) => {
                error!("Internal error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;
