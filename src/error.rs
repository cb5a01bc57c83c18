//! Application error taxonomy and HTTP mapping.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Errors surfaced by the link registry and its HTTP surface.
///
/// Validation errors (`InvalidUrl`, `InvalidFormat`, `CodeTaken`) are
/// user-correctable and never retried. `AllocationExhausted` and
/// `StoreUnavailable` are server-side failures; retrying across store outages
/// is left to the surrounding infrastructure.
#[derive(Debug, Error)]
pub enum AppError {
    /// The submitted URL does not parse as an absolute http/https URL.
    #[error("{0}")]
    InvalidUrl(String),

    /// A custom short code violates the allowed pattern or length.
    #[error("{0}")]
    InvalidFormat(String),

    /// The requested short code is already in use.
    #[error("{0}")]
    CodeTaken(String),

    /// Random code generation kept colliding until the retry budget ran out.
    #[error("Could not allocate a unique short code")]
    AllocationExhausted,

    /// No link matches the given short code or id.
    #[error("{0}")]
    NotFound(String),

    /// The underlying store failed or is unreachable.
    #[error("Store unavailable")]
    StoreUnavailable(#[source] sqlx::Error),
}

impl From<sqlx::Error> for AppError {
    /// Translates store errors, treating a unique-constraint violation on
    /// insert as the collision signal instead of a prior existence read.
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error() {
            if db.is_unique_violation() {
                return AppError::CodeTaken("Short code already taken".to_string());
            }
        }

        AppError::StoreUnavailable(e)
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        AppError::InvalidFormat(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::InvalidUrl(_) | AppError::InvalidFormat(_) => StatusCode::BAD_REQUEST,
            AppError::CodeTaken(_) => StatusCode::CONFLICT,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::AllocationExhausted | AppError::StoreUnavailable(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        // Driver details stay in the logs, not in the response body.
        let message = match &self {
            AppError::StoreUnavailable(e) => {
                tracing::error!(error = %e, "Store unavailable");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
