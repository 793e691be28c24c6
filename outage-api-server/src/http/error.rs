//! API error types with IntoResponse.
//!
//! Error bodies are plain text. Data-access failures are logged with full
//! detail and answered with a generic message; nothing internal leaks to
//! the client. Source lookups that match zero rows map to 404.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use outage_api_core::ids::InvalidOutageId;

use crate::db::DbError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Malformed client input (400)
    BadRequest(String),

    /// Resource not found (404)
    NotFound { resource: &'static str, id: String },

    /// Data-access failure (500, logged)
    Database(DbError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            Self::NotFound { resource, id } => (
                StatusCode::NOT_FOUND,
                format!("{resource} '{id}' not found"),
            ),
            Self::Database(e) => {
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "an internal error occurred".to_owned(),
                )
            }
        };

        (status, body).into_response()
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { resource, id } => Self::NotFound { resource, id },
            _ => Self::Database(e),
        }
    }
}

impl From<InvalidOutageId> for ApiError {
    fn from(e: InvalidOutageId) -> Self {
        Self::BadRequest(e.to_string())
    }
}
