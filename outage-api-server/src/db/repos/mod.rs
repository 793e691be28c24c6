//! Read-only repositories over the upstream ingestion tables.
//!
//! Repositories borrow the shared pool explicitly; nothing here reaches for
//! ambient state. Errors carry a closed set of kinds so the transport layer
//! can map them to distinct status codes.

pub mod outages;
pub mod sources;

pub use outages::OutageRepo;
pub use sources::SourceRepo;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// Query execution or connectivity failure.
    #[error("database error: {0}")]
    Sqlx(sqlx::Error),

    /// A row came back but a column refused to decode.
    #[error("row decode error: {0}")]
    Decode(sqlx::Error),

    /// Zero rows where exactly one was required.
    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

impl From<sqlx::Error> for DbError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::ColumnDecode { .. }
            | sqlx::Error::Decode(_)
            | sqlx::Error::ColumnNotFound(_)
            | sqlx::Error::ColumnIndexOutOfBounds { .. }
            | sqlx::Error::TypeNotFound { .. } => Self::Decode(e),
            other => Self::Sqlx(other),
        }
    }
}
