//! Error handling for the Staylodge data-access layer
//!
//! Every repository call resolves to either a value or one of the variants
//! below. Store failures are classified at the boundary; nothing is logged
//! away and silently turned into an empty result.

use thiserror::Error;

/// Data-access error taxonomy
#[derive(Error, Debug)]
pub enum DbError {
    /// Malformed or missing input, rejected before any store round-trip
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Lookup, update, or delete target does not exist
    #[error("{resource_type} not found: {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// Unique or foreign-key constraint rejected by the store
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),

    /// The store rejected the statement itself (syntax, type mismatch, ...)
    #[error("query execution failed: {0}")]
    QueryExecution(#[source] sqlx::Error),

    /// Timeout or connection loss; a matching write may or may not have
    /// committed, and no retry is attempted here
    #[error("transient database failure: {0}")]
    Transient(#[source] sqlx::Error),
}

impl DbError {
    /// Create an invalid-argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Create a not-found error for a specific resource
    pub fn not_found(resource_type: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource_type,
            id: id.to_string(),
        }
    }

    /// Whether the caller may reasonably retry the operation
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Transient(_))
    }

    /// Stable code string for structured logging and upstream mapping
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "INVALID_ARGUMENT",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::ConstraintViolation(_) => "CONSTRAINT_VIOLATION",
            Self::QueryExecution(_) => "QUERY_EXECUTION",
            Self::Transient(_) => "TRANSIENT",
        }
    }

    /// Log the error with severity matching its class
    pub fn log(&self) {
        match self {
            Self::QueryExecution(_) => {
                tracing::error!(error = %self, code = self.code(), "store rejected statement");
            }
            Self::Transient(_) => {
                tracing::warn!(error = %self, code = self.code(), "transient store failure");
            }
            _ => {
                tracing::debug!(error = %self, code = self.code(), "data-access error");
            }
        }
    }
}

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        use sqlx::error::ErrorKind;

        match err {
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed
            | sqlx::Error::Io(_) => Self::Transient(err),
            sqlx::Error::Database(ref db) => match db.kind() {
                ErrorKind::UniqueViolation
                | ErrorKind::ForeignKeyViolation
                | ErrorKind::NotNullViolation
                | ErrorKind::CheckViolation => Self::ConstraintViolation(db.message().to_string()),
                _ => Self::QueryExecution(err),
            },
            _ => Self::QueryExecution(err),
        }
    }
}

/// Result type alias for data-access operations
pub type DbResult<T> = Result<T, DbError>;
