//! Store error types

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Failures raised while talking to the relational store
#[derive(Debug, Error)]
pub enum StoreError {
    /// A pooled connection could not be acquired
    #[error("Connection pool error: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),

    /// A query or commit failed
    #[error("Database error: {0}")]
    Database(#[from] diesel::result::Error),

    /// The blocking task running the session did not complete
    #[error("Store task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    /// Seed data could not be read or parsed
    #[error("Seed error: {0}")]
    Seed(String),
}

impl StoreError {
    /// True when the store rejected the data itself (constraint violation)
    /// rather than failing to run the statement.
    pub fn is_constraint_violation(&self) -> bool {
        use diesel::result::{DatabaseErrorKind, Error};

        matches!(
            self,
            StoreError::Database(Error::DatabaseError(
                DatabaseErrorKind::ForeignKeyViolation
                    | DatabaseErrorKind::UniqueViolation
                    | DatabaseErrorKind::NotNullViolation
                    | DatabaseErrorKind::CheckViolation,
                _
            ))
        )
    }
}
