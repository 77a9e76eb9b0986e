//! Storage-specific error type wrapping sqlx errors.

use confhub_domain::error::ConfHubError;

/// Errors originating from the `SQLite` storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A query or connection failed.
    #[error("database error")]
    Database(#[from] sqlx::Error),

    /// Failed to run migrations.
    #[error("migration error")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl StorageError {
    /// Whether the failure happened before a statement could run.
    #[must_use]
    pub fn is_connection(&self) -> bool {
        match self {
            Self::Database(err) => matches!(
                err,
                sqlx::Error::Configuration(_)
                    | sqlx::Error::Io(_)
                    | sqlx::Error::Tls(_)
                    | sqlx::Error::PoolTimedOut
                    | sqlx::Error::PoolClosed
                    | sqlx::Error::WorkerCrashed
            ),
            Self::Migration(_) => true,
        }
    }
}

impl From<StorageError> for ConfHubError {
    fn from(err: StorageError) -> Self {
        if err.is_connection() {
            Self::Infrastructure(Box::new(err))
        } else {
            Self::Query(Box::new(err))
        }
    }
}
