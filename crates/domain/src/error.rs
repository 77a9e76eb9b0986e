//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`ConfHubError`]
//! via `From`. The four variants are the stable error taxonomy exposed to
//! clients.

use crate::id::ConferenceId;

/// Top-level error returned by application services.
#[derive(Debug, thiserror::Error)]
pub enum ConfHubError {
    /// The request was malformed or a required field was missing.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The query ran but matched nothing.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// A database connection could not be established.
    #[error("database unavailable")]
    Infrastructure(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A statement failed to execute or a row failed to decode.
    #[error("query failed")]
    Query(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Input validation failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A required string field was empty.
    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    /// An identifier was not a valid integer.
    #[error("{field} must be an integer, got {value:?}")]
    InvalidId { field: &'static str, value: String },

    /// The request body could not be decoded.
    #[error("malformed request body: {0}")]
    MalformedBody(String),
}

/// Lookups that matched zero rows.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotFoundError {
    #[error("user not found")]
    UserByLogin,

    #[error("no users found with this mask")]
    UserByMask,

    #[error("no reports found")]
    Reports,

    #[error("no reports found in conference {0}")]
    ReportsInConference(ConferenceId),

    #[error("{entity} {id} not found")]
    Record { entity: &'static str, id: i64 },
}
