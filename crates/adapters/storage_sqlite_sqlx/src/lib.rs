//! # confhub-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `confhub-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//! - Classify driver failures as infrastructure or query errors
//!
//! ## Dependency rule
//! Depends on `confhub-app` (for port traits) and `confhub-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod conference_repo;
pub mod error;
pub mod pool;
pub mod report_repo;
pub mod user_repo;

pub use conference_repo::SqliteConferenceRepository;
pub use error::StorageError;
pub use pool::{Config, Database};
pub use report_repo::SqliteReportRepository;
pub use user_repo::SqliteUserRepository;
