//! # confhub-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the JSON API for users, reports and conferences
//!   (`/user/*`, `/report/*`, `/conference/*`)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and [`ConfHubError`](confhub_domain::error::ConfHubError)
//!   into HTTP responses
//!
//! ## Dependency rule
//! Depends on `confhub-app` (for port traits and services) and `confhub-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
