//! # confhub-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `UserRepository` — insert users, look them up by login or mask
//!   - `ReportRepository` — insert reports, list names, set the conference
//!   - `ConferenceRepository` — insert and fetch conferences
//!   - `PasswordHasher` — one-way hashing of credentials
//! - Define **driving/inbound ports** as use-case structs:
//!   - `UserService` — register, find by login, find by mask
//!   - `ReportService` — create, list all
//!   - `ConferenceService` — create, associate a report, list its reports
//! - Turn empty result sets into `NotFound` errors
//!
//! ## Dependency rule
//! Depends on `confhub-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
