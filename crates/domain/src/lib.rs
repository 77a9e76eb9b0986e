//! # confhub-domain
//!
//! Pure domain model for the confhub conference service.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers and the error taxonomy
//! - Define **Users** and the **`UserMask`** projection used for search
//! - Define **Masks** (`*` wildcard patterns) and their SQL translation
//! - Define **Reports** and **Conferences**
//! - Contain all invariant enforcement
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.

pub mod error;
pub mod id;
pub mod mask;

pub mod conference;
pub mod report;
pub mod user;
