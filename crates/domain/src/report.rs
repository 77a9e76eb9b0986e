//! Report — a paper owned by a user, optionally attached to a conference.

use crate::id::UserId;

/// A report as submitted for creation.
///
/// The conference association is never part of creation; it is set later
/// with a dedicated operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReport {
    pub name: String,
    pub user_id: UserId,
}
