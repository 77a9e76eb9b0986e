//! Password port — one-way hashing of user credentials.

use std::future::Future;

use confhub_domain::error::ConfHubError;
use confhub_domain::user::{Password, PasswordHash};

/// Turns a plaintext password into a storable hash.
///
/// Hashing is CPU-bound; implementations run it off the async executor.
pub trait PasswordHasher {
    fn hash(
        &self,
        password: Password,
    ) -> impl Future<Output = Result<PasswordHash, ConfHubError>> + Send;
}
