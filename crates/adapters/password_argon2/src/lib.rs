//! # confhub-adapter-password-argon2
//!
//! Argon2id implementation of the [`PasswordHasher`] port.
//!
//! Hashes are produced in PHC string format with a random per-password salt,
//! so two registrations with the same password store different hashes.
//! Hashing runs on tokio's blocking pool.

use std::future::Future;

use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHasher as _, SaltString};

use confhub_app::ports::PasswordHasher;
use confhub_domain::error::ConfHubError;
use confhub_domain::user::{Password, PasswordHash};

/// Errors raised while hashing.
#[derive(Debug, thiserror::Error)]
pub enum HashError {
    #[error("password hashing failed")]
    Hash(#[from] argon2::password_hash::Error),

    #[error("hashing task did not complete")]
    Join(#[from] tokio::task::JoinError),
}

impl From<HashError> for ConfHubError {
    fn from(err: HashError) -> Self {
        Self::Infrastructure(Box::new(err))
    }
}

/// Argon2id (v19) hasher with the crate's default cost parameters.
#[derive(Clone, Default)]
pub struct Argon2PasswordHasher {
    argon2: Argon2<'static>,
}

impl Argon2PasswordHasher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn hash_blocking(
        argon2: &Argon2<'static>,
        password: &Password,
    ) -> Result<PasswordHash, HashError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = argon2.hash_password(password.as_str().as_bytes(), &salt)?;
        Ok(PasswordHash::new(hash.to_string()))
    }
}

impl PasswordHasher for Argon2PasswordHasher {
    fn hash(
        &self,
        password: Password,
    ) -> impl Future<Output = Result<PasswordHash, ConfHubError>> + Send {
        let argon2 = self.argon2.clone();
        async move {
            let hash =
                tokio::task::spawn_blocking(move || Self::hash_blocking(&argon2, &password))
                    .await
                    .map_err(HashError::from)??;
            Ok(hash)
        }
    }
}
