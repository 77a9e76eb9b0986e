//! User service — registration and lookups.

use confhub_domain::error::{ConfHubError, NotFoundError, ValidationError};
use confhub_domain::id::UserId;
use confhub_domain::user::{User, UserMask};

use crate::ports::{PasswordHasher, UserRepository};

/// Application service for user operations.
pub struct UserService<R, H> {
    repo: R,
    hasher: H,
}

impl<R: UserRepository, H: PasswordHasher> UserService<R, H> {
    /// Create a new service backed by the given repository and hasher.
    pub fn new(repo: R, hasher: H) -> Self {
        Self { repo, hasher }
    }

    /// Register a new user after validating domain invariants.
    ///
    /// The password is hashed before it reaches the repository.
    ///
    /// # Errors
    ///
    /// Returns [`ConfHubError::Validation`] if a field is empty, or an
    /// error propagated from the hasher or the repository.
    #[tracing::instrument(skip(self, user), fields(login = %user.login))]
    pub async fn register(&self, user: User) -> Result<UserId, ConfHubError> {
        user.validate()?;
        let password_hash = self.hasher.hash(user.password.clone()).await?;
        let id = self.repo.create(user.into_new_user(password_hash)).await?;
        tracing::info!(user_id = %id, "user created");
        Ok(id)
    }

    /// Find all users registered with exactly `login`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfHubError::Validation`] when `login` is empty,
    /// [`ConfHubError::NotFound`] when nothing matches, or a storage error.
    #[tracing::instrument(skip(self))]
    pub async fn find_by_login(&self, login: &str) -> Result<Vec<UserMask>, ConfHubError> {
        if login.is_empty() {
            return Err(ValidationError::EmptyField("login").into());
        }
        let found = self.repo.find_by_login(login).await?;
        if found.is_empty() {
            return Err(NotFoundError::UserByLogin.into());
        }
        Ok(found)
    }

    /// Find all users whose name and surname match the wildcard masks.
    ///
    /// # Errors
    ///
    /// Returns [`ConfHubError::NotFound`] when nothing matches, or a
    /// storage error.
    #[tracing::instrument(skip(self))]
    pub async fn find_by_mask(&self, mask: &UserMask) -> Result<Vec<UserMask>, ConfHubError> {
        let found = self.repo.find_by_mask(mask).await?;
        if found.is_empty() {
            return Err(NotFoundError::UserByMask.into());
        }
        Ok(found)
    }
}
