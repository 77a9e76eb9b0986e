//! User — a registered person, and the name/surname projection used for search.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ConfHubError, ValidationError};
use crate::mask::Mask;

/// A plaintext password as received from a client.
///
/// Never printed; only handed to a password hasher.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

/// An encoded password hash (PHC string format).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A user as submitted for registration.
#[derive(Debug, Clone)]
pub struct User {
    pub name: String,
    pub surname: String,
    pub login: String,
    pub password: Password,
}

impl User {
    /// Create a builder for constructing a [`User`].
    #[must_use]
    pub fn builder() -> UserBuilder {
        UserBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ConfHubError::Validation`] naming the first empty field.
    pub fn validate(&self) -> Result<(), ConfHubError> {
        let fields = [
            ("name", self.name.is_empty()),
            ("surname", self.surname.is_empty()),
            ("login", self.login.is_empty()),
            ("password", self.password.is_empty()),
        ];
        match fields.into_iter().find(|(_, empty)| *empty) {
            Some((field, _)) => Err(ValidationError::EmptyField(field).into()),
            None => Ok(()),
        }
    }

    /// Replace the plaintext password with its hash, ready for storage.
    #[must_use]
    pub fn into_new_user(self, password_hash: PasswordHash) -> NewUser {
        NewUser {
            name: self.name,
            surname: self.surname,
            login: self.login,
            password_hash,
        }
    }
}

/// Step-by-step builder for [`User`].
#[derive(Debug, Default)]
pub struct UserBuilder {
    name: Option<String>,
    surname: Option<String>,
    login: Option<String>,
    password: Option<Password>,
}

impl UserBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn surname(mut self, surname: impl Into<String>) -> Self {
        self.surname = Some(surname.into());
        self
    }

    #[must_use]
    pub fn login(mut self, login: impl Into<String>) -> Self {
        self.login = Some(login.into());
        self
    }

    #[must_use]
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(Password::new(password));
        self
    }

    /// Consume the builder, validate, and return a [`User`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfHubError::Validation`] if any field is missing or empty.
    pub fn build(self) -> Result<User, ConfHubError> {
        let user = User {
            name: self.name.unwrap_or_default(),
            surname: self.surname.unwrap_or_default(),
            login: self.login.unwrap_or_default(),
            password: self.password.unwrap_or_else(|| Password::new("")),
        };
        user.validate()?;
        Ok(user)
    }
}

/// A validated user with its password already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub surname: String,
    pub login: String,
    pub password_hash: PasswordHash,
}

/// Name and surname of a user.
///
/// Used both as a search filter (fields may contain `*`) and as the shape of
/// search results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserMask {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub surname: String,
}

impl UserMask {
    #[must_use]
    pub fn new(name: impl Into<String>, surname: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            surname: surname.into(),
        }
    }

    #[must_use]
    pub fn name_mask(&self) -> Mask {
        Mask::new(self.name.as_str())
    }

    #[must_use]
    pub fn surname_mask(&self) -> Mask {
        Mask::new(self.surname.as_str())
    }
}
