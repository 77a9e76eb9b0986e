//! Conference — a named event that collects reports.

use serde::{Deserialize, Serialize};

use crate::error::{ConfHubError, ValidationError};
use crate::id::ConferenceId;

/// A conference name as submitted for creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewConference {
    pub name: String,
}

impl NewConference {
    /// Create and validate a new conference.
    ///
    /// # Errors
    ///
    /// Returns [`ConfHubError::Validation`] when `name` is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ConfHubError> {
        let conference = Self { name: name.into() };
        conference.validate()?;
        Ok(conference)
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ConfHubError::Validation`] when `name` is empty.
    pub fn validate(&self) -> Result<(), ConfHubError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyField("conference name").into());
        }
        Ok(())
    }
}

/// A stored conference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conference {
    pub id: ConferenceId,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_non_empty_name() {
        let conference = NewConference::new("ICSE2025").unwrap();
        assert_eq!(conference.name, "ICSE2025");
    }

    #[test]
    fn should_reject_empty_name() {
        assert!(matches!(
            NewConference::new(""),
            Err(ConfHubError::Validation(ValidationError::EmptyField(_)))
        ));
    }
}
