//! Mask — a search pattern where `*` stands for any sequence of characters.
//!
//! Everything that is not `*` is literal and compared case-sensitively.
//! Translation to SQL is a direct substitution: `*` stays the `GLOB`
//! wildcard, while the other `GLOB` metacharacters (`?` and `[`) are wrapped
//! in a one-character class so that a mask without `*` stays an exact match.

use serde::{Deserialize, Serialize};

/// Wildcard character accepted in masks.
pub const WILDCARD: char = '*';

/// A single-field search pattern.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mask(String);

impl Mask {
    #[must_use]
    pub fn new(pattern: impl Into<String>) -> Self {
        Self(pattern.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Translate into a `GLOB` pattern.
    #[must_use]
    pub fn to_glob_pattern(&self) -> String {
        let mut out = String::with_capacity(self.0.len());
        for ch in self.0.chars() {
            match ch {
                WILDCARD => out.push('*'),
                '?' | '[' => {
                    out.push('[');
                    out.push(ch);
                    out.push(']');
                }
                other => out.push(other),
            }
        }
        out
    }
}

impl From<&str> for Mask {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Mask {
    fn from(value: String) -> Self {
        Self(value)
    }
}
