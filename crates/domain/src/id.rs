//! Typed identifier newtypes backed by server-assigned integers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

macro_rules! define_id {
    ($(#[doc = $doc:expr])* $name:ident) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wrap a raw database identifier.
            #[must_use]
            pub fn new(value: i64) -> Self {
                Self(value)
            }

            /// Access the raw identifier.
            #[must_use]
            pub fn get(self) -> i64 {
                self.0
            }

            /// Parse a path parameter named `field` into an identifier.
            ///
            /// # Errors
            ///
            /// Returns [`ValidationError::EmptyField`] when `value` is empty
            /// and [`ValidationError::InvalidId`] when it is not an integer.
            pub fn parse_param(field: &'static str, value: &str) -> Result<Self, ValidationError> {
                if value.is_empty() {
                    return Err(ValidationError::EmptyField(field));
                }
                value
                    .parse::<i64>()
                    .map(Self)
                    .map_err(|_| ValidationError::InvalidId {
                        field,
                        value: value.to_string(),
                    })
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse().map(Self)
            }
        }
    };
}

define_id!(
    /// Identifier of a [`User`](crate::user::User).
    UserId
);

define_id!(
    /// Identifier of a report.
    ReportId
);

define_id!(
    /// Identifier of a [`Conference`](crate::conference::Conference).
    ConferenceId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_roundtrip_through_display_and_from_str() {
        let id = ReportId::new(42);
        let parsed: ReportId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn should_serialize_as_bare_integer() {
        let json = serde_json::to_string(&UserId::new(3)).unwrap();
        assert_eq!(json, "3");
    }

    #[test]
    fn should_reject_empty_param() {
        let result = ConferenceId::parse_param("conference_id", "");
        assert_eq!(result, Err(ValidationError::EmptyField("conference_id")));
    }

    #[test]
    fn should_reject_non_numeric_param() {
        let result = ConferenceId::parse_param("conference_id", "icse");
        assert!(matches!(
            result,
            Err(ValidationError::InvalidId { field: "conference_id", .. })
        ));
    }

    #[test]
    fn should_reject_param_with_surrounding_whitespace() {
        for raw in [" 7", "7 ", "\t7"] {
            assert!(matches!(
                ConferenceId::parse_param("conference_id", raw),
                Err(ValidationError::InvalidId { .. })
            ));
        }
    }

    #[test]
    fn should_parse_numeric_param() {
        let id = ReportId::parse_param("report_id", "17").unwrap();
        assert_eq!(id.get(), 17);
    }
}
