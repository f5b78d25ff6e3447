//! Strongly-typed ID types for domain entities.
//!
//! All entity IDs are assigned by the platform API and arrive as plain
//! integers on the wire. Wrapping them in per-entity newtypes keeps a
//! pickup ID from ever being passed where a reward ID is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Error returned when parsing an ID from a string fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError {
    /// The type of ID that failed to parse.
    pub id_type: &'static str,
    /// The reason for the parse failure.
    pub reason: String,
}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse {}: {}", self.id_type, self.reason)
    }
}

impl std::error::Error for ParseIdError {}

/// Macro to generate a strongly-typed ID wrapper around a server-assigned
/// integer identifier.
macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wraps a raw server-assigned identifier.
            #[must_use]
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            /// Returns the raw identifier value.
            #[must_use]
            pub const fn as_i64(&self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse::<i64>()
                    .map(Self)
                    .map_err(|e: ParseIntError| ParseIdError {
                        id_type: stringify!($name),
                        reason: e.to_string(),
                    })
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id!(
    /// Unique identifier for a user account.
    UserId
);

define_id!(
    /// Unique identifier for a recycling pickup.
    PickupId
);

define_id!(
    /// Unique identifier for a recycling challenge.
    ChallengeId
);

define_id!(
    /// Unique identifier for a reward.
    RewardId
);

define_id!(
    /// Unique identifier for a marketplace item.
    ItemId
);

define_id!(
    /// Unique identifier for a recycling history entry.
    RecyclingEntryId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_id_display_is_raw_number() {
        let id = UserId::new(42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn parse_valid_id() {
        let parsed: ItemId = "17".parse().expect("should parse");
        assert_eq!(parsed, ItemId::new(17));
    }

    #[test]
    fn parse_invalid_id() {
        let result: Result<PickupId, _> = "not_a_number".parse();
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.id_type, "PickupId");
    }

    #[test]
    fn id_conversions_round_trip() {
        let id = ChallengeId::from(9);
        assert_eq!(id.as_i64(), 9);
        assert_eq!(i64::from(id), 9);
    }

    #[test]
    fn id_hash() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(RewardId::new(1));
        set.insert(RewardId::new(2));
        set.insert(RewardId::new(1)); // duplicate

        assert_eq!(set.len(), 2);
    }

    #[test]
    fn id_serde_is_transparent() {
        let id = UserId::new(7);
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, "7");
        let parsed: UserId = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(id, parsed);
    }
}
