//! Account roles for platform access control.
//!
//! Every account has exactly one role, chosen at registration. The role
//! decides which dashboard an account lands on after login and which
//! routes the access guard admits.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Account role, fixed at registration.
///
/// Serialized with the REST API's `user_type` discriminants:
/// `individual`, `household`, `recycling_center`, `staff`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// A single person recycling from home.
    Individual,
    /// A multi-person household sharing one account.
    Household,
    /// A recycling center handling drop-offs and pickups.
    RecyclingCenter,
    /// Platform staff with oversight of users and centers.
    Staff,
}

impl Role {
    /// All roles, in the order the registration form offers them.
    pub const ALL: [Role; 4] = [
        Role::Individual,
        Role::Household,
        Role::RecyclingCenter,
        Role::Staff,
    ];

    /// Returns the wire name used by the REST API's `user_type` field.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Individual => "individual",
            Self::Household => "household",
            Self::RecyclingCenter => "recycling_center",
            Self::Staff => "staff",
        }
    }

    /// Returns the human-readable label shown in account-type selectors.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Individual => "Individual",
            Self::Household => "Household",
            Self::RecyclingCenter => "Recycling Center",
            Self::Staff => "Staff",
        }
    }

    /// Returns true if this role has staff oversight privileges.
    #[must_use]
    pub fn is_staff(&self) -> bool {
        matches!(self, Self::Staff)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when parsing an unrecognized role name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRoleError {
    /// The value that did not match any role.
    pub value: String,
}

impl fmt::Display for ParseRoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown role: '{}'", self.value)
    }
}

impl std::error::Error for ParseRoleError {}

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "individual" => Ok(Self::Individual),
            "household" => Ok(Self::Household),
            "recycling_center" => Ok(Self::RecyclingCenter),
            "staff" => Ok(Self::Staff),
            other => Err(ParseRoleError {
                value: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_wire_names() {
        assert_eq!(Role::Individual.as_str(), "individual");
        assert_eq!(Role::Household.as_str(), "household");
        assert_eq!(Role::RecyclingCenter.as_str(), "recycling_center");
        assert_eq!(Role::Staff.as_str(), "staff");
    }

    #[test]
    fn role_serialization_format() {
        let json = serde_json::to_string(&Role::RecyclingCenter).expect("serialize");
        assert_eq!(json, "\"recycling_center\"");

        let json = serde_json::to_string(&Role::Individual).expect("serialize");
        assert_eq!(json, "\"individual\"");
    }

    #[test]
    fn role_serialization_roundtrip() {
        for role in Role::ALL {
            let json = serde_json::to_string(&role).expect("serialize");
            let parsed: Role = serde_json::from_str(&json).expect("deserialize");
            assert_eq!(role, parsed);
        }
    }

    #[test]
    fn role_from_str_matches_wire_names() {
        for role in Role::ALL {
            let parsed: Role = role.as_str().parse().expect("parse");
            assert_eq!(role, parsed);
        }
    }

    #[test]
    fn role_from_str_rejects_unknown() {
        let result: Result<Role, _> = "superuser".parse();
        let err = result.unwrap_err();
        assert_eq!(err.value, "superuser");
        assert!(err.to_string().contains("superuser"));
    }

    #[test]
    fn role_display_matches_wire_name() {
        assert_eq!(Role::RecyclingCenter.to_string(), "recycling_center");
    }

    #[test]
    fn only_staff_is_staff() {
        assert!(Role::Staff.is_staff());
        assert!(!Role::Individual.is_staff());
        assert!(!Role::Household.is_staff());
        assert!(!Role::RecyclingCenter.is_staff());
    }

    #[test]
    fn labels_are_human_readable() {
        assert_eq!(Role::RecyclingCenter.label(), "Recycling Center");
        assert_eq!(Role::Household.label(), "Household");
    }
}
