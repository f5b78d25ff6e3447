//! Principal domain type.
//!
//! The Principal is the authenticated identity as the client knows it:
//! the profile fields the login endpoint returns, plus the account role.
//! It is persisted alongside the bearer credential for the lifetime of
//! the session and read back once at application start.

use chrono::{DateTime, Utc};
use ecocycle_core::UserId;
use serde::{Deserialize, Serialize};

use crate::role::Role;

/// The authenticated user's identity and role.
///
/// Created from the login response and persisted immediately. The
/// serialized form mirrors the REST API's user payload, with the role
/// under the wire name `user_type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// Server-assigned user ID.
    id: UserId,
    /// Account email address, also the login identifier.
    email: String,
    /// Given name.
    first_name: String,
    /// Family name.
    last_name: String,
    /// Account role, serialized as the API's `user_type` discriminant.
    #[serde(rename = "user_type")]
    role: Role,
    /// Contact phone number, if provided at registration.
    #[serde(default)]
    phone: Option<String>,
    /// Street address, if provided at registration.
    #[serde(default)]
    address: Option<String>,
    /// When the account was created, if the server includes it.
    #[serde(default)]
    date_joined: Option<DateTime<Utc>>,
}

impl Principal {
    /// Creates a principal with the required identity fields.
    ///
    /// Optional profile fields start empty; use
    /// [`with_all_fields`](Self::with_all_fields) when reconstituting a
    /// complete payload.
    #[must_use]
    pub fn new(
        id: UserId,
        email: String,
        first_name: String,
        last_name: String,
        role: Role,
    ) -> Self {
        Self {
            id,
            email,
            first_name,
            last_name,
            role,
            phone: None,
            address: None,
            date_joined: None,
        }
    }

    /// Creates a principal with all fields specified.
    #[must_use]
    #[expect(clippy::too_many_arguments)]
    pub fn with_all_fields(
        id: UserId,
        email: String,
        first_name: String,
        last_name: String,
        role: Role,
        phone: Option<String>,
        address: Option<String>,
        date_joined: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            email,
            first_name,
            last_name,
            role,
            phone,
            address,
            date_joined,
        }
    }

    /// Returns the server-assigned user ID.
    #[must_use]
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Returns the account email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the given name.
    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Returns the family name.
    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Returns the full name for display.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Returns the account role.
    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    /// Returns the contact phone number, if provided.
    #[must_use]
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    /// Returns the street address, if provided.
    #[must_use]
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    /// Returns when the account was created, if known.
    #[must_use]
    pub fn date_joined(&self) -> Option<DateTime<Utc>> {
        self.date_joined
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_principal() -> Principal {
        Principal::new(
            UserId::new(12),
            "maya@example.com".to_string(),
            "Maya".to_string(),
            "Okafor".to_string(),
            Role::Individual,
        )
    }

    #[test]
    fn new_principal_has_required_fields() {
        let principal = test_principal();

        assert_eq!(principal.id(), UserId::new(12));
        assert_eq!(principal.email(), "maya@example.com");
        assert_eq!(principal.first_name(), "Maya");
        assert_eq!(principal.last_name(), "Okafor");
        assert_eq!(principal.role(), Role::Individual);
    }

    #[test]
    fn new_principal_has_no_optional_fields() {
        let principal = test_principal();

        assert!(principal.phone().is_none());
        assert!(principal.address().is_none());
        assert!(principal.date_joined().is_none());
    }

    #[test]
    fn full_name_joins_first_and_last() {
        let principal = test_principal();
        assert_eq!(principal.full_name(), "Maya Okafor");
    }

    #[test]
    fn with_all_fields_preserves_values() {
        let joined = Utc::now() - chrono::Duration::days(30);
        let principal = Principal::with_all_fields(
            UserId::new(4),
            "center@example.com".to_string(),
            "Green".to_string(),
            "Depot".to_string(),
            Role::RecyclingCenter,
            Some("555-0100".to_string()),
            Some("12 Mill Rd".to_string()),
            Some(joined),
        );

        assert_eq!(principal.id(), UserId::new(4));
        assert_eq!(principal.role(), Role::RecyclingCenter);
        assert_eq!(principal.phone(), Some("555-0100"));
        assert_eq!(principal.address(), Some("12 Mill Rd"));
        assert_eq!(principal.date_joined(), Some(joined));
    }

    #[test]
    fn role_serializes_under_user_type() {
        let principal = test_principal();
        let json = serde_json::to_string(&principal).expect("serialize");
        assert!(json.contains("\"user_type\":\"individual\""));
        assert!(!json.contains("\"role\""));
    }

    #[test]
    fn deserializes_api_user_payload() {
        let payload = r#"{
            "id": 7,
            "email": "sam@example.com",
            "first_name": "Sam",
            "last_name": "Reyes",
            "user_type": "recycling_center",
            "phone": "555-0142",
            "address": "40 Harbor Way",
            "date_joined": "2025-03-14T09:26:53Z"
        }"#;

        let principal: Principal = serde_json::from_str(payload).expect("deserialize");
        assert_eq!(principal.id(), UserId::new(7));
        assert_eq!(principal.role(), Role::RecyclingCenter);
        assert_eq!(principal.phone(), Some("555-0142"));
        assert!(principal.date_joined().is_some());
    }

    #[test]
    fn deserializes_payload_without_optional_fields() {
        let payload = r#"{
            "id": 1,
            "email": "staff@example.com",
            "first_name": "Ada",
            "last_name": "Lin",
            "user_type": "staff"
        }"#;

        let principal: Principal = serde_json::from_str(payload).expect("deserialize");
        assert_eq!(principal.role(), Role::Staff);
        assert!(principal.phone().is_none());
        assert!(principal.address().is_none());
        assert!(principal.date_joined().is_none());
    }

    #[test]
    fn principal_serialization_roundtrip() {
        let principal = Principal::with_all_fields(
            UserId::new(9),
            "h@example.com".to_string(),
            "Ji-woo".to_string(),
            "Park".to_string(),
            Role::Household,
            None,
            Some("3 Elm St".to_string()),
            None,
        );

        let json = serde_json::to_string(&principal).expect("serialize");
        let parsed: Principal = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(principal, parsed);
    }
}
