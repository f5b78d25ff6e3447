//! Bearer credential type.
//!
//! The credential is the opaque access token the login endpoint returns.
//! It proves the session to the server on every authenticated request
//! and must never appear in logs; its `Debug` impl redacts the value.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque bearer token proving an authenticated session.
///
/// The token value is server-opaque: the client stores it, attaches it
/// as an `Authorization: Bearer` header, and never inspects it. There
/// is deliberately no `Display` impl, and `Debug` is redacted, so the
/// token cannot leak through logging or panic messages.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Credential(String);

impl Credential {
    /// Creates a credential from a raw token string.
    #[must_use]
    pub fn new(token: String) -> Self {
        Self(token)
    }

    /// Returns the raw token for the authorization header.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

impl From<String> for Credential {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl From<&str> for Credential {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn as_str_returns_raw_token() {
        let credential = Credential::new("eyJhbGciOi.payload.sig".to_string());
        assert_eq!(credential.as_str(), "eyJhbGciOi.payload.sig");
    }

    #[test]
    fn debug_redacts_token() {
        let credential = Credential::new("secret-token-value".to_string());
        let debug = format!("{:?}", credential);
        assert!(!debug.contains("secret-token-value"));
        assert!(debug.contains("redacted"));
    }

    #[test]
    fn credential_from_str() {
        let credential: Credential = "tok_123".into();
        assert_eq!(credential.as_str(), "tok_123");
    }

    #[test]
    fn credential_serializes_as_bare_string() {
        let credential = Credential::new("tok_abc".to_string());
        let json = serde_json::to_string(&credential).expect("serialize");
        assert_eq!(json, "\"tok_abc\"");

        let parsed: Credential = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(credential, parsed);
    }
}
