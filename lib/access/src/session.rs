//! Session state.
//!
//! The session is the live, in-memory projection of "who is logged in".
//! It is a sum type so a principal can never be present without its
//! matching credential: the two travel together in the `Authenticated`
//! variant or not at all.

use crate::credential::Credential;
use crate::principal::Principal;
use crate::role::Role;

/// The client's authentication state.
///
/// Starts as `Restoring` while persisted state is read at startup, then
/// settles into `Anonymous` or `Authenticated`. Login and logout replace
/// the whole value; there is no partial mutation and therefore no stale
/// half-session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Session {
    /// Startup restoration has not completed yet.
    Restoring,
    /// No authenticated user.
    Anonymous,
    /// An authenticated user and their bearer credential.
    Authenticated {
        /// The authenticated identity.
        principal: Principal,
        /// The bearer token for API calls.
        credential: Credential,
    },
}

impl Session {
    /// Returns true while startup restoration is incomplete.
    #[must_use]
    pub fn is_restoring(&self) -> bool {
        matches!(self, Self::Restoring)
    }

    /// Returns true if an authenticated user is present.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    /// Returns the authenticated principal, if present.
    #[must_use]
    pub fn principal(&self) -> Option<&Principal> {
        match self {
            Self::Authenticated { principal, .. } => Some(principal),
            _ => None,
        }
    }

    /// Returns the bearer credential, if present.
    #[must_use]
    pub fn credential(&self) -> Option<&Credential> {
        match self {
            Self::Authenticated { credential, .. } => Some(credential),
            _ => None,
        }
    }

    /// Returns the authenticated principal's role, if present.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.principal().map(Principal::role)
    }
}
