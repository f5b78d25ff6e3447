//! Session state and role-gated access control for the EcoCycle client.
//!
//! This crate provides:
//! - Account roles (`Role`)
//! - The authenticated identity (`Principal`) and its bearer token
//!   (`Credential`)
//! - Session state (`Session`) and the persistent `SessionStore`
//! - The access guard decision (`AccessDecision`, `evaluate`)
//!
//! # Access Control Model
//!
//! Every account carries exactly one role, fixed at registration. A
//! protected view declares the set of roles it admits; the guard grants,
//! redirects to login, or redirects to the unauthorized view based on the
//! current session. An empty allowed set admits any authenticated
//! principal. While the session is still being restored from storage the
//! guard reports a loading state, never a redirect.
//!
//! # Example
//!
//! ```
//! use ecocycle_access::{
//!     AccessDecision, Credential, MemoryStorage, Principal, Role, SessionStore, evaluate,
//! };
//! use ecocycle_core::UserId;
//!
//! // Establish a session from a successful login response
//! let mut store = SessionStore::new(MemoryStorage::new());
//! store.restore();
//! let principal = Principal::new(
//!     UserId::new(7),
//!     "maya@example.com".to_string(),
//!     "Maya".to_string(),
//!     "Okafor".to_string(),
//!     Role::Individual,
//! );
//! store.login(principal, Credential::new("tok_abc".to_string()));
//!
//! // The guard admits the individual dashboard, not the staff one
//! assert_eq!(
//!     evaluate(store.session(), &[Role::Individual, Role::Household]),
//!     AccessDecision::Grant,
//! );
//! assert_eq!(
//!     evaluate(store.session(), &[Role::Staff]),
//!     AccessDecision::RedirectToUnauthorized,
//! );
//! ```

pub mod credential;
pub mod error;
pub mod guard;
pub mod principal;
pub mod role;
pub mod session;
pub mod store;

// Re-export main types at crate root
pub use credential::Credential;
pub use error::StorageError;
pub use guard::{AccessDecision, evaluate};
pub use principal::Principal;
pub use role::{ParseRoleError, Role};
pub use session::Session;
pub use store::{MemoryStorage, PRINCIPAL_KEY, SessionStorage, SessionStore, TOKEN_KEY};
