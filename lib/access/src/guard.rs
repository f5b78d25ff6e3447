//! Access guard decision logic.
//!
//! The guard decides whether a role-restricted view may render. The
//! decision is pure: it looks only at the current session and the
//! view's declared allowed roles. Performing the actual redirect is the
//! rendering layer's concern, which keeps this logic testable without a
//! browser.

use crate::role::Role;
use crate::session::Session;

/// Outcome of an access check for a role-restricted view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    /// Session restoration has not finished. Render a neutral loading
    /// indicator, never a redirect, so startup cannot flash a false
    /// "must log in" state.
    Loading,
    /// No authenticated user. Redirect to the login view, replacing
    /// history so the back button does not return to the blocked view.
    RedirectToLogin,
    /// Authenticated, but the role is not allowed here. Redirect to the
    /// unauthorized view, history-replaced.
    RedirectToUnauthorized,
    /// Render the protected view.
    Grant,
}

/// Decides whether the current session may view a route restricted to
/// `allowed_roles`.
///
/// An empty `allowed_roles` set admits any authenticated principal.
/// Callers re-evaluate on every session change, so a logout from a
/// granted view transitions straight back to [`AccessDecision::RedirectToLogin`].
#[must_use]
pub fn evaluate(session: &Session, allowed_roles: &[Role]) -> AccessDecision {
    match session {
        Session::Restoring => AccessDecision::Loading,
        Session::Anonymous => AccessDecision::RedirectToLogin,
        Session::Authenticated { principal, .. } => {
            if allowed_roles.is_empty() || allowed_roles.contains(&principal.role()) {
                AccessDecision::Grant
            } else {
                AccessDecision::RedirectToUnauthorized
            }
        }
    }
}
