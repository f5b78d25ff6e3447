//! Role-gated route guard component.

use ecocycle_access::{AccessDecision, Role};
use leptos::prelude::*;

use crate::routes;
use crate::session::use_session;

/// Wraps a protected view, rendering or redirecting per the access
/// guard.
///
/// The decision re-evaluates on every session change: logging out from
/// a granted view redirects to login immediately. Redirects replace the
/// current history entry so a denied URL does not land in the back
/// stack. An empty `allowed` set admits any authenticated principal.
#[component]
pub fn RequireRole(
    /// Roles admitted to the wrapped view.
    allowed: Vec<Role>,
    children: ChildrenFn,
) -> impl IntoView {
    let session = use_session();
    let decision = Memo::new(move |_| session.decide(&allowed));

    Effect::new(move || match decision.get() {
        AccessDecision::RedirectToLogin => session.redirect(routes::LOGIN),
        AccessDecision::RedirectToUnauthorized => session.redirect(routes::UNAUTHORIZED),
        AccessDecision::Loading | AccessDecision::Grant => {}
    });

    view! {
        {move || match decision.get() {
            AccessDecision::Grant => children().into_any(),
            AccessDecision::Loading => view! {
                <p class="loading">"Loading..."</p>
            }.into_any(),
            // The effect above performs the redirect; render nothing
            // in the meantime.
            AccessDecision::RedirectToLogin | AccessDecision::RedirectToUnauthorized => {
                ().into_any()
            }
        }}
    }
}
