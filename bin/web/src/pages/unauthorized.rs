//! Unauthorized page component.

use leptos::prelude::*;

/// Shown when an authenticated user is denied a role-restricted view.
#[component]
pub fn UnauthorizedPage() -> impl IntoView {
    view! {
        <div class="unauthorized-page">
            <h1>"Access denied"</h1>
            <p>"Your account does not have access to that page."</p>
            <a href="/">"Return to Home"</a>
        </div>
    }
}
