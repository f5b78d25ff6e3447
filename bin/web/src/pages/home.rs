//! Home page component.

use leptos::prelude::*;

use crate::routes;
use crate::session::use_session;
use ecocycle_access::Session;

/// Landing page.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();

    view! {
        <div class="home-page">
            <h1>"EcoCycle"</h1>
            <p>"Recycle more, waste less, earn rewards."</p>
            {move || match session.session() {
                Session::Restoring => ().into_any(),
                Session::Anonymous => view! {
                    <div class="home-actions">
                        <a href="/login" class="cta-button">"Log in"</a>
                        <a href="/register" class="cta-link">"Create an account"</a>
                    </div>
                }.into_any(),
                Session::Authenticated { principal, .. } => view! {
                    <div class="home-actions">
                        <a href=routes::dashboard_route(principal.role()) class="cta-button">
                            "Go to your dashboard"
                        </a>
                    </div>
                }.into_any(),
            }}
        </div>
    }
}
