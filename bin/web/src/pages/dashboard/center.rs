//! Dashboard for recycling center accounts.

use leptos::prelude::*;

use crate::guard::RequireRole;
use crate::session::use_session;
use ecocycle_access::Role;

const SECTIONS: [(&str, &str); 4] = [
    ("Pickup queue", "Review and confirm incoming pickup requests."),
    ("Completed stats", "Totals for processed material by category."),
    (
        "Marketplace purchases",
        "Material purchases made through the marketplace.",
    ),
    ("Performance metrics", "Weekly volume and efficiency trends."),
];

/// Center dashboard route, admitting recycling center accounts.
#[component]
pub fn CenterDashboardPage() -> impl IntoView {
    view! {
        <RequireRole allowed=vec![Role::RecyclingCenter]>
            <CenterDashboardContent/>
        </RequireRole>
    }
}

/// Dashboard content, rendered once the guard grants access.
#[component]
fn CenterDashboardContent() -> impl IntoView {
    let session = use_session();

    view! {
        <div class="center-dashboard">
            {move || session.principal().map(|principal| view! {
                <h1>{format!("Welcome back, {}!", principal.full_name())}</h1>
                <p class="dashboard-subtitle">{principal.email().to_string()}</p>
            })}
            <p>"Manage pickup requests, drop-offs, and processing volumes for your center."</p>
            <section class="dashboard-section">
                <h2>"Operations"</h2>
                <ul class="section-list">
                    {SECTIONS
                        .into_iter()
                        .map(|(name, blurb)| view! {
                            <li>
                                <h3>{name}</h3>
                                <p>{blurb}</p>
                            </li>
                        })
                        .collect_view()}
                </ul>
                <p class="note">"Center reporting comes online once the processing API ships."</p>
            </section>
            <button class="logout-button" on:click=move |_| session.logout()>"Log out"</button>
        </div>
    }
}
