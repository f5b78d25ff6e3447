//! Dashboard for platform staff.

use leptos::prelude::*;

use crate::guard::RequireRole;
use crate::session::use_session;
use ecocycle_access::Role;

const SECTIONS: [(&str, &str); 5] = [
    (
        "System overview",
        "Platform-wide totals for users, pickups, and centers.",
    ),
    ("Challenge management", "Create and track community challenges."),
    ("Reward management", "Maintain the reward catalog and stock."),
    (
        "User management",
        "Review individual accounts and center verification.",
    ),
    ("Reports", "Exportable summaries for operations."),
];

/// Staff dashboard route, admitting platform staff only.
#[component]
pub fn StaffDashboardPage() -> impl IntoView {
    view! {
        <RequireRole allowed=vec![Role::Staff]>
            <StaffDashboardContent/>
        </RequireRole>
    }
}

/// Dashboard content, rendered once the guard grants access.
#[component]
fn StaffDashboardContent() -> impl IntoView {
    let session = use_session();

    view! {
        <div class="staff-dashboard">
            {move || session.principal().map(|principal| view! {
                <h1>{format!("Welcome back, {}!", principal.full_name())}</h1>
                <p class="dashboard-subtitle">{principal.email().to_string()}</p>
            })}
            <p>"Oversee users, centers, challenges, and rewards across the platform."</p>
            <section class="dashboard-section">
                <h2>"Administration"</h2>
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
                <p class="note">"Management tools come online once the admin API ships."</p>
            </section>
            <button class="logout-button" on:click=move |_| session.logout()>"Log out"</button>
        </div>
    }
}
