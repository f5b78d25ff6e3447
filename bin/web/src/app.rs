//! Main Leptos application component and routing.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::pages::{
    CenterDashboardPage, HomePage, LoginPage, RegisterPage, StaffDashboardPage, UnauthorizedPage,
    UserDashboardPage,
};
use crate::routes;
use crate::session::{SessionProvider, use_session};
use ecocycle_access::Session;

/// The main application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="EcoCycle"/>
        <Router>
            <SessionProvider>
                <Header/>
                <main class="container">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=HomePage/>
                        <Route path=path!("/login") view=LoginPage/>
                        <Route path=path!("/register") view=RegisterPage/>
                        <Route path=path!("/unauthorized") view=UnauthorizedPage/>
                        <Route path=path!("/user-dashboard") view=UserDashboardPage/>
                        <Route path=path!("/center-dashboard") view=CenterDashboardPage/>
                        <Route path=path!("/staff-dashboard") view=StaffDashboardPage/>
                    </Routes>
                </main>
            </SessionProvider>
        </Router>
    }
}

/// Header with the brand link and session controls.
#[component]
fn Header() -> impl IntoView {
    let session = use_session();

    view! {
        <header class="header">
            <div class="header-left">
                <a href="/" class="logo">"EcoCycle"</a>
            </div>
            <div class="header-right">
                {move || match session.session() {
                    Session::Restoring => ().into_any(),
                    Session::Anonymous => view! {
                        <a href="/login" class="login-button">"Log in"</a>
                        <a href="/register" class="register-button">"Register"</a>
                    }.into_any(),
                    Session::Authenticated { principal, .. } => view! {
                        <a href=routes::dashboard_route(principal.role()) class="user-name">
                            {principal.full_name()}
                        </a>
                        <button class="logout-button" on:click=move |_| session.logout()>
                            "Log out"
                        </button>
                    }.into_any(),
                }}
            </div>
        </header>
    }
}
