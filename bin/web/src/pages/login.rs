//! Login page component.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::warn;

use crate::config::AppConfig;
use crate::routes;
use crate::session::use_session;
use ecocycle_client::ApiClient;

/// Email/password login form.
///
/// On success the session is established and the user lands on the
/// dashboard for their role. A rejection surfaces the server's message
/// inline; a network failure a generic one.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (submitting, set_submitting) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let email = email.get();
        let password = password.get();
        if email.is_empty() || password.is_empty() {
            set_error.set(Some("Enter your email and password.".to_string()));
            return;
        }
        set_submitting.set(true);
        set_error.set(None);
        spawn_local(async move {
            let client = ApiClient::new(AppConfig::from_build_env().api_base);
            match client.login(&email, &password).await {
                Ok((principal, credential)) => {
                    let destination = routes::dashboard_route(principal.role());
                    session.login(principal, credential);
                    session.navigate(destination);
                }
                Err(e) => {
                    warn!(error = %e, "login failed");
                    set_error.set(Some(e.user_message()));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-box">
                <h1>"Log in to EcoCycle"</h1>
                <form on:submit=on_submit>
                    <div class="form-row">
                        <label for="email">"Email"</label>
                        <input
                            id="email"
                            type="email"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-row">
                        <label for="password">"Password"</label>
                        <input
                            id="password"
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                    </div>
                    {move || error.get().map(|message| view! { <p class="error">{message}</p> })}
                    <button type="submit" class="submit-button" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Logging in..." } else { "Log in" }}
                    </button>
                </form>
                <p class="alt-action">"No account yet? "<a href="/register">"Register"</a></p>
            </div>
        </div>
    }
}
