//! Registration page component.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::warn;

use crate::config::AppConfig;
use crate::routes;
use crate::session::use_session;
use ecocycle_access::Role;
use ecocycle_client::{ApiClient, RegisterRequest};

/// Account registration form.
///
/// Registration establishes no session; a successful submission lands
/// on the login page for the user to sign in.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = use_session();

    let (first_name, set_first_name) = signal(String::new());
    let (last_name, set_last_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (phone, set_phone) = signal(String::new());
    let (address, set_address) = signal(String::new());
    let (role, set_role) = signal(Role::Individual);
    let (submitting, set_submitting) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let first_name = first_name.get();
        let last_name = last_name.get();
        let email = email.get();
        let password = password.get();
        if first_name.is_empty() || last_name.is_empty() || email.is_empty() || password.is_empty()
        {
            set_error.set(Some("Fill in every required field.".to_string()));
            return;
        }
        let phone = phone.get();
        let address = address.get();
        let request = RegisterRequest {
            first_name,
            last_name,
            email,
            password,
            phone: (!phone.is_empty()).then_some(phone),
            address: (!address.is_empty()).then_some(address),
            role: role.get(),
        };
        set_submitting.set(true);
        set_error.set(None);
        spawn_local(async move {
            let client = ApiClient::new(AppConfig::from_build_env().api_base);
            match client.register(&request).await {
                Ok(()) => {
                    session.navigate(routes::LOGIN);
                }
                Err(e) => {
                    warn!(error = %e, "registration failed");
                    set_error.set(Some(e.user_message()));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="register-page">
            <div class="register-box">
                <h1>"Create your EcoCycle account"</h1>
                <form on:submit=on_submit>
                    <div class="form-row">
                        <label for="first-name">"First name"</label>
                        <input
                            id="first-name"
                            type="text"
                            prop:value=move || first_name.get()
                            on:input=move |ev| set_first_name.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-row">
                        <label for="last-name">"Last name"</label>
                        <input
                            id="last-name"
                            type="text"
                            prop:value=move || last_name.get()
                            on:input=move |ev| set_last_name.set(event_target_value(&ev))
                        />
                    </div>
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
                    <div class="form-row">
                        <label for="phone">"Phone (optional)"</label>
                        <input
                            id="phone"
                            type="tel"
                            prop:value=move || phone.get()
                            on:input=move |ev| set_phone.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-row">
                        <label for="address">"Address (optional)"</label>
                        <input
                            id="address"
                            type="text"
                            prop:value=move || address.get()
                            on:input=move |ev| set_address.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-row">
                        <label for="account-type">"Account type"</label>
                        <AccountTypeSelector set_role=set_role/>
                    </div>
                    {move || error.get().map(|message| view! { <p class="error">{message}</p> })}
                    <button type="submit" class="submit-button" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Creating account..." } else { "Register" }}
                    </button>
                </form>
                <p class="alt-action">"Already registered? "<a href="/login">"Log in"</a></p>
            </div>
        </div>
    }
}

/// Account type selector over the closed role set.
#[component]
fn AccountTypeSelector(set_role: WriteSignal<Role>) -> impl IntoView {
    view! {
        <select
            id="account-type"
            on:change=move |ev| {
                if let Ok(parsed) = event_target_value(&ev).parse::<Role>() {
                    set_role.set(parsed);
                }
            }
        >
            {Role::ALL.into_iter().map(|option| {
                let selected = option == Role::Individual;
                view! {
                    <option value=option.as_str() selected=selected>{option.label()}</option>
                }
            }).collect_view()}
        </select>
    }
}
