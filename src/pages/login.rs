//! Login page: username + password against the backend, then role landing.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::AppGateway;
use crate::net::api;
use crate::state::auth::AuthState;
use crate::util::auth::landing_route;

/// Trim the username and require both fields.
fn validate_login_input(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter your username and password.");
    }
    Ok((username.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let gateway = expect_context::<AppGateway>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Already signed in: skip the form.
    let navigate_signed_in = navigate.clone();
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.user.is_some() {
            navigate_signed_in(landing_route(&state.roles()), NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (user_value, password_value) = match validate_login_input(&username.get(), &password.get()) {
            Ok(values) => values,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());
        let gateway = gateway.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::login(&gateway, &user_value, &password_value).await {
                Ok(result) => {
                    if !gateway.session().set_auth(&result) {
                        log::warn!("login response carried no token");
                    }
                    let state = AuthState::from_session(gateway.session());
                    if state.user.is_none() {
                        info.try_set("Authentication failed. Please try again.".to_owned());
                        busy.try_set(false);
                        return;
                    }
                    log::info!("signed in as {user_value}");
                    let target = landing_route(&state.roles());
                    auth.set(state);
                    navigate(target, NavigateOptions::default());
                }
                Err(err) => {
                    info.try_set(err.to_string());
                    busy.try_set(false);
                }
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"ParkSpot"</h1>
                <p class="login-card__subtitle">"Sign in to manage parking"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        autocomplete="username"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        autocomplete="current-password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
