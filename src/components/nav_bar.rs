//! Top bar with role-aware navigation, identity and logout.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::AppGateway;
use crate::net::types::Role;
use crate::state::access::{self, Action};
use crate::state::auth::AuthState;
use crate::util::auth::LOGIN_ROUTE;

#[component]
pub fn NavBar(#[prop(into)] title: String) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let gateway = expect_context::<AppGateway>();
    let navigate = use_navigate();

    let roles = move || auth.with(AuthState::roles);
    let is_staff = move || access::can(&roles(), Action::ViewOccupancy);
    let allowed = move |action: Action| access::can(&roles(), action);
    let identity = move || {
        auth.with(|state| {
            state.user.as_ref().map_or_else(String::new, |user| {
                let role = user.primary_role().map_or("", Role::label);
                format!("{} ({role})", user.username)
            })
        })
    };

    let on_logout = move |_| {
        log::info!("signing out");
        gateway.session().clear_auth();
        auth.set(AuthState::default());
        navigate(LOGIN_ROUTE, NavigateOptions::default());
    };

    view! {
        <header class="nav-bar toolbar">
            <span class="nav-bar__brand">"ParkSpot"</span>
            <span class="toolbar__divider" aria-hidden="true"></span>
            <span class="nav-bar__title">{title}</span>
            <nav class="nav-bar__links">
                <Show when=is_staff>
                    <a href="/dashboard">"Occupancy"</a>
                </Show>
                <Show when=move || !is_staff()>
                    <a href="/cliente">"Spaces"</a>
                </Show>
                <Show when=move || allowed(Action::ManageSpaces)>
                    <a href="/spaces">"Manage spaces"</a>
                </Show>
                <Show when=move || allowed(Action::ManageReservations)>
                    <a href="/reservations">"Reservations"</a>
                </Show>
                <Show when=move || allowed(Action::ViewReports)>
                    <a href="/reports">"Reports"</a>
                </Show>
                <Show when=move || allowed(Action::ManageClients)>
                    <a href="/clients">"Clients"</a>
                </Show>
                <Show when=move || allowed(Action::ManageGuards)>
                    <a href="/guards">"Guards"</a>
                </Show>
                <Show when=move || allowed(Action::ViewStatistics)>
                    <a href="/statistics">"Statistics"</a>
                </Show>
                <Show when=move || allowed(Action::EditProfile)>
                    <a href="/profile">"Profile"</a>
                </Show>
            </nav>
            <span class="toolbar__spacer"></span>
            <span class="nav-bar__self">{identity}</span>
            <button class="btn nav-bar__logout" on:click=on_logout title="Logout">
                "Logout"
            </button>
        </header>
    }
}
