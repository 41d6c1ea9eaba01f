//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components apply identical redirect behavior: signed-out users go to
//! `/login`, signed-in users without the page's role go to their landing page.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::types::Role;
use crate::state::auth::AuthState;

pub const LOGIN_ROUTE: &str = "/login";
pub const STAFF_ROUTE: &str = "/dashboard";
pub const CLIENT_ROUTE: &str = "/cliente";

pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.user.is_none()
}

/// Where a user with `roles` lands after login or on `/`. Only the first role
/// the backend listed counts.
pub fn landing_route(roles: &[Role]) -> &'static str {
    match roles.first() {
        Some(Role::Admin | Role::Guard) => STAFF_ROUTE,
        Some(Role::Client) | None => CLIENT_ROUTE,
    }
}

/// Redirect target for a page requiring one of `required` roles, if any.
pub fn guard_target(state: &AuthState, required: &[Role]) -> Option<&'static str> {
    if should_redirect_unauth(state) {
        return Some(LOGIN_ROUTE);
    }
    if state.loading {
        return None;
    }
    let roles = state.roles();
    if required.is_empty() || roles.iter().any(|role| required.contains(role)) {
        None
    } else {
        Some(landing_route(&roles))
    }
}

/// Keep the current route consistent with `required` roles for as long as
/// the page is mounted.
pub fn install_route_guard<F>(auth: RwSignal<AuthState>, required: &'static [Role], navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(target) = guard_target(&auth.get(), required) {
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
