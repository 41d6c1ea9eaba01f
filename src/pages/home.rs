//! `/`: send the visitor to login or to their role's landing page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::auth::{LOGIN_ROUTE, landing_route};

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        let state = auth.get();
        if state.loading {
            return;
        }
        let target = if state.user.is_some() { landing_route(&state.roles()) } else { LOGIN_ROUTE };
        navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
    });

    view! { <p class="page-placeholder">"Redirecting..."</p> }
}
