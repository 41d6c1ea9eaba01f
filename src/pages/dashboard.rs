//! Staff dashboard: live occupancy grid for admins and guards.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guards drag vehicles from the directory panel onto free spaces and click
//! occupied spaces to check vehicles out. Admins drag occupied spaces onto
//! free ones to move a parked vehicle. The grid refreshes on a timer and
//! after every confirmed mutation.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::directory_panel::DirectoryPanel;
use crate::components::nav_bar::NavBar;
use crate::components::occupancy_summary::OccupancySummary;
use crate::components::space_grid::{DropEvent, SpaceGrid};
use crate::config::ClientConfig;
use crate::net::AppGateway;
use crate::net::types::Role;
use crate::pages::grid_actions::GridActions;
use crate::state::access::{self, Action};
use crate::state::auth::AuthState;
use crate::state::drag::DragPayload;
use crate::util::auth::install_route_guard;
use crate::util::notify::Notifier;
use crate::util::poller::install_occupancy_poller;

fn role_hint(roles: &[Role]) -> &'static str {
    if access::can(roles, Action::ReassignSpace) {
        "Drag an occupied space onto a free or reserved one to move its vehicle."
    } else if access::can(roles, Action::AssignVehicle) {
        "Drag a client's vehicle onto a free space to register its entry. Click an occupied space to register its exit."
    } else {
        ""
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let gateway = expect_context::<AppGateway>();
    let config = expect_context::<ClientConfig>();
    let notifier = expect_context::<Notifier>();
    install_route_guard(auth, access::allowed_roles(Action::ViewOccupancy), use_navigate());

    let actions = GridActions::new(gateway.clone(), auth, notifier);
    let occupancy = actions.occupancy;
    install_occupancy_poller(gateway, occupancy, auth, config.poll_interval);

    let roles = move || auth.with(AuthState::roles);
    let is_admin = Signal::derive(move || access::can(&roles(), Action::ReassignSpace));
    let is_guard = move || access::can(&roles(), Action::AssignVehicle);
    let counts = Signal::derive(move || occupancy.with(|state| state.snapshot.counts()));

    let on_drag_start = Callback::new({
        let actions = actions.clone();
        move |payload: DragPayload| actions.begin_drag(payload)
    });
    let on_drag_end = Callback::new({
        let actions = actions.clone();
        move |()| actions.end_drag()
    });
    let on_drop = Callback::new({
        let actions = actions.clone();
        move |event: DropEvent| actions.drop(&event)
    });
    let on_click = Callback::new(move |space_id: i64| actions.click(space_id));

    view! {
        <Show
            when=move || auth.with(|state| state.user.is_some())
            fallback=|| view! { <p class="page-placeholder">"Redirecting to login..."</p> }
        >
            <div class="dashboard-page">
                <NavBar title="Live occupancy"/>
                <OccupancySummary counts=counts/>
                <p class="dashboard-page__hint">{move || role_hint(&roles())}</p>
                <div class="dashboard-page__body">
                    <Show when=is_guard>
                        <DirectoryPanel on_drag_start=on_drag_start on_drag_end=on_drag_end/>
                    </Show>
                    <SpaceGrid
                        occupancy=occupancy
                        reassign_enabled=is_admin
                        show_occupants=true
                        on_drop=on_drop
                        on_click=on_click
                        on_drag_start=on_drag_start
                        on_drag_end=on_drag_end
                    />
                </div>
            </div>
        </Show>
    }
}
