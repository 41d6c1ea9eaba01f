//! Client page: browse spaces and reserve an available one.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::nav_bar::NavBar;
use crate::components::occupancy_summary::OccupancySummary;
use crate::components::reservation_dialog::ReservationDialog;
use crate::components::space_grid::{DropEvent, SpaceGrid};
use crate::config::ClientConfig;
use crate::net::AppGateway;
use crate::state::access::{self, Action};
use crate::pages::grid_actions::GridActions;
use crate::state::auth::AuthState;
use crate::state::drag::DragPayload;
use crate::util::auth::install_route_guard;
use crate::util::notify::Notifier;
use crate::util::poller::install_occupancy_poller;

#[component]
pub fn ClientPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let gateway = expect_context::<AppGateway>();
    let config = expect_context::<ClientConfig>();
    let notifier = expect_context::<Notifier>();
    install_route_guard(auth, access::allowed_roles(Action::Reserve), use_navigate());

    let actions = GridActions::new(gateway.clone(), auth, notifier);
    let occupancy = actions.occupancy;
    let reserve = actions.reserve;
    install_occupancy_poller(gateway, occupancy, auth, config.poll_interval);

    let counts = Signal::derive(move || occupancy.with(|state| state.snapshot.counts()));
    let on_drop = Callback::new({
        let actions = actions.clone();
        move |event: DropEvent| actions.drop(&event)
    });
    let on_click = Callback::new(move |space_id: i64| actions.click(space_id));
    let on_drag_start = Callback::new(|_: DragPayload| {});
    let on_drag_end = Callback::new(|()| {});
    let on_cancel = Callback::new(move |()| reserve.set(None));
    let on_saved = Callback::new(move |()| reserve.set(None));

    view! {
        <Show
            when=move || auth.with(|state| state.user.is_some())
            fallback=|| view! { <p class="page-placeholder">"Redirecting to login..."</p> }
        >
            <div class="client-page">
                <NavBar title="Parking spaces"/>
                <OccupancySummary counts=counts/>
                <p class="client-page__hint">"Click an available space to reserve it."</p>
                <SpaceGrid
                    occupancy=occupancy
                    reassign_enabled=false
                    show_occupants=false
                    on_drop=on_drop
                    on_click=on_click
                    on_drag_start=on_drag_start
                    on_drag_end=on_drag_end
                />
                {move || {
                    reserve
                        .get()
                        .map(|(space_id, number)| view! {
                            <ReservationDialog
                                space_id=space_id
                                space_number=number
                                on_cancel=on_cancel
                                on_saved=on_saved
                            />
                        })
                }}
            </div>
        </Show>
    }
}
