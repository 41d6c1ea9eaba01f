//! Admin space management: create, edit, change state, delete.
//!
//! Occupied spaces are shown but locked; their state follows entries and
//! exits, never a manual override.

#[cfg(test)]
#[path = "spaces_test.rs"]
mod spaces_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::nav_bar::NavBar;
use crate::components::occupancy_summary::OccupancySummary;
use crate::components::space_form_dialog::{SpaceEditDialog, SpaceFormDialog};
use crate::net::AppGateway;
use crate::net::api;
use crate::net::spaces;
use crate::net::types::{ParkingSpace, SpaceState};
use crate::state::access::{self, Action};
use crate::state::auth::AuthState;
use crate::state::forms::space_is_editable;
use crate::state::occupancy::SpaceCounts;
use crate::util::auth::install_route_guard;
use crate::util::confirm;
use crate::util::format;
use crate::util::notify::Notifier;

/// States an admin may force `current` into (everything except itself and Occupied).
fn state_choices(current: SpaceState) -> Vec<SpaceState> {
    if !space_is_editable(current) {
        return Vec::new();
    }
    SpaceState::ASSIGNABLE
        .into_iter()
        .filter(|state| *state != current && *state != SpaceState::Occupied)
        .collect()
}

/// Spaces sorted by number for a stable table.
fn sorted(mut list: Vec<ParkingSpace>) -> Vec<ParkingSpace> {
    list.sort_by(|a, b| a.number.cmp(&b.number));
    list
}

#[component]
pub fn SpacesPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let gateway = expect_context::<AppGateway>();
    let notifier = expect_context::<Notifier>();
    install_route_guard(auth, access::allowed_roles(Action::ManageSpaces), use_navigate());

    let list = RwSignal::new(Vec::<ParkingSpace>::new());
    let loaded = RwSignal::new(false);
    let show_create = RwSignal::new(false);
    let editing = RwSignal::new(None::<ParkingSpace>);

    let reload = Callback::new({
        let gateway = gateway.clone();
        move |()| {
            let gateway = gateway.clone();
            leptos::task::spawn_local(async move {
                match api::fetch_spaces(&gateway, &gateway.session().roles()).await {
                    Ok(spaces) => {
                        list.try_set(sorted(spaces));
                    }
                    Err(err) => {
                        list.try_set(Vec::new());
                        notifier.failure(&err);
                    }
                }
                loaded.try_set(true);
            });
        }
    });
    reload.run(());

    let change_state = Callback::new({
        let gateway = gateway.clone();
        move |(space_id, state): (i64, SpaceState)| {
            let gateway = gateway.clone();
            leptos::task::spawn_local(async move {
                match spaces::update_space_state(&gateway, space_id, state).await {
                    Ok(message) => {
                        notifier.success(message.unwrap_or_else(|| format!("State changed to {}", state.label())));
                        reload.run(());
                    }
                    Err(err) => notifier.failure(&err),
                }
            });
        }
    });

    let delete = Callback::new(move |space: ParkingSpace| {
        if !confirm::ask(&format!("Delete space {}? This cannot be undone.", space.number)) {
            return;
        }
        let gateway = gateway.clone();
        leptos::task::spawn_local(async move {
            match spaces::delete_space(&gateway, space.id).await {
                Ok(message) => {
                    notifier.success(message.unwrap_or_else(|| format!("Space {} deleted", space.number)));
                    reload.run(());
                }
                Err(err) => notifier.failure(&err),
            }
        });
    });

    let counts = Signal::derive(move || list.with(|spaces| SpaceCounts::of(spaces)));
    let on_cancel = Callback::new(move |()| show_create.set(false));
    let on_saved = Callback::new(move |()| {
        show_create.set(false);
        reload.run(());
    });
    let on_edit = Callback::new(move |space: ParkingSpace| editing.set(Some(space)));
    let close_edit = Callback::new(move |()| editing.set(None));
    let on_edited = Callback::new(move |()| {
        editing.set(None);
        reload.run(());
    });

    view! {
        <Show
            when=move || auth.with(|state| state.user.is_some())
            fallback=|| view! { <p class="page-placeholder">"Redirecting to login..."</p> }
        >
            <div class="spaces-page">
                <NavBar title="Manage spaces"/>
                <OccupancySummary counts=counts/>
                <div class="spaces-page__actions">
                    <button class="btn btn--primary" on:click=move |_| show_create.set(true)>
                        "+ New Space"
                    </button>
                </div>
                <Show
                    when=move || !list.with(Vec::is_empty)
                    fallback=move || view! {
                        <p class="spaces-page__empty">{move || if loaded.get() { "No spaces" } else { "Loading spaces..." }}</p>
                    }
                >
                    <table class="spaces-table">
                        <thead>
                            <tr>
                                <th>"Number"</th>
                                <th>"Type"</th>
                                <th>"State"</th>
                                <th>"Rate"</th>
                                <th>"Description"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || list.get().into_iter().map(|space| view! {
                                <SpaceRow space=space on_edit=on_edit on_change_state=change_state on_delete=delete/>
                            }).collect::<Vec<_>>()}
                        </tbody>
                    </table>
                </Show>
                <Show when=move || show_create.get()>
                    <SpaceFormDialog on_cancel=on_cancel on_saved=on_saved/>
                </Show>
                {move || editing.get().map(|space| view! {
                    <SpaceEditDialog space=space on_cancel=close_edit on_saved=on_edited/>
                })}
            </div>
        </Show>
    }
}

#[component]
fn SpaceRow(
    space: ParkingSpace,
    on_edit: Callback<ParkingSpace>,
    on_change_state: Callback<(i64, SpaceState)>,
    on_delete: Callback<ParkingSpace>,
) -> impl IntoView {
    let id = space.id;
    let choices = state_choices(space.state);
    let locked = choices.is_empty();
    let row = space.clone();

    view! {
        <tr class=format!("spaces-table__row {}", space.state.css_modifier())>
            <td>{space.number.clone()}</td>
            <td>{space.kind.label()}</td>
            <td>{space.state.label()}</td>
            <td>{format::hourly_rate(space.hourly_rate)}</td>
            <td>{space.description.clone().unwrap_or_default()}</td>
            <td class="spaces-table__controls">
                <Show
                    when=move || !locked
                    fallback=|| view! { <span class="spaces-table__locked">"In use"</span> }
                >
                    <select
                        class="spaces-table__state"
                        on:change=move |ev| {
                            let picked = SpaceState::from_wire(&event_target_value(&ev));
                            if picked != SpaceState::Unknown {
                                on_change_state.run((id, picked));
                            }
                        }
                    >
                        <option value="" selected=true>"Change state..."</option>
                        {choices.iter().map(|state| view! {
                            <option value=state.as_wire()>{state.label()}</option>
                        }).collect::<Vec<_>>()}
                    </select>
                    <button class="btn" on:click={
                        let row = row.clone();
                        move |_| on_edit.run(row.clone())
                    }>
                        "Edit"
                    </button>
                    <button class="btn btn--danger" on:click={
                        let row = row.clone();
                        move |_| on_delete.run(row.clone())
                    }>
                        "Delete"
                    </button>
                </Show>
            </td>
        </tr>
    }
}
