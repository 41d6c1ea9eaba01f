//! Guard's client directory: search clients, pick one, drag a vehicle onto a space.

use leptos::prelude::*;

use crate::components::space_grid::write_transfer;
use crate::net::AppGateway;
use crate::net::people;
use crate::net::types::{ClientSummary, Vehicle};
use crate::state::directory::DirectoryState;
#[cfg(feature = "csr")]
use crate::state::directory::SEARCH_DEBOUNCE_MS;
use crate::state::drag::DragPayload;

fn run_search(gateway: AppGateway, directory: RwSignal<DirectoryState>, seq: u64, query: String) {
    leptos::task::spawn_local(async move {
        #[cfg(feature = "csr")]
        gloo_timers::future::sleep(std::time::Duration::from_millis(SEARCH_DEBOUNCE_MS)).await;
        if !directory.try_with_untracked(|state| state.is_current(seq)).unwrap_or(false) {
            return;
        }
        let clients = people::search_clients(&gateway, &query).await.unwrap_or_else(|err| {
            log::warn!("client search failed: {err}");
            Vec::new()
        });
        directory.try_update(|state| state.accept_results(seq, clients));
    });
}

fn load_vehicles(gateway: AppGateway, directory: RwSignal<DirectoryState>, client_id: i64) {
    leptos::task::spawn_local(async move {
        let vehicles = people::client_vehicles(&gateway, client_id).await.unwrap_or_else(|err| {
            log::warn!("vehicle lookup for client {client_id} failed: {err}");
            Vec::new()
        });
        directory.try_update(|state| state.accept_vehicles(client_id, vehicles));
    });
}

#[component]
pub fn DirectoryPanel(on_drag_start: Callback<DragPayload>, on_drag_end: Callback<()>) -> impl IntoView {
    let gateway = expect_context::<AppGateway>();
    let directory = RwSignal::new(DirectoryState::default());

    let search_gateway = gateway.clone();
    let on_input = move |ev: leptos::ev::Event| {
        let query = event_target_value(&ev);
        let seq = directory.try_update(|state| state.begin_search(&query)).unwrap_or_default();
        if !query.trim().is_empty() {
            run_search(search_gateway.clone(), directory, seq, query);
        }
    };

    let on_select = Callback::new(move |client: ClientSummary| {
        let client_id = client.id;
        directory.update(|state| state.select(client));
        load_vehicles(gateway.clone(), directory, client_id);
    });

    view! {
        <aside class="directory-panel">
            <h2 class="directory-panel__title">"Clients"</h2>
            <input
                class="directory-panel__search"
                type="search"
                placeholder="Search by name"
                prop:value=move || directory.with(|s| s.query.clone())
                on:input=on_input
            />
            <Show when=move || directory.with(|s| s.searching)>
                <p class="directory-panel__hint">"Searching..."</p>
            </Show>
            <ul class="directory-panel__clients">
                {move || {
                    let selected = directory.with(|s| s.selected_id());
                    directory
                        .with(|s| s.clients.clone())
                        .into_iter()
                        .map(|client| {
                            let active = selected == Some(client.id);
                            let label = client.display_name();
                            let dni = client.dni.clone().unwrap_or_default();
                            view! {
                                <li
                                    class="directory-panel__client"
                                    class:directory-panel__client--active=active
                                    on:click=move |_| on_select.run(client.clone())
                                >
                                    <span>{label}</span>
                                    <span class="directory-panel__dni">{dni}</span>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </ul>
            <Show when=move || directory.with(|s| s.selected.is_some())>
                <h3 class="directory-panel__subtitle">
                    {move || directory.with(|s| s.selected.as_ref().map(ClientSummary::display_name).unwrap_or_default())}
                    <button
                        class="directory-panel__clear"
                        title="Clear selection"
                        on:click=move |_| directory.update(DirectoryState::clear_selection)
                    >
                        "x"
                    </button>
                </h3>
                <Show
                    when=move || directory.with(|s| !s.vehicles.is_empty())
                    fallback=|| view! { <p class="directory-panel__hint">"No vehicles registered."</p> }
                >
                    <ul class="directory-panel__vehicles">
                        {move || {
                            let client_id = directory.with(|s| s.selected_id()).unwrap_or_default();
                            directory
                                .with(|s| s.vehicles.clone())
                                .into_iter()
                                .map(|vehicle| view! {
                                    <VehicleChip
                                        client_id=client_id
                                        vehicle=vehicle
                                        on_drag_start=on_drag_start
                                        on_drag_end=on_drag_end
                                    />
                                })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </Show>
            </Show>
        </aside>
    }
}

#[component]
fn VehicleChip(
    client_id: i64,
    vehicle: Vehicle,
    on_drag_start: Callback<DragPayload>,
    on_drag_end: Callback<()>,
) -> impl IntoView {
    let payload = DragPayload::VehicleAssignment { client_id, vehicle_id: vehicle.id };
    let description = vehicle.description();
    view! {
        <li
            class="vehicle-chip"
            draggable="true"
            title="Drag onto a free space to register the entry"
            on:dragstart=move |ev: leptos::ev::DragEvent| {
                write_transfer(&ev, &payload);
                on_drag_start.run(payload.clone());
            }
            on:dragend=move |_| on_drag_end.run(())
        >
            <span class="vehicle-chip__plate">{vehicle.plate.clone()}</span>
            <span class="vehicle-chip__model">{description}</span>
        </li>
    }
}
