//! Parking grid: one card per space, acting as drop target and click target.
//!
//! DESIGN
//! ======
//! Cards only report gestures upward (`on_drop`, `on_click`, drag start/end);
//! the page owns the `DragController` and decides what a gesture means. The
//! payload is also written to `DataTransfer`, which some browsers require to
//! start a drag at all, and which the page falls back to when the controller
//! lost track of the gesture.

use leptos::prelude::*;

use crate::net::types::{ParkingSpace, SpaceState};
use crate::state::drag::DragPayload;
use crate::state::occupancy::OccupancyState;
use crate::util::format;

pub const TRANSFER_MIME: &str = "text/plain";

/// A drop reported by a card: target space id plus the `DataTransfer` text, if readable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DropEvent {
    pub target_space_id: i64,
    pub transfer: Option<String>,
}

/// Store `payload` on the drag event so the drop target can read it back.
pub fn write_transfer(ev: &leptos::ev::DragEvent, payload: &DragPayload) {
    #[cfg(feature = "csr")]
    {
        if let Some(transfer) = ev.data_transfer() {
            if transfer.set_data(TRANSFER_MIME, &payload.to_transfer()).is_err() {
                log::debug!("could not write drag payload to DataTransfer");
            }
            transfer.set_effect_allowed("move");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (ev, payload);
    }
}

fn read_transfer(ev: &leptos::ev::DragEvent) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        ev.data_transfer()
            .and_then(|transfer| transfer.get_data(TRANSFER_MIME).ok())
            .filter(|raw| !raw.is_empty())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = ev;
        None
    }
}

/// Grid of every space in the current snapshot.
#[component]
pub fn SpaceGrid(
    occupancy: RwSignal<OccupancyState>,
    /// Occupied cards become drag sources (admin reassignment).
    #[prop(into)]
    reassign_enabled: Signal<bool>,
    /// Show occupant labels on occupied cards.
    #[prop(into)]
    show_occupants: Signal<bool>,
    on_drop: Callback<DropEvent>,
    on_click: Callback<i64>,
    on_drag_start: Callback<DragPayload>,
    on_drag_end: Callback<()>,
) -> impl IntoView {
    let labels = Memo::new(move |_| occupancy.with(|state| state.snapshot.occupant_labels()));

    view! {
        <Show
            when=move || occupancy.with(|state| !state.snapshot.spaces.is_empty())
            fallback=move || {
                view! {
                    <p class="space-grid__empty">
                        {move || if occupancy.with(|s| s.loaded) { "No spaces" } else { "Loading spaces..." }}
                    </p>
                }
            }
        >
            <div class="space-grid" class:space-grid--busy=move || occupancy.with(|s| s.busy)>
                <For
                    each=move || occupancy.with(|state| state.snapshot.spaces.clone())
                    key=|space| (space.id, space.state.as_wire(), space.number.clone())
                    children=move |space: ParkingSpace| {
                        let occupant = {
                            let number = space.number.clone();
                            Signal::derive(move || {
                                if show_occupants.get() { labels.with(|map| map.get(&number).cloned()) } else { None }
                            })
                        };
                        view! {
                            <SpaceCard
                                space=space
                                occupant=occupant
                                reassign_enabled=reassign_enabled
                                on_drop=on_drop
                                on_click=on_click
                                on_drag_start=on_drag_start
                                on_drag_end=on_drag_end
                            />
                        }
                    }
                />
            </div>
        </Show>
    }
}

#[component]
fn SpaceCard(
    space: ParkingSpace,
    occupant: Signal<Option<String>>,
    reassign_enabled: Signal<bool>,
    on_drop: Callback<DropEvent>,
    on_click: Callback<i64>,
    on_drag_start: Callback<DragPayload>,
    on_drag_end: Callback<()>,
) -> impl IntoView {
    let id = space.id;
    let occupied = space.state == SpaceState::Occupied;
    let draggable = move || occupied && reassign_enabled.get();
    let class = format!("space-card {}", space.state.css_modifier());
    let hover = RwSignal::new(false);

    view! {
        <div
            class=class
            class:space-card--hover=move || hover.get()
            class:space-card--droppable=space.state.accepts_arrivals()
            draggable=move || if draggable() { "true" } else { "false" }
            title=space.description.clone().unwrap_or_default()
            on:click=move |_| on_click.run(id)
            on:dragstart=move |ev: leptos::ev::DragEvent| {
                if !draggable() {
                    ev.prevent_default();
                    return;
                }
                let payload = DragPayload::SpaceReassignment { origin_space_id: id };
                write_transfer(&ev, &payload);
                on_drag_start.run(payload);
            }
            on:dragend=move |_| on_drag_end.run(())
            on:dragover=move |ev: leptos::ev::DragEvent| {
                ev.prevent_default();
                hover.set(true);
            }
            on:dragleave=move |_| hover.set(false)
            on:drop=move |ev: leptos::ev::DragEvent| {
                ev.prevent_default();
                hover.set(false);
                on_drop.run(DropEvent { target_space_id: id, transfer: read_transfer(&ev) });
            }
        >
            <span class="space-card__number">{space.number.clone()}</span>
            <span class="space-card__kind">{space.kind.label()}</span>
            <span class="space-card__state">{space.state.label()}</span>
            <span class="space-card__rate">{format::hourly_rate(space.hourly_rate)}</span>
            <Show when=move || occupant.get().is_some()>
                <span class="space-card__occupant">{move || occupant.get().unwrap_or_default()}</span>
            </Show>
        </div>
    }
}
