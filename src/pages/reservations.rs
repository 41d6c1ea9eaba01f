//! Admin reservation review: filter by state, approve or reject pending ones.

#[cfg(test)]
#[path = "reservations_test.rs"]
mod reservations_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::nav_bar::NavBar;
use crate::net::AppGateway;
use crate::net::reservations::{self, ReservationDecision};
use crate::net::types::{Reservation, ReservationState};
use crate::state::access::{self, Action};
use crate::state::auth::AuthState;
use crate::util::auth::install_route_guard;
use crate::util::format;
use crate::util::notify::Notifier;

/// Filter select value: empty for all, otherwise the wire state.
fn parse_filter(raw: &str) -> Option<ReservationState> {
    ReservationState::ALL.into_iter().find(|state| state.as_wire() == raw)
}

/// Only pending reservations can still be decided.
fn is_decidable(reservation: &Reservation) -> bool {
    reservation.state == ReservationState::Pending
}

#[component]
pub fn ReservationsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let gateway = expect_context::<AppGateway>();
    let notifier = expect_context::<Notifier>();
    install_route_guard(auth, access::allowed_roles(Action::ManageReservations), use_navigate());

    let filter = RwSignal::new(Some(ReservationState::Pending));
    let list = RwSignal::new(Vec::<Reservation>::new());
    let loaded = RwSignal::new(false);

    let reload = Callback::new({
        let gateway = gateway.clone();
        move |()| {
            let gateway = gateway.clone();
            let current = filter.get_untracked();
            leptos::task::spawn_local(async move {
                match reservations::list_reservations(&gateway, current).await {
                    Ok(items) => {
                        list.try_set(items);
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
    Effect::new(move || {
        filter.track();
        reload.run(());
    });

    let decide = Callback::new(move |(reservation_id, decision): (i64, ReservationDecision)| {
        let gateway = gateway.clone();
        leptos::task::spawn_local(async move {
            match reservations::decide_reservation(&gateway, reservation_id, decision).await {
                Ok(message) => {
                    notifier.success(message.unwrap_or_else(|| decision.success_fallback().to_owned()));
                    reload.run(());
                }
                Err(err) => notifier.failure(&err),
            }
        });
    });

    view! {
        <Show
            when=move || auth.with(|state| state.user.is_some())
            fallback=|| view! { <p class="page-placeholder">"Redirecting to login..."</p> }
        >
            <div class="reservations-page">
                <NavBar title="Reservations"/>
                <label class="reservations-page__filter">
                    "Show "
                    <select on:change=move |ev| filter.set(parse_filter(&event_target_value(&ev)))>
                        <option value="" selected=move || filter.get().is_none()>"All"</option>
                        {ReservationState::ALL
                            .into_iter()
                            .map(|state| view! {
                                <option value=state.as_wire() selected=move || filter.get() == Some(state)>
                                    {state.label()}
                                </option>
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <Show
                    when=move || !list.with(Vec::is_empty)
                    fallback=move || view! {
                        <p class="reservations-page__empty">
                            {move || if loaded.get() { "No reservations" } else { "Loading reservations..." }}
                        </p>
                    }
                >
                    <table class="reservations-table">
                        <thead>
                            <tr>
                                <th>"Client"</th>
                                <th>"Vehicle"</th>
                                <th>"Space"</th>
                                <th>"From"</th>
                                <th>"Until"</th>
                                <th>"State"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || list.get().into_iter().map(|reservation| view! {
                                <ReservationRow reservation=reservation on_decide=decide/>
                            }).collect::<Vec<_>>()}
                        </tbody>
                    </table>
                </Show>
            </div>
        </Show>
    }
}

#[component]
fn ReservationRow(reservation: Reservation, on_decide: Callback<(i64, ReservationDecision)>) -> impl IntoView {
    let id = reservation.id;
    let decidable = is_decidable(&reservation);

    view! {
        <tr class="reservations-table__row">
            <td>{format::reservation_client(&reservation)}</td>
            <td>{reservation.vehicle_plate.clone().unwrap_or_else(|| "-".to_owned())}</td>
            <td>{reservation.space_number.clone().unwrap_or_else(|| "-".to_owned())}</td>
            <td>{format::timestamp(reservation.starts_at.as_deref())}</td>
            <td>{format::timestamp(reservation.ends_at.as_deref())}</td>
            <td>{reservation.state.label()}</td>
            <td class="reservations-table__controls">
                <Show when=move || decidable>
                    <button class="btn btn--primary" on:click=move |_| on_decide.run((id, ReservationDecision::Approve))>
                        "Approve"
                    </button>
                    <button class="btn btn--danger" on:click=move |_| on_decide.run((id, ReservationDecision::Reject))>
                        "Reject"
                    </button>
                </Show>
            </td>
        </tr>
    }
}
