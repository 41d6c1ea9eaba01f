//! Client reservation form for an available space.

use leptos::prelude::*;

use crate::net::AppGateway;
use crate::net::types::Vehicle;
use crate::net::{people, reservations};
use crate::state::forms::{ReservationForm, parse_choice};
use crate::util::notify::Notifier;

#[component]
pub fn ReservationDialog(
    space_id: i64,
    #[prop(into)] space_number: String,
    on_cancel: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let gateway = expect_context::<AppGateway>();
    let notifier = expect_context::<Notifier>();
    let form = RwSignal::new(ReservationForm::for_space(space_id));
    let vehicles = RwSignal::new(Vec::<Vehicle>::new());
    let error = RwSignal::new(None::<&'static str>);
    let busy = RwSignal::new(false);

    let load_gateway = gateway.clone();
    leptos::task::spawn_local(async move {
        match people::my_vehicles(&load_gateway).await {
            Ok(list) => {
                if let [only] = list.as_slice() {
                    let only_id = only.id;
                    form.try_update(|f| f.vehicle_id = Some(only_id));
                }
                vehicles.try_set(list);
            }
            Err(err) => notifier.failure(&err),
        }
    });

    let submit = Callback::new(move |()| {
        if busy.get_untracked() {
            return;
        }
        let request = match form.with_untracked(ReservationForm::validate) {
            Ok(request) => request,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };
        error.set(None);
        busy.set(true);
        let gateway = gateway.clone();
        leptos::task::spawn_local(async move {
            match reservations::create_reservation(&gateway, &request).await {
                Ok(message) => {
                    notifier.success(message.unwrap_or_else(|| "Reservation requested".to_owned()));
                    on_saved.run(());
                }
                Err(err) => notifier.failure(&err),
            }
            busy.try_set(false);
        });
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{format!("Reserve space {space_number}")}</h2>
                <label class="dialog__label">
                    "Vehicle"
                    <select
                        class="dialog__input"
                        on:change=move |ev| {
                            let picked = parse_choice(&event_target_value(&ev));
                            form.update(|f| f.vehicle_id = picked);
                        }
                    >
                        <option value="" selected=move || form.with(|f| f.vehicle_id.is_none())>
                            "Choose a vehicle"
                        </option>
                        {move || {
                            vehicles
                                .get()
                                .into_iter()
                                .map(|vehicle| {
                                    let id = vehicle.id;
                                    view! {
                                        <option value=id.to_string() selected=move || form.with(|f| f.vehicle_id == Some(id))>
                                            {format!("{} {}", vehicle.plate, vehicle.description())}
                                        </option>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                </label>
                <label class="dialog__label">
                    "From"
                    <input
                        class="dialog__input"
                        type="datetime-local"
                        prop:value=move || form.with(|f| f.starts_at.clone())
                        on:input=move |ev| form.update(|f| f.starts_at = event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Until"
                    <input
                        class="dialog__input"
                        type="datetime-local"
                        prop:value=move || form.with(|f| f.ends_at.clone())
                        on:input=move |ev| form.update(|f| f.ends_at = event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Notes"
                    <textarea
                        class="dialog__input"
                        prop:value=move || form.with(|f| f.notes.clone())
                        on:input=move |ev| form.update(|f| f.notes = event_target_value(&ev))
                    ></textarea>
                </label>
                <Show when=move || error.get().is_some()>
                    <p class="dialog__danger">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" disabled=move || busy.get() on:click=move |_| submit.run(())>
                        "Reserve"
                    </button>
                </div>
            </div>
        </div>
    }
}
