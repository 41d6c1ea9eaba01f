//! Modal dialogs for creating and editing a parking space.

use leptos::prelude::*;

use crate::net::AppGateway;
use crate::net::spaces;
use crate::net::types::{ParkingSpace, SpaceKind, SpaceState};
use crate::state::forms::{SpaceEditForm, SpaceForm};
use crate::util::notify::Notifier;

#[component]
pub fn SpaceFormDialog(on_cancel: Callback<()>, on_saved: Callback<()>) -> impl IntoView {
    let gateway = expect_context::<AppGateway>();
    let notifier = expect_context::<Notifier>();
    let form = RwSignal::new(SpaceForm::default());
    let error = RwSignal::new(None::<&'static str>);
    let busy = RwSignal::new(false);

    let submit = Callback::new(move |()| {
        if busy.get_untracked() {
            return;
        }
        let space = match form.with_untracked(SpaceForm::validate) {
            Ok(space) => space,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };
        error.set(None);
        busy.set(true);
        let gateway = gateway.clone();
        leptos::task::spawn_local(async move {
            match spaces::create_space(&gateway, &space).await {
                Ok(message) => {
                    notifier.success(message.unwrap_or_else(|| format!("Space {} created", space.number)));
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
                <h2>"New Space"</h2>
                <label class="dialog__label">
                    "Number"
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="A1"
                        prop:value=move || form.with(|f| f.number.clone())
                        on:input=move |ev| form.update(|f| f.number = event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Type"
                    <select
                        class="dialog__input"
                        on:change=move |ev| form.update(|f| f.kind = SpaceKind::from_wire(&event_target_value(&ev)))
                    >
                        {SpaceKind::SELECTABLE
                            .into_iter()
                            .map(|kind| view! {
                                <option value=kind.as_wire() selected=move || form.with(|f| f.kind == kind)>
                                    {kind.label()}
                                </option>
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <label class="dialog__label">
                    "Initial state"
                    <select
                        class="dialog__input"
                        on:change=move |ev| form.update(|f| f.state = SpaceState::from_wire(&event_target_value(&ev)))
                    >
                        {[SpaceState::Available, SpaceState::Reserved, SpaceState::Maintenance]
                            .into_iter()
                            .map(|state| view! {
                                <option value=state.as_wire() selected=move || form.with(|f| f.state == state)>
                                    {state.label()}
                                </option>
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <label class="dialog__label">
                    "Hourly rate"
                    <input
                        class="dialog__input"
                        type="number"
                        min="0"
                        step="0.5"
                        prop:value=move || form.with(|f| f.hourly_rate.clone())
                        on:input=move |ev| form.update(|f| f.hourly_rate = event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Description"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || form.with(|f| f.description.clone())
                        on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                    />
                </label>
                <Show when=move || error.get().is_some()>
                    <p class="dialog__danger">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" disabled=move || busy.get() on:click=move |_| submit.run(())>
                        "Create"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// States an edit may leave a space in; occupancy follows entries and exits.
const EDITABLE_STATES: [SpaceState; 3] = [SpaceState::Available, SpaceState::Reserved, SpaceState::Maintenance];

/// Edit type, state, rate and description of an existing space. The number is fixed.
#[component]
pub fn SpaceEditDialog(space: ParkingSpace, on_cancel: Callback<()>, on_saved: Callback<()>) -> impl IntoView {
    let gateway = expect_context::<AppGateway>();
    let notifier = expect_context::<Notifier>();
    let form = RwSignal::new(SpaceEditForm::for_space(&space));
    let error = RwSignal::new(None::<&'static str>);
    let busy = RwSignal::new(false);

    let submit = Callback::new(move |()| {
        if busy.get_untracked() {
            return;
        }
        let (space_id, number) = form.with_untracked(|f| (f.space_id, f.number.clone()));
        let update = match form.with_untracked(SpaceEditForm::validate) {
            Ok(update) => update,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };
        error.set(None);
        busy.set(true);
        let gateway = gateway.clone();
        leptos::task::spawn_local(async move {
            match spaces::update_space(&gateway, space_id, &update).await {
                Ok(message) => {
                    notifier.success(message.unwrap_or_else(|| format!("Space {number} updated")));
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
                <h2>{format!("Edit space {}", space.number)}</h2>
                <label class="dialog__label">
                    "Type"
                    <select
                        class="dialog__input"
                        on:change=move |ev| form.update(|f| f.kind = SpaceKind::from_wire(&event_target_value(&ev)))
                    >
                        {SpaceKind::SELECTABLE
                            .into_iter()
                            .map(|kind| view! {
                                <option value=kind.as_wire() selected=move || form.with(|f| f.kind == kind)>
                                    {kind.label()}
                                </option>
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <label class="dialog__label">
                    "State"
                    <select
                        class="dialog__input"
                        on:change=move |ev| form.update(|f| f.state = SpaceState::from_wire(&event_target_value(&ev)))
                    >
                        {EDITABLE_STATES
                            .into_iter()
                            .map(|state| view! {
                                <option value=state.as_wire() selected=move || form.with(|f| f.state == state)>
                                    {state.label()}
                                </option>
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <label class="dialog__label">
                    "Hourly rate"
                    <input
                        class="dialog__input"
                        type="number"
                        min="0"
                        step="0.5"
                        prop:value=move || form.with(|f| f.hourly_rate.clone())
                        on:input=move |ev| form.update(|f| f.hourly_rate = event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Description"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || form.with(|f| f.description.clone())
                        on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                    />
                </label>
                <Show when=move || error.get().is_some()>
                    <p class="dialog__danger">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" disabled=move || busy.get() on:click=move |_| submit.run(())>
                        "Save"
                    </button>
                </div>
            </div>
        </div>
    }
}
