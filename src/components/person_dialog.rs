//! View or edit a client or guard record.

use leptos::prelude::*;

use crate::net::AppGateway;
use crate::net::people::{self, PersonKind};
use crate::net::types::{ClientUpdate, PersonRecord, PersonUpdate};
use crate::state::people::PersonForm;
use crate::util::notify::Notifier;

/// Text fields in display order: label, getter, setter.
type Field = (&'static str, fn(&PersonForm) -> String, fn(&mut PersonForm, String));

const FIELDS: [Field; 6] = [
    ("Name", |f| f.full_name.clone(), |f, v| f.full_name = v),
    ("Last names", |f| f.last_names.clone(), |f, v| f.last_names = v),
    ("DNI", |f| f.dni.clone(), |f, v| f.dni = v),
    ("Email", |f| f.email.clone(), |f, v| f.email = v),
    ("Address", |f| f.address.clone(), |f, v| f.address = v),
    ("Phone", |f| f.phone.clone(), |f, v| f.phone = v),
];

enum Save {
    Client(ClientUpdate),
    Guard(PersonUpdate),
}

#[component]
pub fn PersonDialog(
    record: PersonRecord,
    kind: PersonKind,
    editable: bool,
    on_close: Callback<()>,
    /// Receives the saved form so the page can patch its list.
    on_saved: Callback<PersonForm>,
) -> impl IntoView {
    let gateway = expect_context::<AppGateway>();
    let notifier = expect_context::<Notifier>();
    let form = RwSignal::new(PersonForm::from_record(&record));
    let error = RwSignal::new(None::<&'static str>);
    let busy = RwSignal::new(false);
    let title = match kind {
        PersonKind::Client => "Client",
        PersonKind::Guard => "Guard",
    };

    let save = Callback::new(move |()| {
        if busy.get_untracked() {
            return;
        }
        let snapshot = form.get_untracked();
        let body = match kind {
            PersonKind::Client => snapshot.client_update().map(Save::Client),
            PersonKind::Guard => snapshot.validate().map(Save::Guard),
        };
        let body = match body {
            Ok(body) => body,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };
        error.set(None);
        busy.set(true);
        let gateway = gateway.clone();
        leptos::task::spawn_local(async move {
            let result = match &body {
                Save::Client(update) => people::update_client(&gateway, snapshot.id, update).await,
                Save::Guard(person) => people::update_guard(&gateway, snapshot.id, person, snapshot.active).await,
            };
            match result {
                Ok(message) => {
                    notifier.success(message.unwrap_or_else(|| format!("{title} updated")));
                    on_saved.run(snapshot);
                }
                Err(err) => notifier.failure(&err),
            }
            busy.try_set(false);
        });
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{title}</h2>
                <p class="dialog__subtitle">{record.email.clone().unwrap_or_default()}</p>
                {FIELDS
                    .into_iter()
                    .map(|(label, get, set)| view! {
                        <label class="dialog__label">
                            {label}
                            <input
                                class="dialog__input"
                                type="text"
                                disabled=!editable
                                prop:value=move || form.with(get)
                                on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
                            />
                        </label>
                    })
                    .collect::<Vec<_>>()}
                <label class="dialog__label">
                    "Status"
                    <select
                        class="dialog__input"
                        disabled=!editable
                        on:change=move |ev| form.update(|f| f.active = event_target_value(&ev) == "1")
                    >
                        <option value="1" selected=move || form.with(|f| f.active)>"Active"</option>
                        <option value="0" selected=move || form.with(|f| !f.active)>"Inactive"</option>
                    </select>
                </label>
                <Show when=move || error.get().is_some()>
                    <p class="dialog__danger">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        {if editable { "Cancel" } else { "Close" }}
                    </button>
                    <Show when=move || editable>
                        <button class="btn btn--primary" disabled=move || busy.get() on:click=move |_| save.run(())>
                            "Save"
                        </button>
                    </Show>
                </div>
            </div>
        </div>
    }
}
