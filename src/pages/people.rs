//! Staff management of clients and guards: list, search by name, view, edit.

#[cfg(test)]
#[path = "people_test.rs"]
mod people_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::nav_bar::NavBar;
use crate::components::person_dialog::PersonDialog;
use crate::net::AppGateway;
use crate::net::people::{self, PersonKind};
use crate::net::types::PersonRecord;
use crate::state::access::{self, Action};
use crate::state::auth::AuthState;
use crate::state::people::PersonForm;
use crate::util::auth::install_route_guard;
use crate::util::format;
use crate::util::notify::Notifier;

fn required_action(kind: PersonKind) -> Action {
    match kind {
        PersonKind::Client => Action::ManageClients,
        PersonKind::Guard => Action::ManageGuards,
    }
}

fn page_title(kind: PersonKind) -> &'static str {
    match kind {
        PersonKind::Client => "Clients",
        PersonKind::Guard => "Guards",
    }
}

/// Patch the listed row with a saved form instead of refetching the list.
fn apply_saved(list: &mut [PersonRecord], saved: &PersonForm) {
    if let Some(record) = list.iter_mut().find(|record| record.id == saved.id) {
        saved.merge_into(record);
    }
}

#[component]
pub fn ClientsPage() -> impl IntoView {
    view! { <PeoplePage kind=PersonKind::Client/> }
}

#[component]
pub fn GuardsPage() -> impl IntoView {
    view! { <PeoplePage kind=PersonKind::Guard/> }
}

#[component]
fn PeoplePage(kind: PersonKind) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let gateway = expect_context::<AppGateway>();
    let notifier = expect_context::<Notifier>();
    install_route_guard(auth, access::allowed_roles(required_action(kind)), use_navigate());

    let query = RwSignal::new(String::new());
    let list = RwSignal::new(Vec::<PersonRecord>::new());
    let loaded = RwSignal::new(false);
    let open = RwSignal::new(None::<(PersonRecord, bool)>);

    let search = Callback::new(move |name: String| {
        let gateway = gateway.clone();
        leptos::task::spawn_local(async move {
            match people::list_people(&gateway, kind, &name).await {
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
    });
    search.run(String::new());

    let clear = move |_| {
        query.set(String::new());
        search.run(String::new());
    };
    let on_open = Callback::new(move |choice: (PersonRecord, bool)| open.set(Some(choice)));
    let on_close = Callback::new(move |()| open.set(None));
    let on_saved = Callback::new(move |saved: PersonForm| {
        list.update(|items| apply_saved(items, &saved));
        open.set(None);
    });

    view! {
        <Show
            when=move || auth.with(|state| state.user.is_some())
            fallback=|| view! { <p class="page-placeholder">"Redirecting to login..."</p> }
        >
            <div class="people-page">
                <NavBar title=page_title(kind)/>
                <form
                    class="people-page__search"
                    on:submit=move |ev: leptos::ev::SubmitEvent| {
                        ev.prevent_default();
                        search.run(query.get_untracked());
                    }
                >
                    <input
                        type="search"
                        placeholder="Search by name"
                        prop:value=move || query.get()
                        on:input=move |ev| query.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit">"Search"</button>
                    <button class="btn" type="button" on:click=clear>"Clear"</button>
                </form>
                <Show
                    when=move || !list.with(Vec::is_empty)
                    fallback=move || view! {
                        <p class="people-page__empty">
                            {move || if loaded.get() { format!("No {}", kind.plural_label()) } else { format!("Loading {}...", kind.plural_label()) }}
                        </p>
                    }
                >
                    <table class="people-table">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"DNI"</th>
                                <th>"Email"</th>
                                <th>"Phone"</th>
                                <th>"Status"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || list.get().into_iter().map(|record| view! {
                                <PersonRow record=record on_open=on_open/>
                            }).collect::<Vec<_>>()}
                        </tbody>
                    </table>
                </Show>
                {move || open.get().map(|(record, editable)| view! {
                    <PersonDialog record=record kind=kind editable=editable on_close=on_close on_saved=on_saved/>
                })}
            </div>
        </Show>
    }
}

#[component]
fn PersonRow(record: PersonRecord, on_open: Callback<(PersonRecord, bool)>) -> impl IntoView {
    let name = format::full_name(&[Some(record.full_name.as_str()), record.last_names.as_deref()]);
    let status = if record.is_active() { "Active" } else { "Inactive" };
    let view_record = record.clone();
    let edit_record = record.clone();

    view! {
        <tr class="people-table__row" class:people-table__row--inactive=!record.is_active()>
            <td>{name}</td>
            <td>{record.dni.clone().unwrap_or_default()}</td>
            <td>{record.email.clone().unwrap_or_default()}</td>
            <td>{record.phone.clone().unwrap_or_default()}</td>
            <td>{status}</td>
            <td class="people-table__controls">
                <button class="btn" on:click=move |_| on_open.run((view_record.clone(), false))>"View"</button>
                <button class="btn btn--primary" on:click=move |_| on_open.run((edit_record.clone(), true))>"Edit"</button>
            </td>
        </tr>
    }
}
