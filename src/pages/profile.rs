//! The signed-in user's own profile: read-only identity plus editable contact data.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::nav_bar::NavBar;
use crate::net::AppGateway;
use crate::net::people;
use crate::net::types::Profile;
use crate::state::access::{self, Action};
use crate::state::auth::AuthState;
use crate::state::people::{ProfileForm, phone_hint};
use crate::util::auth::install_route_guard;
use crate::util::notify::Notifier;

/// Fields the user cannot change here.
fn identity(profile: &Profile) -> [(&'static str, String); 3] {
    let or_dash = |value: &Option<String>| value.clone().filter(|v| !v.is_empty()).unwrap_or_else(|| "-".to_owned());
    [
        ("Username", or_dash(&profile.username)),
        ("Email", or_dash(&profile.email)),
        ("DNI", or_dash(&profile.dni)),
    ]
}

type Field = (&'static str, fn(&ProfileForm) -> String, fn(&mut ProfileForm, String));

const FIELDS: [Field; 3] = [
    ("Name", |f| f.full_name.clone(), |f, v| f.full_name = v),
    ("Last names", |f| f.last_names.clone(), |f, v| f.last_names = v),
    ("Address", |f| f.address.clone(), |f, v| f.address = v),
];

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let gateway = expect_context::<AppGateway>();
    let notifier = expect_context::<Notifier>();
    install_route_guard(auth, access::allowed_roles(Action::EditProfile), use_navigate());

    let username = auth.with_untracked(|state| state.user.as_ref().map(|user| user.username.clone()).unwrap_or_default());
    let profile = RwSignal::new(None::<Profile>);
    let form = RwSignal::new(ProfileForm::default());
    let editing = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<&'static str>);

    if !username.is_empty() {
        let gateway = gateway.clone();
        let username = username.clone();
        leptos::task::spawn_local(async move {
            match people::load_profile(&gateway, &username).await {
                Ok(loaded) => {
                    form.try_set(ProfileForm::from_profile(&loaded));
                    profile.try_set(Some(loaded));
                }
                Err(err) => notifier.failure(&err),
            }
        });
    }

    let cancel = move |_| {
        if let Some(loaded) = profile.get_untracked() {
            form.set(ProfileForm::from_profile(&loaded));
        }
        error.set(None);
        editing.set(false);
    };

    let save = move |_: leptos::ev::MouseEvent| {
        if busy.get_untracked() {
            return;
        }
        let update = match form.with_untracked(ProfileForm::validate) {
            Ok(update) => update,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };
        error.set(None);
        busy.set(true);
        let gateway = gateway.clone();
        let username = username.clone();
        leptos::task::spawn_local(async move {
            match people::save_profile(&gateway, &username, &update).await {
                Ok(saved) => {
                    form.try_set(ProfileForm::from_profile(&saved));
                    profile.try_set(Some(saved));
                    editing.try_set(false);
                    notifier.success("Profile updated");
                }
                Err(err) => notifier.failure(&err),
            }
            busy.try_set(false);
        });
    };
    let save = StoredValue::new_local(save);

    view! {
        <Show
            when=move || auth.with(|state| state.user.is_some())
            fallback=|| view! { <p class="page-placeholder">"Redirecting to login..."</p> }
        >
            <div class="profile-page">
                <NavBar title="My profile"/>
                <Show
                    when=move || profile.with(Option::is_some)
                    fallback=|| view! { <p class="profile-page__hint">"Loading profile..."</p> }
                >
                    <section class="profile-page__card">
                        <dl class="profile-page__identity">
                            {move || profile
                                .with(|p| p.as_ref().map(identity))
                                .into_iter()
                                .flatten()
                                .map(|(label, value)| view! { <dt>{label}</dt><dd>{value}</dd> })
                                .collect::<Vec<_>>()}
                        </dl>
                        {FIELDS
                            .into_iter()
                            .map(|(label, get, set)| view! {
                                <label class="dialog__label">
                                    {label}
                                    <input
                                        class="dialog__input"
                                        type="text"
                                        disabled=move || !editing.get()
                                        prop:value=move || form.with(get)
                                        on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
                                    />
                                </label>
                            })
                            .collect::<Vec<_>>()}
                        <label class="dialog__label">
                            "Phone"
                            <input
                                class="dialog__input"
                                type="tel"
                                inputmode="numeric"
                                disabled=move || !editing.get()
                                prop:value=move || form.with(|f| f.phone.clone())
                                on:input=move |ev| form.update(|f| f.phone = event_target_value(&ev))
                            />
                        </label>
                        <Show when=move || editing.get() && form.with(|f| phone_hint(&f.phone).is_some())>
                            <p class="dialog__hint">{move || form.with(|f| phone_hint(&f.phone).unwrap_or_default())}</p>
                        </Show>
                        <Show when=move || error.get().is_some()>
                            <p class="dialog__danger">{move || error.get().unwrap_or_default()}</p>
                        </Show>
                        <div class="dialog__actions">
                            <Show
                                when=move || editing.get()
                                fallback=move || view! {
                                    <button class="btn btn--primary" on:click=move |_| editing.set(true)>"Edit"</button>
                                }
                            >
                                <button class="btn" on:click=cancel>"Cancel"</button>
                                <button class="btn btn--primary" disabled=move || busy.get() on:click=move |ev| save.with_value(|save| save(ev))>
                                    "Save"
                                </button>
                            </Show>
                        </div>
                    </section>
                </Show>
            </div>
        </Show>
    }
}
