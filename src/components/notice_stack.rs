//! Toast stack rendered once at the app root.

use leptos::prelude::*;

use crate::state::notices::NoticeState;

#[component]
pub fn NoticeStack() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    view! {
        <div class="notice-stack" role="status" aria-live="polite">
            <For
                each=move || notices.with(|state| state.items.clone())
                key=|notice| notice.id.clone()
                children=move |notice| {
                    let id = notice.id.clone();
                    view! {
                        <div class=format!("notice {}", notice.kind.css_modifier())>
                            <span class="notice__text">{notice.text}</span>
                            <button
                                class="notice__close"
                                aria-label="Dismiss"
                                on:click=move |_| notices.update(|state| state.dismiss(&id))
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
