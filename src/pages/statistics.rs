//! Dashboard statistics: the admin breakdown or the guard's shift summary.

#[cfg(test)]
#[path = "statistics_test.rs"]
mod statistics_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::nav_bar::NavBar;
use crate::net::AppGateway;
use crate::net::stats::{self, Statistics};
use crate::state::access::{self, Action};
use crate::state::auth::AuthState;
use crate::util::auth::install_route_guard;

/// A titled group of labelled figures.
type Section = (&'static str, Vec<(&'static str, String)>);

fn sections(stats: &Statistics) -> Vec<Section> {
    match stats {
        Statistics::Admin(admin) => {
            let spaces = &admin.spaces;
            vec![
                (
                    "Spaces",
                    vec![
                        ("Total", spaces.total.to_string()),
                        ("Available", spaces.available.to_string()),
                        ("Occupied", spaces.occupied.to_string()),
                        ("Reserved", spaces.reserved.to_string()),
                        ("Maintenance", spaces.maintenance.to_string()),
                        ("Occupancy", format!("{:.1}%", spaces.occupancy_percent)),
                    ],
                ),
                (
                    "Registrations",
                    vec![
                        ("Active", admin.registrations.active.to_string()),
                        ("Total", admin.registrations.total.to_string()),
                    ],
                ),
                (
                    "Reservations",
                    vec![
                        ("Pending", admin.reservations.pending.to_string()),
                        ("Confirmed", admin.reservations.confirmed.to_string()),
                        ("Used", admin.reservations.used.to_string()),
                        ("Cancelled", admin.reservations.cancelled.to_string()),
                    ],
                ),
            ]
        }
        Statistics::Guard(guard) => vec![(
            "Today",
            vec![
                ("Available spaces", guard.available_spaces.to_string()),
                ("Occupied spaces", guard.occupied_spaces.to_string()),
                ("Active registrations", guard.active_registrations.to_string()),
                ("Pending reservations", guard.pending_reservations.to_string()),
            ],
        )],
    }
}

#[derive(Clone, Debug, PartialEq)]
enum Load {
    Pending,
    Ready(Statistics),
    Failed,
}

#[component]
pub fn StatisticsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let gateway = expect_context::<AppGateway>();
    install_route_guard(auth, access::allowed_roles(Action::ViewStatistics), use_navigate());

    let state = RwSignal::new(Load::Pending);
    let roles = auth.with_untracked(AuthState::roles);
    leptos::task::spawn_local(async move {
        let loaded = match stats::load_statistics(&gateway, &roles).await {
            Ok(statistics) => Load::Ready(statistics),
            Err(err) => {
                log::warn!("statistics load failed: {err}");
                Load::Failed
            }
        };
        state.try_set(loaded);
    });

    view! {
        <Show
            when=move || auth.with(|state| state.user.is_some())
            fallback=|| view! { <p class="page-placeholder">"Redirecting to login..."</p> }
        >
            <div class="statistics-page">
                <NavBar title="Statistics"/>
                {move || match state.get() {
                    Load::Pending => view! { <p class="statistics-page__hint">"Loading statistics..."</p> }.into_any(),
                    Load::Failed => view! { <p class="statistics-page__hint">"Statistics could not be loaded"</p> }.into_any(),
                    Load::Ready(statistics) => sections(&statistics)
                        .into_iter()
                        .map(|(title, figures)| view! {
                            <section class="statistics-page__section">
                                <h2>{title}</h2>
                                <div class="occupancy-summary">
                                    {figures
                                        .into_iter()
                                        .map(|(label, value)| view! {
                                            <div class="summary-card">
                                                <span class="summary-card__value">{value}</span>
                                                <span class="summary-card__label">{label}</span>
                                            </div>
                                        })
                                        .collect::<Vec<_>>()}
                                </div>
                            </section>
                        })
                        .collect::<Vec<_>>()
                        .into_any(),
                }}
            </div>
        </Show>
    }
}
