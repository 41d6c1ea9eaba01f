//! Per-state space totals shown above the grid.

use leptos::prelude::*;

use crate::state::occupancy::SpaceCounts;

#[component]
pub fn OccupancySummary(#[prop(into)] counts: Signal<SpaceCounts>) -> impl IntoView {
    let cell = move |label: &'static str, value: fn(&SpaceCounts) -> usize| {
        view! {
            <div class="summary-card">
                <span class="summary-card__value">{move || value(&counts.get())}</span>
                <span class="summary-card__label">{label}</span>
            </div>
        }
    };

    view! {
        <section class="occupancy-summary">
            {cell("Total", |c| c.total)}
            {cell("Available", |c| c.available)}
            {cell("Occupied", |c| c.occupied)}
            {cell("Reserved", |c| c.reserved)}
            {cell("Maintenance", |c| c.maintenance)}
            <div class="summary-card summary-card--rate">
                <span class="summary-card__value">{move || format!("{}%", counts.get().occupancy_percent())}</span>
                <span class="summary-card__label">"Occupancy"</span>
            </div>
        </section>
    }
}
