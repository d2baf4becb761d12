//! Stats Panel Component
//!
//! Session time plus completed and pending counts.

use leptos::prelude::*;

use crate::clock::SessionClock;
use crate::context::use_ui;
use crate::stats::TaskStats;

#[component]
fn StatCard(
    #[prop(into)] variant: String,
    #[prop(into)] icon: String,
    #[prop(into)] label: Signal<&'static str>,
    #[prop(into)] value: Signal<String>,
) -> impl IntoView {
    view! {
        <div class=format!("card stat-card {}", variant)>
            <div class="stat-icon">{icon}</div>
            <div>
                <p class="stat-label">{move || label.get()}</p>
                <p class="stat-value">{move || value.get()}</p>
            </div>
        </div>
    }
}

/// Three stat cards: session time, completed, pending
#[component]
pub fn StatsPanel(
    clock: ReadSignal<SessionClock>,
    stats: Memo<TaskStats>,
) -> impl IntoView {
    let ui = use_ui();

    view! {
        <section class="stats-panel">
            <h2 class="section-title">{move || ui.labels.get().stats}</h2>
            <div class="stats-grid">
                <StatCard
                    variant="timer"
                    icon="⏱"
                    label=Signal::derive(move || ui.labels.get().timer)
                    value=Signal::derive(move || clock.get().display())
                />
                <StatCard
                    variant="completed"
                    icon="🏆"
                    label=Signal::derive(move || ui.labels.get().completed)
                    value=Signal::derive(move || stats.get().completed.to_string())
                />
                <StatCard
                    variant="pending"
                    icon="🎯"
                    label=Signal::derive(move || ui.labels.get().incomplete)
                    value=Signal::derive(move || stats.get().incomplete().to_string())
                />
            </div>
        </section>
    }
}
