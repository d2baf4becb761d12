//! Progress Bar Component

use leptos::prelude::*;

use crate::context::use_ui;
use crate::stats::TaskStats;

/// Completion percentage bar, hidden while the list is empty
#[component]
pub fn ProgressBar(stats: Memo<TaskStats>) -> impl IntoView {
    let ui = use_ui();
    let rate = move || stats.get().completion_rate();
    let has_tasks = move || stats.get().has_tasks();

    view! {
        <Show when=has_tasks>
            <div class="card progress-card">
                <div class="progress-header">
                    <span class="progress-label">{move || ui.labels.get().progress}</span>
                    <span class="progress-value">{move || format!("{}%", rate())}</span>
                </div>
                <div class="progress-track">
                    <div class="progress-fill" style:width=move || format!("{}%", rate())></div>
                </div>
            </div>
        </Show>
    }
}
