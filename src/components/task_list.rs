//! Task List Component
//!
//! Header with count badge, then either the rows or the empty-state message.

use leptos::prelude::*;

use crate::components::TaskRow;
use crate::context::use_ui;
use crate::models::TaskId;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TaskList(
    #[prop(into)] on_toggle: Callback<TaskId>,
    #[prop(into)] on_delete: Callback<TaskId>,
) -> impl IntoView {
    let ui = use_ui();
    let store = use_app_store();

    let count = move || store.tasks().with(|list| list.len());
    let has_tasks = move || !store.tasks().with(|list| list.is_empty());

    view! {
        <section class="card task-list">
            <h2 class="section-title">
                {move || ui.labels.get().all_tasks}
                <Show when=has_tasks>
                    <span class="badge">{count}</span>
                </Show>
            </h2>

            <Show
                when=has_tasks
                fallback=move || view! {
                    <div class="empty-state">
                        <div class="empty-icon">"🎯"</div>
                        <p>{move || ui.labels.get().no_tasks}</p>
                    </div>
                }
            >
                <div class="task-rows">
                    <For
                        each=move || store.tasks().with(|list| list.tasks().to_vec())
                        key=|task| (task.id, task.completed)
                        children=move |task| view! {
                            <TaskRow task=task on_toggle=on_toggle on_delete=on_delete />
                        }
                    />
                </div>
            </Show>
        </section>
    }
}
