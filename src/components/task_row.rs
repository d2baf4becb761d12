//! Task Row Component
//!
//! A single task in the list.

use leptos::prelude::*;

use crate::context::use_ui;
use crate::models::{Task, TaskId};

/// A single task row with toggle and delete buttons
#[component]
pub fn TaskRow(
    task: Task,
    #[prop(into)] on_toggle: Callback<TaskId>,
    #[prop(into)] on_delete: Callback<TaskId>,
) -> impl IntoView {
    let ui = use_ui();

    let id = task.id;
    let completed = task.completed;

    view! {
        <div class=move || if completed { "card task-row completed" } else { "card task-row" }>
            <button
                class=move || if completed { "check-btn active" } else { "check-btn" }
                title=move || {
                    let labels = ui.labels.get();
                    if completed { labels.undone } else { labels.done }
                }
                on:click=move |_| on_toggle.run(id)
            >
                "✓"
            </button>

            <span class="task-text">{task.text}</span>

            {completed.then(|| view! {
                <span class="badge success">"✓ " {move || ui.labels.get().completed}</span>
            })}

            <button
                class="delete-btn"
                title=move || ui.labels.get().delete
                on:click=move |_| on_delete.run(id)
            >
                "×"
            </button>
        </div>
    }
}
