//! New Task Form Component
//!
//! Text input and add button; Enter submits the form.

use leptos::prelude::*;

use crate::context::use_ui;
use crate::store::{store_add_task, use_app_store};

/// Form for creating new tasks
#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ui = use_ui();
    let store = use_app_store();

    let (new_text, set_new_text) = signal(String::new());

    let create_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        // Blank input stays in the field untouched
        if store_add_task(&store, &new_text.get()).is_some() {
            set_new_text.set(String::new());
        }
    };

    view! {
        <form class="card new-task-form" on:submit=create_task>
            <input
                type="text"
                placeholder=move || ui.labels.get().placeholder
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
            <button type="submit" class="primary-btn">
                "+ " {move || ui.labels.get().add}
            </button>
        </form>
    }
}
