//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use chrono::Utc;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::TaskId;
use crate::tasks::TaskList;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Tasks for this page view, newest first
    pub tasks: TaskList,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            tasks: TaskList::new(),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Add a task stamped with the current time. Returns its id when accepted.
pub fn store_add_task(store: &AppStore, text: &str) -> Option<TaskId> {
    let id = store.tasks().write().add(text, Utc::now());
    match id {
        Some(id) => tracing::debug!(id, "task added"),
        None => tracing::debug!("blank task rejected"),
    }
    id
}

/// Toggle a task by ID. Returns the new completion state.
pub fn store_toggle_task(store: &AppStore, task_id: TaskId) -> Option<bool> {
    let completed = store.tasks().write().toggle(task_id);
    tracing::debug!(id = task_id, ?completed, "task toggled");
    completed
}

/// Remove a task from the store by ID
pub fn store_delete_task(store: &AppStore, task_id: TaskId) {
    let removed = store.tasks().write().delete(task_id);
    tracing::debug!(id = task_id, removed, "task deleted");
}
