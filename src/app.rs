//! Todo Frontend App
//!
//! Root component: task store, presentation context, session clock, layout.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::clock::use_session_clock;
use crate::components::{
    CompletionNotice, CompletionNoticeView, Header, NewTaskForm, ProgressBar, StatsPanel, TaskList,
};
use crate::config::AppConfig;
use crate::context::UiContext;
use crate::models::TaskId;
use crate::stats::TaskStats;
use crate::store::{store_delete_task, store_toggle_task, AppState, AppStateStoreFields};
use crate::document;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::load();
    tracing::info!(?config, "mounting todo view");

    // State
    let store = Store::new(AppState::new());
    let ui = UiContext::new(config.default_theme, config.default_language);

    // Provide context to all children
    provide_context(store);
    provide_context(ui);

    let clock = use_session_clock();
    let notice = CompletionNotice::new(config.notice_duration_ms);

    let stats = Memo::new(move |_| store.tasks().with(|list| TaskStats::from_tasks(list.tasks())));

    // Keep the document root in sync with the selected theme and language
    Effect::new(move |_| {
        if let Err(err) = document::apply_theme(ui.theme.get()) {
            tracing::warn!(error = %err, "failed to apply theme");
        }
    });
    Effect::new(move |_| {
        if let Err(err) = document::apply_language(ui.language.get()) {
            tracing::warn!(error = %err, "failed to apply language");
        }
    });

    let on_toggle = Callback::new(move |id: TaskId| {
        if store_toggle_task(&store, id) == Some(true) {
            notice.show();
        }
    });
    let on_delete = Callback::new(move |id: TaskId| store_delete_task(&store, id));

    view! {
        <div class="todo-app">
            <Header />
            <StatsPanel clock=clock stats=stats />
            <NewTaskForm />
            <ProgressBar stats=stats />
            <TaskList on_toggle=on_toggle on_delete=on_delete />
            <CompletionNoticeView notice=notice />
        </div>
    }
}
