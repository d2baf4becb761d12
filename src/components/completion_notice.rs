//! Completion Notice
//!
//! Transient message shown after a task is marked complete.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::context::use_ui;

/// Visibility state plus the pending hide timeout
#[derive(Clone, Copy)]
pub struct CompletionNotice {
    visible: RwSignal<bool>,
    pending: StoredValue<Option<Timeout>, LocalStorage>,
    duration_ms: u32,
}

impl CompletionNotice {
    /// Create the notice for the current owner; its timeout is cancelled on cleanup
    pub fn new(duration_ms: u32) -> Self {
        Self::with_visibility(RwSignal::new(false), duration_ms)
    }

    fn with_visibility(visible: RwSignal<bool>, duration_ms: u32) -> Self {
        let pending = StoredValue::new_local(None::<Timeout>);
        on_cleanup(move || {
            pending.try_update_value(|slot| slot.take());
        });
        Self {
            visible,
            pending,
            duration_ms,
        }
    }

    /// Show the notice, restarting the hide countdown
    pub fn show(&self) {
        let visible = self.visible;
        visible.set(true);
        let timeout = Timeout::new(self.duration_ms, move || {
            visible.try_set(false);
        });
        // Replacing the old timeout drops and cancels it
        self.pending.update_value(|slot| *slot = Some(timeout));
    }

    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }
}

#[component]
pub fn CompletionNoticeView(notice: CompletionNotice) -> impl IntoView {
    let ui = use_ui();

    view! {
        <Show when=move || notice.is_visible()>
            <div class="toast" role="status">{move || ui.labels.get().task_complete}</div>
        </Show>
    }
}
