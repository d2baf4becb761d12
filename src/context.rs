//! Presentation Context
//!
//! Theme and language signals provided via Leptos Context API.

use leptos::prelude::*;

use crate::i18n::{Labels, Language};
use crate::theme::Theme;

/// App-wide presentation signals provided via context
#[derive(Clone, Copy)]
pub struct UiContext {
    /// Current theme - read
    pub theme: ReadSignal<Theme>,
    /// Current theme - write
    set_theme: WriteSignal<Theme>,
    /// Current language - read
    pub language: ReadSignal<Language>,
    /// Current language - write
    set_language: WriteSignal<Language>,
    /// Label dictionary for the current language
    pub labels: Memo<&'static Labels>,
}

impl UiContext {
    pub fn new(theme: Theme, language: Language) -> Self {
        let (theme, set_theme) = signal(theme);
        let (language, set_language) = signal(language);
        let labels = Memo::new(move |_| language.get().labels());
        Self {
            theme,
            set_theme,
            language,
            set_language,
            labels,
        }
    }

    /// Flip between light and dark
    pub fn toggle_theme(&self) {
        self.set_theme.update(|t| *t = t.toggled());
        tracing::debug!(theme = ?self.theme.get_untracked(), "theme changed");
    }

    pub fn set_language(&self, language: Language) {
        self.set_language.set(language);
        tracing::debug!(language = language.code(), "language changed");
    }
}

/// Get the presentation context
pub fn use_ui() -> UiContext {
    expect_context::<UiContext>()
}
