//! Header Component
//!
//! Title bar with theme toggle and language selector.

use leptos::prelude::*;

use crate::context::use_ui;
use crate::i18n::Language;

/// Page header with presentation controls
#[component]
pub fn Header() -> impl IntoView {
    let ui = use_ui();

    let on_language_change = move |ev: web_sys::Event| {
        let code = event_target_value(&ev);
        match Language::from_code(&code) {
            Some(lang) => ui.set_language(lang),
            None => tracing::warn!(code = %code, "unknown language code"),
        }
    };

    view! {
        <header class="card hero">
            <h1 class="hero-title">{move || ui.labels.get().title}</h1>
            <div class="hero-controls">
                <button
                    class="icon-btn"
                    title=move || ui.labels.get().theme
                    on:click=move |_| ui.toggle_theme()
                >
                    {move || ui.theme.get().toggle_icon()}
                </button>
                <select
                    class="language-select"
                    title=move || ui.labels.get().language
                    prop:value=move || ui.language.get().code()
                    on:change=on_language_change
                >
                    {Language::ALL.iter().map(|lang| {
                        let lang = *lang;
                        view! {
                            <option
                                value=lang.code()
                                selected=move || ui.language.get() == lang
                            >
                                {lang.short_name()}
                            </option>
                        }
                    }).collect_view()}
                </select>
            </div>
        </header>
    }
}
