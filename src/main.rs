//! Multi-Language Todo Frontend Entry Point

mod models;
mod tasks;
mod stats;
mod clock;
mod i18n;
mod theme;
mod document;
mod config;
mod context;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    wasm_tracing::set_as_global_default();
    tracing::info!("starting todo frontend");
    mount_to_body(App);
}
