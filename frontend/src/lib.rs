//! Browser entry point for Routed Anecdotes.

use app::App;
use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;

/// Log level for the browser console.
fn console_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // `tracing` events fall through to `log` when no subscriber is installed.
    let _ = console_log::init_with_level(console_level());

    log::info!("mounting routed anecdotes");
    mount_to_body(|| view! { <App /> });
}
