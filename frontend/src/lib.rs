use leptos::*;
use web_sys::console;

mod api;
mod components;
pub mod config;
mod pages;
pub mod router;
mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    console::log_1(&"Starting SportRadar frontend (wasm)".into());

    // Kick off runtime config load from ./config.json (non-blocking).
    // If window.__SPORTRADAR_ENV is present (env.js), it takes precedence.
    spawn_local(async move {
        config::init().await;
    });

    router::mount_app();
}
