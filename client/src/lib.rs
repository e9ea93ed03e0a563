//! # client
//!
//! Leptos + WASM front end for a single-page portfolio: an "about me"
//! section, a project gallery with a spotlight panel and directional
//! scroller, and a validated contact form with a confirmation modal.
//!
//! Rendered on the server (`ssr`) and hydrated in the browser (`hydrate`).
//! Section logic lives in `state` as plain structs so it is testable without
//! a DOM; `components` and `pages` only wire it to the view.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs console logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already initialized");
    }
    leptos::mount::hydrate_body(app::App);
}
