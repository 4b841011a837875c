//! # client
//!
//! Leptos + WASM frontend for the goals tracker: a login screen and a
//! summary dashboard.
//!
//! The crate compiles twice. With `ssr` the host renders pages on the server;
//! with `hydrate` the same components boot in the browser and perform the
//! network calls, cookie writes, and redirects.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Hydration entry point for the WASM bundle.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
