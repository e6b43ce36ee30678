//! # client
//!
//! Leptos + WASM moderation UI for the board admin backend.
//!
//! Pages fetch through `net::api`, shape data with the `model` crate's
//! transforms, and keep their session state (search text, pending deletes,
//! locally deleted comments) in page-scoped signals.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
