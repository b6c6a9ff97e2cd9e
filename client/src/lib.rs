//! # client
//!
//! Leptos frontend for the portfolio site: a single server-rendered page that
//! hydrates in the browser.
//!
//! This crate contains the page, its section components, the contact form
//! state machine, static content, and the REST helper that posts contact
//! submissions back to the server.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
