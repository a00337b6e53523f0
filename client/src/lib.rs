//! # wallet-client
//!
//! Leptos + WASM front end for the digital wallet. Server-rendered by the
//! `wallet-web` host and hydrated in the browser.
//!
//! The crate holds the route gate, the auth and wallet stores, the HTTP
//! client for the wallet backend, and the pages and components built on them.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: attach the reactive app to server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
