//! # activity-board
//!
//! Leptos + WASM frontend for the school activity sign-up service.
//! Replaces the hand-rolled DOM script in `static/app.js` with a
//! Rust-native UI layer.
//!
//! This crate contains the board page, components, application state,
//! and the REST client for the activities API. It is compiled to WASM
//! and mounted client-side; the server only ships static assets and the
//! JSON endpoints.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// Browser entry point: mounts the application onto `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(crate::app::App);
}
