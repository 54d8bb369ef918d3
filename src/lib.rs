//! # manakarma-client
//!
//! Leptos + WASM frontend for the Mana Karma personal-finance dashboard.
//! All business logic (statement parsing, transaction categorization, score
//! and insight generation) lives in the backend API; this crate is the
//! client shell: session lifecycle, route authorization, pages, and the
//! HTTP glue that talks to the backend.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod storage;
pub mod util;

/// WASM entry point. Initializes logging and hydrates the app shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
