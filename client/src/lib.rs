//! # client
//!
//! Leptos + WASM front end for the Hydro online judge.
//!
//! This crate contains the session store and route gate, the judge API
//! client, translations, pages and components. The `hydro` host binary
//! renders it on the server (`ssr`); the browser bundle hydrates it
//! (`hydrate`).

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
