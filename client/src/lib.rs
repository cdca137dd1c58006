//! # client
//!
//! Leptos + WASM frontend for the feedback insight dashboard.
//!
//! This crate contains the dashboard page, its components, the reactive
//! session context, and the browser HTTP transport. All orchestration
//! (normalization, request lifecycle, validation, formatting) lives in the
//! `sentiment` crate; this crate only wires it to signals and markup.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
