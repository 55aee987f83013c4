//! # client
//!
//! Leptos + WASM frontend for the insurance-claims intake and review tool.
//!
//! This crate contains the claim submission form, the post-submit status
//! page, and the admin dashboard (model training plus bucketed claim review).
//! Domain rules (classification, ranking, CSV export, form validation) live
//! in the `claims` crate; this crate wires them to browser state and the
//! scoring backend.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
