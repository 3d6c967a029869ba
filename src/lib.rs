//! # storefront
//!
//! Leptos + WASM frontend for the Glowz Lifestyle store. Collection explorer,
//! product detail and category listings, a launch countdown, and the admin
//! order-management board, all talking to the existing REST backend.

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
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
