//! The Print Route - landing site for a print-order routing service
//!
//! Server-rendered with Leptos and hydrated in the browser, where the
//! early-access form posts leads straight to a configured webhook.

#![recursion_limit = "512"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
