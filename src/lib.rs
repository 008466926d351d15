//! Portfolio - personal site of Jagan Muralitharan
//!
//! A single page of scroll-revealed sections with a contact form, rendered on
//! the server and hydrated in the browser with Leptos and WebAssembly.

#![recursion_limit = "4096"]

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
