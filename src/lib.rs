//! Coli-Cards - flashcard site front-end
//!
//! Site layout and login/register form, server-rendered with Leptos and
//! hydrated in the browser via WebAssembly.

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
