//! Web UI for Music 4 You.
//!
//! Build for the browser with the `csr` feature (Trunk reads `index.html`),
//! or render on the server with the `ssr` feature.

mod app;
#[cfg(feature = "ssr")]
mod render;

pub use app::{App, LOGO_SRC, STYLESHEET_HREF};
#[cfg(feature = "ssr")]
pub use render::{render_app, render_document};

/// Entry point for the WASM application.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
