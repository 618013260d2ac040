//! PayLink mini-app entry point
//!
//! The widget runs inside a social mini-app host; the host injects the
//! wallet provider, this crate only renders against it.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

mod app;
mod components;
mod services;
mod state;
mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    // Panic messages should reach the browser console.
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    log::info!("PayLink mini-app starting");

    hide_loading_screen();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

/// Hide the host page's loading placeholder once the WASM module is up.
fn hide_loading_screen() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(loading) = document.get_element_by_id("leptos-loading") {
        if let Err(e) = loading.set_attribute("style", "display: none;") {
            log::warn!("Failed to hide loading screen: {:?}", e);
        }
    }
}
