//! BAPETCO corporate site - browser entry point
//!
//! Bilingual (English/Arabic) single page with scroll-triggered entrances.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

mod app;
mod components;
mod pages;
mod sections;
mod services;
mod state;
mod utils;

use app::App;

/// Static placeholder in `index.html`, shown until the wasm bundle runs.
const BOOT_PLACEHOLDER_ID: &str = "boot-placeholder";

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("BAPETCO site starting");

    remove_boot_placeholder();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

/// The Leptos loading screen takes over from the static placeholder.
fn remove_boot_placeholder() {
    let Some(placeholder) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(BOOT_PLACEHOLDER_ID))
    else {
        return;
    };
    placeholder.remove();
    log::debug!("boot placeholder removed");
}
