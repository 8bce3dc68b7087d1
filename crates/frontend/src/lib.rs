//! SEO article studio: Leptos CSR client for the article generation backend.

pub mod app;
pub mod domain;
pub mod layout;
pub mod routes;
pub mod shared;
pub mod usecases;

use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen(start)]
pub fn start() {
    // `log` → browser console; panics get a readable stack trace
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    log::info!("article studio starting, API base: {}", shared::api_utils::api_base());
    leptos::mount::mount_to_body(app::App);
}
