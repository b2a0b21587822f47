pub mod api;
pub mod app;
pub mod components;
pub mod i18n;
pub mod pages;
pub mod utils;

#[cfg(test)]
mod test_support;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("Failed to initialize logger");

    log::info!("Starting site frontend");
    leptos::mount_to_body(app::App);
}
