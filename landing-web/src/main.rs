//! Clover Wallet landing page
//!
//! Leptos CSR entry point. Compiled to WASM and mounted on `<body>`.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

mod app;
mod components;
mod config;
mod pages;
mod services;
mod state;
mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    let init = config::init_config();
    let config = config::site_config();

    wasm_logger::init(wasm_logger::Config::new(config.log_level));
    if let Err(e) = init {
        log::error!("Invalid build configuration, using defaults: {}", e);
    }
    log::info!(
        "Clover landing page starting (locale={}, breakpoint={}px)",
        config.default_locale,
        config.breakpoint_px
    );

    leptos::mount::mount_to_body(|| view! { <App/> });
}
