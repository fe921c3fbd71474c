pub mod app;
pub mod domain;
pub mod layout;
pub mod routes;
pub mod shared;

use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;

pub fn hydrate() {
    let config = match shared::config::load_config() {
        Ok(config) => config,
        Err(e) => {
            web_sys::console::error_1(&format!("failed to load config: {e:#}").into());
            return;
        }
    };

    // initializes logging using the `log` crate
    _ = console_log::init_with_level(config.logging.level());
    console_error_panic_hook::set_once();

    log::info!("starting with model {}", config.genai.model);
    leptos::mount::mount_to_body(move || view! { <app::App config=config /> });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
