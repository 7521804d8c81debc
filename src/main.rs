//! Pokédex Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod format;
mod models;
mod pages;
mod router;
mod store;
mod validation;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::default();
    if let Err(err) = console_logger::init(config.log_level) {
        web_sys::console::warn_1(&format!("console logger not installed: {}", err).into());
    }
    log::info!("starting pokedex-ui");

    mount_to_body(move || view! { <App config /> });
}
