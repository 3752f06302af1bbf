//! Admin Dashboard Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod pages;
mod store;
mod web;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let config = AppConfig::default();
    console_logger::init(config.log_level);
    log::info!("starting admin dashboard against {}", config.api_base);
    mount_to_body(move || view! { <App config=config.clone() /> });
}
