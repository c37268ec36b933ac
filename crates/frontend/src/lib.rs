pub mod app;
pub mod dashboards;
pub mod domain;
pub mod layout;
pub mod routes;
pub mod shared;

use app::App;
use contracts::shared::config::{load_config, DashboardConfig};
use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;

/// Build-time configuration; missing keys keep their defaults.
const DASHBOARD_TOML: &str = include_str!("../dashboard.toml");

#[wasm_bindgen]
pub fn hydrate() {
    let (config, config_error) = match load_config(Some(DASHBOARD_TOML)) {
        Ok(config) => (config, None),
        Err(e) => (DashboardConfig::default(), Some(e)),
    };

    let level = config
        .app
        .log_level
        .parse::<log::Level>()
        .unwrap_or(log::Level::Debug);
    _ = console_log::init_with_level(level);
    console_error_panic_hook::set_once();

    if let Some(e) = config_error {
        log::warn!("dashboard.toml ignored, using defaults: {:#}", e);
    }
    log::info!("Starting {} dashboard", config.app.brand);

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
