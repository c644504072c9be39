#![allow(non_snake_case)]

mod app;
mod browser;
mod components;
pub mod context;
mod pages;
mod theme;

use std::sync::OnceLock;

use folio_core::SiteConfig;

/// Global site configuration, set once at startup
static SITE_CONFIG: OnceLock<SiteConfig> = OnceLock::new();

/// Get the site configuration (set in `main`, defaults otherwise)
pub fn get_site_config() -> SiteConfig {
    SITE_CONFIG.get().cloned().unwrap_or_default()
}

fn main() {
    let level = if cfg!(debug_assertions) {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    // Fails only if a subscriber is already installed
    let _ = dioxus::logger::init(level);

    // The catalog location can be baked in at build time
    let mut config = SiteConfig::default();
    if let Some(url) = option_env!("FOLIO_DATA_URL") {
        config = config.with_data_url(url);
    }

    tracing::info!("Starting Folio with catalog at {}", config.data_url);
    let _ = SITE_CONFIG.set(config);

    dioxus::launch(app::App);
}
