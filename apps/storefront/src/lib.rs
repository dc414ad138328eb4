//! Storefront
//!
//! Client-rendered shop front:
//! - Navigation bar with category dropdowns, a mobile drawer and search
//! - Featured deals on the home page
//! - Product detail pages backed by the bundled catalog
//! - Logs through `tracing` to the browser console

pub mod app;
pub mod components;
pub mod source;

pub use app::App;

use leptos::prelude::*;
use storefront_core::{StorefrontApp, StorefrontError};

/// Bundled configuration.
pub const CONFIG: &str = include_str!("../Storefront.toml");

/// Load configuration and catalog, start logging and mount the app.
///
/// A logging failure is reported but does not stop the app from mounting.
pub fn start() -> Result<(), StorefrontError> {
    let app = StorefrontApp::from_toml(CONFIG)?;

    init_logging(&app);
    tracing::info!(
        name = %app.config().name,
        products = app.catalog().list_products().len(),
        "storefront starting"
    );

    mount_to_body(move || view! { <App app=app/> });
    Ok(())
}

/// The browser console layer only honours `log_level`; `log_filter` and
/// `log_format` apply to native builds.
#[cfg(target_arch = "wasm32")]
fn init_logging(app: &StorefrontApp) {
    tracing_wasm::set_as_global_default_with_config(
        tracing_wasm::WASMLayerConfigBuilder::default()
            .set_max_level(app.config().log_level.tracing_level())
            .build(),
    );
}

#[cfg(not(target_arch = "wasm32"))]
fn init_logging(app: &StorefrontApp) {
    if let Err(e) = storefront_core::logging::init(app.config(), std::io::stderr) {
        eprintln!("storefront: {}", e);
    }
}
