//! Storefront core.
//!
//! Start-up concerns shared by every build of the storefront:
//!
//! - [`StorefrontConfig`]: builder-style configuration, loadable from TOML
//! - [`logging::init`]: installs the `tracing` subscriber
//! - [`StorefrontApp`]: config + route table + bundled catalog
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use storefront_core::prelude::*;
//!
//! let app = StorefrontApp::from_toml(include_str!("../Storefront.toml"))?;
//! logging::init(app.config(), std::io::stderr)?;
//! ```

pub mod logging;
pub mod prelude;

mod app;
mod config;
mod error;

pub use app::*;
pub use config::*;
pub use error::*;
