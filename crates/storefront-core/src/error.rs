//! Error types for storefront setup.

use storefront_catalog::CatalogError;
use thiserror::Error;

/// Errors that can occur while starting the storefront.
#[derive(Error, Debug)]
pub enum StorefrontError {
    /// Configuration file could not be parsed.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The tracing subscriber could not be installed.
    #[error("Logging error: {0}")]
    LoggingError(String),

    /// The bundled catalog is unusable.
    #[error("Catalog error: {0}")]
    CatalogError(#[from] CatalogError),
}

impl From<toml::de::Error> for StorefrontError {
    fn from(err: toml::de::Error) -> Self {
        StorefrontError::ConfigError(err.to_string())
    }
}
