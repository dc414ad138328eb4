//! Storefront configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::StorefrontError;
use crate::logging::{LogFormat, LogLevel};

/// Configuration for the storefront application.
///
/// Every field has a default, so a TOML file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Application name.
    pub name: String,
    /// Default document title.
    pub default_title: String,
    /// Meta description.
    pub description: String,
    /// Stylesheet path.
    pub css_path: Option<String>,
    /// Artificial latency of the product lookup, in milliseconds.
    pub lookup_delay_ms: u64,
    /// Minimum log level.
    pub log_level: LogLevel,
    /// Full filter directive; overrides `log_level` when set.
    pub log_filter: Option<String>,
    pub log_format: LogFormat,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            name: "Storefront".to_string(),
            default_title: "Storefront".to_string(),
            description: "Demo storefront with featured deals and product pages".to_string(),
            css_path: None,
            lookup_delay_ms: 500,
            log_level: LogLevel::Info,
            log_filter: None,
            log_format: LogFormat::Human,
        }
    }
}

impl StorefrontConfig {
    /// Create a new configuration with the given app name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Parse a TOML document, filling missing keys with defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, StorefrontError> {
        Ok(toml::from_str(source)?)
    }

    /// Set the default page title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.default_title = title.into();
        self
    }

    /// Set the CSS file path.
    pub fn with_css(mut self, path: impl Into<String>) -> Self {
        self.css_path = Some(path.into());
        self
    }

    pub fn with_lookup_delay(mut self, delay: Duration) -> Self {
        self.lookup_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = Some(filter.into());
        self
    }

    pub fn with_log_format(mut self, format: LogFormat) -> Self {
        self.log_format = format;
        self
    }

    /// Artificial lookup latency.
    pub fn lookup_delay(&self) -> Duration {
        Duration::from_millis(self.lookup_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = StorefrontConfig::default();

        assert_eq!(config.name, "Storefront");
        assert_eq!(config.lookup_delay(), Duration::from_millis(500));
        assert_eq!(config.log_level, LogLevel::Info);
        assert!(config.css_path.is_none());
    }

    #[test]
    fn test_config_builder_chain() {
        let config = StorefrontConfig::new("Shop")
            .with_title("My Shop")
            .with_css("/pkg/storefront.css")
            .with_lookup_delay(Duration::from_millis(0))
            .with_log_format(LogFormat::Compact);

        assert_eq!(config.name, "Shop");
        assert_eq!(config.default_title, "My Shop");
        assert_eq!(config.css_path, Some("/pkg/storefront.css".to_string()));
        assert_eq!(config.lookup_delay_ms, 0);
        assert_eq!(config.log_format, LogFormat::Compact);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = StorefrontConfig::from_toml_str(
            r#"
            default_title = "Deals"
            lookup_delay_ms = 250
            log_level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.default_title, "Deals");
        assert_eq!(config.lookup_delay_ms, 250);
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.name, "Storefront");
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = StorefrontConfig::from_toml_str("").unwrap();
        assert_eq!(config, StorefrontConfig::default());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = StorefrontConfig::from_toml_str("log_level = \"loud\"").unwrap_err();
        assert!(matches!(err, StorefrontError::ConfigError(_)));
        assert!(err.to_string().starts_with("Configuration error"));
    }
}
