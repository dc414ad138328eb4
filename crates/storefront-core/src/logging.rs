//! Tracing subscriber setup.
//!
//! Native builds and tests install a `tracing-subscriber` fmt subscriber with a
//! caller-supplied writer. The browser build hands [`LogLevel::tracing_level`]
//! to `tracing-wasm` instead.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

use crate::config::StorefrontConfig;
use crate::error::StorefrontError;

/// Minimum level for log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Filter directive for this level.
    pub fn directive(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    /// The matching `tracing` level.
    pub fn tracing_level(&self) -> tracing::Level {
        match self {
            Self::Trace => tracing::Level::TRACE,
            Self::Debug => tracing::Level::DEBUG,
            Self::Info => tracing::Level::INFO,
            Self::Warn => tracing::Level::WARN,
            Self::Error => tracing::Level::ERROR,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Trace => write!(f, "TRACE"),
            Self::Debug => write!(f, "DEBUG"),
            Self::Info => write!(f, "INFO"),
            Self::Warn => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

/// Output format for logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Multi-field human-readable lines (for development).
    #[default]
    Human,
    /// Single-line compact output.
    Compact,
}

/// The filter directive the subscriber will use.
///
/// An explicit `log_filter` wins over `log_level`.
pub fn filter_directive(config: &StorefrontConfig) -> String {
    config
        .log_filter
        .clone()
        .unwrap_or_else(|| config.log_level.directive().to_string())
}

/// Install the global subscriber.
///
/// Timestamps are disabled: `SystemTime` is unavailable on `wasm32-unknown-unknown`.
pub fn init<W>(config: &StorefrontConfig, make_writer: W) -> Result<(), StorefrontError>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let filter = EnvFilter::try_new(filter_directive(config))
        .map_err(|e| StorefrontError::LoggingError(e.to_string()))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(make_writer)
        .with_ansi(false)
        .without_time();

    let installed = match config.log_format {
        LogFormat::Human => builder.try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };
    installed.map_err(|e| StorefrontError::LoggingError(e.to_string()))?;

    tracing::debug!(
        filter = %filter_directive(config),
        format = ?config.log_format,
        "logging initialised"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        assert!(LogLevel::Trace < LogLevel::Debug);
        assert!(LogLevel::Warn < LogLevel::Error);
        assert_eq!(LogLevel::default(), LogLevel::Info);
    }

    #[test]
    fn test_level_display() {
        assert_eq!(LogLevel::Warn.to_string(), "WARN");
        assert_eq!(LogLevel::Debug.directive(), "debug");
    }

    #[test]
    fn test_tracing_level_mapping() {
        assert_eq!(LogLevel::Trace.tracing_level(), tracing::Level::TRACE);
        assert_eq!(LogLevel::Info.tracing_level(), tracing::Level::INFO);
        assert_eq!(LogLevel::Error.tracing_level(), tracing::Level::ERROR);
    }

    #[test]
    fn test_filter_directive_prefers_explicit_filter() {
        let config = StorefrontConfig::default().with_log_level(LogLevel::Warn);
        assert_eq!(filter_directive(&config), "warn");

        let config = config.with_log_filter("storefront_state=debug,info");
        assert_eq!(filter_directive(&config), "storefront_state=debug,info");
    }

    #[test]
    fn test_bad_filter_is_reported() {
        let config = StorefrontConfig::default().with_log_filter("storefront_state=notalevel");
        let err = init(&config, std::io::sink).unwrap_err();
        assert!(matches!(err, StorefrontError::LoggingError(_)));
    }
}
