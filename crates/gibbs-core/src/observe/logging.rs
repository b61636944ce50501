//! # Structured Logging
//!
//! Bootstrap for the `tracing` subscriber used by demo binaries and
//! examples. Supports level filtering (overridable through `RUST_LOG`),
//! a human-readable or compact output format, and serde-able configuration
//! so log settings can ride along in config files.
//!
//! ## Example
//!
//! ```rust,ignore
//! use gibbs_core::observe::{init_logging, LogConfig, LogLevel};
//!
//! let config = LogConfig {
//!     level: LogLevel::Debug,
//!     ..Default::default()
//! };
//! init_logging(&config);
//!
//! tracing::debug!(n = 512, "sweep row done");
//! ```

use serde::{Deserialize, Serialize};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Log level configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level (most verbose)
    Trace,
    /// Debug level
    Debug,
    /// Info level (default)
    Info,
    /// Warning level
    Warn,
    /// Error level (least verbose)
    Error,
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Info
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "trace"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Error => write!(f, "error"),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Pretty format (human-readable, multi-line)
    Pretty,
    /// Compact format (one line per event)
    Compact,
}

impl Default for LogFormat {
    fn default() -> Self {
        LogFormat::Compact
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log level
    pub level: LogLevel,
    /// Output format
    pub format: LogFormat,
    /// Module filter (e.g. "gibbs_core=debug"); overrides `level`
    pub filter: Option<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            format: LogFormat::Compact,
            filter: None,
        }
    }
}

impl LogConfig {
    /// Verbose configuration for poking at the analyzers interactively.
    pub fn development() -> Self {
        Self {
            level: LogLevel::Debug,
            format: LogFormat::Pretty,
            ..Default::default()
        }
    }

    /// Errors only.
    pub fn quiet() -> Self {
        Self {
            level: LogLevel::Error,
            ..Default::default()
        }
    }
}

/// Initialize the global logging subscriber.
///
/// Call once at startup; later calls are silently ignored. The `RUST_LOG`
/// environment variable, when set, wins over the configured level.
pub fn init_logging(config: &LogConfig) {
    let filter = if let Some(ref custom) = config.filter {
        EnvFilter::try_new(custom).unwrap_or_else(|_| EnvFilter::new(config.level.to_string()))
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.level.to_string()))
    };

    let result = match config.format {
        LogFormat::Pretty => {
            let subscriber = tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().pretty());
            tracing::subscriber::set_global_default(subscriber)
        }
        LogFormat::Compact => {
            let subscriber = tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().compact());
            tracing::subscriber::set_global_default(subscriber)
        }
    };

    // already-set subscribers keep precedence
    let _ = result;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_display() {
        assert_eq!(format!("{}", LogLevel::Trace), "trace");
        assert_eq!(format!("{}", LogLevel::Info), "info");
        assert_eq!(format!("{}", LogLevel::Error), "error");
    }

    #[test]
    fn test_config_presets() {
        let dev = LogConfig::development();
        assert_eq!(dev.level, LogLevel::Debug);
        assert_eq!(dev.format, LogFormat::Pretty);

        let quiet = LogConfig::quiet();
        assert_eq!(quiet.level, LogLevel::Error);
    }

    #[test]
    fn test_config_serde_uses_lowercase_tags() {
        let config = LogConfig {
            level: LogLevel::Debug,
            format: LogFormat::Pretty,
            filter: None,
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"debug\""));
        assert!(json.contains("\"pretty\""));

        let back: LogConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.level, LogLevel::Debug);
    }
}
