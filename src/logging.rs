//! Logging setup
//!
//! `tracing` events go to stdout through `tracing-subscriber`, either as
//! human-readable text or one JSON object per line. `RUST_LOG` takes
//! precedence over the configured level.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing_subscriber::{fmt as fmt_layer, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("Unknown log format '{}' (expected 'text' or 'json')", other)),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Text => write!(f, "text"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset (e.g. "info", "postdrive=debug")
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Text,
        }
    }
}

impl LoggingConfig {
    /// Build the filter, preferring `RUST_LOG`
    pub fn env_filter(&self) -> Result<EnvFilter, String> {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&self.level))
            .map_err(|e| format!("Invalid log level '{}': {}", self.level, e))
    }
}

/// Install the global subscriber.
///
/// Fails if the level is not a valid filter or a subscriber is already set.
pub fn init_logging(config: &LoggingConfig) -> Result<(), String> {
    let filter = config.env_filter()?;
    let registry = tracing_subscriber::registry().with(filter);

    let result = match config.format {
        LogFormat::Json => registry
            .with(fmt_layer::layer().json().with_current_span(false))
            .try_init(),
        LogFormat::Text => registry.with(fmt_layer::layer().with_target(true)).try_init(),
    };

    result.map_err(|e| format!("Failed to initialize logging: {}", e))
}
