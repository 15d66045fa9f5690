//! Service configuration file
//!
//! A single JSON document. Every field has a default, so `{}` is a
//! valid config:
//!
//! ```json
//! {
//!   "host": "0.0.0.0",
//!   "port": 8080,
//!   "cors_origins": [],
//!   "store": { "kind": "file", "path": "./data/posts.json" },
//!   "seed_path": "./posts-seed.json",
//!   "log_level": "info",
//!   "log_format": "text"
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::http_server::HttpServerConfig;
use crate::logging::{LogFormat, LoggingConfig};

use super::errors::{CliError, CliResult};

/// Where posts are kept
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum StoreConfig {
    /// Lost on exit
    #[default]
    Memory,
    /// JSON file at `path`
    File { path: PathBuf },
}

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Host, port and CORS
    #[serde(flatten)]
    pub server: HttpServerConfig,

    #[serde(default)]
    pub store: StoreConfig,

    /// JSON array of posts loaded into an empty store at startup
    #[serde(default)]
    pub seed_path: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset (default "info")
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: HttpServerConfig::default(),
            store: StoreConfig::default(),
            seed_path: None,
            log_level: default_log_level(),
            log_format: LogFormat::default(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CliError::config_error(format!("Failed to read config {}: {}", path.display(), e))
        })?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Load from `path` when given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Check values serde cannot
    pub fn validate(&self) -> CliResult<()> {
        if self.server.port == 0 {
            return Err(CliError::config_error("port must be > 0"));
        }

        if self.server.host.trim().is_empty() {
            return Err(CliError::config_error("host must not be empty"));
        }

        if let StoreConfig::File { path } = &self.store {
            if path.as_os_str().is_empty() {
                return Err(CliError::config_error("store.path must not be empty"));
            }
        }

        EnvFilter::try_new(&self.log_level).map_err(|e| {
            CliError::config_error(format!("Invalid log_level '{}': {}", self.log_level, e))
        })?;

        Ok(())
    }

    /// Logging settings derived from this config
    pub fn logging(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.log_level.clone(),
            format: self.log_format,
        }
    }
}
