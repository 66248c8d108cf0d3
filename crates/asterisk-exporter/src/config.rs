//! Configuration file parsing for the exporter.
//!
//! Loads the listen address, Asterisk binary path, metric prefix and the set
//! of enabled collectors from TOML. Every field has a default, so an empty
//! file is a valid configuration.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Exporter configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// A field holds a value the exporter cannot use
    #[error("Invalid configuration value for {field}: {reason}")]
    InvalidValue {
        /// Field name
        field: &'static str,
        /// What is wrong with it
        reason: String,
    },
}

/// Exporter configuration loaded from TOML
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExporterConfig {
    /// Address the HTTP server binds to (e.g., "0.0.0.0:9815")
    #[serde(default = "default_listen_address")]
    pub listen_address: String,

    /// Path to the Asterisk binary
    #[serde(default = "default_asterisk_path")]
    pub asterisk_path: String,

    /// Prefix of every exposed metric name
    #[serde(default = "default_prefix")]
    pub prefix: String,

    /// Path under which metrics are exposed
    #[serde(default = "default_metrics_path")]
    pub metrics_path: String,

    /// Maximum number of scrapes served at once, 0 for no limit
    #[serde(default = "default_max_requests")]
    pub max_requests: usize,

    /// Enabled collectors
    #[serde(default)]
    pub collectors: CollectorsConfig,
}

/// Which collectors run on each scrape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CollectorsConfig {
    /// `agent show ...`
    #[serde(default = "enabled")]
    pub agents: bool,

    /// `core show ...`
    #[serde(default = "enabled")]
    pub core: bool,

    /// `sip show ...`
    #[serde(default = "enabled")]
    pub sip: bool,

    /// `bridge ...`
    #[serde(default)]
    pub bridge: bool,

    /// `calendar show calendars`
    #[serde(default)]
    pub calendar: bool,

    /// `confbridge show ...`
    #[serde(default)]
    pub confbridge: bool,

    /// `iax2 show channels`
    #[serde(default)]
    pub iax2: bool,

    /// `module show`
    #[serde(default)]
    pub module: bool,
}

fn default_listen_address() -> String {
    "0.0.0.0:9815".to_string()
}

fn default_asterisk_path() -> String {
    "/usr/sbin/asterisk".to_string()
}

fn default_prefix() -> String {
    "asterisk".to_string()
}

fn default_metrics_path() -> String {
    "/metrics".to_string()
}

fn default_max_requests() -> usize {
    40
}

fn enabled() -> bool {
    true
}

impl Default for CollectorsConfig {
    fn default() -> Self {
        Self {
            agents: true,
            core: true,
            sip: true,
            bridge: false,
            calendar: false,
            confbridge: false,
            iax2: false,
            module: false,
        }
    }
}

impl CollectorsConfig {
    /// Every collector switched on
    pub fn all() -> Self {
        Self {
            agents: true,
            core: true,
            sip: true,
            bridge: true,
            calendar: true,
            confbridge: true,
            iax2: true,
            module: true,
        }
    }
}

impl Default for ExporterConfig {
    fn default() -> Self {
        Self {
            listen_address: default_listen_address(),
            asterisk_path: default_asterisk_path(),
            prefix: default_prefix(),
            metrics_path: default_metrics_path(),
            max_requests: default_max_requests(),
            collectors: CollectorsConfig::default(),
        }
    }
}

impl ExporterConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: ExporterConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check values that TOML alone cannot constrain
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.prefix.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "prefix",
                reason: "must not be empty".to_string(),
            });
        }

        if !self.metrics_path.starts_with('/') {
            return Err(ConfigError::InvalidValue {
                field: "metrics_path",
                reason: format!("{:?} must start with '/'", self.metrics_path),
            });
        }

        if self.metrics_path == "/" || self.metrics_path == "/-/healthy" {
            return Err(ConfigError::InvalidValue {
                field: "metrics_path",
                reason: format!("{:?} is already served", self.metrics_path),
            });
        }

        if self.asterisk_path.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "asterisk_path",
                reason: "must not be empty".to_string(),
            });
        }

        Ok(())
    }

    /// Create a configuration for tests: every collector enabled
    pub fn default_test_config() -> Self {
        Self {
            listen_address: "127.0.0.1:0".to_string(),
            collectors: CollectorsConfig::all(),
            ..Self::default()
        }
    }
}
