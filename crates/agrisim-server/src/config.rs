//! Configuration loading and typed config structures for the AgriSim server.
//!
//! The canonical configuration lives in `agrisim.yaml` at the project root.
//! This module defines strongly-typed structs that mirror the YAML
//! structure, and provides a loader that reads and validates the file.
//! Every field has a sensible default so an absent file still yields a
//! working configuration.

use std::path::Path;

use serde::Deserialize;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level server configuration.
///
/// Mirrors the structure of `agrisim.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AgrisimConfig {
    /// HTTP listener settings.
    #[serde(default)]
    pub server: ServerSection,

    /// Synthetic data generator settings.
    #[serde(default)]
    pub generator: GeneratorSection,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingSection,
}

impl AgrisimConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// Environment variables override YAML values:
    /// - `AGRISIM_PORT` overrides `server.port`
    /// - `AGRISIM_SEED` overrides `generator.seed`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let mut config: Self = serde_yml::from_str(&contents)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_yml::from_str(yaml)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Override config values with environment variables when set.
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("AGRISIM_PORT")
            && let Ok(port) = val.parse::<u16>()
        {
            self.server.port = port;
        }
        if let Ok(val) = std::env::var("AGRISIM_SEED")
            && let Ok(seed) = val.parse::<u64>()
        {
            self.generator.seed = Some(seed);
        }
    }
}

/// HTTP listener configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerSection {
    /// The host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,

    /// The TCP port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Synthetic data generator configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GeneratorSection {
    /// Fixed seed for reproducible environmental bundles.
    ///
    /// When absent, every fetch reseeds from OS entropy, which is the
    /// production behavior. Set a seed for reproducible demos and tests.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Latitude used when a simulation request omits a coordinate.
    #[serde(default = "default_latitude")]
    pub default_latitude: f64,

    /// Longitude used when a simulation request omits a coordinate.
    #[serde(default = "default_longitude")]
    pub default_longitude: f64,
}

impl Default for GeneratorSection {
    fn default() -> Self {
        Self {
            seed: None,
            default_latitude: default_latitude(),
            default_longitude: default_longitude(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingSection {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions (serde default requires named functions)
// ---------------------------------------------------------------------------

fn default_host() -> String {
    "0.0.0.0".to_owned()
}

const fn default_port() -> u16 {
    8080
}

// Central Iowa corn belt, a sensible demo default.
const fn default_latitude() -> f64 {
    41.5868
}

const fn default_longitude() -> f64 {
    -93.625
}

fn default_log_level() -> String {
    "info".to_owned()
}
