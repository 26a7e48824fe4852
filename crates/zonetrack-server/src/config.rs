//! Configuration loading and typed config structures for the server.
//!
//! The configuration file is YAML; every section has serde defaults so an
//! empty (or absent) file yields a working server on `0.0.0.0:5000` with the
//! built-in zone set and a 1000-entry history window. Zone order in the file
//! is the lookup order, so overlapping zones resolve to whichever is listed
//! first.

use std::path::Path;

use serde::Deserialize;
use zonetrack_types::Zone;

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

fn default_host() -> String {
    String::from("0.0.0.0")
}

const fn default_port() -> u16 {
    5000
}

const fn default_history_capacity() -> usize {
    zonetrack_core::DEFAULT_CAPACITY
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerSection {
    /// Bind address.
    #[serde(default = "default_host")]
    pub host: String,
    /// Listen port.
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

/// History window settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct HistorySection {
    /// Maximum number of retained samples across all vehicles.
    #[serde(default = "default_history_capacity")]
    pub capacity: usize,
}

impl Default for HistorySection {
    fn default() -> Self {
        Self {
            capacity: default_history_capacity(),
        }
    }
}

/// Top-level service configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ServiceConfig {
    /// HTTP listener settings.
    #[serde(default)]
    pub server: ServerSection,

    /// History window settings.
    #[serde(default)]
    pub history: HistorySection,

    /// Zone definitions, in lookup order. Empty means "use the built-in
    /// default zone set".
    #[serde(default)]
    pub zones: Vec<Zone>,
}

impl ServiceConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// Environment variables override file values:
    /// - `ZONETRACK_HOST` overrides `server.host`
    /// - `ZONETRACK_PORT` overrides `server.port`
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

    /// Default configuration with environment overrides applied.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env_overrides();
        config
    }

    /// Apply `ZONETRACK_HOST` / `ZONETRACK_PORT` overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(host) = std::env::var("ZONETRACK_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = std::env::var("ZONETRACK_PORT") {
            match port.parse::<u16>() {
                Ok(port) => self.server.port = port,
                Err(_) => {
                    tracing::warn!(value = %port, "ignoring unparseable ZONETRACK_PORT");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_yaml_yields_defaults() {
        let config = ServiceConfig::parse("{}");
        assert!(config.is_ok());
        if let Ok(c) = config {
            assert_eq!(c.server.host, "0.0.0.0");
            assert_eq!(c.server.port, 5000);
            assert_eq!(c.history.capacity, 1000);
            assert!(c.zones.is_empty());
        }
    }

    #[test]
    fn full_config_parses() {
        let yaml = r"
server:
  host: 127.0.0.1
  port: 8080
history:
  capacity: 50
zones:
  - name: harbor
    min_lat: 40.60
    max_lat: 40.62
    min_lng: -74.05
    max_lng: -74.00
";
        let config = ServiceConfig::parse(yaml);
        assert!(config.is_ok());
        if let Ok(c) = config {
            assert_eq!(c.server.port, 8080);
            assert_eq!(c.history.capacity, 50);
            assert_eq!(c.zones.len(), 1);
            assert_eq!(c.zones[0].name.as_str(), "harbor");
            assert_eq!(c.zones[0].bounds.min_lng, -74.05);
        }
    }

    #[test]
    fn invalid_yaml_is_an_error() {
        let config = ServiceConfig::parse(": not yaml :");
        assert!(config.is_err());
    }

    #[test]
    fn zone_order_in_file_is_preserved() {
        let yaml = r"
zones:
  - name: second-listed
    min_lat: 0.0
    max_lat: 1.0
    min_lng: 0.0
    max_lng: 1.0
  - name: first-listed
    min_lat: 0.0
    max_lat: 1.0
    min_lng: 0.0
    max_lng: 1.0
";
        let config = ServiceConfig::parse(yaml).unwrap_or_default();
        let names: Vec<&str> = config.zones.iter().map(|z| z.name.as_str()).collect();
        assert_eq!(names, vec!["second-listed", "first-listed"]);
    }
}
