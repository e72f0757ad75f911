//! Configuration management.
//!
//! Configuration sources (in order of priority, later overrides earlier):
//! 1. `table-order.yaml` in the current directory (if exists)
//! 2. File named by the `TABLE_ORDER_CONFIG` environment variable (if set)
//! 3. Environment variables prefixed `TABLE_ORDER__`, with `__` between
//!    levels: `TABLE_ORDER__SERVER__PORT=8080`, `TABLE_ORDER__STORAGE__DATA_DIR=./data`

use serde::Deserialize;
use std::num::NonZeroUsize;
use std::path::PathBuf;

pub const DEFAULT_CONFIG_FILE: &str = "table-order";
pub const CONFIG_ENV_VAR: &str = "TABLE_ORDER_CONFIG";
pub const CONFIG_ENV_PREFIX: &str = "TABLE_ORDER";

const DEFAULT_CHANNEL_CAPACITY: NonZeroUsize = match NonZeroUsize::new(32) {
    Some(capacity) => capacity,
    None => unreachable!(),
};

#[derive(Debug, thiserror::Error)]
#[error("Configuration error: {0}")]
pub struct ConfigError(#[from] ::config::ConfigError);

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Request queue length of each actor. Zero is rejected when loading.
    pub channel_capacity: NonZeroUsize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Where snapshots live. Without a directory the stores are memory-only.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub data_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Used when `RUST_LOG` is unset.
    pub filter: String,
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

impl Config {
    /// Load configuration from files and environment.
    pub fn load() -> Result<Self, ConfigError> {
        use ::config::{Config as ConfigLib, Environment, File, FileFormat};

        let mut builder = ConfigLib::builder()
            .add_source(File::new(DEFAULT_CONFIG_FILE, FileFormat::Yaml).required(false));

        if let Ok(config_path) = std::env::var(CONFIG_ENV_VAR) {
            builder = builder.add_source(File::new(&config_path, FileFormat::Yaml).required(true));
        }

        let config = builder
            .add_source(
                Environment::with_prefix(CONFIG_ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server.address(), "0.0.0.0:5000");
        assert_eq!(config.server.channel_capacity.get(), 32);
        assert!(config.storage.data_dir.is_none());
        assert_eq!(config.log.filter, "info");
        assert_eq!(config.log.format, LogFormat::Pretty);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        use ::config::{Config as ConfigLib, File, FileFormat};

        let yaml = "server:\n  port: 8080\nstorage:\n  data_dir: ./data\nlog:\n  format: json\n";
        let config: Config = ConfigLib::builder()
            .add_source(File::from_str(yaml, FileFormat::Yaml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.storage.data_dir, Some(PathBuf::from("./data")));
        assert_eq!(config.log.format, LogFormat::Json);
        assert_eq!(config.log.filter, "info");
    }

    #[test]
    fn test_zero_channel_capacity_is_rejected() {
        use ::config::{Config as ConfigLib, File, FileFormat};

        let load = |yaml: &str| {
            ConfigLib::builder()
                .add_source(File::from_str(yaml, FileFormat::Yaml))
                .build()
                .unwrap()
                .try_deserialize::<Config>()
        };

        assert!(load("server:\n  channel_capacity: 0\n").is_err());
        let config = load("server:\n  channel_capacity: 8\n").unwrap();
        assert_eq!(config.server.channel_capacity.get(), 8);
    }
}
