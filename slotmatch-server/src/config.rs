//! Configuration settings for the slotmatch server.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use slotmatch_libs::{OverlapMode, ResponseFormat};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub overlap: OverlapConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::ReadFile)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from `path`, or else the default locations, or else
    /// use defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            tracing::info!("Loading config from: {}", path.display());
            return Self::from_file(path);
        }

        let config_paths = [
            PathBuf::from("slotmatch.toml"),
            dirs::config_dir()
                .map(|p| p.join("slotmatch/config.toml"))
                .unwrap_or_default(),
        ];

        for path in &config_paths {
            if path.is_file() {
                tracing::info!("Loading config from: {}", path.display());
                return Self::from_file(path);
            }
        }

        tracing::info!("No config file found, using defaults");
        Ok(Config::default())
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.bind.parse::<SocketAddr>().is_err() {
            return Err(ConfigError::Invalid(format!(
                "server.bind is not a socket address: {}",
                self.server.bind
            )));
        }

        if self.database.url.is_empty() {
            return Err(ConfigError::Invalid("database.url must be set".to_string()));
        }

        if self.database.max_connections == 0 {
            return Err(ConfigError::Invalid(
                "database.max_connections must be > 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// HTTP listener configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to listen on
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:3000".to_string(),
        }
    }
}

/// Slot database configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SQLite connection URL, `sqlite::memory:` for a throwaway database
    pub url: String,
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://slotmatch.db".to_string(),
            max_connections: 5,
        }
    }
}

/// Overlap defaults. A request may still choose its own mode.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlapConfig {
    pub mode: OverlapMode,
    pub response_format: ResponseFormat,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults() {
        let config = Config::from_toml("").unwrap();

        assert_eq!(config.server.bind, "0.0.0.0:3000");
        assert_eq!(config.database.url, "sqlite://slotmatch.db");
        assert_eq!(config.database.max_connections, 5);
        assert_eq!(config.overlap.mode, OverlapMode::Containment);
        assert_eq!(config.overlap.response_format, ResponseFormat::Legacy);
    }

    #[test]
    fn parses_every_section() {
        let config = Config::from_toml(
            r#"
[server]
bind = "127.0.0.1:8080"

[database]
url = "sqlite::memory:"
max_connections = 1

[overlap]
mode = "intersection"
response_format = "structured"
"#,
        )
        .unwrap();

        assert_eq!(config.server.bind, "127.0.0.1:8080");
        assert_eq!(config.database.url, "sqlite::memory:");
        assert_eq!(config.database.max_connections, 1);
        assert_eq!(config.overlap.mode, OverlapMode::Intersection);
        assert_eq!(config.overlap.response_format, ResponseFormat::Structured);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            Config::from_toml("[database]\nmax_connections = 0"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            Config::from_toml("[server]\nbind = \"localhost\""),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            Config::from_toml("[overlap]\nmode = \"sometimes\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn loads_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[overlap]\nmode = \"intersection\"").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.overlap.mode, OverlapMode::Intersection);

        assert!(matches!(
            Config::load(Some(Path::new("/nonexistent/slotmatch.toml"))),
            Err(ConfigError::ReadFile(_))
        ));
    }
}
