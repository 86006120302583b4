//! Server and store configuration.
//!
//! Settings come from an optional `exam-scheduler.toml` file with
//! environment-variable overrides (`HOST`, `PORT`, `EXAM_DATA_FILE`), so a
//! bare `cargo run` works out of the box and deployments can pin paths
//! without a file.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid {name} value {value:?}")]
    InvalidEnv { name: &'static str, value: String },
}

/// Configuration for the exam server process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind host for the HTTP server.
    #[serde(default = "default_host")]
    pub host: String,
    /// Bind port for the HTTP server.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Path of the exam snapshot file.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_data_file() -> PathBuf {
    PathBuf::from("data/exams.json")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            data_file: default_data_file(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load configuration for the current process.
    ///
    /// Reads `exam-scheduler.toml` from the working directory if present
    /// (defaults otherwise), then applies environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let file = PathBuf::from("exam-scheduler.toml");
        let mut config = if file.exists() {
            Self::from_file(&file)?
        } else {
            Self::default()
        };
        config.apply_env_overrides()?;
        Ok(config)
    }

    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(host) = env::var("HOST") {
            self.host = host;
        }
        if let Ok(port) = env::var("PORT") {
            self.port = port.parse().map_err(|_| ConfigError::InvalidEnv {
                name: "PORT",
                value: port,
            })?;
        }
        if let Ok(data_file) = env::var("EXAM_DATA_FILE") {
            self.data_file = PathBuf::from(data_file);
        }
        Ok(())
    }
}
