//! Configuration management for signon.
//!
//! Configuration is loaded from multiple sources with precedence:
//! 1. Environment variables (SIGNON_*)
//! 2. Config file (~/.config or platform equivalent)
//! 3. Default values

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Identity service settings
    #[serde(default)]
    pub service: ServiceConfig,

    /// Local paths
    #[serde(default)]
    pub paths: PathsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Base URL of the identity service
    #[serde(default = "default_service_url")]
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory holding signon data; the token file lives here
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

// Default value functions

fn default_service_url() -> String {
    std::env::var("SIGNON_SERVICE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

fn default_data_dir() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("dev", "signon", "signon") {
        proj_dirs.data_dir().to_path_buf()
    } else {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".signon")
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            url: default_service_url(),
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service: ServiceConfig::default(),
            paths: PathsConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from the default config file and environment.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from a specific file, falling back to defaults
    /// when it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path).context("Failed to read config file")?;
            toml::from_str(&content).context("Failed to parse config file")
        } else {
            Ok(Config::default())
        }
    }

    /// Config file path; SIGNON_CONFIG overrides the platform default.
    pub fn config_path() -> PathBuf {
        if let Ok(path) = std::env::var("SIGNON_CONFIG") {
            PathBuf::from(path)
        } else {
            default_data_dir().join("config.toml")
        }
    }

    /// Path of the persisted token file.
    pub fn token_path(&self) -> PathBuf {
        self.paths.data_dir.join("token")
    }
}
