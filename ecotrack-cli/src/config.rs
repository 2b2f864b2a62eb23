//! Layered configuration
//!
//! Priority: command-line flag / environment variable > `~/.ecotrack/config.toml` > default.
//! A `.env` file in the working directory is loaded into the environment
//! before arguments are parsed.

use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/ecotrack";
pub const DEFAULT_BIND: &str = "0.0.0.0:3000";
pub const DEFAULT_API_URL: &str = "http://localhost:3000/api";

/// Contents of `~/.ecotrack/config.toml`. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EcotrackConfig {
    pub database_url: Option<String>,
    pub bind: Option<SocketAddr>,
    pub api_url: Option<String>,
    pub static_dir: Option<PathBuf>,
    pub connect_attempts: Option<u32>,
}

impl EcotrackConfig {
    /// Load the user config, or defaults if the file does not exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load from an explicit path, or defaults if the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file (invalid TOML): {}", path.display()))
    }

    /// Config file path: ~/.ecotrack/config.toml
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".ecotrack/config.toml")
    }

    pub fn database_url(&self, flag: Option<String>) -> String {
        flag.or_else(|| self.database_url.clone())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_owned())
    }

    pub fn api_url(&self, flag: Option<String>) -> String {
        flag.or_else(|| self.api_url.clone())
            .unwrap_or_else(|| DEFAULT_API_URL.to_owned())
    }

    pub fn bind(&self, flag: Option<SocketAddr>) -> Result<SocketAddr> {
        match flag.or(self.bind) {
            Some(addr) => Ok(addr),
            None => DEFAULT_BIND
                .parse()
                .context("Invalid default bind address"),
        }
    }

    pub fn static_dir(&self, flag: Option<PathBuf>) -> Option<PathBuf> {
        flag.or_else(|| self.static_dir.clone())
    }
}
