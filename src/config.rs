//! Optional user configuration.
//!
//! A TOML file at the platform config dir (`~/.config/tungshing/config.toml`
//! on Linux) may override the built-in defaults for the server port, the
//! `find` search window, and the default post platform. A missing file means
//! defaults; a file that exists but cannot be read or parsed is an error.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// The user-tunable knobs. Every field has a default, so any subset may
/// appear in the file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Port the API server binds when neither the command line nor `$PORT`
    /// names one.
    pub port: u16,
    /// Days `find` scans when no window is given.
    pub find_days: u32,
    /// Platform `post` renders for when none is given.
    pub platform: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3888,
            find_days: 30,
            platform: "general".to_string(),
        }
    }
}

impl Config {
    /// Platform-specific config directory, `None` on systems without one.
    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("dev", "tungshing", "tungshing").map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Load the user configuration, falling back to defaults when no file
    /// exists.
    pub fn load() -> Result<Self> {
        match Self::config_dir() {
            Some(dir) => Self::load_path(&dir.join("config.toml")),
            None => Ok(Self::default()),
        }
    }

    /// Load from an explicit path; a missing file yields the defaults.
    pub fn load_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration: {}", path.display()))?;
        let config = Self::from_toml(&content)
            .with_context(|| format!("Invalid configuration: {}", path.display()))?;
        Ok(config)
    }

    fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}
