//! Configuration file handling.
//!
//! Loaded from `config.toml` under the platform config directory
//! (`~/.config/safeyt` on Linux). `SAFEYT_CONFIG_DIR` overrides the
//! directory, which is also how tests isolate themselves. A missing file
//! means defaults; a malformed file is an error rather than a silent
//! fallback.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable overriding the config directory.
pub const CONFIG_DIR_ENV: &str = "SAFEYT_CONFIG_DIR";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub playback: PlaybackConfig,
    pub output: OutputConfig,
}

/// Settings for the `play` command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Wall-clock seconds between ticks when real-time pacing is on.
    pub tick_seconds: f64,
    /// Sleep between ticks instead of simulating instantly.
    pub real_time: bool,
    /// Video duration assumed when the command line gives none.
    pub default_duration: f64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            tick_seconds: 1.0,
            real_time: false,
            default_duration: 600.0,
        }
    }
}

/// Output formatting defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Emit machine-readable JSON instead of text.
    pub json: bool,
}

impl Config {
    /// Directory the config file lives in.
    pub fn config_dir() -> Result<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let base = dirs::config_dir().context("Could not determine the config directory")?;
        Ok(base.join("safeyt"))
    }

    /// Full path of the config file.
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load the configuration, falling back to defaults when the file
    /// does not exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Write the configuration, creating the directory if needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }
}
