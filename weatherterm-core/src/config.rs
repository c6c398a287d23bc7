use anyhow::{Context, Result, anyhow};
use directories::{ProjectDirs, UserDirs};
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

/// Persisted defaults for the reporter, stored on disk as TOML.
///
/// Every field is optional: values given on the command line always win and
/// the config file only fills the gaps.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// openweathermap.org API key.
    pub api_key: Option<String>,

    /// Default country code, e.g. "CA" or "US".
    pub country: Option<String>,

    /// Default city name.
    pub city: Option<String>,

    /// Default unit system, "metric" or "imperial".
    pub unit: Option<String>,

    /// Seconds to wait between report cycles.
    pub sleep_secs: Option<u64>,

    /// Report file path.
    pub file: Option<PathBuf>,
}

impl Config {
    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weatherterm", "weatherterm")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

/// Default report file, `~/.weatherterm`.
pub fn default_report_path() -> Result<PathBuf> {
    let dirs = UserDirs::new().ok_or_else(|| anyhow!("Could not determine home directory"))?;

    Ok(dirs.home_dir().join(".weatherterm"))
}
