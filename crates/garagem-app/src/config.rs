//! Configuration management for garagem
//!
//! Config stored at: ~/.config/garagem/config.json

use garagem_domain::YearRange;
use garagem_types::{ConfigError, OutputFormat, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Same order of magnitude as a browser's per-origin localStorage quota
const DEFAULT_STORAGE_QUOTA_BYTES: u64 = 5 * 1024 * 1024;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Data directory override
    #[serde(default)]
    pub store_dir: Option<PathBuf>,

    /// Maximum bytes the store may occupy (None = unlimited)
    #[serde(default = "default_storage_quota")]
    pub storage_quota_bytes: Option<u64>,

    /// How long status messages stay visible
    #[serde(default = "default_status_duration_ms")]
    pub status_duration_ms: u64,

    /// Default output format (json, table)
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Oldest accepted vehicle year
    #[serde(default = "default_min_vehicle_year")]
    pub min_vehicle_year: i32,

    /// Years past the current one accepted as a vehicle year
    #[serde(default = "default_max_year_offset")]
    pub max_year_offset: i32,
}

fn default_storage_quota() -> Option<u64> {
    Some(DEFAULT_STORAGE_QUOTA_BYTES)
}

fn default_status_duration_ms() -> u64 {
    3500
}

fn default_min_vehicle_year() -> i32 {
    YearRange::default().min_year
}

fn default_max_year_offset() -> i32 {
    YearRange::default().max_year_offset
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_dir: None,
            storage_quota_bytes: default_storage_quota(),
            status_duration_ms: default_status_duration_ms(),
            output_format: OutputFormat::default(),
            min_vehicle_year: default_min_vehicle_year(),
            max_year_offset: default_max_year_offset(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("garagem");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Get the data directory holding the collections
    pub fn store_dir(&self) -> Result<PathBuf> {
        if let Some(ref dir) = self.store_dir {
            return Ok(dir.clone());
        }

        let data_dir = dirs::data_dir()
            .ok_or(ConfigError::NotFound)?
            .join("garagem");
        Ok(data_dir)
    }

    pub fn year_range(&self) -> YearRange {
        YearRange::new(self.min_vehicle_year, self.max_year_offset)
    }

    pub fn status_duration(&self) -> Duration {
        Duration::from_millis(self.status_duration_ms)
    }

    /// Load config from the default location, or create default
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from `path`, or create default when it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)
            .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)))?;
        Ok(config)
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save config to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .map_err(|e| ConfigError::SaveError(format!("{}: {}", path.display(), e)))?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Garagem Configuration")?;
        writeln!(f, "=====================")?;
        writeln!(f)?;
        writeln!(
            f,
            "Store dir:        {}",
            self.store_dir()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| "(error)".to_string())
        )?;
        match self.storage_quota_bytes {
            Some(bytes) => writeln!(f, "Storage quota:    {} bytes", bytes)?,
            None => writeln!(f, "Storage quota:    (unlimited)")?,
        }
        writeln!(f, "Status duration:  {} ms", self.status_duration_ms)?;
        writeln!(f, "Output format:    {}", self.output_format)?;
        writeln!(
            f,
            "Vehicle years:    {} to current + {}",
            self.min_vehicle_year, self.max_year_offset
        )?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:      {}", path.display())?;
        }

        Ok(())
    }
}
