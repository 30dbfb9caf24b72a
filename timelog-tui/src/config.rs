use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelogConfig {
    /// Directory holding the saved data. Defaults to the platform data dir.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    #[serde(default = "default_autosave_interval_ms")]
    pub autosave_interval_ms: u64,
    /// `tracing` filter directive, overridden by `RUST_LOG`.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_autosave_interval_ms() -> u64 {
    timelog::autosave::DEFAULT_INTERVAL.as_millis() as u64
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for TimelogConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            autosave_interval_ms: default_autosave_interval_ms(),
            log_filter: default_log_filter(),
        }
    }
}

impl TimelogConfig {
    pub fn config_path() -> Result<PathBuf> {
        Ok(dirs::config_dir()
            .context("Cannot determine config directory")?
            .join("timelog")
            .join("config.toml"))
    }

    /// Load config from disk. Returns default config if file doesn't exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        let config: Self = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        Ok(config)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = toml::to_string_pretty(self)?;
        std::fs::write(path, raw)?;
        Ok(())
    }

    pub fn data_dir(&self) -> Result<PathBuf> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(timelog::store::default_data_dir()?),
        }
    }

    pub fn autosave_interval(&self) -> Duration {
        // A zero period would make the autosave ticker panic.
        Duration::from_millis(self.autosave_interval_ms.max(1))
    }
}
