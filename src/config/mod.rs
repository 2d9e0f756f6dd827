// Configuration management for prioplay
// Handles loading/saving settings, with sensible defaults when config is missing

use anyhow::Result;
use dirs::config_dir;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub logging: LoggingConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub directory: PathBuf,
    pub file_name: String,
    pub filter: String, // RUST_LOG overrides this
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub show_banner: bool,
    pub echo_events: bool, // print started/finished lines after `play`
}

impl Default for LoggingConfig {
    fn default() -> Self {
        let app_dir = config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("prioplay");

        Self {
            directory: app_dir.join("logs"),
            file_name: "prioplay.log".to_string(),
            filter: "info,prioplay=debug".to_string(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_banner: true,
            echo_events: false,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Read the config at `path`, writing the defaults there if it is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            let config = Config::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;

        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join("prioplay");

        Ok(config_dir.join("config.toml"))
    }
}
