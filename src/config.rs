//! Configuration file support.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/caffeine_screen/config.toml`.
//! Only report rendering is configurable; the rule tables are fixed.

use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub report: ReportConfig,
}

/// Report rendering configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct ReportConfig {
    /// Optional TTF file to embed instead of the builtin Helvetica family.
    /// A missing or unreadable file falls back to the builtin fonts.
    #[serde(default)]
    pub font_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!("No config file found at {:?}, using defaults", config_path);
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| {
            let home = std::env::var("HOME").expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
        base.join("caffeine_screen").join("config.toml")
    }
}
