use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf, time::Duration};
use tracing::debug;

use super::cache::CacheConfig;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ProviderConfig {
    #[serde(default = "ProviderConfig::default_base_url")]
    pub base_url: String,
    #[serde(default = "ProviderConfig::default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default = "ProviderConfig::default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

impl ProviderConfig {
    fn default_base_url() -> String {
        "https://api.exchangerate-api.com".to_string()
    }

    fn default_request_timeout_secs() -> u64 {
        10
    }

    fn default_connect_timeout_secs() -> u64 {
        5
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        ProviderConfig {
            base_url: Self::default_base_url(),
            request_timeout_secs: Self::default_request_timeout_secs(),
            connect_timeout_secs: Self::default_connect_timeout_secs(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub provider: ProviderConfig,
}

impl AppConfig {
    /// Loads the config from the default location, falling back to defaults
    /// when no file has been set up yet.
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!(path = %config_path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("io", "cambio", "cambio")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }
}
