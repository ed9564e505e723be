//! Configuration settings for pulsefeed.

use crate::state::Collection;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Main configuration struct.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Remote provider configuration.
    pub provider: ProviderConfig,
    /// Collection sync configuration.
    pub sync: SyncConfig,
}

impl Config {
    /// Load configuration from file, returning default if file doesn't exist or fails.
    pub fn load_or_default() -> crate::Result<Self> {
        Self::load(None)
    }

    /// Load configuration from file.
    pub fn load(path: Option<PathBuf>) -> crate::Result<Self> {
        let config_path = path.unwrap_or_else(|| {
            super::config_dir()
                .map(|p| p.join("config.toml"))
                .unwrap_or_else(|_| PathBuf::from("config.toml"))
        });

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content).map_err(|e| crate::Error::config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file.
    pub fn save(&self, path: Option<PathBuf>) -> crate::Result<()> {
        let config_path = path.unwrap_or_else(|| {
            super::config_dir()
                .map(|p| p.join("config.toml"))
                .unwrap_or_else(|_| PathBuf::from("config.toml"))
        });

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::config(e.to_string()))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}

/// Remote provider configuration, handed to provider implementations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Provider base URL.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// Maximum retries for failed requests.
    pub max_retries: u32,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000/api".to_string(),
            timeout_secs: 30,
            max_retries: 3,
        }
    }
}

/// Per-collection polling intervals in seconds (0 to disable).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// Assets refresh interval.
    pub assets_interval_secs: u64,
    /// News refresh interval.
    pub news_interval_secs: u64,
    /// Alerts refresh interval.
    pub alerts_interval_secs: u64,
    /// Dashboard aggregate refresh interval.
    pub dashboard_interval_secs: u64,
    /// Portfolio refresh interval.
    pub portfolio_interval_secs: u64,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            assets_interval_secs: 30,
            news_interval_secs: 60,
            alerts_interval_secs: 60,
            dashboard_interval_secs: 30,
            portfolio_interval_secs: 30,
        }
    }
}

impl SyncConfig {
    /// The polling interval for a collection. Zero means disabled.
    pub fn poll_interval(&self, collection: Collection) -> Duration {
        let secs = match collection {
            Collection::Assets => self.assets_interval_secs,
            Collection::News => self.news_interval_secs,
            Collection::Alerts => self.alerts_interval_secs,
            Collection::Dashboard => self.dashboard_interval_secs,
            Collection::Portfolio => self.portfolio_interval_secs,
        };
        Duration::from_secs(secs)
    }
}
