//! Application configuration management.
//!
//! Configuration is stored at `~/.config/tourcache/config.json` and holds an
//! optional gateway URL override. The `TOURCACHE_GATEWAY_URL` environment
//! variable (or a `.env` entry) takes precedence over both the file and the
//! built-in default.

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::api::DEFAULT_GATEWAY_URL;

/// Application name used for config/cache directory paths
const APP_NAME: &str = "tourcache";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Environment variable overriding the gateway URL
const GATEWAY_URL_ENV: &str = "TOURCACHE_GATEWAY_URL";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub gateway_url: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            Ok(serde_json::from_str(&contents)?)
        } else {
            // First run: write a default config so the file is there to edit
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir =
            dirs::config_dir().ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    pub fn cache_dir() -> Result<PathBuf> {
        let cache_dir =
            dirs::cache_dir().ok_or_else(|| anyhow::anyhow!("Could not find cache directory"))?;
        Ok(cache_dir.join(APP_NAME))
    }

    /// Resolve the gateway URL: env var, then config file, then default.
    pub fn gateway_url(&self) -> String {
        if let Ok(url) = std::env::var(GATEWAY_URL_ENV) {
            if !url.trim().is_empty() {
                return url;
            }
        }
        self.gateway_url
            .clone()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_GATEWAY_URL.to_string())
    }
}
