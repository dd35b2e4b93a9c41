// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Client configuration.
//!
//! Configuration is stored in `<config dir>/shelter/config.toml` and includes:
//! - `database`: Optional path of the listing cache
//! - `order_by`: How listings are sorted (`name` or `id`)
//! - `[remote]`: Base URL and request timeout of the shelter API

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Error, Result};
use crate::ordering::OrderBy;

const APP_DIR_NAME: &str = "shelter";
const CONFIG_FILE_NAME: &str = "config.toml";
const DB_FILE_NAME: &str = "shelter.db";

/// Client configuration stored in `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Config {
    /// Path of the listing cache. Defaults to the user data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<PathBuf>,
    /// Listing sort order.
    #[serde(default)]
    pub order_by: OrderBy,
    /// Remote API settings.
    #[serde(default)]
    pub remote: RemoteConfig,
}

/// Remote API configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Base URL; collection paths such as `dogs` are appended to it.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout in seconds (default: 10).
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        RemoteConfig {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8080/api".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl RemoteConfig {
    /// Request timeout as a duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validates that the base URL is usable.
    ///
    /// Returns an error message if the URL is invalid.
    pub fn validate_url(&self) -> Option<String> {
        let url = self.base_url.trim();
        if url.starts_with("http://") || url.starts_with("https://") {
            return None;
        }
        Some(format!(
            "invalid remote URL '{}': must start with http:// or https://",
            self.base_url
        ))
    }
}

impl Config {
    /// Loads configuration from the given file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read config: {}", e)))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        if let Some(message) = config.remote.validate_url() {
            return Err(Error::Config(message));
        }
        Ok(config)
    }

    /// Loads configuration, falling back to defaults when the file is absent.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Config::default())
        }
    }

    /// Saves configuration to the given file, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Path of the listing cache.
    pub fn db_path(&self) -> PathBuf {
        match &self.database {
            Some(path) => path.clone(),
            None => dirs::data_dir()
                .map(|dir| dir.join(APP_DIR_NAME))
                .unwrap_or_else(|| PathBuf::from(".shelter"))
                .join(DB_FILE_NAME),
        }
    }
}

/// Default location of the config file.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from(".shelter"))
        .join(CONFIG_FILE_NAME)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
