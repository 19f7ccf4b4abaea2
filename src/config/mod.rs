// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! A malformed or unreadable file never aborts startup: [`load`] falls back to
//! defaults and reports a warning key the caller can surface as a notification.

mod defaults;

pub use defaults::DEFAULT_ENDPOINT;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedCaption";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Preferred UI locale in BCP-47 form (e.g. `fr`, `en-US`).
    pub language: Option<String>,
    /// URL of the captioning service.
    #[serde(default)]
    pub endpoint: Option<String>,
}

impl Config {
    /// Returns the configured captioning endpoint, or the built-in default.
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration, falling back to defaults on any failure.
///
/// Returns the config together with an optional i18n warning key describing
/// why defaults were used.
pub fn load() -> (Config, Option<&'static str>) {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return match load_from_path(&path) {
                Ok(config) => (config, None),
                Err(_) => (Config::default(), Some("notification-config-load-error")),
            };
        }
    }
    (Config::default(), None)
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config = toml::from_str(&content)?;
    Ok(config)
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
