// SPDX-License-Identifier: MPL-2.0
//! This module handles the toast configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use iced_toasts::config::{self, Config};
//! use iced_toasts::notifications::Position;
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.position = Some(Position::TopRight);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_file = PathBuf::from("./temp_config_dir/test_settings.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded_config = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded_config.position, Some(Position::TopRight));
//! ```

pub mod defaults;

use crate::error::Result;
use crate::notifications::{EngineOptions, Position, ToastDuration};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::warn;

pub use defaults::{
    DEFAULT_ENTER_MS, DEFAULT_EXIT_MS, DEFAULT_MAX_QUEUED, DEFAULT_MAX_VISIBLE,
    DEFAULT_TOAST_DURATION_MS,
};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedToasts";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub duration_ms: Option<u64>,
    #[serde(default)]
    pub enter_ms: Option<u64>,
    #[serde(default)]
    pub exit_ms: Option<u64>,
    #[serde(default)]
    pub position: Option<Position>,
    #[serde(default)]
    pub max_visible: Option<usize>,
    #[serde(default)]
    pub max_queued: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            duration_ms: Some(DEFAULT_TOAST_DURATION_MS),
            enter_ms: Some(DEFAULT_ENTER_MS),
            exit_ms: Some(DEFAULT_EXIT_MS),
            position: Some(Position::default()),
            max_visible: Some(DEFAULT_MAX_VISIBLE),
            max_queued: Some(DEFAULT_MAX_QUEUED),
        }
    }
}

impl Config {
    /// Builds engine options, filling unset fields with defaults and
    /// clamping out-of-range values.
    #[must_use]
    pub fn engine_options(&self) -> EngineOptions {
        EngineOptions {
            duration: ToastDuration::from_millis(
                self.duration_ms.unwrap_or(DEFAULT_TOAST_DURATION_MS),
            ),
            enter_duration: Duration::from_millis(self.enter_ms.unwrap_or(DEFAULT_ENTER_MS)),
            exit_duration: Duration::from_millis(self.exit_ms.unwrap_or(DEFAULT_EXIT_MS)),
            position: self.position.unwrap_or_default(),
            max_visible: self.max_visible.unwrap_or(DEFAULT_MAX_VISIBLE),
            max_queued: self.max_queued.unwrap_or(DEFAULT_MAX_QUEUED),
        }
        .normalized()
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Reads a config file. Unparsable content falls back to defaults.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            warn!("Ignoring invalid config {}: {}", path.display(), err);
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
