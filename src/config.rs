// 🛠️ Config - JSON settings file with per-field defaults
//
// A missing file is created with defaults. A malformed one is reported and
// ignored. Unknown keys are ignored, missing keys take their default.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub const DEFAULT_CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where the address book is stored.
    pub data_file: PathBuf,
    /// Log destination in terminal-view mode.
    pub log_file: PathBuf,
    /// `tracing` filter directive, overridden by `RUST_LOG`.
    pub log_level: String,
    pub theme: Theme,
    pub server_addr: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_file: PathBuf::from("data").join("addressbook.json"),
            log_file: PathBuf::from("tutortrack.log"),
            log_level: "info".to_string(),
            theme: Theme::Dark,
            server_addr: "127.0.0.1:3000".to_string(),
        }
    }
}

/// How `Config::load_or_default` arrived at its result. Call `report` after
/// the subscriber is installed.
#[derive(Debug)]
pub enum ConfigSource {
    File,
    Created,
    /// Missing, and the default could not be written.
    Unsaved(anyhow::Error),
    /// Present but unreadable or malformed.
    Fallback(anyhow::Error),
}

impl ConfigSource {
    pub fn report(&self, path: &Path) {
        match self {
            ConfigSource::File => debug!(path = %path.display(), "config loaded"),
            ConfigSource::Created => info!(path = %path.display(), "created default config file"),
            ConfigSource::Unsaved(e) => {
                warn!(path = %path.display(), error = %format!("{e:#}"), "could not write default config")
            }
            ConfigSource::Fallback(e) => {
                warn!(path = %path.display(), error = %format!("{e:#}"), "config unusable, using defaults")
            }
        }
    }
}

impl Config {
    /// Loads `path`, falling back to defaults when it is missing or unusable.
    /// A missing file is written back so the user has something to edit.
    pub fn load_or_default(path: &Path) -> (Config, ConfigSource) {
        if !path.exists() {
            let config = Config::default();
            let source = match config.save(path) {
                Ok(()) => ConfigSource::Created,
                Err(e) => ConfigSource::Unsaved(e),
            };
            return (config, source);
        }

        match Config::load(path) {
            Ok(config) => (config, ConfigSource::File),
            Err(e) => (Config::default(), ConfigSource::Fallback(e)),
        }
    }

    pub fn load(path: &Path) -> Result<Config> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config JSON: {}", path.display()))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }
}
