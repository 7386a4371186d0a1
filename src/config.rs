//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::sync::css::DEFAULT_STYLE_TAG_ID;

/// Environment variable overriding the configuration directory.
pub const CONFIG_DIR_ENV: &str = "KITSYNC_CONFIG_DIR";

/// Directory name used under the platform config directory.
const APP_DIR_NAME: &str = "KitSync";

/// Store locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PathConfig {
    /// Theme settings JSON file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_settings: Option<PathBuf>,
    /// Style kit JSON file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style_kit: Option<PathBuf>,
    /// Directory of compiled CSS cleared after each write
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style_cache: Option<PathBuf>,
}

/// Sync and rendering preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncConfig {
    /// `id` attribute of the emitted `<style>` element
    #[serde(default = "default_style_tag_id")]
    pub style_tag_id: String,
}

fn default_style_tag_id() -> String {
    DEFAULT_STYLE_TAG_ID.to_string()
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            style_tag_id: default_style_tag_id(),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/KitSync/config.toml`
/// - macOS: `~/Library/Application Support/KitSync/config.toml`
/// - Windows: `%APPDATA%\KitSync\config.toml`
///
/// Setting `KITSYNC_CONFIG_DIR` replaces the directory on every platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Store locations
    #[serde(default)]
    pub paths: PathConfig,
    /// Sync preferences
    #[serde(default)]
    pub sync: SyncConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from a specific file.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    pub fn save(&self) -> Result<()> {
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to a specific file.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        self.validate()?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    ///
    /// Checks:
    /// - settings and kit paths, when set, do not point at directories
    /// - the cache path, when set and present, is a directory
    /// - `style_tag_id` is a non-empty identifier (letters, digits, `-`, `_`)
    pub fn validate(&self) -> Result<()> {
        for (label, path) in [
            ("Theme settings", &self.paths.source_settings),
            ("Style kit", &self.paths.style_kit),
        ] {
            if let Some(path) = path {
                if path.is_dir() {
                    anyhow::bail!("{} path is a directory: {}", label, path.display());
                }
            }
        }

        if let Some(cache) = &self.paths.style_cache {
            if cache.exists() && !cache.is_dir() {
                anyhow::bail!("Style cache path is not a directory: {}", cache.display());
            }
        }

        let id = &self.sync.style_tag_id;
        if id.is_empty()
            || !id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            anyhow::bail!(
                "Invalid style tag id '{}': use letters, digits, '-' or '_'",
                id
            );
        }

        Ok(())
    }
}
