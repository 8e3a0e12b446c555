//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application
//! configuration in TOML format with platform-specific directory
//! resolution. Every field is optional in the file; defaults preserve
//! the out-of-the-box behavior.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::constants::{APP_CONFIG_DIR, DEFAULT_COLOR, DEFAULT_EXPORT_FILENAME, DEFAULT_EXPORT_ZOOM};

/// Theme display mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    /// Automatically detect OS theme (dark/light)
    #[default]
    Auto,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

/// UI preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct UiConfig {
    /// Theme display mode
    pub theme_mode: ThemeMode,
}

/// Editor preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Initial display color as a hex string (#RRGGBB)
    pub default_color: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            default_color: DEFAULT_COLOR.to_string(),
        }
    }
}

/// Image export settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Directory exported images are written to; current directory when unset
    pub output_dir: Option<PathBuf>,
    /// Fixed export filename
    pub filename: String,
    /// Scale factor applied to the typeset size
    pub zoom: f32,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: None,
            filename: DEFAULT_EXPORT_FILENAME.to_string(),
            zoom: DEFAULT_EXPORT_ZOOM,
        }
    }
}

impl ExportConfig {
    /// The directory file exports land in.
    #[must_use]
    pub fn resolved_output_dir(&self) -> PathBuf {
        self.output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// UI preferences
    pub ui: UiConfig,
    /// Editor preferences
    pub editor: EditorConfig,
    /// Image export settings
    pub export: ExportConfig,
}

impl Config {
    /// Gets the platform config directory for the application.
    ///
    /// - Linux: `~/.config/texpad/`
    /// - macOS: `~/Library/Application Support/texpad/`
    /// - Windows: `%APPDATA%\texpad\`
    pub fn config_dir() -> Result<PathBuf> {
        let base = dirs::config_dir().context("Could not determine platform config directory")?;
        Ok(base.join(APP_CONFIG_DIR))
    }

    /// Path of the config file.
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Whether a config file exists.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_path().map(|p| p.exists()).unwrap_or(false)
    }

    /// Loads the config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or not valid TOML.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Loads the config, falling back to defaults. Interactive startup
    /// must not fail on a missing or malformed config file; a malformed
    /// file produces a notice for the status bar instead.
    #[must_use]
    pub fn load_or_default() -> (Self, Option<String>) {
        if !Self::exists() {
            return (Self::default(), None);
        }
        match Self::load() {
            Ok(config) => (config, None),
            Err(e) => (
                Self::default(),
                Some(format!("Using default configuration: {e:#}")),
            ),
        }
    }

    /// Saves the config, creating the config directory if needed.
    pub fn save(&self) -> Result<()> {
        let dir = Self::config_dir()?;
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create config directory: {}", dir.display()))?;
        let path = Self::config_path()?;
        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }
}
