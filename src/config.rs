//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application
//! configuration in TOML format with platform-specific directory
//! resolution.

use crate::constants::APP_NAME;
use crate::generator::Tool;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

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

impl ThemeMode {
    /// Lowercase mode name used by the CLI.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Parses a mode name, falling back to `Auto`.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "dark" => Self::Dark,
            "light" => Self::Light,
            _ => Self::Auto,
        }
    }
}

/// UI preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UiConfig {
    /// Theme mode preference
    #[serde(default)]
    pub theme: ThemeMode,
    /// Tool selected when the application starts
    #[serde(default)]
    pub default_tool: Tool,
}

/// Export settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Directory exported files are written to
    pub output_dir: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        // Fall back to the working directory when no config dir resolves
        let output_dir = Config::config_dir()
            .map(|dir| dir.join("exports"))
            .unwrap_or_else(|_| PathBuf::from("."));

        Self { output_dir }
    }
}

/// Application configuration persisted as `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
    /// Export settings
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the platform-specific config directory path.
    ///
    /// - Linux: `~/.config/DesignForge/`
    /// - macOS: `~/Library/Application Support/DesignForge/`
    /// - Windows: `%APPDATA%\DesignForge\`
    ///
    /// The `DESIGNFORGE_CONFIG_DIR` environment variable overrides the
    /// platform default, which test harnesses use for isolation.
    pub fn config_dir() -> Result<PathBuf> {
        if let Ok(dir) = std::env::var("DESIGNFORGE_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_NAME);

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
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save(&self) -> Result<()> {
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        let content =
            toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, &config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::new();
        assert_eq!(config.ui.theme, ThemeMode::Auto);
        assert_eq!(config.ui.default_tool, Tool::Grid);
    }

    #[test]
    fn test_theme_mode_from_name_fallback() {
        assert_eq!(ThemeMode::from_name("dark"), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_name("Light"), ThemeMode::Light);
        assert_eq!(ThemeMode::from_name("sepia"), ThemeMode::Auto);
    }

    #[test]
    fn test_config_round_trips_through_toml() {
        let mut config = Config::new();
        config.ui.theme = ThemeMode::Dark;
        config.ui.default_tool = Tool::Button;
        config.export.output_dir = PathBuf::from("/tmp/designforge");

        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_empty_file_parses_to_defaults() {
        let parsed: Config = toml::from_str("").unwrap();
        assert_eq!(parsed, Config::new());
    }

    #[test]
    fn test_partial_file_fills_missing_sections() {
        let parsed: Config = toml::from_str("[ui]\ntheme = \"Dark\"\n").unwrap();
        assert_eq!(parsed.ui.theme, ThemeMode::Dark);
        assert_eq!(parsed.ui.default_tool, Tool::Grid);
        assert_eq!(parsed.export, ExportConfig::default());
    }
}
