// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language and theme mode
//! - `[alerts]` - Toast cap and journal retention
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `GRID_SENTRY_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use grid_sentry::app::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.general.language = Some("fr".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Alert presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AlertsConfig {
    /// Maximum number of simultaneously visible toasts.
    #[serde(default = "default_max_active", skip_serializing_if = "Option::is_none")]
    pub max_active: Option<u32>,

    /// Number of journal entries kept in memory.
    #[serde(
        default = "default_journal_capacity",
        skip_serializing_if = "Option::is_none"
    )]
    pub journal_capacity: Option<u32>,
}

impl AlertsConfig {
    /// The toast cap to actually use, clamped to the supported range.
    ///
    /// Values outside `MIN_MAX_ACTIVE..=MAX_MAX_ACTIVE` in the config file
    /// are pulled back into range rather than rejected.
    #[must_use]
    pub fn effective_max_active(&self) -> usize {
        self.max_active
            .unwrap_or(DEFAULT_MAX_ACTIVE)
            .clamp(MIN_MAX_ACTIVE, MAX_MAX_ACTIVE) as usize
    }

    /// The journal retention to actually use, clamped to the supported range.
    #[must_use]
    pub fn effective_journal_capacity(&self) -> usize {
        self.journal_capacity
            .unwrap_or(DEFAULT_JOURNAL_CAPACITY)
            .clamp(MIN_JOURNAL_CAPACITY, MAX_JOURNAL_CAPACITY) as usize
    }
}

impl Default for AlertsConfig {
    fn default() -> Self {
        Self {
            max_active: default_max_active(),
            journal_capacity: default_journal_capacity(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Alert presentation settings.
    #[serde(default)]
    pub alerts: AlertsConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_max_active() -> Option<u32> {
    Some(DEFAULT_MAX_ACTIVE)
}

fn default_journal_capacity() -> Option<u32> {
    Some(DEFAULT_JOURNAL_CAPACITY)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning key explaining what went wrong. The key is
/// an i18n key so the caller can surface the warning as a toast.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(_) => {
                    return (Config::default(), Some("config-load-warning".to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            alerts: AlertsConfig {
                max_active: Some(4),
                journal_capacity: Some(50),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.general.language, config.general.language);
        assert_eq!(loaded.general.theme_mode, config.general.theme_mode);
        assert_eq!(loaded.alerts.max_active, Some(4));
        assert_eq!(loaded.alerts.journal_capacity, Some(50));
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(message)) => assert!(message.contains("expected")),
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let nested_dir = temp_dir.path().join("deep").join("path");
        let config_path = nested_dir.join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.language, None);
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(config.alerts.max_active, Some(DEFAULT_MAX_ACTIVE));
        assert_eq!(
            config.alerts.journal_capacity,
            Some(DEFAULT_JOURNAL_CAPACITY)
        );
    }

    #[test]
    fn effective_values_clamp_out_of_range_settings() {
        let low = AlertsConfig {
            max_active: Some(0),
            journal_capacity: Some(1),
        };
        assert_eq!(low.effective_max_active(), MIN_MAX_ACTIVE as usize);
        assert_eq!(
            low.effective_journal_capacity(),
            MIN_JOURNAL_CAPACITY as usize
        );

        let high = AlertsConfig {
            max_active: Some(10_000),
            journal_capacity: Some(10_000),
        };
        assert_eq!(high.effective_max_active(), MAX_MAX_ACTIVE as usize);
        assert_eq!(
            high.effective_journal_capacity(),
            MAX_JOURNAL_CAPACITY as usize
        );
    }

    #[test]
    fn effective_values_fall_back_to_defaults_when_absent() {
        let alerts = AlertsConfig {
            max_active: None,
            journal_capacity: None,
        };
        assert_eq!(alerts.effective_max_active(), DEFAULT_MAX_ACTIVE as usize);
        assert_eq!(
            alerts.effective_journal_capacity(),
            DEFAULT_JOURNAL_CAPACITY as usize
        );
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config: Config = toml::from_str("[general]\nlanguage = \"fr\"\n")
            .expect("partial config should parse");

        assert_eq!(config.general.language, Some("fr".to_string()));
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(config.alerts.max_active, Some(DEFAULT_MAX_ACTIVE));
    }

    #[test]
    fn invalid_theme_mode_is_a_config_error() {
        let result: std::result::Result<Config, _> =
            toml::from_str("[general]\ntheme_mode = \"sepia\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn theme_mode_parsing_is_case_insensitive() {
        let config: Config = toml::from_str("[general]\ntheme_mode = \"DARK\"\n")
            .expect("uppercase theme mode should parse");
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn load_with_override_missing_file_returns_defaults_without_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn load_with_override_corrupt_file_returns_defaults_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&config_path, "{{{{").expect("failed to write corrupt file");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("config-load-warning"));
    }

    #[test]
    fn save_with_override_and_load_with_override_round_trip() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let config = Config {
            general: GeneralConfig {
                language: Some("en-US".to_string()),
                theme_mode: ThemeMode::Dark,
            },
            alerts: AlertsConfig {
                max_active: Some(12),
                journal_capacity: Some(500),
            },
        };

        save_with_override(&config, Some(base_dir.clone())).expect("failed to save config");
        let (loaded, warning) = load_with_override(Some(base_dir));

        assert!(warning.is_none());
        assert_eq!(loaded, config);
    }
}
