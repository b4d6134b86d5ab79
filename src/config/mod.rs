// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[calendar]` - Fallback year and archive location
//! - `[display]` - Zoom step sizes
//! - `[network]` - Download timeout, cache budget and prefetching
//!
//! Viewer state (current page, zoom, flip) is never written here.
//!
//! # Examples
//!
//! ```no_run
//! use tithi_lens::config;
//!
//! let (mut config, _warning) = config::load();
//! config.general.language = Some("hi".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::calendar::{Catalog, DEFAULT_ARCHIVE_ROOT, DEFAULT_FALLBACK_YEAR};
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Warning key reported when an existing config file cannot be parsed.
pub const CONFIG_LOAD_WARNING: &str = "notification-config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "hi").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Calendar catalog settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarConfig {
    /// Year shown when the current year has no artwork.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_year: Option<i32>,

    /// Alternative archive root (mirror) for the calendar images.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archive_root: Option<String>,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            fallback_year: Some(DEFAULT_FALLBACK_YEAR),
            archive_root: None,
        }
    }
}

/// Zoom behaviour settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Scale change of the zoom in/out buttons.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zoom_step: Option<f32>,

    /// Scale change per mouse wheel notch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wheel_zoom_step: Option<f32>,

    /// Scale reached by double-tapping an un-zoomed page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub double_tap_scale: Option<f32>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            zoom_step: Some(DEFAULT_ZOOM_STEP),
            wheel_zoom_step: Some(DEFAULT_WHEEL_ZOOM_STEP),
            double_tap_scale: Some(DEFAULT_DOUBLE_TAP_SCALE),
        }
    }
}

/// Image download settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NetworkConfig {
    /// Timeout for a single image download, in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,

    /// In-memory image cache budget, in megabytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_size_mb: Option<u32>,

    /// Download neighbouring pages in the background.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefetch_adjacent: Option<bool>,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: Some(DEFAULT_REQUEST_TIMEOUT_SECS),
            cache_size_mb: Some(DEFAULT_CACHE_SIZE_MB),
            prefetch_adjacent: Some(true),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub calendar: CalendarConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub network: NetworkConfig,
}

impl Config {
    /// Builds the calendar catalog described by the `[calendar]` section.
    #[must_use]
    pub fn catalog(&self) -> Catalog {
        Catalog::new(
            self.calendar
                .archive_root
                .as_deref()
                .unwrap_or(DEFAULT_ARCHIVE_ROOT),
            self.calendar.fallback_year.unwrap_or(DEFAULT_FALLBACK_YEAR),
        )
    }

    /// Zoom button step, clamped to the supported range.
    #[must_use]
    pub fn zoom_step(&self) -> f32 {
        self.display
            .zoom_step
            .unwrap_or(DEFAULT_ZOOM_STEP)
            .clamp(MIN_ZOOM_STEP, MAX_ZOOM_STEP)
    }

    /// Wheel zoom step, clamped to the supported range.
    #[must_use]
    pub fn wheel_zoom_step(&self) -> f32 {
        self.display
            .wheel_zoom_step
            .unwrap_or(DEFAULT_WHEEL_ZOOM_STEP)
            .clamp(MIN_WHEEL_ZOOM_STEP, MAX_WHEEL_ZOOM_STEP)
    }

    /// Double-tap target scale, kept strictly above the snap-back threshold.
    #[must_use]
    pub fn double_tap_scale(&self) -> f32 {
        self.display
            .double_tap_scale
            .unwrap_or(DEFAULT_DOUBLE_TAP_SCALE)
            .clamp(SNAP_BACK_SCALE + MIN_ZOOM_STEP, MAX_ZOOM_SCALE)
    }

    /// Download timeout, clamped to the supported range.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        let secs = self
            .network
            .request_timeout_secs
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
            .clamp(MIN_REQUEST_TIMEOUT_SECS, MAX_REQUEST_TIMEOUT_SECS);
        Duration::from_secs(secs)
    }

    /// Image cache budget in bytes.
    #[must_use]
    pub fn cache_size_bytes(&self) -> usize {
        let mb = self
            .network
            .cache_size_mb
            .unwrap_or(DEFAULT_CACHE_SIZE_MB)
            .clamp(MIN_CACHE_SIZE_MB, MAX_CACHE_SIZE_MB);
        mb as usize * 1024 * 1024
    }

    #[must_use]
    pub fn prefetch_adjacent(&self) -> bool {
        self.network.prefetch_adjacent.unwrap_or(true)
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir(base_dir).map(|mut path| {
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
/// default config with a warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => {
                    tracing::info!(path = %path.display(), "Loaded settings");
                    return (config, None);
                }
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "Ignoring unreadable settings");
                    return (Config::default(), Some(CONFIG_LOAD_WARNING.to_string()));
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
    use crate::test_utils::assert_abs_diff_eq;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("hi".to_string()),
                theme_mode: ThemeMode::Light,
            },
            calendar: CalendarConfig {
                fallback_year: Some(2025),
                archive_root: Some("https://mirror.example.org".to_string()),
            },
            display: DisplayConfig {
                zoom_step: Some(0.25),
                wheel_zoom_step: Some(0.1),
                double_tap_scale: Some(3.0),
            },
            network: NetworkConfig {
                request_timeout_secs: Some(10),
                cache_size_mb: Some(32),
                prefetch_adjacent: Some(false),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[general\nlanguage = ")
            .expect("failed to write corrupted file");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some(CONFIG_LOAD_WARNING));
    }

    #[test]
    fn save_with_override_and_load_with_override_round_trip() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let mut config = Config::default();
        config.general.language = Some("en-US".to_string());
        config.general.theme_mode = ThemeMode::Dark;

        save_with_override(&config, Some(temp_dir.path().to_path_buf()))
            .expect("failed to save config");
        let (loaded, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert!(warning.is_none());
        assert_eq!(loaded.general.language.as_deref(), Some("en-US"));
        assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn missing_sections_use_defaults() {
        let config: Config = toml::from_str("[general]\nlanguage = \"hi\"\n").unwrap();
        assert_eq!(config.general.language.as_deref(), Some("hi"));
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(config.calendar, CalendarConfig::default());
        assert_eq!(config.network, NetworkConfig::default());
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config = Config {
            display: DisplayConfig {
                zoom_step: Some(9.0),
                wheel_zoom_step: Some(0.0),
                double_tap_scale: Some(1.0),
            },
            network: NetworkConfig {
                request_timeout_secs: Some(1),
                cache_size_mb: Some(100_000),
                prefetch_adjacent: None,
            },
            ..Config::default()
        };

        assert_abs_diff_eq!(config.zoom_step(), MAX_ZOOM_STEP);
        assert_abs_diff_eq!(config.wheel_zoom_step(), MIN_WHEEL_ZOOM_STEP);
        assert!(config.double_tap_scale() > SNAP_BACK_SCALE);
        assert_eq!(
            config.request_timeout(),
            Duration::from_secs(MIN_REQUEST_TIMEOUT_SECS)
        );
        assert_eq!(
            config.cache_size_bytes(),
            MAX_CACHE_SIZE_MB as usize * 1024 * 1024
        );
        assert!(config.prefetch_adjacent());
    }

    #[test]
    fn catalog_honours_calendar_section() {
        let mut config = Config::default();
        config.calendar.fallback_year = Some(2023);
        config.calendar.archive_root = Some("https://mirror.example.org/".to_string());

        let catalog = config.catalog();
        assert_eq!(catalog.fallback_year(), 2023);
        assert_eq!(catalog.archive_root(), "https://mirror.example.org");
    }

    #[test]
    fn theme_mode_serializes_lowercase() {
        let mut config = Config::default();
        config.general.theme_mode = ThemeMode::Light;
        let content = toml::to_string_pretty(&config).unwrap();
        assert!(content.contains("theme_mode = \"light\""));
    }
}
