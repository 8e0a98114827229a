// SPDX-License-Identifier: MPL-2.0
//! This module handles the gallery's configuration, loaded from a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[server]` - Media server address and request timeout
//! - `[view]` - Page size, bucket display cap, busy-day threshold, day boundary
//! - `[scan]` - Default directory for rescans
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` CLI argument or `SMART_GALLERY_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use smart_gallery::app::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, warning) = config::load();
//! if let Some(warning) = warning {
//!     eprintln!("{warning}");
//! }
//! println!("server: {}", config.base_url());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::media::DayBoundary;
use crate::domain::ui::{BusyDayThreshold, DisplayCap, PageSize};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Media server settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerConfig {
    /// Base URL of the media server (e.g., `http://127.0.0.1:8000`).
    #[serde(default = "default_base_url", skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Per-request timeout in seconds.
    #[serde(
        default = "default_timeout_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub timeout_secs: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Timeline and detail view settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViewConfig {
    /// Items added to the timeline per page.
    #[serde(default = "default_page_size", skip_serializing_if = "Option::is_none")]
    pub page_size: Option<usize>,

    /// Items shown in a collapsed date bucket.
    #[serde(
        default = "default_display_cap",
        skip_serializing_if = "Option::is_none"
    )]
    pub display_cap: Option<usize>,

    /// A bucket with more items than this is flagged as a busy day.
    #[serde(
        default = "default_busy_day_threshold",
        skip_serializing_if = "Option::is_none"
    )]
    pub busy_day_threshold: Option<usize>,

    /// Which clock cuts calendar days.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_boundary: Option<DayBoundary>,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            display_cap: default_display_cap(),
            busy_day_threshold: default_busy_day_threshold(),
            day_boundary: Some(DayBoundary::default()),
        }
    }
}

/// Rescan settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ScanConfig {
    /// Directory scanned when none is given explicitly.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<String>,
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Gallery configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub view: ViewConfig,

    #[serde(default)]
    pub scan: ScanConfig,
}

impl Config {
    /// Server base URL, falling back to the default.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.server
            .base_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or(DEFAULT_BASE_URL)
    }

    /// Request timeout, clamped to the supported range.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        let secs = self
            .server
            .timeout_secs
            .unwrap_or(DEFAULT_TIMEOUT_SECS)
            .clamp(MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS);
        Duration::from_secs(secs)
    }

    #[must_use]
    pub fn page_size(&self) -> PageSize {
        self.view.page_size.map(PageSize::new).unwrap_or_default()
    }

    #[must_use]
    pub fn display_cap(&self) -> DisplayCap {
        self.view.display_cap.map(DisplayCap::new).unwrap_or_default()
    }

    #[must_use]
    pub fn busy_day_threshold(&self) -> BusyDayThreshold {
        self.view
            .busy_day_threshold
            .map(BusyDayThreshold::new)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn day_boundary(&self) -> DayBoundary {
        self.view.day_boundary.unwrap_or_default()
    }

    /// Default rescan directory, if one is configured.
    #[must_use]
    pub fn scan_directory(&self) -> Option<&str> {
        self.scan
            .directory
            .as_deref()
            .filter(|dir| !dir.trim().is_empty())
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

#[allow(clippy::unnecessary_wraps)]
fn default_base_url() -> Option<String> {
    Some(DEFAULT_BASE_URL.to_string())
}

#[allow(clippy::unnecessary_wraps)]
fn default_timeout_secs() -> Option<u64> {
    Some(DEFAULT_TIMEOUT_SECS)
}

#[allow(clippy::unnecessary_wraps)]
fn default_page_size() -> Option<usize> {
    Some(DEFAULT_PAGE_SIZE)
}

#[allow(clippy::unnecessary_wraps)]
fn default_display_cap() -> Option<usize> {
    Some(DEFAULT_DISPLAY_CAP)
}

#[allow(clippy::unnecessary_wraps)]
fn default_busy_day_threshold() -> Option<usize> {
    Some(DEFAULT_BUSY_DAY_THRESHOLD)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

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
/// Returns a tuple of (config, optional warning). A missing file yields the
/// defaults silently; an unreadable or invalid one yields the defaults plus a
/// warning explaining what went wrong.
#[must_use]
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
#[must_use]
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = get_config_path_with_override(base_dir) else {
        return (Config::default(), None);
    };
    if !path.exists() {
        log::debug!("no config at {}, using defaults", path.display());
        return (Config::default(), None);
    }

    match load_from_path(&path) {
        Ok(config) => {
            log::debug!("loaded config from {}", path.display());
            (config, None)
        }
        Err(err) => {
            let warning = format!("{} is invalid, using defaults: {err}", path.display());
            log::warn!("{warning}");
            (Config::default(), Some(warning))
        }
    }
}

/// Loads configuration from a specific path.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid TOML.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves configuration to a specific path, creating parent directories.
///
/// # Errors
///
/// Returns an error if the directory or file cannot be written.
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
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            server: ServerConfig {
                base_url: Some("http://nas.local:8000".to_string()),
                timeout_secs: Some(5),
            },
            view: ViewConfig {
                page_size: Some(24),
                display_cap: Some(4),
                busy_day_threshold: Some(10),
                day_boundary: Some(DayBoundary::FixedOffset(540)),
            },
            scan: ScanConfig {
                directory: Some("/photos".to_string()),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.base_url(), "http://127.0.0.1:8000");
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert_eq!(config.page_size().value(), 50);
        assert_eq!(config.display_cap().value(), 6);
        assert_eq!(config.busy_day_threshold().value(), 20);
        assert_eq!(config.day_boundary(), DayBoundary::Local);
        assert!(config.scan_directory().is_none());
    }

    #[test]
    fn missing_sections_use_defaults() {
        let config: Config = toml::from_str("[view]\npage_size = 10\n").expect("valid toml");
        assert_eq!(config.page_size().value(), 10);
        assert_eq!(config.display_cap().value(), 6);
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config: Config = toml::from_str(
            "[server]\ntimeout_secs = 0\n[view]\npage_size = 0\ndisplay_cap = 5000\n",
        )
        .expect("valid toml");
        assert_eq!(config.timeout(), Duration::from_secs(MIN_TIMEOUT_SECS));
        assert_eq!(config.page_size().value(), 1);
        assert_eq!(config.display_cap().value(), 100);
    }

    #[test]
    fn day_boundary_reads_all_forms() {
        let utc: Config = toml::from_str("[view]\nday_boundary = \"utc\"\n").expect("valid");
        assert_eq!(utc.day_boundary(), DayBoundary::Utc);

        let fixed: Config =
            toml::from_str("[view]\nday_boundary = { fixed-offset = -300 }\n").expect("valid");
        assert_eq!(fixed.day_boundary(), DayBoundary::FixedOffset(-300));
    }

    #[test]
    fn blank_values_fall_back() {
        let config: Config =
            toml::from_str("[server]\nbase_url = \"  \"\n[scan]\ndirectory = \"\"\n").expect("valid");
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert!(config.scan_directory().is_none());
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[view\npage_size = ").expect("write");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {other:?}"),
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
        fs::write(temp_dir.path().join(CONFIG_FILE), "page_size = [").expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_some_and(|text| text.contains("using defaults")));
    }

    #[test]
    fn load_with_override_reads_settings_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(
            temp_dir.path().join(CONFIG_FILE),
            "[scan]\ndirectory = \"/media/camera\"\n",
        )
        .expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert_eq!(config.scan_directory(), Some("/media/camera"));
    }
}
