// SPDX-License-Identifier: MPL-2.0
//! Loading and saving user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[playback]` - Seek step for skip buttons and arrow keys
//! - `[history]` - Watch-history cap and write-suppression threshold
//! - `[controls]` - Overlay auto-hide timeout and toast duration
//!
//! A missing file yields defaults silently; an unreadable or unparsable
//! file yields defaults plus a warning the shell shows as a toast.
//!
//! # Path Resolution
//!
//! 1. `load_from_path()`/`save_to_path()` with an explicit path
//! 2. `--config-dir` CLI flag
//! 3. `ICED_CUE_CONFIG_DIR` environment variable
//! 4. Platform-specific config directory

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Playback settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct PlaybackConfig {
    /// Relative seek step in seconds (skip buttons, arrow keys).
    #[serde(
        default = "default_seek_step_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub seek_step_secs: Option<f64>,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            seek_step_secs: default_seek_step_secs(),
        }
    }
}

/// Watch-history settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct HistoryConfig {
    /// Maximum number of entries kept.
    #[serde(default = "default_history_cap", skip_serializing_if = "Option::is_none")]
    pub cap: Option<usize>,

    /// Minimum position delta in seconds before a resume position is
    /// written back to the store.
    #[serde(
        default = "default_history_write_threshold",
        skip_serializing_if = "Option::is_none"
    )]
    pub write_threshold_secs: Option<f64>,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            cap: default_history_cap(),
            write_threshold_secs: default_history_write_threshold(),
        }
    }
}

/// Control-overlay settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct ControlsConfig {
    /// Auto-hide timeout for the control overlay while playing (seconds).
    #[serde(
        default = "default_hide_timeout_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub hide_timeout_secs: Option<u64>,

    /// Toast notification duration (milliseconds).
    #[serde(
        default = "default_notification_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub notification_duration_ms: Option<u64>,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            hide_timeout_secs: default_hide_timeout_secs(),
            notification_duration_ms: default_notification_duration_ms(),
        }
    }
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub playback: PlaybackConfig,

    #[serde(default)]
    pub history: HistoryConfig,

    #[serde(default)]
    pub controls: ControlsConfig,
}

impl Config {
    /// Seek step with the configured value clamped to the supported range.
    #[must_use]
    pub fn seek_step_secs(&self) -> f64 {
        self.playback
            .seek_step_secs
            .unwrap_or(DEFAULT_SEEK_STEP_SECS)
            .clamp(MIN_SEEK_STEP_SECS, MAX_SEEK_STEP_SECS)
    }

    #[must_use]
    pub fn history_cap(&self) -> usize {
        self.history.cap.unwrap_or(DEFAULT_HISTORY_CAP).max(1)
    }

    #[must_use]
    pub fn history_write_threshold_secs(&self) -> f64 {
        self.history
            .write_threshold_secs
            .unwrap_or(DEFAULT_HISTORY_WRITE_THRESHOLD_SECS)
            .max(0.0)
    }

    #[must_use]
    pub fn controls_hide_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(
            self.controls
                .hide_timeout_secs
                .unwrap_or(DEFAULT_CONTROLS_HIDE_TIMEOUT_SECS),
        )
    }

    #[must_use]
    pub fn notification_duration(&self) -> std::time::Duration {
        std::time::Duration::from_millis(
            self.controls
                .notification_duration_ms
                .unwrap_or(DEFAULT_NOTIFICATION_DURATION_MS),
        )
    }
}

fn default_seek_step_secs() -> Option<f64> {
    Some(DEFAULT_SEEK_STEP_SECS)
}

fn default_history_cap() -> Option<usize> {
    Some(DEFAULT_HISTORY_CAP)
}

fn default_history_write_threshold() -> Option<f64> {
    Some(DEFAULT_HISTORY_WRITE_THRESHOLD_SECS)
}

fn default_hide_timeout_secs() -> Option<u64> {
    Some(DEFAULT_CONTROLS_HIDE_TIMEOUT_SECS)
}

fn default_notification_duration_ms() -> Option<u64> {
    Some(DEFAULT_NOTIFICATION_DURATION_MS)
}

/// Loads the configuration from the default location.
///
/// Returns the config plus an optional warning message. A missing file
/// is not a warning; an unreadable or unparsable one is, and yields
/// defaults.
pub fn load() -> (Config, Option<String>) {
    let Some(path) = config_file_path(None) else {
        return (Config::default(), None);
    };
    if !path.exists() {
        return (Config::default(), None);
    }
    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(err) => {
            tracing::warn!(?path, %err, "falling back to default settings");
            (
                Config::default(),
                Some("Could not read settings; using defaults".to_string()),
            )
        }
    }
}

/// Loads the configuration from an explicit file path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)?;
    Ok(toml::from_str(&contents)?)
}

/// Saves the configuration to the default location, creating the config
/// directory if needed.
pub fn save(config: &Config) -> Result<()> {
    let Some(path) = config_file_path(None) else {
        return Err(crate::error::Error::Config(
            "config directory could not be determined".into(),
        ));
    };
    save_to_path(config, &path)
}

/// Saves the configuration to an explicit file path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let contents = toml::to_string_pretty(config)?;
    fs::write(path, contents)?;
    Ok(())
}

fn config_file_path(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;
    use tempfile::tempdir;

    #[test]
    fn default_config_round_trips_through_toml() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join(CONFIG_FILE);

        let config = Config::default();
        save_to_path(&config, &path).expect("save config");
        let loaded = load_from_path(&path).expect("load config");

        assert_eq!(config, loaded);
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "[playback]\nseek-step-secs = 10.0\n").expect("write");

        let loaded = load_from_path(&path).expect("load config");

        assert_abs_diff_eq!(loaded.seek_step_secs(), 10.0);
        assert_eq!(loaded.history_cap(), DEFAULT_HISTORY_CAP);
    }

    #[test]
    fn corrupt_file_is_a_load_error() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "this is not toml {{{{").expect("write");

        assert!(load_from_path(&path).is_err());
    }

    #[test]
    fn seek_step_is_clamped_to_supported_range() {
        let mut config = Config::default();
        config.playback.seek_step_secs = Some(10_000.0);
        assert_abs_diff_eq!(config.seek_step_secs(), MAX_SEEK_STEP_SECS);

        config.playback.seek_step_secs = Some(0.0);
        assert_abs_diff_eq!(config.seek_step_secs(), MIN_SEEK_STEP_SECS);
    }

    #[test]
    fn history_cap_never_drops_to_zero() {
        let mut config = Config::default();
        config.history.cap = Some(0);
        assert_eq!(config.history_cap(), 1);
    }
}
