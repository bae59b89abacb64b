// SPDX-License-Identifier: MPL-2.0
//! This module handles the frame's configuration, loaded from a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[frame]` - Slideshow timing, media root, compass and shuffle defaults
//! - `[[players]]` - One table per player, in display order
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config FILE` on the command line
//! 3. Set `PI_FRAME_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```
//! let config: pi_frame::config::Config = toml::from_str(r#"
//!     [frame]
//!     slideshow_delay_ms = 8000
//!     compass = "fixed"
//!     rotation = 90.0
//!
//!     [[players]]
//!     name = "family"
//!     kind = "photo"
//!     folder = "family"
//! "#).expect("valid config");
//!
//! assert_eq!(config.frame.slideshow_delay().as_millis(), 8000);
//! assert_eq!(config.players.len(), 1);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

// =============================================================================
// Enums
// =============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    #[default]
    Alphabetical,
    ModifiedDate,
    CreatedDate,
}

/// Where the frame's rotation comes from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum CompassKind {
    /// No sensor: orientation matching is off.
    #[default]
    None,
    /// Manually configured angle (`rotation`).
    Fixed,
    /// Accelerometer on the frame's I2C bus.
    Accelerometer,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum PlayerKind {
    Photo,
    Video,
    Dashboard,
}

// =============================================================================
// Section Structs
// =============================================================================

/// Frame-wide settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FrameConfig {
    /// Delay between slideshow steps, in milliseconds.
    #[serde(default = "default_slideshow_delay_ms")]
    pub slideshow_delay_ms: u64,

    /// Player folders are resolved against this directory.
    #[serde(default = "default_root_folder")]
    pub root_folder: PathBuf,

    #[serde(default)]
    pub compass: CompassKind,

    /// Angle for the fixed compass, in degrees.
    #[serde(default = "default_rotation")]
    pub rotation: f64,

    /// Set when the sensor is mounted upside down.
    #[serde(default)]
    pub flip_rotation: bool,

    /// Shuffle default for players that do not set their own.
    #[serde(default)]
    pub shuffle: bool,

    #[serde(default)]
    pub sort_order: SortOrder,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            slideshow_delay_ms: DEFAULT_SLIDESHOW_DELAY_MS,
            root_folder: default_root_folder(),
            compass: CompassKind::default(),
            rotation: DEFAULT_FIXED_ROTATION,
            flip_rotation: false,
            shuffle: false,
            sort_order: SortOrder::default(),
        }
    }
}

impl FrameConfig {
    /// Slideshow delay clamped to the supported range.
    #[must_use]
    pub fn slideshow_delay(&self) -> Duration {
        Duration::from_millis(
            self.slideshow_delay_ms
                .clamp(MIN_SLIDESHOW_DELAY_MS, MAX_SLIDESHOW_DELAY_MS),
        )
    }
}

/// One player of the frame.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayerConfig {
    pub name: String,
    pub kind: PlayerKind,

    /// Media folder, relative to the frame's root folder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder: Option<PathBuf>,

    /// Overrides the frame-wide shuffle setting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shuffle: Option<bool>,
}

impl PlayerConfig {
    #[must_use]
    pub fn photo(name: &str, folder: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: PlayerKind::Photo,
            folder: Some(PathBuf::from(folder)),
            shuffle: None,
        }
    }

    #[must_use]
    pub fn shuffle_or(&self, frame_default: bool) -> bool {
        self.shuffle.unwrap_or(frame_default)
    }

    /// Full media folder of a photo or video player.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when the player has no folder.
    pub fn folder_path(&self, root: &Path) -> Result<PathBuf> {
        self.folder
            .as_ref()
            .map(|folder| root.join(folder))
            .ok_or_else(|| Error::Config(format!("player '{}' has no folder", self.name)))
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub frame: FrameConfig,

    #[serde(default)]
    pub players: Vec<PlayerConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            frame: FrameConfig::default(),
            players: vec![PlayerConfig::photo("photos", "photos")],
        }
    }
}

impl Config {
    /// Checks what serde cannot: at least one player, and folders where needed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoPlayers`] or [`Error::Config`].
    pub fn validate(&self) -> Result<()> {
        if self.players.is_empty() {
            return Err(Error::NoPlayers);
        }
        for player in &self.players {
            if player.kind != PlayerKind::Dashboard && player.folder.is_none() {
                return Err(Error::Config(format!(
                    "player '{}' needs a folder",
                    player.name
                )));
            }
        }
        Ok(())
    }
}

// =============================================================================
// Default Value Functions (for serde)
// =============================================================================

fn default_slideshow_delay_ms() -> u64 {
    DEFAULT_SLIDESHOW_DELAY_MS
}

fn default_root_folder() -> PathBuf {
    PathBuf::from(DEFAULT_ROOT_FOLDER)
}

fn default_rotation() -> f64 {
    DEFAULT_FIXED_ROTATION
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the resolved default path.
///
/// A missing file yields the default configuration.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load() -> Result<Config> {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_with_override(base_dir: Option<PathBuf>) -> Result<Config> {
    match paths::get_config_file_with_override(base_dir) {
        Some(path) if path.exists() => load_from_path(&path),
        Some(path) => {
            info!(path = %path.display(), "no settings file, using defaults");
            Ok(Config::default())
        }
        None => Ok(Config::default()),
    }
}

/// Loads configuration from a specific path.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read and [`Error::Config`]
/// if it is not a valid configuration.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = paths::get_config_file_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
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
