// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for the settings file.
//!
//! # Path Resolution Order
//!
//! The settings file is resolved in the following priority order:
//! 1. **Explicit override** - directory passed to `_with_override()` functions (for tests)
//! 2. **CLI argument** (`--config FILE`) - set via [`init_cli_config_file`]
//! 3. **Environment variable** (`PI_FRAME_CONFIG_DIR`)
//! 4. **Platform default** - via `dirs` crate
//!
//! # Usage
//!
//! The CLI override should be initialized once at startup:
//! ```ignore
//! paths::init_cli_config_file(flags.config);
//! ```

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "PiFrame";

/// Name of the settings file inside the config directory.
pub const CONFIG_FILE: &str = "settings.toml";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "PI_FRAME_CONFIG_DIR";

/// Global CLI override for the settings file (set once at startup).
static CLI_CONFIG_FILE: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--config` CLI argument.
///
/// Returns `false` if an override was already recorded; the first one wins.
pub fn init_cli_config_file(config_file: Option<String>) -> bool {
    CLI_CONFIG_FILE
        .set(config_file.map(PathBuf::from))
        .is_ok()
}

fn get_cli_config_file() -> Option<PathBuf> {
    CLI_CONFIG_FILE.get().and_then(Clone::clone)
}

/// Returns the application config directory path.
///
/// # Resolution Order
///
/// 1. `PI_FRAME_CONFIG_DIR` environment variable (if set and non-empty)
/// 2. Platform-specific config directory:
///    - Linux: `~/.config/PiFrame/`
///    - macOS: `~/Library/Application Support/PiFrame/`
///    - Windows: `C:\Users\<User>\AppData\Roaming\PiFrame\`
///
/// Returns `None` if the config directory cannot be determined (rare edge case).
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the application config directory path with an optional override.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    // Priority 1: Explicit override (for tests)
    if let Some(path) = override_path {
        return Some(path);
    }

    // Priority 2: Environment variable
    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    // Priority 3: Platform default with app name
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Returns the settings file path with an optional directory override.
///
/// The CLI `--config` file sits between the explicit override and the
/// environment variable.
pub fn get_config_file_with_override(override_dir: Option<PathBuf>) -> Option<PathBuf> {
    if override_dir.is_none() {
        if let Some(file) = get_cli_config_file() {
            return Some(file);
        }
    }
    get_app_config_dir_with_override(override_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}
