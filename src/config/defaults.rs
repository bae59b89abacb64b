// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Slideshow**: Timer delay and its bounds
//! - **Folders**: Media root
//! - **Compass**: Fixed-angle default

// ==========================================================================
// Slideshow Defaults
// ==========================================================================

/// Default delay between two slideshow steps (in milliseconds).
pub const DEFAULT_SLIDESHOW_DELAY_MS: u64 = 5000;

/// Minimum slideshow delay (in milliseconds).
pub const MIN_SLIDESHOW_DELAY_MS: u64 = 500;

/// Maximum slideshow delay (in milliseconds, 10 minutes).
pub const MAX_SLIDESHOW_DELAY_MS: u64 = 600_000;

// ==========================================================================
// Folder Defaults
// ==========================================================================

/// Folder that player folders are resolved against.
pub const DEFAULT_ROOT_FOLDER: &str = "media";

// ==========================================================================
// Compass Defaults
// ==========================================================================

/// Angle reported by the fixed compass when none is configured (degrees).
pub const DEFAULT_FIXED_ROTATION: f64 = 0.0;
