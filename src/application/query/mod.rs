// SPDX-License-Identifier: MPL-2.0
//! Query services (read side).
//!
//! # Available Services
//!
//! - [`playlist`]: Directory-backed playlist with lazily fetched metadata
//! - [`navigation`]: Orientation-aware playlist navigation (`MediaNavigator`)
//!
//! # Design Notes
//!
//! These services own external state (file lists, sensor readings) and
//! coordinate domain operations over it, so they live in the application
//! layer rather than in the domain.

pub mod navigation;
pub mod playlist;

// Re-export main types
pub use navigation::{
    CompatibilityPolicy, MediaNavigator, NavigationInfo, NavigationMode, NavigationOutcome,
    NavigationState,
};
pub use playlist::{MediaItem, PlaylistStore};
