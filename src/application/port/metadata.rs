// SPDX-License-Identifier: MPL-2.0
//! Metadata reading port definition.
//!
//! This module defines the [`MetadataReader`] trait: the per-item lookup
//! that returns a photo's natural dimensions and EXIF orientation tag.
//! The filesystem adapter lives in [`crate::media::metadata`].

use crate::domain::media::MediaMetadata;
use std::fmt;
use std::path::Path;

// =============================================================================
// MetadataError
// =============================================================================

/// Errors that can occur while fetching an item's metadata.
///
/// Every variant means "this file cannot be shown right now"; the
/// navigator skips the item and moves on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataError {
    /// The file was not found.
    NotFound,

    /// The file could not be opened or decoded.
    Unreadable(String),

    /// The file opened but its pixel dimensions could not be determined.
    MissingDimensions,
}

impl fmt::Display for MetadataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataError::NotFound => write!(f, "File not found"),
            MetadataError::Unreadable(msg) => write!(f, "Unreadable file: {msg}"),
            MetadataError::MissingDimensions => write!(f, "Image dimensions unavailable"),
        }
    }
}

impl std::error::Error for MetadataError {}

// =============================================================================
// MetadataReader Trait
// =============================================================================

/// Port for fetching per-item metadata.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so a reader can be shared by
/// several players.
pub trait MetadataReader: Send + Sync {
    /// Reads width, height and the raw EXIF orientation tag of a file.
    ///
    /// # Errors
    ///
    /// Returns a [`MetadataError`] if the file cannot be opened or parsed.
    fn read(&self, path: &Path) -> Result<MediaMetadata, MetadataError>;
}
