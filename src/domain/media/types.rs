// SPDX-License-Identifier: MPL-2.0
//! Core media types for the domain layer.
//!
//! These types represent pure data without any presentation dependencies.

use crate::domain::metadata::GpsCoordinates;

/// Represents different types of media formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaType {
    /// Still photo (JPEG, PNG, TIFF, etc.)
    Image,
    /// Video clip (MP4, MOV, etc.)
    Video,
}

/// What the engine needs to know about one photo before showing it.
///
/// The EXIF orientation tag is kept raw: an out-of-range value is only an
/// error once something tries to decode it, which lets the navigator skip
/// that single item instead of failing the whole refresh.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MediaMetadata {
    /// Natural (stored) width in pixels.
    pub width: u32,
    /// Natural (stored) height in pixels.
    pub height: u32,
    /// Raw EXIF orientation tag, `None` when the file has none.
    pub exif_orientation: Option<i64>,
    /// Descriptive fields shown in the details popup.
    pub details: MediaDetails,
}

impl MediaMetadata {
    /// Creates metadata with dimensions and an optional orientation tag.
    #[must_use]
    pub fn new(width: u32, height: u32, exif_orientation: Option<i64>) -> Self {
        Self {
            width,
            height,
            exif_orientation,
            details: MediaDetails::default(),
        }
    }

    /// Attaches descriptive details.
    #[must_use]
    pub fn with_details(mut self, details: MediaDetails) -> Self {
        self.details = details;
        self
    }
}

/// Human-facing EXIF fields. All optional.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MediaDetails {
    /// Date and time the photo was taken
    pub date_taken: Option<String>,
    /// Camera manufacturer (e.g., "Canon", "Nikon")
    pub camera_make: Option<String>,
    /// Camera model (e.g., "EOS 5D Mark IV")
    pub camera_model: Option<String>,
    /// Where the photo was taken
    pub gps: Option<GpsCoordinates>,
}

impl MediaDetails {
    /// Returns true if no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.date_taken.is_none()
            && self.camera_make.is_none()
            && self.camera_model.is_none()
            && self.gps.is_none()
    }

    /// Formats the set fields as `"Label: value"` lines.
    #[must_use]
    pub fn properties(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if let Some(date) = &self.date_taken {
            lines.push(format!("Date taken: {date}"));
        }
        match (&self.camera_make, &self.camera_model) {
            (Some(make), Some(model)) => lines.push(format!("Camera: {make} {model}")),
            (Some(only), None) | (None, Some(only)) => lines.push(format!("Camera: {only}")),
            (None, None) => {}
        }
        if let Some(gps) = self.gps.filter(|gps| !gps.is_null_island()) {
            lines.push(format!("Location: {}", gps.format()));
        }
        lines
    }
}
