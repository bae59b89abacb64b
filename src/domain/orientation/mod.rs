// SPDX-License-Identifier: MPL-2.0
//! Orientation math.
//!
//! Pure functions and value types used to reconcile a photo's shape with
//! the rotation of the frame:
//! - [`QuadrantRotation`]: 0°/90°/180°/270°, with the raw-angle rounding rule
//! - [`exif_angle`] / [`ExifOrientation`]: EXIF orientation code decoding
//! - [`is_portrait`] / [`is_landscape`]: effective shape of a photo

pub mod exif;
pub mod rotation;

pub use exif::{exif_angle, ExifOrientation, InvalidExifCode};
pub use rotation::QuadrantRotation;

/// Portrait or landscape, for a frame or for a photo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrientationClass {
    Portrait,
    Landscape,
}

impl OrientationClass {
    /// Classifies displayed dimensions. Square counts as portrait.
    #[must_use]
    pub fn of_dimensions(width: u32, height: u32) -> Self {
        if width <= height {
            OrientationClass::Portrait
        } else {
            OrientationClass::Landscape
        }
    }

    /// Classifies a photo after undoing its EXIF rotation.
    #[must_use]
    pub fn of_photo(width: u32, height: u32, orientation: ExifOrientation) -> Self {
        if orientation.angle().swaps_dimensions() {
            Self::of_dimensions(height, width)
        } else {
            Self::of_dimensions(width, height)
        }
    }

    #[must_use]
    pub fn is_portrait(self) -> bool {
        self == OrientationClass::Portrait
    }
}

/// Checks whether a photo is portrait once its EXIF rotation is applied.
///
/// Pass code `1` when the photo carries no orientation tag.
///
/// # Errors
///
/// Returns [`InvalidExifCode`] if `code` is not 1, 3, 6 or 8.
pub fn is_portrait(width: u32, height: u32, code: i64) -> Result<bool, InvalidExifCode> {
    let orientation = ExifOrientation::new(code)?;
    Ok(OrientationClass::of_photo(width, height, orientation).is_portrait())
}

/// Logical negation of [`is_portrait`].
///
/// # Errors
///
/// Returns [`InvalidExifCode`] if `code` is not 1, 3, 6 or 8.
pub fn is_landscape(width: u32, height: u32, code: i64) -> Result<bool, InvalidExifCode> {
    is_portrait(width, height, code).map(|portrait| !portrait)
}
