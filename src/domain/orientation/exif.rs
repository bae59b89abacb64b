// SPDX-License-Identifier: MPL-2.0
//! EXIF orientation codes.
//!
//! Only the four rotation-only codes are understood. The mirrored variants
//! (2, 4, 5, 7) and anything else are rejected with [`InvalidExifCode`].

use super::QuadrantRotation;
use std::fmt;

/// Error raised when an EXIF orientation code is not one of 1, 3, 6 or 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidExifCode(pub i64);

impl fmt::Display for InvalidExifCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid EXIF orientation code {}", self.0)
    }
}

impl std::error::Error for InvalidExifCode {}

/// Maps an EXIF orientation code to the rotation the camera applied.
///
/// `1 → 0°`, `6 → 90°`, `3 → 180°`, `8 → 270°`.
///
/// # Errors
///
/// Returns [`InvalidExifCode`] for every other value, including the
/// mirrored codes, zero and negatives.
pub fn exif_angle(code: i64) -> Result<QuadrantRotation, InvalidExifCode> {
    match code {
        1 => Ok(QuadrantRotation::ZERO),
        6 => Ok(QuadrantRotation::QUARTER),
        3 => Ok(QuadrantRotation::HALF),
        8 => Ok(QuadrantRotation::THREE_QUARTERS),
        other => Err(InvalidExifCode(other)),
    }
}

/// A validated EXIF orientation code.
///
/// # Example
///
/// ```
/// use pi_frame::domain::orientation::ExifOrientation;
///
/// let code = ExifOrientation::new(6).unwrap();
/// assert_eq!(code.angle().degrees(), 90);
/// assert!(ExifOrientation::new(5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExifOrientation {
    code: u8,
    angle: QuadrantRotation,
}

impl ExifOrientation {
    /// Code 1: stored upright. Also stands in for missing metadata.
    pub const NORMAL: Self = Self {
        code: 1,
        angle: QuadrantRotation::ZERO,
    };

    /// Validates a raw code.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidExifCode`] for codes other than 1, 3, 6 and 8.
    pub fn new(code: i64) -> Result<Self, InvalidExifCode> {
        let angle = exif_angle(code)?;
        Ok(Self {
            code: code as u8,
            angle,
        })
    }

    /// Resolves an optional tag value; absent metadata is treated as code 1.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidExifCode`] when a tag is present but not a rotation code.
    pub fn from_tag(tag: Option<i64>) -> Result<Self, InvalidExifCode> {
        tag.map_or(Ok(Self::NORMAL), Self::new)
    }

    #[must_use]
    pub fn code(self) -> u8 {
        self.code
    }

    #[must_use]
    pub fn angle(self) -> QuadrantRotation {
        self.angle
    }
}

impl Default for ExifOrientation {
    fn default() -> Self {
        Self::NORMAL
    }
}

impl TryFrom<u16> for ExifOrientation {
    type Error = InvalidExifCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(i64::from(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exif_angle_maps_the_four_rotation_codes() {
        assert_eq!(exif_angle(1), Ok(QuadrantRotation::ZERO));
        assert_eq!(exif_angle(3), Ok(QuadrantRotation::HALF));
        assert_eq!(exif_angle(6), Ok(QuadrantRotation::QUARTER));
        assert_eq!(exif_angle(8), Ok(QuadrantRotation::THREE_QUARTERS));
    }

    #[test]
    fn exif_angle_rejects_everything_else() {
        for code in [0, 2, 4, 5, 7, 9, -1, 255, 65_536] {
            assert_eq!(exif_angle(code), Err(InvalidExifCode(code)), "code {code}");
        }
    }

    #[test]
    fn from_tag_treats_missing_as_normal() {
        assert_eq!(ExifOrientation::from_tag(None), Ok(ExifOrientation::NORMAL));
        assert_eq!(ExifOrientation::from_tag(Some(8)).map(|o| o.code()), Ok(8));
        assert_eq!(ExifOrientation::from_tag(Some(2)), Err(InvalidExifCode(2)));
    }

    #[test]
    fn try_from_u16_validates() {
        let orientation = ExifOrientation::try_from(3u16).expect("valid code");
        assert_eq!(orientation.angle(), QuadrantRotation::HALF);
        assert!(ExifOrientation::try_from(7u16).is_err());
    }

    #[test]
    fn invalid_code_display() {
        assert_eq!(
            InvalidExifCode(4).to_string(),
            "invalid EXIF orientation code 4"
        );
    }
}
