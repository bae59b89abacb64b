// SPDX-License-Identifier: MPL-2.0
//! Frame/photo compatibility.
//!
//! A photo can be shown when its effective shape (after EXIF rotation)
//! matches the frame's current shape. When it can, the renderer needs the
//! net angle that makes it appear upright on the turned frame.

use crate::application::compass::Compass;
use crate::domain::media::MediaMetadata;
use crate::domain::orientation::{ExifOrientation, InvalidExifCode, OrientationClass};

/// Result of checking one photo against the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compatibility {
    /// Show it, rotated by `rotation` degrees.
    Compatible { rotation: i32 },
    /// Shapes differ; skip it.
    Mismatch {
        frame: OrientationClass,
        photo: OrientationClass,
    },
}

impl Compatibility {
    #[must_use]
    pub fn is_compatible(self) -> bool {
        matches!(self, Compatibility::Compatible { .. })
    }
}

/// Checks a photo against the frame and computes its compensating angle.
///
/// Without a compass, orientation matching is skipped and only the EXIF
/// rotation is undone. The compass is polled once, so shape and angle come
/// from the same reading.
///
/// # Errors
///
/// Returns [`InvalidExifCode`] when the photo's orientation tag is not a
/// rotation code.
pub fn check(
    metadata: &MediaMetadata,
    compass: Option<&Compass>,
) -> Result<Compatibility, InvalidExifCode> {
    let orientation = ExifOrientation::from_tag(metadata.exif_orientation)?;

    let base_rotation = match compass {
        Some(compass) => {
            let frame_rotation = compass.rotation_simple();
            let frame = frame_rotation.frame_orientation();
            let photo = OrientationClass::of_photo(metadata.width, metadata.height, orientation);
            if frame != photo {
                return Ok(Compatibility::Mismatch { frame, photo });
            }
            -frame_rotation.signed_degrees()
        }
        None => 0,
    };

    Ok(Compatibility::Compatible {
        rotation: base_rotation - orientation.angle().signed_degrees(),
    })
}

/// Angle that undoes the frame's rotation alone.
#[must_use]
pub fn frame_correction(compass: Option<&Compass>) -> i32 {
    compass.map_or(0, |compass| -compass.rotation_simple().signed_degrees())
}
