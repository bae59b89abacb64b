// SPDX-License-Identifier: MPL-2.0
//! Quadrant rotation domain type.
//!
//! This module provides a type-safe wrapper for rotation angles,
//! ensuring only valid 90° increments (0°, 90°, 180°, 270°), and the
//! rounding rule that turns a raw, noisy sensor angle into one of them.

use super::OrientationClass;

/// Rotation angle in 90° increments.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always one of: 0°, 90°, 180°, or 270°.
///
/// # Example
///
/// ```
/// use pi_frame::domain::orientation::QuadrantRotation;
///
/// assert_eq!(QuadrantRotation::from_raw_angle(44.0).degrees(), 0);
/// assert_eq!(QuadrantRotation::from_raw_angle(45.0).degrees(), 90);
/// assert_eq!(QuadrantRotation::from_raw_angle(-45.0).degrees(), 270);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct QuadrantRotation(u16);

impl QuadrantRotation {
    /// No rotation (0°).
    pub const ZERO: Self = Self(0);
    /// Quarter turn (90°).
    pub const QUARTER: Self = Self(90);
    /// Half turn (180°).
    pub const HALF: Self = Self(180);
    /// Three-quarter turn (270°).
    pub const THREE_QUARTERS: Self = Self(270);

    /// Rounds a raw angle to the nearest quadrant, modulo 360.
    ///
    /// The angle may have any sign and magnitude. Ties at 45° round away
    /// from zero, so `45 → 90` and `-45 → -90 → 270`. Non-finite input
    /// maps to [`QuadrantRotation::ZERO`].
    #[must_use]
    pub fn from_raw_angle(angle: f64) -> Self {
        if angle == 0.0 || !angle.is_finite() {
            return Self::ZERO;
        }

        // Work in whole quadrants so huge magnitudes still land on a multiple of 90.
        let quadrants = ((angle.abs() + 45.0) / 90.0).trunc().rem_euclid(4.0);
        let signed = if angle < 0.0 { -quadrants } else { quadrants };
        let normalized = signed.rem_euclid(4.0) as u16;

        Self(normalized * 90)
    }

    /// Returns the angle in degrees.
    #[must_use]
    pub fn degrees(self) -> u16 {
        self.0
    }

    /// Returns the angle in degrees as a signed value, for angle arithmetic.
    #[must_use]
    pub fn signed_degrees(self) -> i32 {
        i32::from(self.0)
    }

    /// Returns true if width and height should be swapped when rendering.
    ///
    /// This is true for 90° and 270° rotations.
    #[must_use]
    pub fn swaps_dimensions(self) -> bool {
        self.0 % 180 == 90
    }

    /// Orientation of a landscape-native frame turned by this rotation.
    #[must_use]
    pub fn frame_orientation(self) -> OrientationClass {
        if self.swaps_dimensions() {
            OrientationClass::Portrait
        } else {
            OrientationClass::Landscape
        }
    }
}
