// SPDX-License-Identifier: MPL-2.0
//! Frame rotation sensing.
//!
//! A [`Compass`] wraps an [`AngleSource`] and turns its raw, noisy angle into
//! a [`QuadrantRotation`], correcting for a sensor mounted upside down.
//! The source is polled on every call: the frame can be turned between two
//! navigation steps, so nothing is cached.

use crate::application::port::{AccelerometerBus, AngleSource};
use crate::domain::orientation::{OrientationClass, QuadrantRotation};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, warn};

/// Accelerometer sensitivity at the ±2g range, in LSB per g.
const ACCEL_LSB_PER_G: f64 = 16384.0;

/// Rotation sensor of a frame.
///
/// # Example
///
/// ```
/// use pi_frame::application::compass::Compass;
///
/// let compass = Compass::fixed(-90.0, false);
/// assert_eq!(compass.rotation_simple().degrees(), 270);
/// assert!(compass.is_portrait_frame());
/// ```
pub struct Compass {
    source: Box<dyn AngleSource>,
    flip: bool,
}

impl Compass {
    /// Creates a compass over any angle source.
    ///
    /// `flip` negates every reading, for sensors mounted inverted.
    pub fn new(source: impl AngleSource + 'static, flip: bool) -> Self {
        Self {
            source: Box::new(source),
            flip,
        }
    }

    /// Creates a manual compass reporting a constant angle.
    #[must_use]
    pub fn fixed(angle: f64, flip: bool) -> Self {
        Self::new(FixedAngle::new(angle), flip)
    }

    /// Latest raw reading, uncorrected for flip.
    #[must_use]
    pub fn rotation_raw(&self) -> f64 {
        self.source.poll()
    }

    /// Current rotation rounded to a quadrant, flip-corrected.
    #[must_use]
    pub fn rotation_simple(&self) -> QuadrantRotation {
        let raw = self.rotation_raw();
        let effective = if self.flip { -raw } else { raw };
        let rotation = QuadrantRotation::from_raw_angle(effective);
        debug!(raw, flip = self.flip, rotation = rotation.degrees(), "frame rotation");
        rotation
    }

    /// Portrait or landscape, from a single poll.
    #[must_use]
    pub fn frame_orientation(&self) -> OrientationClass {
        self.rotation_simple().frame_orientation()
    }

    #[must_use]
    pub fn is_portrait_frame(&self) -> bool {
        self.frame_orientation().is_portrait()
    }

    #[must_use]
    pub fn is_landscape_frame(&self) -> bool {
        !self.is_portrait_frame()
    }

    #[must_use]
    pub fn is_flipped(&self) -> bool {
        self.flip
    }

    /// Source name plus flip state, for the dashboard.
    #[must_use]
    pub fn description(&self) -> String {
        if self.flip {
            format!("{} (flipped)", self.source.describe())
        } else {
            self.source.describe()
        }
    }
}

impl std::fmt::Debug for Compass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Compass")
            .field("source", &self.source.describe())
            .field("flip", &self.flip)
            .finish()
    }
}

// =============================================================================
// FixedAngle
// =============================================================================

/// Manually configured angle. Can be changed at runtime with [`FixedAngle::set_angle`].
#[derive(Debug)]
pub struct FixedAngle {
    bits: AtomicU64,
}

impl FixedAngle {
    #[must_use]
    pub fn new(angle: f64) -> Self {
        Self {
            bits: AtomicU64::new(angle.to_bits()),
        }
    }

    pub fn set_angle(&self, angle: f64) {
        self.bits.store(angle.to_bits(), Ordering::Relaxed);
    }
}

impl AngleSource for FixedAngle {
    fn poll(&self) -> f64 {
        f64::from_bits(self.bits.load(Ordering::Relaxed))
    }

    fn describe(&self) -> String {
        format!("fixed at {}°", self.poll())
    }
}

/// Lets a host keep a handle on a shared fixed angle and turn the frame from outside.
impl AngleSource for std::sync::Arc<FixedAngle> {
    fn poll(&self) -> f64 {
        self.as_ref().poll()
    }

    fn describe(&self) -> String {
        self.as_ref().describe()
    }
}

// =============================================================================
// AccelerometerAngle
// =============================================================================

/// Rotation about the frame's viewing axis, derived from gravity.
///
/// Raw samples are scaled to g and the angle is
/// `atan2(y, sqrt(x² + z²))` in degrees.
pub struct AccelerometerAngle<B> {
    bus: B,
}

impl<B: AccelerometerBus> AccelerometerAngle<B> {
    pub fn new(bus: B) -> Self {
        Self { bus }
    }
}

/// Tilt angle in degrees for a sample already scaled to g.
#[must_use]
pub fn x_rotation(x: f64, y: f64, z: f64) -> f64 {
    y.atan2(x.hypot(z)).to_degrees()
}

impl<B: AccelerometerBus> AngleSource for AccelerometerAngle<B> {
    fn poll(&self) -> f64 {
        match self.bus.read_sample() {
            Ok(sample) => {
                let x = f64::from(sample.x) / ACCEL_LSB_PER_G;
                let y = f64::from(sample.y) / ACCEL_LSB_PER_G;
                let z = f64::from(sample.z) / ACCEL_LSB_PER_G;
                debug!(x, y, z, "accelerometer sample");
                x_rotation(x, y, z)
            }
            Err(err) => {
                // Home position keeps the slideshow running in landscape.
                warn!(chip = self.bus.chip_name(), %err, "accelerometer read failed");
                0.0
            }
        }
    }

    fn describe(&self) -> String {
        format!("{} accelerometer", self.bus.chip_name())
    }
}
