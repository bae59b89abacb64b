// SPDX-License-Identifier: MPL-2.0
//! Orientation sensor port definitions.
//!
//! Two levels are exposed:
//! - [`AngleSource`]: anything that can report the frame's raw rotation angle
//! - [`AccelerometerBus`]: raw 3-axis readings from an accelerometer chip,
//!   turned into an angle by [`crate::application::compass::AccelerometerAngle`]
//!
//! The bus driver itself (I²C access, register layout) is provided by the host.

use std::fmt;

/// Port for polling the frame's raw rotation angle in degrees.
///
/// Implementations are polled on every orientation check and must return
/// quickly; the value may have any sign and magnitude.
pub trait AngleSource: Send + Sync {
    /// Latest raw angle. Not rounded, not corrected for a flipped sensor.
    fn poll(&self) -> f64;

    /// Short human-readable name, shown on the dashboard.
    fn describe(&self) -> String;
}

/// One raw accelerometer reading, in sensor LSBs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AccelSample {
    pub x: i16,
    pub y: i16,
    pub z: i16,
}

/// Errors raised by an accelerometer bus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SensorError {
    /// The device did not answer.
    Unavailable(String),
    /// A transfer failed mid-read.
    Bus(String),
}

impl fmt::Display for SensorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SensorError::Unavailable(msg) => write!(f, "Sensor unavailable: {msg}"),
            SensorError::Bus(msg) => write!(f, "Sensor bus error: {msg}"),
        }
    }
}

impl std::error::Error for SensorError {}

/// Port for reading raw samples from an accelerometer.
pub trait AccelerometerBus: Send + Sync {
    /// Reads one (x, y, z) sample.
    ///
    /// # Errors
    ///
    /// Returns a [`SensorError`] if the device cannot be read.
    fn read_sample(&self) -> Result<AccelSample, SensorError>;

    /// Chip name, e.g. `"MPU-6050"`.
    fn chip_name(&self) -> &str;
}

/// Lets the host hand over a driver chosen at runtime.
impl<B: AccelerometerBus + ?Sized> AccelerometerBus for Box<B> {
    fn read_sample(&self) -> Result<AccelSample, SensorError> {
        (**self).read_sample()
    }

    fn chip_name(&self) -> &str {
        (**self).chip_name()
    }
}
