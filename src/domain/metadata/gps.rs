// SPDX-License-Identifier: MPL-2.0
//! GPS position types.

// =============================================================================
// GpsCoordinates
// =============================================================================

/// GPS coordinates in decimal degrees.
///
/// This type represents geographic coordinates using the WGS84 coordinate
/// system (latitude and longitude in decimal degrees).
///
/// # Example
///
/// ```
/// use pi_frame::domain::metadata::GpsCoordinates;
///
/// let coords = GpsCoordinates::new(48.8566, 2.3522); // Paris
/// assert_eq!(coords.format(), "48.856600° N, 2.352200° E");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GpsCoordinates {
    /// Latitude in decimal degrees (-90.0 to 90.0)
    latitude: f64,
    /// Longitude in decimal degrees (-180.0 to 180.0)
    longitude: f64,
}

impl GpsCoordinates {
    /// Creates new GPS coordinates.
    ///
    /// Values outside valid ranges will be clamped:
    /// - Latitude: -90.0 to 90.0
    /// - Longitude: -180.0 to 180.0
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude: latitude.clamp(-90.0, 90.0),
            longitude: longitude.clamp(-180.0, 180.0),
        }
    }

    /// Builds coordinates from EXIF-style degrees/minutes/seconds triples.
    ///
    /// `lat_ref` is `'N'` or `'S'`, `lon_ref` is `'E'` or `'W'`; southern and
    /// western hemispheres become negative.
    #[must_use]
    pub fn from_dms(lat: Dms, lat_ref: char, lon: Dms, lon_ref: char) -> Self {
        let latitude = lat.to_decimal() * hemisphere_sign(lat_ref, 'S');
        let longitude = lon.to_decimal() * hemisphere_sign(lon_ref, 'W');
        Self::new(latitude, longitude)
    }

    /// Returns the latitude in decimal degrees.
    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Returns the longitude in decimal degrees.
    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Returns whether this is the null island (0,0) which often indicates
    /// missing or default GPS data.
    #[must_use]
    pub fn is_null_island(&self) -> bool {
        self.latitude.abs() < f64::EPSILON && self.longitude.abs() < f64::EPSILON
    }

    /// Formats the coordinates as a human-readable string.
    ///
    /// Format: "48.856600° N, 2.352200° E"
    #[must_use]
    pub fn format(&self) -> String {
        let lat_dir = if self.latitude >= 0.0 { "N" } else { "S" };
        let lon_dir = if self.longitude >= 0.0 { "E" } else { "W" };
        format!(
            "{:.6}° {}, {:.6}° {}",
            self.latitude.abs(),
            lat_dir,
            self.longitude.abs(),
            lon_dir
        )
    }
}

/// Degrees, minutes and seconds of one axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Dms {
    pub degrees: f64,
    pub minutes: f64,
    pub seconds: f64,
}

impl Dms {
    #[must_use]
    pub fn new(degrees: f64, minutes: f64, seconds: f64) -> Self {
        Self {
            degrees,
            minutes,
            seconds,
        }
    }

    /// Unsigned decimal degrees.
    #[must_use]
    pub fn to_decimal(self) -> f64 {
        self.degrees + self.minutes / 60.0 + self.seconds / 3600.0
    }
}

fn hemisphere_sign(reference: char, negative: char) -> f64 {
    if reference.eq_ignore_ascii_case(&negative) {
        -1.0
    } else {
        1.0
    }
}

// =============================================================================
// Tests
// =============================================================================
