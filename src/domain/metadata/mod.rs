// SPDX-License-Identifier: MPL-2.0
//! Metadata domain types.
//!
//! - [`GpsCoordinates`]: decimal-degree position, built from EXIF DMS values

mod gps;

pub use gps::{Dms, GpsCoordinates};
