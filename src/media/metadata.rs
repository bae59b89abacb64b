// SPDX-License-Identifier: MPL-2.0
//! Per-file metadata extraction.
//!
//! [`ExifMetadataReader`] is the filesystem [`MetadataReader`]: stored pixel
//! dimensions come from the image header, orientation and the descriptive
//! fields from EXIF. A file without EXIF is fine; it just reads as
//! unrotated with no details.

use crate::application::port::{MetadataError, MetadataReader};
use crate::domain::media::{MediaDetails, MediaMetadata};
use crate::domain::metadata::{Dms, GpsCoordinates};
use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::Path;

/// Reads dimensions with `image` and EXIF with `kamadak-exif`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExifMetadataReader;

impl ExifMetadataReader {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl MetadataReader for ExifMetadataReader {
    fn read(&self, path: &Path) -> Result<MediaMetadata, MetadataError> {
        let (width, height) = image_rs::image_dimensions(path).map_err(|err| match err {
            image_rs::ImageError::IoError(io) if io.kind() == ErrorKind::NotFound => {
                MetadataError::NotFound
            }
            other => MetadataError::Unreadable(other.to_string()),
        })?;
        if width == 0 || height == 0 {
            return Err(MetadataError::MissingDimensions);
        }

        let Some(exif) = read_exif(path) else {
            return Ok(MediaMetadata::new(width, height, None));
        };

        let orientation = exif
            .get_field(exif::Tag::Orientation, exif::In::PRIMARY)
            .and_then(|field| field.value.get_uint(0))
            .map(i64::from);

        Ok(MediaMetadata::new(width, height, orientation).with_details(extract_details(&exif)))
    }
}

/// EXIF block of the file, if it has a readable one.
fn read_exif(path: &Path) -> Option<exif::Exif> {
    let file = File::open(path).ok()?;
    let mut reader = BufReader::new(file);
    exif::Reader::new().read_from_container(&mut reader).ok()
}

fn extract_details(exif: &exif::Exif) -> MediaDetails {
    let date_taken = ascii_field(exif, exif::Tag::DateTimeOriginal)
        .or_else(|| ascii_field(exif, exif::Tag::DateTime));

    MediaDetails {
        date_taken,
        camera_make: ascii_field(exif, exif::Tag::Make),
        camera_model: ascii_field(exif, exif::Tag::Model),
        gps: extract_gps_coordinates(exif),
    }
}

/// First string of an ASCII field, trimmed. Empty strings read as absent.
fn ascii_field(exif: &exif::Exif, tag: exif::Tag) -> Option<String> {
    let field = exif.get_field(tag, exif::In::PRIMARY)?;
    ascii_value(&field.value)
}

fn ascii_value(value: &exif::Value) -> Option<String> {
    match value {
        exif::Value::Ascii(strings) => strings
            .first()
            .map(|bytes| String::from_utf8_lossy(bytes).trim().to_string())
            .filter(|text| !text.is_empty()),
        _ => None,
    }
}

/// Extract GPS coordinates from EXIF data. Both axes must be present.
fn extract_gps_coordinates(exif: &exif::Exif) -> Option<GpsCoordinates> {
    let axis = |value_tag, ref_tag| {
        let value = exif.get_field(value_tag, exif::In::PRIMARY)?;
        let reference = exif.get_field(ref_tag, exif::In::PRIMARY)?;
        let dms = parse_gps_coordinate(&value.value)?;
        let reference = ascii_value(&reference.value)?.chars().next()?;
        Some((dms, reference))
    };

    let (lat, lat_ref) = axis(exif::Tag::GPSLatitude, exif::Tag::GPSLatitudeRef)?;
    let (lon, lon_ref) = axis(exif::Tag::GPSLongitude, exif::Tag::GPSLongitudeRef)?;
    Some(GpsCoordinates::from_dms(lat, lat_ref, lon, lon_ref))
}

/// Parse GPS coordinate from EXIF rational values (degrees, minutes, seconds).
fn parse_gps_coordinate(value: &exif::Value) -> Option<Dms> {
    match value {
        exif::Value::Rational(rationals) if rationals.len() >= 3 => Some(Dms::new(
            rationals[0].to_f64(),
            rationals[1].to_f64(),
            rationals[2].to_f64(),
        )),
        _ => None,
    }
}
