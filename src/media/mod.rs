// SPDX-License-Identifier: MPL-2.0
//! Media file handling: type detection and metadata extraction.

pub mod metadata;

use image_rs::AnimationDecoder;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

pub use crate::domain::media::MediaType;
pub use metadata::ExifMetadataReader;

/// Supported media extensions
pub mod extensions {
    /// Image file extensions
    pub const IMAGE_EXTENSIONS: &[&str] = &[
        "jpg", "jpeg", "png", "gif", "tiff", "tif", "webp", "bmp",
    ];

    /// Video file extensions
    pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "m4v", "avi", "mov", "mkv", "webm"];

    /// All supported extensions (images + videos)
    #[must_use]
    pub fn all_supported_extensions() -> Vec<&'static str> {
        IMAGE_EXTENSIONS
            .iter()
            .chain(VIDEO_EXTENSIONS.iter())
            .copied()
            .collect()
    }
}

/// Counts the number of frames in a GIF file
fn count_gif_frames<P: AsRef<Path>>(path: P) -> crate::error::Result<usize> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let decoder = image_rs::codecs::gif::GifDecoder::new(reader)
        .map_err(|e| crate::error::Error::Io(e.to_string()))?;

    Ok(decoder.into_frames().count())
}

/// Detects if a WebP file is animated by checking for ANMF chunk marker
///
/// Animated WebP files contain "ANMF" (Animation Frame) chunks early in the
/// file, so only the header is read.
fn is_webp_animated_by_marker<P: AsRef<Path>>(path: P) -> crate::error::Result<bool> {
    let mut file = File::open(path)?;

    let mut buffer = vec![0u8; 1024];
    let bytes_read = file.read(&mut buffer)?;
    buffer.truncate(bytes_read);

    Ok(buffer.windows(4).any(|window| window == b"ANMF"))
}

/// Detects if a GIF or WebP file is animated (has multiple frames)
fn is_animated<P: AsRef<Path>>(path: P) -> crate::error::Result<bool> {
    let path_ref = path.as_ref();
    let extension = path_ref
        .extension()
        .and_then(|s| s.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "gif" => Ok(count_gif_frames(path)? > 1),
        "webp" => is_webp_animated_by_marker(path),
        _ => Ok(false),
    }
}

/// Detects the media type from file extension.
///
/// Animated GIF and WebP files play as video; a static or unreadable one is
/// an image.
pub fn detect_media_type<P: AsRef<Path>>(path: P) -> Option<MediaType> {
    let path_ref = path.as_ref();
    let extension = path_ref
        .extension()
        .and_then(|s| s.to_str())
        .map(str::to_lowercase)?;

    if extension == "gif" || extension == "webp" {
        match is_animated(path_ref) {
            Ok(true) => return Some(MediaType::Video),
            Ok(false) | Err(_) => return Some(MediaType::Image),
        }
    }

    if extensions::IMAGE_EXTENSIONS.contains(&extension.as_str()) {
        Some(MediaType::Image)
    } else if extensions::VIDEO_EXTENSIONS.contains(&extension.as_str()) {
        Some(MediaType::Video)
    } else {
        None
    }
}
