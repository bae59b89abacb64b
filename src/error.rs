// SPDX-License-Identifier: MPL-2.0
use crate::domain::orientation::InvalidExifCode;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    /// EXIF orientation tag outside the four rotation-only codes (1, 3, 6, 8).
    #[error("Invalid EXIF orientation code: {0}")]
    InvalidExifCode(i64),

    /// The per-item metadata fetch could not open or parse the file.
    #[error("Unreadable media {}: {reason}", .path.display())]
    UnreadableMedia { path: PathBuf, reason: String },

    /// Direct indexing outside the playlist. Indicates a bug in the caller.
    #[error("Index {index} out of range for playlist of {len} items")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("No players configured")]
    NoPlayers,

    /// An operation on the current item was asked for while nothing is shown.
    #[error("No media is currently shown")]
    NoCurrentMedia,
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<InvalidExifCode> for Error {
    fn from(err: InvalidExifCode) -> Self {
        Error::InvalidExifCode(err.0)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
