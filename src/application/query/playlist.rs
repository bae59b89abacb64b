// SPDX-License-Identifier: MPL-2.0
//! Playlist store for one player.
//!
//! The store owns the ordered list of media for a player and re-derives it
//! from its [`MediaSource`] on every [`PlaylistStore::refresh`]. Items carry
//! their metadata lazily: it is fetched on first use and dropped together
//! with the item on the next refresh.

use crate::application::port::{MediaSource, MetadataError, MetadataReader};
use crate::domain::media::MediaMetadata;
use crate::error::{Error, Result};
use std::cell::OnceCell;
use std::path::{Path, PathBuf};
use tracing::debug;

/// One entry of a playlist.
#[derive(Debug, Clone)]
pub struct MediaItem {
    path: PathBuf,
    metadata: OnceCell<std::result::Result<MediaMetadata, MetadataError>>,
}

impl MediaItem {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            metadata: OnceCell::new(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name for display, falling back to the full path.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.path.file_name().map_or_else(
            || self.path.display().to_string(),
            |name| name.to_string_lossy().into_owned(),
        )
    }

    /// Returns the item's metadata, fetching it through `reader` on first use.
    ///
    /// A failed fetch is remembered too, so an unreadable file is only
    /// read once per refresh.
    ///
    /// # Errors
    ///
    /// Returns the [`MetadataError`] produced by the reader.
    pub fn metadata(
        &self,
        reader: &dyn MetadataReader,
    ) -> std::result::Result<&MediaMetadata, MetadataError> {
        self.metadata
            .get_or_init(|| reader.read(&self.path))
            .as_ref()
            .map_err(Clone::clone)
    }

    /// Like [`metadata`](Self::metadata), with the failure lifted into the
    /// crate error so it names the file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnreadableMedia`] if the reader failed.
    pub fn checked_metadata(&self, reader: &dyn MetadataReader) -> Result<&MediaMetadata> {
        self.metadata(reader).map_err(|err| Error::UnreadableMedia {
            path: self.path.clone(),
            reason: err.to_string(),
        })
    }

    /// Metadata if it has already been fetched successfully.
    #[must_use]
    pub fn cached_metadata(&self) -> Option<&MediaMetadata> {
        self.metadata.get().and_then(|fetched| fetched.as_ref().ok())
    }
}

impl PartialEq for MediaItem {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Eq for MediaItem {}

/// Ordered media of one player, backed by a [`MediaSource`].
pub struct PlaylistStore {
    source: Box<dyn MediaSource>,
    items: Vec<MediaItem>,
}

impl PlaylistStore {
    /// Creates an empty store. Nothing is listed until the first refresh.
    pub fn new(source: impl MediaSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            items: Vec::new(),
        }
    }

    /// Re-reads the source and replaces every item.
    ///
    /// Returns the new size. Tracking a current position is the caller's
    /// job: it must compare that position against the returned size.
    ///
    /// # Errors
    ///
    /// Returns the source's error. The store is left empty in that case so
    /// a vanished folder never keeps serving stale entries.
    pub fn refresh(&mut self) -> Result<usize> {
        match self.source.list() {
            Ok(paths) => {
                self.items = paths.into_iter().map(MediaItem::new).collect();
                debug!(
                    location = %self.source.location(),
                    size = self.items.len(),
                    "refreshed playlist"
                );
                Ok(self.items.len())
            }
            Err(err) => {
                self.items.clear();
                Err(err)
            }
        }
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the item at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= size()`.
    pub fn item_at(&self, index: usize) -> Result<&MediaItem> {
        self.items.get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.items.len(),
        })
    }

    /// Returns the item at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&MediaItem> {
        self.items.get(index)
    }

    /// Where the items come from.
    #[must_use]
    pub fn location(&self) -> String {
        self.source.location()
    }

    /// Deletes the item at `index` from the source and from the store.
    ///
    /// Returns the removed path. Later items shift down by one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] for a bad index, or the source's
    /// error if it refused the removal. The store is unchanged on error.
    pub fn remove(&mut self, index: usize) -> Result<PathBuf> {
        let path = self.item_at(index)?.path().to_path_buf();
        self.source.remove(&path)?;
        self.items.remove(index);
        Ok(path)
    }
}
