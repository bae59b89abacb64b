// SPDX-License-Identifier: MPL-2.0
//! Media listing port definition.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Port for listing the candidate media of one player.
///
/// The playlist calls [`MediaSource::list`] on every refresh, so changes to
/// the backing folder are picked up without a restart. Ordering is the
/// adapter's responsibility and must be deterministic.
pub trait MediaSource: Send + Sync {
    /// Lists media identifiers in playback order.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn list(&self) -> Result<Vec<PathBuf>>;

    /// Where the media comes from, for logs and the dashboard.
    fn location(&self) -> String;

    /// Deletes one listed item from the backing store.
    ///
    /// Sources are read-only unless they override this.
    ///
    /// # Errors
    ///
    /// Returns an error if the item cannot be deleted.
    fn remove(&self, path: &Path) -> Result<()> {
        let _ = path;
        Err(Error::Io(format!("{} is read-only", self.location())))
    }
}
