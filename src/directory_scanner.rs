// SPDX-License-Identifier: MPL-2.0
//! Directory scanner module for finding and sorting media files.
//!
//! This module scans a player's folder for supported media formats, keeps
//! the ones of the player's media type, and sorts them according to the
//! configured sort order. It is the filesystem-backed [`MediaSource`].

use crate::application::port::MediaSource;
use crate::config::SortOrder;
use crate::domain::media::MediaType;
use crate::error::{Error, Result};
use crate::media;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Lists the media of one folder (non-recursive).
#[derive(Debug, Clone, PartialEq)]
pub struct DirectoryScanner {
    directory: PathBuf,
    sort_order: SortOrder,
    media_type: Option<MediaType>,
}

impl DirectoryScanner {
    /// Scanner accepting every supported image and video.
    pub fn new(directory: impl Into<PathBuf>, sort_order: SortOrder) -> Self {
        Self {
            directory: directory.into(),
            sort_order,
            media_type: None,
        }
    }

    /// Restricts the listing to one media type.
    #[must_use]
    pub fn with_media_type(mut self, media_type: MediaType) -> Self {
        self.media_type = Some(media_type);
        self
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Scans the directory for supported media files and sorts them.
    ///
    /// Returns an error if the directory cannot be read.
    pub fn scan(&self) -> Result<Vec<PathBuf>> {
        let mut media_files = Vec::new();

        for entry in std::fs::read_dir(&self.directory)? {
            let entry = entry?;
            let path = entry.path();

            if path.is_file() && self.accepts(&path) {
                media_files.push(path);
            }
        }

        sort_media_files(&mut media_files, self.sort_order);
        Ok(media_files)
    }

    fn accepts(&self, path: &Path) -> bool {
        match (media::detect_media_type(path), self.media_type) {
            (None, _) => false,
            (Some(_), None) => true,
            (Some(found), Some(wanted)) => found == wanted,
        }
    }
}

impl MediaSource for DirectoryScanner {
    fn list(&self) -> Result<Vec<PathBuf>> {
        self.scan()
    }

    fn location(&self) -> String {
        self.directory.display().to_string()
    }

    /// Deletes a file listed from this directory. Paths elsewhere are refused.
    fn remove(&self, path: &Path) -> Result<()> {
        if path.parent() != Some(self.directory.as_path()) {
            return Err(Error::Io(format!(
                "{} is not in {}",
                path.display(),
                self.directory.display()
            )));
        }
        std::fs::remove_file(path)?;
        Ok(())
    }
}

/// Sorts a list of media file paths according to the specified sort order.
///
/// Names break ties, so the order is deterministic even when timestamps match.
fn sort_media_files(media_files: &mut [PathBuf], sort_order: SortOrder) {
    media_files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    match sort_order {
        SortOrder::Alphabetical => {}
        SortOrder::ModifiedDate => {
            media_files.sort_by_key(|path| {
                path.metadata()
                    .and_then(|m| m.modified())
                    .unwrap_or(SystemTime::UNIX_EPOCH)
            });
        }
        SortOrder::CreatedDate => {
            media_files.sort_by_key(|path| {
                path.metadata()
                    .and_then(|m| m.created())
                    .unwrap_or(SystemTime::UNIX_EPOCH)
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;
    use tempfile::tempdir;

    fn create_test_file(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = fs::File::create(&path).expect("failed to create test file");
        file.write_all(b"fake media data")
            .expect("failed to write test file");
        path
    }

    #[test]
    fn scan_finds_supported_media_only() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        create_test_file(temp_dir.path(), "a.jpg");
        create_test_file(temp_dir.path(), "b.png");
        create_test_file(temp_dir.path(), "c.mp4");
        create_test_file(temp_dir.path(), "notes.txt");
        fs::create_dir(temp_dir.path().join("nested.jpg")).expect("failed to create dir");

        let scanner = DirectoryScanner::new(temp_dir.path(), SortOrder::Alphabetical);
        let files = scanner.scan().expect("failed to scan directory");

        assert_eq!(files.len(), 3);
    }

    #[test]
    fn scan_sorts_alphabetically() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let img_c = create_test_file(temp_dir.path(), "c.jpg");
        let img_a = create_test_file(temp_dir.path(), "a.jpg");
        let img_b = create_test_file(temp_dir.path(), "b.jpg");

        let files = DirectoryScanner::new(temp_dir.path(), SortOrder::Alphabetical)
            .scan()
            .expect("failed to scan directory");

        assert_eq!(files, vec![img_a, img_b, img_c]);
    }

    #[test]
    fn media_type_filter_keeps_one_kind() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let photo = create_test_file(temp_dir.path(), "photo.jpg");
        let clip = create_test_file(temp_dir.path(), "clip.mov");

        let photos = DirectoryScanner::new(temp_dir.path(), SortOrder::Alphabetical)
            .with_media_type(MediaType::Image)
            .scan()
            .expect("failed to scan directory");
        assert_eq!(photos, vec![photo]);

        let clips = DirectoryScanner::new(temp_dir.path(), SortOrder::Alphabetical)
            .with_media_type(MediaType::Video)
            .scan()
            .expect("failed to scan directory");
        assert_eq!(clips, vec![clip]);
    }

    #[test]
    fn modified_date_order_is_total() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        for name in ["b.jpg", "a.jpg", "c.jpg"] {
            create_test_file(temp_dir.path(), name);
        }
        let scanner = DirectoryScanner::new(temp_dir.path(), SortOrder::ModifiedDate);
        let first = scanner.scan().expect("failed to scan directory");
        let second = scanner.scan().expect("failed to scan directory");
        assert_eq!(first.len(), 3);
        assert_eq!(first, second);
    }

    #[test]
    fn missing_directory_is_an_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let scanner = DirectoryScanner::new(temp_dir.path().join("gone"), SortOrder::Alphabetical);
        assert!(scanner.list().is_err());
    }

    #[test]
    fn rescan_sees_new_and_removed_files() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let a = create_test_file(temp_dir.path(), "a.jpg");
        let scanner = DirectoryScanner::new(temp_dir.path(), SortOrder::Alphabetical);
        assert_eq!(scanner.list().expect("list").len(), 1);

        create_test_file(temp_dir.path(), "b.jpg");
        assert_eq!(scanner.list().expect("list").len(), 2);

        fs::remove_file(a).expect("failed to remove file");
        assert_eq!(scanner.list().expect("list").len(), 1);
    }

    #[test]
    fn location_is_the_directory() {
        let scanner = DirectoryScanner::new("/srv/frame/family", SortOrder::Alphabetical);
        assert_eq!(scanner.location(), "/srv/frame/family");
    }

    #[test]
    fn remove_deletes_only_own_files() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let a = create_test_file(temp_dir.path(), "a.jpg");
        let outside_dir = tempdir().expect("failed to create temp dir");
        let outside = create_test_file(outside_dir.path(), "b.jpg");
        let scanner = DirectoryScanner::new(temp_dir.path(), SortOrder::Alphabetical);

        scanner.remove(&a).expect("failed to remove file");
        assert!(!a.exists());
        assert!(scanner.list().expect("list").is_empty());

        assert!(scanner.remove(&outside).is_err());
        assert!(outside.exists());
        assert!(scanner.remove(&a).is_err());
    }
}
