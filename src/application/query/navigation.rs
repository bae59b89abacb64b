// SPDX-License-Identifier: MPL-2.0
//! Playlist navigation with orientation-aware skipping.
//!
//! A [`MediaNavigator`] walks one player's playlist and decides which item
//! to show next. Every step refreshes the playlist first, then scans for a
//! candidate whose shape fits the frame, bounded by the playlist size so a
//! folder with nothing displayable can never spin forever.
//!
//! In shuffle mode each successful `next` is recorded on a history stack
//! and `prev` pops it, so going back is an exact undo rather than a second
//! random draw.

use crate::application::compass::Compass;
use crate::application::compatibility::{self, frame_correction, Compatibility};
use crate::application::port::{MediaSource, MetadataReader, Notice, Renderer};
use crate::application::query::playlist::{MediaItem, PlaylistStore};
use crate::domain::orientation::ExifOrientation;
use crate::error::{Error, Result};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// How candidates are picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavigationMode {
    #[default]
    Sequential,
    Shuffle,
}

impl NavigationMode {
    #[must_use]
    pub fn from_shuffle(shuffle: bool) -> Self {
        if shuffle {
            NavigationMode::Shuffle
        } else {
            NavigationMode::Sequential
        }
    }
}

impl fmt::Display for NavigationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationMode::Sequential => write!(f, "sequential"),
            NavigationMode::Shuffle => write!(f, "shuffle"),
        }
    }
}

/// Which items a navigator accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompatibilityPolicy {
    /// Photos: shape must match the frame, EXIF rotation is undone.
    #[default]
    Orientation,
    /// Items whose dimensions are never read (videos): always shown, only the
    /// frame rotation is undone.
    FrameOnly,
}

/// Where the navigator stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavigationState {
    #[default]
    Unpositioned,
    Positioned(usize),
}

impl NavigationState {
    #[must_use]
    pub fn index(self) -> Option<usize> {
        match self {
            NavigationState::Unpositioned => None,
            NavigationState::Positioned(index) => Some(index),
        }
    }
}

/// What a `next`/`prev` call ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// The item at `index` was rendered with `rotation` degrees.
    Shown { index: usize, rotation: i32 },
    /// Nothing was rendered; the renderer got this notice instead.
    Nothing(Notice),
}

impl NavigationOutcome {
    #[must_use]
    pub fn shown_index(self) -> Option<usize> {
        match self {
            NavigationOutcome::Shown { index, .. } => Some(index),
            NavigationOutcome::Nothing(_) => None,
        }
    }
}

/// Navigation state snapshot for the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationInfo {
    /// Current position in the playlist (0-indexed), if positioned.
    pub current_index: Option<usize>,
    /// Playlist size as of the last refresh.
    pub total_count: usize,
    /// Number of entries on the shuffle history stack.
    pub history_len: usize,
    pub mode: NavigationMode,
    /// Candidates rejected during the last `next`/`prev` scan.
    pub skipped_last_step: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

/// Orientation-aware navigator over one player's playlist.
pub struct MediaNavigator {
    playlist: PlaylistStore,
    reader: Arc<dyn MetadataReader>,
    compass: Option<Arc<Compass>>,
    mode: NavigationMode,
    policy: CompatibilityPolicy,
    state: NavigationState,
    history: Vec<usize>,
    rng: SmallRng,
    skipped_last_step: usize,
}

impl MediaNavigator {
    /// Creates an unpositioned navigator.
    ///
    /// Without a compass, orientation matching is skipped and every
    /// readable item is shown.
    pub fn new(
        source: impl MediaSource + 'static,
        reader: Arc<dyn MetadataReader>,
        mode: NavigationMode,
        compass: Option<Arc<Compass>>,
    ) -> Self {
        Self {
            playlist: PlaylistStore::new(source),
            reader,
            compass,
            mode,
            policy: CompatibilityPolicy::default(),
            state: NavigationState::Unpositioned,
            history: Vec::new(),
            rng: SmallRng::from_os_rng(),
            skipped_last_step: 0,
        }
    }

    /// Replaces the shuffle RNG with a seeded one, for reproducible draws.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = SmallRng::seed_from_u64(seed);
        self
    }

    #[must_use]
    pub fn with_policy(mut self, policy: CompatibilityPolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub fn mode(&self) -> NavigationMode {
        self.mode
    }

    #[must_use]
    pub fn state(&self) -> NavigationState {
        self.state
    }

    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.state.index()
    }

    /// Shuffle history, oldest first.
    #[must_use]
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.playlist.size()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.playlist.is_empty()
    }

    /// Where the playlist comes from.
    #[must_use]
    pub fn location(&self) -> String {
        self.playlist.location()
    }

    /// Item the navigator currently stands on.
    #[must_use]
    pub fn current_item(&self) -> Option<&MediaItem> {
        self.state.index().and_then(|index| self.playlist.get(index))
    }

    /// Re-reads the playlist and drops any position it no longer covers.
    ///
    /// Returns the new size. A listing failure is logged and treated as an
    /// empty playlist.
    pub fn refresh(&mut self) -> usize {
        let size = match self.playlist.refresh() {
            Ok(size) => size,
            Err(err) => {
                warn!(location = %self.playlist.location(), %err, "could not list media");
                0
            }
        };

        if let NavigationState::Positioned(index) = self.state {
            if index >= size {
                info!(index, size, "playlist shrank past current item, unpositioning");
                self.state = NavigationState::Unpositioned;
            }
        }

        let before = self.history.len();
        self.history.retain(|&index| index < size);
        if self.history.len() != before {
            debug!(
                dropped = before - self.history.len(),
                "discarded stale history entries"
            );
        }

        size
    }

    /// Advances to the next displayable item and renders it.
    pub fn next(&mut self, renderer: &mut dyn Renderer) -> NavigationOutcome {
        self.scan(Direction::Forward, renderer)
    }

    /// Steps back.
    ///
    /// Sequential mode mirrors [`next`](Self::next). Shuffle mode undoes the
    /// last successful `next` by popping the history stack.
    pub fn prev(&mut self, renderer: &mut dyn Renderer) -> NavigationOutcome {
        match self.mode {
            NavigationMode::Sequential => self.scan(Direction::Backward, renderer),
            NavigationMode::Shuffle => self.pop_history(renderer),
        }
    }

    /// Re-renders the current item if it still fits the frame.
    ///
    /// Returns `false` when unpositioned or when the frame was turned and
    /// the item no longer fits.
    pub fn show_current(&mut self, renderer: &mut dyn Renderer) -> bool {
        let Some(index) = self.state.index() else {
            return false;
        };
        match evaluate(
            &self.playlist,
            self.reader.as_ref(),
            self.compass.as_deref(),
            self.policy,
            index,
        ) {
            Some((item, rotation)) => {
                renderer.render(item, rotation);
                true
            }
            None => false,
        }
    }

    /// Human-readable properties of the current item, for a details popup.
    #[must_use]
    pub fn current_properties(&self) -> Vec<String> {
        let Some(index) = self.state.index() else {
            return Vec::new();
        };
        let Some(item) = self.playlist.get(index) else {
            return Vec::new();
        };

        let mut lines = vec![
            item.display_name(),
            format!("{} / {}", index + 1, self.playlist.size()),
        ];
        if self.policy == CompatibilityPolicy::Orientation {
            match item_details(item, self.reader.as_ref()) {
                Ok(details) => lines.extend(details),
                Err(err) => {
                    warn!(path = %item.path().display(), %err, "cannot describe media");
                    lines.push(err.to_string());
                }
            }
        }
        lines
    }

    /// Deletes the current item from its source, then shows the next one.
    ///
    /// Shuffle history is renumbered so it keeps pointing at the same files.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoCurrentMedia`] when unpositioned, or the source's
    /// error if it refused the deletion. Nothing changes on error.
    pub fn delete_current(&mut self, renderer: &mut dyn Renderer) -> Result<NavigationOutcome> {
        let index = self.state.index().ok_or(Error::NoCurrentMedia)?;
        let path = self.playlist.remove(index)?;
        info!(index, path = %path.display(), "deleted media");

        self.history.retain(|&entry| entry != index);
        for entry in &mut self.history {
            if *entry > index {
                *entry -= 1;
            }
        }
        self.state = match index.checked_sub(1) {
            Some(previous) => NavigationState::Positioned(previous),
            None => NavigationState::Unpositioned,
        };
        Ok(self.next(renderer))
    }

    /// Returns a snapshot of the navigation state.
    #[must_use]
    pub fn navigation_info(&self) -> NavigationInfo {
        NavigationInfo {
            current_index: self.current_index(),
            total_count: self.playlist.size(),
            history_len: self.history.len(),
            mode: self.mode,
            skipped_last_step: self.skipped_last_step,
        }
    }

    fn scan(&mut self, direction: Direction, renderer: &mut dyn Renderer) -> NavigationOutcome {
        let total = self.refresh();
        self.skipped_last_step = 0;

        if total == 0 {
            self.state = NavigationState::Unpositioned;
            return notify(renderer, Notice::NoMedia);
        }

        let mut candidate = self.state.index();
        // `total` is captured once: the loop is bounded even if the folder changes meanwhile.
        for _ in 0..total {
            let index = match self.mode {
                NavigationMode::Sequential => step(candidate, direction, total),
                NavigationMode::Shuffle => self.rng.random_range(0..total),
            };
            candidate = Some(index);

            let verdict = evaluate(
                &self.playlist,
                self.reader.as_ref(),
                self.compass.as_deref(),
                self.policy,
                index,
            );
            if let Some((item, rotation)) = verdict {
                self.state = NavigationState::Positioned(index);
                if self.mode == NavigationMode::Shuffle {
                    self.history.push(index);
                }
                debug!(index, rotation, path = %item.path().display(), "showing media");
                renderer.render(item, rotation);
                return NavigationOutcome::Shown { index, rotation };
            }
            self.skipped_last_step += 1;
        }

        warn!(
            total,
            location = %self.playlist.location(),
            "no media fits the frame orientation"
        );
        self.state = NavigationState::Unpositioned;
        notify(renderer, Notice::NoDisplayableMedia)
    }

    fn pop_history(&mut self, renderer: &mut dyn Renderer) -> NavigationOutcome {
        let total = self.refresh();
        self.skipped_last_step = 0;

        if total == 0 {
            self.history.clear();
            self.state = NavigationState::Unpositioned;
            return notify(renderer, Notice::NoMedia);
        }

        self.history.pop();
        let Some(index) = self.history.last().copied() else {
            debug!("shuffle history exhausted");
            self.state = NavigationState::Unpositioned;
            return notify(renderer, Notice::NoMoreHistory);
        };

        let Some(item) = self.playlist.get(index) else {
            // `refresh` keeps history within bounds.
            self.state = NavigationState::Unpositioned;
            return notify(renderer, Notice::NoMedia);
        };
        self.state = NavigationState::Positioned(index);
        let rotation = replay_rotation(
            item,
            self.reader.as_ref(),
            self.compass.as_deref(),
            self.policy,
        );
        debug!(index, rotation, path = %item.path().display(), "back to previous media");
        renderer.render(item, rotation);
        NavigationOutcome::Shown { index, rotation }
    }
}

/// Neighbour of `from`, wrapping at both ends. Unpositioned starts at an end.
fn step(from: Option<usize>, direction: Direction, total: usize) -> usize {
    match (direction, from) {
        (Direction::Forward, Some(index)) if index + 1 < total => index + 1,
        (Direction::Forward, _) => 0,
        (Direction::Backward, Some(index)) if index > 0 && index < total => index - 1,
        (Direction::Backward, _) => total - 1,
    }
}

fn notify(renderer: &mut dyn Renderer, notice: Notice) -> NavigationOutcome {
    renderer.notify(notice);
    NavigationOutcome::Nothing(notice)
}

/// Decides whether the item at `index` can be shown, and at what angle.
///
/// Per-item failures are logged and turn into a skip.
fn evaluate<'a>(
    playlist: &'a PlaylistStore,
    reader: &dyn MetadataReader,
    compass: Option<&Compass>,
    policy: CompatibilityPolicy,
    index: usize,
) -> Option<(&'a MediaItem, i32)> {
    let item = match playlist.item_at(index) {
        Ok(item) => item,
        Err(err) => {
            warn!(%err, "candidate vanished");
            return None;
        }
    };

    if policy == CompatibilityPolicy::FrameOnly {
        return Some((item, frame_correction(compass)));
    }

    let metadata = match item.metadata(reader) {
        Ok(metadata) => metadata,
        Err(err) => {
            warn!(path = %item.path().display(), %err, "skipping unreadable media");
            return None;
        }
    };

    match compatibility::check(metadata, compass) {
        Ok(Compatibility::Compatible { rotation }) => Some((item, rotation)),
        Ok(Compatibility::Mismatch { frame, photo }) => {
            debug!(
                path = %item.path().display(),
                ?frame,
                ?photo,
                "skipping media with mismatched orientation"
            );
            None
        }
        Err(err) => {
            warn!(path = %item.path().display(), %err, "skipping media");
            None
        }
    }
}

/// Size, orientation and EXIF lines of a photo.
fn item_details(item: &MediaItem, reader: &dyn MetadataReader) -> Result<Vec<String>> {
    let metadata = item.checked_metadata(reader)?;
    let orientation = ExifOrientation::from_tag(metadata.exif_orientation)?;

    let mut lines = vec![format!("{} x {}", metadata.width, metadata.height)];
    if orientation != ExifOrientation::NORMAL {
        lines.push(format!("Orientation: {}°", orientation.angle().degrees()));
    }
    lines.extend(metadata.details.properties());
    Ok(lines)
}

/// Angle for an item coming back from history.
///
/// It fit when it was pushed, so it is not re-checked; only the angle is
/// recomputed because the frame may have turned since.
fn replay_rotation(
    item: &MediaItem,
    reader: &dyn MetadataReader,
    compass: Option<&Compass>,
    policy: CompatibilityPolicy,
) -> i32 {
    let base = frame_correction(compass);
    if policy == CompatibilityPolicy::FrameOnly {
        return base;
    }
    item.metadata(reader)
        .ok()
        .and_then(|metadata| ExifOrientation::from_tag(metadata.exif_orientation).ok())
        .map_or(base, |orientation| {
            base - orientation.angle().signed_degrees()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::compass::FixedAngle;
    use crate::application::port::MetadataError;
    use crate::domain::media::MediaMetadata;
    use std::collections::HashMap;
    use std::path::{Path, PathBuf};
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Mutex;

    /// In-memory folder whose content can change between steps.
    #[derive(Clone, Default)]
    struct Folder(Arc<Mutex<Vec<PathBuf>>>);

    impl Folder {
        fn with(names: &[&str]) -> Self {
            let folder = Folder::default();
            folder.set(names);
            folder
        }

        fn set(&self, names: &[&str]) {
            *self.0.lock().expect("poisoned") = names.iter().map(PathBuf::from).collect();
        }
    }

    impl MediaSource for Folder {
        fn list(&self) -> Result<Vec<PathBuf>> {
            Ok(self.0.lock().expect("poisoned").clone())
        }

        fn location(&self) -> String {
            "memory".into()
        }

        fn remove(&self, path: &Path) -> Result<()> {
            self.0.lock().expect("poisoned").retain(|entry| entry != path);
            Ok(())
        }
    }

    /// Folder that lists fine but refuses deletions.
    struct ReadOnlyFolder;

    impl MediaSource for ReadOnlyFolder {
        fn list(&self) -> Result<Vec<PathBuf>> {
            Ok(NAMES.iter().map(PathBuf::from).collect())
        }

        fn location(&self) -> String {
            "/mnt/cdrom".into()
        }
    }

    struct BrokenFolder;

    impl MediaSource for BrokenFolder {
        fn list(&self) -> Result<Vec<PathBuf>> {
            Err(Error::Io("permission denied".into()))
        }

        fn location(&self) -> String {
            "/nowhere".into()
        }
    }

    /// Metadata by file name; names not listed are unreadable.
    #[derive(Default)]
    struct Catalog(HashMap<String, MediaMetadata>);

    impl Catalog {
        fn landscape(names: &[&str]) -> Self {
            let mut catalog = Catalog::default();
            for name in names {
                catalog.add(name, 40, 30, None);
            }
            catalog
        }

        fn add(&mut self, name: &str, width: u32, height: u32, tag: Option<i64>) {
            self.0
                .insert(name.to_string(), MediaMetadata::new(width, height, tag));
        }
    }

    impl MetadataReader for Catalog {
        fn read(&self, path: &Path) -> std::result::Result<MediaMetadata, MetadataError> {
            let name = path.to_string_lossy();
            self.0
                .get(name.as_ref())
                .cloned()
                .ok_or(MetadataError::NotFound)
        }
    }

    /// Catalog that can start failing every read.
    struct Flaky {
        catalog: Catalog,
        broken: Arc<AtomicBool>,
    }

    impl MetadataReader for Flaky {
        fn read(&self, path: &Path) -> std::result::Result<MediaMetadata, MetadataError> {
            if self.broken.load(Ordering::SeqCst) {
                return Err(MetadataError::Unreadable("truncated".into()));
            }
            self.catalog.read(path)
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        Render(PathBuf, i32),
        Notice(Notice),
    }

    #[derive(Default)]
    struct Recorder(Vec<Event>);

    impl Renderer for Recorder {
        fn render(&mut self, item: &MediaItem, rotation: i32) {
            self.0.push(Event::Render(item.path().to_path_buf(), rotation));
        }

        fn notify(&mut self, notice: Notice) {
            self.0.push(Event::Notice(notice));
        }

        fn show_text(&mut self, _lines: &[String]) {}
    }

    const NAMES: [&str; 4] = ["a.jpg", "b.jpg", "c.jpg", "d.jpg"];

    fn navigator(mode: NavigationMode, compass: Option<Compass>) -> MediaNavigator {
        MediaNavigator::new(
            Folder::with(&NAMES),
            Arc::new(Catalog::landscape(&NAMES)),
            mode,
            compass.map(Arc::new),
        )
        .with_seed(7)
    }

    #[test]
    fn starts_unpositioned() {
        let nav = navigator(NavigationMode::Sequential, None);
        assert_eq!(nav.state(), NavigationState::Unpositioned);
        assert_eq!(nav.current_index(), None);
        assert!(nav.current_item().is_none());
    }

    #[test]
    fn sequential_next_wraps_in_order() {
        let mut nav = navigator(NavigationMode::Sequential, None);
        let mut renderer = Recorder::default();
        let visited: Vec<_> = (0..2 * NAMES.len())
            .map(|_| nav.next(&mut renderer).shown_index())
            .collect();
        let expected: Vec<_> = [0, 1, 2, 3, 0, 1, 2, 3].into_iter().map(Some).collect();
        assert_eq!(visited, expected);
        assert_eq!(renderer.0.len(), 8);
    }

    #[test]
    fn sequential_prev_replays_in_reverse() {
        let mut nav = navigator(NavigationMode::Sequential, None);
        let mut renderer = Recorder::default();
        let forward: Vec<_> = (0..6).filter_map(|_| nav.next(&mut renderer).shown_index())
            .collect();

        let mut backward = vec![nav.current_index().expect("positioned")];
        for _ in 0..5 {
            backward.push(nav.prev(&mut renderer).shown_index().expect("shown"));
        }
        backward.reverse();
        assert_eq!(backward, forward);
    }

    #[test]
    fn sequential_prev_from_unpositioned_starts_at_last() {
        let mut nav = navigator(NavigationMode::Sequential, None);
        let mut renderer = Recorder::default();
        assert_eq!(nav.prev(&mut renderer).shown_index(), Some(3));
        assert_eq!(nav.prev(&mut renderer).shown_index(), Some(2));
    }

    #[test]
    fn sequential_mode_keeps_no_history() {
        let mut nav = navigator(NavigationMode::Sequential, None);
        let mut renderer = Recorder::default();
        nav.next(&mut renderer);
        nav.next(&mut renderer);
        assert!(nav.history().is_empty());
    }

    #[test]
    fn empty_playlist_notifies_no_media() {
        let mut nav = MediaNavigator::new(
            Folder::default(),
            Arc::new(Catalog::default()),
            NavigationMode::Sequential,
            None,
        );
        let mut renderer = Recorder::default();
        assert_eq!(
            nav.next(&mut renderer),
            NavigationOutcome::Nothing(Notice::NoMedia)
        );
        assert_eq!(nav.state(), NavigationState::Unpositioned);
        assert_eq!(renderer.0, vec![Event::Notice(Notice::NoMedia)]);
    }

    #[test]
    fn listing_failure_reads_as_empty() {
        let mut nav = MediaNavigator::new(
            BrokenFolder,
            Arc::new(Catalog::default()),
            NavigationMode::Shuffle,
            None,
        );
        let mut renderer = Recorder::default();
        assert_eq!(
            nav.next(&mut renderer),
            NavigationOutcome::Nothing(Notice::NoMedia)
        );
    }

    #[test]
    fn shuffle_prev_undoes_history_exactly() {
        let mut nav = navigator(NavigationMode::Shuffle, None);
        let mut renderer = Recorder::default();
        for _ in 0..9 {
            assert!(nav.next(&mut renderer).shown_index().is_some());
        }
        let history = nav.history().to_vec();
        assert_eq!(history.len(), 9);

        for expected in history.iter().rev() {
            assert_eq!(nav.current_index(), Some(*expected));
            nav.prev(&mut renderer);
        }
        assert_eq!(nav.state(), NavigationState::Unpositioned);
        assert!(nav.history().is_empty());
        assert_eq!(
            renderer.0.last(),
            Some(&Event::Notice(Notice::NoMoreHistory))
        );
    }

    #[test]
    fn shuffle_prev_without_history_renders_nothing() {
        let mut nav = navigator(NavigationMode::Shuffle, None);
        let mut renderer = Recorder::default();
        assert_eq!(
            nav.prev(&mut renderer),
            NavigationOutcome::Nothing(Notice::NoMoreHistory)
        );
        assert_eq!(nav.current_index(), None);
    }

    #[test]
    fn shuffle_draws_stay_in_range_and_are_reproducible() {
        let mut first = navigator(NavigationMode::Shuffle, None);
        let mut second = navigator(NavigationMode::Shuffle, None);
        let mut renderer = Recorder::default();
        for _ in 0..50 {
            let a = first.next(&mut renderer).shown_index().expect("shown");
            let b = second.next(&mut renderer).shown_index().expect("shown");
            assert!(a < NAMES.len());
            assert_eq!(a, b);
        }
    }

    #[test]
    fn all_incompatible_terminates_unpositioned() {
        // Landscape photos on a portrait frame.
        let mut nav = navigator(NavigationMode::Sequential, Some(Compass::fixed(90.0, false)));
        let mut renderer = Recorder::default();
        assert_eq!(
            nav.next(&mut renderer),
            NavigationOutcome::Nothing(Notice::NoDisplayableMedia)
        );
        assert_eq!(nav.state(), NavigationState::Unpositioned);
        assert_eq!(nav.navigation_info().skipped_last_step, NAMES.len());

        let mut shuffled = navigator(NavigationMode::Shuffle, Some(Compass::fixed(90.0, false)));
        assert_eq!(
            shuffled.next(&mut renderer),
            NavigationOutcome::Nothing(Notice::NoDisplayableMedia)
        );
        assert!(shuffled.history().is_empty());
    }

    #[test]
    fn single_incompatible_item_terminates() {
        let mut catalog = Catalog::default();
        catalog.add("only.jpg", 30, 40, None);
        let mut nav = MediaNavigator::new(
            Folder::with(&["only.jpg"]),
            Arc::new(catalog),
            NavigationMode::Sequential,
            Some(Arc::new(Compass::fixed(0.0, false))),
        );
        let mut renderer = Recorder::default();
        assert_eq!(
            nav.next(&mut renderer),
            NavigationOutcome::Nothing(Notice::NoDisplayableMedia)
        );
        assert_eq!(nav.navigation_info().skipped_last_step, 1);
    }

    #[test]
    fn incompatible_items_are_skipped_and_angle_is_reported() {
        let mut catalog = Catalog::default();
        catalog.add("wide.jpg", 40, 30, None);
        catalog.add("tall.jpg", 30, 40, None);
        catalog.add("turned.jpg", 40, 30, Some(6));
        let mut nav = MediaNavigator::new(
            Folder::with(&["wide.jpg", "tall.jpg", "turned.jpg"]),
            Arc::new(catalog),
            NavigationMode::Sequential,
            Some(Arc::new(Compass::fixed(90.0, false))),
        );
        let mut renderer = Recorder::default();

        assert_eq!(
            nav.next(&mut renderer),
            NavigationOutcome::Shown {
                index: 1,
                rotation: -90
            }
        );
        assert_eq!(
            nav.next(&mut renderer),
            NavigationOutcome::Shown {
                index: 2,
                rotation: -180
            }
        );
        // Wraps past the landscape photo at 0.
        assert_eq!(nav.next(&mut renderer).shown_index(), Some(1));
        assert_eq!(nav.navigation_info().skipped_last_step, 1);
    }

    #[test]
    fn unreadable_and_invalid_exif_items_are_skipped() {
        let mut catalog = Catalog::default();
        catalog.add("bad-tag.jpg", 40, 30, Some(5));
        catalog.add("good.jpg", 40, 30, Some(1));
        let mut nav = MediaNavigator::new(
            Folder::with(&["missing.jpg", "bad-tag.jpg", "good.jpg"]),
            Arc::new(catalog),
            NavigationMode::Sequential,
            None,
        );
        let mut renderer = Recorder::default();
        for _ in 0..3 {
            assert_eq!(nav.next(&mut renderer).shown_index(), Some(2));
        }
        assert!(renderer
            .0
            .iter()
            .all(|event| matches!(event, Event::Render(path, 0) if path.ends_with("good.jpg"))));
    }

    #[test]
    fn shrinking_playlist_unpositions() {
        let folder = Folder::with(&NAMES);
        let mut nav = MediaNavigator::new(
            folder.clone(),
            Arc::new(Catalog::landscape(&NAMES)),
            NavigationMode::Sequential,
            None,
        );
        let mut renderer = Recorder::default();
        for _ in 0..4 {
            nav.next(&mut renderer);
        }
        assert_eq!(nav.current_index(), Some(3));

        folder.set(&["a.jpg", "b.jpg"]);
        assert_eq!(nav.refresh(), 2);
        assert_eq!(nav.state(), NavigationState::Unpositioned);
        // Restarts from the beginning rather than clamping to the last item.
        assert_eq!(nav.next(&mut renderer).shown_index(), Some(0));
    }

    #[test]
    fn shrinking_playlist_drops_stale_history() {
        let folder = Folder::with(&NAMES);
        let mut nav = MediaNavigator::new(
            folder.clone(),
            Arc::new(Catalog::landscape(&NAMES)),
            NavigationMode::Shuffle,
            None,
        )
        .with_seed(3);
        let mut renderer = Recorder::default();
        for _ in 0..20 {
            nav.next(&mut renderer);
        }

        folder.set(&["a.jpg"]);
        nav.refresh();
        assert!(nav.history().iter().all(|&index| index == 0));
        while nav.prev(&mut renderer).shown_index().is_some() {
            assert_eq!(nav.current_index(), Some(0));
        }
        assert_eq!(nav.state(), NavigationState::Unpositioned);
    }

    #[test]
    fn shuffle_prev_recomputes_angle_after_frame_turns() {
        let mut catalog = Catalog::default();
        catalog.add("square.jpg", 30, 30, None);
        let angle = Arc::new(FixedAngle::new(90.0));
        let compass = Compass::new(Arc::clone(&angle), false);
        let mut nav = MediaNavigator::new(
            Folder::with(&["square.jpg"]),
            Arc::new(catalog),
            NavigationMode::Shuffle,
            Some(Arc::new(compass)),
        );
        let mut renderer = Recorder::default();
        nav.next(&mut renderer);
        nav.next(&mut renderer);

        // Turned to landscape: a square photo no longer fits, but history replays it.
        angle.set_angle(180.0);
        assert_eq!(
            nav.prev(&mut renderer),
            NavigationOutcome::Shown {
                index: 0,
                rotation: -180
            }
        );
    }

    #[test]
    fn frame_only_policy_accepts_everything() {
        let mut nav = MediaNavigator::new(
            Folder::with(&["clip.mp4", "other.mkv"]),
            Arc::new(Catalog::default()),
            NavigationMode::Sequential,
            Some(Arc::new(Compass::fixed(270.0, false))),
        )
        .with_policy(CompatibilityPolicy::FrameOnly);
        let mut renderer = Recorder::default();
        assert_eq!(
            nav.next(&mut renderer),
            NavigationOutcome::Shown {
                index: 0,
                rotation: -270
            }
        );
    }

    #[test]
    fn show_current_rechecks_the_frame() {
        let angle = Arc::new(FixedAngle::new(0.0));
        let mut nav = MediaNavigator::new(
            Folder::with(&NAMES),
            Arc::new(Catalog::landscape(&NAMES)),
            NavigationMode::Sequential,
            Some(Arc::new(Compass::new(Arc::clone(&angle), false))),
        );
        let mut renderer = Recorder::default();
        assert!(!nav.show_current(&mut renderer));
        nav.next(&mut renderer);
        assert!(nav.show_current(&mut renderer));
        angle.set_angle(90.0);
        assert!(!nav.show_current(&mut renderer));
    }

    #[test]
    fn current_properties_and_info() {
        let mut nav = navigator(NavigationMode::Shuffle, None);
        let mut renderer = Recorder::default();
        assert!(nav.current_properties().is_empty());

        let index = nav.next(&mut renderer).shown_index().expect("shown");
        let properties = nav.current_properties();
        assert_eq!(properties[0], NAMES[index]);
        assert_eq!(properties[1], format!("{} / 4", index + 1));
        assert_eq!(properties[2], "40 x 30");

        let info = nav.navigation_info();
        assert_eq!(info.current_index, Some(index));
        assert_eq!(info.total_count, 4);
        assert_eq!(info.history_len, 1);
        assert_eq!(info.mode, NavigationMode::Shuffle);
    }

    #[test]
    fn step_wraps_both_ways() {
        assert_eq!(step(None, Direction::Forward, 3), 0);
        assert_eq!(step(Some(1), Direction::Forward, 3), 2);
        assert_eq!(step(Some(2), Direction::Forward, 3), 0);
        assert_eq!(step(None, Direction::Backward, 3), 2);
        assert_eq!(step(Some(0), Direction::Backward, 3), 2);
        assert_eq!(step(Some(2), Direction::Backward, 3), 1);
        assert_eq!(step(Some(0), Direction::Forward, 1), 0);
        assert_eq!(step(Some(0), Direction::Backward, 1), 0);
    }

    #[test]
    fn shuffle_prev_positions_only_on_shown_items() {
        let folder = Folder::with(&NAMES);
        let mut nav = MediaNavigator::new(
            folder.clone(),
            Arc::new(Catalog::landscape(&NAMES)),
            NavigationMode::Shuffle,
            None,
        )
        .with_seed(11);
        let mut renderer = Recorder::default();
        for _ in 0..12 {
            nav.next(&mut renderer);
        }

        folder.set(&["a.jpg", "b.jpg"]);
        loop {
            match nav.prev(&mut renderer) {
                NavigationOutcome::Shown { index, .. } => {
                    assert!(index < 2);
                    assert_eq!(nav.state(), NavigationState::Positioned(index));
                }
                NavigationOutcome::Nothing(_) => {
                    assert_eq!(nav.state(), NavigationState::Unpositioned);
                    break;
                }
            }
        }
    }

    #[test]
    fn current_properties_show_rotated_orientation() {
        let mut catalog = Catalog::default();
        catalog.add("turned.jpg", 30, 40, Some(6));
        let mut nav = MediaNavigator::new(
            Folder::with(&["turned.jpg"]),
            Arc::new(catalog),
            NavigationMode::Sequential,
            None,
        );
        let mut renderer = Recorder::default();
        nav.next(&mut renderer);
        assert_eq!(
            nav.current_properties(),
            vec!["turned.jpg", "1 / 1", "30 x 40", "Orientation: 90°"]
        );
    }

    #[test]
    fn current_properties_report_unreadable_media() {
        let broken = Arc::new(AtomicBool::new(false));
        let reader = Flaky {
            catalog: Catalog::landscape(&NAMES),
            broken: Arc::clone(&broken),
        };
        let mut nav = MediaNavigator::new(
            Folder::with(&NAMES),
            Arc::new(reader),
            NavigationMode::Shuffle,
            None,
        )
        .with_seed(5);
        let mut renderer = Recorder::default();
        nav.next(&mut renderer);
        nav.next(&mut renderer);

        // `prev` refreshes, so the cached metadata is gone and re-read.
        broken.store(true, Ordering::SeqCst);
        let index = nav.prev(&mut renderer).shown_index().expect("shown");
        let properties = nav.current_properties();
        assert_eq!(properties[0], NAMES[index]);
        assert_eq!(properties.len(), 3);
        assert!(properties[2].starts_with("Unreadable media"));
        assert!(properties[2].contains("truncated"));
    }

    #[test]
    fn item_details_reject_invalid_exif_codes() {
        let mut catalog = Catalog::default();
        catalog.add("mirrored.jpg", 40, 30, Some(5));
        let item = MediaItem::new(PathBuf::from("mirrored.jpg"));
        assert!(matches!(
            item_details(&item, &catalog),
            Err(Error::InvalidExifCode(5))
        ));

        let missing = MediaItem::new(PathBuf::from("missing.jpg"));
        assert!(matches!(
            item_details(&missing, &catalog),
            Err(Error::UnreadableMedia { .. })
        ));
    }

    #[test]
    fn video_properties_skip_metadata() {
        let mut nav = MediaNavigator::new(
            Folder::with(&["clip.mp4"]),
            Arc::new(Catalog::default()),
            NavigationMode::Sequential,
            None,
        )
        .with_policy(CompatibilityPolicy::FrameOnly);
        let mut renderer = Recorder::default();
        nav.next(&mut renderer);
        assert_eq!(nav.current_properties(), vec!["clip.mp4", "1 / 1"]);
    }

    #[test]
    fn delete_current_removes_item_and_shows_the_next() {
        let folder = Folder::with(&NAMES);
        let mut nav = MediaNavigator::new(
            folder.clone(),
            Arc::new(Catalog::landscape(&NAMES)),
            NavigationMode::Sequential,
            None,
        );
        let mut renderer = Recorder::default();
        assert!(matches!(
            nav.delete_current(&mut renderer),
            Err(Error::NoCurrentMedia)
        ));

        nav.next(&mut renderer);
        nav.next(&mut renderer);
        let outcome = nav.delete_current(&mut renderer).expect("delete");
        assert_eq!(outcome.shown_index(), Some(1));
        assert_eq!(
            nav.current_item().map(MediaItem::path),
            Some(Path::new("c.jpg"))
        );
        assert_eq!(nav.len(), 3);
        assert_eq!(folder.list().expect("list").len(), 3);

        // Deleting the first item restarts from the new first item.
        nav.prev(&mut renderer);
        assert_eq!(nav.current_index(), Some(0));
        nav.delete_current(&mut renderer).expect("delete");
        assert_eq!(
            nav.current_item().map(MediaItem::path),
            Some(Path::new("c.jpg"))
        );
    }

    #[test]
    fn delete_current_renumbers_shuffle_history() {
        let mut nav = navigator(NavigationMode::Shuffle, None);
        let mut renderer = Recorder::default();
        for _ in 0..8 {
            nav.next(&mut renderer);
        }
        let deleted = nav.current_index().expect("positioned");
        let expected: Vec<usize> = nav
            .history()
            .iter()
            .filter(|&&entry| entry != deleted)
            .map(|&entry| if entry > deleted { entry - 1 } else { entry })
            .collect();

        nav.delete_current(&mut renderer).expect("delete");
        assert_eq!(nav.len(), 3);
        // The follow-up `next` pushed one fresh entry on top.
        assert_eq!(nav.history().len(), expected.len() + 1);
        assert_eq!(&nav.history()[..expected.len()], expected.as_slice());
        assert!(nav.history().iter().all(|&entry| entry < 3));
    }

    #[test]
    fn delete_on_read_only_source_keeps_position() {
        let mut nav = MediaNavigator::new(
            ReadOnlyFolder,
            Arc::new(Catalog::landscape(&NAMES)),
            NavigationMode::Sequential,
            None,
        );
        let mut renderer = Recorder::default();
        nav.next(&mut renderer);
        let err = nav.delete_current(&mut renderer).expect_err("read-only");
        assert!(err.to_string().contains("read-only"));
        assert_eq!(nav.current_index(), Some(0));
        assert_eq!(nav.len(), 4);
    }
}
