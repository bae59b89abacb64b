// SPDX-License-Identifier: MPL-2.0
//! Frame players.
//!
//! A frame cycles between players. Each one reacts to the same small set of
//! commands; [`FramePlayer`] dispatches them to the concrete variant.

use crate::application::compass::Compass;
use crate::application::port::{MediaSource, MetadataReader, Renderer};
use crate::application::query::navigation::{
    CompatibilityPolicy, MediaNavigator, NavigationMode, NavigationOutcome,
};
use crate::error::Result;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Commands every player understands.
pub trait Player {
    fn name(&self) -> &str;

    /// Shows the next item (or page).
    fn next(&mut self, renderer: &mut dyn Renderer);

    /// Shows the previous item (or page).
    fn prev(&mut self, renderer: &mut dyn Renderer);

    /// Re-renders the current item. Returns `false` if it cannot be shown.
    fn show_current_media(&mut self, renderer: &mut dyn Renderer) -> bool;

    /// Key/value style lines about the current state.
    fn properties(&self) -> Vec<String>;

    /// One-line summary of what this player does.
    fn description(&self) -> String;
}

// =============================================================================
// PhotoPlayer
// =============================================================================

/// Slideshow over a folder of photos, skipping ones that do not fit the frame.
pub struct PhotoPlayer {
    name: String,
    folder: PathBuf,
    navigator: MediaNavigator,
}

impl PhotoPlayer {
    pub fn new(
        name: impl Into<String>,
        folder: impl Into<PathBuf>,
        source: impl MediaSource + 'static,
        reader: Arc<dyn MetadataReader>,
        mode: NavigationMode,
        compass: Option<Arc<Compass>>,
    ) -> Self {
        Self {
            name: name.into(),
            folder: folder.into(),
            navigator: MediaNavigator::new(source, reader, mode, compass),
        }
    }

    /// Seeds the shuffle order.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.navigator = self.navigator.with_seed(seed);
        self
    }

    #[must_use]
    pub fn folder(&self) -> &Path {
        &self.folder
    }

    #[must_use]
    pub fn navigator(&self) -> &MediaNavigator {
        &self.navigator
    }

    /// Details of the current photo for a popup.
    #[must_use]
    pub fn current_details(&self) -> Vec<String> {
        self.navigator.current_properties()
    }

    /// Deletes the current photo from the folder and shows the next one.
    ///
    /// # Errors
    ///
    /// See [`MediaNavigator::delete_current`].
    pub fn delete_current(&mut self, renderer: &mut dyn Renderer) -> Result<NavigationOutcome> {
        self.navigator.delete_current(renderer)
    }
}

impl Player for PhotoPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn next(&mut self, renderer: &mut dyn Renderer) {
        self.navigator.next(renderer);
    }

    fn prev(&mut self, renderer: &mut dyn Renderer) {
        self.navigator.prev(renderer);
    }

    fn show_current_media(&mut self, renderer: &mut dyn Renderer) -> bool {
        self.navigator.show_current(renderer)
    }

    fn properties(&self) -> Vec<String> {
        media_properties(&self.folder, &self.navigator)
    }

    fn description(&self) -> String {
        format!("Photo player ({})", self.navigator.mode())
    }
}

// =============================================================================
// VideoPlayer
// =============================================================================

/// Plays videos from a folder. Clips are never opened, so every one is shown
/// and only the frame rotation is compensated.
pub struct VideoPlayer {
    name: String,
    folder: PathBuf,
    navigator: MediaNavigator,
}

impl VideoPlayer {
    pub fn new(
        name: impl Into<String>,
        folder: impl Into<PathBuf>,
        source: impl MediaSource + 'static,
        reader: Arc<dyn MetadataReader>,
        mode: NavigationMode,
        compass: Option<Arc<Compass>>,
    ) -> Self {
        Self {
            name: name.into(),
            folder: folder.into(),
            navigator: MediaNavigator::new(source, reader, mode, compass)
                .with_policy(CompatibilityPolicy::FrameOnly),
        }
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.navigator = self.navigator.with_seed(seed);
        self
    }

    #[must_use]
    pub fn folder(&self) -> &Path {
        &self.folder
    }

    #[must_use]
    pub fn navigator(&self) -> &MediaNavigator {
        &self.navigator
    }
}

impl Player for VideoPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn next(&mut self, renderer: &mut dyn Renderer) {
        self.navigator.next(renderer);
    }

    fn prev(&mut self, renderer: &mut dyn Renderer) {
        self.navigator.prev(renderer);
    }

    fn show_current_media(&mut self, renderer: &mut dyn Renderer) -> bool {
        self.navigator.show_current(renderer)
    }

    fn properties(&self) -> Vec<String> {
        media_properties(&self.folder, &self.navigator)
    }

    fn description(&self) -> String {
        format!("Video player ({})", self.navigator.mode())
    }
}

fn media_properties(folder: &Path, navigator: &MediaNavigator) -> Vec<String> {
    let mut lines = vec![
        format!("Folder: {}", folder.display()),
        format!("Media count: {}", navigator.len()),
    ];
    if let Some(item) = navigator.current_item() {
        lines.push(format!("Current: {}", item.display_name()));
    }
    lines
}

// =============================================================================
// Dashboard
// =============================================================================

/// Text page summarising the frame. The frame keeps the summary current.
#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    name: String,
    summary: Vec<String>,
}

impl Dashboard {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            summary: Vec::new(),
        }
    }

    pub fn set_summary(&mut self, lines: Vec<String>) {
        self.summary = lines;
    }

    #[must_use]
    pub fn summary(&self) -> &[String] {
        &self.summary
    }
}

impl Player for Dashboard {
    fn name(&self) -> &str {
        &self.name
    }

    fn next(&mut self, renderer: &mut dyn Renderer) {
        renderer.show_text(&self.summary);
    }

    fn prev(&mut self, renderer: &mut dyn Renderer) {
        renderer.show_text(&self.summary);
    }

    fn show_current_media(&mut self, renderer: &mut dyn Renderer) -> bool {
        renderer.show_text(&self.summary);
        true
    }

    fn properties(&self) -> Vec<String> {
        Vec::new()
    }

    fn description(&self) -> String {
        "Frame dashboard".to_string()
    }
}

// =============================================================================
// FramePlayer
// =============================================================================

/// Any player a frame can hold.
pub enum FramePlayer {
    Photo(PhotoPlayer),
    Video(VideoPlayer),
    Dashboard(Dashboard),
}

impl FramePlayer {
    fn as_player(&self) -> &dyn Player {
        match self {
            FramePlayer::Photo(player) => player,
            FramePlayer::Video(player) => player,
            FramePlayer::Dashboard(player) => player,
        }
    }

    fn as_player_mut(&mut self) -> &mut dyn Player {
        match self {
            FramePlayer::Photo(player) => player,
            FramePlayer::Video(player) => player,
            FramePlayer::Dashboard(player) => player,
        }
    }

    /// Details for the popup shown on a centre click. Only photo players have one.
    #[must_use]
    pub fn details(&self) -> Option<Vec<String>> {
        match self {
            FramePlayer::Photo(player) => Some(player.current_details()),
            FramePlayer::Video(_) | FramePlayer::Dashboard(_) => None,
        }
    }

    #[must_use]
    pub fn is_dashboard(&self) -> bool {
        matches!(self, FramePlayer::Dashboard(_))
    }
}

impl Player for FramePlayer {
    fn name(&self) -> &str {
        self.as_player().name()
    }

    fn next(&mut self, renderer: &mut dyn Renderer) {
        self.as_player_mut().next(renderer);
    }

    fn prev(&mut self, renderer: &mut dyn Renderer) {
        self.as_player_mut().prev(renderer);
    }

    fn show_current_media(&mut self, renderer: &mut dyn Renderer) -> bool {
        self.as_player_mut().show_current_media(renderer)
    }

    fn properties(&self) -> Vec<String> {
        self.as_player().properties()
    }

    fn description(&self) -> String {
        self.as_player().description()
    }
}

impl From<PhotoPlayer> for FramePlayer {
    fn from(player: PhotoPlayer) -> Self {
        FramePlayer::Photo(player)
    }
}

impl From<VideoPlayer> for FramePlayer {
    fn from(player: VideoPlayer) -> Self {
        FramePlayer::Video(player)
    }
}

impl From<Dashboard> for FramePlayer {
    fn from(player: Dashboard) -> Self {
        FramePlayer::Dashboard(player)
    }
}
