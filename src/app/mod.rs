// SPDX-License-Identifier: MPL-2.0
//! Application root: wiring configuration into a running frame.
//!
//! [`build_frame`] turns a [`Config`] into a [`PhotoFrame`] with the
//! filesystem adapters plugged in. [`run_slideshow`] drives it from a tokio
//! interval, the way a display host would from its timer.

pub mod paths;

use crate::application::compass::{AccelerometerAngle, Compass};
use crate::application::frame::{FrameSettings, PhotoFrame};
use crate::application::player::{Dashboard, FramePlayer, PhotoPlayer, VideoPlayer};
use crate::application::port::{AccelerometerBus, MetadataReader, Notice, Renderer};
use crate::application::query::navigation::NavigationMode;
use crate::application::query::playlist::MediaItem;
use crate::config::{CompassKind, Config, FrameConfig, PlayerKind};
use crate::directory_scanner::DirectoryScanner;
use crate::domain::media::MediaType;
use crate::error::Result;
use crate::media::ExifMetadataReader;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::MissedTickBehavior;
use tracing::{info, warn};

/// Builds the frame described by `config`.
///
/// `bus` is the accelerometer driver for `compass = "accelerometer"`.
/// Without one, the configured `rotation` is used as a fixed angle.
///
/// # Errors
///
/// Returns an error if the configuration is invalid (no players, or a
/// media player without a folder).
pub fn build_frame(config: &Config, bus: Option<Box<dyn AccelerometerBus>>) -> Result<PhotoFrame> {
    config.validate()?;

    let compass = build_compass(&config.frame, bus).map(Arc::new);
    if let Some(compass) = &compass {
        info!(compass = %compass.description(), "compass ready");
    }

    let reader: Arc<dyn MetadataReader> = Arc::new(ExifMetadataReader::new());
    let root = &config.frame.root_folder;

    let mut players = Vec::with_capacity(config.players.len());
    for player in &config.players {
        let mode = NavigationMode::from_shuffle(player.shuffle_or(config.frame.shuffle));
        let built: FramePlayer = match player.kind {
            PlayerKind::Photo => {
                let folder = player.folder_path(root)?;
                let scanner = DirectoryScanner::new(&folder, config.frame.sort_order)
                    .with_media_type(MediaType::Image);
                PhotoPlayer::new(
                    &player.name,
                    folder,
                    scanner,
                    Arc::clone(&reader),
                    mode,
                    compass.clone(),
                )
                .into()
            }
            PlayerKind::Video => {
                let folder = player.folder_path(root)?;
                let scanner = DirectoryScanner::new(&folder, config.frame.sort_order)
                    .with_media_type(MediaType::Video);
                VideoPlayer::new(
                    &player.name,
                    folder,
                    scanner,
                    Arc::clone(&reader),
                    mode,
                    compass.clone(),
                )
                .into()
            }
            PlayerKind::Dashboard => Dashboard::new(&player.name).into(),
        };
        info!(name = %player.name, kind = ?player.kind, %mode, "creating player");
        players.push(built);
    }

    PhotoFrame::new(
        players,
        compass,
        FrameSettings {
            slideshow_delay: config.frame.slideshow_delay(),
            root_folder: root.clone(),
        },
    )
}

fn build_compass(frame: &FrameConfig, bus: Option<Box<dyn AccelerometerBus>>) -> Option<Compass> {
    match (frame.compass, bus) {
        (CompassKind::None, _) => None,
        (CompassKind::Fixed, _) => Some(Compass::fixed(frame.rotation, frame.flip_rotation)),
        (CompassKind::Accelerometer, Some(bus)) => Some(Compass::new(
            AccelerometerAngle::new(bus),
            frame.flip_rotation,
        )),
        (CompassKind::Accelerometer, None) => {
            warn!(
                rotation = frame.rotation,
                "no accelerometer driver available, using fixed rotation"
            );
            Some(Compass::fixed(frame.rotation, frame.flip_rotation))
        }
    }
}

/// Advances the frame on every tick of `delay`.
///
/// The first step happens immediately. Stops after `steps` ticks, or never
/// when `steps` is `None`.
pub async fn run_slideshow(
    frame: &mut PhotoFrame,
    renderer: &mut dyn Renderer,
    delay: Duration,
    steps: Option<u64>,
) {
    let mut interval = tokio::time::interval(delay);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut ticks = 0u64;
    while steps.map_or(true, |steps| ticks < steps) {
        interval.tick().await;
        frame.tick(renderer);
        ticks += 1;
    }
}

/// Renderer for headless runs: every decision goes to the log.
#[derive(Debug, Default)]
pub struct LoggingRenderer {
    rendered: usize,
    notices: usize,
}

impl LoggingRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Items rendered so far.
    #[must_use]
    pub fn rendered(&self) -> usize {
        self.rendered
    }

    /// Notices shown so far.
    #[must_use]
    pub fn notices(&self) -> usize {
        self.notices
    }
}

impl Renderer for LoggingRenderer {
    fn render(&mut self, item: &MediaItem, rotation: i32) {
        self.rendered += 1;
        info!(path = %item.path().display(), rotation, "render");
    }

    fn notify(&mut self, notice: Notice) {
        self.notices += 1;
        info!(%notice, "nothing to show");
    }

    fn show_text(&mut self, lines: &[String]) {
        for line in lines {
            info!("{line}");
        }
    }
}
