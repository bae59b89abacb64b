// SPDX-License-Identifier: MPL-2.0
//! The photo frame: a ring of players plus input handling.

use crate::application::compass::Compass;
use crate::application::compatibility::frame_correction;
use crate::application::player::{FramePlayer, Player};
use crate::application::port::Renderer;
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Share of the width/height treated as a border for clicks.
const CLICK_BORDER: f64 = 0.2;

/// User input the frame reacts to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameInput {
    Left,
    Right,
    Up,
    Down,
    /// Enter/Return key: opens the details popup like a centre click.
    Enter,
    /// Pointer press at (`x`, `y`) on a `width` x `height` surface.
    Click {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
}

/// What the frame did with an input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputResponse {
    Handled,
    /// Centre click or Enter on a photo player: the host should pop up these details.
    Details(Vec<String>),
}

/// Frame-wide settings shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameSettings {
    pub slideshow_delay: Duration,
    pub root_folder: PathBuf,
}

/// A set of players cycled on a timer and by user input.
pub struct PhotoFrame {
    players: Vec<FramePlayer>,
    current: usize,
    compass: Option<Arc<Compass>>,
    settings: FrameSettings,
}

impl PhotoFrame {
    /// Creates a frame starting on the first player.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoPlayers`] if `players` is empty.
    pub fn new(
        players: Vec<FramePlayer>,
        compass: Option<Arc<Compass>>,
        settings: FrameSettings,
    ) -> Result<Self> {
        if players.is_empty() {
            return Err(Error::NoPlayers);
        }
        Ok(Self {
            players,
            current: 0,
            compass,
            settings,
        })
    }

    #[must_use]
    pub fn players(&self) -> &[FramePlayer] {
        &self.players
    }

    #[must_use]
    pub fn current_player_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_player(&self) -> &FramePlayer {
        &self.players[self.current]
    }

    #[must_use]
    pub fn slideshow_delay(&self) -> Duration {
        self.settings.slideshow_delay
    }

    #[must_use]
    pub fn root_folder(&self) -> &Path {
        &self.settings.root_folder
    }

    #[must_use]
    pub fn compass(&self) -> Option<&Compass> {
        self.compass.as_deref()
    }

    /// Switches to the next player, wrapping at the end, and shows its next item.
    pub fn next_player(&mut self, renderer: &mut dyn Renderer) -> &FramePlayer {
        let index = if self.current + 1 >= self.players.len() {
            0
        } else {
            self.current + 1
        };
        self.switch_to(index, renderer)
    }

    /// Switches to the previous player, wrapping at the start, and shows its next item.
    pub fn prev_player(&mut self, renderer: &mut dyn Renderer) -> &FramePlayer {
        let index = if self.current == 0 {
            self.players.len() - 1
        } else {
            self.current - 1
        };
        self.switch_to(index, renderer)
    }

    /// Slideshow timer step.
    pub fn tick(&mut self, renderer: &mut dyn Renderer) {
        self.refresh_dashboard();
        self.players[self.current].next(renderer);
    }

    pub fn handle_input(&mut self, input: FrameInput, renderer: &mut dyn Renderer) -> InputResponse {
        match input {
            FrameInput::Right => self.current_next(renderer),
            FrameInput::Left => self.current_prev(renderer),
            FrameInput::Down => {
                self.next_player(renderer);
            }
            FrameInput::Up => {
                self.prev_player(renderer);
            }
            FrameInput::Enter => return self.details_response(),
            FrameInput::Click {
                x,
                y,
                width,
                height,
            } => {
                // Sensor-relative layout: on a portrait frame the axes are swapped.
                let (x, y) = if self.is_portrait_frame() { (y, x) } else { (x, y) };
                if x >= width * (1.0 - CLICK_BORDER) {
                    self.current_next(renderer);
                } else if x <= width * CLICK_BORDER {
                    self.current_prev(renderer);
                } else if y >= height * (1.0 - CLICK_BORDER) {
                    self.next_player(renderer);
                } else if y <= height * CLICK_BORDER {
                    self.prev_player(renderer);
                } else {
                    return self.details_response();
                }
            }
        }
        InputResponse::Handled
    }

    /// Deletes the photo on screen from its folder and shows the next one.
    ///
    /// This is the details popup's delete action.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoCurrentMedia`] when the current player is not a
    /// photo player or shows nothing, or the folder's error if the file
    /// could not be deleted.
    pub fn delete_current(&mut self, renderer: &mut dyn Renderer) -> Result<()> {
        let FramePlayer::Photo(player) = &mut self.players[self.current] else {
            return Err(Error::NoCurrentMedia);
        };
        player.delete_current(renderer)?;
        Ok(())
    }

    /// Angle to rotate the splash logo so it appears upright.
    #[must_use]
    pub fn splash_rotation(&self) -> i32 {
        frame_correction(self.compass.as_deref())
    }

    /// Dashboard text: frame settings followed by every player.
    #[must_use]
    pub fn summary(&self) -> Vec<String> {
        let compass = self
            .compass
            .as_deref()
            .map_or_else(|| "none".to_string(), Compass::description);
        let flip = self.compass.as_deref().is_some_and(Compass::is_flipped);

        let mut lines = vec![
            format!("Number of players: {}", self.players.len()),
            format!(
                "Slideshow delay: {} ms",
                self.settings.slideshow_delay.as_millis()
            ),
            format!("Root folder: {}", self.settings.root_folder.display()),
            format!("Compass: {compass}"),
            format!("Flip rotation: {flip}"),
            "Player list:".to_string(),
        ];
        for player in &self.players {
            lines.push(format!("{} - {}", player.name(), player.description()));
            lines.extend(player.properties().into_iter().map(|line| format!("  {line}")));
        }
        lines
    }

    fn details_response(&self) -> InputResponse {
        self.current_player()
            .details()
            .map_or(InputResponse::Handled, InputResponse::Details)
    }

    fn is_portrait_frame(&self) -> bool {
        self.compass.as_deref().is_some_and(Compass::is_portrait_frame)
    }

    fn current_next(&mut self, renderer: &mut dyn Renderer) {
        self.refresh_dashboard();
        self.players[self.current].next(renderer);
    }

    fn current_prev(&mut self, renderer: &mut dyn Renderer) {
        self.refresh_dashboard();
        self.players[self.current].prev(renderer);
    }

    fn switch_to(&mut self, index: usize, renderer: &mut dyn Renderer) -> &FramePlayer {
        debug!(index, name = self.players[index].name(), "changing player");
        self.current = index;
        self.current_next(renderer);
        &self.players[self.current]
    }

    fn refresh_dashboard(&mut self) {
        if !self.players[self.current].is_dashboard() {
            return;
        }
        let lines = self.summary();
        if let FramePlayer::Dashboard(dashboard) = &mut self.players[self.current] {
            dashboard.set_summary(lines);
        }
    }
}
