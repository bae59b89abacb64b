// SPDX-License-Identifier: MPL-2.0
//! Rendering port definition.
//!
//! The engine never touches pixels. It tells the host which item to paint
//! and by how much to rotate it, or that there is nothing to paint.

use crate::application::query::playlist::MediaItem;
use std::fmt;

/// Terminal "nothing to show" outcomes of a navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// The playlist is empty.
    NoMedia,
    /// Every candidate was checked and none fits the frame.
    NoDisplayableMedia,
    /// Shuffle `prev` ran out of browsing history.
    NoMoreHistory,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::NoMedia => write!(f, "No media to show"),
            Notice::NoDisplayableMedia => write!(f, "No media matches the frame orientation"),
            Notice::NoMoreHistory => write!(f, "No more history"),
        }
    }
}

/// Port for the host's display.
pub trait Renderer {
    /// Paints `item` after rotating it by `rotation` degrees.
    ///
    /// `rotation` is the net compensating angle: frame correction minus the
    /// photo's EXIF rotation. It is a multiple of 90 and may be negative.
    fn render(&mut self, item: &MediaItem, rotation: i32);

    /// Shows an explicit "nothing to show" state.
    fn notify(&mut self, notice: Notice);

    /// Shows a block of text (dashboard pages).
    fn show_text(&mut self, lines: &[String]);
}
