// SPDX-License-Identifier: MPL-2.0
//! `pi_frame` drives a kiosk digital photo frame.
//!
//! It keeps one playlist per player, steps through it sequentially or in
//! shuffle mode, and only shows media whose orientation matches how the
//! frame is currently mounted, rotating each item so it appears upright.

pub mod app;
pub mod application;
pub mod config;
pub mod directory_scanner;
pub mod domain;
pub mod error;
pub mod media;
