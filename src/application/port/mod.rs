// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces for the engine's external
//! collaborators. Adapters implement them; the navigator only sees the traits.
//!
//! # Available Ports
//!
//! - [`media_source`]: Listing candidate media for a player
//! - [`metadata`]: Per-item dimensions and EXIF orientation
//! - [`renderer`]: Painting the chosen item, or a "nothing to show" notice
//! - [`sensor`]: Raw rotation angle and accelerometer samples
//!
//! # Design Notes
//!
//! - Traits use domain types only (no GUI handles, no bus handles)
//! - Shared ports are `Send + Sync`; the renderer is borrowed per call
//! - No `async fn`: every call must finish before the next timer tick

pub mod media_source;
pub mod metadata;
pub mod renderer;
pub mod sensor;

// Re-export main types for convenience
pub use media_source::MediaSource;
pub use metadata::{MetadataError, MetadataReader};
pub use renderer::{Notice, Renderer};
pub use sensor::{AccelSample, AccelerometerBus, AngleSource, SensorError};
