// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`compass`]: Frame rotation sensing
//! - [`compatibility`]: Frame/photo orientation matching
//! - [`query`]: Playlists and navigation
//! - [`player`]: Photo, video and dashboard players
//! - [`frame`]: The player ring and its input handling
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Adapters (`directory_scanner`, `media`) implement application ports
//! - The `app` module wires adapters and services together
//!
//! # Example
//!
//! ```
//! use pi_frame::application::compass::Compass;
//! use pi_frame::application::compatibility::{check, Compatibility};
//! use pi_frame::domain::media::MediaMetadata;
//!
//! let compass = Compass::fixed(90.0, false);
//! let photo = MediaMetadata::new(3000, 4000, Some(1));
//! assert_eq!(
//!     check(&photo, Some(&compass)),
//!     Ok(Compatibility::Compatible { rotation: -90 })
//! );
//! ```

pub mod compass;
pub mod compatibility;
pub mod frame;
pub mod player;
pub mod port;
pub mod query;
