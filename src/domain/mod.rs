// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core rules with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`media`]: Media types ([`MediaType`](media::MediaType),
//!   [`MediaMetadata`](media::MediaMetadata))
//! - [`metadata`]: Metadata types ([`GpsCoordinates`](metadata::GpsCoordinates))
//! - [`orientation`]: Orientation math ([`QuadrantRotation`](orientation::QuadrantRotation),
//!   [`exif_angle`](orientation::exif_angle), [`is_portrait`](orientation::is_portrait))

pub mod media;
pub mod metadata;
pub mod orientation;
