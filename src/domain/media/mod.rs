// SPDX-License-Identifier: MPL-2.0
//! Media domain types.
//!
//! This module contains the media records and the pure rules derived from
//! them (album membership, calendar-day keys). Nothing here performs I/O.

pub mod album;
pub mod day;
pub mod types;

// Re-export commonly used types
pub use album::{local_album, AlbumName, SmartAlbums};
pub use day::{DayBoundary, DayKey};
pub use types::{Location, MediaId, MediaItem, MediaType, SourceType};
