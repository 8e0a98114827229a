// SPDX-License-Identifier: MPL-2.0
//! Domain layer - media records and the pure rules over them.
//!
//! Nothing in this layer performs I/O. Apart from `chrono` (calendar days)
//! and `serde` (record shape), it depends only on `std`.
//!
//! # Modules
//!
//! - [`error`]: Domain error types ([`FetchError`](error::FetchError),
//!   [`ScanError`](error::ScanError), [`NavigationError`](error::NavigationError))
//! - [`media`]: Media types ([`MediaItem`](media::MediaItem), [`DayKey`](media::DayKey),
//!   [`AlbumName`](media::AlbumName), [`SmartAlbums`](media::SmartAlbums))
//! - [`ui`]: View value objects ([`PageSize`](ui::PageSize),
//!   [`DisplayCap`](ui::DisplayCap), [`BusyDayThreshold`](ui::BusyDayThreshold))

pub mod error;
pub mod media;
pub mod ui;
