// SPDX-License-Identifier: MPL-2.0
//! Query services (read-side derivations).
//!
//! This module contains the pure derivations the views are built from.
//! Each one is recomputed from its inputs, never patched in place.
//!
//! # Available Services
//!
//! - [`grouping`]: Calendar-day buckets (`DateGrouper`)
//! - [`pagination`]: Growing prefix window (`PaginationWindow`)
//! - [`expand`]: Per-day expand/collapse (`ExpandState`)
//! - [`navigation`]: Lightbox cursor with wraparound (`LightboxNavigator`)
//! - [`geo`]: Map markers and center

pub mod expand;
pub mod geo;
pub mod grouping;
pub mod navigation;
pub mod pagination;

// Re-export main types
pub use expand::ExpandState;
pub use geo::MapMarker;
pub use grouping::{DateBucket, DateGrouper};
pub use navigation::{LightboxNavigator, NavigationInfo};
pub use pagination::PaginationWindow;
