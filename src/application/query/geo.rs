// SPDX-License-Identifier: MPL-2.0
//! Map view queries: which items carry a position and where to center.

use crate::domain::media::{Location, MediaItem};
use std::sync::Arc;

/// Map center used when no item carries a position (Tokyo).
pub const DEFAULT_CENTER: (f64, f64) = (35.6895, 139.6917);

/// An item placed on the map, with its index in the full collection.
///
/// The index is what the lightbox opens at, so the map cycles through the
/// whole collection rather than only geotagged items.
#[derive(Debug, Clone)]
pub struct MapMarker {
    pub item: Arc<MediaItem>,
    pub location: Location,
    pub collection_index: usize,
}

/// Geotagged items of `collection`, in collection order.
#[must_use]
pub fn markers(collection: &[Arc<MediaItem>]) -> Vec<MapMarker> {
    collection
        .iter()
        .enumerate()
        .filter_map(|(collection_index, item)| {
            item.location().map(|location| MapMarker {
                item: Arc::clone(item),
                location,
                collection_index,
            })
        })
        .collect()
}

/// First marker's position, or [`DEFAULT_CENTER`].
#[must_use]
pub fn center(markers: &[MapMarker]) -> Location {
    markers.first().map_or_else(
        || Location::new(DEFAULT_CENTER.0, DEFAULT_CENTER.1),
        |marker| marker.location,
    )
}
