// SPDX-License-Identifier: MPL-2.0
//! Calendar-day grouping for the timeline.
//!
//! [`DateGrouper::group`] partitions a list into [`DateBucket`]s, newest day
//! first, with the `unknown date` bucket last. Items keep their source order
//! inside a bucket. Grouping is one pass over the input plus a sort of the
//! (much smaller) bucket list.

use crate::domain::media::{DayBoundary, DayKey, MediaItem};
use crate::domain::ui::{BusyDayThreshold, DisplayCap};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// Separator between place names in a bucket header.
pub const LOCATION_SEPARATOR: &str = " | ";

// =============================================================================
// DateBucket
// =============================================================================

/// All items of one calendar day, in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct DateBucket {
    key: DayKey,
    items: Vec<Arc<MediaItem>>,
}

impl DateBucket {
    #[must_use]
    pub fn key(&self) -> DayKey {
        self.key
    }

    #[must_use]
    pub fn items(&self) -> &[Arc<MediaItem>] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items to render: the first `cap` unless the bucket is expanded.
    #[must_use]
    pub fn visible_items(&self, cap: DisplayCap, expanded: bool) -> &[Arc<MediaItem>] {
        if expanded {
            &self.items
        } else {
            &self.items[..self.items.len().min(cap.value())]
        }
    }

    /// Number of items a collapsed bucket leaves out.
    #[must_use]
    pub fn hidden_count(&self, cap: DisplayCap, expanded: bool) -> usize {
        self.len() - self.visible_items(cap, expanded).len()
    }

    /// Whether the bucket exceeds the cap, i.e. whether it can be expanded.
    #[must_use]
    pub fn has_hidden(&self, cap: DisplayCap) -> bool {
        self.len() > cap.value()
    }

    #[must_use]
    pub fn is_busy(&self, threshold: BusyDayThreshold) -> bool {
        threshold.is_busy(self.len())
    }

    /// Distinct non-empty place names in first-seen order, joined for display.
    #[must_use]
    pub fn location_summary(&self) -> Option<String> {
        let mut seen = HashSet::new();
        let mut places: Vec<&str> = Vec::new();
        for place in self.items.iter().filter_map(|item| item.place()) {
            if seen.insert(place) {
                places.push(place);
            }
        }
        if places.is_empty() {
            None
        } else {
            Some(places.join(LOCATION_SEPARATOR))
        }
    }
}

// =============================================================================
// DateGrouper
// =============================================================================

/// Buckets item lists by calendar day under a fixed [`DayBoundary`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateGrouper {
    boundary: DayBoundary,
}

impl DateGrouper {
    #[must_use]
    pub fn new(boundary: DayBoundary) -> Self {
        Self { boundary }
    }

    #[must_use]
    pub fn boundary(&self) -> DayBoundary {
        self.boundary
    }

    /// Partitions `items` into day buckets, ordered newest day first.
    #[must_use]
    pub fn group(&self, items: &[Arc<MediaItem>]) -> Vec<DateBucket> {
        let mut index: HashMap<DayKey, usize> = HashMap::new();
        let mut buckets: Vec<DateBucket> = Vec::new();

        for item in items {
            let key = item.day_key(self.boundary);
            let slot = *index.entry(key).or_insert_with(|| {
                buckets.push(DateBucket {
                    key,
                    items: Vec::new(),
                });
                buckets.len() - 1
            });
            buckets[slot].items.push(Arc::clone(item));
        }

        buckets.sort_unstable_by(|a, b| b.key.cmp(&a.key));
        buckets
    }

    /// Items of `items` that fall on `day`, in source order.
    #[must_use]
    pub fn items_on(&self, day: DayKey, items: &[Arc<MediaItem>]) -> Vec<Arc<MediaItem>> {
        items
            .iter()
            .filter(|item| item.day_key(self.boundary) == day)
            .cloned()
            .collect()
    }
}
