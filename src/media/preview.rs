// SPDX-License-Identifier: MPL-2.0
//! Per-item image load tracking.
//!
//! Each grid card and the lightbox report their image as loaded or failed.
//! A failure stays local to its item: the card swaps in a placeholder and
//! nothing else (siblings, pagination, the collection) is touched.
//!
//! # Design
//!
//! - **LRU eviction**: least recently touched ids are forgotten first
//! - **Id-keyed**: entries follow the item, not its position in any list
//! - **Reset on refresh**: a new collection may serve new bytes for an id

use crate::domain::error::ImageLoadError;
use crate::domain::media::MediaId;
use lru::LruCache;
use std::num::NonZeroUsize;

/// Default number of ids tracked.
pub const DEFAULT_CAPACITY: usize = 4096;

/// Text shown in place of an image that failed to load.
pub const PLACEHOLDER: &str = "No Preview";

/// Load state of one item's image.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PreviewState {
    #[default]
    Pending,
    Loaded,
    Failed(String),
}

impl PreviewState {
    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, PreviewState::Failed(_))
    }
}

/// Bounded map of item id to [`PreviewState`].
#[derive(Debug)]
pub struct PreviewTracker {
    states: LruCache<MediaId, PreviewState>,
}

impl PreviewTracker {
    /// Creates a tracker holding at most `capacity` ids (minimum one).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            states: LruCache::new(capacity),
        }
    }

    pub fn mark_loaded(&mut self, id: MediaId) {
        self.states.put(id, PreviewState::Loaded);
    }

    pub fn mark_failed(&mut self, error: ImageLoadError) {
        log::debug!("{error}");
        self.states.put(error.id, PreviewState::Failed(error.reason));
    }

    /// State of `id`; untracked ids are pending.
    #[must_use]
    pub fn state(&self, id: MediaId) -> PreviewState {
        self.states.peek(&id).cloned().unwrap_or_default()
    }

    #[must_use]
    pub fn is_failed(&self, id: MediaId) -> bool {
        self.states.peek(&id).is_some_and(PreviewState::is_failed)
    }

    /// Number of tracked failures.
    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.states.iter().filter(|(_, state)| state.is_failed()).count()
    }

    /// Forgets everything, e.g. after the collection was replaced.
    pub fn clear(&mut self) {
        self.states.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl Default for PreviewTracker {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untracked_items_are_pending() {
        let tracker = PreviewTracker::default();
        assert_eq!(tracker.state(MediaId(1)), PreviewState::Pending);
        assert!(!tracker.is_failed(MediaId(1)));
    }

    #[test]
    fn failure_is_local_to_its_item() {
        let mut tracker = PreviewTracker::default();
        tracker.mark_loaded(MediaId(1));
        tracker.mark_failed(ImageLoadError::new(MediaId(2), "404"));

        assert_eq!(tracker.state(MediaId(1)), PreviewState::Loaded);
        assert_eq!(tracker.state(MediaId(2)), PreviewState::Failed("404".to_string()));
        assert!(!tracker.is_failed(MediaId(3)));
        assert_eq!(tracker.failed_count(), 1);
    }

    #[test]
    fn reload_after_failure_recovers() {
        let mut tracker = PreviewTracker::default();
        tracker.mark_failed(ImageLoadError::new(MediaId(2), "timeout"));
        tracker.mark_loaded(MediaId(2));
        assert!(!tracker.is_failed(MediaId(2)));
    }

    #[test]
    fn capacity_bounds_tracking() {
        let mut tracker = PreviewTracker::new(2);
        tracker.mark_loaded(MediaId(1));
        tracker.mark_loaded(MediaId(2));
        tracker.mark_loaded(MediaId(3));

        assert_eq!(tracker.len(), 2);
        assert_eq!(tracker.state(MediaId(1)), PreviewState::Pending);
    }

    #[test]
    fn zero_capacity_is_raised_to_one() {
        let mut tracker = PreviewTracker::new(0);
        tracker.mark_loaded(MediaId(1));
        assert_eq!(tracker.len(), 1);
    }

    #[test]
    fn clear_forgets_everything() {
        let mut tracker = PreviewTracker::default();
        tracker.mark_failed(ImageLoadError::new(MediaId(2), "404"));
        tracker.clear();
        assert!(tracker.is_empty());
    }
}
