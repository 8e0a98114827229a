// SPDX-License-Identifier: MPL-2.0
//! Per-day expand/collapse state.
//!
//! Keyed by [`DayKey`] only, so a day stays expanded across regroupings and
//! collection refreshes even when its item count changes.

use crate::domain::media::DayKey;
use std::collections::HashSet;

/// Set of expanded date buckets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandState {
    expanded: HashSet<DayKey>,
}

impl ExpandState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips `key` and returns whether it is now expanded.
    pub fn toggle(&mut self, key: DayKey) -> bool {
        if self.expanded.remove(&key) {
            false
        } else {
            self.expanded.insert(key);
            true
        }
    }

    #[must_use]
    pub fn is_expanded(&self, key: DayKey) -> bool {
        self.expanded.contains(&key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }
}
