// SPDX-License-Identifier: MPL-2.0
//! Lightbox navigation over the list it was opened with.
//!
//! The navigator keeps its own snapshot of the opened list. Next/previous
//! cycle inside that snapshot with wraparound and never cross into another
//! day or album, even if the list the caller opened it from later changes.
//!
//! State machine: `Closed -> Open(list, index)` on [`LightboxNavigator::open`],
//! `Open -> Open` on navigation, `Open -> Closed` on [`LightboxNavigator::close`].

use crate::domain::error::NavigationError;
use std::sync::Arc;

/// Navigation state information for UI rendering.
///
/// A snapshot of the viewer position, so renderers don't need the list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationInfo {
    /// Whether the viewer is open.
    pub is_open: bool,
    /// Current position in the list (0-indexed), if open.
    pub current_index: Option<usize>,
    /// Total number of items in the opened list.
    pub total_count: usize,
    /// Whether the current item is the first in the list.
    pub at_first: bool,
    /// Whether the current item is the last in the list.
    pub at_last: bool,
}

#[derive(Debug, Clone)]
struct Open<T> {
    list: Arc<[T]>,
    index: usize,
}

/// Cursor over a snapshot of items, with wraparound.
#[derive(Debug, Clone)]
pub struct LightboxNavigator<T> {
    state: Option<Open<T>>,
}

impl<T> Default for LightboxNavigator<T> {
    fn default() -> Self {
        Self { state: None }
    }
}

impl<T> LightboxNavigator<T> {
    /// Creates a closed navigator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the viewer on `list` at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::EmptyList`] for an empty list and
    /// [`NavigationError::IndexOutOfRange`] when `index >= list.len()`.
    /// The viewer is left as it was in both cases.
    pub fn open(&mut self, list: impl Into<Arc<[T]>>, index: usize) -> Result<(), NavigationError> {
        let list = list.into();
        if list.is_empty() {
            return Err(NavigationError::EmptyList);
        }
        if index >= list.len() {
            return Err(NavigationError::IndexOutOfRange {
                index,
                len: list.len(),
            });
        }
        self.state = Some(Open { list, index });
        Ok(())
    }

    /// Closes the viewer and drops its snapshot.
    pub fn close(&mut self) {
        self.state = None;
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state.is_some()
    }

    /// Moves to the next item, wrapping to the first.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::Empty`] while closed.
    pub fn try_next(&mut self) -> Result<&T, NavigationError> {
        let open = self.state.as_mut().ok_or(NavigationError::Empty)?;
        open.index = (open.index + 1) % open.list.len();
        Ok(&open.list[open.index])
    }

    /// Moves to the previous item, wrapping to the last.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::Empty`] while closed.
    pub fn try_previous(&mut self) -> Result<&T, NavigationError> {
        let open = self.state.as_mut().ok_or(NavigationError::Empty)?;
        let len = open.list.len();
        open.index = (open.index + len - 1) % len;
        Ok(&open.list[open.index])
    }

    /// Like [`try_next`](Self::try_next), treating a closed viewer as a no-op.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<&T> {
        self.try_next().ok()
    }

    /// Like [`try_previous`](Self::try_previous), treating a closed viewer as a no-op.
    pub fn previous(&mut self) -> Option<&T> {
        self.try_previous().ok()
    }

    /// The item under the cursor, if open.
    #[must_use]
    pub fn current(&self) -> Option<&T> {
        self.state.as_ref().map(|open| &open.list[open.index])
    }

    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.state.as_ref().map(|open| open.index)
    }

    /// The opened snapshot, if open.
    #[must_use]
    pub fn list(&self) -> Option<&[T]> {
        self.state.as_ref().map(|open| &open.list[..])
    }

    /// Length of the opened list; zero while closed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.as_ref().map_or(0, |open| open.list.len())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a snapshot of the current navigation state for UI rendering.
    #[must_use]
    pub fn navigation_info(&self) -> NavigationInfo {
        match &self.state {
            Some(open) => NavigationInfo {
                is_open: true,
                current_index: Some(open.index),
                total_count: open.list.len(),
                at_first: open.index == 0,
                at_last: open.index + 1 == open.list.len(),
            },
            None => NavigationInfo::default(),
        }
    }
}
