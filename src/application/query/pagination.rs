// SPDX-License-Identifier: MPL-2.0
//! Incrementally growing window over an ordered source list.
//!
//! The window is always a prefix of its source of length
//! `min(page_count * page_size, source.len())`. It grows by one page per
//! [`PaginationWindow::advance`] and never shrinks except through
//! [`PaginationWindow::reset`], which is the only way to change the source.

use crate::domain::ui::PageSize;
use std::sync::Arc;

/// A prefix window of `source`, grown page by page.
#[derive(Debug, Clone)]
pub struct PaginationWindow<T> {
    source: Arc<[T]>,
    page_size: PageSize,
    page_count: usize,
}

impl<T> PaginationWindow<T> {
    /// Creates a window on page one of an empty source.
    #[must_use]
    pub fn new(page_size: PageSize) -> Self {
        Self {
            source: Arc::from(Vec::new()),
            page_size,
            page_count: 1,
        }
    }

    /// Points the window at a new source and goes back to page one.
    pub fn reset(&mut self, source: Arc<[T]>) {
        self.source = source;
        self.page_count = 1;
    }

    /// Grows the window by one page.
    ///
    /// Returns `false` (and changes nothing) once the window already covers
    /// the whole source.
    pub fn advance(&mut self) -> bool {
        if !self.has_more() {
            return false;
        }
        self.page_count += 1;
        true
    }

    /// The currently materialized prefix.
    #[must_use]
    pub fn current_window(&self) -> &[T] {
        &self.source[..self.window_len()]
    }

    #[must_use]
    pub fn window_len(&self) -> usize {
        self.page_count
            .saturating_mul(self.page_size.value())
            .min(self.source.len())
    }

    /// Whether advancing would reveal more items.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.window_len() < self.source.len()
    }

    #[must_use]
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    #[must_use]
    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// The full list the window is cut from.
    #[must_use]
    pub fn source(&self) -> &Arc<[T]> {
        &self.source
    }
}

impl<T> Default for PaginationWindow<T> {
    fn default() -> Self {
        Self::new(PageSize::default())
    }
}
