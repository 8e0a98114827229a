// SPDX-License-Identifier: MPL-2.0
//! View newtypes.
//!
//! This module provides type-safe wrappers for view settings,
//! ensuring they are always within valid ranges.

// =============================================================================
// Page Size Bounds
// =============================================================================

/// Pagination page size bounds (1 to 500 items).
pub mod page_bounds {
    /// Minimum items per page.
    pub const MIN: usize = 1;
    /// Maximum items per page.
    pub const MAX: usize = 500;
    /// Default items per page.
    pub const DEFAULT: usize = 50;
}

// =============================================================================
// PageSize
// =============================================================================

/// Number of items one `advance` adds to the visible window.
///
/// Never zero, so a window can always grow until it covers its source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSize(usize);

impl PageSize {
    /// Creates a new page size, clamping to the valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(page_bounds::MIN, page_bounds::MAX))
    }

    /// Returns the value as usize.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(page_bounds::DEFAULT)
    }
}

// =============================================================================
// Display Cap Bounds
// =============================================================================

/// Collapsed bucket size bounds (1 to 100 items).
pub mod display_cap_bounds {
    /// Minimum items shown in a collapsed bucket.
    pub const MIN: usize = 1;
    /// Maximum items shown in a collapsed bucket.
    pub const MAX: usize = 100;
    /// Default items shown in a collapsed bucket.
    pub const DEFAULT: usize = 6;
}

// =============================================================================
// DisplayCap
// =============================================================================

/// How many items a collapsed date bucket renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayCap(usize);

impl DisplayCap {
    /// Creates a new display cap, clamping to the valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(display_cap_bounds::MIN, display_cap_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for DisplayCap {
    fn default() -> Self {
        Self(display_cap_bounds::DEFAULT)
    }
}

// =============================================================================
// BusyDayThreshold
// =============================================================================

/// Default busy-day threshold.
pub const DEFAULT_BUSY_DAY_THRESHOLD: usize = 20;

/// A bucket holding more items than this is flagged as a busy day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusyDayThreshold(usize);

impl BusyDayThreshold {
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }

    /// Returns true if a bucket of `len` items counts as busy.
    #[must_use]
    pub fn is_busy(self, len: usize) -> bool {
        len > self.0
    }
}

impl Default for BusyDayThreshold {
    fn default() -> Self {
        Self(DEFAULT_BUSY_DAY_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // PageSize tests
    // -------------------------------------------------------------------------

    #[test]
    fn page_size_clamps() {
        assert_eq!(PageSize::new(0).value(), page_bounds::MIN);
        assert_eq!(PageSize::new(10_000).value(), page_bounds::MAX);
        assert_eq!(PageSize::new(25).value(), 25);
    }

    #[test]
    fn page_size_default() {
        assert_eq!(PageSize::default().value(), 50);
    }

    // -------------------------------------------------------------------------
    // DisplayCap tests
    // -------------------------------------------------------------------------

    #[test]
    fn display_cap_clamps() {
        assert_eq!(DisplayCap::new(0).value(), display_cap_bounds::MIN);
        assert_eq!(DisplayCap::new(1_000).value(), display_cap_bounds::MAX);
    }

    #[test]
    fn display_cap_default() {
        assert_eq!(DisplayCap::default().value(), 6);
    }

    // -------------------------------------------------------------------------
    // BusyDayThreshold tests
    // -------------------------------------------------------------------------

    #[test]
    fn busy_day_is_strictly_greater() {
        let threshold = BusyDayThreshold::default();
        assert!(!threshold.is_busy(20));
        assert!(threshold.is_busy(21));
    }
}
