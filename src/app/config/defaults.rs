// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Server**: Where the media server lives and how long to wait for it
//! - **View**: Pagination, bucket display cap, busy-day flag
//! - **Preview**: Image load tracking

use crate::domain::ui::newtypes::{display_cap_bounds, page_bounds};

// ==========================================================================
// Server Defaults
// ==========================================================================

/// Default media server address.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Default per-request timeout (in seconds).
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Minimum per-request timeout (in seconds).
pub const MIN_TIMEOUT_SECS: u64 = 1;

/// Maximum per-request timeout (in seconds).
pub const MAX_TIMEOUT_SECS: u64 = 600;

// ==========================================================================
// View Defaults
// ==========================================================================

/// Default number of items added to the timeline per page.
pub const DEFAULT_PAGE_SIZE: usize = page_bounds::DEFAULT;

/// Default number of items shown in a collapsed date bucket.
pub const DEFAULT_DISPLAY_CAP: usize = display_cap_bounds::DEFAULT;

/// Default item count above which a day is flagged as busy.
pub const DEFAULT_BUSY_DAY_THRESHOLD: usize = crate::domain::ui::newtypes::DEFAULT_BUSY_DAY_THRESHOLD;

// ==========================================================================
// Preview Defaults
// ==========================================================================

/// Default number of item ids whose image load state is remembered.
pub const DEFAULT_PREVIEW_CAPACITY: usize = crate::media::preview::DEFAULT_CAPACITY;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_TIMEOUT_SECS > 0);
    assert!(MIN_TIMEOUT_SECS <= DEFAULT_TIMEOUT_SECS);
    assert!(DEFAULT_TIMEOUT_SECS <= MAX_TIMEOUT_SECS);

    assert!(page_bounds::MIN > 0);
    assert!(page_bounds::MIN <= DEFAULT_PAGE_SIZE);
    assert!(DEFAULT_PAGE_SIZE <= page_bounds::MAX);

    assert!(display_cap_bounds::MIN > 0);
    assert!(display_cap_bounds::MIN <= DEFAULT_DISPLAY_CAP);
    assert!(DEFAULT_DISPLAY_CAP <= display_cap_bounds::MAX);

    // A collapsed busy day must still hide something.
    assert!(DEFAULT_DISPLAY_CAP < DEFAULT_BUSY_DAY_THRESHOLD);

    assert!(DEFAULT_PREVIEW_CAPACITY > 0);
};
