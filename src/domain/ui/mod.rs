// SPDX-License-Identifier: MPL-2.0
//! View domain types.
//!
//! This module contains view-related value objects that are independent
//! of any presentation layer.

pub mod newtypes;

// Re-export commonly used types
pub use newtypes::{BusyDayThreshold, DisplayCap, PageSize};
