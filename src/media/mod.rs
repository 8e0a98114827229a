// SPDX-License-Identifier: MPL-2.0
//! Per-item media loading state.
//!
//! Image and video bytes are fetched by the presentation layer; this module
//! only records how each load went so a failure stays with its own card.

pub mod preview;

pub use preview::{PreviewState, PreviewTracker};
