// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the application layer remains
//! independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`media_source`]: Collection, detail and scan requests against the server

pub mod media_source;

// Re-export main types for convenience
pub use media_source::{MediaSource, ScanOutcome, ScanReport, ScanStatus};
