// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`http`]: The media server's JSON API (implements [`MediaSource`])
//!
//! [`MediaSource`]: crate::application::port::MediaSource

pub mod http;

// Re-export main types for convenience
pub use http::{HttpMediaSource, MediaUrls};
