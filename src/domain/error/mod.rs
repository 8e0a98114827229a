// SPDX-License-Identifier: MPL-2.0
//! Domain error types.
//!
//! These errors describe what went wrong from the gallery's point of view.
//! None of them is allowed to corrupt derived views: a failed fetch keeps the
//! previous collection, a failed image stays local to its card, and empty
//! navigation is a no-op that callers may inspect or ignore.

use super::media::MediaId;
use std::fmt;

// =============================================================================
// FetchError
// =============================================================================

/// Loading a media list from the server failed.
///
/// The collection held before the failed request stays in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The request never produced a response (connection refused, timeout...).
    Transport(String),

    /// The server answered with a non-success status.
    Status {
        /// HTTP status code.
        code: u16,
        /// The server's `detail` text, when the body carried one.
        detail: Option<String>,
    },

    /// The response body was not a valid media list.
    Decode(String),

    /// The request cannot be expressed against the server API
    /// (for example the `unknown date` bucket has no server-side equivalent).
    Unsupported(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Transport(msg) => write!(f, "connection failed: {msg}"),
            FetchError::Status {
                code,
                detail: Some(detail),
            } => write!(f, "server returned {code}: {detail}"),
            FetchError::Status { code, detail: None } => write!(f, "server returned {code}"),
            FetchError::Decode(msg) => write!(f, "invalid response: {msg}"),
            FetchError::Unsupported(msg) => write!(f, "unsupported request: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

// =============================================================================
// ScanError
// =============================================================================

/// The ingestion request was rejected or could not be delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// The server refused the scan and explained why.
    Rejected(String),

    /// The scan request did not reach the server or its answer was unreadable.
    Request(String),
}

impl ScanError {
    /// Returns the human-readable detail shown next to the scan controls.
    #[must_use]
    pub fn detail(&self) -> &str {
        match self {
            ScanError::Rejected(detail) | ScanError::Request(detail) => detail,
        }
    }
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanError::Rejected(detail) => write!(f, "scan rejected: {detail}"),
            ScanError::Request(detail) => write!(f, "scan request failed: {detail}"),
        }
    }
}

impl std::error::Error for ScanError {}

// =============================================================================
// ImageLoadError
// =============================================================================

/// A single item's thumbnail or full image failed to load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageLoadError {
    /// The item whose image failed.
    pub id: MediaId,
    /// What the presentation layer reported.
    pub reason: String,
}

impl ImageLoadError {
    #[must_use]
    pub fn new(id: MediaId, reason: impl Into<String>) -> Self {
        Self {
            id,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ImageLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "image for item {} failed to load: {}", self.id, self.reason)
    }
}

impl std::error::Error for ImageLoadError {}

// =============================================================================
// NavigationError
// =============================================================================

/// Lightbox navigation that cannot do anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationError {
    /// Next/previous was requested while the viewer is closed or its list is empty.
    Empty,

    /// The viewer was asked to open an empty list.
    EmptyList,

    /// The viewer was asked to open at a position outside the list.
    IndexOutOfRange {
        /// Requested position.
        index: usize,
        /// Length of the list.
        len: usize,
    },
}

impl fmt::Display for NavigationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationError::Empty => write!(f, "nothing to navigate"),
            NavigationError::EmptyList => write!(f, "cannot open an empty list"),
            NavigationError::IndexOutOfRange { index, len } => {
                write!(f, "index {index} is outside a list of {len} items")
            }
        }
    }
}

impl std::error::Error for NavigationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_error_display_includes_server_detail() {
        let err = FetchError::Status {
            code: 400,
            detail: Some("Invalid album name".to_string()),
        };
        assert_eq!(err.to_string(), "server returned 400: Invalid album name");

        let bare = FetchError::Status {
            code: 502,
            detail: None,
        };
        assert_eq!(bare.to_string(), "server returned 502");
    }

    #[test]
    fn scan_error_detail_is_raw_text() {
        let err = ScanError::Rejected("Directory does not exist: /nope".to_string());
        assert_eq!(err.detail(), "Directory does not exist: /nope");
        assert!(err.to_string().starts_with("scan rejected"));
    }

    #[test]
    fn image_load_error_names_the_item() {
        let err = ImageLoadError::new(MediaId(7), "404");
        assert!(err.to_string().contains("item 7"));
    }

    #[test]
    fn navigation_error_display() {
        let err = NavigationError::IndexOutOfRange { index: 5, len: 3 };
        assert_eq!(err.to_string(), "index 5 is outside a list of 3 items");
    }
}
