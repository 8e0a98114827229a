// SPDX-License-Identifier: MPL-2.0
//! Media source port definition.
//!
//! This module defines the [`MediaSource`] trait: everything the engine asks
//! of the media server. The HTTP adapter implements it for production and
//! tests substitute an in-memory fake.
//!
//! # Design Notes
//!
//! - Methods return futures that are `Send`, so the runtime can spawn them
//! - No retries; a failure is reported once and the caller decides
//! - Implementations are shared behind an `Arc` by the runtime

use crate::domain::error::{FetchError, ScanError};
use crate::domain::media::{DayKey, MediaItem};
use serde::{Deserialize, Serialize};
use std::future::Future;

// =============================================================================
// Scan Types
// =============================================================================

/// Whether the server started a new scan or one was already running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanOutcome {
    Started,
    Running,
}

/// The server's answer to a scan request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanReport {
    pub status: ScanOutcome,
    /// Human-readable status line shown next to the scan controls.
    pub message: String,
    #[serde(default)]
    pub directory: Option<String>,
}

/// Snapshot of the server's background scan job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanStatus {
    #[serde(default)]
    pub is_running: bool,
    #[serde(default)]
    pub directory: Option<String>,
    #[serde(default)]
    pub started_at: Option<String>,
    #[serde(default)]
    pub finished_at: Option<String>,
    /// `idle`, `running`, `completed` or `failed`.
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub error: Option<String>,
}

// =============================================================================
// MediaSource Trait
// =============================================================================

/// Port for the media server.
///
/// # Example
///
/// ```ignore
/// use smart_gallery::application::port::MediaSource;
///
/// async fn count(source: &impl MediaSource) -> usize {
///     source.fetch_collection().await.map_or(0, |items| items.len())
/// }
/// ```
pub trait MediaSource: Send + Sync + 'static {
    /// Loads the full collection.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] on transport, status or decode failure.
    fn fetch_collection(&self) -> impl Future<Output = Result<Vec<MediaItem>, FetchError>> + Send;

    /// Asks the server to ingest `directory`.
    ///
    /// # Errors
    ///
    /// Returns a [`ScanError`] carrying the server's detail text when the
    /// request is refused.
    fn request_scan(
        &self,
        directory: &str,
    ) -> impl Future<Output = Result<ScanReport, ScanError>> + Send;

    /// Reads the state of the background scan job.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] if the status cannot be read.
    fn scan_status(&self) -> impl Future<Output = Result<ScanStatus, FetchError>> + Send;

    /// Loads the items of one calendar day.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`]; [`DayKey::Unknown`] has no server-side
    /// equivalent and is reported as [`FetchError::Unsupported`].
    fn fetch_by_date(
        &self,
        day: DayKey,
    ) -> impl Future<Output = Result<Vec<MediaItem>, FetchError>> + Send;

    /// Loads the items of one album by name.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] (the server rejects unknown names).
    fn fetch_by_album(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Vec<MediaItem>, FetchError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_report_reads_server_answer() {
        let json = r#"{"status": "running", "message": "A scan job is already running", "directory": "/photos"}"#;
        let report: ScanReport = serde_json::from_str(json).expect("valid report");
        assert_eq!(report.status, ScanOutcome::Running);
        assert_eq!(report.directory.as_deref(), Some("/photos"));
    }

    #[test]
    fn scan_status_tolerates_missing_fields() {
        let status: ScanStatus = serde_json::from_str(r#"{"message": "idle"}"#).expect("valid");
        assert!(!status.is_running);
        assert_eq!(status.message, "idle");
        assert!(status.error.is_none());
    }
}
