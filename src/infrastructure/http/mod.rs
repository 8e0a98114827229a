// SPDX-License-Identifier: MPL-2.0
//! HTTP adapter for the media server.
//!
//! [`HttpMediaSource`] implements [`MediaSource`] with `reqwest`.
//! [`MediaUrls`] builds the byte-source URLs that thumbnails, the lightbox
//! and the video player load from. Items are referenced by id, never by path.
//!
//! Error mapping:
//! - no response (connect, timeout) → [`FetchError::Transport`]
//! - non-2xx → [`FetchError::Status`] with the body's `detail` when present
//! - body is not the expected JSON → [`FetchError::Decode`]

use crate::application::port::{MediaSource, ScanReport, ScanStatus};
use crate::domain::error::{FetchError, ScanError};
use crate::domain::media::{DayKey, MediaId, MediaItem};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!("SmartGallery/", env!("CARGO_PKG_VERSION"));

// =============================================================================
// MediaUrls
// =============================================================================

/// Builds byte-source URLs against one server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaUrls {
    base: String,
}

impl MediaUrls {
    /// Creates a URL builder; a trailing slash on `base_url` is ignored.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            base: base_url.trim_end_matches('/').to_string(),
        }
    }

    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// `GET /api/media` and friends.
    #[must_use]
    pub fn api(&self, path: &str) -> String {
        format!("{}/api/{}", self.base, path.trim_start_matches('/'))
    }

    /// Full-resolution image.
    #[must_use]
    pub fn image(&self, id: MediaId) -> String {
        self.api(&format!("media/image/{id}"))
    }

    /// Video stream.
    #[must_use]
    pub fn stream(&self, id: MediaId) -> String {
        self.api(&format!("media/stream/{id}"))
    }

    /// Pre-rendered thumbnail, if the scanner produced one.
    #[must_use]
    pub fn thumbnail(&self, item: &MediaItem) -> Option<String> {
        item.thumbnail_path
            .as_deref()
            .filter(|path| !path.is_empty())
            .map(|path| format!("{}/{}", self.base, path.trim_start_matches('/')))
    }

    /// What a grid card shows: the thumbnail, else the full image.
    #[must_use]
    pub fn preview(&self, item: &MediaItem) -> String {
        self.thumbnail(item).unwrap_or_else(|| self.image(item.id))
    }

    /// What the lightbox loads: a stream for videos, the image otherwise.
    #[must_use]
    pub fn viewer_source(&self, item: &MediaItem) -> String {
        if item.is_video() {
            self.stream(item.id)
        } else {
            self.image(item.id)
        }
    }
}

// =============================================================================
// HttpMediaSource
// =============================================================================

#[derive(Deserialize)]
struct ErrorBody {
    detail: serde_json::Value,
}

/// [`MediaSource`] backed by the media server's JSON API.
#[derive(Debug, Clone)]
pub struct HttpMediaSource {
    client: reqwest::Client,
    urls: MediaUrls,
}

impl HttpMediaSource {
    /// Creates a source for `base_url` with a per-request `timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Transport`] if the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            urls: MediaUrls::new(base_url),
        })
    }

    #[must_use]
    pub fn urls(&self) -> &MediaUrls {
        &self.urls
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, FetchError> {
        let url = self.urls.api(path);
        log::debug!("GET {url} {query:?}");

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        decode(response).await
    }
}

/// Reads a response body as `T`, mapping non-2xx answers to [`FetchError::Status`].
async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, FetchError> {
    let status = response.status();
    let body = response
        .bytes()
        .await
        .map_err(|e| FetchError::Transport(e.to_string()))?;

    if !status.is_success() {
        return Err(FetchError::Status {
            code: status.as_u16(),
            detail: error_detail(&body),
        });
    }

    serde_json::from_slice(&body).map_err(|e| FetchError::Decode(e.to_string()))
}

/// Extracts the `detail` field of an error body as display text.
fn error_detail(body: &[u8]) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_slice(body).ok()?;
    match parsed.detail {
        serde_json::Value::String(text) => Some(text),
        serde_json::Value::Null => None,
        other => Some(other.to_string()),
    }
}

impl MediaSource for HttpMediaSource {
    async fn fetch_collection(&self) -> Result<Vec<MediaItem>, FetchError> {
        self.get_json("media", &[]).await
    }

    async fn request_scan(&self, directory: &str) -> Result<ScanReport, ScanError> {
        let url = self.urls.api("scan");
        log::debug!("POST {url} directory={directory}");

        let response = self
            .client
            .post(&url)
            .query(&[("directory", directory)])
            .send()
            .await
            .map_err(|e| ScanError::Request(e.to_string()))?;

        decode(response).await.map_err(|err| match err {
            FetchError::Status {
                detail: Some(detail),
                ..
            } => ScanError::Rejected(detail),
            other => ScanError::Request(other.to_string()),
        })
    }

    async fn scan_status(&self) -> Result<ScanStatus, FetchError> {
        self.get_json("scan/status", &[]).await
    }

    async fn fetch_by_date(&self, day: DayKey) -> Result<Vec<MediaItem>, FetchError> {
        if day.is_unknown() {
            return Err(FetchError::Unsupported(
                "the unknown-date bucket has no server query".to_string(),
            ));
        }
        let date = day.to_string();
        self.get_json("media/by-date", &[("date", date.as_str())])
            .await
    }

    async fn fetch_by_album(&self, name: &str) -> Result<Vec<MediaItem>, FetchError> {
        self.get_json("media/by-album", &[("name", name)]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64) -> MediaItem {
        MediaItem::new(id, format!("media/{id}.jpg"))
    }

    #[test]
    fn urls_ignore_trailing_slash() {
        let urls = MediaUrls::new("http://localhost:8000/");
        assert_eq!(urls.image(MediaId(4)), "http://localhost:8000/api/media/image/4");
        assert_eq!(urls.stream(MediaId(4)), "http://localhost:8000/api/media/stream/4");
    }

    #[test]
    fn preview_prefers_thumbnail() {
        let urls = MediaUrls::new("http://localhost:8000");
        let mut with_thumb = item(1);
        with_thumb.thumbnail_path = Some("thumbnails/1.jpg".to_string());

        assert_eq!(urls.preview(&with_thumb), "http://localhost:8000/thumbnails/1.jpg");
        assert_eq!(urls.preview(&item(2)), "http://localhost:8000/api/media/image/2");
    }

    #[test]
    fn viewer_source_streams_videos() {
        let urls = MediaUrls::new("http://localhost:8000");
        let mut video = item(3);
        video.media_type = crate::domain::media::MediaType::Video;

        assert!(urls.viewer_source(&video).ends_with("/api/media/stream/3"));
        assert!(urls.viewer_source(&item(3)).ends_with("/api/media/image/3"));
    }

    #[test]
    fn error_detail_reads_string_and_structured_bodies() {
        assert_eq!(
            error_detail(br#"{"detail": "Directory does not exist"}"#).as_deref(),
            Some("Directory does not exist")
        );
        assert!(error_detail(br#"{"detail": [{"loc": ["query"]}]}"#)
            .is_some_and(|text| text.contains("loc")));
        assert_eq!(error_detail(b"<html>502</html>"), None);
    }

    #[tokio::test]
    async fn unknown_day_is_unsupported_without_a_request() {
        let source = HttpMediaSource::new("http://127.0.0.1:9", Duration::from_millis(50))
            .expect("client builds");
        let result = source.fetch_by_date(DayKey::Unknown).await;
        assert!(matches!(result, Err(FetchError::Unsupported(_))));
    }

    #[tokio::test]
    async fn unreachable_server_is_a_transport_error() {
        let source = HttpMediaSource::new("http://127.0.0.1:9", Duration::from_millis(200))
            .expect("client builds");
        let result = source.fetch_collection().await;
        assert!(matches!(result, Err(FetchError::Transport(_))));
    }
}
