// SPDX-License-Identifier: MPL-2.0
//! Top-level messages, effects and runtime flags for the gallery.

use super::subscription::SentinelToken;
use super::Screen;
use crate::application::port::ScanReport;
use crate::application::store::FetchTicket;
use crate::domain::error::{FetchError, ImageLoadError, ScanError};
use crate::domain::media::{AlbumName, DayKey, MediaId, MediaItem};
use std::fmt;

/// Identifies one detail-screen request; only the latest one is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DetailRequest(pub(crate) u64);

impl fmt::Display for DetailRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "detail#{}", self.0)
    }
}

/// Where the lightbox takes its list from when it opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxScope {
    /// The visible items of one timeline bucket (capped unless expanded).
    Bucket(DayKey),
    /// The list of the open date or album screen.
    Detail,
    /// The whole collection, indexed globally (map markers).
    Collection,
}

/// Keys the lightbox reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    ArrowLeft,
    ArrowRight,
    Other,
}

/// Top-level messages consumed by `Gallery::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Load (or reload) the collection.
    LoadCollection,
    /// A collection fetch completed.
    CollectionFetched {
        ticket: FetchTicket,
        result: Result<Vec<MediaItem>, FetchError>,
    },
    /// Ask the server to scan a directory.
    ScanRequested(String),
    /// The scan request completed.
    ScanFinished(Result<ScanReport, ScanError>),
    /// A timeline filter chip was picked; `all` clears the filter.
    FilterSelected(AlbumName),
    /// The load-more sentinel entered the viewport.
    SentinelVisible(SentinelToken),
    /// Expand or collapse one date bucket.
    ToggleDate(DayKey),
    /// A grid card was clicked.
    OpenLightbox { scope: LightboxScope, index: usize },
    LightboxNext,
    LightboxPrevious,
    LightboxClosed,
    KeyPressed(Key),
    /// Route change.
    Navigate(Screen),
    /// A date or album detail fetch completed.
    DetailFetched {
        request: DetailRequest,
        result: Result<Vec<MediaItem>, FetchError>,
    },
    /// An item's image finished loading.
    PreviewLoaded(MediaId),
    /// An item's image failed to load.
    PreviewFailed(ImageLoadError),
}

/// Side effects requested by `update`, executed by the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchCollection(FetchTicket),
    RequestScan(String),
    FetchDate { request: DetailRequest, day: DayKey },
    FetchAlbum { request: DetailRequest, name: String },
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `SMART_GALLERY_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional server URL, overriding `[server] base_url`.
    pub server: Option<String>,
    /// Directory to scan before showing anything.
    pub scan: Option<String>,
    /// Route to open once the collection is loaded.
    pub route: Option<String>,
    /// How many times to report the load-more sentinel as visible.
    pub pages: usize,
    /// Day bucket to expand on the timeline.
    pub expand: Option<String>,
}
