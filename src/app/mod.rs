// SPDX-License-Identifier: MPL-2.0
//! Gallery root state and orchestration between the collection and its views.
//!
//! The `Gallery` struct owns the collection store and every view derived from
//! it (smart albums, the paginated timeline, date buckets, the open detail
//! screen, the lightbox) and translates messages into state changes plus
//! [`Effect`]s for the runtime to execute.

pub mod config;
mod message;
pub mod paths;
pub mod runtime;
mod screen;
pub mod subscription;
mod update;
pub mod view;

pub use message::{DetailRequest, Effect, Flags, Key, LightboxScope, Message};
pub use runtime::Runtime;
pub use screen::Screen;
pub use update::SCANNING_MESSAGE;

use crate::application::query::{
    DateBucket, DateGrouper, ExpandState, LightboxNavigator, PaginationWindow,
};
use crate::application::store::CollectionStore;
use crate::domain::media::{AlbumName, DayBoundary, MediaItem, SmartAlbums};
use crate::domain::ui::{BusyDayThreshold, DisplayCap, PageSize};
use crate::infrastructure::http::MediaUrls;
use crate::media::preview::PreviewTracker;
use config::Config;
use std::fmt;
use std::sync::Arc;
use subscription::Sentinel;

/// View tuning resolved from the configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewSettings {
    pub page_size: PageSize,
    pub display_cap: DisplayCap,
    pub busy_day: BusyDayThreshold,
    pub day_boundary: DayBoundary,
    pub preview_capacity: usize,
}

impl ViewSettings {
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            page_size: config.page_size(),
            display_cap: config.display_cap(),
            busy_day: config.busy_day_threshold(),
            day_boundary: config.day_boundary(),
            preview_capacity: config::DEFAULT_PREVIEW_CAPACITY,
        }
    }

    #[must_use]
    pub fn grouper(&self) -> DateGrouper {
        DateGrouper::new(self.day_boundary)
    }
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Rescan progress shown next to the scan button.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanState {
    pub is_scanning: bool,
    pub message: Option<String>,
}

/// Where a detail screen's list came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailOrigin {
    Server,
    /// Derived from the loaded collection after the server request failed.
    Local,
}

/// The list behind an open date or album screen.
#[derive(Debug, Clone)]
pub struct DetailState {
    pub screen: Screen,
    pub request: DetailRequest,
    pub items: Arc<[Arc<MediaItem>]>,
    pub loading: bool,
    pub origin: Option<DetailOrigin>,
}

/// Root gallery state.
pub struct Gallery {
    settings: ViewSettings,
    urls: MediaUrls,
    screen: Screen,
    store: CollectionStore,
    albums: SmartAlbums,
    active_filter: Option<AlbumName>,
    window: PaginationWindow<Arc<MediaItem>>,
    buckets: Vec<DateBucket>,
    expanded: ExpandState,
    sentinel: Sentinel,
    lightbox: LightboxNavigator<Arc<MediaItem>>,
    scan: ScanState,
    /// Collection-level error line (failed fetch).
    status: Option<String>,
    detail: Option<DetailState>,
    detail_requests: u64,
    previews: PreviewTracker,
}

impl fmt::Debug for Gallery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Gallery")
            .field("screen", &self.screen)
            .field("items", &self.store.len())
            .field("active_filter", &self.active_filter)
            .field("window", &self.window.window_len())
            .field("buckets", &self.buckets.len())
            .field("lightbox_open", &self.lightbox.is_open())
            .field("scan", &self.scan)
            .finish_non_exhaustive()
    }
}

impl Gallery {
    #[must_use]
    pub fn new(settings: ViewSettings, urls: MediaUrls) -> Self {
        Self {
            settings,
            urls,
            screen: Screen::default(),
            store: CollectionStore::new(),
            albums: SmartAlbums::default(),
            active_filter: None,
            window: PaginationWindow::new(settings.page_size),
            buckets: Vec::new(),
            expanded: ExpandState::new(),
            sentinel: Sentinel::default(),
            lightbox: LightboxNavigator::new(),
            scan: ScanState::default(),
            status: None,
            detail: None,
            detail_requests: 0,
            previews: PreviewTracker::new(settings.preview_capacity),
        }
    }

    /// Builds a gallery from the loaded configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(ViewSettings::from_config(config), MediaUrls::new(config.base_url()))
    }

    /// Effects to run at startup: the initial collection load.
    pub fn boot(&mut self) -> Vec<Effect> {
        self.update(Message::LoadCollection)
    }

    pub fn update(&mut self, message: Message) -> Vec<Effect> {
        let mut ctx = update::UpdateContext {
            settings: &self.settings,
            screen: &mut self.screen,
            store: &mut self.store,
            albums: &mut self.albums,
            active_filter: &mut self.active_filter,
            window: &mut self.window,
            buckets: &mut self.buckets,
            expanded: &mut self.expanded,
            sentinel: &mut self.sentinel,
            lightbox: &mut self.lightbox,
            scan: &mut self.scan,
            status: &mut self.status,
            detail: &mut self.detail,
            detail_requests: &mut self.detail_requests,
            previews: &mut self.previews,
        };

        match message {
            Message::LoadCollection => update::handle_load_collection(&mut ctx),
            Message::CollectionFetched { ticket, result } => {
                update::handle_collection_fetched(&mut ctx, ticket, result)
            }
            Message::ScanRequested(directory) => update::handle_scan_requested(&mut ctx, directory),
            Message::ScanFinished(result) => update::handle_scan_finished(&mut ctx, result),
            Message::FilterSelected(album) => update::handle_filter_selected(&mut ctx, album),
            Message::SentinelVisible(token) => update::handle_sentinel_visible(&mut ctx, token),
            Message::ToggleDate(key) => update::handle_toggle_date(&mut ctx, key),
            Message::OpenLightbox { scope, index } => {
                update::handle_open_lightbox(&mut ctx, scope, index)
            }
            Message::LightboxNext => update::handle_lightbox_next(&mut ctx),
            Message::LightboxPrevious => update::handle_lightbox_previous(&mut ctx),
            Message::LightboxClosed => update::handle_lightbox_closed(&mut ctx),
            Message::KeyPressed(key) => update::handle_key(&mut ctx, key),
            Message::Navigate(screen) => update::handle_navigate(&mut ctx, screen),
            Message::DetailFetched { request, result } => {
                update::handle_detail_fetched(&mut ctx, request, result)
            }
            Message::PreviewLoaded(id) => update::handle_preview_loaded(&mut ctx, id),
            Message::PreviewFailed(error) => update::handle_preview_failed(&mut ctx, error),
        }
    }

    #[must_use]
    pub fn settings(&self) -> &ViewSettings {
        &self.settings
    }

    #[must_use]
    pub fn urls(&self) -> &MediaUrls {
        &self.urls
    }

    #[must_use]
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    #[must_use]
    pub fn store(&self) -> &CollectionStore {
        &self.store
    }

    #[must_use]
    pub fn albums(&self) -> &SmartAlbums {
        &self.albums
    }

    /// The active timeline filter; `None` means all media.
    #[must_use]
    pub fn active_filter(&self) -> Option<AlbumName> {
        self.active_filter
    }

    #[must_use]
    pub fn window(&self) -> &PaginationWindow<Arc<MediaItem>> {
        &self.window
    }

    /// Date buckets over the current window, newest first.
    #[must_use]
    pub fn buckets(&self) -> &[DateBucket] {
        &self.buckets
    }

    #[must_use]
    pub fn expanded(&self) -> &ExpandState {
        &self.expanded
    }

    #[must_use]
    pub fn sentinel(&self) -> &Sentinel {
        &self.sentinel
    }

    #[must_use]
    pub fn lightbox(&self) -> &LightboxNavigator<Arc<MediaItem>> {
        &self.lightbox
    }

    #[must_use]
    pub fn scan(&self) -> &ScanState {
        &self.scan
    }

    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    #[must_use]
    pub fn detail(&self) -> Option<&DetailState> {
        self.detail.as_ref()
    }

    #[must_use]
    pub fn previews(&self) -> &PreviewTracker {
        &self.previews
    }
}
