// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the gallery.
//!
//! Every handler mutates only the state it owns and returns the effects the
//! runtime should execute. Derived views are rebuilt from their inputs:
//!
//! ```text
//! collection ─┬─> smart albums ─> active source ─> window ─> day buckets
//!             └─> open detail screen (re-fetched)
//! ```
//!
//! Any change of the active source (filter switch, refresh) resets the
//! window to page one and remounts the sentinel.

use super::message::{DetailRequest, Effect, Key, LightboxScope};
use super::subscription::{Sentinel, SentinelToken};
use super::{DetailOrigin, DetailState, ScanState, Screen, ViewSettings};
use crate::application::port::ScanReport;
use crate::application::query::{
    DateBucket, DateGrouper, ExpandState, LightboxNavigator, PaginationWindow,
};
use crate::application::store::{CollectionStore, FetchOutcome, FetchTicket};
use crate::domain::error::{FetchError, ImageLoadError, ScanError};
use crate::domain::media::{local_album, AlbumName, DayKey, MediaId, MediaItem, SmartAlbums};
use crate::media::preview::PreviewTracker;
use std::sync::Arc;

/// Status line while a scan request is in flight.
pub const SCANNING_MESSAGE: &str = "Scanning...";

/// Context for update operations containing mutable references to gallery state.
pub struct UpdateContext<'a> {
    pub settings: &'a ViewSettings,
    pub screen: &'a mut Screen,
    pub store: &'a mut CollectionStore,
    pub albums: &'a mut SmartAlbums,
    pub active_filter: &'a mut Option<AlbumName>,
    pub window: &'a mut PaginationWindow<Arc<MediaItem>>,
    pub buckets: &'a mut Vec<DateBucket>,
    pub expanded: &'a mut ExpandState,
    pub sentinel: &'a mut Sentinel,
    pub lightbox: &'a mut LightboxNavigator<Arc<MediaItem>>,
    pub scan: &'a mut ScanState,
    pub status: &'a mut Option<String>,
    pub detail: &'a mut Option<DetailState>,
    pub detail_requests: &'a mut u64,
    pub previews: &'a mut PreviewTracker,
}

impl UpdateContext<'_> {
    fn grouper(&self) -> DateGrouper {
        self.settings.grouper()
    }
}

// =============================================================================
// Collection
// =============================================================================

/// Issues a collection fetch.
pub fn handle_load_collection(ctx: &mut UpdateContext<'_>) -> Vec<Effect> {
    let ticket = ctx.store.begin_fetch();
    vec![Effect::FetchCollection(ticket)]
}

/// Applies a fetch completion and rebuilds every derived view.
pub fn handle_collection_fetched(
    ctx: &mut UpdateContext<'_>,
    ticket: FetchTicket,
    result: Result<Vec<MediaItem>, FetchError>,
) -> Vec<Effect> {
    match ctx.store.complete_fetch(ticket, result) {
        FetchOutcome::Applied => {
            *ctx.albums = SmartAlbums::classify(ctx.store.items());
            ctx.previews.clear();
            *ctx.status = None;
            reset_timeline(ctx);
            if ctx.screen.is_detail() {
                request_detail(ctx)
            } else {
                Vec::new()
            }
        }
        FetchOutcome::Stale => Vec::new(),
        FetchOutcome::Failed(err) => {
            *ctx.status = Some(format!("Failed to load media: {err}"));
            Vec::new()
        }
    }
}

// =============================================================================
// Scan
// =============================================================================

/// Starts a scan unless one is already in flight.
pub fn handle_scan_requested(ctx: &mut UpdateContext<'_>, directory: String) -> Vec<Effect> {
    if ctx.scan.is_scanning {
        log::debug!("scan already in flight, ignoring request for {directory}");
        return Vec::new();
    }
    log::info!("requesting scan of {directory}");
    ctx.scan.is_scanning = true;
    ctx.scan.message = Some(SCANNING_MESSAGE.to_string());
    vec![Effect::RequestScan(directory)]
}

/// Reports the scan outcome and refreshes the collection on success.
pub fn handle_scan_finished(
    ctx: &mut UpdateContext<'_>,
    result: Result<ScanReport, ScanError>,
) -> Vec<Effect> {
    ctx.scan.is_scanning = false;
    match result {
        Ok(report) => {
            log::info!("scan {:?}: {}", report.status, report.message);
            ctx.scan.message = Some(report.message);
            handle_load_collection(ctx)
        }
        Err(err) => {
            log::warn!("{err}");
            ctx.scan.message = Some(format!("Scan failed: {}", err.detail()));
            Vec::new()
        }
    }
}

// =============================================================================
// Timeline
// =============================================================================

/// Switches the timeline source. `all` clears the filter.
pub fn handle_filter_selected(ctx: &mut UpdateContext<'_>, album: AlbumName) -> Vec<Effect> {
    *ctx.active_filter = album.is_filter().then_some(album);
    log::debug!("timeline filter: {album}");
    reset_timeline(ctx);
    Vec::new()
}

/// Grows the window by one page for a current, armed sentinel.
pub fn handle_sentinel_visible(ctx: &mut UpdateContext<'_>, token: SentinelToken) -> Vec<Effect> {
    if *ctx.screen != Screen::Timeline || !ctx.sentinel.fire(token) {
        return Vec::new();
    }
    if ctx.window.advance() {
        regroup(ctx);
        log::debug!(
            "timeline window now {} of {}",
            ctx.window.window_len(),
            ctx.window.source().len()
        );
    }
    rearm(ctx);
    Vec::new()
}

pub fn handle_toggle_date(ctx: &mut UpdateContext<'_>, key: DayKey) -> Vec<Effect> {
    ctx.expanded.toggle(key);
    Vec::new()
}

/// Points the window at the active source, regroups and remounts the sentinel.
fn reset_timeline(ctx: &mut UpdateContext<'_>) {
    let album = ctx.active_filter.unwrap_or(AlbumName::All);
    ctx.window.reset(Arc::clone(ctx.albums.get(album)));
    regroup(ctx);
    mount_sentinel(ctx);
}

fn regroup(ctx: &mut UpdateContext<'_>) {
    *ctx.buckets = ctx.grouper().group(ctx.window.current_window());
}

fn mount_sentinel(ctx: &mut UpdateContext<'_>) {
    if *ctx.screen == Screen::Timeline {
        ctx.sentinel.mount();
        rearm(ctx);
    } else {
        ctx.sentinel.unmount();
    }
}

fn rearm(ctx: &mut UpdateContext<'_>) {
    if ctx.window.has_more() {
        ctx.sentinel.arm();
    } else {
        ctx.sentinel.disarm();
    }
}

// =============================================================================
// Lightbox
// =============================================================================

/// Opens the viewer on the list named by `scope`.
pub fn handle_open_lightbox(
    ctx: &mut UpdateContext<'_>,
    scope: LightboxScope,
    index: usize,
) -> Vec<Effect> {
    let list: Arc<[Arc<MediaItem>]> = match scope {
        LightboxScope::Bucket(key) => ctx
            .buckets
            .iter()
            .find(|bucket| bucket.key() == key)
            .map(|bucket| {
                bucket
                    .visible_items(ctx.settings.display_cap, ctx.expanded.is_expanded(key))
                    .to_vec()
            })
            .unwrap_or_default()
            .into(),
        LightboxScope::Detail => ctx
            .detail
            .as_ref()
            .map_or_else(|| Arc::from(Vec::new()), |detail| Arc::clone(&detail.items)),
        LightboxScope::Collection => Arc::clone(ctx.store.items()),
    };

    if let Err(err) = ctx.lightbox.open(list, index) {
        log::debug!("lightbox not opened for {scope:?}: {err}");
    }
    Vec::new()
}

pub fn handle_lightbox_next(ctx: &mut UpdateContext<'_>) -> Vec<Effect> {
    ctx.lightbox.next();
    Vec::new()
}

pub fn handle_lightbox_previous(ctx: &mut UpdateContext<'_>) -> Vec<Effect> {
    ctx.lightbox.previous();
    Vec::new()
}

pub fn handle_lightbox_closed(ctx: &mut UpdateContext<'_>) -> Vec<Effect> {
    ctx.lightbox.close();
    Vec::new()
}

/// Keyboard navigation; ignored while the viewer is closed.
pub fn handle_key(ctx: &mut UpdateContext<'_>, key: Key) -> Vec<Effect> {
    if !ctx.lightbox.is_open() {
        return Vec::new();
    }
    match key {
        Key::Escape => handle_lightbox_closed(ctx),
        Key::ArrowRight => handle_lightbox_next(ctx),
        Key::ArrowLeft => handle_lightbox_previous(ctx),
        Key::Other => Vec::new(),
    }
}

// =============================================================================
// Navigation & Detail Screens
// =============================================================================

/// Switches screens. Detail screens fetch their list.
pub fn handle_navigate(ctx: &mut UpdateContext<'_>, target: Screen) -> Vec<Effect> {
    ctx.lightbox.close();
    *ctx.screen = target;
    mount_sentinel(ctx);

    if ctx.screen.is_detail() {
        request_detail(ctx)
    } else {
        *ctx.detail = None;
        Vec::new()
    }
}

/// Issues a fetch for the current detail screen, superseding any pending one.
fn request_detail(ctx: &mut UpdateContext<'_>) -> Vec<Effect> {
    *ctx.detail_requests += 1;
    let request = DetailRequest(*ctx.detail_requests);

    let effect = match &*ctx.screen {
        Screen::Date(day) => Effect::FetchDate { request, day: *day },
        Screen::Album(name) => Effect::FetchAlbum {
            request,
            name: name.clone(),
        },
        Screen::Timeline | Screen::Map | Screen::Albums => return Vec::new(),
    };

    // A refresh of the same screen keeps showing the previous list meanwhile.
    let (items, origin) = match ctx.detail.as_ref() {
        Some(previous) if previous.screen == *ctx.screen => {
            (Arc::clone(&previous.items), previous.origin)
        }
        _ => (Arc::from(Vec::new()), None),
    };

    *ctx.detail = Some(DetailState {
        screen: ctx.screen.clone(),
        request,
        items,
        loading: true,
        origin,
    });
    vec![effect]
}

/// Applies the current detail request's result, or derives the list locally.
pub fn handle_detail_fetched(
    ctx: &mut UpdateContext<'_>,
    request: DetailRequest,
    result: Result<Vec<MediaItem>, FetchError>,
) -> Vec<Effect> {
    let grouper = ctx.grouper();
    let Some(detail) = ctx.detail.as_mut().filter(|detail| detail.request == request) else {
        log::debug!("dropping stale {request}");
        return Vec::new();
    };

    match result {
        Ok(items) => {
            detail.items = items.into_iter().map(Arc::new).collect();
            detail.origin = Some(DetailOrigin::Server);
        }
        Err(err) => {
            log::warn!("{} unavailable from server ({err}), deriving locally", detail.screen);
            let collection = ctx.store.items();
            let local = match &detail.screen {
                Screen::Date(day) => grouper.items_on(*day, collection),
                Screen::Album(name) => local_album(name, collection),
                Screen::Timeline | Screen::Map | Screen::Albums => Vec::new(),
            };
            detail.items = local.into();
            detail.origin = Some(DetailOrigin::Local);
        }
    }
    detail.loading = false;
    Vec::new()
}

// =============================================================================
// Previews
// =============================================================================

pub fn handle_preview_loaded(ctx: &mut UpdateContext<'_>, id: MediaId) -> Vec<Effect> {
    ctx.previews.mark_loaded(id);
    Vec::new()
}

pub fn handle_preview_failed(ctx: &mut UpdateContext<'_>, error: ImageLoadError) -> Vec<Effect> {
    ctx.previews.mark_failed(error);
    Vec::new()
}
