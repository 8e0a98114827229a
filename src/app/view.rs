// SPDX-License-Identifier: MPL-2.0
//! Render models for each screen, plus a plain-text renderer.
//!
//! The models hold everything a presentation layer needs (URLs, labels,
//! counts, the sentinel token) so it never has to reach into engine state.

use super::subscription::SentinelToken;
use super::{DetailOrigin, Gallery, Screen};
use crate::application::query::{geo, DateBucket, NavigationInfo};
use crate::domain::media::{AlbumName, DayKey, Location, MediaId, MediaItem};
use crate::infrastructure::http::MediaUrls;
use crate::media::preview::{PreviewTracker, PLACEHOLDER};
use std::fmt::Write as _;
use std::sync::Arc;

/// Shown when the timeline has nothing to display.
pub const EMPTY_STATE: &str = "No media found";

/// One grid card.
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub id: MediaId,
    /// Image URL, or `None` once the preview failed to load.
    pub preview: Option<String>,
    pub source_badge: String,
    /// `m:ss`, videos only.
    pub duration: Option<String>,
}

impl CardView {
    fn new(item: &MediaItem, urls: &MediaUrls, previews: &PreviewTracker) -> Self {
        Self {
            id: item.id,
            preview: (!previews.is_failed(item.id)).then(|| urls.preview(item)),
            source_badge: item.source_type.as_str().to_string(),
            duration: item.is_video().then(|| item.duration_label()),
        }
    }

    /// The preview URL or the placeholder text.
    #[must_use]
    pub fn preview_label(&self) -> &str {
        self.preview.as_deref().unwrap_or(PLACEHOLDER)
    }
}

fn cards(items: &[Arc<MediaItem>], gallery: &Gallery) -> Vec<CardView> {
    items
        .iter()
        .map(|item| CardView::new(item, gallery.urls(), gallery.previews()))
        .collect()
}

/// One date bucket on the timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct BucketView {
    pub key: DayKey,
    pub count: usize,
    pub hidden_count: usize,
    /// Only buckets with hidden items offer expand/collapse.
    pub can_expand: bool,
    pub expanded: bool,
    pub location_summary: Option<String>,
    pub busy: bool,
    /// Link to the full day.
    pub detail_route: String,
    pub cards: Vec<CardView>,
}

impl BucketView {
    fn new(bucket: &DateBucket, gallery: &Gallery) -> Self {
        let settings = gallery.settings();
        let key = bucket.key();
        let expanded = gallery.expanded().is_expanded(key);
        Self {
            key,
            count: bucket.len(),
            hidden_count: bucket.hidden_count(settings.display_cap, expanded),
            can_expand: bucket.has_hidden(settings.display_cap),
            expanded,
            location_summary: bucket.location_summary(),
            busy: bucket.is_busy(settings.busy_day),
            detail_route: Screen::Date(key).path(),
            cards: cards(bucket.visible_items(settings.display_cap, expanded), gallery),
        }
    }
}

/// The timeline screen.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineView {
    /// Filter chips with their active flag.
    pub filters: Vec<(AlbumName, bool)>,
    pub buckets: Vec<BucketView>,
    /// Present while more pages remain.
    pub sentinel: Option<SentinelToken>,
    pub status: Option<String>,
    pub scan_message: Option<String>,
}

#[must_use]
pub fn timeline(gallery: &Gallery) -> TimelineView {
    let active = gallery.active_filter().unwrap_or(AlbumName::All);
    TimelineView {
        filters: AlbumName::TIMELINE_FILTERS
            .iter()
            .map(|&album| (album, album == active))
            .collect(),
        buckets: gallery
            .buckets()
            .iter()
            .map(|bucket| BucketView::new(bucket, gallery))
            .collect(),
        sentinel: gallery.sentinel().token(),
        status: gallery.status().map(str::to_string),
        scan_message: gallery.scan().message.clone(),
    }
}

/// One smart album on the overview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlbumCard {
    pub album: AlbumName,
    pub count: usize,
    pub cover: Option<String>,
    pub route: String,
}

/// Every smart album except `all`, in overview order.
#[must_use]
pub fn albums(gallery: &Gallery) -> Vec<AlbumCard> {
    AlbumName::OVERVIEW
        .iter()
        .map(|&album| {
            let items = gallery.albums().get(album);
            AlbumCard {
                album,
                count: items.len(),
                cover: items.first().map(|item| gallery.urls().preview(item)),
                route: Screen::Album(album.as_str().to_string()).path(),
            }
        })
        .collect()
}

/// A marker on the map; `index` opens the lightbox over the full collection.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerView {
    pub id: MediaId,
    pub location: Location,
    pub label: String,
    pub index: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapView {
    pub center: Location,
    pub markers: Vec<MarkerView>,
}

#[must_use]
pub fn map(gallery: &Gallery) -> MapView {
    let markers = geo::markers(gallery.store().items());
    MapView {
        center: geo::center(&markers),
        markers: markers
            .into_iter()
            .map(|marker| MarkerView {
                id: marker.item.id,
                location: marker.location,
                label: marker
                    .item
                    .place()
                    .map_or_else(|| marker.item.filepath.clone(), str::to_string),
                index: marker.collection_index,
            })
            .collect(),
    }
}

/// An open date or album screen.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub title: String,
    pub loading: bool,
    pub origin: Option<DetailOrigin>,
    pub cards: Vec<CardView>,
}

#[must_use]
pub fn detail(gallery: &Gallery) -> Option<DetailView> {
    let detail = gallery.detail()?;
    let title = match &detail.screen {
        Screen::Date(key) => key.to_string(),
        Screen::Album(name) => name.to_uppercase(),
        other => other.path(),
    };
    Some(DetailView {
        title,
        loading: detail.loading,
        origin: detail.origin,
        cards: cards(&detail.items, gallery),
    })
}

/// The open viewer.
#[derive(Debug, Clone, PartialEq)]
pub struct LightboxView {
    pub id: MediaId,
    /// Stream URL for videos, image URL otherwise.
    pub source: String,
    pub is_video: bool,
    pub info: NavigationInfo,
}

impl LightboxView {
    /// `3 / 12` style position label.
    #[must_use]
    pub fn position(&self) -> String {
        let current = self.info.current_index.map_or(0, |index| index + 1);
        format!("{current} / {}", self.info.total_count)
    }
}

#[must_use]
pub fn lightbox(gallery: &Gallery) -> Option<LightboxView> {
    let navigator = gallery.lightbox();
    let item = navigator.current()?;
    Some(LightboxView {
        id: item.id,
        source: gallery.urls().viewer_source(item),
        is_video: item.is_video(),
        info: navigator.navigation_info(),
    })
}

// =============================================================================
// Text Rendering
// =============================================================================

/// Renders the current screen (and the viewer, if open) as plain text.
#[must_use]
pub fn render_text(gallery: &Gallery) -> String {
    let mut out = String::new();
    match gallery.screen() {
        Screen::Timeline => render_timeline(&mut out, &timeline(gallery)),
        Screen::Albums => render_albums(&mut out, &albums(gallery)),
        Screen::Map => render_map(&mut out, &map(gallery)),
        Screen::Date(_) | Screen::Album(_) => {
            if let Some(view) = detail(gallery) {
                render_detail(&mut out, &view);
            }
        }
    }
    if let Some(view) = lightbox(gallery) {
        let _ = writeln!(out, "\n[viewer {}] {}", view.position(), view.source);
    }
    out
}

fn render_cards(out: &mut String, cards: &[CardView]) {
    for card in cards {
        let _ = write!(out, "  #{} [{}] {}", card.id, card.source_badge, card.preview_label());
        if let Some(duration) = &card.duration {
            let _ = write!(out, " (video {duration})");
        }
        out.push('\n');
    }
}

fn render_timeline(out: &mut String, view: &TimelineView) {
    let chips: Vec<String> = view
        .filters
        .iter()
        .map(|(album, active)| {
            let label = album.as_str().to_uppercase();
            if *active {
                format!("[{label}]")
            } else {
                label
            }
        })
        .collect();
    let _ = writeln!(out, "{}", chips.join(" "));
    if let Some(message) = &view.scan_message {
        let _ = writeln!(out, "{message}");
    }
    if let Some(status) = &view.status {
        let _ = writeln!(out, "{status}");
    }

    if view.buckets.is_empty() {
        let _ = writeln!(out, "{EMPTY_STATE}");
    }
    for bucket in &view.buckets {
        let _ = write!(out, "\n{} - {} items", bucket.key, bucket.count);
        if bucket.busy {
            out.push_str(" (busy day)");
        }
        out.push('\n');
        if let Some(places) = &bucket.location_summary {
            let _ = writeln!(out, "  {places}");
        }
        render_cards(out, &bucket.cards);
        if bucket.can_expand {
            let toggle = if bucket.expanded { "Collapse" } else { "Expand" };
            let _ = writeln!(out, "  {toggle} ({} hidden)", bucket.hidden_count);
        }
    }
    if view.sentinel.is_some() {
        let _ = writeln!(out, "\n...more");
    }
}

fn render_albums(out: &mut String, cards: &[AlbumCard]) {
    for card in cards {
        let cover = card.cover.as_deref().unwrap_or("-");
        let _ = writeln!(
            out,
            "{:<12} {:>5} items  {cover}",
            card.album.as_str().to_uppercase(),
            card.count
        );
    }
}

fn render_map(out: &mut String, view: &MapView) {
    let _ = writeln!(
        out,
        "center {:.4}, {:.4} ({} markers)",
        view.center.latitude(),
        view.center.longitude(),
        view.markers.len()
    );
    for marker in &view.markers {
        let _ = writeln!(
            out,
            "  #{} {:.4}, {:.4} {}",
            marker.id,
            marker.location.latitude(),
            marker.location.longitude(),
            marker.label
        );
    }
}

fn render_detail(out: &mut String, view: &DetailView) {
    let _ = writeln!(out, "{}", view.title);
    if view.loading && view.cards.is_empty() {
        let _ = writeln!(out, "Loading...");
        return;
    }
    if view.origin == Some(DetailOrigin::Local) {
        let _ = writeln!(out, "(offline: derived from the loaded collection)");
    }
    render_cards(out, &view.cards);
}
