// SPDX-License-Identifier: MPL-2.0
//! Smart albums: named, predicate-derived views over the collection.
//!
//! # Available Albums
//!
//! - [`AlbumName::All`]: identity view
//! - [`AlbumName::Camera`], [`AlbumName::Screenshot`], [`AlbumName::Web`]:
//!   exact match on the item's source type
//! - [`AlbumName::Video`]: every video regardless of source
//!
//! [`SmartAlbums::classify`] builds all of them in a single traversal.

use super::types::{MediaItem, MediaType, SourceType};
use std::fmt;
use std::sync::Arc;

// =============================================================================
// Album Name
// =============================================================================

/// One of the fixed smart albums.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AlbumName {
    #[default]
    All,
    Camera,
    Screenshot,
    Web,
    Video,
}

impl AlbumName {
    /// Every album, `all` first.
    pub const EVERY: [AlbumName; 5] = [
        AlbumName::All,
        AlbumName::Camera,
        AlbumName::Screenshot,
        AlbumName::Web,
        AlbumName::Video,
    ];

    /// Albums shown on the albums overview (everything but `all`).
    pub const OVERVIEW: [AlbumName; 4] = [
        AlbumName::Camera,
        AlbumName::Screenshot,
        AlbumName::Web,
        AlbumName::Video,
    ];

    /// Filters offered above the timeline.
    pub const TIMELINE_FILTERS: [AlbumName; 4] = [
        AlbumName::All,
        AlbumName::Camera,
        AlbumName::Screenshot,
        AlbumName::Video,
    ];

    /// Parses an album name case-insensitively.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "all" => Some(AlbumName::All),
            "camera" => Some(AlbumName::Camera),
            "screenshot" => Some(AlbumName::Screenshot),
            "web" => Some(AlbumName::Web),
            "video" => Some(AlbumName::Video),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            AlbumName::All => "all",
            AlbumName::Camera => "camera",
            AlbumName::Screenshot => "screenshot",
            AlbumName::Web => "web",
            AlbumName::Video => "video",
        }
    }

    /// Membership predicate. Pure and total over [`MediaItem`].
    #[must_use]
    pub fn contains(self, item: &MediaItem) -> bool {
        match self {
            AlbumName::All => true,
            AlbumName::Camera => item.source_type == SourceType::Camera,
            AlbumName::Screenshot => item.source_type == SourceType::Screenshot,
            AlbumName::Web => item.source_type == SourceType::Web,
            AlbumName::Video => item.media_type == MediaType::Video,
        }
    }

    /// Returns `true` for every album except the identity album.
    #[must_use]
    pub fn is_filter(self) -> bool {
        self != AlbumName::All
    }
}

impl fmt::Display for AlbumName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Smart Albums
// =============================================================================

/// All smart albums derived from one collection.
///
/// Each partition preserves collection order. Items are shared, not copied.
#[derive(Debug, Clone, Default)]
pub struct SmartAlbums {
    all: Arc<[Arc<MediaItem>]>,
    camera: Arc<[Arc<MediaItem>]>,
    screenshot: Arc<[Arc<MediaItem>]>,
    web: Arc<[Arc<MediaItem>]>,
    video: Arc<[Arc<MediaItem>]>,
}

impl SmartAlbums {
    /// Classifies `collection` into every album in one pass.
    #[must_use]
    pub fn classify(collection: &Arc<[Arc<MediaItem>]>) -> Self {
        let mut camera = Vec::new();
        let mut screenshot = Vec::new();
        let mut web = Vec::new();
        let mut video = Vec::new();

        for item in collection.iter() {
            match item.source_type {
                SourceType::Camera => camera.push(Arc::clone(item)),
                SourceType::Screenshot => screenshot.push(Arc::clone(item)),
                SourceType::Web => web.push(Arc::clone(item)),
                SourceType::Other(_) => {}
            }
            if item.media_type == MediaType::Video {
                video.push(Arc::clone(item));
            }
        }

        Self {
            all: Arc::clone(collection),
            camera: camera.into(),
            screenshot: screenshot.into(),
            web: web.into(),
            video: video.into(),
        }
    }

    /// Returns the shared item list of `album`.
    #[must_use]
    pub fn get(&self, album: AlbumName) -> &Arc<[Arc<MediaItem>]> {
        match album {
            AlbumName::All => &self.all,
            AlbumName::Camera => &self.camera,
            AlbumName::Screenshot => &self.screenshot,
            AlbumName::Web => &self.web,
            AlbumName::Video => &self.video,
        }
    }

    /// Iterates over every album, `all` first.
    pub fn iter(&self) -> impl Iterator<Item = (AlbumName, &[Arc<MediaItem>])> {
        AlbumName::EVERY
            .into_iter()
            .map(move |album| (album, &self.get(album)[..]))
    }
}

/// Resolves an album by its raw route name against a local collection.
///
/// Used when the server cannot answer. Known names use their predicate;
/// any other name matches items whose source type carries that exact name,
/// so scanner categories without a dedicated album still resolve.
#[must_use]
pub fn local_album(name: &str, collection: &[Arc<MediaItem>]) -> Vec<Arc<MediaItem>> {
    let name = name.trim().to_lowercase();
    match AlbumName::parse(&name) {
        Some(album) => collection
            .iter()
            .filter(|item| album.contains(item))
            .cloned()
            .collect(),
        None => collection
            .iter()
            .filter(|item| item.source_type.as_str() == name)
            .cloned()
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64, source: &str, media_type: MediaType) -> Arc<MediaItem> {
        let mut item = MediaItem::new(id, format!("media/{id}"));
        item.source_type = SourceType::from(source.to_string());
        item.media_type = media_type;
        Arc::new(item)
    }

    fn sample() -> Arc<[Arc<MediaItem>]> {
        vec![
            item(1, "camera", MediaType::Image),
            item(2, "screenshot", MediaType::Image),
            item(3, "camera", MediaType::Video),
            item(4, "web", MediaType::Image),
            item(5, "messenger", MediaType::Video),
        ]
        .into()
    }

    fn ids(items: &[Arc<MediaItem>]) -> Vec<i64> {
        items.iter().map(|item| item.id.0).collect()
    }

    #[test]
    fn all_album_is_the_collection() {
        let collection = sample();
        let albums = SmartAlbums::classify(&collection);
        assert!(Arc::ptr_eq(albums.get(AlbumName::All), &collection));
    }

    #[test]
    fn source_albums_match_exactly() {
        let albums = SmartAlbums::classify(&sample());
        assert_eq!(ids(albums.get(AlbumName::Camera)), vec![1, 3]);
        assert_eq!(ids(albums.get(AlbumName::Screenshot)), vec![2]);
        assert_eq!(ids(albums.get(AlbumName::Web)), vec![4]);
    }

    #[test]
    fn video_album_crosses_sources() {
        let albums = SmartAlbums::classify(&sample());
        assert_eq!(ids(albums.get(AlbumName::Video)), vec![3, 5]);
    }

    #[test]
    fn source_albums_are_pairwise_disjoint() {
        let albums = SmartAlbums::classify(&sample());
        let sources = [AlbumName::Camera, AlbumName::Screenshot, AlbumName::Web];
        for (i, a) in sources.iter().enumerate() {
            for b in &sources[i + 1..] {
                let left = ids(albums.get(*a));
                let right = ids(albums.get(*b));
                assert!(left.iter().all(|id| !right.contains(id)), "{a} and {b} overlap");
            }
        }
    }

    #[test]
    fn classification_matches_each_predicate() {
        let collection = sample();
        let albums = SmartAlbums::classify(&collection);
        for (album, members) in albums.iter() {
            let expected: Vec<i64> = collection
                .iter()
                .filter(|item| album.contains(item))
                .map(|item| item.id.0)
                .collect();
            assert_eq!(ids(members), expected, "album {album}");
        }
    }

    #[test]
    fn empty_collection_yields_empty_albums() {
        let albums = SmartAlbums::classify(&Vec::new().into());
        assert!(albums.iter().all(|(_, members)| members.is_empty()));
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(AlbumName::parse("Camera"), Some(AlbumName::Camera));
        assert_eq!(AlbumName::parse(" VIDEO "), Some(AlbumName::Video));
        assert_eq!(AlbumName::parse("favorites"), None);
    }

    #[test]
    fn local_album_resolves_unlisted_source_names() {
        let collection = sample();
        assert_eq!(ids(&local_album("Messenger", &collection)), vec![5]);
        assert_eq!(ids(&local_album("video", &collection)), vec![3, 5]);
        assert!(local_album("favorites", &collection).is_empty());
    }
}
