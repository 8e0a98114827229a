// SPDX-License-Identifier: MPL-2.0
//! Core media records for the domain layer.
//!
//! A [`MediaItem`] is exactly what the server reports for one scanned file.
//! Items are never mutated after a fetch; a refresh replaces them wholesale.

use super::day::{DayBoundary, DayKey};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable, unique identifier assigned by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MediaId(pub i64);

impl fmt::Display for MediaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Represents the two kinds of media the scanner ingests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    /// Still image.
    #[default]
    Image,
    /// Video clip.
    Video,
}

/// Where an item came from, as classified by the scanner.
///
/// The scanner may grow new categories; anything unrecognized is kept
/// verbatim in [`SourceType::Other`] so album lookups by name still work.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SourceType {
    Camera,
    Screenshot,
    Web,
    Other(String),
}

impl SourceType {
    /// Returns the wire name of this source type.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            SourceType::Camera => "camera",
            SourceType::Screenshot => "screenshot",
            SourceType::Web => "web",
            SourceType::Other(name) => name,
        }
    }
}

impl Default for SourceType {
    fn default() -> Self {
        SourceType::Other("unknown".to_string())
    }
}

impl From<String> for SourceType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "camera" => SourceType::Camera,
            "screenshot" => SourceType::Screenshot,
            "web" => SourceType::Web,
            _ => SourceType::Other(raw),
        }
    }
}

impl From<SourceType> for String {
    fn from(source: SourceType) -> Self {
        match source {
            SourceType::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Location
// =============================================================================

/// GPS position in decimal degrees (WGS84).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    latitude: f64,
    longitude: f64,
}

impl Location {
    /// Creates a location, clamping latitude to ±90 and longitude to ±180.
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude: latitude.clamp(-90.0, 90.0),
            longitude: longitude.clamp(-180.0, 180.0),
        }
    }

    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

// =============================================================================
// MediaItem
// =============================================================================

/// One scanned photo or video.
///
/// `created_at` is kept as the raw server string: a missing or malformed
/// timestamp must not reject the whole collection, it only sends the item to
/// the `unknown date` bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaItem {
    pub id: MediaId,
    pub filepath: String,
    #[serde(default)]
    pub media_type: MediaType,
    #[serde(default)]
    pub source_type: SourceType,
    #[serde(default)]
    pub created_at: Option<String>,
    /// Length in seconds, videos only.
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default)]
    pub thumbnail_path: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub location_name: Option<String>,
}

impl MediaItem {
    /// Creates an image record with no optional metadata.
    #[must_use]
    pub fn new(id: i64, filepath: impl Into<String>) -> Self {
        Self {
            id: MediaId(id),
            filepath: filepath.into(),
            media_type: MediaType::Image,
            source_type: SourceType::default(),
            created_at: None,
            duration: None,
            thumbnail_path: None,
            latitude: None,
            longitude: None,
            location_name: None,
        }
    }

    #[must_use]
    pub fn is_video(&self) -> bool {
        self.media_type == MediaType::Video
    }

    /// Returns the calendar day this item belongs to under `boundary`.
    #[must_use]
    pub fn day_key(&self, boundary: DayBoundary) -> DayKey {
        boundary.day_of(self.created_at.as_deref())
    }

    /// Returns the GPS position when both coordinates are present and finite.
    #[must_use]
    pub fn location(&self) -> Option<Location> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) if lat.is_finite() && lon.is_finite() => {
                Some(Location::new(lat, lon))
            }
            _ => None,
        }
    }

    /// Returns the non-empty place name, if the scanner resolved one.
    #[must_use]
    pub fn place(&self) -> Option<&str> {
        self.location_name.as_deref().filter(|name| !name.is_empty())
    }

    /// Formats the duration as `m:ss`; missing or zero durations read `0:00`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn duration_label(&self) -> String {
        let secs = match self.duration {
            Some(d) if d.is_finite() && d > 0.0 => d.floor() as u64,
            _ => 0,
        };
        format!("{}:{:02}", secs / 60, secs % 60)
    }
}
