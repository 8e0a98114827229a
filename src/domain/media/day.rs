// SPDX-License-Identifier: MPL-2.0
//! Calendar-day keys for the timeline.
//!
//! The timeline groups items by the *local* calendar day a person would name
//! when looking at the photo, so the zone used to cut days is an explicit
//! setting ([`DayBoundary`]) rather than whatever zone the server used.
//!
//! Timestamp interpretation:
//! - with an offset (`2024-01-02T23:50:00+09:00`, `...Z`): converted into the
//!   boundary zone, then truncated to a date;
//! - without an offset (`2024-01-02T23:50`): already wall-clock time in the
//!   boundary zone, its date is used as-is;
//! - date only (`2024-01-02`): that date;
//! - anything else, or no timestamp at all: [`DayKey::Unknown`].

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

const DAY_FORMAT: &str = "%Y-%m-%d";
const UNKNOWN_LABEL: &str = "unknown date";

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

// =============================================================================
// DayKey
// =============================================================================

/// Identity of one timeline bucket.
///
/// Ordering puts [`DayKey::Unknown`] below every real day, so sorting keys in
/// descending order yields newest day first and the unknown bucket last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DayKey {
    /// The timestamp was missing or unreadable.
    Unknown,
    /// A calendar day.
    Day(NaiveDate),
}

impl DayKey {
    /// Parses a `YYYY-MM-DD` route segment (or the `unknown date` label).
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw == UNKNOWN_LABEL {
            return Some(DayKey::Unknown);
        }
        NaiveDate::parse_from_str(raw, DAY_FORMAT)
            .ok()
            .map(DayKey::Day)
    }

    /// Builds a key from year, month and day; `None` for impossible dates.
    #[must_use]
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(DayKey::Day)
    }

    #[must_use]
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            DayKey::Day(date) => Some(*date),
            DayKey::Unknown => None,
        }
    }

    #[must_use]
    pub fn is_unknown(&self) -> bool {
        matches!(self, DayKey::Unknown)
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayKey::Day(date) => write!(f, "{}", date.format(DAY_FORMAT)),
            DayKey::Unknown => f.write_str(UNKNOWN_LABEL),
        }
    }
}

// =============================================================================
// DayBoundary
// =============================================================================

/// Which clock decides where one day ends and the next begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DayBoundary {
    /// The zone of the machine running the gallery.
    #[default]
    Local,
    /// Coordinated Universal Time.
    Utc,
    /// A fixed offset, in minutes east of UTC.
    FixedOffset(i32),
}

impl DayBoundary {
    /// Maps a raw `created_at` value to its day bucket. Never fails.
    #[must_use]
    pub fn day_of(self, created_at: Option<&str>) -> DayKey {
        let Some(raw) = created_at.map(str::trim).filter(|s| !s.is_empty()) else {
            return DayKey::Unknown;
        };

        if let Some(zoned) = parse_zoned(raw) {
            return DayKey::Day(self.local_date(&zoned));
        }

        if let Some(naive) = parse_naive(raw) {
            return DayKey::Day(naive.date());
        }

        NaiveDate::parse_from_str(raw, DAY_FORMAT).map_or(DayKey::Unknown, DayKey::Day)
    }

    fn local_date(self, instant: &DateTime<FixedOffset>) -> NaiveDate {
        match self {
            DayBoundary::Local => instant.with_timezone(&Local).date_naive(),
            DayBoundary::Utc => instant.with_timezone(&Utc).date_naive(),
            DayBoundary::FixedOffset(minutes) => minutes
                .checked_mul(60)
                .and_then(FixedOffset::east_opt)
                .map_or_else(
                    || instant.with_timezone(&Utc).date_naive(),
                    |offset| instant.with_timezone(&offset).date_naive(),
                ),
        }
    }
}

fn parse_zoned(raw: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed);
    }
    // `2024-01-02T10:00Z` is common but not RFC 3339 (no seconds).
    let naive = raw.strip_suffix('Z').and_then(parse_naive)?;
    Some(naive.and_utc().fixed_offset())
}

fn parse_naive(raw: &str) -> Option<NaiveDateTime> {
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> DayKey {
        DayKey::from_ymd(y, m, d).expect("valid date")
    }

    #[test]
    fn naive_timestamps_keep_their_wall_clock_date() {
        for boundary in [DayBoundary::Local, DayBoundary::Utc, DayBoundary::FixedOffset(540)] {
            assert_eq!(boundary.day_of(Some("2024-01-02T23:50")), day(2024, 1, 2));
            assert_eq!(boundary.day_of(Some("2024-01-02T00:10:00")), day(2024, 1, 2));
            assert_eq!(boundary.day_of(Some("2024-01-02 08:00:00.123")), day(2024, 1, 2));
        }
    }

    #[test]
    fn zoned_timestamps_are_cut_in_the_boundary_zone() {
        let raw = Some("2024-01-02T23:30:00Z");
        assert_eq!(DayBoundary::Utc.day_of(raw), day(2024, 1, 2));
        assert_eq!(DayBoundary::FixedOffset(60).day_of(raw), day(2024, 1, 3));
        assert_eq!(DayBoundary::FixedOffset(-60).day_of(raw), day(2024, 1, 2));
    }

    #[test]
    fn items_straddling_midnight_land_on_different_days() {
        let boundary = DayBoundary::FixedOffset(9 * 60);
        let before = boundary.day_of(Some("2024-01-02T14:59:00Z"));
        let after = boundary.day_of(Some("2024-01-02T15:01:00Z"));
        assert_eq!(before, day(2024, 1, 2));
        assert_eq!(after, day(2024, 1, 3));
    }

    #[test]
    fn short_zulu_form_is_accepted() {
        assert_eq!(DayBoundary::Utc.day_of(Some("2024-03-01T10:00Z")), day(2024, 3, 1));
    }

    #[test]
    fn date_only_values_map_to_that_day() {
        assert_eq!(DayBoundary::Local.day_of(Some("2023-12-31")), day(2023, 12, 31));
    }

    #[test]
    fn missing_or_invalid_timestamps_map_to_unknown() {
        assert_eq!(DayBoundary::Local.day_of(None), DayKey::Unknown);
        assert_eq!(DayBoundary::Local.day_of(Some("")), DayKey::Unknown);
        assert_eq!(DayBoundary::Local.day_of(Some("yesterday")), DayKey::Unknown);
        assert_eq!(DayBoundary::Utc.day_of(Some("2024-13-45T10:00")), DayKey::Unknown);
    }

    #[test]
    fn out_of_range_fixed_offset_falls_back_to_utc() {
        let raw = Some("2024-01-02T23:30:00Z");
        assert_eq!(DayBoundary::FixedOffset(100_000).day_of(raw), day(2024, 1, 2));
    }

    #[test]
    fn unknown_sorts_below_every_day() {
        let mut keys = vec![DayKey::Unknown, day(2024, 1, 1), day(2024, 1, 2)];
        keys.sort_by(|a, b| b.cmp(a));
        assert_eq!(keys, vec![day(2024, 1, 2), day(2024, 1, 1), DayKey::Unknown]);
    }

    #[test]
    fn display_and_parse_agree() {
        let key = day(2024, 1, 2);
        assert_eq!(key.to_string(), "2024-01-02");
        assert_eq!(DayKey::parse("2024-01-02"), Some(key));
        assert_eq!(DayKey::parse("unknown date"), Some(DayKey::Unknown));
        assert_eq!(DayKey::parse("02/01/2024"), None);
    }

    #[test]
    fn boundary_reads_from_toml() {
        #[derive(Deserialize)]
        struct Wrapper {
            day_boundary: DayBoundary,
        }

        let local: Wrapper = toml::from_str("day_boundary = \"local\"").expect("valid toml");
        assert_eq!(local.day_boundary, DayBoundary::Local);

        let fixed: Wrapper =
            toml::from_str("day_boundary = { fixed-offset = 540 }").expect("valid toml");
        assert_eq!(fixed.day_boundary, DayBoundary::FixedOffset(540));
    }
}
