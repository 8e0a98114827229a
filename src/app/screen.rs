// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for gallery navigation, with route parsing.

use crate::domain::media::DayKey;
use std::fmt;

/// Screens the user can navigate between.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Screen {
    /// `/` - the paginated, date-bucketed timeline.
    #[default]
    Timeline,
    /// `/map` - geotagged items.
    Map,
    /// `/albums` - smart album overview.
    Albums,
    /// `/date/<YYYY-MM-DD>` - one day.
    Date(DayKey),
    /// `/album/<name>` - one album; the name is stored lower-cased.
    Album(String),
}

impl Screen {
    /// Parses a route. Anything unrecognized falls back to the timeline.
    #[must_use]
    pub fn parse(route: &str) -> Self {
        let path = route.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            ["map"] => Screen::Map,
            ["albums"] => Screen::Albums,
            ["date", key] => DayKey::parse(&key.replace("%20", " "))
                .map_or(Screen::Timeline, Screen::Date),
            ["album", name] => Screen::Album(name.to_lowercase()),
            _ => Screen::Timeline,
        }
    }

    /// The route this screen lives at.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Screen::Timeline => "/".to_string(),
            Screen::Map => "/map".to_string(),
            Screen::Albums => "/albums".to_string(),
            Screen::Date(key) => format!("/date/{key}"),
            Screen::Album(name) => format!("/album/{name}"),
        }
    }

    /// Whether this screen shows a server-backed detail list.
    #[must_use]
    pub fn is_detail(&self) -> bool {
        matches!(self, Screen::Date(_) | Screen::Album(_))
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_fixed_routes() {
        assert_eq!(Screen::parse("/"), Screen::Timeline);
        assert_eq!(Screen::parse(""), Screen::Timeline);
        assert_eq!(Screen::parse("/map"), Screen::Map);
        assert_eq!(Screen::parse("/albums/"), Screen::Albums);
    }

    #[test]
    fn parses_detail_routes() {
        assert_eq!(
            Screen::parse("/date/2024-01-02"),
            Screen::Date(DayKey::from_ymd(2024, 1, 2).expect("valid"))
        );
        assert_eq!(Screen::parse("/date/unknown%20date"), Screen::Date(DayKey::Unknown));
        assert_eq!(Screen::parse("/album/Camera"), Screen::Album("camera".to_string()));
    }

    #[test]
    fn unknown_routes_fall_back_to_timeline() {
        assert_eq!(Screen::parse("/settings"), Screen::Timeline);
        assert_eq!(Screen::parse("/date/yesterday"), Screen::Timeline);
        assert_eq!(Screen::parse("/album"), Screen::Timeline);
    }

    #[test]
    fn path_round_trips() {
        for screen in [
            Screen::Timeline,
            Screen::Map,
            Screen::Albums,
            Screen::Date(DayKey::from_ymd(2023, 12, 31).expect("valid")),
            Screen::Album("web".to_string()),
        ] {
            assert_eq!(Screen::parse(&screen.path()), screen);
        }
    }

    #[test]
    fn query_string_is_ignored() {
        assert_eq!(Screen::parse("/map?zoom=5"), Screen::Map);
    }
}
