//! Route parsing for the master-detail views.
//!
//! The visible routing surface is `/<collection>` and `/<collection>/<id>`.
//! Parsing lives here so the frontend's history glue stays thin and the
//! interesting cases (unknown segment, trailing slash, missing id) are
//! testable on the host.

use std::fmt;

/// Which content registry a route addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Heuristics,
    Laws,
}

impl Collection {
    pub fn path_segment(self) -> &'static str {
        match self {
            Collection::Heuristics => "heuristics",
            Collection::Laws => "laws",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Collection::Heuristics => "Usability Heuristics",
            Collection::Laws => "UX Laws",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Collection::Heuristics => "🔍",
            Collection::Laws => "⚖️",
        }
    }

    pub fn from_segment(segment: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|c| c.path_segment() == segment)
    }

    pub fn all() -> &'static [Collection] {
        &[Collection::Heuristics, Collection::Laws]
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A parsed route: the collection plus an optional entry slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRoute {
    pub collection: Collection,
    pub entry_id: Option<String>,
}

/// Parses a location pathname. Returns `None` for paths outside the two
/// collection routes (the caller redirects to the default collection).
pub fn parse_path(path: &str) -> Option<ParsedRoute> {
    let mut segments = path.split('/').filter(|s| !s.is_empty());
    let collection = Collection::from_segment(segments.next()?)?;
    let entry_id = segments.next().map(str::to_string);
    // Anything deeper than /<collection>/<id> is not a route we own.
    if segments.next().is_some() {
        return None;
    }
    Some(ParsedRoute {
        collection,
        entry_id,
    })
}

/// Builds the canonical href for an entry.
pub fn href(collection: Collection, entry_id: &str) -> String {
    format!("/{}/{}", collection.path_segment(), entry_id)
}

/// Strips a leading numeric prefix (`"1. Foo"`, `"02 - Foo"`, `"3: Foo"`)
/// from a title for display. Data keeps the prefix; only presentation drops
/// it.
pub fn display_title(raw: &str) -> &str {
    let trimmed = raw.trim_start();
    let digits = trimmed.chars().take_while(char::is_ascii_digit).count();
    if digits == 0 {
        return trimmed;
    }
    let rest = &trimmed[digits..];
    let rest = rest.trim_start();
    let rest = rest
        .strip_prefix(|c: char| matches!(c, '.' | ':' | '-' | '–'))
        .unwrap_or(rest)
        .trim_start();
    if rest.is_empty() {
        trimmed
    } else {
        rest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_routes_parse_with_and_without_id() {
        assert_eq!(
            parse_path("/heuristics/visibility-of-system-status"),
            Some(ParsedRoute {
                collection: Collection::Heuristics,
                entry_id: Some("visibility-of-system-status".to_string()),
            })
        );
        assert_eq!(
            parse_path("/laws"),
            Some(ParsedRoute {
                collection: Collection::Laws,
                entry_id: None,
            })
        );
        // Trailing slash is the no-id case, not a different route.
        assert_eq!(
            parse_path("/heuristics/"),
            Some(ParsedRoute {
                collection: Collection::Heuristics,
                entry_id: None,
            })
        );
    }

    #[test]
    fn foreign_paths_are_rejected() {
        assert_eq!(parse_path("/"), None);
        assert_eq!(parse_path(""), None);
        assert_eq!(parse_path("/quiz/intro"), None);
        assert_eq!(parse_path("/heuristics/a/b"), None);
    }

    #[test]
    fn segments_round_trip_through_href() {
        for &c in Collection::all() {
            let parsed = parse_path(&href(c, "some-slug")).unwrap();
            assert_eq!(parsed.collection, c);
            assert_eq!(parsed.entry_id.as_deref(), Some("some-slug"));
        }
    }

    #[test]
    fn numeric_prefixes_are_stripped_for_display() {
        assert_eq!(display_title("1. Visibility of System Status"), "Visibility of System Status");
        assert_eq!(display_title("02 - Match Between System and Real World"), "Match Between System and Real World");
        assert_eq!(display_title("3: Consistency"), "Consistency");
        assert_eq!(display_title("10. Help and Documentation"), "Help and Documentation");
        assert_eq!(display_title("Hick's Law"), "Hick's Law");
        // A title that is only a number keeps it.
        assert_eq!(display_title("42"), "42");
    }
}
