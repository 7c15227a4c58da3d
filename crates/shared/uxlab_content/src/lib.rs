//! Embedded content datasets for the UXLab site.
//!
//! This crate is the "content side" of the project: the heuristics and UX-law
//! records live here as JSON and are exposed as validated [`Registry`]
//! values. The mechanism crates never mutate them — registries are built once
//! at startup and read thereafter.
//!
//! Dataset rules:
//! - `id` slugs are routing keys: unique, never reused or renumbered after
//!   publication.
//! - `realWorldExample` may be a single card (legacy shape) or an array; the
//!   loader normalizes both to an ordered sequence.

use uxlab::registry::Registry;
use uxlab::route::Collection;

pub const HEURISTICS_JSON: &str = include_str!("../data/heuristics.json");
pub const LAWS_JSON: &str = include_str!("../data/laws.json");

/// Default slug per collection — where `/<collection>` redirects.
pub fn default_slug(collection: Collection) -> &'static str {
    match collection {
        Collection::Heuristics => "visibility-of-system-status",
        Collection::Laws => "hicks-law",
    }
}

/// The ten usability heuristics, in canonical order.
///
/// The embedded dataset is validated by this crate's tests, so a failure here
/// is a build problem, not a runtime condition.
pub fn heuristics() -> Registry {
    Registry::from_json_with_default(HEURISTICS_JSON, default_slug(Collection::Heuristics))
        .expect("embedded heuristics dataset is valid")
}

/// The UX laws, in canonical order.
pub fn laws() -> Registry {
    Registry::from_json_with_default(LAWS_JSON, default_slug(Collection::Laws))
        .expect("embedded laws dataset is valid")
}

/// Registry for a collection.
pub fn registry(collection: Collection) -> Registry {
    match collection {
        Collection::Heuristics => heuristics(),
        Collection::Laws => laws(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uxlab::registry::Resolution;

    #[test]
    fn datasets_parse_and_validate() {
        assert_eq!(heuristics().len(), 10);
        assert_eq!(laws().len(), 6);
    }

    #[test]
    fn collection_roots_redirect_to_their_default_slug() {
        for &c in Collection::all() {
            let reg = registry(c);
            match reg.resolve(None) {
                Resolution::Redirect(slug) => assert_eq!(slug, default_slug(c)),
                Resolution::Entry(_) => panic!("missing id must redirect"),
            }
        }
    }

    #[test]
    fn heuristics_keep_their_canonical_slugs_and_order() {
        let reg = heuristics();
        let slugs: Vec<&str> = reg.entries().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(slugs[0], "visibility-of-system-status");
        assert_eq!(slugs[1], "match-between-system-and-real-world");
        assert_eq!(slugs[4], "error-prevention");
        assert_eq!(slugs[9], "help-and-documentation");
    }

    #[test]
    fn every_entry_has_display_content() {
        for &c in Collection::all() {
            for entry in registry(c).entries() {
                assert!(!entry.title.trim().is_empty(), "{}: empty title", entry.id);
                assert!(
                    !entry.why_it_matters.trim().is_empty(),
                    "{}: empty whyItMatters",
                    entry.id
                );
                assert!(
                    !entry.digital_example.why_it_matters.trim().is_empty(),
                    "{}: empty digital whyItMatters",
                    entry.id
                );
                for card in &entry.real_world_examples {
                    assert!(!card.image.trim().is_empty(), "{}: card without image", entry.id);
                    assert!(!card.title.trim().is_empty(), "{}: card without title", entry.id);
                }
            }
        }
    }

    #[test]
    fn legacy_single_card_entries_are_normalized() {
        let reg = heuristics();
        let entry = reg.get("match-between-system-and-real-world").unwrap();
        // Authored as a bare object in the JSON; read back as a sequence.
        assert_eq!(entry.real_world_examples.len(), 1);
        assert_eq!(entry.real_world_examples[0].title, "The shopping cart metaphor");

        let laws = laws();
        let peak_end = laws.get("peak-end-rule").unwrap();
        assert_eq!(peak_end.real_world_examples.len(), 1);
    }

    #[test]
    fn display_titles_drop_numeric_prefixes() {
        let reg = heuristics();
        let entry = reg.get("visibility-of-system-status").unwrap();
        assert_eq!(entry.title, "1. Visibility of System Status");
        assert_eq!(
            uxlab::route::display_title(&entry.title),
            "Visibility of System Status"
        );
    }
}
