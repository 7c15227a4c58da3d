//! Immutable, ordered content registries.
//!
//! A registry is built once at startup from a dataset and is read-only
//! afterwards. Construction validates the invariants the router relies on
//! (non-empty, unique slugs, known default), so a bad dataset fails at load
//! time instead of producing a silent dead link later.

use thiserror::Error;

use crate::content::ContentEntry;

/// Dataset problems surfaced at registry construction.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("registry has no entries")]
    Empty,
    #[error("duplicate entry id `{0}`")]
    DuplicateId(String),
    #[error("default entry id `{0}` is not in the registry")]
    UnknownDefault(String),
    #[error("invalid dataset: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Outcome of resolving a route-supplied id against a registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// The id matched; render the detail view for this entry.
    Entry(&'a ContentEntry),
    /// The id was absent or unknown; redirect to this slug.
    Redirect(&'a str),
}

/// An ordered, slug-keyed collection of content entries.
#[derive(Debug, Clone)]
pub struct Registry {
    entries: Vec<ContentEntry>,
    default_index: usize,
}

impl Registry {
    /// Builds a registry whose default entry is the first one.
    pub fn new(entries: Vec<ContentEntry>) -> Result<Self, RegistryError> {
        Self::build(entries, None)
    }

    /// Builds a registry with an explicitly configured default slug.
    pub fn with_default(
        entries: Vec<ContentEntry>,
        default_id: &str,
    ) -> Result<Self, RegistryError> {
        Self::build(entries, Some(default_id))
    }

    /// Parses a JSON array of entries; the first entry is the default.
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        Self::new(serde_json::from_str(json)?)
    }

    /// Parses a JSON array of entries with a configured default slug.
    pub fn from_json_with_default(json: &str, default_id: &str) -> Result<Self, RegistryError> {
        Self::with_default(serde_json::from_str(json)?, default_id)
    }

    fn build(entries: Vec<ContentEntry>, default_id: Option<&str>) -> Result<Self, RegistryError> {
        if entries.is_empty() {
            return Err(RegistryError::Empty);
        }
        for (i, entry) in entries.iter().enumerate() {
            if entries[..i].iter().any(|e| e.id == entry.id) {
                return Err(RegistryError::DuplicateId(entry.id.clone()));
            }
        }
        let default_index = match default_id {
            None => 0,
            Some(id) => entries
                .iter()
                .position(|e| e.id == id)
                .ok_or_else(|| RegistryError::UnknownDefault(id.to_string()))?,
        };
        Ok(Self {
            entries,
            default_index,
        })
    }

    pub fn entries(&self) -> &[ContentEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&ContentEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Zero-based position of an entry, used for the numbered list.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    pub fn default_entry(&self) -> &ContentEntry {
        &self.entries[self.default_index]
    }

    /// Resolves a route-supplied id. Absent and unknown ids both redirect to
    /// the default slug; this is never an error.
    pub fn resolve(&self, id: Option<&str>) -> Resolution<'_> {
        match id.and_then(|id| self.get(id)) {
            Some(entry) => Resolution::Entry(entry),
            None => Resolution::Redirect(&self.default_entry().id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::DigitalExample;

    fn entry(id: &str) -> ContentEntry {
        ContentEntry {
            id: id.to_string(),
            title: format!("Title for {id}"),
            description: "d".to_string(),
            why_it_matters: "w".to_string(),
            digital_example: DigitalExample {
                title: "t".to_string(),
                description: "d".to_string(),
                why_it_matters: "w".to_string(),
            },
            real_world_examples: Vec::new(),
            best_practices: Vec::new(),
            designer_notes: Vec::new(),
        }
    }

    #[test]
    fn known_id_resolves_to_its_entry() {
        let r = Registry::new(vec![entry("a"), entry("b")]).unwrap();
        match r.resolve(Some("b")) {
            Resolution::Entry(e) => assert_eq!(e.id, "b"),
            Resolution::Redirect(_) => panic!("expected entry"),
        }
    }

    #[test]
    fn absent_and_unknown_ids_redirect_to_default() {
        let r = Registry::new(vec![entry("a"), entry("b")]).unwrap();
        assert_eq!(r.resolve(None), Resolution::Redirect("a"));
        assert_eq!(r.resolve(Some("nope")), Resolution::Redirect("a"));
    }

    #[test]
    fn configured_default_wins_over_first_entry() {
        let r = Registry::with_default(vec![entry("a"), entry("b")], "b").unwrap();
        assert_eq!(r.default_entry().id, "b");
        assert_eq!(r.resolve(None), Resolution::Redirect("b"));
    }

    #[test]
    fn duplicate_ids_are_rejected_at_build_time() {
        let err = Registry::new(vec![entry("a"), entry("a")]).unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateId(id) if id == "a"));
    }

    #[test]
    fn empty_and_unknown_default_are_rejected() {
        assert!(matches!(
            Registry::new(Vec::new()).unwrap_err(),
            RegistryError::Empty
        ));
        assert!(matches!(
            Registry::with_default(vec![entry("a")], "zzz").unwrap_err(),
            RegistryError::UnknownDefault(_)
        ));
    }

    #[test]
    fn position_matches_dataset_order() {
        let r = Registry::new(vec![entry("a"), entry("b"), entry("c")]).unwrap();
        assert_eq!(r.position("c"), Some(2));
        assert_eq!(r.position("missing"), None);
    }
}
