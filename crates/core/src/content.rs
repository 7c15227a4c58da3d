//! Content data model.
//!
//! Entries (heuristics, UX laws) are read-only records loaded once at startup.
//! The JSON shape uses camelCase field names; the historically heterogeneous
//! `realWorldExample` field (a single card or an array of cards) is normalized
//! here, at the serde boundary, so every consumer sees one ordered sequence.

use serde::{Deserialize, Deserializer, Serialize};

/// One real-world analogy card shown in the carousel.
///
/// `image` is an asset reference (path or URL) resolved by the frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RealWorldCard {
    pub image: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub why_it_matters: Option<String>,
}

/// Static digital example, shown when no interactive module is registered
/// for an entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DigitalExample {
    pub title: String,
    pub description: String,
    pub why_it_matters: String,
}

/// One heuristic or UX law — the unit of navigation.
///
/// `id` is the URL slug and routing key: unique within its registry, never
/// reused or renumbered after publication.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentEntry {
    pub id: String,
    pub title: String,
    pub description: String,
    pub why_it_matters: String,
    pub digital_example: DigitalExample,
    #[serde(
        rename = "realWorldExample",
        deserialize_with = "one_or_many",
        default
    )]
    pub real_world_examples: Vec<RealWorldCard>,
    #[serde(default)]
    pub best_practices: Vec<String>,
    #[serde(default)]
    pub designer_notes: Vec<String>,
}

impl ContentEntry {
    /// Whether the entry has any real-world analogy content at all.
    pub fn has_real_world(&self) -> bool {
        !self.real_world_examples.is_empty()
    }
}

/// Accepts either a bare card or an array of cards and always produces a
/// sequence. Legacy single-card entries are wrapped, not special-cased
/// downstream.
fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<RealWorldCard>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(RealWorldCard),
        Many(Vec<RealWorldCard>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(card) => vec![card],
        OneOrMany::Many(cards) => cards,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry_json(real_world: &str) -> String {
        format!(
            r#"{{
                "id": "error-prevention",
                "title": "5. Error Prevention",
                "description": "Prevent problems before they occur.",
                "whyItMatters": "Recovering costs more than preventing.",
                "digitalExample": {{
                    "title": "Confirm before delete",
                    "description": "A dialog asks before destroying data.",
                    "whyItMatters": "Slips become recoverable."
                }},
                "realWorldExample": {real_world}
            }}"#
        )
    }

    #[test]
    fn single_card_is_wrapped_into_a_sequence() {
        let json = entry_json(
            r#"{"image": "assets/sink.jpg", "title": "Sink overflow drain", "description": "A second drain prevents flooding."}"#,
        );
        let entry: ContentEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(entry.real_world_examples.len(), 1);
        assert_eq!(entry.real_world_examples[0].title, "Sink overflow drain");
        assert!(entry.real_world_examples[0].why_it_matters.is_none());
    }

    #[test]
    fn card_array_is_kept_in_order() {
        let json = entry_json(
            r#"[
                {"image": "a.jpg", "title": "First", "description": "d", "whyItMatters": "w"},
                {"image": "b.jpg", "title": "Second", "description": "d"}
            ]"#,
        );
        let entry: ContentEntry = serde_json::from_str(&json).unwrap();
        let titles: Vec<&str> = entry
            .real_world_examples
            .iter()
            .map(|c| c.title.as_str())
            .collect();
        assert_eq!(titles, ["First", "Second"]);
        assert_eq!(
            entry.real_world_examples[0].why_it_matters.as_deref(),
            Some("w")
        );
    }

    #[test]
    fn optional_collections_default_to_empty() {
        let json = entry_json("[]");
        let entry: ContentEntry = serde_json::from_str(&json).unwrap();
        assert!(!entry.has_real_world());
        assert!(entry.best_practices.is_empty());
        assert!(entry.designer_notes.is_empty());
    }
}
