// src/types.rs
//
// Wire and domain types for the vocabulary dataset.
//
// The JSON document uses `def` as the field name for definitions; internally
// the field is `definition`, so the mapping happens once here via serde and
// nowhere else. Entries inside the engine are addressed by `EntryId`, an
// index into the engine's entry store, so that hint mutations stay visible
// from every pool and group re-sorts never invalidate pool references.

use serde::{Deserialize, Serialize};

/// Index of an entry in the engine's entry store.
pub type EntryId = usize;

/// A single term/definition/hint flashcard record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub term: String,
    #[serde(rename = "def")]
    pub definition: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl Entry {
    pub fn has_hint(&self) -> bool {
        self.hint.as_deref().map_or(false, |h| !h.is_empty())
    }
}

/// Entries bucketed by initial letter, kept sorted by term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterGroup {
    pub letter: String,
    pub entries: Vec<Entry>,
}

/// The dataset as loaded from the source document: letter groups in
/// document order.
pub type Dataset = Vec<LetterGroup>;

/// Widget mode, fixed at construction. Play renders read-only text, Edit
/// renders input fields; the engine itself is mode-agnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Play,
    Edit,
}

impl Mode {
    /// Parses the mode name the host passes to the constructor. Anything
    /// that is not "edit" falls back to Play.
    pub fn from_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case("edit") {
            Mode::Edit
        } else {
            Mode::Play
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn definition_maps_to_def_on_the_wire() {
        let entry = Entry {
            term: "CAT".to_string(),
            definition: "a feline".to_string(),
            hint: None,
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"term":"CAT","def":"a feline"}"#);

        let parsed: Entry = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.definition, "a feline");
        assert_eq!(parsed.hint, None);
    }

    #[test]
    fn hint_survives_the_round_trip_when_present() {
        let json = r#"{"term":"CAT","def":"a feline","hint":"meows"}"#;
        let parsed: Entry = serde_json::from_str(json).unwrap();
        assert!(parsed.has_hint());
        assert_eq!(serde_json::to_string(&parsed).unwrap(), json);
    }

    #[test]
    fn empty_hint_counts_as_absent() {
        let entry = Entry {
            term: "CAT".to_string(),
            definition: "a feline".to_string(),
            hint: Some(String::new()),
        };
        assert!(!entry.has_hint());
    }

    #[test]
    fn mode_name_parsing_defaults_to_play() {
        assert_eq!(Mode::from_name("edit"), Mode::Edit);
        assert_eq!(Mode::from_name("EDIT"), Mode::Edit);
        assert_eq!(Mode::from_name("play"), Mode::Play);
        assert_eq!(Mode::from_name("anything"), Mode::Play);
    }
}
