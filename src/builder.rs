// src/builder.rs
//
// The builder extension: inserts user-typed entries into the in-memory
// dataset and produces the exportable snapshot. Inserts bypass the quiz
// pools entirely; a new entry joins the rotation at the next pass reset.

use crate::engine::QuizEngine;
use crate::types::{Dataset, Entry, LetterGroup};

impl QuizEngine {
    /// Inserts a term/definition pair into the group matching the term's
    /// initial letter, keeping the group sorted by term. Terms are
    /// normalized to uppercase and definitions to lowercase before
    /// insertion.
    ///
    /// Silent no-op cases, mirroring the widget's behavior: an empty term,
    /// a term whose initial letter has no group (groups are never created
    /// on insert), and a term already present in its group. Returns whether
    /// an entry was actually added.
    pub fn insert_entry(&mut self, term: &str, definition: &str) -> bool {
        let term = term.to_uppercase();
        let definition = definition.to_lowercase();
        let initial = match term.chars().next() {
            Some(c) => c.to_string(),
            None => return false,
        };
        let slot = match self.groups.iter().position(|g| g.letter == initial) {
            Some(i) => i,
            None => return false,
        };
        if self.groups[slot]
            .members
            .iter()
            .any(|&id| self.store[id].term == term)
        {
            return false;
        }

        let id = self.store.len();
        self.store.push(Entry {
            term,
            definition,
            hint: None,
        });
        self.groups[slot].members.push(id);
        let store = &self.store;
        self.groups[slot]
            .members
            .sort_by(|&a, &b| store[a].term.cmp(&store[b].term));
        true
    }

    /// A serializable copy of the full dataset, reflecting every insertion
    /// and hint mutation to date. Pure read; the host turns it into a
    /// downloadable file.
    pub fn export_snapshot(&self) -> Dataset {
        self.groups
            .iter()
            .map(|g| LetterGroup {
                letter: g.letter.clone(),
                entries: g.members.iter().map(|&id| self.store[id].clone()).collect(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pick::IndexPicker;

    struct ZeroPicker;

    impl IndexPicker for ZeroPicker {
        fn pick(&mut self, _len: usize) -> usize {
            0
        }
    }

    fn entry(term: &str, definition: &str) -> Entry {
        Entry {
            term: term.to_string(),
            definition: definition.to_string(),
            hint: None,
        }
    }

    fn engine() -> QuizEngine {
        let mut engine = QuizEngine::with_picker(Box::new(ZeroPicker));
        engine
            .initialize(vec![
                LetterGroup {
                    letter: "C".to_string(),
                    entries: vec![entry("CAB", "a taxi"), entry("COW", "a bovine")],
                },
                LetterGroup {
                    letter: "D".to_string(),
                    entries: vec![entry("DOG", "a canine")],
                },
            ])
            .unwrap();
        engine
    }

    fn group_terms(engine: &QuizEngine, letter: &str) -> Vec<String> {
        engine
            .export_snapshot()
            .into_iter()
            .find(|g| g.letter == letter)
            .unwrap()
            .entries
            .into_iter()
            .map(|e| e.term)
            .collect()
    }

    #[test]
    fn insert_lands_sorted_between_siblings() {
        let mut engine = engine();
        assert!(engine.insert_entry("cat", "A Feline"));
        assert_eq!(group_terms(&engine, "C"), ["CAB", "CAT", "COW"]);

        let snapshot = engine.export_snapshot();
        let cat = &snapshot[0].entries[1];
        assert_eq!(cat.term, "CAT");
        assert_eq!(cat.definition, "a feline");
    }

    #[test]
    fn insert_is_idempotent() {
        let mut engine = engine();
        assert!(engine.insert_entry("cat", "a feline"));
        assert!(!engine.insert_entry("cat", "a feline"));
        assert!(!engine.insert_entry("CAT", "something else"));
        assert_eq!(group_terms(&engine, "C").len(), 3);
    }

    #[test]
    fn insert_without_matching_group_is_a_noop() {
        let mut engine = engine();
        assert!(!engine.insert_entry("zebra", "striped"));
        assert!(!engine.insert_entry("", "nothing"));
        assert_eq!(engine.total_entries(), 3);
    }

    #[test]
    fn insert_does_not_touch_the_pools() {
        let mut engine = engine();
        let remaining = engine.remaining_count();
        let reviewed = engine.reviewed_count();
        engine.insert_entry("cat", "a feline");
        assert_eq!(engine.remaining_count(), remaining);
        assert_eq!(engine.reviewed_count(), reviewed);
    }

    #[test]
    fn inserted_entry_joins_the_rotation_after_reset() {
        let mut engine = engine();
        engine.insert_entry("cat", "a feline");
        // Drive to the end of the pass so the pools re-seed.
        while engine.reviewed_count() > 0 || engine.guessing() {
            engine.advance();
        }
        assert_eq!(engine.remaining_count(), 4);
    }

    #[test]
    fn export_reflects_hint_mutations() {
        let mut engine = engine();
        let id = engine.find_by_term("DOG").unwrap();
        engine.set_hint(id, "barks");
        let snapshot = engine.export_snapshot();
        let dog = snapshot
            .iter()
            .flat_map(|g| g.entries.iter())
            .find(|e| e.term == "DOG")
            .unwrap();
        assert_eq!(dog.hint.as_deref(), Some("barks"));
    }
}
