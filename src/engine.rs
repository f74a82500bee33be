// src/engine.rs
//
// The quiz progression engine.
//
// One pass cycles the user through every entry exactly once: entries move
// from `remaining` to `reviewed` as they are drawn, and once the pass is
// exhausted the pools are silently re-seeded so the next click starts a
// fresh pass. The engine knows nothing about the DOM or the transport; the
// widget boundary in wasm_api.rs drives it and renders its state.
//
// Pools hold `EntryId`s into the entry store rather than owned copies, so a
// hint set on an entry is visible no matter which pool currently references
// it, and builder inserts can re-sort a group without invalidating either
// pool.

use crate::error::{Result, RouletteError};
use crate::pick::{EntropyPicker, IndexPicker};
use crate::types::{Dataset, Entry, EntryId};

pub(crate) struct GroupSlot {
    pub(crate) letter: String,
    /// Member ids, kept sorted by term within the group.
    pub(crate) members: Vec<EntryId>,
}

pub struct QuizEngine {
    pub(crate) store: Vec<Entry>,
    pub(crate) groups: Vec<GroupSlot>,
    remaining: Vec<EntryId>,
    reviewed: Vec<EntryId>,
    current: Option<EntryId>,
    guessing: bool,
    hint_visible: bool,
    ready: bool,
    picker: Box<dyn IndexPicker>,
}

impl QuizEngine {
    pub fn new() -> Self {
        Self::with_picker(Box::new(EntropyPicker))
    }

    pub fn with_picker(picker: Box<dyn IndexPicker>) -> Self {
        QuizEngine {
            store: Vec::new(),
            groups: Vec::new(),
            remaining: Vec::new(),
            reviewed: Vec::new(),
            current: None,
            guessing: false,
            hint_visible: false,
            ready: false,
            picker,
        }
    }

    /// Takes ownership of a freshly loaded dataset, seeds the pools and
    /// draws the first card. An empty dataset leaves the engine not ready.
    pub fn initialize(&mut self, dataset: Dataset) -> Result<()> {
        self.ready = false;
        // The old store is gone; a card from it must not survive a failed
        // re-load.
        self.current = None;
        self.guessing = false;
        self.hint_visible = false;
        self.store.clear();
        self.groups.clear();
        for group in dataset {
            let mut members = Vec::with_capacity(group.entries.len());
            for entry in group.entries {
                members.push(self.store.len());
                self.store.push(entry);
            }
            self.groups.push(GroupSlot {
                letter: group.letter,
                members,
            });
        }
        self.reviewed.clear();
        self.remaining = (0..self.store.len()).collect();
        if self.remaining.is_empty() {
            return Err(RouletteError::EmptyDataset);
        }
        self.select_random();
        self.ready = true;
        Ok(())
    }

    /// The new-card transition. Callers guarantee `remaining` is non-empty.
    fn select_random(&mut self) {
        let idx = self.picker.pick(self.remaining.len());
        let id = self.remaining.remove(idx);
        self.current = Some(id);
        self.reviewed.push(id);
        self.hint_visible = false;
        self.guessing = true;
    }

    /// Directed lookup for review tooling: points `current` at the named
    /// entry without moving it between pools or touching the guessing
    /// state. An unknown term leaves `current` unchanged.
    pub fn select_by_term(&mut self, term: &str) -> Result<()> {
        let found = self
            .remaining
            .iter()
            .chain(self.reviewed.iter())
            .copied()
            .find(|&id| self.store[id].term == term);
        match found {
            Some(id) => {
                self.current = Some(id);
                self.hint_visible = false;
                Ok(())
            }
            None => Err(RouletteError::EntryNotFound(term.to_string())),
        }
    }

    /// The single user-facing transition, wired to the container click.
    /// Ignored while loading; otherwise alternates between revealing the
    /// answer and drawing the next card.
    pub fn advance(&mut self) {
        if !self.ready {
            return;
        }
        if self.guessing {
            self.resolve();
        } else {
            if self.remaining.is_empty() {
                self.reset();
            }
            self.select_random();
        }
    }

    /// Reveals the answer. The hint display belongs to the guessing step,
    /// so it drops here. Resolving the last card of a pass re-seeds the
    /// pools immediately, so the following advance draws from a full pool.
    fn resolve(&mut self) {
        self.guessing = false;
        self.hint_visible = false;
        if self.remaining.is_empty() {
            self.reset();
        }
    }

    /// Starts a fresh pass: every entry back into `remaining` in group
    /// order, `reviewed` emptied. Entries themselves persist, so hints set
    /// during earlier passes stay set.
    fn reset(&mut self) {
        self.remaining = self
            .groups
            .iter()
            .flat_map(|g| g.members.iter().copied())
            .collect();
        self.reviewed.clear();
    }

    /// Marks the current card's hint as shown. No-op when the current card
    /// has no hint; revealing twice is the same as revealing once.
    pub fn reveal_hint(&mut self) {
        if let Some(id) = self.current {
            if self.store[id].has_hint() {
                self.hint_visible = true;
            }
        }
    }

    /// Sets the hint on an entry. Visible from every pool immediately,
    /// including when the entry is the current card.
    pub fn set_hint(&mut self, id: EntryId, hint: impl Into<String>) {
        if let Some(entry) = self.store.get_mut(id) {
            entry.hint = Some(hint.into());
        }
    }

    pub fn find_by_term(&self, term: &str) -> Option<EntryId> {
        self.store.iter().position(|e| e.term == term)
    }

    pub fn entry(&self, id: EntryId) -> Option<&Entry> {
        self.store.get(id)
    }

    pub fn current_entry(&self) -> Option<&Entry> {
        self.current.map(|id| &self.store[id])
    }

    pub fn ready(&self) -> bool {
        self.ready
    }

    pub fn guessing(&self) -> bool {
        self.guessing
    }

    pub fn hint_visible(&self) -> bool {
        self.hint_visible
    }

    pub fn remaining_count(&self) -> usize {
        self.remaining.len()
    }

    pub fn reviewed_count(&self) -> usize {
        self.reviewed.len()
    }

    pub fn total_entries(&self) -> usize {
        self.store.len()
    }

    #[cfg(test)]
    pub(crate) fn pools(&self) -> (&[EntryId], &[EntryId]) {
        (&self.remaining, &self.reviewed)
    }
}

impl Default for QuizEngine {
    fn default() -> Self {
        Self::new()
    }
}
