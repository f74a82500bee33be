// src/view.rs
//
// The presentation adapter contract: a serializable snapshot of everything
// the host needs to render the widget, plus the class names it toggles on
// the container. The host decides how to show it — section text in play
// mode, input values in edit mode — the adapter only says what.

use serde::Serialize;

use crate::engine::QuizEngine;
use crate::types::Mode;

/// Class names the host applies to the widget container and its sections.
pub mod class_names {
    pub const ROULETTE: &str = "wr-roulette";
    pub const BUILDER: &str = "wr-builder";
    pub const TERM: &str = "wr-term";
    pub const DEFINITION: &str = "wr-def";
    pub const HINT: &str = "wr-hint";
    pub const HAS_HINT: &str = "wr-has-hint";
    pub const HINT_BUTTON: &str = "wr-hint-btn";
    pub const HINT_SHOWN: &str = "wr-hint-shown";
    pub const GUESSING: &str = "wr-guessing";
    pub const ADD_BUTTON: &str = "wr-add-btn";
    pub const EXPORT_BUTTON: &str = "wr-export-btn";
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewState {
    pub ready: bool,
    pub term: String,
    pub definition: String,
    pub hint: String,
    /// True while the answer is hidden pending the reveal click; the host
    /// mirrors it as the `wr-guessing` container class.
    pub guessing: bool,
    #[serde(rename = "hasHint")]
    pub has_hint: bool,
    #[serde(rename = "hintShown")]
    pub hint_shown: bool,
    /// Edit mode renders the sections as input fields.
    pub editable: bool,
    pub remaining: usize,
    pub reviewed: usize,
}

impl ViewState {
    /// Snapshot of the engine for rendering. Before the first card (or
    /// after a failed load) the text fields are empty and `ready` is false.
    pub fn capture(engine: &QuizEngine, mode: Mode) -> Self {
        let entry = engine.current_entry();
        let hint = entry
            .and_then(|e| e.hint.clone())
            .unwrap_or_default();
        ViewState {
            ready: engine.ready(),
            term: entry.map(|e| e.term.clone()).unwrap_or_default(),
            definition: entry.map(|e| e.definition.clone()).unwrap_or_default(),
            guessing: engine.guessing(),
            has_hint: !hint.is_empty(),
            hint,
            hint_shown: engine.hint_visible(),
            editable: mode == Mode::Edit,
            remaining: engine.remaining_count(),
            reviewed: engine.reviewed_count(),
        }
    }
}
