// src/wasm_api.rs
//
// The widget boundary exposed to the JS host. The host owns the DOM: it
// builds the sections, wires the container click to next_step(), the hint
// button to show_hint(), and the builder buttons to add_entry() /
// request_export(), then renders each returned state snapshot.

use wasm_bindgen::prelude::*;

use crate::engine::QuizEngine;
use crate::loader;
use crate::types::Mode;
use crate::view::ViewState;

#[wasm_bindgen]
pub struct WordRoulette {
    engine: QuizEngine,
    mode: Mode,
    source_name: String,
}

#[wasm_bindgen]
impl WordRoulette {
    /// Mode is "play" (default) or "edit"; it only affects how the host
    /// renders the state, never the engine itself.
    #[wasm_bindgen(constructor)]
    pub fn new(mode: Option<String>) -> Self {
        WordRoulette {
            engine: QuizEngine::new(),
            mode: mode.as_deref().map(Mode::from_name).unwrap_or(Mode::Play),
            source_name: String::new(),
        }
    }

    /// Fetches the dataset and draws the first card. On failure the widget
    /// stays not-ready for good: clicks keep being ignored and only a fresh
    /// load call (user-driven) can recover.
    #[wasm_bindgen]
    pub async fn load(&mut self, url: String) -> Result<JsValue, JsValue> {
        let obj = js_sys::Object::new();
        let loaded = loader::fetch_dataset(&url)
            .await
            .and_then(|dataset| self.engine.initialize(dataset));
        match loaded {
            Ok(()) => {
                self.source_name = loader::source_file_name(&url).to_string();
                js_sys::Reflect::set(&obj, &"status".into(), &"OK".into()).unwrap();
                js_sys::Reflect::set(&obj, &"state".into(), &self.state()).unwrap();
            }
            Err(e) => {
                let message = e.to_string();
                web_sys::console::error_1(&message.clone().into());
                js_sys::Reflect::set(&obj, &"status".into(), &"ERROR".into()).unwrap();
                js_sys::Reflect::set(&obj, &"message".into(), &message.into()).unwrap();
            }
        }
        Ok(obj.into())
    }

    /// The container click: reveal the answer, or draw the next card.
    #[wasm_bindgen]
    pub fn next_step(&mut self) -> JsValue {
        self.engine.advance();
        self.state()
    }

    /// The hint button click.
    #[wasm_bindgen]
    pub fn show_hint(&mut self) -> JsValue {
        self.engine.reveal_hint();
        self.state()
    }

    /// Directed lookup for review tooling; does not advance the rotation.
    #[wasm_bindgen]
    pub fn pick_term(&mut self, term: &str) -> Result<JsValue, JsValue> {
        let obj = js_sys::Object::new();
        match self.engine.select_by_term(term) {
            Ok(()) => {
                js_sys::Reflect::set(&obj, &"status".into(), &"OK".into()).unwrap();
                js_sys::Reflect::set(&obj, &"state".into(), &self.state()).unwrap();
            }
            Err(e) => {
                js_sys::Reflect::set(&obj, &"status".into(), &"ERROR".into()).unwrap();
                js_sys::Reflect::set(&obj, &"message".into(), &e.to_string().into()).unwrap();
            }
        }
        Ok(obj.into())
    }

    /// Attaches a hint to the named entry. Returns false when no entry
    /// carries that term.
    #[wasm_bindgen]
    pub fn set_hint(&mut self, term: &str, hint: &str) -> bool {
        match self.engine.find_by_term(term) {
            Some(id) => {
                self.engine.set_hint(id, hint);
                true
            }
            None => false,
        }
    }

    /// Builder add button. Returns whether an entry was inserted; duplicate
    /// terms and unknown initial letters are silent no-ops.
    #[wasm_bindgen]
    pub fn add_entry(&mut self, term: &str, definition: &str) -> bool {
        self.engine.insert_entry(term, definition)
    }

    /// The serialized dataset snapshot, for the host's download flow.
    #[wasm_bindgen]
    pub fn export_data(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.engine.export_snapshot())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Name for the export artifact: the basename of the dataset source.
    #[wasm_bindgen]
    pub fn export_file_name(&self) -> String {
        self.source_name.clone()
    }

    /// Builder export button. Announces the export on window so the host
    /// can run its platform-specific download flow against export_data().
    #[wasm_bindgen]
    pub fn request_export(&self) -> Result<(), JsValue> {
        let window =
            web_sys::window().ok_or_else(|| JsValue::from_str("no window object"))?;
        let event = web_sys::CustomEvent::new("wordroulette-export")?;
        window.dispatch_event(&event)?;
        Ok(())
    }

    #[wasm_bindgen]
    pub fn ready(&self) -> bool {
        self.engine.ready()
    }

    /// The full render snapshot for the host.
    #[wasm_bindgen]
    pub fn state(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&ViewState::capture(&self.engine, self.mode))
            .unwrap_or(JsValue::NULL)
    }
}
