pub mod builder;
pub mod engine;
pub mod error;
pub mod loader;
pub mod pick;
pub mod types;
pub mod view;
pub mod wasm_api;

pub use engine::QuizEngine;
pub use error::{Result, RouletteError};
pub use types::{Dataset, Entry, EntryId, LetterGroup, Mode};
pub use view::ViewState;
