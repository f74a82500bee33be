// src/error.rs
//
// Error types shared by the loader, the quiz engine and the builder
// extension. The widget boundary reports these as strings; nothing in the
// core retries or swallows them.

use std::fmt;

pub type Result<T> = std::result::Result<T, RouletteError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouletteError {
    /// The dataset could not be fetched or parsed. The engine stays
    /// not-ready; there is no automatic retry.
    Load(String),
    /// The dataset parsed but contains no entries at all.
    EmptyDataset,
    /// A directed lookup named a term that is in neither pool.
    EntryNotFound(String),
}

impl fmt::Display for RouletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouletteError::Load(msg) => write!(f, "Failed to load dataset: {}", msg),
            RouletteError::EmptyDataset => write!(f, "Dataset contains no entries"),
            RouletteError::EntryNotFound(term) => write!(f, "No entry for term: {}", term),
        }
    }
}

impl std::error::Error for RouletteError {}

impl From<String> for RouletteError {
    fn from(s: String) -> Self {
        RouletteError::Load(s)
    }
}

impl From<&str> for RouletteError {
    fn from(s: &str) -> Self {
        RouletteError::Load(s.to_string())
    }
}
