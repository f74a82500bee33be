// src/loader.rs
//
// Dataset loading. The fetch itself runs through the browser's fetch API
// (one shot, no retry, no cancellation); parsing is a separate synchronous
// step so tests and native callers can feed documents directly.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::error::{Result, RouletteError};
use crate::types::Dataset;

/// Parses the source document: a JSON array of letter groups whose entries
/// use `def` for the definition field.
pub fn parse_dataset(text: &str) -> Result<Dataset> {
    serde_json::from_str(text)
        .map_err(|e| RouletteError::Load(format!("malformed dataset: {}", e)))
}

/// Basename of the dataset source, used to name the export artifact. A URL
/// with no basename (trailing slash) falls back to the URL itself.
pub fn source_file_name(url: &str) -> &str {
    match url.rsplit('/').next() {
        Some(name) if !name.is_empty() => name,
        _ => url,
    }
}

/// Fetches and parses the dataset document. A transport error, a non-2xx
/// status or a malformed body all surface as `Load`; the caller leaves the
/// engine not-ready and never retries.
pub async fn fetch_dataset(url: &str) -> Result<Dataset> {
    let window = web_sys::window().ok_or_else(|| RouletteError::from("no window object"))?;
    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|_| RouletteError::Load(format!("request for {} failed", url)))?;
    let response: web_sys::Response = response
        .dyn_into()
        .map_err(|_| RouletteError::from("fetch did not produce a Response"))?;
    if !response.ok() {
        return Err(RouletteError::Load(format!(
            "{} answered with status {}",
            url,
            response.status()
        )));
    }
    let body = JsFuture::from(
        response
            .text()
            .map_err(|_| RouletteError::from("response body is not readable"))?,
    )
    .await
    .map_err(|_| RouletteError::from("response body is not readable"))?;
    let body = body
        .as_string()
        .ok_or_else(|| RouletteError::from("response body is not text"))?;
    parse_dataset(&body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_wire_format() {
        let doc = r#"[
            { "letter": "C", "entries": [
                { "term": "CAB", "def": "a taxi" },
                { "term": "COW", "def": "a bovine", "hint": "moo" }
            ] },
            { "letter": "D", "entries": [] }
        ]"#;
        let dataset = parse_dataset(doc).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset[0].entries[0].definition, "a taxi");
        assert_eq!(dataset[0].entries[1].hint.as_deref(), Some("moo"));
        assert!(dataset[1].entries.is_empty());
    }

    #[test]
    fn malformed_documents_report_a_load_error() {
        assert!(matches!(
            parse_dataset("not json"),
            Err(RouletteError::Load(_))
        ));
        assert!(matches!(
            parse_dataset(r#"{"letter":"C"}"#),
            Err(RouletteError::Load(_))
        ));
    }

    #[test]
    fn file_name_is_the_url_basename() {
        assert_eq!(source_file_name("data/words.json"), "words.json");
        assert_eq!(
            source_file_name("https://example.org/vocab/es.json"),
            "es.json"
        );
        assert_eq!(source_file_name("words.json"), "words.json");
    }

    #[test]
    fn file_name_falls_back_to_the_url_without_a_basename() {
        assert_eq!(
            source_file_name("https://example.org/vocab/"),
            "https://example.org/vocab/"
        );
        assert_eq!(source_file_name(""), "");
    }
}
