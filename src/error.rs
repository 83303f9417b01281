//! Internal error types
//!
//! Programmer errors surfaced to JavaScript as rejected results. They are
//! distinct from the user-visible run-cycle failures, which flow through
//! `RunOutcome` and the output surface instead. (A malformed options object
//! is rejected directly by the boundary deserializer.)

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum PaneError {
    /// The RunRequest snapshot could not be encoded as JSON
    #[error("request encoding failed: {0}")]
    RequestEncoding(#[from] serde_json::Error),

    /// No `window` object in this realm
    #[error("no window available")]
    NoWindow,
}

impl From<PaneError> for JsValue {
    fn from(err: PaneError) -> JsValue {
        JsValue::from_str(&err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(PaneError::NoWindow.to_string(), "no window available");

        let bad_json = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = PaneError::RequestEncoding(bad_json);
        assert!(err.to_string().starts_with("request encoding failed:"));
    }
}
