//! Wire types for the remote compilation exchange
//!
//! The request is a snapshot of the buffer at trigger time; it is not
//! retained once the exchange settles. The response is whatever the service
//! sends back, decoded leniently: fields beyond `error` and `output.tokens`
//! (the service also ships a parse tree) are ignored.

use serde::{Deserialize, Serialize};

use crate::error::PaneError;

/// Immutable snapshot submitted to the compilation service.
///
/// `line_count` rides along in the detailed variant only; when absent it is
/// omitted from the body entirely rather than sent as null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunRequest {
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_count: Option<usize>,
}

impl RunRequest {
    pub fn new(code: impl Into<String>, line_count: Option<usize>) -> Self {
        Self {
            code: code.into(),
            line_count,
        }
    }

    /// Encode as the JSON body of the POST exchange
    pub fn to_json(&self) -> Result<String, PaneError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Decoded response body of one exchange
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RunResponse {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub output: Option<RunOutput>,
}

/// Success payload. Token presence is treated as evidence, not verified.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RunOutput {
    #[serde(default)]
    pub tokens: Option<Vec<Token>>,
}

/// One lexer token as the service reports it. Opaque beyond its count; the
/// value can be any JSON scalar or structure.
#[derive(Debug, Clone, Deserialize)]
pub struct Token {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub value: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_with_line_count() {
        let request = RunRequest::new("let x = 1", Some(1));
        let json = request.to_json().unwrap();
        assert_eq!(json, r#"{"code":"let x = 1","lineCount":1}"#);
    }

    #[test]
    fn test_request_body_omits_absent_line_count() {
        let request = RunRequest::new("let x = 1", None);
        let json = request.to_json().unwrap();
        assert_eq!(json, r#"{"code":"let x = 1"}"#);
        assert!(!json.contains("lineCount"));
    }

    #[test]
    fn test_decode_error_response() {
        let response: RunResponse =
            serde_json::from_str(r#"{"error":"unexpected end of input"}"#).unwrap();
        assert_eq!(response.error.as_deref(), Some("unexpected end of input"));
        assert!(response.output.is_none());
    }

    #[test]
    fn test_decode_success_with_tokens() {
        let body = r#"{"output":{"tokens":[
            {"type":"LET","value":"let"},
            {"type":"IDENT","value":"x"},
            {"type":"EQUALS","value":"="},
            {"type":"NUMBER","value":1}
        ]}}"#;
        let response: RunResponse = serde_json::from_str(body).unwrap();
        let tokens = response.output.unwrap().tokens.unwrap();
        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[0].kind, "LET");
        assert_eq!(tokens[3].value, serde_json::json!(1));
    }

    #[test]
    fn test_decode_ignores_unknown_fields() {
        // The service also sends its parse tree; only error/tokens matter here
        let body = r#"{"output":{"tokens":[],"parsed":["assign","x",1]},"elapsed":0.2}"#;
        let response: RunResponse = serde_json::from_str(body).unwrap();
        assert!(response.error.is_none());
        assert_eq!(response.output.unwrap().tokens.unwrap().len(), 0);
    }

    #[test]
    fn test_decode_success_without_tokens() {
        let response: RunResponse = serde_json::from_str(r#"{"output":{}}"#).unwrap();
        assert!(response.error.is_none());
        assert!(response.output.unwrap().tokens.is_none());
    }
}
