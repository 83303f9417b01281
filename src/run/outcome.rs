//! Outcome interpretation and rendering
//!
//! Translates the settled exchange into the plain text the output surface
//! shows. A reported compilation error and a transport failure render in the
//! same `Error: <message>` form; the user cannot tell them apart by text
//! alone. That ambiguity is part of the output contract, kept on purpose.

use crate::config::Verbosity;
use crate::run::protocol::RunResponse;

const SUCCESS_DETAILED: &str = "✅ Compilation successful!";
const SUCCESS_MINIMAL: &str = "✅ ok";

/// Interpreted result of one compilation attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Success { token_count: Option<usize> },
    Failure { message: String },
}

impl RunOutcome {
    /// Interpret a decoded response. An error field wins over any payload.
    pub fn from_response(response: RunResponse) -> Self {
        if let Some(message) = response.error {
            return Self::Failure { message };
        }

        let token_count = response
            .output
            .and_then(|output| output.tokens)
            .map(|tokens| tokens.len());

        Self::Success { token_count }
    }

    /// Wrap a transport-layer description (network failure, non-decodable
    /// body) as a failure outcome.
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure {
            message: message.into(),
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure { .. })
    }

    /// Render the output text for this outcome.
    pub fn render(&self, verbosity: Verbosity) -> String {
        match self {
            Self::Failure { message } => format!("Error: {}", message),
            Self::Success { token_count } => match verbosity {
                Verbosity::Minimal => SUCCESS_MINIMAL.to_string(),
                Verbosity::Detailed => {
                    let mut text = String::from(SUCCESS_DETAILED);
                    if let Some(count) = token_count {
                        text.push_str(&format!("\n\nTokens found: {}", count));
                        text.push_str("\n\nSemantic analysis: No errors found");
                    }
                    text
                }
            },
        }
    }
}
