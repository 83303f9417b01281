//! Pane configuration
//!
//! Decoded from the optional JavaScript options object at construction time.
//! The two historical front-end variants (rich success text + line count in
//! the request vs. bare "ok" without it) are unified behind the single
//! `verbosity` knob.

use serde::{Deserialize, Serialize};

pub const DEFAULT_ENDPOINT: &str = "/run_code";
pub const DEFAULT_READY_CAPTION: &str = "<span class=\"play-icon\"></span>Compile & Run";
pub const DEFAULT_BUSY_CAPTION: &str = "Running...";

/// Success-message verbosity; also selects the request-body shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    /// "✅ Compilation successful!" plus token/semantic lines; the request
    /// carries the buffer's line count.
    #[default]
    Detailed,
    /// "✅ ok"; the request omits the line count.
    Minimal,
}

/// Editor pane options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PaneConfig {
    /// Submission endpoint for the POST exchange
    pub endpoint: String,
    pub verbosity: Verbosity,
    /// Trigger affordance markup while Idle (static, may carry the icon span)
    pub ready_caption: String,
    /// Trigger affordance markup while Running
    pub busy_caption: String,
}

impl Default for PaneConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            verbosity: Verbosity::default(),
            ready_caption: DEFAULT_READY_CAPTION.to_string(),
            busy_caption: DEFAULT_BUSY_CAPTION.to_string(),
        }
    }
}

impl PaneConfig {
    /// Whether the RunRequest snapshot should carry the line count
    pub fn includes_line_count(&self) -> bool {
        self.verbosity == Verbosity::Detailed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PaneConfig::default();
        assert_eq!(config.endpoint, "/run_code");
        assert_eq!(config.verbosity, Verbosity::Detailed);
        assert!(config.includes_line_count());
        assert!(config.ready_caption.contains("Compile & Run"));
    }

    #[test]
    fn test_partial_options_fill_from_defaults() {
        let config: PaneConfig = serde_json::from_str(r#"{"verbosity":"minimal"}"#).unwrap();
        assert_eq!(config.verbosity, Verbosity::Minimal);
        assert!(!config.includes_line_count());
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_camel_case_keys() {
        let config: PaneConfig =
            serde_json::from_str(r#"{"endpoint":"/compile","busyCaption":"..."}"#).unwrap();
        assert_eq!(config.endpoint, "/compile");
        assert_eq!(config.busy_caption, "...");
    }
}
