//! Line-number projection
//!
//! `LineNumberView` is a derived, read-only projection of the buffer: one
//! label per newline-delimited segment, 1-indexed. It has no independent
//! lifecycle — the pane recomputes it on every buffer mutation and replaces
//! the gutter's markup wholesale. Deriving twice from the same buffer yields
//! an identical view.

use crate::text::buffer::Buffer;

/// Derived per-line label sequence for the gutter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineNumberView {
    labels: Vec<String>,
}

impl LineNumberView {
    /// Derive the projection from the current buffer contents
    pub fn derive(buffer: &Buffer) -> Self {
        let count = buffer.line_count();
        let labels = (1..=count).map(|n| n.to_string()).collect();
        Self { labels }
    }

    /// The labels, in order
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Number of labels (equals the buffer's line count)
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Render the gutter markup: one `<p>` element per label, the shape the
    /// page stylesheet aligns against the textarea's line boxes.
    pub fn to_markup(&self) -> String {
        let mut markup = String::with_capacity(self.labels.len() * 8);
        for label in &self.labels {
            markup.push_str("<p>");
            markup.push_str(label);
            markup.push_str("</p>");
        }
        markup
    }
}
