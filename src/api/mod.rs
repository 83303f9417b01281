//! JavaScript-facing API
//!
//! - `helpers`: serialization and error-description utilities for the
//!   wasm-bindgen boundary
//! - `pane`: the `EditorPane` component JavaScript constructs and wires up

pub mod helpers;
pub mod pane;

pub use pane::EditorPane;
