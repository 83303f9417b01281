//! Compiler Playground Editor Pane WASM Module
//!
//! In-browser code editor pane: a textarea-backed buffer with synchronized
//! line numbers and editing affordances, plus a run controller that submits
//! the buffer to the remote compilation service and renders the outcome.

pub mod api;
pub mod config;
pub mod error;
pub mod run;
pub mod text;

// Re-export commonly used types
pub use api::EditorPane;
pub use config::{PaneConfig, Verbosity};
pub use error::PaneError;
pub use run::{RunOutcome, RunRequest, RunResponse};
pub use text::{Buffer, LineNumberView, SelectionRange};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize logger");

    log::info!("Playground editor pane WASM module initialized");
}
