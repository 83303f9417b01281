//! Text layer for the editor surface
//!
//! Pure buffer and projection state with no DOM knowledge.

pub mod buffer;
pub mod line_numbers;

pub use buffer::{Buffer, SelectionRange};
pub use line_numbers::LineNumberView;
