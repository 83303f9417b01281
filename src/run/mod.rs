//! Run layer: the submission lifecycle
//!
//! `protocol` and `outcome` are the pure request/response halves of one
//! compilation attempt; `state` is the Idle/Running gate; `controller` binds
//! them to the trigger affordance and the output surface.

pub mod controller;
pub mod outcome;
pub mod protocol;
pub mod state;

pub use controller::RunController;
pub use outcome::RunOutcome;
pub use protocol::{RunRequest, RunResponse};
pub use state::{RunGate, RunState};
