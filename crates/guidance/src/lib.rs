//! Face Guidance
//!
//! Turns a per-frame stream of zones into stand movement commands:
//! - One directional command when a face drifts to the outer ring
//! - A stop command once it is back in the center
//! - Independent state for every tracked face

mod command;
mod controller;
mod tracker;

pub use command::Command;
pub use controller::{GuidanceController, GuidanceState};
pub use tracker::{FaceId, FaceTracker, TrackedFace};

use thiserror::Error;

/// Guidance error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuidanceError {
    /// Text that is not one of the stand commands
    #[error("Unknown command: {0}")]
    UnknownCommand(String),
}
