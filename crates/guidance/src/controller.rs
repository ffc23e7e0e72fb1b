//! Approach state machine

use tracing::debug;
use zone_geometry::{Ring, Side, Zone};

use crate::Command;

/// Guidance state for one tracked face
///
/// `approaching` is set while a directional command is in effect, i.e.
/// after one was sent and before the matching `stop`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GuidanceState {
    approaching: bool,
}

impl GuidanceState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_approaching(&self) -> bool {
        self.approaching
    }
}

/// Decides which command, if any, a zone update produces
#[derive(Debug, Clone, Copy, Default)]
pub struct GuidanceController;

impl GuidanceController {
    pub fn new() -> Self {
        Self
    }

    /// Feed one frame's zone through the state machine.
    ///
    /// Idle faces only react to the outer ring, with a single directional
    /// command. Approaching faces only react to `Center`, with `stop`.
    pub fn on_zone(&self, zone: Zone, state: &mut GuidanceState) -> Option<Command> {
        if state.approaching {
            if zone == Zone::Center {
                debug!("Face reached center, stopping");
                state.approaching = false;
                return Some(Command::Stop);
            }
            return None;
        }

        match (zone.ring(), zone.side()) {
            (Ring::Outer, Some(side)) => {
                let command = approach_command(side);
                debug!("Face in {}, starting approach with {}", zone, command);
                state.approaching = true;
                Some(command)
            }
            _ => None,
        }
    }
}

/// Direction the stand moves to bring a face on `side` toward the center.
/// Left and right are swapped because the camera view is mirrored.
fn approach_command(side: Side) -> Command {
    match side {
        Side::Up => Command::Up,
        Side::Down => Command::Down,
        Side::Left => Command::Right,
        Side::Right => Command::Left,
    }
}
