//! Stand movement commands

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::GuidanceError;

/// Command sent to the stand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Command {
    Up,
    Down,
    Left,
    Right,
    Stop,
}

impl Command {
    /// Wire string for this command
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Up => "up",
            Command::Down => "down",
            Command::Left => "left",
            Command::Right => "right",
            Command::Stop => "stop",
        }
    }

    /// Check if this command starts a movement
    pub fn is_directional(&self) -> bool {
        !matches!(self, Command::Stop)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Command {
    type Err = GuidanceError;

    /// Case-insensitive, surrounding whitespace ignored
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" => Ok(Command::Up),
            "down" => Ok(Command::Down),
            "left" => Ok(Command::Left),
            "right" => Ok(Command::Right),
            "stop" => Ok(Command::Stop),
            _ => Err(GuidanceError::UnknownCommand(s.to_string())),
        }
    }
}
