//! Link configuration

use serde::{Deserialize, Serialize};

/// Serial link configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkConfig {
    /// Serial device path (e.g. "/dev/rfcomm0" bound to the stand)
    pub device: String,

    /// Baud rate
    pub baud_rate: u32,

    /// Deadline for writing and flushing one command (milliseconds)
    pub timeout_ms: u64,

    /// Reconnect attempts before giving up on a command
    pub max_retries: u32,

    /// Delay before each reconnect, multiplied by the attempt number (milliseconds)
    pub retry_backoff_ms: u64,

    /// Record commands in memory instead of opening a port
    pub mock: bool,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            device: "/dev/rfcomm0".to_string(),
            baud_rate: 9600,
            timeout_ms: 2000,
            max_retries: 5,
            retry_backoff_ms: 100,
            mock: false,
        }
    }
}
