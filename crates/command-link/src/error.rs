//! Command Link Error Types

use thiserror::Error;

/// Errors that can occur while talking to the stand
#[derive(Debug, Error)]
pub enum LinkError {
    /// Serial port could not be opened or configured
    #[error("Serial port error: {0}")]
    Serial(String),

    /// Read or write on an open port failed
    #[error("I/O error: {0}")]
    Io(String),

    /// Write did not complete in time (milliseconds)
    #[error("Write timed out after {0} ms")]
    Timeout(u64),

    /// Stand still unreachable after reconnecting
    #[error("Stand unreachable after {0} reconnect attempts")]
    RetriesExhausted(u32),
}

impl From<std::io::Error> for LinkError {
    fn from(err: std::io::Error) -> Self {
        LinkError::Io(err.to_string())
    }
}

impl From<tokio_serial::Error> for LinkError {
    fn from(err: tokio_serial::Error) -> Self {
        LinkError::Serial(err.to_string())
    }
}
