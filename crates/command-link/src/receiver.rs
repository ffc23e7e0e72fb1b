//! Stand-side message decoding

use guidance::Command;
use tokio::io::{AsyncRead, AsyncReadExt};
use tracing::{debug, warn};

use crate::LinkError;

/// Maximum bytes read per message
const MAX_MESSAGE_LEN: usize = 1024;

/// Message received by the stand
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StandMessage {
    /// Start moving in a direction, or stop
    Move(Command),
    /// Return to the parking position (`zero`, `park` or `reset`)
    Park,
    /// Switch the status LED on or off
    Led(bool),
    /// Peer is closing the session
    Disconnect,
    /// Anything else; the stand logs and ignores it
    Unknown(String),
}

impl StandMessage {
    /// Decode a message, ignoring case and surrounding whitespace
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        match text.to_ascii_lowercase().as_str() {
            "disconnect" => StandMessage::Disconnect,
            "zero" | "park" | "reset" => StandMessage::Park,
            "led-on" => StandMessage::Led(true),
            "led-off" => StandMessage::Led(false),
            other => match other.parse::<Command>() {
                Ok(command) => StandMessage::Move(command),
                Err(_) => StandMessage::Unknown(text.to_string()),
            },
        }
    }
}

/// Reads messages from the stand's end of the link
pub struct StandReceiver<R> {
    reader: R,
    buf: Box<[u8; MAX_MESSAGE_LEN]>,
}

impl<R: AsyncRead + Unpin> StandReceiver<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Box::new([0; MAX_MESSAGE_LEN]),
        }
    }

    /// Read the next message. Returns `None` once the peer has closed the link.
    pub async fn next_message(&mut self) -> Result<Option<StandMessage>, LinkError> {
        let n = self.reader.read(&mut self.buf[..]).await?;
        if n == 0 {
            debug!("Link closed by peer");
            return Ok(None);
        }

        let text = String::from_utf8_lossy(&self.buf[..n]);
        debug!("Received [{}]", text);
        let message = StandMessage::parse(&text);
        if let StandMessage::Unknown(raw) = &message {
            warn!("Unknown command: '{}'", raw);
        }
        Ok(Some(message))
    }
}
