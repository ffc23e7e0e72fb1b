//! Stand-side receiver loop

use std::time::Duration;

use command_link::{LinkConfig, StandMessage, StandReceiver};
use tokio::io::AsyncRead;
use tokio_serial::{SerialPortBuilderExt, SerialStream};
use tracing::{info, warn};

/// What the stand received during one session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandSummary {
    /// Directional commands
    pub moves: usize,
    /// Stop commands
    pub stops: usize,
    /// Park and LED commands
    pub other: usize,
    /// Unrecognised messages
    pub unknown: usize,
    /// Session ended with an explicit `disconnect`
    pub disconnected: bool,
}

/// Open the stand's end of the serial link
pub fn open_stand_port(config: &LinkConfig) -> anyhow::Result<SerialStream> {
    info!("Waiting for commands on {}", config.device);
    Ok(tokio_serial::new(&config.device, config.baud_rate).open_native_async()?)
}

/// Log every message until the peer disconnects or closes the link
pub async fn run_stand<R: AsyncRead + Unpin>(reader: R) -> anyhow::Result<StandSummary> {
    let mut receiver = StandReceiver::new(reader);
    let mut summary = StandSummary::default();

    while let Some(message) = receiver.next_message().await? {
        match message {
            StandMessage::Move(command) if command.is_directional() => {
                info!("Move: {}", command);
                summary.moves += 1;
            }
            StandMessage::Move(_) => {
                info!("Stop");
                summary.stops += 1;
            }
            StandMessage::Park => {
                info!("Parking");
                summary.other += 1;
            }
            StandMessage::Led(on) => {
                info!("LED {}", if on { "on" } else { "off" });
                summary.other += 1;
            }
            StandMessage::Disconnect => {
                info!("Manual disconnect");
                summary.disconnected = true;
                break;
            }
            StandMessage::Unknown(_) => summary.unknown += 1,
        }
    }

    info!("Stand session ended");
    Ok(summary)
}

/// Serve sessions back to back, reopening the link after each one ends.
///
/// A failed session is logged and the link reopened after `reopen_delay`.
/// Returns only when `open` fails.
pub async fn serve_stand<R, F>(mut open: F, reopen_delay: Duration) -> anyhow::Result<()>
where
    R: AsyncRead + Unpin,
    F: FnMut() -> anyhow::Result<R>,
{
    loop {
        let reader = open()?;
        match run_stand(reader).await {
            Ok(summary) => info!(
                "Session summary: {} moves, {} stops, {} unknown",
                summary.moves, summary.stops, summary.unknown
            ),
            Err(e) => warn!("Session failed: {}", e),
        }
        tokio::time::sleep(reopen_delay).await;
    }
}
