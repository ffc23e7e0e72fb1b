//! Serial Command Link
//!
//! Writes each command as its bare wire string, one write per command.

use std::future::Future;
use std::time::Duration;

use guidance::Command;
use tokio::io::AsyncWriteExt;
use tokio_serial::{SerialPortBuilderExt, SerialStream};
use tracing::{debug, error, info, warn};

use crate::{LinkConfig, LinkError};

/// Destination for guidance commands
pub trait CommandSink {
    /// Deliver one command, in order, to the stand
    fn send(&mut self, command: Command) -> impl Future<Output = Result<(), LinkError>> + Send;
}

/// Serial port link to the stand
pub struct SerialLink {
    /// Serial device path
    device: String,
    /// Baud rate
    baud_rate: u32,
    /// Deadline for writing one command
    timeout: Duration,
    /// Reconnect attempts per command
    max_retries: u32,
    /// Base reconnect delay
    retry_backoff: Duration,
    /// Open port, if any. Opened lazily on first send.
    port: Option<SerialStream>,
    /// Mock mode for testing (records instead of writing)
    mock_mode: bool,
    /// Commands recorded in mock mode
    mock_sent: Vec<Command>,
    /// Number of upcoming mock writes that fail
    mock_failures: u32,
}

impl SerialLink {
    /// Create a link from configuration. The port is opened on first send.
    pub fn new(config: &LinkConfig) -> Self {
        info!("Creating serial link for device: {}", config.device);
        Self {
            device: config.device.clone(),
            baud_rate: config.baud_rate,
            timeout: Duration::from_millis(config.timeout_ms),
            max_retries: config.max_retries,
            retry_backoff: Duration::from_millis(config.retry_backoff_ms),
            port: None,
            mock_mode: config.mock,
            mock_sent: Vec::new(),
            mock_failures: 0,
        }
    }

    /// Create a mock link for testing (no hardware required)
    pub fn mock() -> Self {
        info!("Creating mock serial link");
        Self::new(&LinkConfig {
            device: "mock".to_string(),
            retry_backoff_ms: 0,
            mock: true,
            ..Default::default()
        })
    }

    /// Make the next `count` mock writes fail
    pub fn with_mock_failures(mut self, count: u32) -> Self {
        self.mock_failures = count;
        self
    }

    /// Open the serial port
    pub async fn connect(&mut self) -> Result<(), LinkError> {
        if self.mock_mode {
            debug!("Mock mode: skipping port open");
            return Ok(());
        }

        info!("Opening {} at {} baud", self.device, self.baud_rate);
        let port = tokio_serial::new(&self.device, self.baud_rate).open_native_async()?;
        self.port = Some(port);
        Ok(())
    }

    /// Close the serial port
    pub fn disconnect(&mut self) {
        if self.port.take().is_some() {
            info!("Closed {}", self.device);
        }
    }

    /// Check if the port is open
    pub fn is_connected(&self) -> bool {
        self.mock_mode || self.port.is_some()
    }

    /// Commands recorded in mock mode, oldest first
    pub fn sent(&self) -> &[Command] {
        &self.mock_sent
    }

    async fn write_once(&mut self, command: Command) -> Result<(), LinkError> {
        if self.mock_mode {
            if self.mock_failures > 0 {
                self.mock_failures -= 1;
                return Err(LinkError::Io("mock write failure".to_string()));
            }
            self.mock_sent.push(command);
            return Ok(());
        }

        if self.port.is_none() {
            self.connect().await?;
        }
        let timeout = self.timeout;
        if let Some(port) = self.port.as_mut() {
            // tokio-serial ignores the port timeout
            let write = async {
                port.write_all(command.as_str().as_bytes()).await?;
                port.flush().await
            };
            tokio::time::timeout(timeout, write)
                .await
                .map_err(|_| LinkError::Timeout(timeout.as_millis() as u64))??;
        }
        Ok(())
    }

    /// Delay before the given reconnect attempt
    fn backoff(&self, attempt: u32) -> Duration {
        self.retry_backoff.saturating_mul(attempt)
    }
}

impl CommandSink for SerialLink {
    /// Send a command, reopening the port after each failure.
    ///
    /// Gives up with `RetriesExhausted` once `max_retries` reconnects
    /// have failed for this command.
    async fn send(&mut self, command: Command) -> Result<(), LinkError> {
        let mut failures = 0;

        loop {
            match self.write_once(command).await {
                Ok(()) => {
                    info!("Sent command {}", command);
                    return Ok(());
                }
                Err(e) if failures < self.max_retries => {
                    failures += 1;
                    warn!(
                        "Failed to send {} ({}), reconnecting (attempt {}/{})",
                        command, e, failures, self.max_retries
                    );
                    self.disconnect();
                    tokio::time::sleep(self.backoff(failures)).await;
                }
                Err(e) => {
                    error!("Giving up on {}: {}", command, e);
                    self.disconnect();
                    return Err(LinkError::RetriesExhausted(self.max_retries));
                }
            }
        }
    }
}
