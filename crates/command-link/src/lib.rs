//! Stand Command Link
//!
//! Delivers guidance commands to the stand over a serial port (an RFCOMM
//! Bluetooth serial device in the usual setup), and decodes the messages
//! on the stand's receiving end.

mod config;
mod error;
mod link;
mod receiver;

pub use config::LinkConfig;
pub use error::LinkError;
pub use link::{CommandSink, SerialLink};
pub use receiver::{StandMessage, StandReceiver};
