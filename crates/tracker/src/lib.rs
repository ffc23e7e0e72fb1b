//! Face Guide
//!
//! Reads face detector events, classifies each face's screen zone and
//! steers the stand toward centering it over the serial command link.

mod cli;
mod config;
mod event;
mod pipeline;
mod stand;

pub use cli::{Args, Mode};
pub use config::{AppConfig, OverlayConfig, DEFAULT_CONFIG_FILE};
pub use event::FaceEvent;
pub use pipeline::{Pipeline, PipelineStats};
pub use stand::{open_stand_port, run_stand, serve_stand, StandSummary};

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Initialize logging at the given level
pub fn init_logging(level: &str) -> anyhow::Result<()> {
    let level: Level = level.parse()?;
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
