//! Face Guide - Main Entry Point

use std::time::Duration;

use command_link::SerialLink;
use tokio::io::BufReader;
use tracing::info;
use tracker::{init_logging, open_stand_port, run_stand, serve_stand, AppConfig, Args, Mode, Pipeline};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse(std::env::args().skip(1))?;
    let config = AppConfig::load(args.config.as_deref())?;
    init_logging(&config.log_level)?;

    info!("=== Face Guide v{} ===", env!("CARGO_PKG_VERSION"));

    match args.mode {
        Mode::Track => {
            let link = SerialLink::new(&config.link);
            let mut pipeline = Pipeline::new(&config, link)?;
            pipeline.run(BufReader::new(tokio::io::stdin())).await?;
        }
        Mode::Stand => {
            if config.link.mock {
                let summary = run_stand(tokio::io::stdin()).await?;
                info!("Received {} movement commands", summary.moves);
            } else {
                let reopen_delay = Duration::from_millis(config.link.retry_backoff_ms);
                serve_stand(|| open_stand_port(&config.link), reopen_delay).await?;
            }
        }
    }

    Ok(())
}
