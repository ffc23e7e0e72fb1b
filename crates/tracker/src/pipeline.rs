//! Event pipeline: detector events in, stand commands out

use command_link::{CommandSink, LinkError};
use guidance::{Command, FaceTracker};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info, warn};
use zone_geometry::{PreviewSize, ScreenSize, ZoneClassifier};

use crate::{AppConfig, FaceEvent};

/// Counters for one pipeline run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineStats {
    /// Events processed
    pub events: usize,
    /// Commands delivered to the sink
    pub commands: usize,
    /// Input lines that could not be parsed
    pub skipped: usize,
}

/// Drives classification, per-face guidance and command delivery
pub struct Pipeline<S> {
    classifier: ZoneClassifier,
    tracker: FaceTracker,
    sink: S,
    overlay: ScreenSize,
    preview: PreviewSize,
    mirror: bool,
}

impl<S: CommandSink> Pipeline<S> {
    pub fn new(config: &AppConfig, sink: S) -> anyhow::Result<Self> {
        config.validate()?;
        Ok(Self {
            classifier: ZoneClassifier::new(config.zones)?,
            tracker: FaceTracker::new(),
            sink,
            overlay: config.overlay_size()?,
            preview: config.preview,
            mirror: config.mirror,
        })
    }

    /// Process one event, delivering any resulting command
    pub async fn handle(&mut self, event: FaceEvent) -> Result<Option<Command>, LinkError> {
        let command = match &event {
            FaceEvent::New { id } => {
                self.tracker.on_new_item(*id);
                None
            }
            FaceEvent::Update { id, .. } => {
                let Some(face) = event.face_box() else {
                    return Ok(None);
                };
                let point = face.overlay_center(self.preview, self.overlay, self.mirror);
                let zone = self.classifier.classify(point, self.overlay);
                debug!("Face {} at ({:.0}, {:.0}) in {}", id, point.x, point.y, zone);
                self.tracker.on_update(*id, zone)
            }
            FaceEvent::Missing { id } => {
                self.tracker.on_missing(*id);
                None
            }
            FaceEvent::Done { id } => {
                self.tracker.on_done(*id);
                None
            }
        };

        if let Some(command) = command {
            self.sink.send(command).await?;
        }
        Ok(command)
    }

    /// Process JSON-lines events until end of input.
    ///
    /// Malformed lines are logged and skipped. A link failure ends the run.
    pub async fn run<R: AsyncBufRead + Unpin>(&mut self, input: R) -> anyhow::Result<PipelineStats> {
        let mut stats = PipelineStats::default();
        let mut lines = input.lines();

        while let Some(line) = lines.next_line().await? {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let event = match FaceEvent::from_line(line) {
                Ok(event) => event,
                Err(e) => {
                    warn!("Skipping malformed event ({}): {}", e, line);
                    stats.skipped += 1;
                    continue;
                }
            };

            stats.events += 1;
            if self.handle(event).await?.is_some() {
                stats.commands += 1;
            }
        }

        info!(
            "Input finished: {} events, {} commands, {} skipped",
            stats.events, stats.commands, stats.skipped
        );
        Ok(stats)
    }

    pub fn tracker(&self) -> &FaceTracker {
        &self.tracker
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}
