//! Per-face tracking

use std::collections::HashMap;

use tracing::{debug, info};
use zone_geometry::Zone;

use crate::{Command, GuidanceController, GuidanceState};

/// Detector-assigned face identifier
pub type FaceId = u32;

/// A face currently followed by the tracker
#[derive(Debug, Clone, Default)]
pub struct TrackedFace {
    /// Approach state for this face
    pub state: GuidanceState,

    /// Zone from the latest update
    pub last_zone: Option<Zone>,

    /// False while the detector reports the face as temporarily missing
    pub visible: bool,
}

/// Follows every face the detector reports, each with its own guidance state
#[derive(Debug, Default)]
pub struct FaceTracker {
    controller: GuidanceController,
    faces: HashMap<FaceId, TrackedFace>,
}

impl FaceTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking a newly detected face with fresh state
    pub fn on_new_item(&mut self, id: FaceId) {
        info!("Tracking face {}", id);
        self.faces.insert(
            id,
            TrackedFace {
                visible: true,
                ..Default::default()
            },
        );
    }

    /// Process the face's zone for the current frame.
    ///
    /// A face that was never announced is registered on its first update.
    pub fn on_update(&mut self, id: FaceId, zone: Zone) -> Option<Command> {
        let face = self.faces.entry(id).or_insert_with(|| {
            debug!("Update for unannounced face {}, registering", id);
            TrackedFace {
                visible: true,
                ..Default::default()
            }
        });

        if !face.visible {
            match face.last_zone {
                Some(last) => info!("Face {} back in view in {} (last seen in {})", id, zone, last),
                None => info!("Face {} back in view in {}", id, zone),
            }
            face.visible = true;
        }
        face.last_zone = Some(zone);
        self.controller.on_zone(zone, &mut face.state)
    }

    /// The face was not found in this frame; its state is kept
    pub fn on_missing(&mut self, id: FaceId) {
        if let Some(face) = self.faces.get_mut(&id) {
            debug!("Face {} missing", id);
            face.visible = false;
        }
    }

    /// The face is gone for good; drop its state.
    /// Returns whether the face was being tracked.
    pub fn on_done(&mut self, id: FaceId) -> bool {
        let removed = self.faces.remove(&id).is_some();
        if removed {
            info!("Face {} gone", id);
        }
        removed
    }

    pub fn face(&self, id: FaceId) -> Option<&TrackedFace> {
        self.faces.get(&id)
    }

    /// Number of faces currently tracked
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }
}
