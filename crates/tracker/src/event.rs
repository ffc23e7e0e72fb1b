//! Face detector events (one JSON object per line)

use guidance::FaceId;
use serde::{Deserialize, Serialize};
use zone_geometry::FaceBox;

/// Event from the face detector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "lowercase")]
pub enum FaceEvent {
    /// A new face was detected
    New { id: FaceId },

    /// Face position for the current frame (preview coordinates)
    Update {
        id: FaceId,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },

    /// Face not found in this frame
    Missing { id: FaceId },

    /// Face gone for good
    Done { id: FaceId },
}

impl FaceEvent {
    /// Parse one line of input
    pub fn from_line(line: &str) -> serde_json::Result<Self> {
        serde_json::from_str(line)
    }

    pub fn id(&self) -> FaceId {
        match self {
            FaceEvent::New { id }
            | FaceEvent::Update { id, .. }
            | FaceEvent::Missing { id }
            | FaceEvent::Done { id } => *id,
        }
    }

    /// Bounding box carried by an update
    pub fn face_box(&self) -> Option<FaceBox> {
        match self {
            FaceEvent::Update {
                x, y, width, height, ..
            } => Some(FaceBox::new(*x, *y, *width, *height)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_update() {
        let event = FaceEvent::from_line(
            r#"{"event":"update","id":4,"x":10.0,"y":20.0,"width":30.0,"height":40.0}"#,
        )
        .unwrap();
        assert_eq!(event.id(), 4);
        assert_eq!(event.face_box(), Some(FaceBox::new(10.0, 20.0, 30.0, 40.0)));
    }

    #[test]
    fn test_parse_lifecycle_events() {
        assert_eq!(
            FaceEvent::from_line(r#"{"event":"new","id":1}"#).unwrap(),
            FaceEvent::New { id: 1 }
        );
        assert_eq!(
            FaceEvent::from_line(r#"{"event":"missing","id":1}"#).unwrap(),
            FaceEvent::Missing { id: 1 }
        );
        let done = FaceEvent::from_line(r#"{"event":"done","id":1}"#).unwrap();
        assert_eq!(done, FaceEvent::Done { id: 1 });
        assert_eq!(done.face_box(), None);
    }

    #[test]
    fn test_rejects_malformed() {
        assert!(FaceEvent::from_line(r#"{"event":"teleport","id":1}"#).is_err());
        assert!(FaceEvent::from_line(r#"{"event":"update","id":1}"#).is_err());
        assert!(FaceEvent::from_line("not json").is_err());
    }
}
