//! Screen Zone Geometry
//!
//! Maps a face's position on the overlay to one of nine named zones:
//! - Concentric elliptical rings around the screen center
//! - Angular sides split along the normalized diagonals
//! - Preview-to-overlay coordinate helpers

pub mod config;
pub mod point;
pub mod zone;

pub use config::ZoneConfig;
pub use point::{FaceBox, PreviewSize, ScreenPoint, ScreenSize};
pub use zone::{classify, Ring, Side, Zone, ZoneClassifier};

use thiserror::Error;

/// Geometry error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("{field} must be a positive finite number, got {value}")]
    InvalidDimension { field: &'static str, value: f32 },

    #[error("Invalid zone configuration: {0}")]
    InvalidConfig(String),

    #[error("Unknown zone label: {0}")]
    UnknownZone(String),
}
