//! Screen and preview coordinate types

use serde::{Deserialize, Serialize};
use crate::GeometryError;

/// Point in overlay pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
}

impl ScreenPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Overlay dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenSize {
    pub width: f32,
    pub height: f32,
}

impl ScreenSize {
    /// Create a screen size, rejecting non-positive or non-finite dimensions
    pub fn new(width: f32, height: f32) -> Result<Self, GeometryError> {
        Ok(Self {
            width: positive("width", width)?,
            height: positive("height", height)?,
        })
    }

    /// Screen center point
    pub fn center(&self) -> ScreenPoint {
        ScreenPoint::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Camera preview dimensions in the sensor's native landscape orientation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewSize {
    pub width: f32,
    pub height: f32,
}

impl PreviewSize {
    pub fn new(width: f32, height: f32) -> Result<Self, GeometryError> {
        Ok(Self {
            width: positive("preview width", width)?,
            height: positive("preview height", height)?,
        })
    }
}

impl Default for PreviewSize {
    /// 640x480, the preview size requested from the camera
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 480.0,
        }
    }
}

/// Face bounding box as reported by the detector (preview coordinates)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FaceBox {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl FaceBox {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Box center in preview coordinates
    pub fn center(&self) -> ScreenPoint {
        ScreenPoint::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Box center translated into overlay coordinates.
    ///
    /// The preview is displayed rotated to portrait, so the overlay's x axis
    /// is scaled against the preview height and its y axis against the
    /// preview width. With `mirror` set the x axis is flipped, as the
    /// front-facing camera feed is shown mirrored.
    pub fn overlay_center(&self, preview: PreviewSize, overlay: ScreenSize, mirror: bool) -> ScreenPoint {
        let scale_x = overlay.width / preview.height;
        let scale_y = overlay.height / preview.width;
        let center = self.center();

        let x = if mirror {
            overlay.width - scale_x * center.x
        } else {
            scale_x * center.x
        };

        ScreenPoint::new(x, scale_y * center.y)
    }
}

fn positive(field: &'static str, value: f32) -> Result<f32, GeometryError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(GeometryError::InvalidDimension { field, value })
    }
}
