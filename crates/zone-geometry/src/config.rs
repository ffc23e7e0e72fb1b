//! Zone configuration

use serde::{Deserialize, Serialize};
use crate::GeometryError;

/// Ring sizes, as fractions of the screen's full width and height
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoneConfig {
    /// Full size of the center ellipse relative to the screen
    pub inner_ratio: f32,

    /// Full size of the middle-band ellipse relative to the screen
    pub outer_ratio: f32,
}

impl Default for ZoneConfig {
    fn default() -> Self {
        Self {
            inner_ratio: 0.33,
            outer_ratio: 0.55,
        }
    }
}

impl ZoneConfig {
    /// Check that `0 < inner_ratio < outer_ratio`
    pub fn validate(&self) -> Result<(), GeometryError> {
        let ordered = self.inner_ratio > 0.0 && self.inner_ratio < self.outer_ratio;
        if !ordered || !self.outer_ratio.is_finite() {
            return Err(GeometryError::InvalidConfig(format!(
                "expected 0 < inner_ratio < outer_ratio, got inner={} outer={}",
                self.inner_ratio, self.outer_ratio
            )));
        }
        Ok(())
    }

    /// Half-axes of the inner ellipse for a given screen
    pub(crate) fn inner_radii(&self, width: f32, height: f32) -> (f32, f32) {
        (width * self.inner_ratio / 2.0, height * self.inner_ratio / 2.0)
    }

    /// Half-axes of the outer ellipse for a given screen
    pub(crate) fn outer_radii(&self, width: f32, height: f32) -> (f32, f32) {
        (width * self.outer_ratio / 2.0, height * self.outer_ratio / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(ZoneConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_inverted_rings() {
        let config = ZoneConfig {
            inner_ratio: 0.6,
            outer_ratio: 0.4,
        };
        assert!(matches!(config.validate(), Err(GeometryError::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_zero_inner() {
        let config = ZoneConfig {
            inner_ratio: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
