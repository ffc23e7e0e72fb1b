//! Zone classification

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{GeometryError, ScreenPoint, ScreenSize, ZoneConfig};

/// Distance band from the screen center
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ring {
    /// Inside the center ellipse (ring 0)
    Inner,
    /// Between the center and outer ellipses (ring 1)
    Middle,
    /// Outside the outer ellipse (ring 2)
    Outer,
}

/// Angular side of the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Up,
    Down,
    Left,
    Right,
}

/// One of the nine screen regions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    Center,
    U1,
    D1,
    L1,
    R1,
    U2,
    D2,
    L2,
    R2,
}

impl Zone {
    pub const ALL: [Zone; 9] = [
        Zone::Center,
        Zone::U1,
        Zone::D1,
        Zone::L1,
        Zone::R1,
        Zone::U2,
        Zone::D2,
        Zone::L2,
        Zone::R2,
    ];

    /// Combine a ring and a side. The inner ring is `Center` whatever the side.
    pub fn new(ring: Ring, side: Side) -> Self {
        match (ring, side) {
            (Ring::Inner, _) => Zone::Center,
            (Ring::Middle, Side::Up) => Zone::U1,
            (Ring::Middle, Side::Down) => Zone::D1,
            (Ring::Middle, Side::Left) => Zone::L1,
            (Ring::Middle, Side::Right) => Zone::R1,
            (Ring::Outer, Side::Up) => Zone::U2,
            (Ring::Outer, Side::Down) => Zone::D2,
            (Ring::Outer, Side::Left) => Zone::L2,
            (Ring::Outer, Side::Right) => Zone::R2,
        }
    }

    pub fn ring(self) -> Ring {
        match self {
            Zone::Center => Ring::Inner,
            Zone::U1 | Zone::D1 | Zone::L1 | Zone::R1 => Ring::Middle,
            Zone::U2 | Zone::D2 | Zone::L2 | Zone::R2 => Ring::Outer,
        }
    }

    /// Side of the zone; `None` for `Center`
    pub fn side(self) -> Option<Side> {
        match self {
            Zone::Center => None,
            Zone::U1 | Zone::U2 => Some(Side::Up),
            Zone::D1 | Zone::D2 => Some(Side::Down),
            Zone::L1 | Zone::L2 => Some(Side::Left),
            Zone::R1 | Zone::R2 => Some(Side::Right),
        }
    }

    /// Overlay label, e.g. `"L-2"` or `"Center"`
    pub fn label(self) -> &'static str {
        match self {
            Zone::Center => "Center",
            Zone::U1 => "U-1",
            Zone::D1 => "D-1",
            Zone::L1 => "L-1",
            Zone::R1 => "R-1",
            Zone::U2 => "U-2",
            Zone::D2 => "D-2",
            Zone::L2 => "L-2",
            Zone::R2 => "R-2",
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Zone {
    type Err = GeometryError;

    /// Accepts both `"L-2"` and `"L2"` forms
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact: String = s.trim().chars().filter(|c| *c != '-').collect();
        Zone::ALL
            .into_iter()
            .find(|zone| zone.label().replace('-', "").eq_ignore_ascii_case(&compact))
            .ok_or_else(|| GeometryError::UnknownZone(s.to_string()))
    }
}

/// Zone classifier for a configured pair of rings
#[derive(Debug, Clone, Default)]
pub struct ZoneClassifier {
    config: ZoneConfig,
}

impl ZoneClassifier {
    pub fn new(config: ZoneConfig) -> Result<Self, GeometryError> {
        config.validate()?;
        debug!(
            "Zone classifier: inner ring {:.2}, outer ring {:.2}",
            config.inner_ratio, config.outer_ratio
        );
        Ok(Self { config })
    }

    /// Classify a face center into a zone.
    ///
    /// Points outside the screen are valid input and land in the outer ring.
    pub fn classify(&self, point: ScreenPoint, screen: ScreenSize) -> Zone {
        Zone::new(self.ring(point, screen), self.side(point, screen))
    }

    /// Ring containing `point`. Ellipse boundaries belong to the inner ring.
    pub fn ring(&self, point: ScreenPoint, screen: ScreenSize) -> Ring {
        let center = screen.center();
        let (inner_rx, inner_ry) = self.config.inner_radii(screen.width, screen.height);
        let (outer_rx, outer_ry) = self.config.outer_radii(screen.width, screen.height);

        if in_ellipse(point, center, inner_rx, inner_ry) {
            Ring::Inner
        } else if in_ellipse(point, center, outer_rx, outer_ry) {
            Ring::Middle
        } else {
            Ring::Outer
        }
    }

    /// Side of the screen `point` falls on.
    ///
    /// The y coordinate is rescaled into x units (`y / height * width`)
    /// before comparing, so the split lines are the diagonals of a
    /// width-by-width square rather than of the screen rectangle.
    /// Points on a split line go to `Left` or `Down`.
    pub fn side(&self, point: ScreenPoint, screen: ScreenSize) -> Side {
        let nx = point.x;
        let ny = (point.y / screen.height) * screen.width;
        let before_anti_diagonal = (screen.width - nx) > ny;

        if nx > ny {
            if before_anti_diagonal {
                Side::Up
            } else {
                Side::Right
            }
        } else if before_anti_diagonal {
            Side::Left
        } else {
            Side::Down
        }
    }
}

/// Classify with the default ring sizes
pub fn classify(point: ScreenPoint, screen: ScreenSize) -> Zone {
    ZoneClassifier::default().classify(point, screen)
}

fn in_ellipse(point: ScreenPoint, center: ScreenPoint, rx: f32, ry: f32) -> bool {
    let dx = (point.x - center.x) / rx;
    let dy = (point.y - center.y) / ry;
    dx * dx + dy * dy <= 1.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn screen(width: f32, height: f32) -> ScreenSize {
        ScreenSize::new(width, height).unwrap()
    }

    #[test]
    fn test_exact_center() {
        assert_eq!(classify(ScreenPoint::new(400.0, 300.0), screen(800.0, 600.0)), Zone::Center);
    }

    #[test]
    fn test_far_left_is_outer_left() {
        // ny = 300 / 600 * 800 = 400, nx = 50 -> Left; 350px from center -> ring 2
        assert_eq!(classify(ScreenPoint::new(50.0, 300.0), screen(800.0, 600.0)), Zone::L2);
    }

    #[test]
    fn test_middle_ring_sides() {
        let s = screen(800.0, 600.0);
        // Inner half-axes 132x99, outer 220x165
        assert_eq!(classify(ScreenPoint::new(400.0, 180.0), s), Zone::U1);
        assert_eq!(classify(ScreenPoint::new(400.0, 420.0), s), Zone::D1);
        assert_eq!(classify(ScreenPoint::new(220.0, 300.0), s), Zone::L1);
        assert_eq!(classify(ScreenPoint::new(580.0, 300.0), s), Zone::R1);
    }

    #[test]
    fn test_outer_ring_sides() {
        let s = screen(800.0, 600.0);
        assert_eq!(classify(ScreenPoint::new(400.0, 20.0), s), Zone::U2);
        assert_eq!(classify(ScreenPoint::new(400.0, 590.0), s), Zone::D2);
        assert_eq!(classify(ScreenPoint::new(790.0, 300.0), s), Zone::R2);
    }

    #[test]
    fn test_out_of_bounds_points() {
        let s = screen(800.0, 600.0);
        assert_eq!(classify(ScreenPoint::new(-500.0, 300.0), s), Zone::L2);
        assert_eq!(classify(ScreenPoint::new(1500.0, 300.0), s), Zone::R2);
        assert_eq!(classify(ScreenPoint::new(400.0, -200.0), s), Zone::U2);
        assert_eq!(classify(ScreenPoint::new(400.0, 900.0), s), Zone::D2);
    }

    #[test]
    fn test_ellipse_boundary_is_inside() {
        // Exact ratios so the boundary point is representable
        let classifier = ZoneClassifier::new(ZoneConfig {
            inner_ratio: 0.5,
            outer_ratio: 0.75,
        })
        .unwrap();
        let s = screen(800.0, 600.0);

        assert_eq!(classifier.ring(ScreenPoint::new(600.0, 300.0), s), Ring::Inner);
        assert_eq!(classifier.ring(ScreenPoint::new(400.0, 150.0), s), Ring::Inner);
        assert_eq!(classifier.ring(ScreenPoint::new(600.5, 300.0), s), Ring::Middle);
        assert_eq!(classifier.ring(ScreenPoint::new(700.0, 300.0), s), Ring::Middle);
        assert_eq!(classifier.ring(ScreenPoint::new(700.5, 300.0), s), Ring::Outer);
    }

    #[test]
    fn test_just_outside_default_inner_ring() {
        let classifier = ZoneClassifier::default();
        let s = screen(800.0, 600.0);
        assert_eq!(classifier.ring(ScreenPoint::new(530.0, 300.0), s), Ring::Inner);
        assert_eq!(classifier.ring(ScreenPoint::new(534.0, 300.0), s), Ring::Middle);
    }

    #[test]
    fn test_diagonal_resolves_left_or_down() {
        let classifier = ZoneClassifier::default();
        let s = screen(800.0, 800.0);
        // nx == ny on the main diagonal
        assert_eq!(classifier.side(ScreenPoint::new(100.0, 100.0), s), Side::Left);
        assert_eq!(classifier.side(ScreenPoint::new(700.0, 700.0), s), Side::Down);
    }

    #[test]
    fn test_side_uses_width_normalized_y() {
        let classifier = ZoneClassifier::default();
        // Wide screen: ny = 100 / 400 * 800 = 200, width - nx = 100 < 200 -> Right
        let s = screen(800.0, 400.0);
        assert_eq!(classifier.side(ScreenPoint::new(700.0, 100.0), s), Side::Right);
        // Tall screen: (100, 350) -> ny = 350 / 800 * 400 = 175; nx <= ny, 300 > 175 -> Left
        let s = screen(400.0, 800.0);
        assert_eq!(classifier.side(ScreenPoint::new(100.0, 350.0), s), Side::Left);
    }

    #[test]
    fn test_zone_parts() {
        assert_eq!(Zone::Center.side(), None);
        assert_eq!(Zone::Center.ring(), Ring::Inner);
        assert_eq!(Zone::L2.side(), Some(Side::Left));
        assert_eq!(Zone::L2.ring(), Ring::Outer);
        assert_eq!(Zone::new(Ring::Inner, Side::Right), Zone::Center);
        assert_eq!(Zone::new(Ring::Middle, Side::Down), Zone::D1);
        for zone in Zone::ALL {
            if let Some(side) = zone.side() {
                assert_eq!(Zone::new(zone.ring(), side), zone);
            }
        }
    }

    #[test]
    fn test_zone_labels() {
        assert_eq!(Zone::Center.to_string(), "Center");
        assert_eq!(Zone::R1.to_string(), "R-1");
        assert_eq!("L-2".parse::<Zone>().unwrap(), Zone::L2);
        assert_eq!("u1".parse::<Zone>().unwrap(), Zone::U1);
        assert_eq!("center".parse::<Zone>().unwrap(), Zone::Center);
        assert!("X-3".parse::<Zone>().is_err());
    }

    #[test]
    fn test_rejects_invalid_config() {
        let result = ZoneClassifier::new(ZoneConfig {
            inner_ratio: 0.55,
            outer_ratio: 0.33,
        });
        assert!(result.is_err());
    }

    proptest! {
        #[test]
        fn prop_screen_center_is_center(w in 1.0f32..5000.0, h in 1.0f32..5000.0) {
            let s = screen(w, h);
            prop_assert_eq!(classify(s.center(), s), Zone::Center);
        }

        #[test]
        fn prop_side_is_scale_invariant(
            w in 1.0f32..4000.0,
            h in 1.0f32..4000.0,
            fx in -0.5f32..1.5,
            fy in -0.5f32..1.5,
            k in prop::sample::select(vec![0.25f32, 0.5, 2.0, 4.0, 8.0]),
        ) {
            let classifier = ZoneClassifier::default();
            let point = ScreenPoint::new(fx * w, fy * h);
            let scaled = ScreenPoint::new(k * point.x, k * point.y);

            prop_assert_eq!(
                classifier.side(point, screen(w, h)),
                classifier.side(scaled, screen(k * w, k * h))
            );
            prop_assert_eq!(
                classify(point, screen(w, h)).side(),
                classify(scaled, screen(k * w, k * h)).side()
            );
        }

        #[test]
        fn prop_classify_is_pure(
            x in -2000.0f32..4000.0,
            y in -2000.0f32..4000.0,
            w in 1.0f32..2000.0,
            h in 1.0f32..2000.0,
        ) {
            let point = ScreenPoint::new(x, y);
            prop_assert_eq!(classify(point, screen(w, h)), classify(point, screen(w, h)));
        }

        #[test]
        fn prop_inner_ring_never_has_side(
            x in 0.0f32..1000.0,
            y in 0.0f32..1000.0,
        ) {
            let zone = classify(ScreenPoint::new(x, y), screen(1000.0, 1000.0));
            prop_assert_eq!(zone.side().is_none(), zone.ring() == Ring::Inner);
        }
    }
}
