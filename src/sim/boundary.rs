//! Arena bounds checking
//!
//! Distances are unsigned and measured to the nearer edge, whether the
//! coordinate is inside or outside. Pair them with the `is_outside_*`
//! queries when penetration matters.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::error::{Result, SimError};
use super::guards::require_finite;
use super::position::Position;

/// Raw arena rectangle as it appears in configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArenaBounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

/// Validated, immutable arena rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryChecker {
    bounds: ArenaBounds,
}

impl BoundaryChecker {
    /// Bounds must be finite with `min_x < max_x` and `min_y < max_y`
    pub fn new(bounds: ArenaBounds) -> Result<Self> {
        let ArenaBounds {
            min_x,
            max_x,
            min_y,
            max_y,
        } = bounds;

        for (name, value) in [
            ("min_x", min_x),
            ("max_x", max_x),
            ("min_y", min_y),
            ("max_y", max_y),
        ] {
            require_finite(value).map_err(|e| e.for_argument(name))?;
        }

        if min_x >= max_x {
            return Err(SimError::InvalidArgument {
                name: "min_x",
                reason: format!("min_x ({min_x}) must be below max_x ({max_x})"),
            });
        }
        if min_y >= max_y {
            return Err(SimError::InvalidArgument {
                name: "min_y",
                reason: format!("min_y ({min_y}) must be below max_y ({max_y})"),
            });
        }

        Ok(Self { bounds })
    }

    pub fn from_extents(min_x: f32, max_x: f32, min_y: f32, max_y: f32) -> Result<Self> {
        Self::new(ArenaBounds {
            min_x,
            max_x,
            min_y,
            max_y,
        })
    }

    pub fn bounds(&self) -> ArenaBounds {
        self.bounds
    }

    pub fn width(&self) -> f32 {
        self.bounds.max_x - self.bounds.min_x
    }

    pub fn height(&self) -> f32 {
        self.bounds.max_y - self.bounds.min_y
    }

    pub fn center(&self) -> Position {
        Position::new_unchecked(Vec2::new(
            0.5 * self.bounds.min_x + 0.5 * self.bounds.max_x,
            0.5 * self.bounds.min_y + 0.5 * self.bounds.max_y,
        ))
    }

    pub fn is_outside_x_bounds(&self, x: f32) -> Result<bool> {
        let x = require_finite(x).map_err(|e| e.for_argument("x"))?;
        Ok(x < self.bounds.min_x || x > self.bounds.max_x)
    }

    pub fn is_outside_y_bounds(&self, y: f32) -> Result<bool> {
        let y = require_finite(y).map_err(|e| e.for_argument("y"))?;
        Ok(y < self.bounds.min_y || y > self.bounds.max_y)
    }

    /// Distance from `x` to the nearer vertical edge
    pub fn x_distance_to_boundary(&self, x: f32) -> Result<f32> {
        let x = require_finite(x).map_err(|e| e.for_argument("x"))?;
        Ok((x - self.bounds.min_x).abs().min((x - self.bounds.max_x).abs()))
    }

    /// Distance from `y` to the nearer horizontal edge
    pub fn y_distance_to_boundary(&self, y: f32) -> Result<f32> {
        let y = require_finite(y).map_err(|e| e.for_argument("y"))?;
        Ok((y - self.bounds.min_y).abs().min((y - self.bounds.max_y).abs()))
    }

    /// Either coordinate outside. Infallible since positions are finite.
    pub fn is_outside(&self, p: Position) -> bool {
        p.x() < self.bounds.min_x
            || p.x() > self.bounds.max_x
            || p.y() < self.bounds.min_y
            || p.y() > self.bounds.max_y
    }

    /// Nearest point inside the arena
    pub fn clamp(&self, p: Position) -> Position {
        Position::new_unchecked(Vec2::new(
            p.x().clamp(self.bounds.min_x, self.bounds.max_x),
            p.y().clamp(self.bounds.min_y, self.bounds.max_y),
        ))
    }

    /// Clamp with an inset, keeping a hull of `half_extents` fully inside
    ///
    /// Falls back to the arena center on an axis where the hull is wider
    /// than the arena. Negative extents count by magnitude; NaN counts as 0.
    pub fn clamp_inset(&self, p: Position, half_extents: Vec2) -> Position {
        let center = self.center();
        let axis = |v: f32, min: f32, max: f32, half: f32, mid: f32| {
            let half = if half.is_nan() { 0.0 } else { half.abs() };
            if max - min <= 2.0 * half {
                mid
            } else {
                v.clamp(min + half, max - half)
            }
        };
        let b = self.bounds;
        Position::new_unchecked(Vec2::new(
            axis(p.x(), b.min_x, b.max_x, half_extents.x, center.x()),
            axis(p.y(), b.min_y, b.max_y, half_extents.y, center.y()),
        ))
    }
}

impl super::collision::Container for BoundaryChecker {
    fn contains(&self, point: Position) -> bool {
        !self.is_outside(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Container;

    fn ten_by_ten() -> BoundaryChecker {
        BoundaryChecker::from_extents(0.0, 10.0, 0.0, 10.0).unwrap()
    }

    #[test]
    fn test_outside_queries() {
        let b = ten_by_ten();
        assert_eq!(b.is_outside_x_bounds(-1.0), Ok(true));
        assert_eq!(b.is_outside_x_bounds(5.0), Ok(false));
        assert_eq!(b.is_outside_x_bounds(10.0), Ok(false));
        assert_eq!(b.is_outside_x_bounds(10.5), Ok(true));
        assert_eq!(b.is_outside_y_bounds(-0.1), Ok(true));
        assert_eq!(b.is_outside_y_bounds(0.0), Ok(false));
        assert_eq!(b.is_outside_y_bounds(11.0), Ok(true));
    }

    #[test]
    fn test_distance_to_nearest_edge() {
        let b = ten_by_ten();
        assert_eq!(b.x_distance_to_boundary(5.0), Ok(5.0));
        assert_eq!(b.x_distance_to_boundary(-1.0), Ok(1.0));
        assert_eq!(b.x_distance_to_boundary(8.0), Ok(2.0));
        assert_eq!(b.x_distance_to_boundary(13.0), Ok(3.0));
        assert_eq!(b.y_distance_to_boundary(0.0), Ok(0.0));
        assert_eq!(b.y_distance_to_boundary(2.5), Ok(2.5));
    }

    #[test]
    fn test_queries_reject_non_finite() {
        let b = ten_by_ten();
        assert!(matches!(
            b.is_outside_x_bounds(f32::NAN),
            Err(SimError::InvalidArgument { name: "x", .. })
        ));
        assert!(b.is_outside_y_bounds(f32::INFINITY).is_err());
        assert!(b.x_distance_to_boundary(f32::NEG_INFINITY).is_err());
        assert!(matches!(
            b.y_distance_to_boundary(f32::NAN),
            Err(SimError::InvalidArgument { name: "y", .. })
        ));
    }

    #[test]
    fn test_construction_rejects_degenerate_bounds() {
        assert!(matches!(
            BoundaryChecker::from_extents(10.0, 10.0, 0.0, 10.0),
            Err(SimError::InvalidArgument { name: "min_x", .. })
        ));
        assert!(BoundaryChecker::from_extents(10.0, 0.0, 0.0, 10.0).is_err());
        assert!(matches!(
            BoundaryChecker::from_extents(0.0, 10.0, 5.0, 5.0),
            Err(SimError::InvalidArgument { name: "min_y", .. })
        ));
        assert!(BoundaryChecker::from_extents(0.0, 10.0, 10.0, -10.0).is_err());
    }

    #[test]
    fn test_construction_rejects_non_finite_bounds() {
        assert!(matches!(
            BoundaryChecker::from_extents(f32::NAN, 10.0, 0.0, 10.0),
            Err(SimError::InvalidArgument { name: "min_x", .. })
        ));
        assert!(BoundaryChecker::from_extents(0.0, f32::INFINITY, 0.0, 10.0).is_err());
        assert!(BoundaryChecker::from_extents(0.0, 10.0, f32::NEG_INFINITY, 10.0).is_err());
        assert!(matches!(
            BoundaryChecker::from_extents(0.0, 10.0, 0.0, f32::NAN),
            Err(SimError::InvalidArgument { name: "max_y", .. })
        ));
    }

    #[test]
    fn test_clamp_and_contains() {
        let b = ten_by_ten();
        let outside = Position::new(-3.0, 12.0).unwrap();
        assert!(b.is_outside(outside));
        assert!(!b.contains(outside));

        let clamped = b.clamp(outside);
        assert_eq!(clamped, Position::new(0.0, 10.0).unwrap());
        assert!(b.contains(clamped));
    }

    #[test]
    fn test_clamp_inset_keeps_hull_inside() {
        let b = ten_by_ten();
        let p = b.clamp_inset(Position::new(0.0, 9.5).unwrap(), Vec2::new(1.0, 2.0));
        assert_eq!(p, Position::new(1.0, 8.0).unwrap());

        let too_wide = b.clamp_inset(Position::new(0.0, 0.0).unwrap(), Vec2::new(6.0, 1.0));
        assert_eq!(too_wide, Position::new(5.0, 1.0).unwrap());
    }

    #[test]
    fn test_clamp_inset_sanitizes_extents() {
        let b = ten_by_ten();
        let p = Position::new(-3.0, 4.0).unwrap();

        let nan = b.clamp_inset(p, Vec2::new(f32::NAN, f32::NAN));
        assert_eq!(nan, Position::new(0.0, 4.0).unwrap());

        let infinite = b.clamp_inset(p, Vec2::new(f32::INFINITY, 1.0));
        assert_eq!(infinite, Position::new(5.0, 4.0).unwrap());

        let negative = b.clamp_inset(p, Vec2::new(-2.0, -2.0));
        assert_eq!(negative, Position::new(2.0, 4.0).unwrap());
    }

    #[test]
    fn test_checker_is_reusable() {
        let b = ten_by_ten();
        for i in 0..1000 {
            let x = i as f32 * 0.01;
            assert_eq!(b.is_outside_x_bounds(x), Ok(false));
        }
        assert_eq!(b.bounds().max_x, 10.0);
        assert_eq!((b.width(), b.height()), (10.0, 10.0));
    }
}
