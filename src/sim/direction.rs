//! Validated heading
//!
//! A `Direction` is either the zero vector or unit length. Scaling it by a
//! speed yields a plain displacement, since the result is no longer a heading.

use std::ops::Mul;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::error::{Result, SimError};
use super::guards::{require_finite_vector, require_normalized_or_zero};

/// Zero or unit-length heading
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec2", into = "Vec2")]
pub struct Direction(Vec2);

impl Direction {
    pub const ZERO: Self = Self(Vec2::ZERO);
    /// Toward the top of the screen (y grows downward)
    pub const UP: Self = Self(Vec2::NEG_Y);
    pub const DOWN: Self = Self(Vec2::Y);
    pub const LEFT: Self = Self(Vec2::NEG_X);
    pub const RIGHT: Self = Self(Vec2::X);

    pub fn new(x: f32, y: f32) -> Result<Self> {
        Self::from_vec2(Vec2::new(x, y))
    }

    pub fn from_vec2(v: Vec2) -> Result<Self> {
        require_finite_vector(v)
            .and_then(require_normalized_or_zero)
            .map(Self)
    }

    /// Normalize an arbitrary finite vector into a heading
    ///
    /// Zero stays zero; non-finite input is rejected. Very large or very
    /// small vectors still yield a unit heading.
    pub fn toward(v: Vec2) -> Result<Self> {
        let v = require_finite_vector(v)?;
        if v == Vec2::ZERO {
            return Ok(Self::ZERO);
        }
        // Scale the largest component to 1 so the squared length can't
        // overflow or flush to zero.
        let v = v / v.abs().max_element();
        Self::from_vec2(v.normalize_or_zero())
    }

    /// Heading at `theta` radians from +x
    pub fn from_angle(theta: f32) -> Result<Self> {
        if !theta.is_finite() {
            return Err(SimError::InvalidNumber { value: theta });
        }
        Self::from_vec2(Vec2::from_angle(theta))
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.0.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.0.y
    }

    #[inline]
    pub fn as_vec2(&self) -> Vec2 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == Vec2::ZERO
    }

    /// Replace the heading. On failure the previous value is kept.
    pub fn set(&mut self, x: f32, y: f32) -> Result<()> {
        *self = Self::new(x, y)?;
        Ok(())
    }
}

impl Mul<f32> for Direction {
    type Output = Vec2;

    fn mul(self, speed: f32) -> Vec2 {
        self.0 * speed
    }
}

impl TryFrom<Vec2> for Direction {
    type Error = SimError;

    fn try_from(v: Vec2) -> Result<Self> {
        Self::from_vec2(v)
    }
}

impl From<Direction> for Vec2 {
    fn from(d: Direction) -> Self {
        d.0
    }
}
