//! Validated 2D position
//!
//! A `Position` is an unconstrained point whose coordinates are always
//! finite. Construction, assignment and arithmetic all run the same guard.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::error::Result;
use super::guards::require_finite_vector;

/// A point in arena space with finite coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec2", into = "Vec2")]
pub struct Position(Vec2);

impl Position {
    pub const ORIGIN: Self = Self(Vec2::ZERO);

    pub fn new(x: f32, y: f32) -> Result<Self> {
        Self::from_vec2(Vec2::new(x, y))
    }

    pub fn from_vec2(v: Vec2) -> Result<Self> {
        require_finite_vector(v).map(Self)
    }

    /// Wrap a vector already known to be finite (e.g. a clamp of finite values)
    pub(crate) fn new_unchecked(v: Vec2) -> Self {
        debug_assert!(v.is_finite(), "position must be finite: {v:?}");
        Self(v)
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

    /// Replace both coordinates. On failure the previous value is kept.
    pub fn set(&mut self, x: f32, y: f32) -> Result<()> {
        *self = Self::new(x, y)?;
        Ok(())
    }

    pub fn set_x(&mut self, x: f32) -> Result<()> {
        self.set(x, self.0.y)
    }

    pub fn set_y(&mut self, y: f32) -> Result<()> {
        self.set(self.0.x, y)
    }

    /// Component-wise sum with another position or a displacement
    pub fn checked_add(self, rhs: impl Into<Vec2>) -> Result<Self> {
        Self::from_vec2(self.0 + rhs.into())
    }

    /// Component-wise difference with another position or a displacement
    pub fn checked_sub(self, rhs: impl Into<Vec2>) -> Result<Self> {
        Self::from_vec2(self.0 - rhs.into())
    }
}

impl TryFrom<Vec2> for Position {
    type Error = super::error::SimError;

    fn try_from(v: Vec2) -> Result<Self> {
        Self::from_vec2(v)
    }
}

impl From<Position> for Vec2 {
    fn from(p: Position) -> Self {
        p.0
    }
}
