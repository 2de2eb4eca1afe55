//! Projectile entity
//!
//! A shot flies in a straight line at a constant per-tick speed until it is
//! deactivated. Deactivation is terminal.

use super::direction::Direction;
use super::error::Result;
use super::guards::{require_finite, require_non_negative};
use super::position::Position;

/// A shot in flight
#[derive(Debug, Clone, PartialEq)]
pub struct Shot {
    position: Position,
    direction: Direction,
    /// Distance covered per tick
    speed: f32,
    damage: f32,
    active: bool,
}

impl Shot {
    /// Create an active shot. Speed and damage must be finite and non-negative.
    pub fn new(position: Position, direction: Direction, speed: f32, damage: f32) -> Result<Self> {
        let speed = validate_magnitude(speed).map_err(|e| e.for_argument("speed"))?;
        let damage = validate_magnitude(damage).map_err(|e| e.for_argument("damage"))?;

        Ok(Self {
            position,
            direction,
            speed,
            damage,
            active: true,
        })
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    #[inline]
    pub fn damage(&self) -> f32 {
        self.damage
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Move one tick along the heading
    ///
    /// No-op when inactive or stationary. A step that would leave finite
    /// space retires the shot instead.
    pub fn advance(&mut self) {
        if !self.active || self.speed == 0.0 {
            return;
        }

        match self.position.checked_add(self.direction * self.speed) {
            Ok(next) => self.position = next,
            Err(err) => {
                log::warn!("shot retired, step left finite space: {err}");
                self.active = false;
            }
        }
    }

    /// Idempotent
    pub fn deactivate(&mut self) {
        self.active = false;
    }
}

fn validate_magnitude(value: f32) -> Result<f32> {
    require_finite(value).and_then(require_non_negative)
}
