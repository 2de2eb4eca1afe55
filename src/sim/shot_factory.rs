//! Shot presets
//!
//! Each preset is a fixed (speed, damage) pair fed through [`Shot::new`], so
//! presets inherit its validation.

use serde::{Deserialize, Serialize};

use super::direction::Direction;
use super::error::Result;
use super::position::Position;
use super::shot::Shot;

/// Named weapon presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShotKind {
    Scatter,
    Sniper,
    Cannon,
    #[default]
    Laser,
}

impl ShotKind {
    pub const ALL: [ShotKind; 4] = [
        ShotKind::Scatter,
        ShotKind::Sniper,
        ShotKind::Cannon,
        ShotKind::Laser,
    ];

    pub fn speed(&self) -> f32 {
        match self {
            ShotKind::Scatter => 3.0,
            ShotKind::Sniper => 50.0,
            ShotKind::Cannon => 2.0,
            ShotKind::Laser => 10.0,
        }
    }

    pub fn damage(&self) -> f32 {
        match self {
            ShotKind::Scatter => 3.0,
            ShotKind::Sniper => 15.0,
            ShotKind::Cannon => 20.0,
            ShotKind::Laser => 3.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShotKind::Scatter => "scatter",
            ShotKind::Sniper => "sniper",
            ShotKind::Cannon => "cannon",
            ShotKind::Laser => "laser",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "scatter" => Some(ShotKind::Scatter),
            "sniper" => Some(ShotKind::Sniper),
            "cannon" => Some(ShotKind::Cannon),
            "laser" => Some(ShotKind::Laser),
            _ => None,
        }
    }

    /// Build a shot of this kind
    pub fn fire(&self, position: Position, direction: Direction) -> Result<Shot> {
        Shot::new(position, direction, self.speed(), self.damage())
    }
}

pub fn scatter(position: Position, direction: Direction) -> Result<Shot> {
    ShotKind::Scatter.fire(position, direction)
}

pub fn sniper(position: Position, direction: Direction) -> Result<Shot> {
    ShotKind::Sniper.fire(position, direction)
}

pub fn cannon(position: Position, direction: Direction) -> Result<Shot> {
    ShotKind::Cannon.fire(position, direction)
}

pub fn laser(position: Position, direction: Direction) -> Result<Shot> {
    ShotKind::Laser.fire(position, direction)
}

/// Fully specified shot
pub fn custom(position: Position, direction: Direction, speed: f32, damage: f32) -> Result<Shot> {
    Shot::new(position, direction, speed, damage)
}

/// Stationary, harmless placeholder at the origin
pub fn noop() -> Shot {
    // Zero speed and damage always validate.
    match Shot::new(Position::ORIGIN, Direction::ZERO, 0.0, 0.0) {
        Ok(shot) => shot,
        Err(err) => unreachable!("zeroed shot rejected: {err}"),
    }
}
