//! Match settings
//!
//! Loaded from a JSON file at startup; anything missing falls back to the
//! defaults in [`crate::consts`].

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::guards::{require_finite, require_non_negative, require_non_zero};
use crate::sim::{ArenaBounds, BoundaryChecker, Position, ShotKind, SimError};

/// Settings loading errors
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid settings: {0}")]
    Invalid(#[from] SimError),
}

/// Match configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Seed for enemy placement and fire staggering
    pub seed: u64,
    pub arena: ArenaBounds,

    // === Player ===
    pub player_spawn: Position,
    /// Hull width/height
    pub player_size: Vec2,
    pub player_health: f32,
    /// Distance moved per tick at full input
    pub player_speed: f32,
    pub player_weapon: ShotKind,
    pub player_fire_cooldown_ticks: u32,

    // === Enemies ===
    pub enemy_count: u32,
    pub enemy_size: Vec2,
    pub enemy_health: f32,
    pub enemy_weapon: ShotKind,
    pub enemy_fire_interval_ticks: u32,

    /// Upper bound for a headless run
    pub max_ticks: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: 0x5eed,
            arena: ArenaBounds {
                min_x: 0.0,
                max_x: ARENA_WIDTH,
                min_y: 0.0,
                max_y: ARENA_HEIGHT,
            },

            player_spawn: Position::new_unchecked(Vec2::new(
                ARENA_WIDTH / 2.0,
                ARENA_HEIGHT - PLAYER_SIZE.y,
            )),
            player_size: PLAYER_SIZE,
            player_health: PLAYER_HEALTH,
            player_speed: PLAYER_SPEED,
            player_weapon: ShotKind::Laser,
            player_fire_cooldown_ticks: PLAYER_FIRE_COOLDOWN_TICKS,

            enemy_count: ENEMY_COUNT,
            enemy_size: ENEMY_SIZE,
            enemy_health: ENEMY_HEALTH,
            enemy_weapon: ShotKind::Cannon,
            enemy_fire_interval_ticks: ENEMY_FIRE_INTERVAL_TICKS,

            max_ticks: MAX_TICKS,
        }
    }
}

impl Settings {
    /// Parse and validate
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read a settings file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Read a settings file, falling back to defaults on any failure
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::from_file(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(err) => {
                log::warn!("Using default settings ({}: {err})", path.display());
                Self::default()
            }
        }
    }

    /// Check bounds and tuning values
    pub fn validate(&self) -> Result<(), SimError> {
        BoundaryChecker::new(self.arena)?;

        for (name, value) in [
            ("player_health", self.player_health),
            ("player_speed", self.player_speed),
            ("enemy_health", self.enemy_health),
        ] {
            require_finite(value)
                .and_then(require_non_negative)
                .map_err(|e| e.for_argument(name))?;
        }
        require_non_zero(self.player_health).map_err(|e| e.for_argument("player_health"))?;
        require_non_zero(self.enemy_health).map_err(|e| e.for_argument("enemy_health"))?;

        if self.enemy_count > MAX_ENEMY_COUNT {
            return Err(SimError::InvalidArgument {
                name: "enemy_count",
                reason: format!(
                    "at most {MAX_ENEMY_COUNT} enemies, got {}",
                    self.enemy_count
                ),
            });
        }

        for (name, size) in [
            ("player_size", self.player_size),
            ("enemy_size", self.enemy_size),
        ] {
            if !size.is_finite() || size.x <= 0.0 || size.y <= 0.0 {
                return Err(SimError::InvalidArgument {
                    name,
                    reason: format!("hull size must be finite and positive, got {size}"),
                });
            }
        }

        Ok(())
    }
}
