//! Battle Stars - a minimal arcade shooter simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (validated geometry, shots, collisions, game state)
//! - `renderer`: Drawing surface contract and a headless vertex surface
//! - `settings`: Data-driven match configuration

pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};

/// Default tuning constants
pub mod consts {
    use glam::Vec2;

    /// Arena dimensions (y grows downward)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Player defaults
    pub const PLAYER_SIZE: Vec2 = Vec2::new(40.0, 24.0);
    pub const PLAYER_HEALTH: f32 = 100.0;
    /// Distance per tick at full input
    pub const PLAYER_SPEED: f32 = 4.0;
    pub const PLAYER_FIRE_COOLDOWN_TICKS: u32 = 8;

    /// Enemy defaults
    pub const ENEMY_COUNT: u32 = 5;
    pub const ENEMY_SIZE: Vec2 = Vec2::new(36.0, 24.0);
    pub const ENEMY_HEALTH: f32 = 30.0;
    pub const ENEMY_FIRE_INTERVAL_TICKS: u32 = 90;
    /// Upper bound on `enemy_count` accepted from settings
    pub const MAX_ENEMY_COUNT: u32 = 256;

    /// Headless run cap (one minute at 60 ticks/s)
    pub const MAX_TICKS: u64 = 60 * 60;

    /// Score per destroyed enemy
    pub const ENEMY_SCORE: u64 = 100;
}
