//! Deterministic simulation module
//!
//! All gameplay logic lives here:
//! - Validated geometry (`Position`, `Direction`) guarded by `guards`
//! - Shots and their presets
//! - Collision and boundary checks consulted every tick
//! - No rendering or platform dependencies

pub mod battle_star;
pub mod boundary;
pub mod collision;
pub mod direction;
pub mod error;
pub mod guards;
pub mod position;
pub mod shot;
pub mod shot_factory;
pub mod state;
pub mod tick;

pub use battle_star::{Allegiance, BattleStar};
pub use boundary::{ArenaBounds, BoundaryChecker};
pub use collision::{CollisionChecker, Container, PointCollision};
pub use direction::Direction;
pub use error::{Result, SimError};
pub use position::Position;
pub use shot::Shot;
pub use shot_factory::ShotKind;
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{TickInput, tick};
