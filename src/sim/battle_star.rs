//! Battle stars: the player craft and enemy craft
//!
//! Hulls are axis-aligned rectangles. The collision checker only ever sees
//! them through [`Container`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::boundary::BoundaryChecker;
use super::collision::Container;
use super::direction::Direction;
use super::error::{Result, SimError};
use super::guards::{require_finite, require_finite_vector, require_non_negative};
use super::position::Position;

/// Which side a battle star fights for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Allegiance {
    Player,
    Enemy,
}

impl Allegiance {
    /// Firing heading. The player sits at the bottom and fires up.
    pub fn facing(&self) -> Direction {
        match self {
            Allegiance::Player => Direction::UP,
            Allegiance::Enemy => Direction::DOWN,
        }
    }
}

/// A craft with a rectangular hull and hit points
#[derive(Debug, Clone)]
pub struct BattleStar {
    pub id: u32,
    pub allegiance: Allegiance,
    center: Position,
    half_extents: Vec2,
    health: f32,
    max_health: f32,
    /// Ticks until the next shot is allowed
    pub fire_cooldown: u32,
}

impl BattleStar {
    /// Hull size must be finite and positive on both axes; health finite
    /// and non-negative
    pub fn new(
        id: u32,
        allegiance: Allegiance,
        center: Position,
        size: Vec2,
        health: f32,
    ) -> Result<Self> {
        let size = require_finite_vector(size).map_err(|e| e.for_argument("size"))?;
        if size.x <= 0.0 || size.y <= 0.0 {
            return Err(SimError::InvalidArgument {
                name: "size",
                reason: format!("hull size must be positive, got {size}"),
            });
        }
        let health = require_finite(health)
            .and_then(require_non_negative)
            .map_err(|e| e.for_argument("health"))?;

        Ok(Self {
            id,
            allegiance,
            center,
            half_extents: size / 2.0,
            health,
            max_health: health,
            fire_cooldown: 0,
        })
    }

    #[inline]
    pub fn center(&self) -> Position {
        self.center
    }

    #[inline]
    pub fn half_extents(&self) -> Vec2 {
        self.half_extents
    }

    pub fn size(&self) -> Vec2 {
        self.half_extents * 2.0
    }

    #[inline]
    pub fn health(&self) -> f32 {
        self.health
    }

    pub fn max_health(&self) -> f32 {
        self.max_health
    }

    /// Remaining health in 0..=1
    pub fn health_fraction(&self) -> f32 {
        if self.max_health > 0.0 {
            self.health / self.max_health
        } else {
            0.0
        }
    }

    pub fn is_destroyed(&self) -> bool {
        self.health <= 0.0
    }

    /// Apply damage, floored at zero. Returns true if this hit destroyed it.
    pub fn take_damage(&mut self, amount: f32) -> bool {
        if self.is_destroyed() {
            return false;
        }
        self.health = (self.health - amount.max(0.0)).max(0.0);
        self.is_destroyed()
    }

    /// Translate, keeping the whole hull inside the arena
    ///
    /// A non-finite step leaves the craft where it is.
    pub fn move_by(&mut self, delta: Vec2, arena: &BoundaryChecker) {
        match self.center.checked_add(delta) {
            Ok(next) => self.center = arena.clamp_inset(next, self.half_extents),
            Err(err) => log::warn!("battle star {} ignored move: {err}", self.id),
        }
    }

    /// Firing point on the hull edge the craft faces
    pub fn muzzle(&self) -> Position {
        let facing = self.allegiance.facing();
        let offset = facing.as_vec2() * self.half_extents;
        // Hull extents are finite, so this stays finite.
        Position::new_unchecked(self.center.as_vec2() + offset)
    }
}

impl Container for BattleStar {
    fn contains(&self, point: Position) -> bool {
        let d = (point.as_vec2() - self.center.as_vec2()).abs();
        d.x <= self.half_extents.x && d.y <= self.half_extents.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn star(x: f32, y: f32) -> BattleStar {
        BattleStar::new(
            1,
            Allegiance::Enemy,
            Position::new(x, y).unwrap(),
            Vec2::new(20.0, 10.0),
            30.0,
        )
        .unwrap()
    }

    #[test]
    fn test_contains_inclusive_edges() {
        let s = star(100.0, 100.0);
        assert!(s.contains(Position::new(100.0, 100.0).unwrap()));
        assert!(s.contains(Position::new(110.0, 105.0).unwrap()));
        assert!(!s.contains(Position::new(110.1, 100.0).unwrap()));
        assert!(!s.contains(Position::new(100.0, 94.0).unwrap()));
    }

    #[test]
    fn test_take_damage() {
        let mut s = star(0.0, 0.0);
        assert!(!s.take_damage(10.0));
        assert_eq!(s.health(), 20.0);
        assert!((s.health_fraction() - 2.0 / 3.0).abs() < 1e-6);
        assert!(s.take_damage(50.0));
        assert_eq!(s.health(), 0.0);
        assert!(s.is_destroyed());
        // Already destroyed: no second kill
        assert!(!s.take_damage(5.0));
    }

    #[test]
    fn test_move_by_clamps_hull_into_arena() {
        let arena = BoundaryChecker::from_extents(0.0, 200.0, 0.0, 100.0).unwrap();
        let mut s = star(50.0, 50.0);
        s.move_by(Vec2::new(-500.0, 500.0), &arena);
        assert_eq!(s.center(), Position::new(10.0, 95.0).unwrap());

        s.move_by(Vec2::new(f32::NAN, 0.0), &arena);
        assert_eq!(s.center(), Position::new(10.0, 95.0).unwrap());
    }

    #[test]
    fn test_muzzle_faces_allegiance() {
        let enemy = star(50.0, 50.0);
        assert_eq!(enemy.muzzle(), Position::new(50.0, 55.0).unwrap());

        let player = BattleStar::new(
            2,
            Allegiance::Player,
            Position::new(50.0, 50.0).unwrap(),
            Vec2::new(20.0, 10.0),
            30.0,
        )
        .unwrap();
        assert_eq!(player.muzzle(), Position::new(50.0, 45.0).unwrap());
    }

    #[test]
    fn test_new_rejects_bad_hull_and_health() {
        let at = Position::new(50.0, 50.0).unwrap();
        for size in [
            Vec2::new(f32::NAN, 10.0),
            Vec2::new(10.0, f32::INFINITY),
            Vec2::new(0.0, 10.0),
            Vec2::new(10.0, -4.0),
        ] {
            assert!(matches!(
                BattleStar::new(1, Allegiance::Enemy, at, size, 30.0),
                Err(SimError::InvalidArgument { name: "size", .. })
            ));
        }
        for health in [-1.0, f32::NAN, f32::INFINITY] {
            assert!(matches!(
                BattleStar::new(1, Allegiance::Enemy, at, Vec2::splat(10.0), health),
                Err(SimError::InvalidArgument { name: "health", .. })
            ));
        }
    }
}
