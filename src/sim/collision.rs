//! Shot vs. battle star collision
//!
//! The checker knows nothing about hull shapes. Anything that can answer
//! "is this point inside me" can be hit.

use super::error::{Result, SimError};
use super::position::Position;
use super::shot::Shot;

/// Point-containment capability
///
/// Implementations must be pure geometric tests.
pub trait Container {
    fn contains(&self, point: Position) -> bool;
}

/// Decides whether a shot overlaps a container
pub trait CollisionChecker {
    fn check_collision(&self, container: &dyn Container, shot: &Shot) -> bool;

    /// Variant for callers that resolve entities by lookup
    ///
    /// Fails with `InvalidArgument` when either side is absent.
    fn try_check_collision(
        &self,
        container: Option<&dyn Container>,
        shot: Option<&Shot>,
    ) -> Result<bool> {
        let container = container.ok_or_else(|| SimError::missing("battle_star"))?;
        let shot = shot.ok_or_else(|| SimError::missing("shot"))?;
        Ok(self.check_collision(container, shot))
    }
}

/// Tests the shot's current position against the container
///
/// Asks the container exactly once per call and caches nothing. Activity
/// state is the caller's concern.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointCollision;

impl CollisionChecker for PointCollision {
    fn check_collision(&self, container: &dyn Container, shot: &Shot) -> bool {
        container.contains(shot.position())
    }
}
