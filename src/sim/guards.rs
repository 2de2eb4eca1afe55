//! Numeric guards
//!
//! Pure validation over scalars and 2D vectors. The value types and the
//! shot constructor compose these rather than repeating the checks.

use glam::Vec2;

use super::error::{Result, SimError};

/// Tolerance on the Euclidean norm for a vector to count as unit length
pub const NORMALIZATION_EPSILON: f32 = 1e-4;

/// Fails with `InvalidNumber` when `value` is NaN or infinite
#[inline]
pub fn require_finite(value: f32) -> Result<f32> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SimError::InvalidNumber { value })
    }
}

/// Fails with `OutOfRange` when `value < 0`
#[inline]
pub fn require_non_negative(value: f32) -> Result<f32> {
    if value < 0.0 {
        Err(SimError::OutOfRange {
            value,
            reason: "must not be negative",
        })
    } else {
        Ok(value)
    }
}

/// Fails with `OutOfRange` when `value == 0` (either sign)
#[inline]
pub fn require_non_zero(value: f32) -> Result<f32> {
    if value == 0.0 {
        Err(SimError::OutOfRange {
            value,
            reason: "must not be zero",
        })
    } else {
        Ok(value)
    }
}

/// Fails with `InvalidVector` unless both components pass `require_finite`
#[inline]
pub fn require_finite_vector(v: Vec2) -> Result<Vec2> {
    match (require_finite(v.x), require_finite(v.y)) {
        (Ok(_), Ok(_)) => Ok(v),
        _ => Err(SimError::InvalidVector {
            x: v.x,
            y: v.y,
            reason: "components must be finite",
        }),
    }
}

/// Passes for the zero vector or a vector whose norm is within
/// [`NORMALIZATION_EPSILON`] of 1.0
#[inline]
pub fn require_normalized_or_zero(v: Vec2) -> Result<Vec2> {
    if v == Vec2::ZERO || (v.length() - 1.0).abs() <= NORMALIZATION_EPSILON {
        Ok(v)
    } else {
        Err(SimError::InvalidVector {
            x: v.x,
            y: v.y,
            reason: "must be zero or unit length",
        })
    }
}
