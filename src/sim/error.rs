//! Error types for the simulation core
//!
//! Every failure here is an invariant violation surfaced to the caller.
//! Nothing is retried internally.

use thiserror::Error;

/// Simulation errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    /// A scalar is NaN or infinite
    #[error("invalid number: {value} is not finite")]
    InvalidNumber { value: f32 },

    /// A scalar violates a domain constraint
    #[error("value {value} out of range: {reason}")]
    OutOfRange { value: f32, reason: &'static str },

    /// A vector fails finiteness or normalization checks
    #[error("invalid vector ({x}, {y}): {reason}")]
    InvalidVector {
        x: f32,
        y: f32,
        reason: &'static str,
    },

    /// A required argument is absent or unusable
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },
}

impl SimError {
    /// Rewrap a guard failure as an `InvalidArgument` naming the parameter
    pub fn for_argument(self, name: &'static str) -> Self {
        match self {
            Self::InvalidArgument { .. } => self,
            other => Self::InvalidArgument {
                name,
                reason: other.to_string(),
            },
        }
    }

    /// A required reference was not supplied
    pub fn missing(name: &'static str) -> Self {
        Self::InvalidArgument {
            name,
            reason: "required value is absent".to_string(),
        }
    }
}

/// Result type for simulation operations
pub type Result<T> = std::result::Result<T, SimError>;
