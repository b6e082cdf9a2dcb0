//! Simulation error types
//!
//! The simulation itself has very few failure modes: life is clamped on write
//! and an empty pool is valid. Errors come from configuration (bad spreads,
//! unreadable settings files) and from geometry that cannot be normalized.

use std::fmt;

/// Top-level error for the particle simulation.
#[derive(Debug)]
pub enum SimError {
    /// A vector with zero (or non-finite) length was normalized.
    DegenerateVector,

    /// A spread range contains a non-finite bound or has a non-finite width.
    InvalidSpread {
        /// Which spread was rejected (`"x"`, `"gravity"`, ...).
        name: &'static str,
        min: f32,
        max: f32,
    },

    /// Baseline particle life must be finite and strictly positive.
    InvalidParticleLife { value: f32 },

    /// Settings file could not be read.
    Io(std::io::Error),

    /// Settings JSON could not be parsed.
    Parse(serde_json::Error),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::DegenerateVector => {
                write!(f, "cannot normalize a zero-length vector")
            }
            SimError::InvalidSpread { name, min, max } => write!(
                f,
                "spread '{}' = [{}, {}] is not a finite range",
                name, min, max
            ),
            SimError::InvalidParticleLife { value } => {
                write!(f, "particle life must be positive, got {}", value)
            }
            SimError::Io(err) => write!(f, "failed to read settings: {}", err),
            SimError::Parse(err) => write!(f, "failed to parse settings: {}", err),
        }
    }
}

impl std::error::Error for SimError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimError::Io(err) => Some(err),
            SimError::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SimError {
    fn from(err: std::io::Error) -> Self {
        SimError::Io(err)
    }
}

impl From<serde_json::Error> for SimError {
    fn from(err: serde_json::Error) -> Self {
        SimError::Parse(err)
    }
}

/// Convenience alias: a `Result` using `SimError` as the error type.
pub type SimResult<T> = Result<T, SimError>;
