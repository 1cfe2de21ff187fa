//! Configuration errors
//!
//! Collisions are gameplay outcomes, not errors. The only fault the core can
//! report is a configuration it refuses to run.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },

    #[error("{field} must be greater than zero, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    #[error("actor ({size}px at x={x}) does not fit a {width}x{height} screen")]
    ActorDoesNotFit {
        x: f32,
        size: f32,
        width: f32,
        height: f32,
    },

    #[error("impulse must point upward (negative), got {value}")]
    ImpulseNotUpward { value: f32 },

    #[error("recycle spacing range is empty: min {min} >= max {max}")]
    EmptyRecycleSpacing { min: f32, max: f32 },

    #[error("no valid gap position: top height range [{low}, {high}) is empty")]
    EmptyTopHeightRange { low: i32, high: i32 },

    #[error("max_substeps must be at least 1")]
    ZeroSubsteps,

    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}
