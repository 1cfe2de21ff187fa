//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Injected, seedable RNG only
//! - Fixed obstacle slots, stable iteration order
//! - No rendering or platform dependencies

pub mod actor;
pub mod obstacles;
pub mod rect;
pub mod state;
pub mod tick;

pub use actor::Actor;
pub use obstacles::{Obstacle, ObstacleField};
pub use rect::{Rect, intersects};
pub use state::{CollisionCause, StepOutcome, World};
pub use tick::step;
