//! Pipe Dash - a side-scrolling gap-dodging game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacles, collisions, scoring)
//! - `game`: Lifecycle state machine driving the simulation
//! - `driver`: Periodic tick driver with cancellation tokens
//! - `session`: Score and best-score bookkeeping
//! - `config`: Immutable, validated game tuning
//! - `autopilot`: Scripted input for headless runs

pub mod autopilot;
pub mod config;
pub mod driver;
pub mod error;
pub mod game;
pub mod session;
pub mod sim;

pub use autopilot::Autopilot;
pub use config::GameConfig;
pub use error::ConfigError;
pub use game::{Game, GameEvent, Input, Snapshot};
pub use session::{GamePhase, Session};

/// Reference configuration constants
pub mod consts {
    /// Fixed simulation tick interval (~60 Hz)
    pub const TICK_INTERVAL_MS: u64 = 16;
    /// Maximum ticks run per host frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Playfield dimensions
    pub const SCREEN_WIDTH: f32 = 360.0;
    pub const SCREEN_HEIGHT: f32 = 640.0;

    /// Actor defaults - fixed column, square hitbox
    pub const ACTOR_X: f32 = 80.0;
    pub const ACTOR_SIZE: f32 = 34.0;

    /// Per-tick velocity increment (pixels/tick²)
    pub const GRAVITY: f32 = 0.5;
    /// Velocity written on each flap (negative is up)
    pub const IMPULSE: f32 = -8.5;

    /// Obstacle geometry
    pub const OBSTACLE_WIDTH: f32 = 64.0;
    pub const GAP_SIZE: f32 = 170.0;
    pub const SCROLL_SPEED: f32 = 2.5;
    pub const MIN_TOP_MARGIN: f32 = 60.0;
    pub const MIN_BOTTOM_MARGIN: f32 = 60.0;

    /// Extra spacing drawn when an obstacle re-enters on the right
    pub const RECYCLE_SPACING_MIN: f32 = 60.0;
    pub const RECYCLE_SPACING_MAX: f32 = 180.0;

    /// Initial layout: first obstacle offset past the right edge, then stagger
    pub const INITIAL_OFFSET: f32 = 120.0;
    pub const OBSTACLE_SPACING: f32 = 220.0;

    /// Fixed obstacle slot count
    pub const OBSTACLE_COUNT: usize = 2;
}
