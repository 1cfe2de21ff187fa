//! Simulation state
//!
//! Everything one tick mutates lives here. The lifecycle controller owns the
//! only instance; presentation sees it through snapshots.

use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::actor::Actor;
use super::obstacles::ObstacleField;
use crate::config::GameConfig;

/// What ended a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionCause {
    /// Actor reached the bottom of the screen
    Floor,
    /// Actor touched the top or bottom block of the obstacle in this slot
    Obstacle { index: usize },
}

/// Result of a single simulation tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepOutcome {
    /// The run ends after this tick
    pub collided: bool,
    /// Points earned this tick
    pub scored: u32,
    /// First collision detected this tick
    pub cause: Option<CollisionCause>,
}

/// Actor plus obstacle field
#[derive(Debug, Clone)]
pub struct World<R = Pcg32> {
    pub actor: Actor,
    pub obstacles: ObstacleField<R>,
}

impl<R: Rng> World<R> {
    pub fn new(config: &GameConfig, rng: R) -> Self {
        Self {
            actor: Actor::new(config),
            obstacles: ObstacleField::new(config, rng),
        }
    }

    /// Back to the start layout for a fresh game
    pub fn reset(&mut self, config: &GameConfig) {
        self.actor.reset(config);
        self.obstacles.reset(config);
    }
}
