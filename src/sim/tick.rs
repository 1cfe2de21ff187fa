//! Fixed timestep simulation tick
//!
//! Order within a tick:
//! 1. Actor physics (a floor hit ends the tick immediately)
//! 2. Obstacle scroll and recycle
//! 3. Collision against every obstacle's blocks
//! 4. Scoring for obstacles the actor has passed
//!
//! Collision does not short-circuit scoring: both are reported and the
//! caller applies the score before ending the run.

use rand::Rng;

use super::state::{CollisionCause, StepOutcome, World};
use crate::config::GameConfig;

/// Advance the world by one tick
pub fn step<R: Rng>(world: &mut World<R>, config: &GameConfig) -> StepOutcome {
    let mut outcome = StepOutcome::default();

    if world.actor.integrate(config.gravity, config.screen_height) {
        outcome.collided = true;
        outcome.cause = Some(CollisionCause::Floor);
        return outcome;
    }

    world.obstacles.advance(config);

    let actor_box = world.actor.bounds();
    let actor_center = world.actor.center_x();

    for (index, obstacle) in world.obstacles.as_mut_slice().iter_mut().enumerate() {
        let hit = actor_box.intersects(&obstacle.top_rect(config))
            || actor_box.intersects(&obstacle.bottom_rect(config));
        if hit {
            if !outcome.collided {
                outcome.cause = Some(CollisionCause::Obstacle { index });
            }
            outcome.collided = true;
        }

        if !obstacle.scored && actor_center > obstacle.right_edge(config) {
            obstacle.scored = true;
            outcome.scored += 1;
        }
    }

    outcome
}
