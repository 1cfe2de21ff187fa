//! The player-controlled actor
//!
//! Moves only vertically. Gravity is a per-tick velocity increment, not
//! scaled by wall-clock time.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::config::GameConfig;

/// The falling entity the player keeps airborne
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    /// Constant horizontal position (left edge)
    pub x: f32,
    /// Top-left y coordinate
    pub y: f32,
    /// Vertical velocity in pixels per tick (positive is down)
    pub vel: f32,
    /// Square hitbox side length
    pub size: f32,
}

impl Actor {
    /// Actor at its start position, at rest
    pub fn new(config: &GameConfig) -> Self {
        Self {
            x: config.actor_x,
            y: config.actor_start_y(),
            vel: 0.0,
            size: config.actor_size,
        }
    }

    /// Return to the start position and zero velocity
    pub fn reset(&mut self, config: &GameConfig) {
        *self = Self::new(config);
    }

    /// Advance one tick: accelerate, move, then clamp to the screen.
    ///
    /// Returns `true` when the actor reached the floor. The ceiling clamps
    /// without touching velocity.
    #[must_use]
    pub fn integrate(&mut self, gravity: f32, screen_height: f32) -> bool {
        self.vel += gravity;
        self.y += self.vel;

        if self.y < 0.0 {
            self.y = 0.0;
        }

        let floor = screen_height - self.size;
        if self.y > floor {
            self.y = floor;
            return true;
        }
        false
    }

    /// Overwrite velocity with a flap impulse
    #[inline]
    pub fn apply_impulse(&mut self, impulse: f32) {
        self.vel = impulse;
    }

    /// Current hitbox
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(Vec2::new(self.x, self.y), Vec2::splat(self.size))
    }

    /// Horizontal center used for scoring
    #[inline]
    pub fn center_x(&self) -> f32 {
        self.x + self.size / 2.0
    }
}
