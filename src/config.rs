//! Game configuration
//!
//! Supplied once when a session is built and immutable afterwards. Loaded
//! from JSON where every field is optional and falls back to the reference
//! tuning in [`crate::consts`].

use std::ops::Range;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Tunable geometry, physics, and timing for one game session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Playfield ===
    pub screen_width: f32,
    pub screen_height: f32,

    // === Actor ===
    /// Constant horizontal position (left edge)
    pub actor_x: f32,
    /// Square hitbox side length
    pub actor_size: f32,
    /// Velocity added every tick
    pub gravity: f32,
    /// Velocity written by a flap (negative moves up)
    pub impulse: f32,

    // === Obstacles ===
    pub obstacle_width: f32,
    pub gap_size: f32,
    /// Leftward movement per tick
    pub scroll_speed: f32,
    pub min_top_margin: f32,
    pub min_bottom_margin: f32,
    pub recycle_spacing_min: f32,
    pub recycle_spacing_max: f32,
    /// Distance past the right edge of the first obstacle at game start
    pub initial_offset: f32,
    /// Horizontal stagger between obstacles at game start
    pub obstacle_spacing: f32,

    // === Timing ===
    pub tick_interval_ms: u64,
    pub max_substeps: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,

            actor_x: ACTOR_X,
            actor_size: ACTOR_SIZE,
            gravity: GRAVITY,
            impulse: IMPULSE,

            obstacle_width: OBSTACLE_WIDTH,
            gap_size: GAP_SIZE,
            scroll_speed: SCROLL_SPEED,
            min_top_margin: MIN_TOP_MARGIN,
            min_bottom_margin: MIN_BOTTOM_MARGIN,
            recycle_spacing_min: RECYCLE_SPACING_MIN,
            recycle_spacing_max: RECYCLE_SPACING_MAX,
            initial_offset: INITIAL_OFFSET,
            obstacle_spacing: OBSTACLE_SPACING,

            tick_interval_ms: TICK_INTERVAL_MS,
            max_substeps: MAX_SUBSTEPS,
        }
    }
}

impl GameConfig {
    /// Parse a JSON document and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Reject any configuration the simulation cannot run consistently
    pub fn validate(&self) -> Result<(), ConfigError> {
        let floats = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("actor_x", self.actor_x),
            ("actor_size", self.actor_size),
            ("gravity", self.gravity),
            ("impulse", self.impulse),
            ("obstacle_width", self.obstacle_width),
            ("gap_size", self.gap_size),
            ("scroll_speed", self.scroll_speed),
            ("min_top_margin", self.min_top_margin),
            ("min_bottom_margin", self.min_bottom_margin),
            ("recycle_spacing_min", self.recycle_spacing_min),
            ("recycle_spacing_max", self.recycle_spacing_max),
            ("initial_offset", self.initial_offset),
            ("obstacle_spacing", self.obstacle_spacing),
        ];
        for (field, value) in floats {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field });
            }
        }

        let positive = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("actor_size", self.actor_size),
            ("obstacle_width", self.obstacle_width),
            ("gap_size", self.gap_size),
            ("scroll_speed", self.scroll_speed),
        ];
        for (field, value) in positive {
            if value <= 0.0 {
                return Err(ConfigError::NonPositive {
                    field,
                    value: value.into(),
                });
            }
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::NonPositive {
                field: "tick_interval_ms",
                value: 0.0,
            });
        }
        if self.max_substeps == 0 {
            return Err(ConfigError::ZeroSubsteps);
        }

        let non_negative = [
            ("actor_x", self.actor_x),
            ("gravity", self.gravity),
            ("min_top_margin", self.min_top_margin),
            ("min_bottom_margin", self.min_bottom_margin),
            ("recycle_spacing_min", self.recycle_spacing_min),
            ("initial_offset", self.initial_offset),
            ("obstacle_spacing", self.obstacle_spacing),
        ];
        for (field, value) in non_negative {
            if value < 0.0 {
                return Err(ConfigError::Negative {
                    field,
                    value: value.into(),
                });
            }
        }

        if self.actor_size >= self.screen_height || self.actor_x + self.actor_size > self.screen_width
        {
            return Err(ConfigError::ActorDoesNotFit {
                x: self.actor_x,
                size: self.actor_size,
                width: self.screen_width,
                height: self.screen_height,
            });
        }

        if self.impulse >= 0.0 {
            return Err(ConfigError::ImpulseNotUpward {
                value: self.impulse,
            });
        }

        if self.recycle_spacing_min >= self.recycle_spacing_max {
            return Err(ConfigError::EmptyRecycleSpacing {
                min: self.recycle_spacing_min,
                max: self.recycle_spacing_max,
            });
        }

        let range = self.top_height_range();
        if range.is_empty() {
            return Err(ConfigError::EmptyTopHeightRange {
                low: range.start,
                high: range.end,
            });
        }

        Ok(())
    }

    /// Space below the gap that must stay free: the gap itself plus the margin
    #[inline]
    pub fn reserved_bottom_margin(&self) -> f32 {
        self.gap_size + self.min_bottom_margin
    }

    /// Half-open integer range a recycled obstacle's top height is drawn from
    pub fn top_height_range(&self) -> Range<i32> {
        let low = self.min_top_margin.ceil() as i32;
        let high = (self.screen_height - self.reserved_bottom_margin()).floor() as i32;
        low..high
    }

    /// Actor's vertical start position (centered)
    #[inline]
    pub fn actor_start_y(&self) -> f32 {
        (self.screen_height - self.actor_size) / 2.0
    }

    /// Lowest legal actor position (top-left y)
    #[inline]
    pub fn actor_floor_y(&self) -> f32 {
        self.screen_height - self.actor_size
    }

    /// Nominal driver period
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}
