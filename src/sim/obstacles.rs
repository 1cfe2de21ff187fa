//! Obstacle pairs and their in-place recycling
//!
//! The field holds a fixed number of slots. Obstacles scroll left every tick
//! and, once fully off the left edge, are respawned past the right edge with
//! new geometry. Slots are never added, removed, or reordered.

use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::config::GameConfig;
use crate::consts::OBSTACLE_COUNT;

/// A top block and a bottom block separated by a vertical gap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Left edge
    pub x: f32,
    /// Height of the top block; the gap starts here
    pub top_height: f32,
    /// Whether this obstacle already awarded its point this cycle
    pub scored: bool,
}

impl Obstacle {
    #[inline]
    pub fn right_edge(&self, config: &GameConfig) -> f32 {
        self.x + config.obstacle_width
    }

    /// Top block, from the ceiling down to the gap
    pub fn top_rect(&self, config: &GameConfig) -> Rect {
        Rect::new(self.x, 0.0, self.right_edge(config), self.top_height)
    }

    /// Bottom block, from the end of the gap down to the floor
    pub fn bottom_rect(&self, config: &GameConfig) -> Rect {
        Rect::new(
            self.x,
            self.top_height + config.gap_size,
            self.right_edge(config),
            config.screen_height,
        )
    }

    /// Fully past the left edge of the screen
    #[inline]
    pub fn is_offscreen(&self, config: &GameConfig) -> bool {
        self.right_edge(config) < 0.0
    }
}

/// Fixed ring of obstacles plus the random source for their geometry
#[derive(Debug, Clone)]
pub struct ObstacleField<R = Pcg32> {
    obstacles: [Obstacle; OBSTACLE_COUNT],
    rng: R,
}

impl<R: Rng> ObstacleField<R> {
    /// Lay out the default staggered start positions using `rng` for heights
    pub fn new(config: &GameConfig, mut rng: R) -> Self {
        let obstacles = std::array::from_fn(|i| Obstacle {
            x: initial_x(config, i),
            top_height: random_top_height(&mut rng, config),
            scored: false,
        });
        Self { obstacles, rng }
    }

    /// Restore the start layout with fresh heights (the rng stream continues)
    pub fn reset(&mut self, config: &GameConfig) {
        for (i, obstacle) in self.obstacles.iter_mut().enumerate() {
            obstacle.x = initial_x(config, i);
            obstacle.top_height = random_top_height(&mut self.rng, config);
            obstacle.scored = false;
        }
    }

    /// Scroll every obstacle left, then recycle those that left the screen.
    ///
    /// Returns the number of obstacles recycled this call.
    pub fn advance(&mut self, config: &GameConfig) -> usize {
        for obstacle in &mut self.obstacles {
            obstacle.x -= config.scroll_speed;
        }

        let mut recycled = 0;
        for (i, obstacle) in self.obstacles.iter_mut().enumerate() {
            if obstacle.is_offscreen(config) {
                let spacing = self
                    .rng
                    .random_range(config.recycle_spacing_min..config.recycle_spacing_max);
                obstacle.x = config.screen_width + spacing;
                obstacle.top_height = random_top_height(&mut self.rng, config);
                obstacle.scored = false;
                recycled += 1;
                log::debug!(
                    "Recycled obstacle {} to x={:.1} top={}",
                    i,
                    obstacle.x,
                    obstacle.top_height
                );
            }
        }
        recycled
    }

    /// Draw a top height from the field's random source
    pub fn random_top_height(&mut self, config: &GameConfig) -> f32 {
        random_top_height(&mut self.rng, config)
    }

    #[inline]
    pub fn as_slice(&self) -> &[Obstacle] {
        &self.obstacles
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [Obstacle] {
        &mut self.obstacles
    }

    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.iter()
    }
}

/// Start position of slot `index` in the default layout
fn initial_x(config: &GameConfig, index: usize) -> f32 {
    config.screen_width + config.initial_offset + index as f32 * config.obstacle_spacing
}

/// Uniform integer top height in `config.top_height_range()`.
///
/// The range is non-empty for any validated config.
fn random_top_height<R: Rng>(rng: &mut R, config: &GameConfig) -> f32 {
    rng.random_range(config.top_height_range()) as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;

    fn field(seed: u64) -> ObstacleField {
        ObstacleField::new(&GameConfig::default(), Pcg32::seed_from_u64(seed))
    }

    #[test]
    fn test_initial_layout_is_staggered_offscreen() {
        let config = GameConfig::default();
        let field = field(1);

        let xs: Vec<f32> = field.iter().map(|o| o.x).collect();
        assert_eq!(xs, vec![480.0, 700.0]);
        for obstacle in field.iter() {
            assert!(obstacle.x > config.screen_width);
            assert!(!obstacle.scored);
        }
    }

    #[test]
    fn test_advance_scrolls_without_recycling() {
        let config = GameConfig::default();
        let mut field = field(1);
        let before: Vec<Obstacle> = field.as_slice().to_vec();

        assert_eq!(field.advance(&config), 0);
        for (old, new) in before.iter().zip(field.iter()) {
            assert_eq!(new.x, old.x - config.scroll_speed);
            assert_eq!(new.top_height, old.top_height);
        }
    }

    #[test]
    fn test_right_edge_at_zero_is_still_onscreen() {
        let config = GameConfig::default();
        let mut field = field(2);
        field.as_mut_slice()[0].x = -config.obstacle_width + config.scroll_speed;
        field.as_mut_slice()[0].scored = true;

        assert_eq!(field.advance(&config), 0);
        assert_eq!(field.as_slice()[0].right_edge(&config), 0.0);
        assert!(field.as_slice()[0].scored);
    }

    #[test]
    fn test_recycle_uses_injected_rng_sequence() {
        let config = GameConfig::default();
        let mut field = field(42);

        // Reproduce the draws: two initial heights, then spacing and height
        let mut expected_rng = Pcg32::seed_from_u64(42);
        let _: i32 = expected_rng.random_range(config.top_height_range());
        let _: i32 = expected_rng.random_range(config.top_height_range());
        let spacing: f32 =
            expected_rng.random_range(config.recycle_spacing_min..config.recycle_spacing_max);
        let top: i32 = expected_rng.random_range(config.top_height_range());

        let second_before = field.as_slice()[1].clone();
        {
            let first = &mut field.as_mut_slice()[0];
            first.x = -config.obstacle_width;
            first.scored = true;
        }

        assert_eq!(field.advance(&config), 1);
        let first = &field.as_slice()[0];
        assert_eq!(first.x, config.screen_width + spacing);
        assert_eq!(first.top_height, top as f32);
        assert!(!first.scored);

        // The other slot only scrolled
        let second = &field.as_slice()[1];
        assert_eq!(second.x, second_before.x - config.scroll_speed);
        assert_eq!(second.top_height, second_before.top_height);
    }

    #[test]
    fn test_recycled_spacing_in_range() {
        let config = GameConfig::default();
        let mut field = field(9);
        for _ in 0..1_000 {
            field.as_mut_slice()[1].x = -config.obstacle_width - 1.0;
            field.advance(&config);
            let x = field.as_slice()[1].x;
            assert!(x >= config.screen_width + config.recycle_spacing_min);
            assert!(x < config.screen_width + config.recycle_spacing_max);
        }
    }

    #[test]
    fn test_ten_thousand_recycles_stay_in_range() {
        let config = GameConfig::default();
        let reserved = config.reserved_bottom_margin();
        let mut field = field(7);

        let mut recycles = 0;
        while recycles < 10_000 {
            recycles += field.advance(&config);
            for obstacle in field.iter() {
                assert!(obstacle.top_height >= config.min_top_margin);
                assert!(obstacle.top_height <= config.screen_height - reserved);
                assert_eq!(obstacle.top_height.fract(), 0.0);
            }
        }
    }

    #[test]
    fn test_reset_restores_layout() {
        let config = GameConfig::default();
        let mut field = field(3);
        for _ in 0..500 {
            field.advance(&config);
        }
        field.as_mut_slice()[0].scored = true;

        field.reset(&config);
        let xs: Vec<f32> = field.iter().map(|o| o.x).collect();
        assert_eq!(xs, vec![480.0, 700.0]);
        assert!(field.iter().all(|o| !o.scored));
    }

    #[test]
    fn test_block_rects_frame_the_gap() {
        let config = GameConfig::default();
        let obstacle = Obstacle {
            x: 100.0,
            top_height: 200.0,
            scored: false,
        };
        let top = obstacle.top_rect(&config);
        let bottom = obstacle.bottom_rect(&config);
        assert_eq!((top.min.y, top.max.y), (0.0, 200.0));
        assert_eq!((bottom.min.y, bottom.max.y), (370.0, 640.0));
        assert_eq!((top.min.x, top.max.x), (100.0, 164.0));
        assert_eq!((bottom.min.x, bottom.max.x), (100.0, 164.0));
    }

    proptest! {
        #[test]
        fn prop_top_height_respects_margins(seed in any::<u64>(), height in 291.0f32..2000.0) {
            let config = GameConfig { screen_height: height, ..Default::default() };
            prop_assume!(config.validate().is_ok());
            let mut field = ObstacleField::new(&config, Pcg32::seed_from_u64(seed));
            for _ in 0..64 {
                let top = field.random_top_height(&config);
                prop_assert!(top >= config.min_top_margin);
                prop_assert!(top <= config.screen_height - config.reserved_bottom_margin());
            }
        }
    }
}
