//! Scripted input for headless runs
//!
//! Holds the actor just above the lower edge of the next gap: flap whenever
//! the next tick would carry the actor's bottom past that line.

use crate::config::GameConfig;
use crate::game::Snapshot;
use crate::session::GamePhase;

/// Clearance kept between the actor's bottom and the gap's lower edge
pub const DEFAULT_MARGIN: f32 = 12.0;

/// Deterministic flap controller
#[derive(Debug, Clone)]
pub struct Autopilot {
    gravity: f32,
    screen_height: f32,
    margin: f32,
}

impl Autopilot {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            gravity: config.gravity,
            screen_height: config.screen_height,
            margin: DEFAULT_MARGIN,
        }
    }

    /// y coordinate the actor's bottom should stay above
    pub fn target_line(&self, snapshot: &Snapshot) -> f32 {
        // Slots are not ordered by x after recycling
        snapshot
            .obstacles
            .iter()
            .filter(|o| o.right_edge() >= snapshot.actor_x)
            .min_by(|a, b| a.x.total_cmp(&b.x))
            .map(|o| o.gap_bottom() - self.margin)
            .unwrap_or(self.screen_height / 2.0)
    }

    /// Whether to send a primary input before the next tick
    pub fn decide(&self, snapshot: &Snapshot) -> bool {
        if snapshot.phase != GamePhase::Running {
            return false;
        }
        let projected_bottom =
            snapshot.actor_y + snapshot.actor_size + snapshot.actor_vel + self.gravity;
        projected_bottom > self.target_line(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Game;

    #[test]
    fn test_idle_never_flaps() {
        let game = Game::new(GameConfig::default(), 1).expect("valid");
        let pilot = Autopilot::new(game.config());
        assert!(!pilot.decide(&game.snapshot()));
    }

    #[test]
    fn test_targets_nearest_unpassed_obstacle() {
        let mut game = Game::new(GameConfig::default(), 1).expect("valid");
        game.on_primary_input();
        let pilot = Autopilot::new(game.config());

        let mut snapshot = game.snapshot();
        snapshot.obstacles[0].x = 300.0;
        snapshot.obstacles[0].top_height = 100.0;
        snapshot.obstacles[1].x = 150.0;
        snapshot.obstacles[1].top_height = 200.0;
        assert_eq!(pilot.target_line(&snapshot), 200.0 + 170.0 - DEFAULT_MARGIN);

        // Once slot 1 is fully behind the actor, slot 0 is next
        snapshot.obstacles[1].x = 80.0 - 64.0 - 1.0;
        assert_eq!(pilot.target_line(&snapshot), 100.0 + 170.0 - DEFAULT_MARGIN);
    }

    #[test]
    fn test_flaps_when_about_to_sink_below_gap() {
        let mut game = Game::new(GameConfig::default(), 1).expect("valid");
        game.on_primary_input();
        let pilot = Autopilot::new(game.config());

        let mut snapshot = game.snapshot();
        snapshot.obstacles[0].top_height = 100.0;
        snapshot.actor_vel = 2.0;

        // Line at 258: bottom 250 + 2.5 stays above it
        snapshot.actor_y = 250.0 - snapshot.actor_size;
        assert!(!pilot.decide(&snapshot));

        // Bottom 256 + 2.5 crosses it
        snapshot.actor_y = 256.0 - snapshot.actor_size;
        assert!(pilot.decide(&snapshot));
    }

    #[test]
    fn test_autopilot_clears_opening_obstacles() {
        let mut game = Game::new(GameConfig::default(), 2024).expect("valid");
        let pilot = Autopilot::new(game.config());
        game.on_primary_input();

        while game.phase() == GamePhase::Running && game.score() < 2 {
            if pilot.decide(&game.snapshot()) {
                game.on_primary_input();
            }
            let token = game.driver_token().expect("running");
            game.tick(token);
            assert!(game.snapshot().ticks < 5_000);
        }
        assert!(game.score() >= 2, "autopilot crashed at score {}", game.score());
    }
}
