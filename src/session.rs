//! Score and best-score bookkeeping
//!
//! `best` lives for the process only; persisting it is left to the host.

use serde::{Deserialize, Serialize};

/// Lifecycle phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first input
    #[default]
    Idle,
    /// Driver is ticking the simulation
    Running,
    /// Run ended, waiting for an explicit reset
    GameOver,
}

/// Per-process game session state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub score: u32,
    pub best: u32,
    pub phase: GamePhase,
}

impl Session {
    /// Fresh session with no best score yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a score would replace the current best
    pub fn qualifies(&self, score: u32) -> bool {
        score > self.best
    }

    /// Add points earned during a tick
    pub fn add_points(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    /// Fold the finished run into `best`.
    ///
    /// Returns the new best if this run beat it. Call exactly once per run,
    /// on the Running to GameOver transition.
    pub fn record_final(&mut self) -> Option<u32> {
        if self.qualifies(self.score) {
            self.best = self.score;
            Some(self.best)
        } else {
            None
        }
    }

    /// Clear the score for a new run; `best` is kept
    pub fn clear_score(&mut self) {
        self.score = 0;
    }
}
