//! Game lifecycle controller
//!
//! ```text
//!   Idle ──Primary──> Running ──collision──> GameOver ──Reset──> Idle
//!                      │  ▲
//!                      └──┘ Primary (flap)
//! ```
//!
//! The controller owns all mutable game state. Input is applied the moment
//! it arrives; simulation runs only when the tick driver fires with a
//! current token. Presentation reads [`Snapshot`]s taken between ticks.

use std::collections::VecDeque;
use std::time::Duration;

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::consts::OBSTACLE_COUNT;
use crate::driver::{DriverToken, TickDriver};
use crate::error::ConfigError;
use crate::session::{GamePhase, Session};
use crate::sim::{self, CollisionCause, StepOutcome, World};

/// Undrained events kept before the oldest are discarded
pub const MAX_PENDING_EVENTS: usize = 256;

/// Discrete user input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Input {
    /// Tap/click/key: starts a run from Idle, flaps while Running
    Primary,
    /// Explicit restart, only honored in GameOver
    Reset,
}

/// Notable things that happened, for audio/analytics on the host side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Started,
    Jumped,
    Scored { total: u32 },
    Collided(CollisionCause),
    NewBest { best: u32 },
    Reset,
}

/// Obstacle as seen by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObstacleView {
    pub x: f32,
    pub width: f32,
    pub top_height: f32,
    pub gap_size: f32,
    pub scored: bool,
}

impl ObstacleView {
    /// y coordinate where the bottom block starts
    #[inline]
    pub fn gap_bottom(&self) -> f32 {
        self.top_height + self.gap_size
    }

    #[inline]
    pub fn right_edge(&self) -> f32 {
        self.x + self.width
    }
}

/// Read-only copy of everything presentation needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub actor_x: f32,
    pub actor_y: f32,
    pub actor_vel: f32,
    pub actor_size: f32,
    pub obstacles: [ObstacleView; OBSTACLE_COUNT],
    pub score: u32,
    pub best: u32,
    pub phase: GamePhase,
    /// Simulation ticks in the current run
    pub ticks: u64,
    /// What ended the last run, until reset
    pub last_cause: Option<CollisionCause>,
}

/// One game session: lifecycle, simulation state, and tick driver
#[derive(Debug)]
pub struct Game {
    config: GameConfig,
    session: Session,
    world: World<Pcg32>,
    driver: TickDriver,
    ticks: u64,
    last_cause: Option<CollisionCause>,
    events: VecDeque<GameEvent>,
}

impl Game {
    /// Validate `config` and build an Idle game seeded with `seed`
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let world = World::new(&config, Pcg32::seed_from_u64(seed));
        let driver = TickDriver::new(config.tick_interval(), config.max_substeps);
        log::info!("Game initialized with seed: {}", seed);

        Ok(Self {
            config,
            session: Session::new(),
            world,
            driver,
            ticks: 0,
            last_cause: None,
            events: VecDeque::with_capacity(MAX_PENDING_EVENTS),
        })
    }

    /// Carry over a best score loaded by the host
    pub fn with_best(mut self, best: u32) -> Self {
        self.session.best = best;
        self
    }

    /// Dispatch one input according to the current phase
    pub fn handle_input(&mut self, input: Input) {
        match (self.session.phase, input) {
            (GamePhase::Idle, Input::Primary) => self.start_run(),
            (GamePhase::Running, Input::Primary) => {
                self.world.actor.apply_impulse(self.config.impulse);
                self.record(GameEvent::Jumped);
            }
            (GamePhase::GameOver, Input::Reset) => self.reset_to_idle(),
            (phase, input) => {
                log::debug!("Ignoring {:?} in {:?}", input, phase);
            }
        }
    }

    /// Tap/click/key from the host
    pub fn on_primary_input(&mut self) {
        self.handle_input(Input::Primary);
    }

    /// Restart request from the host
    pub fn reset(&mut self) {
        self.handle_input(Input::Reset);
    }

    /// One driver firing. Returns `None` without touching state if `token`
    /// belongs to a stopped arming of the driver.
    pub fn tick(&mut self, token: DriverToken) -> Option<StepOutcome> {
        if !self.driver.is_current(token) {
            log::warn!("Dropping stale tick (generation {})", token.generation());
            return None;
        }
        if self.session.phase != GamePhase::Running {
            return None;
        }

        let outcome = sim::step(&mut self.world, &self.config);
        self.ticks += 1;

        if outcome.scored > 0 {
            self.session.add_points(outcome.scored);
            log::debug!("Scored {} (total {})", outcome.scored, self.session.score);
            self.record(GameEvent::Scored {
                total: self.session.score,
            });
        }

        if outcome.collided {
            self.end_run(outcome.cause.unwrap_or(CollisionCause::Floor));
        }

        Some(outcome)
    }

    /// Host frame pump: run every tick due after `elapsed` wall-clock time.
    ///
    /// Stops early if the run ends mid-batch. Returns the ticks executed.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        let due = self.driver.pump(elapsed);
        let mut ran = 0;
        for _ in 0..due {
            let Some(token) = self.driver.token() else {
                break;
            };
            if self.tick(token).is_none() {
                break;
            }
            ran += 1;
        }
        ran
    }

    /// Consistent copy of the state between ticks
    pub fn snapshot(&self) -> Snapshot {
        let obstacles = self.world.obstacles.as_slice();
        Snapshot {
            actor_x: self.world.actor.x,
            actor_y: self.world.actor.y,
            actor_vel: self.world.actor.vel,
            actor_size: self.world.actor.size,
            obstacles: std::array::from_fn(|i| ObstacleView {
                x: obstacles[i].x,
                width: self.config.obstacle_width,
                top_height: obstacles[i].top_height,
                gap_size: self.config.gap_size,
                scored: obstacles[i].scored,
            }),
            score: self.session.score,
            best: self.session.best,
            phase: self.session.phase,
            ticks: self.ticks,
            last_cause: self.last_cause,
        }
    }

    /// Take the events recorded since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain(..).collect()
    }

    #[inline]
    pub fn phase(&self) -> GamePhase {
        self.session.phase
    }

    #[inline]
    pub fn score(&self) -> u32 {
        self.session.score
    }

    #[inline]
    pub fn best(&self) -> u32 {
        self.session.best
    }

    #[inline]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Token of the running driver, for hosts that schedule ticks themselves
    #[inline]
    pub fn driver_token(&self) -> Option<DriverToken> {
        self.driver.token()
    }

    /// Queue an event, dropping the oldest once the host stops draining
    fn record(&mut self, event: GameEvent) {
        if self.events.len() == MAX_PENDING_EVENTS {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    fn start_run(&mut self) {
        self.session.phase = GamePhase::Running;
        self.world.actor.apply_impulse(self.config.impulse);
        self.driver.start();
        self.record(GameEvent::Started);
        log::info!("Run started (best {})", self.session.best);
    }

    fn end_run(&mut self, cause: CollisionCause) {
        self.driver.stop();
        self.session.phase = GamePhase::GameOver;
        self.last_cause = Some(cause);
        self.record(GameEvent::Collided(cause));

        if let Some(best) = self.session.record_final() {
            log::info!("New best score: {}", best);
            self.record(GameEvent::NewBest { best });
        }
        log::info!(
            "Game over after {} ticks: score {} ({:?})",
            self.ticks,
            self.session.score,
            cause
        );
    }

    fn reset_to_idle(&mut self) {
        self.world.reset(&self.config);
        self.session.clear_score();
        self.session.phase = GamePhase::Idle;
        self.ticks = 0;
        self.last_cause = None;
        self.events.clear();
        self.record(GameEvent::Reset);
        log::info!("Reset to idle");
    }
}
