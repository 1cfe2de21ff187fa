//! Pipe Dash headless runner
//!
//! Plays sessions with the autopilot and logs the results. Rendering and
//! raw input delivery belong to a host; this binary drives the core the
//! way a host would.

use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;

use pipe_dash::{Autopilot, Game, GameConfig, GamePhase};

#[derive(Parser)]
#[command(
    name = "pipe-dash",
    about = "Run Pipe Dash sessions headless with the autopilot"
)]
struct Cli {
    /// Config file path (JSON, partial overrides allowed)
    #[arg(long)]
    config: Option<PathBuf>,

    /// RNG seed for obstacle geometry
    #[arg(long, default_value = "12345")]
    seed: u64,

    /// Number of games to play in this session
    #[arg(long, default_value = "3")]
    games: u32,

    /// Give up on a game after this many ticks
    #[arg(long, default_value = "20000")]
    max_ticks: u64,

    /// Pace ticks against the wall clock instead of running flat out
    #[arg(long)]
    realtime: bool,

    /// Print each game's final snapshot as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => GameConfig::default(),
    };

    log::info!("Pipe Dash (headless) starting...");
    let mut game = Game::new(config, cli.seed).context("building game")?;
    let pilot = Autopilot::new(game.config());

    for round in 1..=cli.games {
        game.on_primary_input();
        if cli.realtime {
            play_realtime(&mut game, &pilot, cli.max_ticks);
        } else {
            play_flat_out(&mut game, &pilot, cli.max_ticks);
        }

        let snapshot = game.snapshot();
        log::info!(
            "Game {}: score {} best {} ticks {} ({:?})",
            round,
            snapshot.score,
            snapshot.best,
            snapshot.ticks,
            snapshot.last_cause
        );
        if cli.json {
            println!("{}", serde_json::to_string(&snapshot)?);
        }

        for event in game.drain_events() {
            log::trace!("event: {:?}", event);
        }
        if game.phase() == GamePhase::GameOver {
            game.reset();
        } else {
            log::warn!("Game {} hit the tick limit, abandoning session", round);
            break;
        }
    }

    log::info!("Best score this session: {}", game.best());
    Ok(())
}

/// Tick directly with the driver's token, no pacing
fn play_flat_out(game: &mut Game, pilot: &Autopilot, max_ticks: u64) {
    while game.phase() == GamePhase::Running && game.snapshot().ticks < max_ticks {
        if pilot.decide(&game.snapshot()) {
            game.on_primary_input();
        }
        let Some(token) = game.driver_token() else {
            break;
        };
        game.tick(token);
    }
}

/// Feed wall-clock time through the fixed-step accumulator
fn play_realtime(game: &mut Game, pilot: &Autopilot, max_ticks: u64) {
    let frame_duration = game.config().tick_interval();
    let mut last = Instant::now();

    while game.phase() == GamePhase::Running && game.snapshot().ticks < max_ticks {
        let frame_start = Instant::now();

        if pilot.decide(&game.snapshot()) {
            game.on_primary_input();
        }
        game.advance(frame_start.duration_since(last));
        last = frame_start;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_duration {
            thread::sleep(frame_duration - elapsed);
        } else {
            thread::sleep(Duration::from_millis(1));
        }
    }
}
