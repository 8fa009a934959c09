//! Headless driver: plays the engine against a seeded random input stream on a
//! simulated clock.
//!
//! It stands in for the pacer and the input driver: each step picks at most one
//! input action, then fires one gravity tick and advances the clock by the
//! engine's recommended interval.

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use blockfall_core::{EngineConfig, GameSnapshot, GameState, LockEvent, PieceGenerator};
use blockfall_types::GameAction;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    pub seed: u64,
    pub max_ticks: u32,
    pub config_path: Option<PathBuf>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            max_ticks: 10_000,
            config_path: None,
        }
    }
}

/// Final result printed on stdout
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub seed: u64,
    pub ticks: u32,
    pub simulated_ms: u64,
    pub pieces_spawned: u32,
    /// Lock events observed by the driver
    pub locks: u32,
    pub snapshot: GameSnapshot,
}

pub fn parse_sim_args(args: &[String]) -> Result<SimConfig> {
    let mut config = SimConfig::default();
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("sim: missing value for --seed"))?;
                config.seed = v
                    .parse::<u64>()
                    .map_err(|_| anyhow!("sim: invalid --seed value: {}", v))?;
            }
            "--ticks" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("sim: missing value for --ticks"))?;
                config.max_ticks = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("sim: invalid --ticks value: {}", v))?;
            }
            "--config" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("sim: missing value for --config"))?;
                config.config_path = Some(PathBuf::from(v));
            }
            other => {
                return Err(anyhow!("sim: unknown argument: {}", other));
            }
        }
        i += 1;
    }
    Ok(config)
}

pub fn load_engine_config(path: Option<&PathBuf>) -> Result<EngineConfig> {
    let Some(path) = path else {
        return Ok(EngineConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("sim: reading {}", path.display()))?;
    let config = EngineConfig::from_json_str(&text)
        .with_context(|| format!("sim: parsing {}", path.display()))?;
    Ok(config)
}

/// Input the simulated player presses before a tick, if any
fn pick_action(rng: &mut StdRng) -> Option<GameAction> {
    match rng.gen_range(0..10) {
        0..=2 => Some(GameAction::MoveLeft),
        3..=5 => Some(GameAction::MoveRight),
        6 | 7 => Some(GameAction::Rotate),
        8 => Some(GameAction::HardDrop),
        _ => None,
    }
}

/// Log a lock event, tracking level-ups against `level`
fn log_event(event: &LockEvent, simulated_ms: u64, level: &mut u32) {
    if event.lines_cleared > 0 {
        eprintln!(
            "[sim] t={}ms cleared {} line(s) +{} (level {})",
            simulated_ms, event.lines_cleared, event.score_gained, event.level
        );
    }
    if event.level > *level {
        *level = event.level;
        eprintln!("[sim] t={}ms level up: {}", simulated_ms, level);
    }
    if event.game_over {
        eprintln!("[sim] t={}ms game over", simulated_ms);
    }
}

/// Run until game over or `max_ticks`, logging progress to stderr
pub fn run_simulation(state: &mut GameState, seed: u64, max_ticks: u32) -> SimReport {
    let mut input_rng = StdRng::seed_from_u64(seed ^ 0x5eed);
    let mut simulated_ms: u64 = 0;
    let mut ticks = 0;
    let mut locks = 0;
    let mut level = state.level();

    while ticks < max_ticks && !state.game_over() {
        // The engine keeps one event, so drain after every command that can lock.
        if let Some(action) = pick_action(&mut input_rng) {
            state.apply_action(action);
            if let Some(event) = state.take_last_event() {
                locks += 1;
                log_event(&event, simulated_ms, &mut level);
            }
        }

        state.tick();
        ticks += 1;
        simulated_ms += u64::from(state.tick_interval_ms());
        if let Some(event) = state.take_last_event() {
            locks += 1;
            log_event(&event, simulated_ms, &mut level);
        }
    }

    SimReport {
        seed,
        ticks,
        simulated_ms,
        pieces_spawned: state.pieces_spawned(),
        locks,
        snapshot: state.snapshot(),
    }
}

/// Parse args, build the engine and run it
pub fn run(args: &[String]) -> Result<SimReport> {
    let sim = parse_sim_args(args)?;
    let config = load_engine_config(sim.config_path.as_ref())?;
    let mut state = GameState::with_config(config, PieceGenerator::uniform(sim.seed))?;

    eprintln!(
        "[sim] seed={} board={}x{} max_ticks={}",
        sim.seed, config.width, config.height, sim.max_ticks
    );
    Ok(run_simulation(&mut state, sim.seed, sim.max_ticks))
}
