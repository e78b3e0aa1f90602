//! Deep Catch headless runner
//!
//! Plays autopilot rounds on a simulated clock and prints a leaderboard.
//! Usage: `deep-catch [SEED] [TUNING_JSON] [--rounds N]`

#[cfg(not(target_arch = "wasm32"))]
use std::path::{Path, PathBuf};

#[cfg(not(target_arch = "wasm32"))]
use clap::Parser;
use deep_catch::sim::{
    FrameStepper, GameEvent, GamePhase, GameState, ManualClock, TickInput, WorldConfig, run_frame,
};
use deep_catch::{HighScores, Tuning, format_elapsed};

/// Simulated render frame length (ms, ~60 fps)
const FRAME_MS: u64 = 16;
/// Rounds that survive this long are called off
const MAX_ROUND_MS: u64 = 5 * 60 * 1000;

/// Command-line arguments for the headless runner
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// Seed of the first round; later rounds count up from it
    #[arg(value_name = "SEED", default_value_t = 42)]
    seed: u64,
    /// Optional JSON file overriding the default tuning
    #[arg(value_name = "TUNING_JSON")]
    tuning: Option<PathBuf>,
    /// Number of rounds to play
    #[arg(
        short,
        long,
        value_name = "COUNT",
        default_value_t = 1,
        value_parser = clap::value_parser!(u64).range(1..=10_000)
    )]
    rounds: u64,
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    let args = CliArgs::parse();
    if let Err(err) = run(&args) {
        log::error!("{err}");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Hosts embed the library directly; there is no browser runner
}

#[cfg(not(target_arch = "wasm32"))]
fn run(args: &CliArgs) -> deep_catch::Result<()> {
    let (seed, rounds) = (args.seed, args.rounds);
    let tuning = load_tuning(args.tuning.as_deref())?;

    log::info!("Deep Catch (headless) starting: seed={seed}, rounds={rounds}");

    let mut board = HighScores::new();
    for round_seed in seed..seed.saturating_add(rounds) {
        let state = play_round(round_seed, &tuning)?;
        println!(
            "seed {:>6}  caught {:>3}  time {:>7}",
            round_seed,
            state.score,
            format_elapsed(state.elapsed_ms)
        );
        board.add_score(state.score, state.elapsed_ms, round_seed);
    }

    println!("{}", board.to_json()?);
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn load_tuning(path: Option<&Path>) -> deep_catch::Result<Tuning> {
    match path {
        Some(path) => Tuning::load(path),
        None => Ok(Tuning::default()),
    }
}

/// Play one autopilot round to completion (or the time cap)
#[cfg(not(target_arch = "wasm32"))]
fn play_round(seed: u64, tuning: &Tuning) -> deep_catch::Result<GameState> {
    let mut state = GameState::new(WorldConfig::default(), tuning.clone(), seed)?;
    let mut stepper = FrameStepper::default();
    let mut clock = ManualClock::new(0);
    let mut input = TickInput {
        autopilot: true,
        ..Default::default()
    };

    while state.phase != GamePhase::GameOver && state.elapsed_ms < MAX_ROUND_MS {
        clock.advance(FRAME_MS);
        run_frame(&mut state, &mut stepper, &clock, &mut input);

        for event in state.drain_events() {
            if let GameEvent::FishCaught { score, .. } = event {
                if score % 10 == 0 {
                    log::info!("{} fish by {}", score, format_elapsed(state.elapsed_ms));
                }
            }
        }
    }

    if state.phase != GamePhase::GameOver {
        log::warn!("Round {seed} called off at {}", format_elapsed(state.elapsed_ms));
    }
    Ok(state)
}
