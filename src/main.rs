//! Sneaky Cat headless runner
//!
//! Plays a level with the seeded autopilot and logs what happens. Useful for
//! checking level files and tuning without a renderer.
//!
//! Usage: `sneaky-cat [level.json|-] [tuning.json|-] [ticks] [seed]`
//! (`-` picks the built-in living room / default tuning).

use std::process::ExitCode;

use sneaky_cat::consts::FRAME_DELTA;
use sneaky_cat::diagnostics::DiagnosticsCounter;
use sneaky_cat::sim::{Autopilot, GameEvent, GamePhase, GameState, tick_with_diagnostics};
use sneaky_cat::{LevelSpec, SneakResult, Tuning};

const DEFAULT_TICKS: u64 = 3600;
const DEFAULT_SEED: u64 = 1;

struct RunArgs {
    level: Option<String>,
    tuning: Option<String>,
    ticks: u64,
    seed: u64,
}

fn parse_args() -> RunArgs {
    let mut args = std::env::args().skip(1);
    let path = |arg: Option<String>| arg.filter(|a| a != "-");
    let level = path(args.next());
    let tuning = path(args.next());
    let ticks = args.next().and_then(|a| a.parse().ok()).unwrap_or(DEFAULT_TICKS);
    let seed = args.next().and_then(|a| a.parse().ok()).unwrap_or(DEFAULT_SEED);
    RunArgs {
        level,
        tuning,
        ticks,
        seed,
    }
}

fn run(args: &RunArgs) -> SneakResult<()> {
    let tuning = match &args.tuning {
        Some(path) => Tuning::load(path)?,
        None => Tuning::default(),
    };
    let level = match &args.level {
        Some(path) => LevelSpec::load(path)?,
        None => LevelSpec::living_room(),
    };
    let mut state = GameState::from_level(&level, tuning)?;
    let mut pilot = Autopilot::new(args.seed);
    let mut diag = DiagnosticsCounter::default();

    log::info!("Running {} ticks with seed {}", args.ticks, args.seed);

    let mut spotted = 0u32;
    for _ in 0..args.ticks {
        let input = pilot.next_input();
        tick_with_diagnostics(&mut state, &input, FRAME_DELTA, &mut diag);

        for event in state.drain_events() {
            match event {
                GameEvent::Spotted { human, at } => {
                    spotted += 1;
                    log::info!("Tick {}: spotted by human {} at {}", state.time_ticks, human, at);
                }
                GameEvent::Respawned { at } => {
                    log::info!("Tick {}: back on the prowl at {}", state.time_ticks, at);
                }
                GameEvent::Escaped { exit } => {
                    log::info!("Tick {}: escaped through exit {}", state.time_ticks, exit);
                }
                GameEvent::MoveBlocked { obstacle } => {
                    log::debug!("Tick {}: bumped into obstacle {}", state.time_ticks, obstacle);
                }
            }
        }

        if state.phase == GamePhase::Escaped {
            break;
        }
    }

    log::info!(
        "Finished after {} ticks: phase {:?}, cat at {}, spotted {} times, {} blocked moves, {} skipped obstacle checks",
        state.time_ticks,
        state.phase,
        state.cat.pos,
        spotted,
        diag.blocked_moves,
        diag.skipped_obstacles
    );
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Sneaky Cat (headless) starting...");

    match run(&parse_args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("sneaky-cat: {e}");
            ExitCode::FAILURE
        }
    }
}
