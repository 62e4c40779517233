//! Headless smoke driver: runs the simulation at a fixed 60 Hz step
//! with a scripted pointer sweep and logs score progress. Stands in
//! for a rendering shell during development.

mod sim;

use std::env;
use std::thread;
use std::time::Duration;

use starhawk_core::{FrameClock, JsonFileScoreStore, NullSink, PointerSnapshot, SystemClock, Vec2};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use sim::{GameHost, LifecycleState};

const RUN_SECONDS_ENV_VAR: &str = "STARHAWK_RUN_SECONDS";
const SEED_ENV_VAR: &str = "STARHAWK_SEED";
const TICK_SECONDS: f32 = 1.0 / 60.0;
const TICKS_PER_SECOND: u64 = 60;

#[derive(Debug, Clone)]
struct DemoConfig {
    run_seconds: u64,
    seed: Option<u64>,
    score_file: String,
    surface_width: u32,
    surface_height: u32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            run_seconds: 10,
            seed: None,
            score_file: "starhawk_highscore.json".to_string(),
            surface_width: 1280,
            surface_height: 720,
        }
    }
}

impl DemoConfig {
    fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(raw) = env::var(RUN_SECONDS_ENV_VAR) {
            match parse_positive_u64(&raw) {
                Some(seconds) => config.run_seconds = seconds,
                None => warn!(
                    var = RUN_SECONDS_ENV_VAR,
                    raw = %raw,
                    default = config.run_seconds,
                    "env_override_unparseable"
                ),
            }
        }
        if let Ok(raw) = env::var(SEED_ENV_VAR) {
            match raw.trim().parse::<u64>() {
                Ok(seed) => config.seed = Some(seed),
                Err(_) => warn!(var = SEED_ENV_VAR, raw = %raw, "env_override_unparseable"),
            }
        }
        config
    }
}

fn parse_positive_u64(raw: &str) -> Option<u64> {
    match raw.trim().parse::<u64>() {
        Ok(value) if value > 0 => Some(value),
        _ => None,
    }
}

/// Sweeps the ship along the lower half of the view while holding
/// fire, enough to exercise spawning, combat, and game over.
fn scripted_pointer(tick: u64) -> PointerSnapshot {
    let phase = tick as f32 * TICK_SECONDS * 0.4;
    PointerSnapshot::empty()
        .with_position_normalized(Some(Vec2::new(phase.sin() * 0.8, -0.7)))
        .with_fire_held(true)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() {
    init_tracing();
    info!("=== Starhawk headless demo ===");

    let config = DemoConfig::from_env();
    info!(run_seconds = config.run_seconds, seed = ?config.seed, "demo_config");

    let store = Box::new(JsonFileScoreStore::open(&config.score_file));
    let mut host = GameHost::new(store);
    if let Some(seed) = config.seed {
        host = host.with_rng_seed(seed);
    }

    let mut sink = NullSink::default();
    host.notify_surface_size(config.surface_width, config.surface_height, &mut sink);
    if host.state() != LifecycleState::Ready {
        warn!(state = ?host.state(), "demo_session_failed_to_start");
        std::process::exit(1);
    }

    let mut clock = SystemClock::new();
    let total_ticks = config.run_seconds * TICKS_PER_SECOND;
    for tick in 0..total_ticks {
        let pointer = scripted_pointer(tick);
        host.frame(clock.delta_seconds(), &pointer, &mut sink);

        if host.state() == LifecycleState::GameOver {
            info!(tick, score = ?host.score(), "demo_game_over_restarting");
            host.restart(&mut sink);
        }
        if tick % (TICKS_PER_SECOND * 5) == 0 {
            info!(tick, score = ?host.score(), "demo_progress");
        }
        thread::sleep(Duration::from_secs_f32(TICK_SECONDS));
    }

    info!(score = ?host.score(), high_score = ?host.high_score(), "demo_finished");
    host.teardown(&mut sink);
}
