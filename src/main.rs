//! Mountain Bounce entry point
//!
//! Headless demo host: drives a two-minute run at the fixed physics rate
//! and logs hits-per-minute.
//!
//! Usage: `mountain-bounce [seed] [config.json]`
//!
//! Score, elapsed time, trail spacing, and the run cutoff are host policy,
//! layered over the sim core the same way a rendering host would.

use std::time::{SystemTime, UNIX_EPOCH};

use mountain_bounce::{SimConfig, SimState, tick};

/// Fixed session length in simulated seconds (two-minute run)
const RUN_SECONDS: f32 = 120.0;
/// Minimum ball travel between recorded trail points
const TRAIL_SPACING: f32 = 10.0;
/// Status line cadence in simulated seconds
const STATUS_INTERVAL: f32 = 1.0;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);

    let seed = match args.next() {
        Some(s) => match s.parse() {
            Ok(v) => v,
            Err(_) => {
                log::error!("Invalid seed {s:?} (expected u64)");
                std::process::exit(2);
            }
        },
        None => SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0),
    };

    let config = match args.next() {
        Some(path) => match load_config(&path) {
            Ok(c) => c,
            Err(e) => {
                log::error!("Failed to load config {path}: {e}");
                std::process::exit(2);
            }
        },
        None => SimConfig::default(),
    };

    let mut state = match SimState::new(&config, seed) {
        Ok(s) => s,
        Err(e) => {
            log::error!("Invalid configuration: {e}");
            std::process::exit(2);
        }
    };
    log::info!(
        "Simulation started: seed {seed}, arena {}x{}, dt {}",
        state.bounds.width,
        state.bounds.height,
        state.dt
    );

    // Starts at -1: the ball spawns touching the top wall, and the first
    // tick's spawn-contact hit should not score.
    let mut hits: i64 = -1;
    let mut last_dot = state.ball.pos;
    let mut trail_dots: u64 = 0;

    let run_ticks = (RUN_SECONDS / state.dt).round() as u64;
    let status_every = ((STATUS_INTERVAL / state.dt).round() as u64).max(1);

    for n in 1..=run_ticks {
        let result = tick(&mut state);

        if result.hit.is_some() {
            hits += 1;
        }

        if result.position.distance(last_dot) >= TRAIL_SPACING {
            trail_dots += 1;
            last_dot = result.position;
        }

        if n % status_every == 0 {
            let elapsed = n as f32 * state.dt;
            let hpm = hits as f32 / elapsed * 60.0;
            log::info!("Hits: {hits}  Time: {elapsed:.1} s  HPM: {hpm:.1}");
        }
    }

    let hpm = hits as f32 / RUN_SECONDS * 60.0;
    log::info!("Hits: {hits}  Time: {RUN_SECONDS:.1} s  HPM: {hpm:.1}  GAME OVER");
    log::info!("Trail dots recorded: {trail_dots}");
}

fn load_config(path: &str) -> Result<SimConfig, Box<dyn std::error::Error>> {
    let json = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}
