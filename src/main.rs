//! Sparkfall headless driver
//!
//! Runs the fountain for a number of frames and prints a JSON snapshot of the
//! drawable particle state.
//!
//! Usage: `sparkfall [settings.json]`

use std::process::ExitCode;

use sparkfall::sim::{BounceBehavior, step};
use sparkfall::{Settings, SimResult, build_detector, build_generator, renderer};

fn run() -> SimResult<()> {
    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(path)?,
        None => {
            log::info!("No settings file given, using defaults");
            Settings::default()
        }
    };

    let mut generator = build_generator(&settings)?;
    let bounce = BounceBehavior::default();
    let detector = build_detector(&settings, &bounce);

    log::info!(
        "Running {} frames with {} particles (seed {}, quality {})",
        settings.frames,
        generator.max_particles(),
        settings.seed,
        settings.quality.as_str()
    );

    let mut bounds_hits = 0;
    let mut pair_hits = 0;
    for frame in 0..settings.frames {
        let stats = step(&mut generator, &detector);
        bounds_hits += stats.collisions.bounds_hits;
        pair_hits += stats.collisions.pair_hits;
        if frame % 100 == 0 {
            log::debug!("Frame {}: {} alive", frame, stats.alive);
        }
    }

    log::info!(
        "Done: {} bounds collisions, {} particle collisions",
        bounds_hits,
        pair_hits
    );

    let snapshot = renderer::snapshot(generator.particles());
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
