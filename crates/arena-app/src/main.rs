//! Headless arena runner.
//!
//! Usage:
//!   arena --config configs/default.toml --ticks 1200 --frames frames.jsonl

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use arena_app::game_loop::{spawn_game_loop, FrameSink, LoopOptions};
use arena_core::config::ArenaConfig;
use arena_sim::ArenaEngine;

#[derive(Parser, Debug)]
#[command(name = "arena")]
#[command(about = "Run an arena session without a window")]
struct Args {
    /// Level config (TOML). Built-in defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Maximum number of ticks to simulate
    #[arg(short, long, default_value_t = 600)]
    ticks: u64,

    /// Override the config's RNG seed
    #[arg(short, long)]
    seed: Option<u64>,

    /// Write every rendered frame as JSON lines to this file
    #[arg(short, long)]
    frames: Option<PathBuf>,

    /// Hold the configured tick rate instead of running flat out
    #[arg(long)]
    realtime: bool,

    /// Autopilot fires every N ticks (0 = never)
    #[arg(long, default_value_t = 20)]
    fire_interval: u64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("arena_sim=info,arena_app=info")),
        )
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => {
            info!(path = %path.display(), "loading config");
            ArenaConfig::load(path)?
        }
        None => ArenaConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }

    let engine = ArenaEngine::new(config)?;
    info!(
        agents = engine.environment().agents().len(),
        seed = engine.config().seed,
        "level loaded"
    );

    let frames: Option<FrameSink> = match &args.frames {
        Some(path) => Some(Box::new(BufWriter::new(File::create(path)?))),
        None => None,
    };
    let options = LoopOptions {
        max_ticks: args.ticks,
        realtime: args.realtime,
        fire_interval: args.fire_interval,
    };

    let latest_snapshot = Arc::new(Mutex::new(None));
    // The loop stops on disconnect, so the sender stays alive until join.
    let (_command_tx, handle) =
        spawn_game_loop(engine, options, frames, Arc::clone(&latest_snapshot))?;
    let summary = handle
        .join()
        .map_err(|_| "game loop thread panicked")?;

    let final_tick = latest_snapshot
        .lock()
        .ok()
        .and_then(|guard| guard.as_ref().map(|snapshot| snapshot.time.tick));
    info!(?final_tick, phase = ?summary.phase, "session over");
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
