//! Game loop thread: runs the engine at the configured tick rate, feeds it
//! autopilot input, renders every frame, and publishes snapshots.
//!
//! The engine is moved into the thread so it has a single owner. Commands
//! arrive via an `mpsc` channel. Snapshots are stored in shared state for
//! polling.

use std::io::{self, Write};
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{info, warn};

use arena_core::enums::GamePhase;
use arena_core::state::ArenaSnapshot;
use arena_render::{DrawCommand, Mediator, RecordingCanvas};
use arena_sim::ArenaEngine;

use arena_core::commands::PlayerCommand;

use crate::autopilot::Autopilot;

/// Commands sent from the driver to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    PlayerCommand(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Sink for rendered frames, one JSON object per line.
pub type FrameSink = Box<dyn Write + Send>;

#[derive(Debug, Clone, Copy)]
pub struct LoopOptions {
    /// Stop after this many ticks.
    pub max_ticks: u64,
    /// Sleep between ticks to hold the tick rate; otherwise run flat out.
    pub realtime: bool,
    /// Autopilot shot cadence in ticks; zero never fires.
    pub fire_interval: u64,
}

impl Default for LoopOptions {
    fn default() -> Self {
        Self {
            max_ticks: 600,
            realtime: false,
            fire_interval: 20,
        }
    }
}

/// How the session ended.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoopSummary {
    pub ticks: u64,
    pub phase: GamePhase,
    pub protagonist_health: Option<i32>,
    pub agents_remaining: usize,
    pub frames_written: u64,
}

#[derive(Serialize)]
struct Frame<'a> {
    tick: u64,
    phase: GamePhase,
    commands: &'a [DrawCommand],
}

/// Nominal duration of one tick.
pub fn tick_duration(tick_rate: u32) -> Duration {
    Duration::from_nanos(1_000_000_000 / u64::from(tick_rate.max(1)))
}

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and a handle yielding the session summary.
pub fn spawn_game_loop(
    engine: ArenaEngine,
    options: LoopOptions,
    frames: Option<FrameSink>,
    latest_snapshot: Arc<Mutex<Option<ArenaSnapshot>>>,
) -> io::Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<LoopSummary>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("arena-game-loop".into())
        .spawn(move || run_game_loop(engine, options, frames, cmd_rx, &latest_snapshot))?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until the tick limit, a terminal phase, a Shutdown
/// command, or channel disconnect.
pub fn run_game_loop(
    mut engine: ArenaEngine,
    options: LoopOptions,
    mut frames: Option<FrameSink>,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<ArenaSnapshot>>,
) -> LoopSummary {
    let pilot = Autopilot::new(options.fire_interval);
    let duration = tick_duration(engine.config().tick_rate);
    let mut canvas = RecordingCanvas::new();
    let mut last = engine.snapshot();
    let mut ticks = 0;
    let mut frames_written = 0;
    let mut next_tick_time = Instant::now();

    info!(max_ticks = options.max_ticks, realtime = options.realtime, "game loop started");

    'outer: while ticks < options.max_ticks {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => engine.queue_command(cmd),
                Ok(GameLoopCommand::Shutdown) => break 'outer,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => break 'outer,
            }
        }

        // 2. Autopilot input, then advance one tick
        engine.queue_commands(pilot.next_commands(&last));
        let snapshot = engine.tick();
        ticks += 1;

        // 3. Render the frame and dump it if requested
        Mediator::new(engine.environment(), &mut canvas).render_frame(snapshot.phase);
        let commands = canvas.take_commands();
        if let Some(sink) = frames.as_mut() {
            let frame = Frame {
                tick: snapshot.time.tick,
                phase: snapshot.phase,
                commands: &commands,
            };
            match write_frame(sink, &frame) {
                Ok(()) => frames_written += 1,
                Err(err) => {
                    warn!(%err, "frame output failed, disabling it");
                    frames = None;
                }
            }
        }

        // 4. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot.clone());
        }

        let finished = snapshot.phase.is_terminal();
        last = snapshot;
        if finished {
            break;
        }

        // 5. Sleep until next tick
        if options.realtime {
            next_tick_time += duration;
            let now = Instant::now();
            if next_tick_time > now {
                std::thread::sleep(next_tick_time - now);
            } else if now - next_tick_time > duration * 2 {
                // Too far behind; reset to avoid a catch-up spiral
                next_tick_time = now;
            }
        }
    }

    if let Some(sink) = frames.as_mut() {
        if let Err(err) = sink.flush() {
            warn!(%err, "failed to flush frame output");
        }
    }

    let summary = LoopSummary {
        ticks,
        phase: last.phase,
        protagonist_health: last.protagonist.as_ref().map(|p| p.health),
        agents_remaining: last.agents.len(),
        frames_written,
    };
    info!(?summary, "game loop finished");
    summary
}

fn write_frame(sink: &mut FrameSink, frame: &Frame<'_>) -> io::Result<()> {
    serde_json::to_writer(&mut *sink, frame)?;
    sink.write_all(b"\n")
}
