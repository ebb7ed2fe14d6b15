//! Headless arena runner.
//!
//! Wires the simulation and render adapter together: a game loop thread
//! fed by a command channel, a scripted autopilot standing in for player
//! input, and an optional JSON-lines dump of every rendered frame.

pub mod autopilot;
pub mod game_loop;

pub use arena_core as core;
