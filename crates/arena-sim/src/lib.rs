//! Simulation engine for the arena.
//!
//! Owns the environment (world bounds, protagonist, agent roster and
//! projectiles), applies the spatial rules once per tick, and produces
//! `ArenaSnapshot`s for renderers. Completely headless and deterministic
//! for a given seed.

pub mod engine;
pub mod environment;
pub mod rules;
pub mod systems;
pub mod world_setup;

pub use arena_core as core;
pub use engine::ArenaEngine;
pub use environment::Environment;

#[cfg(test)]
mod tests;
