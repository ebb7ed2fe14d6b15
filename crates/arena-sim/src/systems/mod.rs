//! Per-tick systems that operate on the environment.
//!
//! Systems are plain functions that take `&mut Environment` (or
//! `&Environment` for read-only). They do not own state; anything that
//! outlives a tick is passed in by the engine.

pub mod cleanup;
pub mod movement;
pub mod projectiles;
pub mod snapshot;
