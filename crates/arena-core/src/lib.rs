//! Core types and definitions for the arena simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! geometry, agents, projectiles, zone rules, configuration, commands,
//! events, errors and the read-only snapshot handed to renderers.
//! It has no dependency on any runtime or drawing framework.

pub mod agent;
pub mod commands;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod projectile;
pub mod state;
pub mod types;
pub mod zones;

pub use error::{ArenaError, Result};
