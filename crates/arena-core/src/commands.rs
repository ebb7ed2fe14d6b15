//! Player commands sent from the driver to the simulation.
//!
//! Commands are queued and applied at the next tick boundary.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Protagonist control ---
    /// Step the protagonist. Each axis moves by the sign of its component
    /// times the protagonist's speed.
    Move { dx: i32, dy: i32 },
    /// Place the protagonist at an absolute position.
    Teleport { x: i32, y: i32 },
    /// Fire a projectile from the protagonist. Each axis of the projectile's
    /// velocity is the sign of its component times the projectile speed.
    Fire { dx: i32, dy: i32 },

    // --- Simulation control ---
    /// Pause the simulation.
    Pause,
    /// Resume from pause.
    Resume,
    /// Reload the level from the config.
    Restart,
}
