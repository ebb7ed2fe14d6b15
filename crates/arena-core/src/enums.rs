//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Overall game phase. Systems only run while `Running`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Running,
    Paused,
    /// Every agent in the level has been defeated.
    Victory,
    /// The protagonist's health reached zero.
    GameOver,
}

impl GamePhase {
    /// Victory and GameOver only leave via a restart.
    pub fn is_terminal(&self) -> bool {
        matches!(self, GamePhase::Victory | GamePhase::GameOver)
    }
}

/// Per-tick movement intent of a non-player agent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Behavior {
    /// Stays where it is.
    #[default]
    Idle,
    /// Steps toward the protagonist.
    Chase,
    /// Takes a random step each tick.
    Wander,
}

/// How the protagonist is clamped to the world rectangle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BorderMode {
    /// Clamp the x axis and the y axis independently on every call.
    #[default]
    IndependentAxes,
    /// Apply only the first violated bound, in the order low-x, high-x,
    /// low-y, high-y. A box off on both axes needs two calls to settle.
    FirstViolation,
}
