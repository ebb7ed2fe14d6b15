//! Events emitted by the simulation for feedback and logging.

use serde::{Deserialize, Serialize};

use crate::agent::AgentId;
use crate::enums::GamePhase;
use crate::projectile::ProjectileId;

/// Outcome records produced during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ArenaEvent {
    /// An agent's box overlapped the protagonist and dealt damage.
    Collision {
        agent: AgentId,
        damage: i32,
        protagonist_health: i32,
    },
    /// A projectile struck an agent.
    ProjectileHit {
        projectile: ProjectileId,
        agent: AgentId,
        damage: i32,
        remaining_health: i32,
    },
    /// Two agents were pushed apart to keep the minimum distance.
    Separated { first: AgentId, second: AgentId },
    /// An agent reached zero health and left the roster.
    AgentDefeated { agent: AgentId },
    /// The protagonist reached zero health.
    ProtagonistDefeated,
    PhaseChanged { from: GamePhase, to: GamePhase },
}
