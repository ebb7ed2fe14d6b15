//! Arena state snapshot: the complete read-only view handed to renderers
//! and drivers after each tick.

use serde::{Deserialize, Serialize};

use crate::agent::{Agent, AgentId};
use crate::enums::GamePhase;
use crate::events::ArenaEvent;
use crate::projectile::{Projectile, ProjectileId};
use crate::types::{ImageHandle, SimTime};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArenaSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub environment: EnvironmentView,
    pub protagonist: Option<AgentView>,
    /// Agents in roster order.
    pub agents: Vec<AgentView>,
    pub projectiles: Vec<ProjectileView>,
    /// Everything that happened during the tick that produced this snapshot.
    pub events: Vec<ArenaEvent>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentView {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub background: Option<ImageHandle>,
    pub pause_image: Option<ImageHandle>,
    pub victory_image: Option<ImageHandle>,
    pub game_over_image: Option<ImageHandle>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentView {
    pub id: AgentId,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub health: i32,
    pub full_health: i32,
    pub image: Option<ImageHandle>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: ProjectileId,
    pub x: i32,
    pub y: i32,
    pub image: Option<ImageHandle>,
}

impl From<&Agent> for AgentView {
    fn from(agent: &Agent) -> Self {
        Self {
            id: agent.id,
            x: agent.position.x,
            y: agent.position.y,
            width: agent.size.width,
            height: agent.size.height,
            health: agent.health.current,
            full_health: agent.health.full,
            image: agent.image.clone(),
        }
    }
}

impl From<&Projectile> for ProjectileView {
    fn from(projectile: &Projectile) -> Self {
        Self {
            id: projectile.id,
            x: projectile.position.x,
            y: projectile.position.y,
            image: projectile.image.clone(),
        }
    }
}
