//! Snapshot system: reads the environment and builds an `ArenaSnapshot`.
//!
//! This system is read-only; it never modifies the environment.

use arena_core::enums::GamePhase;
use arena_core::events::ArenaEvent;
use arena_core::state::{AgentView, ArenaSnapshot, EnvironmentView, ProjectileView};
use arena_core::types::SimTime;

use crate::environment::Environment;

/// Build a complete snapshot from the current environment.
pub fn build_snapshot(
    env: &Environment,
    time: &SimTime,
    phase: GamePhase,
    events: Vec<ArenaEvent>,
) -> ArenaSnapshot {
    ArenaSnapshot {
        time: *time,
        phase,
        environment: build_environment(env),
        protagonist: env.protagonist().map(AgentView::from),
        agents: env.agents().iter().map(AgentView::from).collect(),
        projectiles: env.projectiles().iter().map(ProjectileView::from).collect(),
        events,
    }
}

fn build_environment(env: &Environment) -> EnvironmentView {
    let images = env.images();
    EnvironmentView {
        x: env.x(),
        y: env.y(),
        width: env.width(),
        height: env.height(),
        background: images.background.clone(),
        pause_image: images.pause.clone(),
        victory_image: images.victory.clone(),
        game_over_image: images.game_over.clone(),
    }
}
