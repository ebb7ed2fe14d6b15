//! Cleanup system: removes defeated agents from the roster.
//!
//! Runs after the collision pass so the roster never changes while it is
//! being iterated.

use tracing::info;

use arena_core::events::ArenaEvent;

use crate::environment::Environment;
use crate::rules::collision::ContactLedger;

/// Remove agents with zero health, forgetting their contact history.
pub fn run(env: &mut Environment, ledger: &mut ContactLedger, events: &mut Vec<ArenaEvent>) {
    for agent in env.remove_defeated() {
        info!(agent = %agent.id, "agent defeated");
        ledger.forget(agent.id);
        events.push(ArenaEvent::AgentDefeated { agent: agent.id });
    }
}
