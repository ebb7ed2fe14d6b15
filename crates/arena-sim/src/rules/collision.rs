//! Protagonist-versus-roster collision detection and contact damage.

use std::collections::HashMap;

use tracing::debug;

use arena_core::agent::{Agent, AgentId};
use arena_core::events::ArenaEvent;

/// How much damage an overlapping agent deals, and how often.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DamagePolicy {
    pub amount: i32,
    /// Minimum ticks between two hits from the same agent. Zero means every
    /// collision pass while overlapping.
    pub cooldown_ticks: u64,
}

impl DamagePolicy {
    pub fn continuous(amount: i32) -> Self {
        Self {
            amount,
            cooldown_ticks: 0,
        }
    }
}

/// Last tick each agent damaged the protagonist.
#[derive(Debug, Clone, Default)]
pub struct ContactLedger {
    last_hit: HashMap<AgentId, u64>,
}

impl ContactLedger {
    /// Whether `agent` may deal contact damage at `tick`.
    pub fn ready(&self, agent: AgentId, tick: u64, cooldown_ticks: u64) -> bool {
        if cooldown_ticks == 0 {
            return true;
        }
        match self.last_hit.get(&agent) {
            Some(&last) => tick.saturating_sub(last) >= cooldown_ticks,
            None => true,
        }
    }

    pub fn record(&mut self, agent: AgentId, tick: u64) {
        self.last_hit.insert(agent, tick);
    }

    pub fn forget(&mut self, agent: AgentId) {
        self.last_hit.remove(&agent);
    }

    pub fn clear(&mut self) {
        self.last_hit.clear();
    }
}

/// Whether two agents' bounding boxes overlap. Shared edges do not count.
pub fn intersect(a: &Agent, b: &Agent) -> bool {
    a.bounds().overlaps(&b.bounds())
}

/// Apply contact damage to the protagonist once for every roster agent
/// overlapping it, in roster order. Agents themselves are never damaged.
pub fn detect_collision(
    protagonist: &mut Agent,
    agents: &[Agent],
    policy: &DamagePolicy,
    ledger: &mut ContactLedger,
    tick: u64,
) -> Vec<ArenaEvent> {
    let mut events = Vec::new();

    for agent in agents {
        if !intersect(protagonist, agent) {
            continue;
        }
        if !ledger.ready(agent.id, tick, policy.cooldown_ticks) {
            continue;
        }
        protagonist.take_damage(policy.amount);
        if policy.cooldown_ticks > 0 {
            ledger.record(agent.id, tick);
        }
        debug!(
            agent = %agent.id,
            damage = policy.amount,
            health = protagonist.health.current,
            "collision with protagonist"
        );
        events.push(ArenaEvent::Collision {
            agent: agent.id,
            damage: policy.amount,
            protagonist_health: protagonist.health.current,
        });
    }

    events
}
