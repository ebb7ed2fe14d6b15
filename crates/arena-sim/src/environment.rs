//! The playfield: world bounds, artwork handles, the protagonist, the
//! agent roster and live projectiles.
//!
//! Roster order is insertion order and doubles as render and iteration
//! order. Passes over the roster hand out slices so that spawning and
//! despawning can only happen between passes.

use tracing::{info, warn};

use arena_core::agent::{Agent, AgentId};
use arena_core::config::WorldConfig;
use arena_core::enums::BorderMode;
use arena_core::error::{ArenaError, Result};
use arena_core::events::ArenaEvent;
use arena_core::projectile::Projectile;
use arena_core::types::{ImageHandle, Position, Rect, Size};
use arena_core::zones::ZoneRules;

use crate::rules::borders;
use crate::rules::collision::{self, ContactLedger, DamagePolicy};
use crate::rules::separation;
use crate::rules::zones;

/// Opaque artwork handles the renderer draws for the environment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnvironmentImages {
    pub background: Option<ImageHandle>,
    pub pause: Option<ImageHandle>,
    pub victory: Option<ImageHandle>,
    pub game_over: Option<ImageHandle>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Environment {
    origin: Position,
    size: Size,
    images: EnvironmentImages,
    protagonist: Option<Agent>,
    agents: Vec<Agent>,
    projectiles: Vec<Projectile>,
}

impl Environment {
    /// Create an empty environment. Fails if the size is not positive.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Result<Self> {
        let size = Size::new(width, height);
        if !size.is_valid() {
            return Err(ArenaError::InvalidGeometry(format!(
                "environment size {width}x{height} must be positive"
            )));
        }
        Ok(Self {
            origin: Position::new(x, y),
            size,
            images: EnvironmentImages::default(),
            protagonist: None,
            agents: Vec::new(),
            projectiles: Vec::new(),
        })
    }

    pub fn from_config(world: &WorldConfig) -> Result<Self> {
        let mut env = Self::new(world.x, world.y, world.width, world.height)?;
        env.images = EnvironmentImages {
            background: world.background.clone(),
            pause: world.pause_image.clone(),
            victory: world.victory_image.clone(),
            game_over: world.game_over_image.clone(),
        };
        Ok(env)
    }

    pub fn with_agents(mut self, agents: Vec<Agent>) -> Self {
        self.set_agents(agents);
        self
    }

    // --- Geometry ---

    pub fn x(&self) -> i32 {
        self.origin.x
    }

    pub fn y(&self) -> i32 {
        self.origin.y
    }

    pub fn width(&self) -> i32 {
        self.size.width
    }

    pub fn height(&self) -> i32 {
        self.size.height
    }

    pub fn set_origin(&mut self, x: i32, y: i32) {
        self.origin = Position::new(x, y);
    }

    pub fn set_size(&mut self, width: i32, height: i32) -> Result<()> {
        let size = Size::new(width, height);
        if !size.is_valid() {
            return Err(ArenaError::InvalidGeometry(format!(
                "environment size {width}x{height} must be positive"
            )));
        }
        self.size = size;
        Ok(())
    }

    /// The clamping rectangle `[0, width] x [0, height]`.
    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.size.width, self.size.height)
    }

    pub fn images(&self) -> &EnvironmentImages {
        &self.images
    }

    pub fn images_mut(&mut self) -> &mut EnvironmentImages {
        &mut self.images
    }

    // --- Protagonist ---

    pub fn protagonist(&self) -> Option<&Agent> {
        self.protagonist.as_ref()
    }

    pub fn protagonist_mut(&mut self) -> Option<&mut Agent> {
        self.protagonist.as_mut()
    }

    pub fn set_protagonist(&mut self, protagonist: Agent) {
        self.protagonist = Some(protagonist);
    }

    pub fn clear_protagonist(&mut self) -> Option<Agent> {
        self.protagonist.take()
    }

    // --- Roster ---

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn agents_mut(&mut self) -> &mut [Agent] {
        &mut self.agents
    }

    pub fn set_agents(&mut self, agents: Vec<Agent>) {
        self.agents = agents;
    }

    pub fn agent(&self, id: AgentId) -> Option<&Agent> {
        self.agents.iter().find(|a| a.id == id)
    }

    pub fn agent_mut(&mut self, id: AgentId) -> Option<&mut Agent> {
        self.agents.iter_mut().find(|a| a.id == id)
    }

    /// Append an agent to the end of the roster.
    pub fn spawn_agent(&mut self, agent: Agent) {
        if self.agent(agent.id).is_some() {
            warn!(agent = %agent.id, "spawning agent with duplicate id");
        }
        self.agents.push(agent);
    }

    /// Remove the first agent with the given id, keeping roster order.
    pub fn despawn_agent(&mut self, id: AgentId) -> Result<Agent> {
        let index = self.index_of(id)?;
        Ok(self.agents.remove(index))
    }

    /// Remove every agent whose health has reached zero.
    pub fn remove_defeated(&mut self) -> Vec<Agent> {
        let mut removed = Vec::new();
        let mut kept = Vec::with_capacity(self.agents.len());
        for agent in self.agents.drain(..) {
            if agent.is_defeated() {
                removed.push(agent);
            } else {
                kept.push(agent);
            }
        }
        self.agents = kept;
        if !removed.is_empty() {
            info!(count = removed.len(), remaining = self.agents.len(), "removed defeated agents");
        }
        removed
    }

    fn index_of(&self, id: AgentId) -> Result<usize> {
        self.agents
            .iter()
            .position(|a| a.id == id)
            .ok_or(ArenaError::AgentNotFound(id))
    }

    // --- Projectiles ---

    pub fn projectiles(&self) -> &[Projectile] {
        &self.projectiles
    }

    pub fn spawn_projectile(&mut self, projectile: Projectile) {
        self.projectiles.push(projectile);
    }

    pub fn clear_projectiles(&mut self) {
        self.projectiles.clear();
    }

    /// Projectiles and roster borrowed together for the projectile pass.
    pub(crate) fn projectiles_and_agents_mut(&mut self) -> (&mut Vec<Projectile>, &mut [Agent]) {
        (&mut self.projectiles, &mut self.agents)
    }

    // --- Spatial rules ---

    /// Clamp the protagonist's box into `[0, width] x [0, height]`.
    ///
    /// Returns whether the protagonist moved.
    pub fn check_borders(&mut self, mode: BorderMode) -> Result<bool> {
        let (width, height) = (self.size.width, self.size.height);
        let protagonist = self
            .protagonist
            .as_mut()
            .ok_or(ArenaError::InvalidState("check_borders requires a protagonist"))?;
        Ok(borders::clamp_to_world(protagonist, width, height, mode))
    }

    /// Apply the zone rules to one roster agent.
    pub fn check_and_adjust_position(&mut self, id: AgentId, rules: &ZoneRules) -> Result<bool> {
        let agent = self.agent_mut(id).ok_or(ArenaError::AgentNotFound(id))?;
        Ok(zones::check_and_adjust_position(agent, rules))
    }

    /// Apply the zone rules to every roster agent. Returns how many moved.
    pub fn apply_zone_rules(&mut self, rules: &ZoneRules) -> usize {
        self.agents
            .iter_mut()
            .map(|agent| zones::check_and_adjust_position(agent, rules))
            .filter(|&moved| moved)
            .count()
    }

    /// Damage the protagonist by `damage` for every roster agent overlapping
    /// it. A no-op without a protagonist.
    pub fn detect_collision(&mut self, damage: i32) -> Vec<ArenaEvent> {
        let mut ledger = ContactLedger::default();
        self.detect_collision_with(&DamagePolicy::continuous(damage), &mut ledger, 0)
    }

    /// Collision pass with a contact cooldown tracked in `ledger`.
    pub fn detect_collision_with(
        &mut self,
        policy: &DamagePolicy,
        ledger: &mut ContactLedger,
        tick: u64,
    ) -> Vec<ArenaEvent> {
        match self.protagonist.as_mut() {
            Some(protagonist) => {
                collision::detect_collision(protagonist, &self.agents, policy, ledger, tick)
            }
            None => Vec::new(),
        }
    }

    /// Push two roster agents apart if they are closer than `min_distance`.
    pub fn maintain_distance(&mut self, first: AgentId, second: AgentId, min_distance: f64) -> Result<bool> {
        let i = self.index_of(first)?;
        let j = self.index_of(second)?;
        if i == j {
            return Ok(false);
        }
        let (a, b) = pair_mut(&mut self.agents, i, j);
        Ok(separation::maintain_distance(a, b, min_distance))
    }

    /// Separate every unordered pair of roster agents, in roster order.
    /// Returns the pairs that moved.
    pub fn enforce_separation(&mut self, min_distance: f64) -> Vec<(AgentId, AgentId)> {
        separation::enforce_separation(&mut self.agents, min_distance)
    }
}

/// Two distinct mutable elements of a slice, in argument order.
pub(crate) fn pair_mut<T>(items: &mut [T], i: usize, j: usize) -> (&mut T, &mut T) {
    debug_assert_ne!(i, j);
    if i < j {
        let (left, right) = items.split_at_mut(j);
        (&mut left[i], &mut right[0])
    } else {
        let (left, right) = items.split_at_mut(i);
        (&mut right[0], &mut left[j])
    }
}
