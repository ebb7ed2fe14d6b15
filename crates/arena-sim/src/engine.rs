//! Arena engine: the per-tick driver around an `Environment`.
//!
//! `ArenaEngine` owns the environment, processes player commands, runs
//! the systems and spatial rules in a fixed order, and produces
//! `ArenaSnapshot`s. Completely headless, enabling deterministic testing.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{info, warn};

use arena_core::commands::PlayerCommand;
use arena_core::config::ArenaConfig;
use arena_core::enums::GamePhase;
use arena_core::error::{ArenaError, Result};
use arena_core::events::ArenaEvent;
use arena_core::projectile::{Projectile, ProjectileId};
use arena_core::state::ArenaSnapshot;
use arena_core::types::{SimTime, Velocity};

use crate::environment::Environment;
use crate::rules::collision::{ContactLedger, DamagePolicy};
use crate::systems;
use crate::world_setup;

/// The simulation engine. Owns the environment and all per-session state.
pub struct ArenaEngine {
    config: ArenaConfig,
    env: Environment,
    /// Level as loaded, restored on `Restart`.
    initial: Environment,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    events: Vec<ArenaEvent>,
    ledger: ContactLedger,
    next_projectile_id: u32,
}

impl ArenaEngine {
    /// Validate the config and load its level.
    pub fn new(config: ArenaConfig) -> Result<Self> {
        config.validate()?;
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let env = world_setup::setup_level(&config, &mut rng)?;
        Ok(Self::assemble(config, env, rng))
    }

    /// Run a caller-built environment under the given config's rules.
    /// The environment must have a protagonist.
    pub fn with_environment(config: ArenaConfig, env: Environment) -> Result<Self> {
        config.validate()?;
        if env.protagonist().is_none() {
            return Err(ArenaError::InvalidState("environment has no protagonist"));
        }
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Ok(Self::assemble(config, env, rng))
    }

    fn assemble(config: ArenaConfig, env: Environment, rng: ChaCha8Rng) -> Self {
        Self {
            config,
            initial: env.clone(),
            env,
            time: SimTime::default(),
            phase: GamePhase::Running,
            rng,
            command_queue: VecDeque::new(),
            events: Vec::new(),
            ledger: ContactLedger::default(),
            next_projectile_id: 0,
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> ArenaSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Running {
            self.run_systems();
            self.update_phase();
            self.time.advance();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(&self.env, &self.time, self.phase, events)
    }

    /// Snapshot of the current state without advancing.
    pub fn snapshot(&self) -> ArenaSnapshot {
        systems::snapshot::build_snapshot(&self.env, &self.time, self.phase, Vec::new())
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    pub fn environment(&self) -> &Environment {
        &self.env
    }

    /// Mutable access for external game logic (spawning, scripted moves).
    /// Changes take effect on the next tick.
    pub fn environment_mut(&mut self) -> &mut Environment {
        &mut self.env
    }

    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Running {
                    self.set_phase(GamePhase::Paused);
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.set_phase(GamePhase::Running);
                }
            }
            PlayerCommand::Restart => self.restart(),
            _ if self.phase != GamePhase::Running => {
                warn!(?command, phase = ?self.phase, "ignoring command outside running phase");
            }
            PlayerCommand::Move { dx, dy } => {
                if let Some(protagonist) = self.env.protagonist_mut() {
                    let speed = protagonist.speed;
                    protagonist
                        .position
                        .translate(dx.signum() * speed, dy.signum() * speed);
                }
            }
            PlayerCommand::Teleport { x, y } => {
                if let Some(protagonist) = self.env.protagonist_mut() {
                    protagonist.set_position(x, y);
                }
            }
            PlayerCommand::Fire { dx, dy } => self.fire(dx, dy),
        }
    }

    fn fire(&mut self, dx: i32, dy: i32) {
        let combat = self.config.combat;
        let velocity = Velocity::new(
            dx.signum() * combat.projectile_speed,
            dy.signum() * combat.projectile_speed,
        );
        if velocity.is_zero() {
            warn!("ignoring fire command without a direction");
            return;
        }
        let Some(origin) = self.env.protagonist().map(|p| p.position) else {
            return;
        };
        let projectile = Projectile {
            id: ProjectileId(self.next_projectile_id),
            position: origin,
            size: combat.projectile_size,
            velocity,
            damage: combat.projectile_damage,
            image: self.config.level.projectile_image.clone(),
        };
        self.next_projectile_id += 1;
        self.env.spawn_projectile(projectile);
    }

    fn restart(&mut self) {
        info!(tick = self.time.tick, "restarting level");
        self.env = self.initial.clone();
        self.time = SimTime::default();
        self.ledger.clear();
        self.next_projectile_id = 0;
        self.rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        if self.phase != GamePhase::Running {
            self.set_phase(GamePhase::Running);
        }
    }

    fn set_phase(&mut self, to: GamePhase) {
        let from = self.phase;
        info!(?from, ?to, "phase change");
        self.phase = to;
        self.events.push(ArenaEvent::PhaseChanged { from, to });
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Agent intents
        systems::movement::run(&mut self.env, &mut self.rng);
        // 2. Projectiles
        systems::projectiles::run(&mut self.env, &mut self.events);
        // 3. World boundary for the protagonist
        if let Err(err) = self.env.check_borders(self.config.border_mode) {
            warn!(%err, "skipping border check");
        }
        // 4. Zone restriction for every agent
        self.env.apply_zone_rules(&self.config.zones);
        // 5. Contact damage
        let policy = DamagePolicy {
            amount: self.config.combat.collision_damage,
            cooldown_ticks: self.config.combat.contact_cooldown_ticks,
        };
        let hits = self
            .env
            .detect_collision_with(&policy, &mut self.ledger, self.time.tick);
        self.events.extend(hits);
        // 6. Separation
        if let Some(min_distance) = self.config.separation.min_distance {
            for (first, second) in self.env.enforce_separation(min_distance) {
                self.events.push(ArenaEvent::Separated { first, second });
            }
        }
        // 7. Cleanup
        if self.config.level.despawn_defeated {
            systems::cleanup::run(&mut self.env, &mut self.ledger, &mut self.events);
        }
    }

    fn update_phase(&mut self) {
        let protagonist_down = self.env.protagonist().is_some_and(|p| p.is_defeated());
        if protagonist_down {
            self.events.push(ArenaEvent::ProtagonistDefeated);
            self.set_phase(GamePhase::GameOver);
        } else if self.env.agents().is_empty() && !self.initial.agents().is_empty() {
            self.set_phase(GamePhase::Victory);
        }
    }
}
