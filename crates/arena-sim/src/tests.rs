//! Tests for the arena engine: tick ordering, commands, phases and
//! determinism.

use arena_core::agent::{Agent, AgentId};
use arena_core::commands::PlayerCommand;
use arena_core::config::ArenaConfig;
use arena_core::enums::*;
use arena_core::error::ArenaError;
use arena_core::events::ArenaEvent;
use arena_core::types::{Position, Size};

use crate::engine::ArenaEngine;
use crate::environment::Environment;
use crate::world_setup::PROTAGONIST_ID;

fn agent(id: u32, x: i32, y: i32, w: i32, h: i32) -> Agent {
    Agent::new(AgentId(id), Position::new(x, y), Size::new(w, h), 100).unwrap()
}

/// Environment with a protagonist at (400, 400) 50x50 and the given roster.
fn arena(agents: Vec<Agent>) -> Environment {
    let mut env = Environment::new(0, 0, 1280, 720).unwrap().with_agents(agents);
    let mut protagonist = agent(0, 400, 400, 50, 50);
    protagonist.speed = 5;
    env.set_protagonist(protagonist);
    env
}

fn engine(agents: Vec<Agent>) -> ArenaEngine {
    ArenaEngine::with_environment(ArenaConfig::default(), arena(agents)).unwrap()
}

// ---- Construction ----

#[test]
fn test_requires_protagonist() {
    let env = Environment::new(0, 0, 1280, 720).unwrap();
    let err = ArenaEngine::with_environment(ArenaConfig::default(), env).err();
    assert!(matches!(err, Some(ArenaError::InvalidState(_))));
}

#[test]
fn test_rejects_invalid_config() {
    let mut config = ArenaConfig::default();
    config.world.height = 0;
    assert!(matches!(
        ArenaEngine::new(config).err(),
        Some(ArenaError::InvalidConfig(_))
    ));
}

// ---- Determinism ----

#[test]
fn test_determinism_same_seed() {
    let mut config = ArenaConfig::default();
    config.level.enemy_count = 6;
    let mut engine_a = ArenaEngine::new(config.clone()).unwrap();
    let mut engine_b = ArenaEngine::new(config).unwrap();

    for i in 0..300 {
        if i % 20 == 0 {
            let fire = PlayerCommand::Fire { dx: 1, dy: 0 };
            engine_a.queue_command(fire.clone());
            engine_b.queue_command(fire);
        }
        let json_a = serde_json::to_string(&engine_a.tick()).unwrap();
        let json_b = serde_json::to_string(&engine_b.tick()).unwrap();
        assert_eq!(json_a, json_b, "Snapshots diverged with same seed");
    }
}

// ---- Collision through the engine ----

#[test]
fn test_overlapping_agent_damages_every_tick() {
    // Inside the zone band so the zone clamp leaves it alone.
    let mut e = engine(vec![agent(1, 420, 400, 50, 50)]);
    let snap = e.tick();
    assert_eq!(snap.protagonist.as_ref().unwrap().health, 90);
    assert_eq!(
        snap.events,
        vec![ArenaEvent::Collision {
            agent: AgentId(1),
            damage: 10,
            protagonist_health: 90
        }]
    );
    assert_eq!(snap.agents[0].health, 100);

    let snap = e.tick();
    assert_eq!(snap.protagonist.unwrap().health, 80);
}

#[test]
fn test_contact_cooldown_config() {
    let mut config = ArenaConfig::default();
    config.combat.contact_cooldown_ticks = 10;
    let mut e =
        ArenaEngine::with_environment(config, arena(vec![agent(1, 420, 400, 50, 50)])).unwrap();
    for _ in 0..10 {
        e.tick();
    }
    assert_eq!(e.environment().protagonist().unwrap().health.current, 90);
    e.tick();
    assert_eq!(e.environment().protagonist().unwrap().health.current, 80);
}

#[test]
fn test_game_over_when_protagonist_defeated() {
    let mut e = engine(vec![agent(1, 420, 400, 50, 50)]);
    let mut last = None;
    for _ in 0..10 {
        last = Some(e.tick());
    }
    let snap = last.unwrap();
    assert_eq!(e.phase(), GamePhase::GameOver);
    assert!(snap.events.contains(&ArenaEvent::ProtagonistDefeated));
    assert!(snap.events.contains(&ArenaEvent::PhaseChanged {
        from: GamePhase::Running,
        to: GamePhase::GameOver
    }));

    // Terminal: ticks no longer advance time or apply damage.
    let tick = e.time().tick;
    let snap = e.tick();
    assert_eq!(snap.time.tick, tick);
    assert!(snap.events.is_empty());
}

// ---- Zone clamp through the engine ----

#[test]
fn test_agents_zone_clamped_each_tick() {
    let mut e = engine(vec![agent(1, 600, 10, 20, 20), agent(2, 50, 300, 20, 20)]);
    let snap = e.tick();
    assert_eq!((snap.agents[0].x, snap.agents[0].y), (600, 230));
    assert_eq!((snap.agents[1].x, snap.agents[1].y), (50, 375));
}

#[test]
fn test_protagonist_border_clamp() {
    let mut e = engine(vec![]);
    e.queue_command(PlayerCommand::Teleport { x: 1275, y: 100 });
    let snap = e.tick();
    let p = snap.protagonist.unwrap();
    assert_eq!((p.x, p.y), (1230, 100));
}

#[test]
fn test_teleport_far_outside_world_is_clamped() {
    let chaser = agent(1, 600, 300, 50, 50).with_behavior(Behavior::Chase, 3);
    let mut e = engine(vec![chaser]);
    e.queue_command(PlayerCommand::Teleport { x: i32::MAX - 5, y: 100 });
    let p = e.tick().protagonist.unwrap();
    assert_eq!((p.x, p.y), (1230, 100));

    e.queue_command(PlayerCommand::Teleport { x: i32::MIN, y: i32::MIN });
    e.queue_command(PlayerCommand::Move { dx: -1, dy: -1 });
    let snap = e.tick();
    let p = snap.protagonist.unwrap();
    assert_eq!((p.x, p.y), (0, 0));
    assert_eq!(snap.phase, GamePhase::Running);
}

#[test]
fn test_first_violation_mode_through_engine() {
    let config = ArenaConfig {
        border_mode: BorderMode::FirstViolation,
        ..Default::default()
    };
    let mut e = ArenaEngine::with_environment(config, arena(vec![])).unwrap();
    e.queue_command(PlayerCommand::Teleport { x: -10, y: -10 });
    let p = e.tick().protagonist.unwrap();
    assert_eq!((p.x, p.y), (0, -10));
    let p = e.tick().protagonist.unwrap();
    assert_eq!((p.x, p.y), (0, 0));
}

// ---- Separation ----

#[test]
fn test_separation_pass() {
    let mut config = ArenaConfig::default();
    config.separation.min_distance = Some(100.0);
    let env = arena(vec![agent(1, 700, 300, 50, 50), agent(2, 720, 300, 50, 50)]);
    let mut e = ArenaEngine::with_environment(config, env).unwrap();
    let snap = e.tick();
    assert_eq!((snap.agents[0].x, snap.agents[1].x), (660, 760));
    assert!(snap.events.contains(&ArenaEvent::Separated {
        first: AgentId(1),
        second: AgentId(2)
    }));
}

// ---- Commands ----

#[test]
fn test_move_scales_by_speed() {
    let mut e = engine(vec![]);
    e.queue_command(PlayerCommand::Move { dx: 3, dy: -1 });
    let p = e.tick().protagonist.unwrap();
    assert_eq!((p.x, p.y), (405, 395));
}

#[test]
fn test_pause_and_resume() {
    let mut e = engine(vec![]);
    e.tick();
    e.queue_command(PlayerCommand::Pause);
    let snap = e.tick();
    assert_eq!(snap.phase, GamePhase::Paused);
    assert_eq!(snap.time.tick, 1);

    // Movement is ignored while paused.
    e.queue_command(PlayerCommand::Move { dx: 1, dy: 0 });
    let snap = e.tick();
    assert_eq!(snap.protagonist.unwrap().x, 400);

    e.queue_command(PlayerCommand::Resume);
    let snap = e.tick();
    assert_eq!(snap.phase, GamePhase::Running);
    assert_eq!(snap.time.tick, 2);
}

#[test]
fn test_fire_defeats_agent_and_wins() {
    // One enemy directly to the right of the protagonist, in the walkable band.
    let mut weak = agent(1, 600, 400, 50, 50);
    weak.set_health(20);
    let mut e = engine(vec![weak]);
    e.queue_command(PlayerCommand::Fire { dx: 1, dy: 0 });

    let mut saw_hit = false;
    let mut saw_defeat = false;
    for _ in 0..40 {
        let snap = e.tick();
        for event in &snap.events {
            match event {
                ArenaEvent::ProjectileHit { agent, .. } => {
                    assert_eq!(*agent, AgentId(1));
                    saw_hit = true;
                }
                ArenaEvent::AgentDefeated { agent } => {
                    assert_eq!(*agent, AgentId(1));
                    saw_defeat = true;
                }
                _ => {}
            }
        }
        if e.phase() == GamePhase::Victory {
            break;
        }
    }
    assert!(saw_hit && saw_defeat);
    assert_eq!(e.phase(), GamePhase::Victory);
    assert!(e.environment().agents().is_empty());
    assert!(e.environment().projectiles().is_empty());
}

#[test]
fn test_fire_without_direction_is_ignored() {
    let mut e = engine(vec![]);
    e.queue_command(PlayerCommand::Fire { dx: 0, dy: 0 });
    assert!(e.tick().projectiles.is_empty());
}

#[test]
fn test_restart_restores_level() {
    let mut e = engine(vec![agent(1, 420, 400, 50, 50)]);
    for _ in 0..10 {
        e.tick();
    }
    assert_eq!(e.phase(), GamePhase::GameOver);

    e.queue_command(PlayerCommand::Restart);
    let snap = e.tick();
    assert_eq!(snap.phase, GamePhase::Running);
    assert_eq!(snap.time.tick, 1);
    // Restored at full health, then one collision this tick.
    assert_eq!(snap.protagonist.unwrap().health, 90);
}

#[test]
fn test_new_engine_loads_level() {
    let e = ArenaEngine::new(ArenaConfig::default()).unwrap();
    let env = e.environment();
    assert_eq!(env.protagonist().unwrap().id, PROTAGONIST_ID);
    assert_eq!(env.agents().len(), 3);
    assert_eq!(e.phase(), GamePhase::Running);
}
