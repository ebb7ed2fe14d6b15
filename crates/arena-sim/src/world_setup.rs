//! Level setup: builds the environment, the protagonist and the initial
//! roster from config.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use arena_core::agent::{Agent, AgentId};
use arena_core::config::{ArenaConfig, LevelConfig};
use arena_core::enums::Behavior;
use arena_core::error::Result;
use arena_core::types::Position;
use arena_core::zones::ZoneRules;

use crate::environment::Environment;
use crate::rules::zones;

/// The protagonist always carries this id; roster agents start at 1.
pub const PROTAGONIST_ID: AgentId = AgentId(0);

/// Build a fresh level.
pub fn setup_level(config: &ArenaConfig, rng: &mut ChaCha8Rng) -> Result<Environment> {
    let mut env = Environment::from_config(&config.world)?;
    env.set_protagonist(spawn_protagonist(&config.level)?);
    spawn_enemies(&mut env, &config.level, &config.zones, rng)?;
    info!(
        width = env.width(),
        height = env.height(),
        agents = env.agents().len(),
        "level loaded"
    );
    Ok(env)
}

/// Create the protagonist at its configured start.
pub fn spawn_protagonist(level: &LevelConfig) -> Result<Agent> {
    let mut protagonist = Agent::new(
        PROTAGONIST_ID,
        level.protagonist_start,
        level.protagonist_size,
        level.protagonist_health,
    )?;
    protagonist.speed = level.protagonist_speed;
    protagonist.image = level.protagonist_image.clone();
    Ok(protagonist)
}

/// Spawn `enemy_count` chasing agents at random spots of the walkable band,
/// already moved out of any blocked corner.
pub fn spawn_enemies(
    env: &mut Environment,
    level: &LevelConfig,
    rules: &ZoneRules,
    rng: &mut ChaCha8Rng,
) -> Result<()> {
    let max_x = (rules.right_limit - level.enemy_size.width).max(rules.left_limit);
    for n in 0..level.enemy_count {
        let position = Position::new(
            rng.gen_range(rules.left_limit..=max_x),
            rng.gen_range(rules.upper_limit..=rules.lower_limit),
        );
        let mut enemy = Agent::new(AgentId(n + 1), position, level.enemy_size, level.enemy_health)?
            .with_behavior(Behavior::Chase, level.enemy_speed);
        enemy.image = level.enemy_image.clone();
        zones::check_and_adjust_position(&mut enemy, rules);
        env.spawn_agent(enemy);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_setup_level_defaults() {
        let config = ArenaConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let env = setup_level(&config, &mut rng).unwrap();

        assert_eq!((env.width(), env.height()), (1280, 720));
        let protagonist = env.protagonist().unwrap();
        assert_eq!(protagonist.id, PROTAGONIST_ID);
        assert_eq!(protagonist.position, config.level.protagonist_start);
        assert_eq!(env.agents().len(), config.level.enemy_count as usize);

        for (i, agent) in env.agents().iter().enumerate() {
            assert_eq!(agent.id, AgentId(i as u32 + 1));
            assert_eq!(agent.behavior, Behavior::Chase);
            assert!(agent.position.y >= 230 && agent.position.y <= 580);
            assert!(!config.zones.top_left.contains(agent.position));
            assert!(!config.zones.top_right.contains(agent.position));
        }
    }

    #[test]
    fn test_setup_level_is_seeded() {
        let config = ArenaConfig::default();
        let a = setup_level(&config, &mut ChaCha8Rng::seed_from_u64(9)).unwrap();
        let b = setup_level(&config, &mut ChaCha8Rng::seed_from_u64(9)).unwrap();
        assert_eq!(a, b);
    }
}
