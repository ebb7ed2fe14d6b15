//! Agent intent system.
//!
//! Steps every roster agent according to its `Behavior`. Runs before the
//! spatial rules so that clamping sees this tick's intended positions.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use arena_core::enums::Behavior;

use crate::environment::Environment;

/// Move roster agents by their behavior.
///
/// `Chase` agents step toward the protagonist by at most `speed` per axis
/// and stand still without one. `Wander` agents take a uniform random step
/// in `[-speed, speed]` on each axis.
pub fn run(env: &mut Environment, rng: &mut ChaCha8Rng) {
    let target = env.protagonist().map(|p| p.position);

    for agent in env.agents_mut() {
        if agent.is_defeated() {
            continue;
        }
        let speed = agent.speed.max(0);
        match agent.behavior {
            Behavior::Idle => {}
            Behavior::Chase => {
                if let Some(target) = target {
                    let dx = target.x.saturating_sub(agent.position.x).clamp(-speed, speed);
                    let dy = target.y.saturating_sub(agent.position.y).clamp(-speed, speed);
                    agent.position.translate(dx, dy);
                }
            }
            Behavior::Wander => {
                let dx = rng.gen_range(-speed..=speed);
                let dy = rng.gen_range(-speed..=speed);
                agent.position.translate(dx, dy);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_core::agent::{Agent, AgentId};
    use arena_core::types::{Position, Size};
    use rand::SeedableRng;

    fn env_with(agent: Agent) -> Environment {
        let mut env = Environment::new(0, 0, 1280, 720).unwrap();
        env.set_protagonist(
            Agent::new(AgentId(0), Position::new(100, 100), Size::new(20, 20), 100).unwrap(),
        );
        env.spawn_agent(agent);
        env
    }

    #[test]
    fn test_chase_steps_toward_protagonist() {
        let chaser = Agent::new(AgentId(1), Position::new(110, 300), Size::new(20, 20), 100)
            .unwrap()
            .with_behavior(Behavior::Chase, 4);
        let mut env = env_with(chaser);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        run(&mut env, &mut rng);
        assert_eq!(env.agents()[0].position, Position::new(106, 296));

        for _ in 0..100 {
            run(&mut env, &mut rng);
        }
        assert_eq!(env.agents()[0].position, Position::new(100, 100));
    }

    #[test]
    fn test_wander_stays_within_speed() {
        let wanderer = Agent::new(AgentId(1), Position::new(500, 500), Size::new(20, 20), 100)
            .unwrap()
            .with_behavior(Behavior::Wander, 3);
        let mut env = env_with(wanderer);
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..50 {
            let before = env.agents()[0].position;
            run(&mut env, &mut rng);
            let after = env.agents()[0].position;
            assert!((after.x - before.x).abs() <= 3);
            assert!((after.y - before.y).abs() <= 3);
        }
    }

    #[test]
    fn test_idle_does_not_move() {
        let idle = Agent::new(AgentId(1), Position::new(500, 500), Size::new(20, 20), 100).unwrap();
        let mut env = env_with(idle);
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        run(&mut env, &mut rng);
        assert_eq!(env.agents()[0].position, Position::new(500, 500));
    }
}
