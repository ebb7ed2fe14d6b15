//! Projectile system: moves projectiles, applies hits, drops strays.

use tracing::debug;

use arena_core::events::ArenaEvent;

use crate::environment::Environment;

/// Advance every projectile one tick.
///
/// A projectile that overlaps a live roster agent after moving damages the
/// first such agent in roster order and is removed. A projectile whose box
/// no longer touches the world rectangle is removed.
pub fn run(env: &mut Environment, events: &mut Vec<ArenaEvent>) {
    let world = env.bounds();
    let (projectiles, agents) = env.projectiles_and_agents_mut();

    projectiles.retain_mut(|projectile| {
        projectile.step();
        let bounds = projectile.bounds();

        if let Some(target) = agents
            .iter_mut()
            .find(|a| !a.is_defeated() && a.bounds().overlaps(&bounds))
        {
            target.take_damage(projectile.damage);
            debug!(
                agent = %target.id,
                damage = projectile.damage,
                health = target.health.current,
                "projectile hit"
            );
            events.push(ArenaEvent::ProjectileHit {
                projectile: projectile.id,
                agent: target.id,
                damage: projectile.damage,
                remaining_health: target.health.current,
            });
            return false;
        }

        world.overlaps(&bounds)
    });
}
