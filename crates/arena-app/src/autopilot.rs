//! Scripted stand-in for player input.
//!
//! Lines the protagonist up with the nearest agent and fires at it on a
//! fixed cadence.

use arena_core::commands::PlayerCommand;
use arena_core::state::{AgentView, ArenaSnapshot};

pub struct Autopilot {
    fire_interval: u64,
}

impl Autopilot {
    /// `fire_interval` is the number of ticks between shots; zero never fires.
    pub fn new(fire_interval: u64) -> Self {
        Self { fire_interval }
    }

    /// Commands for the tick after `snapshot`.
    pub fn next_commands(&self, snapshot: &ArenaSnapshot) -> Vec<PlayerCommand> {
        let Some(protagonist) = &snapshot.protagonist else {
            return Vec::new();
        };
        let Some(target) = nearest(protagonist, &snapshot.agents) else {
            return Vec::new();
        };

        let mut commands = Vec::new();
        let dy = target.y.saturating_sub(protagonist.y).signum();
        if dy != 0 {
            commands.push(PlayerCommand::Move { dx: 0, dy });
        }

        let tick = snapshot.time.tick;
        if self.fire_interval > 0 && tick % self.fire_interval == 0 {
            let dx = target.x.saturating_sub(protagonist.x).signum();
            let fire = if dx != 0 {
                PlayerCommand::Fire { dx, dy: 0 }
            } else {
                PlayerCommand::Fire { dx: 0, dy: dy.max(1) }
            };
            commands.push(fire);
        }
        commands
    }
}

fn nearest<'a>(from: &AgentView, agents: &'a [AgentView]) -> Option<&'a AgentView> {
    let distance_sq = |a: &AgentView| {
        let dx = (a.x - from.x) as i64;
        let dy = (a.y - from.y) as i64;
        dx * dx + dy * dy
    };
    agents.iter().min_by_key(|a| distance_sq(a))
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_core::agent::AgentId;
    use arena_core::types::SimTime;

    fn view(id: u32, x: i32, y: i32) -> AgentView {
        AgentView {
            id: AgentId(id),
            x,
            y,
            width: 50,
            height: 50,
            health: 100,
            full_health: 100,
            image: None,
        }
    }

    fn snapshot(tick: u64, agents: Vec<AgentView>) -> ArenaSnapshot {
        ArenaSnapshot {
            time: SimTime { tick },
            protagonist: Some(view(0, 400, 400)),
            agents,
            ..Default::default()
        }
    }

    #[test]
    fn test_aims_at_nearest() {
        let pilot = Autopilot::new(10);
        let commands = pilot.next_commands(&snapshot(20, vec![view(1, 900, 300), view(2, 300, 450)]));
        assert_eq!(
            commands,
            vec![
                PlayerCommand::Move { dx: 0, dy: 1 },
                PlayerCommand::Fire { dx: -1, dy: 0 },
            ]
        );
    }

    #[test]
    fn test_fires_on_cadence_only() {
        let pilot = Autopilot::new(10);
        let commands = pilot.next_commands(&snapshot(7, vec![view(1, 900, 400)]));
        assert!(commands.is_empty());
    }

    #[test]
    fn test_idle_without_targets() {
        let pilot = Autopilot::new(1);
        assert!(pilot.next_commands(&snapshot(0, vec![])).is_empty());
    }
}
