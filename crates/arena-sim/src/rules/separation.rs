//! Minimum-distance enforcement between agents.

use glam::IVec2;
use tracing::debug;

use arena_core::agent::{Agent, AgentId};

/// Push two agents apart so their top-left corners end up `min_distance`
/// apart.
///
/// Only acts when `0 < distance < min_distance`. Each agent moves half of
/// the deficit along the line between them, in opposite directions. The
/// shift is rounded to whole pixels once, so both agents move by exactly
/// the same amount. Agents on the same spot are left alone. Returns whether
/// either agent moved.
pub fn maintain_distance(a: &mut Agent, b: &mut Agent, min_distance: f64) -> bool {
    let delta = b.position.as_dvec2() - a.position.as_dvec2();
    let distance = delta.length();
    if !(distance > 0.0 && distance < min_distance) {
        return false;
    }

    let push = delta / distance * ((min_distance - distance) * 0.5);
    let shift: IVec2 = push.round().as_ivec2();
    if shift == IVec2::ZERO {
        return false;
    }

    a.position.translate(-shift.x, -shift.y);
    b.position.translate(shift.x, shift.y);
    true
}

/// Run `maintain_distance` over every unordered pair, in roster order.
pub fn enforce_separation(agents: &mut [Agent], min_distance: f64) -> Vec<(AgentId, AgentId)> {
    let mut moved = Vec::new();
    for j in 1..agents.len() {
        let (left, right) = agents.split_at_mut(j);
        let second = &mut right[0];
        for first in left.iter_mut() {
            if maintain_distance(first, second, min_distance) {
                debug!(first = %first.id, second = %second.id, "separated agents");
                moved.push((first.id, second.id));
            }
        }
    }
    moved
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_core::types::{Position, Size};

    fn agent(id: u32, x: i32, y: i32) -> Agent {
        Agent::new(AgentId(id), Position::new(x, y), Size::new(50, 50), 100).unwrap()
    }

    #[test]
    fn test_pushes_apart_to_min_distance() {
        let mut a = agent(1, 100, 100);
        let mut b = agent(2, 120, 100);
        assert!(maintain_distance(&mut a, &mut b, 100.0));
        assert_eq!(a.position, Position::new(60, 100));
        assert_eq!(b.position, Position::new(160, 100));
        assert!((a.position.distance_to(&b.position) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_diagonal_push() {
        let mut a = agent(1, 0, 0);
        let mut b = agent(2, 30, 40);
        assert!(maintain_distance(&mut a, &mut b, 100.0));
        // Distance 50, deficit 50, half 25 along (0.6, 0.8).
        assert_eq!(a.position, Position::new(-15, -20));
        assert_eq!(b.position, Position::new(45, 60));
    }

    #[test]
    fn test_far_enough_is_untouched() {
        let mut a = agent(1, 0, 0);
        let mut b = agent(2, 100, 0);
        assert!(!maintain_distance(&mut a, &mut b, 100.0));
        assert_eq!(b.position, Position::new(100, 0));
    }

    #[test]
    fn test_same_spot_is_skipped() {
        let mut a = agent(1, 10, 10);
        let mut b = agent(2, 10, 10);
        assert!(!maintain_distance(&mut a, &mut b, 100.0));
        assert_eq!(a.position, b.position);
    }

    #[test]
    fn test_enforce_separation_pairs() {
        let mut agents = vec![agent(1, 0, 0), agent(2, 10, 0), agent(3, 500, 500)];
        let moved = enforce_separation(&mut agents, 50.0);
        assert_eq!(moved, vec![(AgentId(1), AgentId(2))]);
        assert_eq!(agents[0].position, Position::new(-20, 0));
        assert_eq!(agents[1].position, Position::new(30, 0));
        assert_eq!(agents[2].position, Position::new(500, 500));
    }
}
