//! World boundary clamp for the protagonist.

use arena_core::agent::Agent;
use arena_core::enums::BorderMode;

/// Keep an agent's box inside `[0, width] x [0, height]`.
///
/// Returns whether the agent moved. On an axis where the box is larger than
/// the world it is pinned to 0, so repeated calls leave it there.
pub fn clamp_to_world(agent: &mut Agent, width: i32, height: i32, mode: BorderMode) -> bool {
    match mode {
        BorderMode::IndependentAxes => {
            let moved_x = clamp_axis(&mut agent.position.x, agent.size.width, width);
            let moved_y = clamp_axis(&mut agent.position.y, agent.size.height, height);
            moved_x || moved_y
        }
        BorderMode::FirstViolation => first_violation(agent, width, height),
    }
}

/// Largest coordinate that keeps a box of `extent` inside `[0, limit]`.
fn max_coord(extent: i32, limit: i32) -> i32 {
    limit.saturating_sub(extent).max(0)
}

fn clamp_axis(coord: &mut i32, extent: i32, limit: i32) -> bool {
    let max = max_coord(extent, limit);
    if *coord < 0 {
        *coord = 0;
        true
    } else if *coord > max {
        *coord = max;
        true
    } else {
        false
    }
}

/// Fix only the first violated bound, checked low-x, high-x, low-y, high-y.
fn first_violation(agent: &mut Agent, width: i32, height: i32) -> bool {
    let max_x = max_coord(agent.size.width, width);
    let max_y = max_coord(agent.size.height, height);
    let pos = &mut agent.position;
    if pos.x < 0 {
        pos.x = 0;
    } else if pos.x > max_x {
        pos.x = max_x;
    } else if pos.y < 0 {
        pos.y = 0;
    } else if pos.y > max_y {
        pos.y = max_y;
    } else {
        return false;
    }
    true
}
