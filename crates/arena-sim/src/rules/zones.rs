//! Zone-restricted clamp for roster agents.

use arena_core::agent::Agent;
use arena_core::types::Position;
use arena_core::zones::{CornerZone, ZoneRules};

/// Adjust an agent's position to satisfy the zone rules.
///
/// Corrections run in a fixed order, each on the result of the previous
/// one: clamp y into `[upper_limit, lower_limit]`, clamp x into
/// `[left_limit, right_limit]`, then push the agent out of the top-left and
/// top-right blocks. Only the top-left corner of the agent's box is tested.
/// Returns whether the agent moved.
pub fn check_and_adjust_position(agent: &mut Agent, rules: &ZoneRules) -> bool {
    let before = agent.position;
    let pos = &mut agent.position;

    if pos.y < rules.upper_limit {
        pos.y = rules.upper_limit;
    }
    if pos.y > rules.lower_limit {
        pos.y = rules.lower_limit;
    }
    if pos.x < rules.left_limit {
        pos.x = rules.left_limit;
    }
    if pos.x > rules.right_limit {
        pos.x = rules.right_limit;
    }

    push_out_of_corner(pos, &rules.top_left);
    push_out_of_corner(pos, &rules.top_right);

    agent.position != before
}

fn push_out_of_corner(pos: &mut Position, corner: &CornerZone) {
    if !corner.contains(*pos) {
        return;
    }
    if corner.in_snap_band(*pos) {
        pos.x = corner.edge;
    } else {
        pos.y = corner.bottom;
    }
}
