//! Low-level drawing surface.

use serde::{Deserialize, Serialize};

use arena_core::agent::Agent;
use arena_core::types::{ImageHandle, Rect};

/// Height of a life bar in pixels.
pub const LIFE_BAR_HEIGHT: i32 = 5;
/// Gap between the top of an agent's box and its life bar.
pub const LIFE_BAR_GAP: i32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    /// Life bars of roster agents.
    DarkRed,
    /// The protagonist's life bar.
    Green,
}

/// Geometry of a life bar drawn above an agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifeBar {
    /// Full outline of the bar.
    pub frame: Rect,
    /// Width of the filled part, proportional to remaining health.
    pub fill_width: i32,
}

impl LifeBar {
    /// Bar as wide as the agent, sitting just above its box.
    pub fn above(agent: &Agent) -> Self {
        let width = agent.width();
        Self {
            frame: Rect::new(
                agent.x(),
                agent.y().saturating_sub(LIFE_BAR_GAP),
                width,
                LIFE_BAR_HEIGHT,
            ),
            fill_width: (width as f64 * agent.health.fraction()).round() as i32,
        }
    }
}

/// A surface the mediator draws on.
pub trait Canvas {
    /// Wipe the whole surface.
    fn clear_screen(&mut self, width: i32, height: i32);

    /// Draw an image stretched into `dest`. `None` means the entity has no
    /// artwork; a canvas may draw a placeholder or nothing.
    fn draw_image(&mut self, image: Option<&ImageHandle>, dest: Rect);

    fn draw_life_bar(&mut self, bar: &LifeBar, color: Color);

    /// Small status panel anchored at the protagonist's position.
    fn draw_status_panel(&mut self, x: i32, y: i32);

    /// Draw a full-screen overlay (pause, victory, game over).
    fn draw_screen(&mut self, image: &ImageHandle, dest: Rect);

    /// Natural pixel size of an image, if the canvas knows it.
    fn image_size(&self, image: &ImageHandle) -> Option<(i32, i32)>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_core::agent::AgentId;
    use arena_core::types::{Position, Size};

    fn agent_with(current: i32, full: i32) -> Agent {
        let mut agent =
            Agent::new(AgentId(1), Position::new(100, 200), Size::new(50, 40), full).unwrap();
        agent.set_health(current);
        agent
    }

    #[test]
    fn test_life_bar_fill() {
        let bar = LifeBar::above(&agent_with(30, 100));
        assert_eq!(bar.frame, Rect::new(100, 190, 50, 5));
        assert_eq!(bar.fill_width, 15);

        assert_eq!(LifeBar::above(&agent_with(0, 100)).fill_width, 0);
        assert_eq!(LifeBar::above(&agent_with(100, 100)).fill_width, 50);
        assert_eq!(LifeBar::above(&agent_with(10, 0)).fill_width, 0);
    }
}
