//! Agents: positioned entities with a bounding box and health.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::enums::Behavior;
use crate::error::{ArenaError, Result};
use crate::types::{ImageHandle, Position, Rect, Size};

/// Stable identity of an agent within an environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AgentId(pub u32);

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "agent#{}", self.0)
    }
}

/// Current and full health. `current` stays within `[0, full]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    pub current: i32,
    pub full: i32,
}

impl Health {
    pub fn new(full: i32) -> Self {
        Self {
            current: full,
            full,
        }
    }

    /// Fraction of full health remaining, in `[0.0, 1.0]`.
    pub fn fraction(&self) -> f64 {
        if self.full <= 0 {
            return 0.0;
        }
        (self.current as f64 / self.full as f64).clamp(0.0, 1.0)
    }
}

/// A positional entity: the protagonist, a non-player agent, or anything
/// else the environment tracks by bounding box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    pub id: AgentId,
    pub position: Position,
    pub size: Size,
    pub health: Health,
    /// Movement budget per tick, per axis.
    pub speed: i32,
    pub behavior: Behavior,
    pub image: Option<ImageHandle>,
}

impl Agent {
    /// Create an agent at full health. Fails if the size is not positive.
    pub fn new(id: AgentId, position: Position, size: Size, full_health: i32) -> Result<Self> {
        if !size.is_valid() {
            return Err(ArenaError::InvalidGeometry(format!(
                "{id} has non-positive size {}x{}",
                size.width, size.height
            )));
        }
        Ok(Self {
            id,
            position,
            size,
            health: Health::new(full_health.max(0)),
            speed: 0,
            behavior: Behavior::Idle,
            image: None,
        })
    }

    pub fn with_image(mut self, image: ImageHandle) -> Self {
        self.image = Some(image);
        self
    }

    pub fn with_behavior(mut self, behavior: Behavior, speed: i32) -> Self {
        self.behavior = behavior;
        self.speed = speed;
        self
    }

    pub fn x(&self) -> i32 {
        self.position.x
    }

    pub fn y(&self) -> i32 {
        self.position.y
    }

    pub fn width(&self) -> i32 {
        self.size.width
    }

    pub fn height(&self) -> i32 {
        self.size.height
    }

    pub fn set_position(&mut self, x: i32, y: i32) {
        self.position = Position::new(x, y);
    }

    /// Replace the bounding box size. Fails if either dimension is not positive.
    pub fn set_size(&mut self, size: Size) -> Result<()> {
        if !size.is_valid() {
            return Err(ArenaError::InvalidGeometry(format!(
                "{} cannot take size {}x{}",
                self.id, size.width, size.height
            )));
        }
        self.size = size;
        Ok(())
    }

    /// Set current health, clamped to `[0, full]`.
    pub fn set_health(&mut self, current: i32) {
        self.health.current = current.clamp(0, self.health.full);
    }

    pub fn full_health(&self) -> i32 {
        self.health.full
    }

    /// Reduce current health by `amount`, never below zero. Negative
    /// amounts deal no damage.
    pub fn take_damage(&mut self, amount: i32) {
        self.health.current = self.health.current.saturating_sub(amount.max(0)).max(0);
    }

    /// Zero health is the externally visible death signal.
    pub fn is_defeated(&self) -> bool {
        self.health.current <= 0
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_parts(self.position, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn agent() -> Agent {
        Agent::new(AgentId(1), Position::new(10, 20), Size::new(30, 40), 100).unwrap()
    }

    #[test]
    fn test_take_damage_floors_at_zero() {
        let mut a = agent();
        a.take_damage(30);
        assert_eq!(a.health.current, 70);
        a.take_damage(500);
        assert_eq!(a.health.current, 0);
        assert!(a.is_defeated());
    }

    #[test]
    fn test_negative_damage_never_heals() {
        let mut a = agent();
        a.take_damage(-50);
        assert_eq!(a.health, Health { current: 100, full: 100 });
        a.take_damage(40);
        a.take_damage(i32::MIN);
        assert_eq!(a.health.current, 60);
    }

    #[test]
    fn test_set_health_clamped_to_full() {
        let mut a = agent();
        a.set_health(250);
        assert_eq!(a.health.current, 100);
        a.set_health(-5);
        assert_eq!(a.health.current, 0);
    }

    #[test]
    fn test_rejects_non_positive_size() {
        let err = Agent::new(AgentId(2), Position::default(), Size::new(0, 10), 10);
        assert!(matches!(err, Err(ArenaError::InvalidGeometry(_))));

        let mut a = agent();
        assert!(a.set_size(Size::new(5, -1)).is_err());
        assert_eq!(a.size, Size::new(30, 40));
    }

    #[test]
    fn test_bounds_match_geometry() {
        let b = agent().bounds();
        assert_eq!(b, Rect::new(10, 20, 30, 40));
        assert_eq!(b.right(), 40);
        assert_eq!(b.bottom(), 60);
    }
}
