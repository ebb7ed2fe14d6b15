//! Projectiles fired by the protagonist.

use serde::{Deserialize, Serialize};

use crate::types::{ImageHandle, Position, Rect, Size, Velocity};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectileId(pub u32);

/// A moving box that damages the first agent it touches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub id: ProjectileId,
    pub position: Position,
    pub size: Size,
    pub velocity: Velocity,
    pub damage: i32,
    pub image: Option<ImageHandle>,
}

impl Projectile {
    pub fn bounds(&self) -> Rect {
        Rect::from_parts(self.position, self.size)
    }

    /// Advance one tick along the velocity.
    pub fn step(&mut self) {
        self.position.translate(self.velocity.dx, self.velocity.dy);
    }
}
