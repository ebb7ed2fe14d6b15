//! Simulation constants and tuning parameters.
//!
//! These are the defaults behind `ArenaConfig`; a level may override any
//! of them from its config file.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

// --- World bounds ---

pub const WORLD_WIDTH: i32 = 1280;
pub const WORLD_HEIGHT: i32 = 720;

// --- Zone restriction ---

/// Agents may not walk above this line.
pub const ZONE_UPPER_LIMIT: i32 = 230;
/// Agents may not walk below this line.
pub const ZONE_LOWER_LIMIT: i32 = 580;
pub const ZONE_LEFT_LIMIT: i32 = 0;
pub const ZONE_RIGHT_LIMIT: i32 = 1280;

/// Top-left restricted block: x < 110 and y < 375.
pub const TOP_LEFT_ZONE_EDGE: i32 = 110;
pub const TOP_LEFT_ZONE_BOTTOM: i32 = 375;

/// Top-right restricted block: x > 1050 and y < 405.
pub const TOP_RIGHT_ZONE_EDGE: i32 = 1050;
pub const TOP_RIGHT_ZONE_BOTTOM: i32 = 405;

/// Width of the band next to a corner block's vertical edge in which an
/// agent is pushed sideways instead of down.
pub const ZONE_SNAP_MARGIN: i32 = 5;

// --- Combat ---

/// Damage the protagonist takes per overlapping agent per collision pass.
pub const COLLISION_DAMAGE: i32 = 10;

pub const PROJECTILE_DAMAGE: i32 = 25;
/// Projectile travel per tick along its firing direction.
pub const PROJECTILE_SPEED: i32 = 12;
pub const PROJECTILE_WIDTH: i32 = 80;
pub const PROJECTILE_HEIGHT: i32 = 60;

// --- Level defaults ---

pub const PROTAGONIST_HEALTH: i32 = 100;
pub const PROTAGONIST_WIDTH: i32 = 65;
pub const PROTAGONIST_HEIGHT: i32 = 90;
pub const PROTAGONIST_SPEED: i32 = 4;
pub const PROTAGONIST_START_X: i32 = 400;
pub const PROTAGONIST_START_Y: i32 = 390;

pub const ENEMY_COUNT: u32 = 3;
pub const ENEMY_HEALTH: i32 = 100;
pub const ENEMY_WIDTH: i32 = 65;
pub const ENEMY_HEIGHT: i32 = 90;
pub const ENEMY_SPEED: i32 = 1;
