//! Level and simulation configuration, loadable from TOML.
//!
//! Every field has a default matching `constants`, so a config file only
//! needs to name what it changes.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::BorderMode;
use crate::error::{ArenaError, Result};
use crate::types::{ImageHandle, Position, Size};
use crate::zones::ZoneRules;

/// Complete configuration for one arena session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    pub tick_rate: u32,
    pub border_mode: BorderMode,
    pub world: WorldConfig,
    pub zones: ZoneRules,
    pub combat: CombatConfig,
    pub separation: SeparationConfig,
    pub level: LevelConfig,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            tick_rate: TICK_RATE,
            border_mode: BorderMode::default(),
            world: WorldConfig::default(),
            zones: ZoneRules::default(),
            combat: CombatConfig::default(),
            separation: SeparationConfig::default(),
            level: LevelConfig::default(),
        }
    }
}

/// Placement, size and artwork of the playfield.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub background: Option<ImageHandle>,
    pub pause_image: Option<ImageHandle>,
    pub victory_image: Option<ImageHandle>,
    pub game_over_image: Option<ImageHandle>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            x: 0,
            y: 0,
            width: WORLD_WIDTH,
            height: WORLD_HEIGHT,
            background: None,
            pause_image: None,
            victory_image: None,
            game_over_image: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatConfig {
    /// Damage per overlapping agent per collision pass.
    pub collision_damage: i32,
    /// Ticks an agent must wait before it can damage the protagonist again.
    /// Zero means damage every tick while overlapping.
    pub contact_cooldown_ticks: u64,
    pub projectile_damage: i32,
    pub projectile_speed: i32,
    pub projectile_size: Size,
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            collision_damage: COLLISION_DAMAGE,
            contact_cooldown_ticks: 0,
            projectile_damage: PROJECTILE_DAMAGE,
            projectile_speed: PROJECTILE_SPEED,
            projectile_size: Size::new(PROJECTILE_WIDTH, PROJECTILE_HEIGHT),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeparationConfig {
    /// Minimum distance kept between every pair of agents. `None` disables
    /// the separation pass.
    pub min_distance: Option<f64>,
}

/// What the level spawns at load time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelConfig {
    pub protagonist_start: Position,
    pub protagonist_size: Size,
    pub protagonist_health: i32,
    pub protagonist_speed: i32,
    pub protagonist_image: Option<ImageHandle>,
    pub enemy_count: u32,
    pub enemy_size: Size,
    pub enemy_health: i32,
    pub enemy_speed: i32,
    pub enemy_image: Option<ImageHandle>,
    pub projectile_image: Option<ImageHandle>,
    /// Remove agents from the roster once their health reaches zero.
    pub despawn_defeated: bool,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            protagonist_start: Position::new(PROTAGONIST_START_X, PROTAGONIST_START_Y),
            protagonist_size: Size::new(PROTAGONIST_WIDTH, PROTAGONIST_HEIGHT),
            protagonist_health: PROTAGONIST_HEALTH,
            protagonist_speed: PROTAGONIST_SPEED,
            protagonist_image: None,
            enemy_count: ENEMY_COUNT,
            enemy_size: Size::new(ENEMY_WIDTH, ENEMY_HEIGHT),
            enemy_health: ENEMY_HEALTH,
            enemy_speed: ENEMY_SPEED,
            enemy_image: None,
            projectile_image: None,
            despawn_defeated: true,
        }
    }
}

impl ArenaConfig {
    /// Parse and validate a config from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ArenaConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        if self.world.width <= 0 || self.world.height <= 0 {
            return Err(ArenaError::InvalidConfig(format!(
                "world size {}x{} must be positive",
                self.world.width, self.world.height
            )));
        }
        if self.tick_rate == 0 {
            return Err(ArenaError::InvalidConfig("tick_rate must be non-zero".into()));
        }
        self.zones.validate()?;

        let combat = &self.combat;
        if combat.collision_damage < 0 || combat.projectile_damage < 0 {
            return Err(ArenaError::InvalidConfig("damage must be non-negative".into()));
        }
        if combat.projectile_speed <= 0 {
            return Err(ArenaError::InvalidConfig(
                "projectile_speed must be positive".into(),
            ));
        }
        if !combat.projectile_size.is_valid() {
            return Err(ArenaError::InvalidConfig(
                "projectile_size must be positive".into(),
            ));
        }

        if let Some(min) = self.separation.min_distance {
            if !min.is_finite() || min <= 0.0 {
                return Err(ArenaError::InvalidConfig(format!(
                    "separation min_distance {min} must be finite and positive"
                )));
            }
        }

        let level = &self.level;
        if !level.protagonist_size.is_valid() || !level.enemy_size.is_valid() {
            return Err(ArenaError::InvalidConfig("agent sizes must be positive".into()));
        }
        if level.protagonist_health <= 0 || level.enemy_health <= 0 {
            return Err(ArenaError::InvalidConfig("agent health must be positive".into()));
        }
        Ok(())
    }
}
