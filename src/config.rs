//! Tunable constants for the simulation and the terminal front end.
//!
//! Every field has a default, so a config file only needs to name the values
//! it overrides.  Loaded from JSON; the binary falls back to `Config::default()`
//! when no path is given.

use std::fmt;
use std::fs;
use std::ops::Range;
use std::path::Path;

use serde::Deserialize;

use crate::entities::FULL_HEALTH;

// ── Config ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    // Pools
    pub enemy_capacity: usize,
    pub projectile_capacity: usize,

    // Play field, pixel space, origin top-left
    pub field_width: i32,
    pub field_height: i32,

    // Player
    pub player_start_x: i32,
    pub player_start_y: i32,
    /// Offset from the player position where a new projectile appears.
    pub muzzle_offset_x: i32,
    pub muzzle_offset_y: i32,
    /// A new shot needs strictly more than this many frames since the last one.
    pub fire_cooldown_frames: u64,

    // Motion
    pub projectile_speed: i32,
    /// Projectiles at or above this y are despawned.
    pub despawn_y: i32,

    // Spawning
    pub respawn_y_min: i32,
    pub respawn_y_max: i32,
    pub initial_y_min: i32,
    pub initial_y_max: i32,
    /// Start with one live projectile in slot 0.
    pub startup_projectile: bool,

    // Combat
    pub hit_radius: i32,
    pub enemy_damage: i32,
    pub projectile_damage: i32,
    /// Enemies below this health render in their damaged variant.
    pub critical_health: i32,

    // Front end
    pub frame_ms: u64,
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            enemy_capacity: 500,
            projectile_capacity: 30,
            field_width: 1024,
            field_height: 700,
            player_start_x: 300,
            player_start_y: 600,
            muzzle_offset_x: -18,
            muzzle_offset_y: 12,
            fire_cooldown_frames: 10,
            projectile_speed: 5,
            despawn_y: -100,
            respawn_y_min: -200,
            respawn_y_max: -72,
            initial_y_min: 0,
            initial_y_max: 128,
            startup_projectile: false,
            hit_radius: 30,
            enemy_damage: 10,
            projectile_damage: 20,
            critical_health: 80,
            frame_ms: 10,
            seed: None,
        }
    }
}

impl Config {
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(text).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(ConfigError::Io)?;
        Self::from_json_str(&text)
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.enemy_capacity == 0 {
            return Err(ConfigError::Invalid("enemy_capacity must be at least 1"));
        }
        if self.projectile_capacity == 0 {
            return Err(ConfigError::Invalid("projectile_capacity must be at least 1"));
        }
        if self.field_width <= 0 || self.field_height <= 0 {
            return Err(ConfigError::Invalid("field dimensions must be positive"));
        }
        if self.respawn_y_min >= self.respawn_y_max {
            return Err(ConfigError::Invalid("respawn y band is empty"));
        }
        if self.initial_y_min >= self.initial_y_max {
            return Err(ConfigError::Invalid("initial y band is empty"));
        }
        if self.hit_radius <= 0 {
            return Err(ConfigError::Invalid("hit_radius must be positive"));
        }
        if self.enemy_damage <= 0 || self.projectile_damage <= 0 {
            return Err(ConfigError::Invalid("damage values must be positive"));
        }
        if self.projectile_speed <= 0 {
            return Err(ConfigError::Invalid("projectile_speed must be positive"));
        }
        if !(1..=FULL_HEALTH).contains(&self.critical_health) {
            return Err(ConfigError::Invalid("critical_health must be within 1..=100"));
        }
        if self.frame_ms == 0 {
            return Err(ConfigError::Invalid("frame_ms must be positive"));
        }
        Ok(())
    }

    pub fn respawn_x_range(&self) -> Range<i32> {
        0..self.field_width
    }

    pub fn respawn_y_range(&self) -> Range<i32> {
        self.respawn_y_min..self.respawn_y_max
    }

    pub fn initial_y_range(&self) -> Range<i32> {
        self.initial_y_min..self.initial_y_max
    }

    /// Squared hit distance; pairs strictly closer than this collide.
    pub fn hit_distance_sq(&self) -> i64 {
        let r = self.hit_radius as i64;
        r * r
    }
}

// ── Errors ───────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config: {}", e),
            ConfigError::Parse(e) => write!(f, "malformed config: {}", e),
            ConfigError::Invalid(why) => write!(f, "invalid config: {}", why),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}
