//! All simulation entity types: pure data, minimal logic.

use crate::config::Config;
use crate::pool::{EntityPool, Slot};

/// Health of a freshly spawned enemy or projectile.
pub const FULL_HEALTH: i32 = 100;

// ── Entities ─────────────────────────────────────────────────────────────────

/// One enemy or projectile.  Pixel-space position, origin top-left, y down.
///
/// There is no separate alive flag: a slot is live while `health > 0`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Entity {
    pub x: i32,
    pub y: i32,
    pub health: i32,
}

pub type Enemy = Entity;
pub type Projectile = Entity;

impl Entity {
    pub fn spawned_at(x: i32, y: i32) -> Self {
        Entity { x, y, health: FULL_HEALTH }
    }

    pub fn is_live(&self) -> bool {
        self.health > 0
    }

    /// Subtract `amount`, never going below zero.
    pub fn take_damage(&mut self, amount: i32) {
        self.health = (self.health - amount).max(0);
    }

    pub fn kill(&mut self) {
        self.health = 0;
    }
}

impl Slot for Entity {
    fn is_live(&self) -> bool {
        Entity::is_live(self)
    }
}

// ── Player ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerState {
    pub x: i32,
    pub y: i32,
    pub firing: bool,
    /// Frame of the last accepted fire request; `None` until the first one.
    pub last_fire_frame: Option<u64>,
}

// ── Time ─────────────────────────────────────────────────────────────────────

/// Frame counter.  Holds the number of the frame about to be simulated,
/// starting at 1; one `advance` per completed step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameClock {
    frame: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        FrameClock { frame: 1 }
    }

    pub fn current(&self) -> u64 {
        self.frame
    }

    pub fn advance(&mut self) {
        self.frame += 1;
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

// ── Input ────────────────────────────────────────────────────────────────────

/// What the input layer delivers each frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickInput {
    pub player_x: i32,
    pub firing: bool,
}

// ── Master game state ────────────────────────────────────────────────────────

/// Everything one simulation step reads and writes.
#[derive(Clone, Debug)]
pub struct GameState {
    pub player: PlayerState,
    pub enemies: EntityPool<Enemy>,
    pub projectiles: EntityPool<Projectile>,
    pub clock: FrameClock,
    pub config: Config,
}

impl GameState {
    /// Empty state: every slot in both pools is dead.
    pub fn new(config: Config) -> Self {
        GameState {
            player: PlayerState {
                x: config.player_start_x,
                y: config.player_start_y,
                firing: false,
                last_fire_frame: None,
            },
            enemies: EntityPool::new(config.enemy_capacity),
            projectiles: EntityPool::new(config.projectile_capacity),
            clock: FrameClock::new(),
            config,
        }
    }
}
