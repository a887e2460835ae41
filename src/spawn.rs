//! Spawn rules: enemy respawn-in-place, initial population, and firing.
//!
//! Neither pool ever grows.  Enemies reuse their own slot the frame after they
//! die; projectiles take the first dead slot and are dropped when none is free.

use log::debug;
use rand::Rng;

use crate::config::Config;
use crate::entities::{Enemy, Entity, PlayerState, Projectile};
use crate::pool::EntityPool;

/// Where the optional startup projectile sits.
const STARTUP_PROJECTILE_X: i32 = 200;
const STARTUP_PROJECTILE_Y: i32 = 600;

/// Result of the firing check for one frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FireOutcome {
    /// Fire control not held.
    Idle,
    /// Held, but the last shot is too recent.
    CoolingDown,
    /// A projectile now occupies this slot.
    Spawned(usize),
    /// Every projectile slot was live; the shot is lost.
    Dropped,
}

// ── Enemies ──────────────────────────────────────────────────────────────────

/// Reinitialise `enemy` above the field with full health.
pub fn respawn_enemy(enemy: &mut Enemy, config: &Config, rng: &mut impl Rng) {
    let x = rng.gen_range(config.respawn_x_range());
    let y = rng.gen_range(config.respawn_y_range());
    *enemy = Entity::spawned_at(x, y);
}

/// Respawn every dead enemy in index order.  Returns how many were respawned.
pub fn respawn_dead_enemies(
    enemies: &mut EntityPool<Enemy>,
    config: &Config,
    rng: &mut impl Rng,
) -> usize {
    let mut respawned = 0;
    for enemy in enemies.slots_mut() {
        if !enemy.is_live() {
            respawn_enemy(enemy, config, rng);
            respawned += 1;
        }
    }
    respawned
}

/// Fill every enemy slot with a fresh enemy inside the top band of the field.
pub fn populate_enemies(enemies: &mut EntityPool<Enemy>, config: &Config, rng: &mut impl Rng) {
    for enemy in enemies.slots_mut() {
        let x = rng.gen_range(config.respawn_x_range());
        let y = rng.gen_range(config.initial_y_range());
        *enemy = Entity::spawned_at(x, y);
    }
}

// ── Projectiles ──────────────────────────────────────────────────────────────

pub fn place_startup_projectile(projectiles: &mut EntityPool<Projectile>) {
    if let Some(slot) = projectiles.get_mut(0) {
        *slot = Entity::spawned_at(STARTUP_PROJECTILE_X, STARTUP_PROJECTILE_Y);
    }
}

/// Spawn at most one projectile if the player is firing and the cooldown has
/// elapsed.
///
/// The fire stamp is updated even when the pool is full, so holding the
/// trigger against a saturated pool cannot queue up shots.
pub fn try_fire(
    player: &mut PlayerState,
    projectiles: &mut EntityPool<Projectile>,
    frame: u64,
    config: &Config,
) -> FireOutcome {
    if !player.firing {
        return FireOutcome::Idle;
    }
    if let Some(last) = player.last_fire_frame {
        if frame.saturating_sub(last) <= config.fire_cooldown_frames {
            return FireOutcome::CoolingDown;
        }
    }
    player.last_fire_frame = Some(frame);

    let Some(index) = projectiles.find_free_slot() else {
        debug!("frame {}: projectile pool full, shot dropped", frame);
        return FireOutcome::Dropped;
    };
    let muzzle_x = player.x + config.muzzle_offset_x;
    let muzzle_y = player.y + config.muzzle_offset_y;
    if let Some(slot) = projectiles.get_mut(index) {
        *slot = Entity::spawned_at(muzzle_x, muzzle_y);
    }
    FireOutcome::Spawned(index)
}
