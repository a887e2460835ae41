//! Per-frame position updates.  No velocity state and no time scaling: one
//! call is one frame of movement.

use rand::Rng;

use crate::config::Config;
use crate::entities::{Enemy, Projectile};
use crate::pool::EntityPool;

/// Random walk: down by 0 or 1, sideways by -1, 0 or 1.
pub fn drift_enemy(enemy: &mut Enemy, rng: &mut impl Rng) {
    enemy.y += rng.gen_range(0..=1);
    enemy.x += rng.gen_range(-1..=1);
}

/// Apply the random walk to every enemy slot.
pub fn move_enemies(enemies: &mut EntityPool<Enemy>, rng: &mut impl Rng) {
    for enemy in enemies.slots_mut() {
        drift_enemy(enemy, rng);
    }
}

/// Move a projectile up by `speed` and kill it once it reaches `despawn_y`.
/// Returns true when this call despawned it.
pub fn advance_projectile(projectile: &mut Projectile, speed: i32, despawn_y: i32) -> bool {
    projectile.y -= speed;
    if projectile.y <= despawn_y {
        projectile.kill();
        return true;
    }
    false
}

/// Advance every live projectile.  Returns the number despawned by position.
pub fn move_projectiles(projectiles: &mut EntityPool<Projectile>, config: &Config) -> usize {
    projectiles
        .slots_mut()
        .iter_mut()
        .filter(|p| p.is_live())
        .map(|p| advance_projectile(p, config.projectile_speed, config.despawn_y))
        .filter(|&despawned| despawned)
        .count()
}
