//! Projectile ↔ enemy proximity test and mutual damage.
//!
//! Distances are compared squared, so the threshold is exact and no square
//! root is taken.  Every overlapping pair deals damage every frame; there is
//! no per-pair cooldown and no early exit.

use crate::config::Config;
use crate::entities::{Enemy, Entity, Projectile};
use crate::pool::EntityPool;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DamageRules {
    /// Pairs strictly closer than this (squared) collide.
    pub hit_distance_sq: i64,
    /// Taken by the enemy per overlapping projectile per frame.
    pub enemy_damage: i32,
    /// Taken by the projectile per overlapping enemy per frame.
    pub projectile_damage: i32,
}

impl DamageRules {
    pub fn from_config(config: &Config) -> Self {
        DamageRules {
            hit_distance_sq: config.hit_distance_sq(),
            enemy_damage: config.enemy_damage,
            projectile_damage: config.projectile_damage,
        }
    }
}

/// Tally of one collision sweep.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CollisionReport {
    pub hits: u32,
    pub enemies_killed: u32,
    pub projectiles_spent: u32,
}

pub fn distance_sq(a: &Entity, b: &Entity) -> i64 {
    let dx = b.x as i64 - a.x as i64;
    let dy = b.y as i64 - a.y as i64;
    dx * dx + dy * dy
}

#[inline]
pub fn within_hit_range(dist_sq: i64, hit_distance_sq: i64) -> bool {
    dist_sq < hit_distance_sq
}

pub fn is_hit(enemy: &Enemy, projectile: &Projectile, rules: &DamageRules) -> bool {
    within_hit_range(distance_sq(projectile, enemy), rules.hit_distance_sq)
}

/// Damaged-looking enemy.  Recomputed from health every time, never latched.
pub fn is_critical(enemy: &Enemy, critical_health: i32) -> bool {
    enemy.health < critical_health
}

/// Sweep every live enemy against every live projectile, enemy-outer, both in
/// index order.
///
/// Projectile liveness is checked per pair, so a projectile spent on an
/// earlier enemy no longer hits later ones in the same sweep.  An enemy whose
/// health reaches zero mid-row keeps absorbing the rest of its row.
pub fn resolve_collisions(
    enemies: &mut EntityPool<Enemy>,
    projectiles: &mut EntityPool<Projectile>,
    rules: &DamageRules,
) -> CollisionReport {
    let mut report = CollisionReport::default();

    for enemy in enemies.slots_mut() {
        if !enemy.is_live() {
            continue;
        }
        for projectile in projectiles.slots_mut() {
            if !projectile.is_live() || !is_hit(enemy, projectile, rules) {
                continue;
            }
            enemy.take_damage(rules.enemy_damage);
            projectile.take_damage(rules.projectile_damage);
            report.hits += 1;
            if !projectile.is_live() {
                report.projectiles_spent += 1;
            }
        }
        if !enemy.is_live() {
            report.enemies_killed += 1;
        }
    }

    report
}
