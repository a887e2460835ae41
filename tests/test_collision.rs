use swarm_shooter::collision::*;
use swarm_shooter::config::Config;
use swarm_shooter::entities::Entity;
use swarm_shooter::pool::EntityPool;

fn rules() -> DamageRules {
    DamageRules::from_config(&Config::default())
}

fn pool_of(entities: &[Entity]) -> EntityPool<Entity> {
    let mut pool = EntityPool::new(entities.len());
    pool.slots_mut().copy_from_slice(entities);
    pool
}

// ── Threshold ─────────────────────────────────────────────────────────────────

#[test]
fn threshold_is_strict_on_squared_distance() {
    let hit_sq = rules().hit_distance_sq;
    assert_eq!(hit_sq, 900);
    assert!(within_hit_range(899, hit_sq));
    assert!(!within_hit_range(900, hit_sq));
    assert!(!within_hit_range(901, hit_sq));
}

#[test]
fn positional_threshold_cases() {
    let r = rules();
    let enemy = Entity::spawned_at(100, 100);
    // 29² + 7² = 890
    assert!(is_hit(&enemy, &Entity::spawned_at(129, 107), &r));
    // 30² = 900
    assert!(!is_hit(&enemy, &Entity::spawned_at(130, 100), &r));
    // 18² + 24² = 900
    assert!(!is_hit(&enemy, &Entity::spawned_at(118, 124), &r));
    assert!(is_hit(&enemy, &Entity::spawned_at(100, 71), &r));
}

#[test]
fn distance_does_not_overflow_far_apart() {
    let a = Entity::spawned_at(-1_000_000_000, -1_000_000_000);
    let b = Entity::spawned_at(1_000_000_000, 1_000_000_000);
    assert_eq!(distance_sq(&a, &b), 8_000_000_000_000_000_000);
}

// ── Damage ────────────────────────────────────────────────────────────────────

#[test]
fn held_overlap_accumulates_damage() {
    let r = rules();
    let mut enemies = pool_of(&[Entity::spawned_at(100, 100)]);
    let mut projectiles = pool_of(&[Entity::spawned_at(100, 100)]);

    for k in 1..=5 {
        resolve_collisions(&mut enemies, &mut projectiles, &r);
        assert_eq!(enemies.get(0).unwrap().health, (100 - 10 * k).max(0));
        assert_eq!(projectiles.get(0).unwrap().health, (100 - 20 * k).max(0));
    }
    assert!(!projectiles.get(0).unwrap().is_live());

    // Spent projectile no longer hits
    let report = resolve_collisions(&mut enemies, &mut projectiles, &r);
    assert_eq!(report.hits, 0);
    assert_eq!(enemies.get(0).unwrap().health, 50);
}

#[test]
fn one_projectile_damages_every_overlapping_enemy() {
    let mut enemies = pool_of(&[
        Entity::spawned_at(100, 100),
        Entity::spawned_at(110, 100),
        Entity::spawned_at(500, 500),
    ]);
    let mut projectiles = pool_of(&[Entity::spawned_at(105, 100)]);

    let report = resolve_collisions(&mut enemies, &mut projectiles, &rules());

    assert_eq!(report.hits, 2);
    assert_eq!(enemies.get(0).unwrap().health, 90);
    assert_eq!(enemies.get(1).unwrap().health, 90);
    assert_eq!(enemies.get(2).unwrap().health, 100);
    assert_eq!(projectiles.get(0).unwrap().health, 60);
}

#[test]
fn one_enemy_takes_damage_from_every_overlapping_projectile() {
    let mut enemies = pool_of(&[Entity::spawned_at(100, 100)]);
    let mut projectiles = pool_of(&[
        Entity::spawned_at(100, 90),
        Entity::spawned_at(100, 110),
        Entity::spawned_at(100, 100),
    ]);

    let report = resolve_collisions(&mut enemies, &mut projectiles, &rules());

    assert_eq!(report.hits, 3);
    assert_eq!(enemies.get(0).unwrap().health, 70);
    for p in projectiles.slots() {
        assert_eq!(p.health, 80);
    }
}

#[test]
fn dead_entities_do_not_collide() {
    let mut dead_enemy = Entity::spawned_at(100, 100);
    dead_enemy.kill();
    let mut dead_projectile = Entity::spawned_at(100, 100);
    dead_projectile.kill();

    let mut enemies = pool_of(&[dead_enemy, Entity::spawned_at(100, 100)]);
    let mut projectiles = pool_of(&[dead_projectile]);

    let report = resolve_collisions(&mut enemies, &mut projectiles, &rules());
    assert_eq!(report, CollisionReport::default());
    assert_eq!(enemies.get(0).unwrap().health, 0);
}

#[test]
fn projectile_spent_on_earlier_enemy_skips_later_ones() {
    let mut enemies = pool_of(&[Entity::spawned_at(100, 100), Entity::spawned_at(101, 100)]);
    let mut weak = Entity::spawned_at(100, 100);
    weak.health = 20;
    let mut projectiles = pool_of(&[weak]);

    let report = resolve_collisions(&mut enemies, &mut projectiles, &rules());

    assert_eq!(report.hits, 1);
    assert_eq!(report.projectiles_spent, 1);
    assert_eq!(enemies.get(0).unwrap().health, 90);
    assert_eq!(enemies.get(1).unwrap().health, 100);
}

#[test]
fn kill_is_reported() {
    let mut nearly_dead = Entity::spawned_at(100, 100);
    nearly_dead.health = 10;
    let mut enemies = pool_of(&[nearly_dead]);
    let mut projectiles = pool_of(&[Entity::spawned_at(100, 100)]);

    let report = resolve_collisions(&mut enemies, &mut projectiles, &rules());
    assert_eq!(report.enemies_killed, 1);
    assert_eq!(enemies.get(0).unwrap().health, 0);
}

// ── Critical flag ─────────────────────────────────────────────────────────────

#[test]
fn critical_below_eighty_only() {
    let mut e = Entity::spawned_at(0, 0);
    assert!(!is_critical(&e, 80));
    e.health = 80;
    assert!(!is_critical(&e, 80));
    e.health = 79;
    assert!(is_critical(&e, 80));
}
