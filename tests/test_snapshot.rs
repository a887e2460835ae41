use swarm_shooter::config::Config;
use swarm_shooter::entities::{Entity, GameState};
use swarm_shooter::snapshot::*;

fn small_state() -> GameState {
    let config = Config { enemy_capacity: 3, projectile_capacity: 2, ..Config::default() };
    GameState::new(config)
}

#[test]
fn dead_slots_are_not_exposed() {
    let mut s = small_state();
    *s.enemies.get_mut(2).unwrap() = Entity::spawned_at(40, 50);
    *s.projectiles.get_mut(1).unwrap() = Entity::spawned_at(7, 8);

    let snap = build_snapshot(&s);

    assert_eq!(snap.enemies, vec![EnemySprite { x: 40, y: 50, critical: false }]);
    assert_eq!(snap.projectiles, vec![ProjectileSprite { x: 7, y: 8 }]);
}

#[test]
fn critical_flag_follows_current_health() {
    let mut s = small_state();
    *s.enemies.get_mut(0).unwrap() = Entity { x: 1, y: 1, health: 80 };
    *s.enemies.get_mut(1).unwrap() = Entity { x: 2, y: 2, health: 79 };

    let snap = build_snapshot(&s);
    let flags: Vec<bool> = snap.enemies.iter().map(|e| e.critical).collect();
    assert_eq!(flags, vec![false, true]);

    // Not latched: healing the slot clears the flag
    s.enemies.get_mut(1).unwrap().health = 100;
    assert!(build_snapshot(&s).enemies.iter().all(|e| !e.critical));
}

#[test]
fn snapshot_carries_player_and_frame() {
    let mut s = small_state();
    s.player.x = 640;
    s.clock.advance();

    let snap = build_snapshot(&s);
    assert_eq!((snap.player_x, snap.player_y), (640, 600));
    assert_eq!(snap.frame, 2);
}
