use swarm_shooter::entities::Entity;
use swarm_shooter::pool::EntityPool;

fn pool_with_live(capacity: usize, live: &[usize]) -> EntityPool<Entity> {
    let mut pool = EntityPool::new(capacity);
    for &i in live {
        *pool.get_mut(i).unwrap() = Entity::spawned_at(i as i32, 0);
    }
    pool
}

#[test]
fn new_pool_is_all_free() {
    let pool: EntityPool<Entity> = EntityPool::new(4);
    assert_eq!(pool.capacity(), 4);
    assert_eq!(pool.live_count(), 0);
    assert_eq!(pool.find_free_slot(), Some(0));
}

#[test]
fn find_free_slot_returns_lowest_dead_index() {
    let pool = pool_with_live(5, &[0, 1, 3]);
    assert_eq!(pool.find_free_slot(), Some(2));
}

#[test]
fn find_free_slot_none_when_saturated() {
    let pool = pool_with_live(3, &[0, 1, 2]);
    assert_eq!(pool.find_free_slot(), None);
}

#[test]
fn negative_health_counts_as_free() {
    let mut pool = pool_with_live(2, &[0, 1]);
    pool.get_mut(1).unwrap().health = -5;
    assert_eq!(pool.find_free_slot(), Some(1));
}

#[test]
fn for_each_live_visits_in_index_order() {
    let pool = pool_with_live(6, &[4, 1, 5]);
    let mut seen = Vec::new();
    pool.for_each_live(|i, e| seen.push((i, e.x)));
    assert_eq!(seen, vec![(1, 1), (4, 4), (5, 5)]);
}

#[test]
fn iter_live_skips_dead() {
    let pool = pool_with_live(4, &[2]);
    let live: Vec<usize> = pool.iter_live().map(|(i, _)| i).collect();
    assert_eq!(live, vec![2]);
    assert_eq!(pool.live_count(), 1);
}

#[test]
fn out_of_range_access_is_none() {
    let mut pool: EntityPool<Entity> = EntityPool::new(2);
    assert!(pool.get(2).is_none());
    assert!(pool.get_mut(7).is_none());
}
