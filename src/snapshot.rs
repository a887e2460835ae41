//! Read-only view of a `GameState` for the rendering side.
//!
//! Built between steps.  Dead slots are left out, so everything in a snapshot
//! is meant to be drawn.

use crate::collision::is_critical;
use crate::entities::GameState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnemySprite {
    pub x: i32,
    pub y: i32,
    /// Draw the damaged variant.
    pub critical: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectileSprite {
    pub x: i32,
    pub y: i32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderSnapshot {
    /// Frame the next step will simulate.
    pub frame: u64,
    pub player_x: i32,
    pub player_y: i32,
    pub enemies: Vec<EnemySprite>,
    pub projectiles: Vec<ProjectileSprite>,
}

pub fn build_snapshot(state: &GameState) -> RenderSnapshot {
    let critical_health = state.config.critical_health;

    let mut enemies = Vec::with_capacity(state.enemies.capacity());
    state.enemies.for_each_live(|_, e| {
        enemies.push(EnemySprite {
            x: e.x,
            y: e.y,
            critical: is_critical(e, critical_health),
        });
    });

    let projectiles = state
        .projectiles
        .iter_live()
        .map(|(_, p)| ProjectileSprite { x: p.x, y: p.y })
        .collect();

    RenderSnapshot {
        frame: state.clock.current(),
        player_x: state.player.x,
        player_y: state.player.y,
        enemies,
        projectiles,
    }
}
