//! Game-logic entry points: state construction, input application and the
//! per-frame step.
//!
//! `tick` mutates the state in place; both pools are fixed-size, so a step
//! never allocates.  All randomness comes through the injected `rng`.

use log::{info, trace};
use rand::Rng;

use crate::collision::{resolve_collisions, CollisionReport, DamageRules};
use crate::config::Config;
use crate::entities::{GameState, TickInput};
use crate::motion::{move_enemies, move_projectiles};
use crate::spawn::{
    place_startup_projectile, populate_enemies, respawn_dead_enemies, try_fire, FireOutcome,
};

/// What happened during one `tick`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameReport {
    pub frame: u64,
    pub fire: FireOutcome,
    pub enemies_respawned: usize,
    pub collisions: CollisionReport,
    pub projectiles_despawned: usize,
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the starting state: every enemy live near the top of the field, no
/// projectiles except the optional startup one.
pub fn init_state(config: Config, rng: &mut impl Rng) -> GameState {
    let mut state = GameState::new(config);
    populate_enemies(&mut state.enemies, &state.config, rng);
    if state.config.startup_projectile {
        place_startup_projectile(&mut state.projectiles);
    }
    info!(
        "initialised {} enemies, {} projectile slots, field {}x{}",
        state.enemies.capacity(),
        state.projectiles.capacity(),
        state.config.field_width,
        state.config.field_height,
    );
    state
}

// ── Input ────────────────────────────────────────────────────────────────────

/// Overwrite the player's x and firing intent.  No smoothing.
pub fn apply_input(state: &mut GameState, input: &TickInput) {
    state.player.x = input.player_x;
    state.player.firing = input.firing;
}

// ── Per-frame step ───────────────────────────────────────────────────────────

/// Advance the simulation by one frame.
///
/// The phase order is fixed; collisions must see post-motion positions.
pub fn tick(state: &mut GameState, rng: &mut impl Rng) -> FrameReport {
    let frame = state.clock.current();

    // ── 1. Firing ────────────────────────────────────────────────────────────
    let fire = try_fire(&mut state.player, &mut state.projectiles, frame, &state.config);

    // ── 2. Respawn dead enemies in place ─────────────────────────────────────
    let enemies_respawned = respawn_dead_enemies(&mut state.enemies, &state.config, rng);
    debug_assert_eq!(state.enemies.find_free_slot(), None);

    // ── 3. Enemy random walk, including the ones just respawned ──────────────
    move_enemies(&mut state.enemies, rng);

    // ── 4. Collisions on post-motion positions ───────────────────────────────
    let rules = DamageRules::from_config(&state.config);
    let collisions = resolve_collisions(&mut state.enemies, &mut state.projectiles, &rules);

    // ── 5. Projectile ascent and despawn ─────────────────────────────────────
    let projectiles_despawned = move_projectiles(&mut state.projectiles, &state.config);

    // ── 6. Clock ─────────────────────────────────────────────────────────────
    state.clock.advance();

    let report = FrameReport {
        frame,
        fire,
        enemies_respawned,
        collisions,
        projectiles_despawned,
    };
    trace!("{:?}", report);
    report
}
