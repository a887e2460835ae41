//! Fixed-pool arcade shooter simulation.
//!
//! - `entities`: entity, player, clock and whole-state types
//! - `pool`: fixed-capacity slot storage
//! - `spawn`, `motion`, `collision`: the rules of one frame
//! - `compute`: state construction and the per-frame `tick`
//! - `snapshot`: what the renderer is allowed to see
//! - `config`: tunables and their JSON loader
//! - `input`: terminal key and mouse events folded into a `TickInput`

pub mod collision;
pub mod compute;
pub mod config;
pub mod entities;
pub mod input;
pub mod motion;
pub mod pool;
pub mod snapshot;
pub mod spawn;
