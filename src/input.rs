//! Terminal input folded into one `TickInput` per frame.
//!
//! Key timestamps use the simulation's own frame numbers
//! (`FrameClock::current`), so holding and fire gating share one clock.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEventKind, MouseEvent, MouseEventKind};

use crate::config::Config;
use crate::entities::TickInput;

/// Pixels the player moves per frame while a direction key is held.
pub const KEY_STEP: i32 = 8;

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames.  Covers terminals that don't emit key-release events.
pub const HOLD_WINDOW: u64 = 12;

const FIRE_KEY: KeyCode = KeyCode::Char(' ');

/// Returns true if `key` was seen within the last `window` frames.
fn is_held(key_frame: &HashMap<KeyCode, u64>, key: &KeyCode, frame: u64, window: u64) -> bool {
    key_frame
        .get(key)
        .map(|&last| frame.saturating_sub(last) <= window)
        .unwrap_or(false)
}

#[derive(Debug)]
pub struct InputState {
    key_frame: HashMap<KeyCode, u64>,
    player_x: i32,
    mouse_down: bool,
}

impl InputState {
    pub fn new(player_x: i32) -> Self {
        InputState {
            key_frame: HashMap::new(),
            player_x,
            mouse_down: false,
        }
    }

    pub fn on_key(&mut self, code: KeyCode, kind: KeyEventKind, frame: u64) {
        match kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                self.key_frame.insert(code, frame);
            }
            KeyEventKind::Release => {
                self.key_frame.remove(&code);
            }
        }
    }

    /// Mouse column maps linearly onto the field width; a held button fires.
    pub fn on_mouse(&mut self, mouse: MouseEvent, config: &Config, term_width: u16) {
        let x = mouse.column as i64 * config.field_width as i64 / term_width.max(1) as i64;
        match mouse.kind {
            MouseEventKind::Down(_) | MouseEventKind::Drag(_) => {
                self.mouse_down = true;
                self.player_x = x as i32;
            }
            MouseEventKind::Up(_) => {
                self.mouse_down = false;
                self.player_x = x as i32;
            }
            MouseEventKind::Moved => self.player_x = x as i32,
            _ => {}
        }
    }

    /// Apply held keys for `frame` and produce the tick input.
    ///
    /// The fire key's hold window never exceeds the fire cooldown, so one
    /// press without a release event yields exactly one shot.
    pub fn sample(&mut self, frame: u64, config: &Config) -> TickInput {
        let held = |key: &KeyCode| is_held(&self.key_frame, key, frame, HOLD_WINDOW);
        let left = held(&KeyCode::Left) || held(&KeyCode::Char('a'));
        let right = held(&KeyCode::Right) || held(&KeyCode::Char('d'));
        let fire_window = HOLD_WINDOW.min(config.fire_cooldown_frames);
        let space = is_held(&self.key_frame, &FIRE_KEY, frame, fire_window);

        if left {
            self.player_x -= KEY_STEP;
        } else if right {
            self.player_x += KEY_STEP;
        }
        self.player_x = self.player_x.clamp(0, config.field_width - 1);

        TickInput {
            player_x: self.player_x,
            firing: self.mouse_down || space,
        }
    }
}
