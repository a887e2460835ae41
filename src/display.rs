//! Rendering layer.  All terminal I/O lives here.
//!
//! Draws a `RenderSnapshot` scaled from pixel space onto the terminal grid.
//! No game logic is performed; this module only translates state into
//! terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use swarm_shooter::config::Config;
use swarm_shooter::snapshot::{EnemySprite, ProjectileSprite, RenderSnapshot};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_HUD: Color = Color::Yellow;
const C_PLAYER: Color = Color::White;
const C_ENEMY: Color = Color::Green;
const C_ENEMY_CRITICAL: Color = Color::Red;
const C_PROJECTILE: Color = Color::Cyan;
const C_HINT: Color = Color::DarkGrey;

/// Terminal area the field is scaled into.  Row 0 is the HUD and the last row
/// the controls hint.
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    fn play_rows(&self) -> i64 {
        (self.height as i64 - 2).max(1)
    }

    /// Terminal column for a pixel x.  Clamped, since x is unbounded.
    pub fn column(&self, x: i32, config: &Config) -> u16 {
        let col = x as i64 * self.width as i64 / config.field_width as i64;
        col.clamp(0, self.width.saturating_sub(1) as i64) as u16
    }

    /// Terminal cell for a pixel position, or `None` when it is off the field.
    pub fn cell(&self, x: i32, y: i32, config: &Config) -> Option<(u16, u16)> {
        if x < 0 || x >= config.field_width || y < 0 || y >= config.field_height {
            return None;
        }
        let row = 1 + y as i64 * self.play_rows() / config.field_height as i64;
        Some((self.column(x, config), row as u16))
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(
    out: &mut W,
    snap: &RenderSnapshot,
    config: &Config,
    view: Viewport,
) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_hud(out, snap)?;

    for enemy in &snap.enemies {
        draw_enemy(out, enemy, config, view)?;
    }
    for projectile in &snap.projectiles {
        draw_projectile(out, projectile, config, view)?;
    }

    draw_player(out, snap, config, view)?;
    draw_controls_hint(out, view)?;

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, view.height.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, snap: &RenderSnapshot) -> std::io::Result<()> {
    let critical = snap.enemies.iter().filter(|e| e.critical).count();
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD))?;
    out.queue(Print(format!(
        "Frame:{:>7}  Enemies:{:>4} ({} hurt)  Shots:{:>3}",
        snap.frame,
        snap.enemies.len(),
        critical,
        snap.projectiles.len()
    )))?;
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_player<W: Write>(
    out: &mut W,
    snap: &RenderSnapshot,
    config: &Config,
    view: Viewport,
) -> std::io::Result<()> {
    let row = match view.cell(config.field_width / 2, snap.player_y, config) {
        Some((_, row)) => row,
        None => view.height.saturating_sub(2),
    };
    let col = view.column(snap.player_x, config);
    out.queue(style::SetForegroundColor(C_PLAYER))?;
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(Print("▲"))?;
    Ok(())
}

fn draw_enemy<W: Write>(
    out: &mut W,
    enemy: &EnemySprite,
    config: &Config,
    view: Viewport,
) -> std::io::Result<()> {
    // Above the field until they drift in
    let Some((col, row)) = view.cell(enemy.x, enemy.y, config) else {
        return Ok(());
    };
    out.queue(cursor::MoveTo(col, row))?;
    if enemy.critical {
        out.queue(style::SetForegroundColor(C_ENEMY_CRITICAL))?;
        out.queue(Print("✷"))?;
    } else {
        out.queue(style::SetForegroundColor(C_ENEMY))?;
        out.queue(Print("◎"))?;
    }
    Ok(())
}

fn draw_projectile<W: Write>(
    out: &mut W,
    projectile: &ProjectileSprite,
    config: &Config,
    view: Viewport,
) -> std::io::Result<()> {
    let Some((col, row)) = view.cell(projectile.x, projectile.y, config) else {
        return Ok(());
    };
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(C_PROJECTILE))?;
    out.queue(Print("║"))?;
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, view: Viewport) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, view.height.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("Mouse / ← → : Move   Click / SPACE : Fire   Q : Quit"))?;
    Ok(())
}
