/// Drawing the session onto whatever surface the host provides.
///
/// No game logic is performed here; this module only translates state into
/// rectangle and text draws in logical pixel coordinates.

use crate::entities::{EntireGameStateInfo, GameStatus};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

// ── Colour palette ────────────────────────────────────────────────────────────

pub const C_BACKGROUND: Rgb = Rgb(255, 255, 255);
pub const C_PLAYER: Rgb = Rgb(0, 128, 255);
pub const C_ENEMY: Rgb = Rgb(255, 0, 0);
pub const C_SHOT_PLAYER: Rgb = Rgb(0, 255, 0);
pub const C_SHOT_ENEMY: Rgb = Rgb(255, 0, 0);
pub const C_TEXT: Rgb = Rgb(0, 0, 0);

/// A fixed-size render target.
pub trait Surface {
    type Error;

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgb) -> Result<(), Self::Error>;
    fn draw_text(&mut self, text: &str, x: f32, y: f32, color: Rgb) -> Result<(), Self::Error>;
    /// Called exactly once at the end of every frame.
    fn present(&mut self) -> Result<(), Self::Error>;
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn draw_objects<S: Surface>(
    surface: &mut S,
    state: &EntireGameStateInfo,
    now: u64,
) -> Result<(), S::Error> {
    surface.fill_rect(0.0, 0.0, state.width, state.height, C_BACKGROUND)?;

    let ship = &state.player;
    if ship.is_visible(now) {
        surface.fill_rect(ship.x, ship.y, ship.width, ship.height, C_PLAYER)?;
    }

    for enemy in &state.enemies {
        surface.fill_rect(enemy.x, enemy.y, enemy.width, enemy.height, C_ENEMY)?;
    }

    for p in &state.player_projectiles {
        surface.fill_rect(p.x, p.y, p.width, p.length, C_SHOT_PLAYER)?;
    }
    for p in &state.enemy_projectiles {
        surface.fill_rect(p.x, p.y, p.width, p.length, C_SHOT_ENEMY)?;
    }

    draw_hud(surface, state)?;

    if state.status == GameStatus::GameOver {
        draw_game_over(surface, state)?;
    }

    surface.present()
}

fn draw_hud<S: Surface>(surface: &mut S, state: &EntireGameStateInfo) -> Result<(), S::Error> {
    surface.draw_text(&format!("Lives: {}", state.player.lives()), 10.0, 10.0, C_TEXT)?;
    surface.draw_text(&format!("Score: {}", state.score), 10.0, 40.0, C_TEXT)?;
    surface.draw_text(
        &format!("Wave: {}", state.waves.wave()),
        state.width - 120.0,
        10.0,
        C_TEXT,
    )
}

fn draw_game_over<S: Surface>(surface: &mut S, state: &EntireGameStateInfo) -> Result<(), S::Error> {
    let cx = state.width / 2.0;
    let cy = state.height / 2.0;
    surface.draw_text("GAME OVER", cx - 70.0, cy - 20.0, C_TEXT)?;
    surface.draw_text(
        &format!("Final score: {}", state.score),
        cx - 90.0,
        cy + 20.0,
        C_TEXT,
    )?;
    surface.draw_text("R: restart   Q: quit", cx - 120.0, cy + 60.0, C_TEXT)
}
