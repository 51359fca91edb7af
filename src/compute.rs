/// Game-state controller.
///
/// Every public function takes an immutable reference to the current
/// `EntireGameStateInfo` (plus the tick's clock reading and, where needed, an
/// RNG handle) and returns a brand-new `EntireGameStateInfo`.  Side effects
/// are limited to the injected RNG and logging.

use log::{debug, info};
use rand::Rng;

use crate::constants::*;
use crate::entities::{Direction, EntireGameStateInfo, GameStatus, Projectile, Spaceship};
use crate::error::GameError;
use crate::input::InputSnapshot;
use crate::waves::WaveDirector;

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build a fresh session for a screen of the given logical size.
pub fn init_state(name: &str, width: f32, height: f32) -> Result<EntireGameStateInfo, GameError> {
    let player = Spaceship::new(
        name,
        (width - SHIP_WIDTH) / 2.0,
        height - SHIP_BOTTOM_MARGIN,
        SHIP_WIDTH,
        SHIP_HEIGHT,
    )?;
    let mut waves = WaveDirector::new();
    let enemies = waves.initial_wave();
    info!("Session started for {}", player.name());
    Ok(EntireGameStateInfo {
        player,
        enemies,
        player_projectiles: Vec::new(),
        enemy_projectiles: Vec::new(),
        waves,
        last_player_shot_time: None,
        score: 0,
        status: GameStatus::Playing,
        frame: 0,
        width,
        height,
    })
}

/// Start over: score, roster, projectiles, waves and lives all reinitialised.
pub fn reset_state(state: &EntireGameStateInfo) -> EntireGameStateInfo {
    let mut player = state.player.clone();
    player.respawn((state.width - SHIP_WIDTH) / 2.0, state.height - SHIP_BOTTOM_MARGIN);
    let mut waves = WaveDirector::new();
    let enemies = waves.initial_wave();
    info!("Session reset after frame {} with score {}", state.frame, state.score);
    EntireGameStateInfo {
        player,
        enemies,
        player_projectiles: Vec::new(),
        enemy_projectiles: Vec::new(),
        waves,
        last_player_shot_time: None,
        score: 0,
        status: GameStatus::Playing,
        frame: 0,
        ..state.clone()
    }
}

// ── Input-driven state transitions ──────────────────────────────────────────

/// Apply one tick's worth of held controls.
///
/// While playing: move left/right and fire.  After game over only the
/// restart control does anything.
pub fn apply_input(
    state: &EntireGameStateInfo,
    input: &InputSnapshot,
    now: u64,
) -> EntireGameStateInfo {
    match state.status {
        GameStatus::GameOver if input.restart => reset_state(state),
        GameStatus::GameOver => state.clone(),
        GameStatus::Playing => {
            let mut next = state.clone();
            if input.left {
                next.player.move_by(-SHIP_STEP, 0.0, next.width);
            }
            if input.right {
                next.player.move_by(SHIP_STEP, 0.0, next.width);
            }
            if input.fire {
                next = player_shoot(&next, now);
            }
            next
        }
    }
}

/// Fire from the ship's nose unless the 200 ms cooldown is still running.
pub fn player_shoot(state: &EntireGameStateInfo, now: u64) -> EntireGameStateInfo {
    if let Some(last) = state.last_player_shot_time {
        if now.saturating_sub(last) <= PLAYER_SHOT_COOLDOWN_MS {
            return state.clone();
        }
    }
    let ship = &state.player;
    let shot = Projectile {
        x: ship.x + ship.width / 2.0 - 5.0,
        y: ship.y,
        width: PLAYER_PROJECTILE_WIDTH,
        height: ship.height,
        speed: PLAYER_PROJECTILE_SPEED,
        length: ship.height,
        direction: Direction::Up,
    };
    let mut player_projectiles = state.player_projectiles.clone();
    player_projectiles.push(shot);
    EntireGameStateInfo {
        player_projectiles,
        last_player_shot_time: Some(now),
        ..state.clone()
    }
}

// ── Per-frame tick ──────────────────────────────────────────────────────────

/// Advance the simulation by one frame.  A finished game is returned as-is.
pub fn tick(state: &EntireGameStateInfo, now: u64, rng: &mut impl Rng) -> EntireGameStateInfo {
    if state.status == GameStatus::GameOver {
        return state.clone();
    }
    let mut next = state.clone();
    next.frame += 1;

    // ── 1. Enemies move and fire ─────────────────────────────────────────────
    let width = next.width;
    for enemy in next.enemies.iter_mut() {
        enemy.step(width);
        if let Some(shot) = enemy.shoot_projectile(now) {
            next.enemy_projectiles.push(shot);
        }
    }

    // ── 2. Projectiles advance, anything off screen is dropped ───────────────
    let height = next.height;
    for p in next
        .player_projectiles
        .iter_mut()
        .chain(next.enemy_projectiles.iter_mut())
    {
        p.step();
    }
    next.player_projectiles.retain(|p| !p.is_off_screen(height));
    next.enemy_projectiles.retain(|p| !p.is_off_screen(height));

    // ── 3. Player shots ↔ enemies, then the next wave ────────────────────────
    check_enemy_collisions(&mut next, now, rng);

    // ── 4. Enemy shots ↔ ship ────────────────────────────────────────────────
    check_player_collision(&mut next, now);
    next.player.update_blinking(now);

    // ── 5. Status ────────────────────────────────────────────────────────────
    if next.player.lives() == 0 {
        info!("Game over at frame {} with score {}", next.frame, next.score);
        next.status = GameStatus::GameOver;
    }
    next
}

fn check_enemy_collisions(state: &mut EntireGameStateInfo, now: u64, rng: &mut impl Rng) {
    // Removal is deferred until every shot has been checked.
    let mut defeated: Vec<u32> = Vec::new();
    for projectile in &state.player_projectiles {
        for enemy in state.enemies.iter_mut() {
            if enemy.is_hit_by_player(projectile, now) {
                debug!("Enemy {} hit", enemy.id);
                defeated.push(enemy.id);
            }
        }
    }
    if defeated.is_empty() {
        return;
    }

    state.score += SCORE_PER_HIT * defeated.len() as u32;
    state.enemies.retain(|e| e.is_alive);

    let spawned = state.waves.next_wave(&defeated, &state.enemies, rng);
    state.enemies.extend(spawned);
}

fn check_player_collision(state: &mut EntireGameStateInfo, now: u64) {
    let mut hit = false;
    for projectile in &state.enemy_projectiles {
        hit |= state.player.is_hit_by_enemy(projectile, now);
    }
    if hit {
        state.player.reset_hit_status();
        state.player.decrement_lives();
        debug!("Ship hit, {} lives left", state.player.lives());
    }
}
