/// All game entity types and the per-entity rules that guard their invariants.
///
/// Coordinates are logical pixels: origin top-left, y grows downward.
/// Every time-dependent method takes the tick's `now` (ms) explicitly so the
/// same clock reading is shared by the whole update.

use crate::constants::*;
use crate::error::GameError;
use crate::waves::WaveDirector;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

// ── Projectiles ───────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Projectile {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    /// Drawn extent along y; also the extent used when pruning.
    pub length: f32,
    pub direction: Direction,
}

impl Projectile {
    pub fn step(&mut self) {
        match self.direction {
            Direction::Up => self.y -= self.speed,
            Direction::Down => self.y += self.speed,
        }
    }

    /// True once the whole box is above the top edge or below the bottom edge.
    pub fn is_off_screen(&self, screen_height: f32) -> bool {
        self.y + self.length <= 0.0 || self.y >= screen_height
    }
}

/// Strict point-in-rectangle test on the projectile's origin corner.
fn origin_inside(px: f32, py: f32, x: f32, y: f32, width: f32, height: f32) -> bool {
    x < px && px < x + width && y < py && py < y + height
}

// ── Enemy ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub id: u32,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    pub shoot_rate_ms: u64,
    /// `None` until the first shot; the cooldown is open until then.
    pub last_shot_time: Option<u64>,
    pub is_alive: bool,
    pub destroyed_time: Option<u64>,
    /// −1 or +1, multiplied into `speed` each step.
    pub move_direction: f32,
}

impl Enemy {
    pub fn new(id: u32, x: f32, y: f32, speed: f32, shoot_rate_ms: u64) -> Self {
        Enemy {
            id,
            x,
            y,
            width: ENEMY_WIDTH,
            height: ENEMY_HEIGHT,
            speed,
            shoot_rate_ms,
            last_shot_time: None,
            is_alive: true,
            destroyed_time: None,
            move_direction: -1.0,
        }
    }

    /// Slide horizontally, bouncing off (and clamping to) either screen edge.
    pub fn step(&mut self, screen_width: f32) {
        if !self.is_alive {
            return;
        }
        let max_x = screen_width - self.width;
        self.x += self.speed * self.move_direction;
        if self.x < 0.0 || self.x > max_x {
            self.move_direction = -self.move_direction;
            self.x = self.x.clamp(0.0, max_x);
        }
        self.y = self.y.max(0.0);
    }

    /// A dead enemy whose corpse time has run out.
    pub fn is_expired(&self, now: u64) -> bool {
        match self.destroyed_time {
            Some(t) if !self.is_alive => now.saturating_sub(t) >= ENEMY_CORPSE_MS,
            _ => false,
        }
    }

    pub fn shoot_projectile(&mut self, now: u64) -> Option<Projectile> {
        if !self.is_alive {
            return None;
        }
        if let Some(last) = self.last_shot_time {
            if now.saturating_sub(last) <= self.shoot_rate_ms {
                return None;
            }
        }
        self.last_shot_time = Some(now);
        Some(Projectile {
            x: self.x + self.width / 2.0 - 5.0,
            y: self.y - ENEMY_PROJECTILE_HEIGHT,
            width: ENEMY_PROJECTILE_WIDTH,
            height: ENEMY_PROJECTILE_HEIGHT,
            speed: ENEMY_PROJECTILE_SPEED,
            length: ENEMY_PROJECTILE_LENGTH,
            direction: Direction::Down,
        })
    }

    /// Kills the enemy on the first qualifying hit; later calls return false.
    pub fn is_hit_by_player(&mut self, projectile: &Projectile, now: u64) -> bool {
        if !self.is_alive {
            return false;
        }
        let hit = origin_inside(
            projectile.x,
            projectile.y,
            self.x,
            self.y,
            self.width,
            self.height,
        );
        if hit {
            self.is_alive = false;
            self.destroyed_time = Some(now);
        }
        hit
    }
}

// ── Player ship ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Spaceship {
    name: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    lives: u32,
    hit_flag: bool,
    last_hit_time: Option<u64>,
    blink_started: Option<u64>,
}

fn validate_name(name: &str) -> Result<(), GameError> {
    if name.trim().is_empty() {
        return Err(GameError::BlankName);
    }
    let len = name.chars().count();
    if len > MAX_NAME_LEN {
        return Err(GameError::NameTooLong { len, max: MAX_NAME_LEN });
    }
    Ok(())
}

impl Spaceship {
    pub fn new(name: &str, x: f32, y: f32, width: f32, height: f32) -> Result<Self, GameError> {
        validate_name(name)?;
        Ok(Spaceship {
            name: name.to_string(),
            x,
            y,
            width,
            height,
            lives: STARTING_LIVES,
            hit_flag: false,
            last_hit_time: None,
            blink_started: None,
        })
    }

    /// Back to full lives at `(x, y)` with no hit or blink pending.
    pub fn respawn(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
        self.lives = STARTING_LIVES;
        self.hit_flag = false;
        self.last_hit_time = None;
        self.blink_started = None;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: &str) -> Result<(), GameError> {
        validate_name(name)?;
        self.name = name.to_string();
        Ok(())
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn set_lives(&mut self, lives: i64) -> Result<(), GameError> {
        if lives < 0 {
            return Err(GameError::NegativeLives { requested: lives });
        }
        self.lives = lives.min(u32::MAX as i64) as u32;
        Ok(())
    }

    pub fn decrement_lives(&mut self) {
        self.lives = self.lives.saturating_sub(1);
    }

    /// x is clamped to the screen; y is applied as-is.
    pub fn move_by(&mut self, dx: f32, dy: f32, screen_width: f32) {
        self.x = (self.x + dx).clamp(0.0, screen_width - self.width);
        self.y += dy;
    }

    pub fn is_hit_by_enemy(&mut self, projectile: &Projectile, now: u64) -> bool {
        if self.hit_flag {
            return false;
        }
        if let Some(last) = self.last_hit_time {
            if now.saturating_sub(last) < HIT_COOLDOWN_MS {
                return false;
            }
        }
        let hit = origin_inside(
            projectile.x,
            projectile.y,
            self.x,
            self.y,
            self.width,
            self.height,
        );
        if hit {
            self.hit_flag = true;
            self.last_hit_time = Some(now);
            self.blink_started = Some(now);
        }
        hit
    }

    /// Clears the per-tick debounce flag; the timed cooldown still applies.
    pub fn reset_hit_status(&mut self) {
        self.hit_flag = false;
    }

    pub fn update_blinking(&mut self, now: u64) {
        if let Some(start) = self.blink_started {
            if now.saturating_sub(start) >= HIT_COOLDOWN_MS {
                self.blink_started = None;
            }
        }
    }

    pub fn is_blinking(&self) -> bool {
        self.blink_started.is_some()
    }

    /// Whether the ship should be drawn this frame.
    pub fn is_visible(&self, now: u64) -> bool {
        match self.blink_started {
            Some(start) => (now.saturating_sub(start) / BLINK_INTERVAL_MS) % 2 == 1,
            None => true,
        }
    }
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire game session.  Cloneable so the update functions in
/// `compute` can return a new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct EntireGameStateInfo {
    pub player: Spaceship,
    /// The roster: live enemies only.
    pub enemies: Vec<Enemy>,
    pub player_projectiles: Vec<Projectile>,
    pub enemy_projectiles: Vec<Projectile>,
    pub waves: WaveDirector,
    pub last_player_shot_time: Option<u64>,
    pub score: u32,
    pub status: GameStatus,
    pub frame: u64,
    pub width: f32,
    pub height: f32,
}
