// ── Screen ────────────────────────────────────────────────────────────────────
pub const SCREEN_WIDTH: f32 = 800.0;
pub const SCREEN_HEIGHT: f32 = 600.0;
pub const TARGET_FPS: u64 = 60;

// ── Player ship ───────────────────────────────────────────────────────────────
pub const SHIP_WIDTH: f32 = 50.0;
pub const SHIP_HEIGHT: f32 = 50.0;
pub const SHIP_BOTTOM_MARGIN: f32 = 60.0; // ship y = screen height - margin
pub const SHIP_STEP: f32 = 5.0; // px per tick while a direction key is held
pub const STARTING_LIVES: u32 = 5;
pub const HIT_COOLDOWN_MS: u64 = 1000;
pub const BLINK_INTERVAL_MS: u64 = 100;
pub const MAX_NAME_LEN: usize = 32;

pub const PLAYER_SHOT_COOLDOWN_MS: u64 = 200;
pub const PLAYER_PROJECTILE_WIDTH: f32 = 10.0;
pub const PLAYER_PROJECTILE_SPEED: f32 = 10.0;

// ── Enemies ───────────────────────────────────────────────────────────────────
pub const ENEMY_WIDTH: f32 = 50.0;
pub const ENEMY_HEIGHT: f32 = 50.0;
pub const ENEMY_CORPSE_MS: u64 = 1000;

pub const ENEMY_PROJECTILE_WIDTH: f32 = 10.0;
pub const ENEMY_PROJECTILE_HEIGHT: f32 = 20.0;
pub const ENEMY_PROJECTILE_LENGTH: f32 = 20.0;
pub const ENEMY_PROJECTILE_SPEED: f32 = 8.0;

pub const SCORE_PER_HIT: u32 = 10;

// ── Randomised waves ──────────────────────────────────────────────────────────
pub const RANDOM_WAVE_MIN_COUNT: usize = 1;
pub const RANDOM_WAVE_MAX_COUNT: usize = 4;
pub const RANDOM_WAVE_X: (f32, f32) = (100.0, 700.0);
pub const RANDOM_WAVE_Y: (f32, f32) = (50.0, 150.0);
pub const RANDOM_WAVE_SPEED: (f32, f32) = (-6.0, -3.0);
pub const RANDOM_WAVE_SHOOT_RATE_MS: (u64, u64) = (500, 1000);
