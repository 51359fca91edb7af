/// Wave progression.
///
/// Waves are a fixed table of tiers.  Clearing every enemy of a tier spawns
/// the next one; after the last fixed tier the director keeps generating
/// randomised waves for as long as the player survives.

use log::info;
use rand::Rng;

use crate::constants::*;
use crate::entities::Enemy;

struct Preset {
    id: u32,
    x: f32,
    y: f32,
    speed: f32,
    shoot_rate_ms: u64,
}

const fn preset(id: u32, x: f32, y: f32, speed: f32, shoot_rate_ms: u64) -> Preset {
    Preset { id, x, y, speed, shoot_rate_ms }
}

const TIERS: &[&[Preset]] = &[
    &[preset(1, 60.0, 60.0, -2.0, 2000)],
    &[preset(2, 100.0, 100.0, -2.0, 2000), preset(3, 700.0, 100.0, -2.0, 2000)],
    &[preset(4, 400.0, 80.0, -3.0, 1500)],
    &[
        preset(5, 100.0, 60.0, -3.0, 1500),
        preset(6, 400.0, 120.0, -3.0, 1500),
        preset(7, 700.0, 60.0, -3.0, 1500),
    ],
    &[preset(8, 200.0, 80.0, -4.0, 1200), preset(9, 600.0, 80.0, -4.0, 1200)],
    &[
        preset(10, 100.0, 60.0, -5.0, 1000),
        preset(11, 400.0, 100.0, -5.0, 1000),
        preset(12, 700.0, 60.0, -5.0, 1000),
    ],
];

/// Highest id handed out by the fixed table.
pub const LAST_FIXED_ID: u32 = 12;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WaveDirector {
    highest_id: u32,
    waves_spawned: u32,
}

impl WaveDirector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn highest_id(&self) -> u32 {
        self.highest_id
    }

    /// Number of waves spawned so far, the opening wave included.
    pub fn wave(&self) -> u32 {
        self.waves_spawned
    }

    pub fn initial_wave(&mut self) -> Vec<Enemy> {
        self.spawn_tier(TIERS[0])
    }

    /// Decide what to spawn after `defeated` were removed from the roster.
    ///
    /// `roster` must already exclude the defeated enemies.
    pub fn next_wave(
        &mut self,
        defeated: &[u32],
        roster: &[Enemy],
        rng: &mut impl Rng,
    ) -> Vec<Enemy> {
        if defeated.is_empty() {
            return Vec::new();
        }

        let mut spawned = Vec::new();
        for (i, tier) in TIERS.iter().enumerate() {
            let touched = tier.iter().any(|p| defeated.contains(&p.id));
            let cleared = !tier.iter().any(|p| roster.iter().any(|e| e.id == p.id));
            if !(touched && cleared) {
                continue;
            }
            match TIERS.get(i + 1) {
                Some(next) => spawned.extend(self.spawn_tier(next)),
                None if roster.is_empty() => spawned.extend(self.spawn_random(rng)),
                None => {}
            }
        }

        let random_cleared = defeated.iter().any(|&id| id > LAST_FIXED_ID) && roster.is_empty();
        if spawned.is_empty() && random_cleared {
            spawned.extend(self.spawn_random(rng));
        }
        spawned
    }

    fn spawn_tier(&mut self, tier: &[Preset]) -> Vec<Enemy> {
        let enemies: Vec<Enemy> = tier
            .iter()
            .map(|p| Enemy::new(p.id, p.x, p.y, p.speed, p.shoot_rate_ms))
            .collect();
        self.record(&enemies);
        enemies
    }

    fn spawn_random(&mut self, rng: &mut impl Rng) -> Vec<Enemy> {
        let count = rng.gen_range(RANDOM_WAVE_MIN_COUNT..=RANDOM_WAVE_MAX_COUNT);
        let base = self.highest_id;
        let enemies: Vec<Enemy> = (1..=count as u32)
            .map(|offset| {
                Enemy::new(
                    base + offset,
                    rng.gen_range(RANDOM_WAVE_X.0..=RANDOM_WAVE_X.1),
                    rng.gen_range(RANDOM_WAVE_Y.0..=RANDOM_WAVE_Y.1),
                    rng.gen_range(RANDOM_WAVE_SPEED.0..=RANDOM_WAVE_SPEED.1),
                    rng.gen_range(RANDOM_WAVE_SHOOT_RATE_MS.0..=RANDOM_WAVE_SHOOT_RATE_MS.1),
                )
            })
            .collect();
        self.record(&enemies);
        enemies
    }

    fn record(&mut self, enemies: &[Enemy]) {
        if let Some(max) = enemies.iter().map(|e| e.id).max() {
            self.highest_id = self.highest_id.max(max);
        }
        self.waves_spawned += 1;
        let ids: Vec<u32> = enemies.iter().map(|e| e.id).collect();
        info!("Wave {} spawned: enemies {:?}", self.waves_spawned, ids);
    }
}
