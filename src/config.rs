use std::{env, path::PathBuf, time::Duration};

use log::LevelFilter;

use crate::constants::TARGET_FPS;

// Runtime settings (not gameplay tuning).

pub const FRAME_INTERVAL: Duration = Duration::from_millis(1000 / TARGET_FPS);

pub fn log_file() -> PathBuf {
    env::var("WAVE_SHOOTER_LOG_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("wave_shooter.log"))
}

pub fn log_level() -> LevelFilter {
    env::var("WAVE_SHOOTER_LOG_LEVEL")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(LevelFilter::Info)
}

pub fn player_name() -> String {
    env::var("WAVE_SHOOTER_PLAYER_NAME").unwrap_or_else(|_| "Player".to_string())
}
