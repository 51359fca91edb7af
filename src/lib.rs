pub mod clock;
pub mod compute;
pub mod config;
pub mod constants;
pub mod entities;
pub mod error;
pub mod input;
pub mod render;
pub mod waves;
