//! Deep Catch - a wave-riding fishing arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (boat, line, fish, spawning, particles)
//! - `tuning`: Data-driven game balance
//! - `highscores`: Leaderboard of finished rounds
//! - `error`: Configuration/loading errors

pub mod error;
pub mod highscores;
pub mod sim;
pub mod tuning;

pub use error::{Error, Result};
pub use highscores::HighScores;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Fixed simulation rate
    pub const TICK_RATE_HZ: u64 = 30;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame gap fed to the stepper (ms)
    pub const MAX_FRAME_MS: u64 = 250;

    /// World dimensions
    pub const WORLD_WIDTH: f32 = 800.0;
    pub const WORLD_HEIGHT: f32 = 600.0;
    /// Water depth; the surface rests at WORLD_HEIGHT - WATER_BAND
    pub const WATER_BAND: f32 = 500.0;
    pub const FISH_COUNT: usize = 9;

    /// Sprite bounding boxes
    pub const BOAT_SIZE: Vec2 = Vec2::new(64.0, 32.0);
    pub const FISH_SIZE: Vec2 = Vec2::new(40.0, 20.0);
    pub const EVIL_FISH_SIZE: Vec2 = Vec2::new(48.0, 24.0);
    pub const PARTICLE_SIZE: Vec2 = Vec2::new(3.0, 3.0);
}

/// Format a round time as `seconds.hundredths` (e.g. `12.34`)
pub fn format_elapsed(elapsed_ms: u64) -> String {
    format!("{}.{:02}", elapsed_ms / 1000, (elapsed_ms % 1000) / 10)
}
