//! Watchout - dodge the swarm
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, movement, collisions, score)
//! - `renderer`: WebGPU rendering pipeline
//! - `config`: Static game configuration with JSON overrides
//! - `error`: Error types for configuration and startup

pub mod config;
pub mod error;
pub mod renderer;
pub mod sim;

pub use config::{Easing, GameConfig};
pub use error::{ConfigError, WatchoutError};

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions
    pub const FIELD_WIDTH: f32 = 700.0;
    pub const FIELD_HEIGHT: f32 = 450.0;
    pub const FIELD_PADDING: f32 = 20.0;

    /// Enemies per wave
    pub const ENEMY_COUNT: usize = 50;
    /// Enemy radius range (inclusive, whole pixels)
    pub const ENEMY_RADIUS_MIN: i32 = 8;
    pub const ENEMY_RADIUS_MAX: i32 = 12;
    /// Spawn points and destinations stay this far from the field edges
    pub const SPAWN_MARGIN: i32 = 10;

    /// Player circle
    pub const PLAYER_RADIUS: f32 = 10.0;

    /// Timers (milliseconds)
    pub const SPAWN_INTERVAL_MS: f64 = 1500.0;
    pub const SCORE_INTERVAL_MS: f64 = 50.0;
    /// Enemy grows from radius 0 to full size
    pub const ENTRY_DURATION_MS: f64 = 500.0;
    /// Enemy travels from spawn point to destination
    pub const MOVE_DURATION_MS: f64 = 1000.0;

    /// Longest frame the simulation will advance in one step (tab switches, hitches)
    pub const MAX_FRAME_MS: f64 = 250.0;

    /// Renderer capacity for enemy circles
    pub const MAX_ENEMIES: usize = 256;
}
