//! Error types
//!
//! The simulation itself is total; errors only come from loading
//! configuration and bringing up the browser shell.

use thiserror::Error;

/// Reasons a configuration is rejected
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("field size must be positive (got {width}x{height})")]
    InvalidFieldSize { width: f32, height: f32 },
    #[error("{name} must be greater than zero")]
    NonPositiveDuration { name: &'static str },
    #[error("enemy radius range is empty ({min} > {max})")]
    EmptyRadiusRange { min: i32, max: i32 },
    #[error("enemy radius must not be negative (min {min})")]
    NegativeRadius { min: i32 },
    #[error("player radius must not be negative ({0})")]
    NegativePlayerRadius(f32),
    #[error("spawn margin must not be negative ({0})")]
    NegativeMargin(i32),
    #[error("spawn margin {margin} leaves no room in a {width}x{height} field")]
    MarginTooLarge { margin: i32, width: f32, height: f32 },
    #[error("enemy count {count} exceeds renderer capacity {max}")]
    TooManyEnemies { count: usize, max: usize },
}

#[derive(Error, Debug)]
pub enum WatchoutError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("configuration is not valid JSON")]
    Json(#[from] serde_json::Error),
    #[error("renderer setup failed: {0}")]
    Renderer(String),
    #[error("page element `{0}` not found")]
    MissingElement(&'static str),
}
