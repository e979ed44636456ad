//! Game configuration
//!
//! Static for the lifetime of a game. Defaults reproduce the classic
//! 700x450 field with 50 enemies; a JSON override can be stored in
//! LocalStorage for tinkering.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{ConfigError, WatchoutError};

/// Progress curve applied to entry and movement animations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    #[default]
    Linear,
    /// Slow start and finish (the d3 transition default)
    CubicInOut,
}

impl Easing {
    /// Map linear progress to eased progress. Input is clamped to [0, 1];
    /// both curves keep 0 -> 0 and 1 -> 1 exact.
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u * u / 2.0
                }
            }
        }
    }
}

/// Everything tunable about a game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Field ===
    pub width: f32,
    pub height: f32,
    /// Visual padding around the field (display only)
    pub padding: f32,

    // === Enemies ===
    pub enemy_count: usize,
    pub enemy_radius_min: i32,
    pub enemy_radius_max: i32,
    /// Distance kept from the field edges for spawn points and destinations
    pub spawn_margin: i32,

    // === Player ===
    pub player_radius: f32,

    // === Timing (ms) ===
    pub spawn_interval_ms: f64,
    pub score_interval_ms: f64,
    pub entry_ms: f64,
    pub move_ms: f64,
    pub easing: Easing,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
            padding: FIELD_PADDING,

            enemy_count: ENEMY_COUNT,
            enemy_radius_min: ENEMY_RADIUS_MIN,
            enemy_radius_max: ENEMY_RADIUS_MAX,
            spawn_margin: SPAWN_MARGIN,

            player_radius: PLAYER_RADIUS,

            spawn_interval_ms: SPAWN_INTERVAL_MS,
            score_interval_ms: SCORE_INTERVAL_MS,
            entry_ms: ENTRY_DURATION_MS,
            move_ms: MOVE_DURATION_MS,
            easing: Easing::Linear,
        }
    }
}

impl GameConfig {
    /// Parse a (possibly partial) JSON override and validate it
    pub fn from_json(json: &str) -> Result<Self, WatchoutError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(ConfigError::InvalidFieldSize {
                width: self.width,
                height: self.height,
            });
        }
        for (name, value) in [
            ("spawn_interval_ms", self.spawn_interval_ms),
            ("score_interval_ms", self.score_interval_ms),
            ("entry_ms", self.entry_ms),
            ("move_ms", self.move_ms),
        ] {
            if !(value > 0.0) {
                return Err(ConfigError::NonPositiveDuration { name });
            }
        }
        if self.enemy_radius_min > self.enemy_radius_max {
            return Err(ConfigError::EmptyRadiusRange {
                min: self.enemy_radius_min,
                max: self.enemy_radius_max,
            });
        }
        if self.enemy_radius_min < 0 {
            return Err(ConfigError::NegativeRadius {
                min: self.enemy_radius_min,
            });
        }
        if self.player_radius < 0.0 {
            return Err(ConfigError::NegativePlayerRadius(self.player_radius));
        }
        if self.spawn_margin < 0 {
            return Err(ConfigError::NegativeMargin(self.spawn_margin));
        }
        if self.x_range().is_none() || self.y_range().is_none() {
            return Err(ConfigError::MarginTooLarge {
                margin: self.spawn_margin,
                width: self.width,
                height: self.height,
            });
        }
        if self.enemy_count > MAX_ENEMIES {
            return Err(ConfigError::TooManyEnemies {
                count: self.enemy_count,
                max: MAX_ENEMIES,
            });
        }
        Ok(())
    }

    /// Inclusive x range for spawn points and destinations
    pub fn x_range(&self) -> Option<(i32, i32)> {
        Self::axis_range(self.width, self.spawn_margin)
    }

    /// Inclusive y range for spawn points and destinations
    pub fn y_range(&self) -> Option<(i32, i32)> {
        Self::axis_range(self.height, self.spawn_margin)
    }

    fn axis_range(extent: f32, margin: i32) -> Option<(i32, i32)> {
        let lo = margin;
        let hi = (extent as i32).checked_sub(margin)?;
        (lo <= hi).then_some((lo, hi))
    }

    /// Time from spawn until an enemy stops moving
    pub fn traversal_ms(&self) -> f64 {
        self.entry_ms + self.move_ms
    }

    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "watchout_config";

    /// Load configuration from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(config) => {
                        log::info!("Loaded config override from LocalStorage");
                        return config;
                    }
                    Err(e) => log::warn!("Ignoring stored config: {}", e),
                }
            }
        }

        log::info!("Using default config");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
