//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Clock advanced only by `tick`
//! - Seeded RNG only
//! - Stable iteration order (enemy index)
//! - No rendering or platform dependencies

pub mod collision;
pub mod drag;
pub mod geometry;
pub mod random;
pub mod state;
pub mod tick;
pub mod timer;

pub use collision::circles_collide;
pub use drag::{DragInput, DragState};
pub use geometry::{Circle, Position, position_at, sd_circle};
pub use random::{GameRng, between, seeded};
pub use state::{Enemy, EnemyPhase, GameEvent, GamePhase, GameState};
pub use tick::{TickInput, tick};
pub use timer::IntervalTimer;
