//! Game state and core simulation types
//!
//! All mutable game data lives in `GameState` and changes only through its
//! entry points: `spawn_enemies`, `tick_score`, `drag_player`,
//! `resolve_collision`, `toggle_pause` and `restart`.

use super::drag::{DragInput, DragState};
use super::geometry::{Circle, Position, position_at};
use super::random::{GameRng, between, seeded};
use super::timer::IntervalTimer;
use crate::config::GameConfig;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Timers and animations running
    Playing,
    /// Clock frozen until resumed
    Paused,
}

/// Where an enemy is in its life, with eased progress in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EnemyPhase {
    /// Growing from radius 0 to full size at the spawn point
    Entering { progress: f32 },
    /// Travelling from spawn point to destination
    Moving { progress: f32 },
    /// Resting on its destination until the next wave replaces it
    Arrived,
}

/// An enemy circle
#[derive(Debug, Clone)]
pub struct Enemy {
    /// Spawn point and full-size radius
    pub spawn: Circle,
    /// Clock time of the wave that created this enemy
    pub spawned_at_ms: f64,
    /// Drawn when movement begins
    pub destination: Option<Position>,
    pub wave: u64,
}

impl Enemy {
    pub fn new(spawn: Circle, spawned_at_ms: f64, wave: u64) -> Self {
        Self {
            spawn,
            spawned_at_ms,
            destination: None,
            wave,
        }
    }

    pub fn phase_at(&self, now: f64, config: &GameConfig) -> EnemyPhase {
        let age = now - self.spawned_at_ms;
        if age < config.entry_ms {
            let t = (age / config.entry_ms) as f32;
            EnemyPhase::Entering {
                progress: config.easing.apply(t),
            }
        } else if age < config.traversal_ms() {
            let t = ((age - config.entry_ms) / config.move_ms) as f32;
            EnemyPhase::Moving {
                progress: config.easing.apply(t),
            }
        } else {
            EnemyPhase::Arrived
        }
    }

    /// The circle as drawn and collided at `now`.
    ///
    /// Before a destination is drawn the enemy stays on its spawn point.
    pub fn circle_at(&self, now: f64, config: &GameConfig) -> Circle {
        let end = self.destination.unwrap_or(self.spawn.center);
        match self.phase_at(now, config) {
            EnemyPhase::Entering { progress } => self.spawn.with_radius(self.spawn.radius * progress),
            EnemyPhase::Moving { progress } => self
                .spawn
                .moved_to(position_at(self.spawn.center, end, progress)),
            EnemyPhase::Arrived => self.spawn.moved_to(end),
        }
    }
}

/// Something the host should show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    ScoreChanged(u64),
    BestScoreChanged(u64),
    /// Player overlapped the enemy at this index during a sample
    Collision { enemy: usize },
    EnemiesSpawned { wave: u64, count: usize },
    Paused,
    Resumed,
}

/// Complete game state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub config: GameConfig,
    pub phase: GamePhase,
    /// Simulation clock (ms since start, frozen while paused)
    pub clock_ms: f64,
    /// Current score, +1 per score tick, 0 after a collision
    pub score: u64,
    /// Highest score seen at a collision
    pub best_score: u64,
    pub player: Circle,
    /// Current wave, replaced wholesale on every spawn
    pub enemies: Vec<Enemy>,
    /// Spawn counter (0 = nothing spawned yet)
    pub wave: u64,
    /// Collision samples over the whole run
    pub collisions: u64,
    pub drag: DragState,
    pub spawn_timer: IntervalTimer,
    pub score_timer: IntervalTimer,
    rng: GameRng,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game with the player centred and no enemies yet
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let player = Circle::new(config.width / 2.0, config.height / 2.0, config.player_radius);
        Self {
            seed,
            phase: GamePhase::Playing,
            clock_ms: 0.0,
            score: 0,
            best_score: 0,
            player,
            enemies: Vec::with_capacity(config.enemy_count),
            wave: 0,
            collisions: 0,
            drag: DragState::default(),
            spawn_timer: IntervalTimer::immediate(config.spawn_interval_ms),
            score_timer: IntervalTimer::immediate(config.score_interval_ms),
            rng: seeded(seed),
            events: Vec::new(),
            config,
        }
    }

    /// Start over with a new seed, keeping the config
    pub fn restart(&mut self, seed: u64) {
        let was_paused = self.phase == GamePhase::Paused;
        *self = Self::new(self.config.clone(), seed);
        if was_paused {
            self.events.push(GameEvent::Resumed);
        }
        self.events.push(GameEvent::ScoreChanged(0));
        self.events.push(GameEvent::BestScoreChanged(0));
    }

    /// Random point inside the spawn margins
    fn random_point(&mut self) -> Position {
        let (x_min, x_max) = self.config.x_range().unwrap_or((0, 0));
        let (y_min, y_max) = self.config.y_range().unwrap_or((0, 0));
        let x = between(&mut self.rng, x_min, x_max);
        let y = between(&mut self.rng, y_min, y_max);
        Position::new(x as f32, y as f32)
    }

    /// Replace every enemy with a fresh wave spawned at `at_ms`.
    /// Anything still moving from the previous wave is dropped.
    pub fn spawn_enemies(&mut self, at_ms: f64) {
        self.wave += 1;
        let (r_min, r_max) = (self.config.enemy_radius_min, self.config.enemy_radius_max);
        let mut enemies = Vec::with_capacity(self.config.enemy_count);
        for _ in 0..self.config.enemy_count {
            let center = self.random_point();
            let radius = between(&mut self.rng, r_min, r_max) as f32;
            enemies.push(Enemy::new(Circle::at(center, radius), at_ms, self.wave));
        }
        self.enemies = enemies;
        log::debug!("Wave {} spawned {} enemies", self.wave, self.enemies.len());
        self.events.push(GameEvent::EnemiesSpawned {
            wave: self.wave,
            count: self.enemies.len(),
        });
    }

    /// Draw a destination for every moving enemy that lacks one
    pub fn assign_destinations(&mut self, now: f64) {
        for i in 0..self.enemies.len() {
            if self.enemies[i].destination.is_some() {
                continue;
            }
            if let EnemyPhase::Moving { .. } | EnemyPhase::Arrived =
                self.enemies[i].phase_at(now, &self.config)
            {
                let dest = self.random_point();
                self.enemies[i].destination = Some(dest);
            }
        }
    }

    /// One score tick
    pub fn tick_score(&mut self) {
        self.score += 1;
        self.events.push(GameEvent::ScoreChanged(self.score));
    }

    /// Collision callback: bank the best score, then zero the score
    pub fn resolve_collision(&mut self, enemy: usize) {
        self.collisions += 1;
        self.events.push(GameEvent::Collision { enemy });

        if self.score > self.best_score {
            log::info!("New best score: {} (was {})", self.score, self.best_score);
            self.best_score = self.score;
        }
        self.events.push(GameEvent::BestScoreChanged(self.best_score));

        if self.score > 0 {
            log::info!("Hit by enemy {} - score {} reset", enemy, self.score);
        }
        self.score = 0;
        self.events.push(GameEvent::ScoreChanged(0));
    }

    /// Feed a pointer gesture to the player
    pub fn drag_player(&mut self, input: DragInput) {
        if let Some(moved) = self.drag.apply(&self.player, input) {
            self.player = moved;
        }
    }

    pub fn toggle_pause(&mut self) {
        match self.phase {
            GamePhase::Playing => {
                self.phase = GamePhase::Paused;
                self.drag = DragState::default();
                self.events.push(GameEvent::Paused);
            }
            GamePhase::Paused => {
                self.phase = GamePhase::Playing;
                self.events.push(GameEvent::Resumed);
            }
        }
    }

    /// Enemy circles as they should look right now
    pub fn enemy_circles(&self) -> impl Iterator<Item = Circle> + '_ {
        self.enemies
            .iter()
            .map(|e| e.circle_at(self.clock_ms, &self.config))
    }

    /// Take all events raised since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
