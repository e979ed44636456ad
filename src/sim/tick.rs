//! Per-frame simulation step
//!
//! Each call is one animation sample: input first, then the timers that came
//! due, then every moving enemy is interpolated and tested against the
//! player as it is right now.

use super::collision::circles_collide;
use super::drag::DragInput;
use super::state::{EnemyPhase, GamePhase, GameState};
use crate::consts::MAX_FRAME_MS;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Pointer gestures since the last tick, in order
    pub drag: Vec<DragInput>,
    /// Pause toggle
    pub pause: bool,
}

/// Which timer fired
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Firing {
    Score,
    Spawn,
}

/// Advance the game by `dt_ms` of wall time and take one animation sample
pub fn tick(state: &mut GameState, input: &TickInput, dt_ms: f64) {
    if input.pause {
        state.toggle_pause();
    }
    if state.phase == GamePhase::Paused {
        return;
    }

    for gesture in &input.drag {
        state.drag_player(*gesture);
    }

    state.clock_ms += dt_ms.clamp(0.0, MAX_FRAME_MS);
    let now = state.clock_ms;

    run_timers(state, now);
    sample_enemies(state, now);
}

/// Fire every due timer in time order (score first on ties)
fn run_timers(state: &mut GameState, now: f64) {
    loop {
        let next = match (state.score_timer.due(now), state.spawn_timer.due(now)) {
            (Some(score_at), Some(spawn_at)) if spawn_at < score_at => Firing::Spawn,
            (Some(_), _) => Firing::Score,
            (None, Some(_)) => Firing::Spawn,
            (None, None) => break,
        };
        match next {
            Firing::Score => {
                state.score_timer.take_due(now);
                state.tick_score();
            }
            Firing::Spawn => {
                if let Some(at) = state.spawn_timer.take_due(now) {
                    state.spawn_enemies(at);
                }
            }
        }
    }
}

/// Interpolate moving enemies and collide them with the player
fn sample_enemies(state: &mut GameState, now: f64) {
    state.assign_destinations(now);

    let hits: Vec<usize> = state
        .enemies
        .iter()
        .enumerate()
        .filter(|(_, enemy)| {
            matches!(enemy.phase_at(now, &state.config), EnemyPhase::Moving { .. })
        })
        .filter(|(_, enemy)| circles_collide(&state.player, &enemy.circle_at(now, &state.config)))
        .map(|(i, _)| i)
        .collect();

    for enemy in hits {
        state.resolve_collision(enemy);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::geometry::Circle;
    use crate::sim::state::{Enemy, GameEvent};
    use glam::Vec2;

    /// A config with no enemies, for pure timer tests
    fn empty_field() -> GameConfig {
        GameConfig {
            enemy_count: 0,
            ..Default::default()
        }
    }

    /// Tick in 10ms frames until the clock reaches `until_ms`
    fn run_until(state: &mut GameState, until_ms: f64) {
        while state.clock_ms < until_ms {
            let dt = (until_ms - state.clock_ms).min(10.0);
            tick(state, &TickInput::default(), dt);
        }
    }

    #[test]
    fn test_first_tick_spawns_and_scores() {
        let mut state = GameState::new(GameConfig::default(), 12345);
        tick(&mut state, &TickInput::default(), 0.0);
        assert_eq!(state.score, 1);
        assert_eq!(state.wave, 1);
        assert_eq!(state.enemies.len(), 50);
    }

    #[test]
    fn test_score_counts_ticks() {
        let mut state = GameState::new(empty_field(), 1);
        // t = 0 plus 20 more periods
        for _ in 0..100 {
            tick(&mut state, &TickInput::default(), 10.0);
        }
        assert_eq!(state.clock_ms, 1000.0);
        assert_eq!(state.score, 21);
        assert_eq!(state.best_score, 0);
    }

    #[test]
    fn test_long_frame_is_clamped() {
        let mut state = GameState::new(empty_field(), 1);
        tick(&mut state, &TickInput::default(), 10_000.0);
        assert_eq!(state.clock_ms, MAX_FRAME_MS);
        assert_eq!(state.score, 6);
    }

    #[test]
    fn test_respawn_every_interval() {
        let mut state = GameState::new(GameConfig::default(), 9);
        for _ in 0..300 {
            tick(&mut state, &TickInput::default(), 10.0);
        }
        // spawns at 0, 1500, 3000
        assert_eq!(state.clock_ms, 3000.0);
        assert_eq!(state.wave, 3);
        assert!(state.enemies.iter().all(|e| e.spawned_at_ms == 3000.0));
    }

    #[test]
    fn test_moving_enemy_hits_centered_player() {
        let config = empty_field();
        let mut state = GameState::new(config, 1);
        tick(&mut state, &TickInput::default(), 0.0);
        for _ in 0..10 {
            state.tick_score();
        }

        // Enemy passing straight through the player's center
        let mut enemy = Enemy::new(Circle::new(300.0, 225.0, 10.0), 0.0, 1);
        enemy.destination = Some(Vec2::new(400.0, 225.0));
        state.enemies = vec![enemy];
        state.drain_events();

        // Entry done at 500ms; movement starts 50px away, a clear miss
        run_until(&mut state, 500.0);
        assert_eq!(state.collisions, 0);
        assert_eq!(state.best_score, 0);

        // Player is hit at the midpoint (t = 0.5 -> x = 350)
        state.score_timer.next_due_ms = f64::MAX;
        run_until(&mut state, 1000.0);
        assert_eq!(state.score, 0);
        assert!(state.best_score >= 11);
        assert!(
            state
                .drain_events()
                .contains(&GameEvent::Collision { enemy: 0 })
        );
    }

    #[test]
    fn test_entering_enemy_never_collides() {
        let mut state = GameState::new(empty_field(), 1);
        tick(&mut state, &TickInput::default(), 0.0);
        state.enemies = vec![Enemy::new(Circle::new(350.0, 225.0, 12.0), 0.0, 1)];
        tick(&mut state, &TickInput::default(), 100.0);
        assert_eq!(state.collisions, 0);
        assert!(state.score > 0);
    }

    #[test]
    fn test_drag_is_seen_by_next_sample() {
        let mut state = GameState::new(empty_field(), 1);
        tick(&mut state, &TickInput::default(), 0.0);

        // Stationary-path enemy in movement phase far from the start position
        let mut enemy = Enemy::new(Circle::new(100.0, 100.0, 10.0), 0.0, 1);
        enemy.destination = Some(Vec2::new(100.0, 100.0));
        state.enemies = vec![enemy];
        run_until(&mut state, 600.0);
        assert_eq!(state.collisions, 0);

        let input = TickInput {
            drag: vec![
                DragInput::Start(Vec2::new(350.0, 225.0)),
                DragInput::Move(Vec2::new(105.0, 100.0)),
            ],
            ..Default::default()
        };
        tick(&mut state, &input, 16.0);
        assert_eq!(state.player, Circle::new(105.0, 100.0, 10.0));
        assert_eq!(state.collisions, 1);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_overlap_fires_every_sample() {
        let mut state = GameState::new(empty_field(), 1);
        tick(&mut state, &TickInput::default(), 0.0);
        let mut enemy = Enemy::new(Circle::new(350.0, 225.0, 10.0), 0.0, 1);
        enemy.destination = Some(Vec2::new(350.0, 225.0));
        state.enemies = vec![enemy];

        run_until(&mut state, 500.0);
        for _ in 0..5 {
            tick(&mut state, &TickInput::default(), 16.0);
        }
        assert_eq!(state.collisions, 6);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_pause_freezes_clock() {
        let mut state = GameState::new(empty_field(), 1);
        tick(&mut state, &TickInput::default(), 0.0);

        let pause = TickInput {
            pause: true,
            ..Default::default()
        };
        tick(&mut state, &pause, 100.0);
        assert_eq!(state.phase, GamePhase::Paused);
        let frozen = (state.clock_ms, state.score);

        tick(&mut state, &TickInput::default(), 100.0);
        assert_eq!((state.clock_ms, state.score), frozen);

        tick(&mut state, &pause, 100.0);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.clock_ms, 100.0);
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let mut state1 = GameState::new(GameConfig::default(), 99999);
        let mut state2 = GameState::new(GameConfig::default(), 99999);

        let inputs = [
            TickInput {
                drag: vec![DragInput::Start(Vec2::new(350.0, 225.0))],
                ..Default::default()
            },
            TickInput {
                drag: vec![DragInput::Move(Vec2::new(200.0, 100.0))],
                ..Default::default()
            },
            TickInput::default(),
            TickInput {
                drag: vec![DragInput::End],
                ..Default::default()
            },
        ];

        for _ in 0..100 {
            for input in &inputs {
                tick(&mut state1, input, 16.0);
                tick(&mut state2, input, 16.0);
            }
        }

        assert_eq!(state1.clock_ms, state2.clock_ms);
        assert_eq!(state1.score, state2.score);
        assert_eq!(state1.best_score, state2.best_score);
        assert_eq!(state1.collisions, state2.collisions);
        let a: Vec<Circle> = state1.enemy_circles().collect();
        let b: Vec<Circle> = state2.enemy_circles().collect();
        assert_eq!(a, b);
    }
}
