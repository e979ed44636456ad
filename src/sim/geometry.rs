//! Positions and circles
//!
//! A circle is a position plus a radius, nothing more. Both are plain
//! values; moving something means building a new circle.

use glam::Vec2;

/// A point on the field (pixels, y down)
pub type Position = Vec2;

/// The player or an enemy
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Position,
    pub radius: f32,
}

impl Circle {
    pub const fn new(x: f32, y: f32, radius: f32) -> Self {
        Self {
            center: Vec2::new(x, y),
            radius,
        }
    }

    pub const fn at(center: Position, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Same circle, new center
    #[inline]
    pub fn moved_to(&self, center: Position) -> Self {
        Self::at(center, self.radius)
    }

    /// Same center, new radius
    #[inline]
    pub fn with_radius(&self, radius: f32) -> Self {
        Self::at(self.center, radius)
    }

    /// True if the point lies inside or on the edge
    #[inline]
    pub fn contains(&self, point: Position) -> bool {
        sd_circle(point, self.center, self.radius) <= 0.0
    }
}

/// Signed distance to a circle
#[inline]
pub fn sd_circle(p: Vec2, center: Vec2, radius: f32) -> f32 {
    (p - center).length() - radius
}

/// Linear interpolation between two positions.
///
/// `t` is clamped to [0, 1] and the endpoints are returned exactly, so an
/// enemy that finishes its path sits precisely on its destination. Interior
/// points are kept inside the start/end box so rounding never overshoots.
pub fn position_at(start: Position, end: Position, t: f32) -> Position {
    if t <= 0.0 {
        start
    } else if t >= 1.0 {
        end
    } else {
        (start + (end - start) * t).clamp(start.min(end), start.max(end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_at_endpoints() {
        let start = Vec2::new(0.1, 713.3);
        let end = Vec2::new(0.3, -2.7);
        assert_eq!(position_at(start, end, 0.0), start);
        assert_eq!(position_at(start, end, 1.0), end);
        assert_eq!(position_at(start, end, -0.5), start);
        assert_eq!(position_at(start, end, 1.5), end);
    }

    #[test]
    fn test_position_at_midpoint() {
        let p = position_at(Vec2::new(10.0, 100.0), Vec2::new(30.0, 50.0), 0.5);
        assert!((p.x - 20.0).abs() < 1e-5);
        assert!((p.y - 75.0).abs() < 1e-5);
    }

    #[test]
    fn test_moved_to_keeps_radius() {
        let player = Circle::new(350.0, 225.0, 10.0);
        let moved = player.moved_to(Vec2::new(-40.0, 900.0));
        assert_eq!(moved.center, Vec2::new(-40.0, 900.0));
        assert_eq!(moved.radius, 10.0);
        // input circle untouched
        assert_eq!(player.center, Vec2::new(350.0, 225.0));
    }

    #[test]
    fn test_contains_edge_inclusive() {
        let c = Circle::new(0.0, 0.0, 10.0);
        assert!(c.contains(Vec2::new(10.0, 0.0)));
        assert!(c.contains(Vec2::ZERO));
        assert!(!c.contains(Vec2::new(10.5, 0.0)));
    }
}
