//! Circle/circle collision
//!
//! Circles collide when the sum of their radii exceeds the distance between
//! their centers. Touching circles do not collide.

use super::geometry::Circle;

/// Strict overlap test, compared in squared space (no sqrt)
#[inline]
pub fn circles_collide(a: &Circle, b: &Circle) -> bool {
    let d = a.center - b.center;
    let rsum = a.radius + b.radius;
    rsum * rsum > d.x * d.x + d.y * d.y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concentric_circles_collide() {
        let player = Circle::new(350.0, 225.0, 10.0);
        let enemy = Circle::new(350.0, 225.0, 10.0);
        assert!(circles_collide(&player, &enemy));
    }

    #[test]
    fn test_distant_circles_miss() {
        let player = Circle::new(350.0, 225.0, 10.0);
        let enemy = Circle::new(400.0, 225.0, 10.0);
        assert!(!circles_collide(&player, &enemy));
    }

    #[test]
    fn test_tangent_circles_do_not_collide() {
        let player = Circle::new(0.0, 0.0, 10.0);
        let enemy = Circle::new(20.0, 0.0, 10.0);
        assert!(!circles_collide(&player, &enemy));

        // 3-4-5 triangle, exact in f32
        let enemy = Circle::new(30.0, 40.0, 40.0);
        assert!(!circles_collide(&player, &enemy));

        let enemy = Circle::new(19.5, 0.0, 10.0);
        assert!(circles_collide(&player, &enemy));
    }
}
