//! Field <-> canvas coordinate mapping
//!
//! The field keeps its aspect ratio and is centred in the canvas with its
//! padding visible on the tighter axis.

use glam::Vec2;

use crate::config::GameConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Canvas pixels per field unit
    pub scale: f32,
    /// Canvas position of the field's (0, 0)
    pub origin: Vec2,
}

impl Viewport {
    /// Fit a field (plus padding on every side) into a canvas of the given size
    pub fn fit(canvas_w: f32, canvas_h: f32, config: &GameConfig) -> Self {
        let padded_w = config.width + 2.0 * config.padding;
        let padded_h = config.height + 2.0 * config.padding;
        let scale = (canvas_w / padded_w).min(canvas_h / padded_h).max(f32::EPSILON);
        let origin = Vec2::new(
            (canvas_w - config.width * scale) / 2.0,
            (canvas_h - config.height * scale) / 2.0,
        );
        Self { scale, origin }
    }

    /// Canvas coordinates -> field coordinates
    #[inline]
    pub fn to_field(&self, canvas: Vec2) -> Vec2 {
        (canvas - self.origin) / self.scale
    }

    /// Field coordinates -> canvas coordinates
    #[inline]
    pub fn to_canvas(&self, field: Vec2) -> Vec2 {
        field * self.scale + self.origin
    }

    /// Same mapping for a canvas backed by `ratio` physical pixels per CSS pixel
    pub fn scaled(&self, ratio: f32) -> Self {
        Self {
            scale: self.scale * ratio,
            origin: self.origin * ratio,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_fit() {
        let config = GameConfig::default();
        // 700x450 plus 20px padding each side
        let vp = Viewport::fit(740.0, 490.0, &config);
        assert_eq!(vp.scale, 1.0);
        assert_eq!(vp.origin, Vec2::new(20.0, 20.0));
        assert_eq!(vp.to_field(Vec2::new(370.0, 245.0)), Vec2::new(350.0, 225.0));
    }

    #[test]
    fn test_letterbox_wide_canvas() {
        let config = GameConfig::default();
        let vp = Viewport::fit(1480.0, 490.0, &config);
        assert_eq!(vp.scale, 1.0);
        assert_eq!(vp.origin, Vec2::new(390.0, 20.0));
    }

    #[test]
    fn test_round_trip() {
        let config = GameConfig::default();
        let vp = Viewport::fit(1024.0, 768.0, &config);
        let p = Vec2::new(123.0, 321.0);
        let back = vp.to_field(vp.to_canvas(p));
        assert!((back - p).length() < 1e-3);
    }

    #[test]
    fn test_scaled_for_device_pixels() {
        let config = GameConfig::default();
        let vp = Viewport::fit(740.0, 490.0, &config).scaled(2.0);
        assert_eq!(vp.scale, 2.0);
        assert_eq!(vp.to_canvas(Vec2::new(350.0, 225.0)), Vec2::new(740.0, 490.0));
    }
}
