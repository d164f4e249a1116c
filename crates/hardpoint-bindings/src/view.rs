//! Camera/view collaborator contract and a plain orthographic implementation.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Screen-space placement of the whole binding screen for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewFrame {
    pub center: Vec2,
    pub size: Vec2,
    /// Cursor position, the free end of selection links.
    pub cursor: Vec2,
}

impl ViewFrame {
    pub fn new(size: Vec2) -> Self {
        Self {
            center: size / 2.0,
            size,
            cursor: Vec2::ZERO,
        }
    }
}

/// Projects vehicle world space into the ship panel.
///
/// Screen results are relative to the panel's lower-left corner.
pub trait Projector {
    fn set_viewport(&mut self, size: Vec2);

    /// Fit a circle of `radius` around `center` into the viewport.
    fn frame(&mut self, center: Vec2, radius: f32);

    fn to_screen(&self, world: Vec2) -> Vec2;

    fn to_screen_size(&self, world: f32) -> f32;
}

/// Orthographic camera: `scale` world units per point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrthoView {
    pub position: Vec2,
    pub angle: f32,
    pub scale: f32,
    pub viewport: Vec2,
}

impl Default for OrthoView {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            angle: 0.0,
            scale: 1.0,
            viewport: Vec2::ZERO,
        }
    }
}

impl Projector for OrthoView {
    fn set_viewport(&mut self, size: Vec2) {
        self.viewport = size;
    }

    fn frame(&mut self, center: Vec2, radius: f32) {
        let fit = self.viewport.min_element();
        if radius > 0.0 && fit > 0.0 {
            self.scale = 2.0 * radius / fit;
        }
        self.position = center;
    }

    fn to_screen(&self, world: Vec2) -> Vec2 {
        let local = Vec2::from_angle(-self.angle).rotate(world - self.position);
        local / self.scale + self.viewport / 2.0
    }

    fn to_screen_size(&self, world: f32) -> f32 {
        world / self.scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_fits_radius() {
        let mut view = OrthoView::default();
        view.set_viewport(Vec2::new(400.0, 200.0));
        view.frame(Vec2::new(10.0, 0.0), 50.0);
        assert_eq!(view.to_screen(Vec2::new(10.0, 0.0)), Vec2::new(200.0, 100.0));
        // Radius spans half the short side.
        assert!((view.to_screen_size(50.0) - 100.0).abs() < 1e-4);
        assert!((view.to_screen(Vec2::new(10.0, 50.0)).y - 200.0).abs() < 1e-4);
    }

    #[test]
    fn test_frame_ignores_degenerate_input() {
        let mut view = OrthoView::default();
        view.frame(Vec2::ZERO, 50.0);
        assert_eq!(view.scale, 1.0);
    }
}
