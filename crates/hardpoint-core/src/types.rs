//! Fundamental geometric and identity types.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Ordinal of a block within its vehicle (`0..block_count`).
///
/// Stable for as long as the vehicle is not rebuilt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BlockRef(pub u32);

impl BlockRef {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Vehicle placement in its zone: world position plus heading (radians).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec2,
    pub angle: f32,
}

impl Transform {
    /// Canonical display pose: origin, zero heading.
    pub const IDENTITY: Transform = Transform {
        position: Vec2::ZERO,
        angle: 0.0,
    };

    pub fn new(position: Vec2, angle: f32) -> Self {
        Self { position, angle }
    }

    /// Map a vehicle-local offset into world space.
    pub fn apply(&self, local: Vec2) -> Vec2 {
        self.position + Vec2::from_angle(self.angle).rotate(local)
    }
}

/// Axis-aligned screen rectangle (points, y up), stored as center + full size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub center: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(center: Vec2, size: Vec2) -> Self {
        Self { center, size }
    }

    pub fn half_size(&self) -> Vec2 {
        self.size / 2.0
    }

    /// Lower-left corner.
    pub fn min(&self) -> Vec2 {
        self.center - self.half_size()
    }

    /// Whether `point` lies inside. Degenerate (zero or negative size) rects contain nothing.
    pub fn contains(&self, point: Vec2) -> bool {
        if self.size.x <= 0.0 || self.size.y <= 0.0 {
            return false;
        }
        let d = (point - self.center).abs();
        let half = self.half_size();
        d.x <= half.x && d.y <= half.y
    }
}
