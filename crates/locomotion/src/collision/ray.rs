//! Ray and hit value types for collision queries.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// A ray query: origin plus direction.
///
/// Rays are transient values built fresh for each query and never stored.
/// The direction is normalized on construction; a zero-length input leaves
/// it zero, which every query treats as "no hit".
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Ray {
    /// Starting point in world space.
    pub origin: Vec3,
    /// Unit direction, or zero if the input direction was degenerate.
    pub dir: Vec3,
}

impl Ray {
    /// Create a ray, normalizing the direction.
    pub fn new(origin: Vec3, dir: Vec3) -> Self {
        Self {
            origin,
            dir: dir.normalize_or_zero(),
        }
    }

    /// Point along the ray at the given distance from the origin.
    #[inline]
    pub fn point_at(&self, distance: f32) -> Vec3 {
        self.origin + self.dir * distance
    }

    /// Whether the direction failed to normalize.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.dir.length_squared() < 0.5
    }
}

/// The nearest intersection returned by a ray query.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RayHit {
    /// Distance from the ray origin to the hit point.
    pub distance: f32,

    /// The hit point in world space.
    pub point: Vec3,

    /// Surface normal at the hit point, pointing away from the surface.
    pub normal: Vec3,
}
