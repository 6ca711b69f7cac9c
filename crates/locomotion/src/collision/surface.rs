//! The collision surface: walkable proxy geometry and ray queries against it.
//!
//! The surface is assembled once at scene load (triangle meshes from the
//! asset layer, boxes in tests and demos) and is immutable during the
//! session. Queries return the nearest intersection across all panels.

use glam::Vec3;
use parry3d::math::{Isometry, Point, Real, Vector};
use parry3d::query::Ray as ParryRay;
use parry3d::shape::{SharedShape, TriMeshBuilderError};

use super::ray::{Ray, RayHit};

/// Queries are effectively unbounded; interior scenes are far smaller.
const MAX_QUERY_DISTANCE: Real = 1.0e4;

/// Error building collision geometry from scene meshes.
#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    #[error("collision mesh '{0}' has no geometry")]
    EmptyMesh(String),

    #[error("collision mesh '{0}' rejected: {1}")]
    BadMesh(String, TriMeshBuilderError),
}

/// One piece of proxy geometry.
#[derive(Debug, Clone)]
struct SurfacePanel {
    /// Where the panel came from, for logging.
    label: String,
    /// The collision shape.
    shape: SharedShape,
    /// Position and orientation in world space.
    transform: Isometry<Real>,
}

/// Static scene geometry used as the target of locomotion ray queries.
///
/// Built from the scene's tagged walk proxy, distinct from visual geometry.
/// Immutable once the session starts; the locomotion controller holds it
/// only by reference and may run without one (dead-reckoning mode).
#[derive(Debug, Default)]
pub struct CollisionSurface {
    panels: Vec<SurfacePanel>,
}

impl CollisionSurface {
    /// Create an empty surface.
    pub fn new() -> Self {
        Self { panels: Vec::new() }
    }

    /// Add an axis-aligned box panel.
    ///
    /// # Arguments
    ///
    /// * `center` - Center position of the box in world space
    /// * `half_extents` - Half-size in each axis (x, y, z)
    pub fn add_box(&mut self, center: Vec3, half_extents: Vec3) {
        let shape = SharedShape::cuboid(half_extents.x, half_extents.y, half_extents.z);
        let transform = Isometry::translation(center.x, center.y, center.z);

        self.panels.push(SurfacePanel {
            label: "box".to_string(),
            shape,
            transform,
        });
    }

    /// Add a triangle mesh panel with vertices already in world space.
    ///
    /// # Arguments
    ///
    /// * `label` - Source mesh name, used in logs and errors
    /// * `vertices` - Mesh vertex positions
    /// * `indices` - Triangle indices (3 per triangle)
    pub fn add_trimesh(
        &mut self,
        label: &str,
        vertices: &[Vec3],
        indices: &[[u32; 3]],
    ) -> Result<(), SurfaceError> {
        if vertices.is_empty() || indices.is_empty() {
            return Err(SurfaceError::EmptyMesh(label.to_string()));
        }

        let points: Vec<Point<Real>> = vertices
            .iter()
            .map(|v| Point::new(v.x, v.y, v.z))
            .collect();

        let shape = SharedShape::trimesh(points, indices.to_vec())
            .map_err(|e| SurfaceError::BadMesh(label.to_string(), e))?;

        tracing::debug!(label, triangles = indices.len(), "added collision panel");

        self.panels.push(SurfacePanel {
            label: label.to_string(),
            shape,
            transform: Isometry::identity(),
        });

        Ok(())
    }

    /// Number of panels in the surface.
    pub fn panel_count(&self) -> usize {
        self.panels.len()
    }

    /// Whether the surface holds no geometry at all.
    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    /// Cast a ray and return the nearest intersection.
    ///
    /// A degenerate (zero-length) direction yields `None` rather than an
    /// error, so callers treat it the same as open space.
    pub fn cast_ray(&self, ray: &Ray) -> Option<RayHit> {
        if ray.is_degenerate() {
            return None;
        }

        let parry_ray = ParryRay::new(
            Point::new(ray.origin.x, ray.origin.y, ray.origin.z),
            Vector::new(ray.dir.x, ray.dir.y, ray.dir.z),
        );

        let mut closest: Option<RayHit> = None;

        for panel in &self.panels {
            if let Some(hit) = panel.shape.cast_ray_and_get_normal(
                &panel.transform,
                &parry_ray,
                MAX_QUERY_DISTANCE,
                true,
            ) {
                let is_closer = closest
                    .as_ref()
                    .map_or(true, |best| hit.time_of_impact < best.distance);

                if is_closer {
                    closest = Some(RayHit {
                        distance: hit.time_of_impact,
                        point: ray.point_at(hit.time_of_impact),
                        normal: Vec3::new(hit.normal.x, hit.normal.y, hit.normal.z),
                    });
                }
            }
        }

        closest
    }

    /// Labels of all panels, in insertion order.
    pub fn panel_labels(&self) -> impl Iterator<Item = &str> {
        self.panels.iter().map(|p| p.label.as_str())
    }
}

// ============================================================================
// Tests
// ============================================================================
