//! Scene meshes and walk-proxy extraction.
//!
//! Walkthrough scenes carry two kinds of geometry: the visual model and a
//! simplified proxy the traveler actually collides with. Authors tag proxy
//! meshes by name; everything else renders but never blocks movement.

use glam::Vec3;
use maquette_locomotion::{CollisionSurface, SurfaceError};
use serde::{Deserialize, Serialize};

/// Name tag marking a mesh as walk-proxy geometry.
pub const PROXY_TAG: &str = "PROXY";

/// A triangle mesh as delivered by the asset layer, in world space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneMesh {
    /// Mesh name from the authoring tool
    pub name: String,

    /// Vertex positions
    pub vertices: Vec<Vec3>,

    /// Triangle indices
    pub indices: Vec<[u32; 3]>,
}

impl SceneMesh {
    /// Whether the mesh is tagged as walk-proxy geometry.
    ///
    /// The tag matches case-sensitively anywhere in the name, so
    /// `Floor_PROXY` and `PROXYWalls` both qualify while `proxy_floor`
    /// does not.
    #[inline]
    pub fn is_walk_proxy(&self) -> bool {
        self.name.contains(PROXY_TAG)
    }
}

/// Build the collision surface from every proxy-tagged mesh in the scene.
///
/// Returns `Ok(None)` when the scene carries no tagged meshes at all; the
/// session then runs in dead-reckoning mode. A tagged mesh with no
/// geometry is a scene-data error and fails the whole extraction.
pub fn extract_walk_proxy(meshes: &[SceneMesh]) -> Result<Option<CollisionSurface>, SurfaceError> {
    let mut surface = CollisionSurface::new();
    let mut visual = 0usize;

    for mesh in meshes {
        if mesh.is_walk_proxy() {
            surface.add_trimesh(&mesh.name, &mesh.vertices, &mesh.indices)?;
        } else {
            visual += 1;
        }
    }

    if surface.is_empty() {
        tracing::info!(visual, "scene carries no walk proxy");
        return Ok(None);
    }

    tracing::info!(
        panels = surface.panel_count(),
        visual,
        "extracted walk proxy"
    );

    Ok(Some(surface))
}

// ============================================================================
// Tests
// ============================================================================
