//! Position + orientation primitives shared across the crate.
//!
//! A [`Pose`] is the rigid transform used for the dolly, the headset, and
//! the renderer handoff. Orientation follows the camera convention: the
//! local forward axis is negative Z.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// A rigid transform: position plus orientation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    /// Position in the parent frame.
    pub position: Vec3,
    /// Orientation in the parent frame.
    pub orientation: Quat,
}

impl Pose {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        orientation: Quat::IDENTITY,
    };

    /// Create a pose from position and orientation.
    pub fn new(position: Vec3, orientation: Quat) -> Self {
        Self {
            position,
            orientation,
        }
    }

    /// Create a pose at a position with identity orientation.
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            orientation: Quat::IDENTITY,
        }
    }

    /// Local forward axis (negative Z) expressed in the parent frame.
    #[inline]
    pub fn forward(&self) -> Vec3 {
        self.orientation * Vec3::NEG_Z
    }

    /// Local right axis expressed in the parent frame.
    #[inline]
    pub fn right(&self) -> Vec3 {
        self.orientation * Vec3::X
    }

    /// Local up axis expressed in the parent frame.
    #[inline]
    pub fn up(&self) -> Vec3 {
        self.orientation * Vec3::Y
    }

    /// Compose with a child pose, producing the child expressed in this
    /// pose's parent frame.
    ///
    /// This is how the world-space head pose is computed: the dolly pose
    /// composed with the headset-relative pose.
    pub fn compose(&self, local: &Pose) -> Pose {
        Pose {
            position: self.position + self.orientation * local.position,
            orientation: self.orientation * local.orientation,
        }
    }

    /// The transform mapping this pose's frame back to its parent frame.
    pub fn inverse(&self) -> Pose {
        let orientation = self.orientation.inverse();
        Pose {
            position: -(orientation * self.position),
            orientation,
        }
    }

    /// Transform a point from this pose's local frame to the parent frame.
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        self.position + self.orientation * point
    }

    /// Transform a direction from this pose's local frame to the parent
    /// frame. Ignores position.
    pub fn transform_vector(&self, vector: Vec3) -> Vec3 {
        self.orientation * vector
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}
