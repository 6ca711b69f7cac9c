//! The dolly: the rig the viewpoint rides on.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::pose::Pose;

/// The camera rig locomotion moves through the scene.
///
/// The dolly carries the traveler's position and persistent heading. The
/// headset pose composes on top of it each frame and never writes back
/// into it, so looking around does not move or turn the rig.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dolly {
    /// Rig origin at floor level, world space
    pub position: Vec3,

    /// Persistent heading, changed only by explicit turns
    pub orientation: Quat,
}

impl Default for Dolly {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            orientation: Quat::IDENTITY,
        }
    }
}

impl Dolly {
    /// Create a dolly at a starting position with identity heading.
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// The rig's pose in world space.
    #[inline]
    pub fn pose(&self) -> Pose {
        Pose::new(self.position, self.orientation)
    }

    /// Combined travel orientation for one frame: the rig heading with
    /// the headset's look direction applied on top.
    ///
    /// Pure with respect to the rig. The result steers this frame's rays
    /// and displacement and is then discarded.
    #[inline]
    pub fn travel_frame(&self, head: Quat) -> Quat {
        self.orientation * head
    }
}

// ============================================================================
// Tests
// ============================================================================
