//! Locomotion tuning parameters.

use serde::{Deserialize, Serialize};

/// Tuning parameters for dolly locomotion.
///
/// The defaults reproduce the walkthrough feel the viewer ships with:
/// a slow museum walk with generous wall clearance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocomotionConfig {
    /// Minimum distance kept between the eye and any wall (meters)
    pub wall_clearance: f32,

    /// Forward travel speed while select is held (meters/second)
    pub forward_speed: f32,

    /// Height of the wall rays above the dolly origin (meters)
    pub eye_height: f32,

    /// Extra rise above eye height for the downward floor probe (meters)
    pub floor_probe_rise: f32,
}

impl Default for LocomotionConfig {
    fn default() -> Self {
        Self {
            wall_clearance: 1.3,
            forward_speed: 2.0,
            eye_height: 1.0,
            floor_probe_rise: 1.5,
        }
    }
}

impl LocomotionConfig {
    /// Brisk preset: faster walk with tighter clearance.
    pub fn brisk() -> Self {
        Self {
            forward_speed: 3.5,
            wall_clearance: 0.9,
            ..Default::default()
        }
    }

    /// Cautious preset: slow drift with wide clearance, for cramped scenes.
    pub fn cautious() -> Self {
        Self {
            forward_speed: 1.0,
            wall_clearance: 1.8,
            ..Default::default()
        }
    }

    /// Height above the dolly origin the floor probe starts from.
    #[inline]
    pub fn floor_probe_height(&self) -> f32 {
        self.eye_height + self.floor_probe_rise
    }
}

// ============================================================================
// Tests
// ============================================================================
