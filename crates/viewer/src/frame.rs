//! Frame timing and per-frame data.

use maquette_locomotion::{Pose, StepOutcome};
use serde::{Deserialize, Serialize};

/// Derives per-frame delta time from runtime timestamps.
///
/// The runtime owns the clock; we only ever see its timestamps. The first
/// tick reports zero, and a timestamp going backwards clamps to zero
/// rather than producing a negative step.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameClock {
    last: Option<f64>,
}

impl FrameClock {
    /// Create a clock that has not seen a frame yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance to `timestamp_s` and return the seconds elapsed since the
    /// previous tick.
    pub fn tick(&mut self, timestamp_s: f64) -> f32 {
        let dt = match self.last {
            Some(last) => (timestamp_s - last).max(0.0) as f32,
            None => 0.0,
        };
        self.last = Some(timestamp_s);
        dt
    }
}

/// What the runtime hands the session each frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    /// Runtime frame timestamp (seconds)
    pub timestamp_s: f64,

    /// Whether an immersive session is presenting this frame
    pub presenting: bool,

    /// Headset pose, rig-local
    pub head: Pose,
}

/// What the session did with one frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameReport {
    /// Seconds since the previous frame
    pub dt: f32,

    /// Locomotion result, present when the travel gate was open
    pub step: Option<StepOutcome>,

    /// Viewpoint in world space: the rig pose composed with the head pose
    pub view: Pose,
}

// ============================================================================
// Tests
// ============================================================================
