//! The walkthrough session: runtime callbacks in, travel and view out.

use glam::Vec3;
use maquette_locomotion::{CollisionSurface, Dolly, LocomotionConfig, LocomotionController};
use serde::{Deserialize, Serialize};

use crate::frame::{FrameClock, FrameReport, FrameSnapshot};
use crate::input::{Hand, SelectTracker};

/// Session-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewerConfig {
    /// Where the dolly starts, world space
    pub start_position: Vec3,

    /// Locomotion tuning
    pub locomotion: LocomotionConfig,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            start_position: Vec3::new(0.0, 0.0, 10.0),
            locomotion: LocomotionConfig::default(),
        }
    }
}

/// One immersive walkthrough session.
///
/// Owns the dolly, the select tracker and the frame clock, and applies
/// runtime callbacks to them in order. Rendering lives elsewhere; the
/// session's whole output is the per-frame [`FrameReport`].
///
/// Travel runs only while the session is presenting and at least one
/// controller holds select. The view is composed every frame regardless,
/// so a stationary traveler can still look around.
#[derive(Debug)]
pub struct Viewer {
    controller: LocomotionController,
    dolly: Dolly,
    tracker: SelectTracker,
    clock: FrameClock,
    surface: Option<CollisionSurface>,
    missing_surface_logged: bool,
}

impl Viewer {
    /// Create a session from configuration, with no collision surface yet.
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            controller: LocomotionController::new(config.locomotion),
            dolly: Dolly::new(config.start_position),
            tracker: SelectTracker::new(),
            clock: FrameClock::new(),
            surface: None,
            missing_surface_logged: false,
        }
    }

    /// Create a session with default configuration.
    pub fn with_default_config() -> Self {
        Self::new(ViewerConfig::default())
    }

    /// Hand the session its collision surface, normally right after scene
    /// load. Travel before this point dead-reckons.
    pub fn attach_collision_surface(&mut self, surface: CollisionSurface) {
        tracing::info!(panels = surface.panel_count(), "collision surface attached");
        self.surface = Some(surface);
    }

    /// The attached collision surface, if any.
    pub fn collision_surface(&self) -> Option<&CollisionSurface> {
        self.surface.as_ref()
    }

    /// The rig being moved.
    pub fn dolly(&self) -> &Dolly {
        &self.dolly
    }

    /// Whether either controller currently holds select.
    pub fn any_select_pressed(&self) -> bool {
        self.tracker.any_pressed()
    }

    /// Select-start event from the runtime.
    ///
    /// `device_index` is the runtime's input-source index; anything that
    /// does not name a tracked controller is logged and dropped here.
    pub fn on_select_start(&mut self, device_index: usize) {
        match Hand::from_index(device_index) {
            Some(hand) => self.tracker.on_select_start(hand),
            None => {
                tracing::warn!(device_index, "select start from unknown input source");
            }
        }
    }

    /// Select-end event from the runtime.
    pub fn on_select_end(&mut self, device_index: usize) {
        match Hand::from_index(device_index) {
            Some(hand) => self.tracker.on_select_end(hand),
            None => {
                tracing::warn!(device_index, "select end from unknown input source");
            }
        }
    }

    /// Process one runtime frame.
    ///
    /// Ticks the clock, runs a locomotion step when the travel gate is
    /// open, and composes the world-space viewpoint.
    pub fn on_frame(&mut self, snapshot: &FrameSnapshot) -> FrameReport {
        let dt = self.clock.tick(snapshot.timestamp_s);

        let step = if snapshot.presenting && self.tracker.any_pressed() {
            if self.surface.is_none() && !self.missing_surface_logged {
                tracing::warn!("travel without a collision surface, dead-reckoning");
                self.missing_surface_logged = true;
            }

            let outcome = self.controller.update(
                &mut self.dolly,
                snapshot.head.orientation,
                self.surface.as_ref(),
                dt,
            );

            tracing::trace!(
                dt,
                advanced = outcome.advanced,
                blocked = outcome.blocked,
                "travel frame"
            );

            Some(outcome)
        } else {
            None
        };

        FrameReport {
            dt,
            step,
            view: self.dolly.pose().compose(&snapshot.head),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
