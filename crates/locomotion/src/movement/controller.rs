//! Dolly locomotion over the scene's walk proxy.
//!
//! Travel is gaze-steered and collision-corrected by four ray queries per
//! frame, in a fixed order: a forward gate, one push-out per side, then an
//! absolute floor snap. Each query reads the position the queries before it
//! produced, so corrections compose within a single frame.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::collision::{CollisionSurface, Ray};
use crate::movement::config::LocomotionConfig;
use crate::movement::dolly::Dolly;

/// What one locomotion step did to the dolly.
///
/// Returned by [`LocomotionController::update`] so the shell can log or
/// display travel without re-deriving it from positions.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StepOutcome {
    /// Forward distance actually traveled (meters)
    pub advanced: f32,

    /// Whether the forward gate held the dolly in place
    pub blocked: bool,

    /// Net sideways correction, positive toward travel-right (meters)
    pub lateral_shift: f32,

    /// Whether the dolly was re-seated on the floor
    pub floor_snapped: bool,

    /// Whether the step ran without any collision surface
    pub dead_reckoning: bool,
}

/// Moves a [`Dolly`] through the scene one frame at a time.
///
/// The controller is stateless apart from its configuration; everything
/// that persists between frames lives in the dolly itself.
#[derive(Debug, Clone)]
pub struct LocomotionController {
    config: LocomotionConfig,
}

impl LocomotionController {
    /// Create a controller with the given configuration.
    pub fn new(config: LocomotionConfig) -> Self {
        Self { config }
    }

    /// Create a controller with default walkthrough tuning.
    pub fn with_default_config() -> Self {
        Self::new(LocomotionConfig::default())
    }

    /// The active configuration.
    pub fn config(&self) -> &LocomotionConfig {
        &self.config
    }

    /// Advance the dolly by one frame of travel.
    ///
    /// Runs the fixed ray sequence against the collision surface. Without
    /// a surface the dolly dead-reckons along the travel direction instead,
    /// with no blocking, push-out or floor snap.
    ///
    /// The dolly's heading is never modified; only its position is.
    ///
    /// # Arguments
    ///
    /// * `dolly` - Rig to move
    /// * `head` - Headset orientation for this frame, rig-local
    /// * `surface` - Walk proxy to query, if the scene provided one
    /// * `dt` - Seconds since the previous frame
    pub fn update(
        &self,
        dolly: &mut Dolly,
        head: Quat,
        surface: Option<&CollisionSurface>,
        dt: f32,
    ) -> StepOutcome {
        let frame = dolly.travel_frame(head);
        let forward = frame * Vec3::NEG_Z;
        let step = self.config.forward_speed * dt;

        let surface = match surface {
            Some(surface) => surface,
            None => {
                dolly.position += forward * step;
                return StepOutcome {
                    advanced: step,
                    dead_reckoning: true,
                    ..Default::default()
                };
            }
        };

        let mut outcome = StepOutcome::default();
        let eye_rise = Vec3::Y * self.config.eye_height;
        let clearance = self.config.wall_clearance;

        // Forward gate: advance only if the path ahead stays clear.
        let eye = dolly.position + eye_rise;
        outcome.blocked = surface
            .cast_ray(&Ray::new(eye, forward))
            .map_or(false, |hit| hit.distance < clearance);

        if !outcome.blocked {
            dolly.position += forward * step;
            outcome.advanced = step;
        }

        // Lateral push-out. Both sides measure from the same post-advance
        // origin, so opposing corrections cancel instead of compounding.
        let side_origin = dolly.position + eye_rise;
        let right = frame * Vec3::X;
        let left = frame * Vec3::NEG_X;

        if let Some(hit) = surface.cast_ray(&Ray::new(side_origin, left)) {
            if hit.distance < clearance {
                let shift = clearance - hit.distance;
                dolly.position += right * shift;
                outcome.lateral_shift += shift;
            }
        }

        if let Some(hit) = surface.cast_ray(&Ray::new(side_origin, right)) {
            if hit.distance < clearance {
                let shift = hit.distance - clearance;
                dolly.position += right * shift;
                outcome.lateral_shift += shift;
            }
        }

        // Floor snap: re-seat the rig on whatever is directly below.
        let probe = dolly.position + Vec3::Y * self.config.floor_probe_height();
        if let Some(hit) = surface.cast_ray(&Ray::new(probe, Vec3::NEG_Y)) {
            dolly.position = hit.point;
            outcome.floor_snapped = true;
        }

        outcome
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Flat floor with its top at y=0.
    fn floor_only() -> CollisionSurface {
        let mut surface = CollisionSurface::new();
        surface.add_box(Vec3::new(0.0, -0.5, 0.0), Vec3::new(50.0, 0.5, 50.0));
        surface
    }

    /// Floor plus a wall across the travel path, near face at `face_z`.
    fn floor_and_front_wall(face_z: f32) -> CollisionSurface {
        let mut surface = floor_only();
        surface.add_box(
            Vec3::new(0.0, 2.5, face_z - 0.5),
            Vec3::new(20.0, 2.5, 0.5),
        );
        surface
    }

    #[test]
    fn test_open_floor_advance() {
        let surface = floor_only();
        let controller = LocomotionController::with_default_config();
        let mut dolly = Dolly::new(Vec3::new(0.0, 0.0, 10.0));

        let outcome = controller.update(&mut dolly, Quat::IDENTITY, Some(&surface), 0.1);

        assert!(!outcome.blocked);
        assert!(!outcome.dead_reckoning);
        assert!(outcome.floor_snapped);
        assert!((outcome.advanced - 0.2).abs() < 1e-5);
        assert!((dolly.position - Vec3::new(0.0, 0.0, 9.8)).length() < 1e-4);
    }

    #[test]
    fn test_wall_inside_clearance_blocks() {
        // Near face 1.0 away from the eye, inside the 1.3 clearance
        let surface = floor_and_front_wall(9.0);
        let controller = LocomotionController::with_default_config();
        let mut dolly = Dolly::new(Vec3::new(0.0, 0.0, 10.0));

        let outcome = controller.update(&mut dolly, Quat::IDENTITY, Some(&surface), 0.1);

        assert!(outcome.blocked);
        assert_eq!(outcome.advanced, 0.0);
        assert!((dolly.position - Vec3::new(0.0, 0.0, 10.0)).length() < 1e-4);
    }

    #[test]
    fn test_wall_beyond_clearance_does_not_block() {
        // Near face 1.5 away from the eye, outside the 1.3 clearance
        let surface = floor_and_front_wall(8.5);
        let controller = LocomotionController::with_default_config();
        let mut dolly = Dolly::new(Vec3::new(0.0, 0.0, 10.0));

        let outcome = controller.update(&mut dolly, Quat::IDENTITY, Some(&surface), 0.1);

        assert!(!outcome.blocked);
        assert!((dolly.position.z - 9.8).abs() < 1e-4);
    }

    #[test]
    fn test_wall_at_exact_clearance_advances() {
        // Blocking is strict: a hit at exactly wall_clearance still moves
        let surface = floor_and_front_wall(-1.3);
        let controller = LocomotionController::with_default_config();
        let mut dolly = Dolly::new(Vec3::ZERO);

        let outcome = controller.update(&mut dolly, Quat::IDENTITY, Some(&surface), 0.1);

        assert!(!outcome.blocked);
        assert!((dolly.position.z + 0.2).abs() < 1e-4);
    }

    #[test]
    fn test_left_wall_pushes_right() {
        let mut surface = floor_only();
        // Near face at x=-0.5, half a meter off the travel line
        surface.add_box(Vec3::new(-1.0, 2.5, 0.0), Vec3::new(0.5, 2.5, 20.0));

        let controller = LocomotionController::with_default_config();
        let mut dolly = Dolly::new(Vec3::new(0.0, 0.5, 0.0));

        let outcome = controller.update(&mut dolly, Quat::IDENTITY, Some(&surface), 0.0);

        // The snap re-seats height without undoing the push
        assert!(outcome.floor_snapped);
        assert!((outcome.lateral_shift - 0.8).abs() < 1e-3);
        assert!((dolly.position - Vec3::new(0.8, 0.0, 0.0)).length() < 1e-3);
    }

    #[test]
    fn test_right_wall_pushes_left() {
        let mut surface = floor_only();
        // Near face at x=0.5
        surface.add_box(Vec3::new(1.0, 2.5, 0.0), Vec3::new(0.5, 2.5, 20.0));

        let controller = LocomotionController::with_default_config();
        let mut dolly = Dolly::new(Vec3::ZERO);

        let outcome = controller.update(&mut dolly, Quat::IDENTITY, Some(&surface), 0.0);

        assert!((outcome.lateral_shift + 0.8).abs() < 1e-3);
        assert!((dolly.position - Vec3::new(-0.8, 0.0, 0.0)).length() < 1e-3);
    }

    #[test]
    fn test_wedge_corrections_sum() {
        let mut surface = floor_only();
        // Left face at x=-0.5, right face at x=1.0
        surface.add_box(Vec3::new(-1.0, 2.5, 0.0), Vec3::new(0.5, 2.5, 20.0));
        surface.add_box(Vec3::new(1.5, 2.5, 0.0), Vec3::new(0.5, 2.5, 20.0));

        let controller = LocomotionController::with_default_config();
        let mut dolly = Dolly::new(Vec3::ZERO);

        let outcome = controller.update(&mut dolly, Quat::IDENTITY, Some(&surface), 0.0);

        // Left push-out +0.8 and right push-out -0.3, measured from the
        // same origin, sum to +0.5
        assert!((outcome.lateral_shift - 0.5).abs() < 1e-3);
        assert!((dolly.position.x - 0.5).abs() < 1e-3);
    }

    #[test]
    fn test_floor_snap_is_idempotent() {
        let surface = floor_only();
        let controller = LocomotionController::with_default_config();
        let mut dolly = Dolly::new(Vec3::new(3.0, 0.77, -2.0));

        let outcome = controller.update(&mut dolly, Quat::IDENTITY, Some(&surface), 0.0);
        assert!(outcome.floor_snapped);
        assert!((dolly.position - Vec3::new(3.0, 0.0, -2.0)).length() < 1e-4);

        let settled = dolly.position;
        controller.update(&mut dolly, Quat::IDENTITY, Some(&surface), 0.0);
        assert!((dolly.position - settled).length() < 1e-6);
    }

    #[test]
    fn test_no_floor_keeps_height() {
        let mut surface = CollisionSurface::new();
        // A distant wall and nothing underfoot
        surface.add_box(Vec3::new(0.0, 2.5, -0.5), Vec3::new(20.0, 2.5, 0.5));

        let controller = LocomotionController::with_default_config();
        let mut dolly = Dolly::new(Vec3::new(0.0, 1.2, 10.0));

        let outcome = controller.update(&mut dolly, Quat::IDENTITY, Some(&surface), 0.1);

        assert!(!outcome.floor_snapped);
        assert!(!outcome.dead_reckoning);
        assert!((dolly.position.y - 1.2).abs() < 1e-5);
        assert!((dolly.position.z - 9.8).abs() < 1e-4);
    }

    #[test]
    fn test_dead_reckoning_without_surface() {
        let controller = LocomotionController::with_default_config();
        let mut dolly = Dolly::new(Vec3::new(0.0, 0.0, 10.0));

        let outcome = controller.update(&mut dolly, Quat::IDENTITY, None, 0.25);

        assert!(outcome.dead_reckoning);
        assert!(!outcome.blocked);
        assert!(!outcome.floor_snapped);
        assert!((outcome.advanced - 0.5).abs() < 1e-5);
        assert!((dolly.position - Vec3::new(0.0, 0.0, 9.5)).length() < 1e-4);
    }

    #[test]
    fn test_dead_reckoning_follows_pitched_head() {
        let controller = LocomotionController::with_default_config();
        let start = Vec3::new(0.0, 0.0, 10.0);
        let mut dolly = Dolly::new(start);

        // Pitch carries into free flight; nothing levels the direction
        let head = Quat::from_rotation_x(0.5);
        let outcome = controller.update(&mut dolly, head, None, 0.1);

        let expected = start + (head * Vec3::NEG_Z) * 0.2;
        assert!(outcome.dead_reckoning);
        assert!((outcome.advanced - 0.2).abs() < 1e-6);
        assert!((dolly.position - expected).length() < 1e-6);
    }

    #[test]
    fn test_head_yaw_steers_travel() {
        let surface = floor_only();
        let controller = LocomotionController::with_default_config();
        let mut dolly = Dolly::new(Vec3::new(0.0, 0.0, 10.0));

        let head = Quat::from_rotation_y(std::f32::consts::FRAC_PI_2);
        controller.update(&mut dolly, head, Some(&surface), 0.1);

        assert!((dolly.position - Vec3::new(-0.2, 0.0, 10.0)).length() < 1e-4);
    }

    #[test]
    fn test_heading_never_modified() {
        let surface = floor_and_front_wall(9.0);
        let controller = LocomotionController::with_default_config();
        let heading = Quat::from_rotation_y(0.3);
        let mut dolly = Dolly {
            position: Vec3::new(0.0, 0.0, 10.0),
            orientation: heading,
        };

        controller.update(&mut dolly, Quat::IDENTITY, Some(&surface), 0.1);
        controller.update(&mut dolly, Quat::from_rotation_y(1.0), Some(&surface), 0.1);
        controller.update(&mut dolly, Quat::from_rotation_y(-0.4), None, 0.1);

        assert_eq!(dolly.orientation, heading);
    }

    #[test]
    fn test_ramp_follows_slope() {
        let mut surface = CollisionSurface::new();

        // Ramp rising from y=0 at z=5 to y=2 at z=-5
        let vertices = [
            Vec3::new(-5.0, 0.0, 5.0),
            Vec3::new(5.0, 0.0, 5.0),
            Vec3::new(5.0, 2.0, -5.0),
            Vec3::new(-5.0, 2.0, -5.0),
        ];
        surface
            .add_trimesh("Ramp_PROXY", &vertices, &[[0, 1, 2], [0, 2, 3]])
            .unwrap();

        let controller = LocomotionController::with_default_config();
        let mut dolly = Dolly::new(Vec3::new(0.0, 0.0, 5.0));

        let outcome = controller.update(&mut dolly, Quat::IDENTITY, Some(&surface), 0.5);

        assert!(outcome.floor_snapped);
        assert!((dolly.position - Vec3::new(0.0, 0.2, 4.0)).length() < 1e-3);
    }

    #[test]
    fn test_large_dt_applied_uncapped() {
        // A stalled host clock gets exactly the displacement it asked for
        let surface = floor_only();
        let controller = LocomotionController::with_default_config();
        let mut dolly = Dolly::new(Vec3::new(0.0, 0.0, 10.0));

        let outcome = controller.update(&mut dolly, Quat::IDENTITY, Some(&surface), 2.0);

        assert!((outcome.advanced - 4.0).abs() < 1e-5);
        assert!((dolly.position.z - 6.0).abs() < 1e-4);
    }

    #[test]
    fn test_zero_dt_still_corrects() {
        // Push-out and floor snap run even on a zero-length frame
        let surface = floor_only();
        let controller = LocomotionController::with_default_config();
        let mut dolly = Dolly::new(Vec3::new(0.0, 0.9, 0.0));

        let outcome = controller.update(&mut dolly, Quat::IDENTITY, Some(&surface), 0.0);

        assert_eq!(outcome.advanced, 0.0);
        assert!(outcome.floor_snapped);
        assert!(dolly.position.y.abs() < 1e-5);
    }
}
