//! Locomotion and collision for the maquette walkthrough viewer.
//!
//! This crate owns the travel model: a dolly rig steered by headset gaze
//! and corrected against the scene's walk proxy by a fixed sequence of
//! ray queries each frame. It has no rendering or session concerns; the
//! viewer crate drives it from frame callbacks.

pub mod collision;
pub mod movement;
pub mod pose;

pub use collision::{CollisionSurface, Ray, RayHit, SurfaceError};
pub use movement::{Dolly, LocomotionConfig, LocomotionController, StepOutcome};
pub use pose::Pose;
