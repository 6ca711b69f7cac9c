//! Dolly movement: configuration, rig state and the per-frame controller.

pub mod config;
pub mod controller;
pub mod dolly;

pub use config::LocomotionConfig;
pub use controller::{LocomotionController, StepOutcome};
pub use dolly::Dolly;
