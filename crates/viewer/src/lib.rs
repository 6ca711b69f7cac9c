//! Session shell for the maquette walkthrough viewer.
//!
//! Sits between the runtime's callbacks and the locomotion crate: select
//! events latch into the tracker, frame callbacks tick the clock and run
//! one travel step, and the scene's tagged meshes become the collision
//! surface. Rendering and the runtime itself stay outside this crate.

pub mod frame;
pub mod input;
pub mod scene;
pub mod session;

pub use frame::{FrameClock, FrameReport, FrameSnapshot};
pub use input::{Hand, SelectTracker};
pub use scene::{extract_walk_proxy, SceneMesh, PROXY_TAG};
pub use session::{Viewer, ViewerConfig};

// Re-exported so shells can drive a session without naming the
// locomotion crate directly.
pub use maquette_locomotion::{
    CollisionSurface, Dolly, LocomotionConfig, LocomotionController, Pose, StepOutcome,
    SurfaceError,
};
