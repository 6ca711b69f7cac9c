//! Collision queries against the scene's walk proxy.

pub mod ray;
pub mod surface;

pub use ray::{Ray, RayHit};
pub use surface::{CollisionSurface, SurfaceError};
