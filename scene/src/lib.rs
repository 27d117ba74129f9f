//! Decorative 3D backdrop core for the DexoFlux landing page.
//!
//! Everything here is DOM-free: wireframe geometry, a perspective camera,
//! and a field of slowly tumbling shapes advanced one frame at a time.
//! The `site` crate owns the canvas, the frame scheduling, and the
//! event wiring; this crate owns the math.

pub mod camera;
pub mod geometry;
pub mod scene;

// Re-export commonly used types
pub use camera::Camera;
pub use geometry::WireMesh;
pub use scene::{DEFAULT_SHAPE_COUNT, Euler, Scene, Shape};
