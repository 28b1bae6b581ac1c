//! # arbor_math
//!
//! Math surface for the arbor engine. Re-exports [`glam`] for linear
//! algebra and defines the [`Transform3D`] TRS value type used for local
//! and world transforms throughout the scene layer.

pub mod transform;

// Re-export glam types for convenience.
pub use glam::{EulerRot, Mat3, Mat4, Quat, Vec2, Vec3, Vec4};

pub use transform::Transform3D;
