//! TRS transform value type.
//!
//! [`Transform3D`] bundles a translation, an orientation, and a scale —
//! the three channels the scene layer stores and propagates separately.
//! The matrix form composes them in translation · rotation · scale order.

use glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// A 3D transform as separate translation, orientation, and scale channels.
///
/// Kept channel-wise rather than as a matrix so setting and getting a
/// transform round-trips bitwise, with no renormalisation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform3D {
    /// Translation channel.
    pub translation: Vec3,
    /// Orientation as a unit quaternion.
    pub orientation: Quat,
    /// Per-axis scale factor.
    pub scale: Vec3,
}

impl Transform3D {
    /// The identity transform: origin, no rotation, unit scale.
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        orientation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    /// Create a transform with the given translation and default
    /// orientation/scale.
    #[must_use]
    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Self::IDENTITY
        }
    }

    /// Create a transform from all three channels.
    #[must_use]
    pub fn new(translation: Vec3, orientation: Quat, scale: Vec3) -> Self {
        Self {
            translation,
            orientation,
            scale,
        }
    }

    /// Compute the 4×4 matrix for this transform (T · R · S).
    #[must_use]
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.orientation, self.translation)
    }
}

impl Default for Transform3D {
    fn default() -> Self {
        Self::IDENTITY
    }
}
