// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::approx::ApproxEq;
use crate::mat4::Mat4;
use crate::quat::Quat;
use crate::vec3::Vec3;

/// Translation, rotation and non-uniform scale of an object.
///
/// Conventions:
/// - `position` is the translation column of the composed matrix.
/// - `rotation` should be a unit quaternion; it is not normalized here.
/// - `scale` is applied before rotation and translation (`M = T * R * S`).
///   Negative scale is supported; after a round trip through [`Mat4`] a
///   mirror shows up as a negative X scale.
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Transform {
    /// Translation.
    pub position: Vec3,
    /// Orientation.
    pub rotation: Quat,
    /// Per-axis scale.
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    /// Identity transform (no translation, no rotation, unit scale).
    pub const fn identity() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::identity(),
            scale: Vec3::ONE,
        }
    }

    /// Creates a transform from components.
    pub const fn new(position: Vec3, rotation: Quat, scale: Vec3) -> Self {
        Self {
            position,
            rotation,
            scale,
        }
    }

    /// Returns the column-major matrix `T * R * S` ([`Mat4::compose`]).
    pub fn to_mat4(&self) -> Mat4 {
        Mat4::compose(&self.position, &self.rotation, &self.scale)
    }

    /// Recovers a transform from an affine matrix ([`Mat4::decompose`]).
    pub fn from_mat4(m: &Mat4) -> Self {
        m.decompose()
    }

    /// Applies the transform to a point.
    pub fn transform_point(&self, p: &Vec3) -> Vec3 {
        p.mul(&self.scale)
            .transform_quat(&self.rotation)
            .add(&self.position)
    }
}

impl ApproxEq for Transform {
    /// Rotations compare equal up to sign, since `q` and `-q` encode the
    /// same orientation.
    fn approx_eq_eps(&self, other: &Self, eps: f64) -> bool {
        self.position.approx_eq_eps(&other.position, eps)
            && self.scale.approx_eq_eps(&other.scale, eps)
            && (self.rotation.approx_eq_eps(&other.rotation, eps)
                || (-self.rotation).approx_eq_eps(&other.rotation, eps))
    }
}

impl From<Mat4> for Transform {
    fn from(value: Mat4) -> Self {
        value.decompose()
    }
}

impl From<Transform> for Mat4 {
    fn from(value: Transform) -> Self {
        value.to_mat4()
    }
}
