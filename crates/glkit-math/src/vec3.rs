// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use core::fmt;

use crate::mat3::Mat3;
use crate::mat4::Mat4;
use crate::ops::impl_vector;
use crate::quat::Quat;
use crate::scalar::{clamp, EPSILON};
use crate::vec4::Vec4;

/// 3D vector used for positions, directions, scales and colors.
///
/// * Components may represent either points or directions depending on the
///   calling context.
/// * Use [`Mat4::transform_point`] for points (homogeneous `w = 1`) and
///   [`Mat4::transform_direction`] for directions (homogeneous `w = 0`).
/// * `#[repr(C)]` + `Pod`: a `&[Vec3]` casts to a flat `&[f64]` for vertex
///   buffers via `bytemuck::cast_slice`.
#[derive(Debug, Default, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vec3 {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
    /// Z component.
    pub z: f64,
}

impl_vector!(Vec3, 3, x, y, z);

impl Vec3 {
    /// `(0, 0, 0)`.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// `(1, 1, 1)`, the neutral scale.
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    /// Unit vector pointing along the positive X axis.
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit vector pointing along the positive Y axis.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit vector pointing along the positive Z axis.
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a vector from components.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Overwrites all components in place.
    pub fn set(&mut self, x: f64, y: f64, z: f64) {
        self.x = x;
        self.y = y;
        self.z = z;
    }

    /// Extends to a [`Vec4`] with the given `w` (1 for points, 0 for directions).
    pub const fn extend(self, w: f64) -> Vec4 {
        Vec4::new(self.x, self.y, self.z, w)
    }

    /// Cross product with another vector.
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Unit vector in the same direction; the zero vector stays zero.
    ///
    /// ```
    /// use glkit_math::{ApproxEq, Vec3};
    /// assert_eq!(Vec3::ZERO.normalize(), Vec3::ZERO);
    /// assert!(Vec3::new(0.0, 3.0, 4.0).normalize().approx_eq(&Vec3::new(0.0, 0.6, 0.8)));
    /// ```
    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len > 0.0 {
            self.div_scalar(len)
        } else {
            Self::ZERO
        }
    }

    /// Unsigned angle between two vectors in radians.
    ///
    /// The cosine is clamped to `[-1, 1]` before `acos`; a zero-length
    /// operand yields `π/2`.
    pub fn angle_to(&self, other: &Self) -> f64 {
        let cosine = self.normalize().dot(&other.normalize());
        clamp(cosine, -1.0, 1.0).acos()
    }

    /// Projection of `self` onto `onto`; zero when `onto` is zero.
    pub fn project_on(&self, onto: &Self) -> Self {
        let denom = onto.length_squared();
        if denom <= EPSILON * EPSILON {
            return Self::ZERO;
        }
        onto.scale(self.dot(onto) / denom)
    }

    /// Reflects `self` about a surface with unit `normal`.
    pub fn reflect(&self, normal: &Self) -> Self {
        self.sub(&normal.scale(2.0 * self.dot(normal)))
    }

    /// Spherical interpolation between two directions.
    ///
    /// Inputs should be unit length. Falls back to [`Vec3::lerp`] when the
    /// directions are (anti)parallel within `EPSILON`, where `sin(angle)`
    /// would vanish. For opposite directions no unique great circle exists and
    /// the result is the straight chord, which passes through the zero vector
    /// at `t = 0.5`.
    ///
    /// ```
    /// use glkit_math::Vec3;
    /// assert_eq!(Vec3::UNIT_X.slerp(&-Vec3::UNIT_X, 0.5), Vec3::ZERO);
    /// ```
    pub fn slerp(&self, other: &Self, t: f64) -> Self {
        let angle = clamp(self.dot(other), -1.0, 1.0).acos();
        let sin_total = angle.sin();
        if sin_total.abs() < EPSILON {
            return self.lerp(other, t);
        }
        let ratio_a = ((1.0 - t) * angle).sin() / sin_total;
        let ratio_b = (t * angle).sin() / sin_total;
        self.scale(ratio_a).add(&other.scale(ratio_b))
    }

    /// Cubic Hermite blend of `p0` (tangent `t0`) to `p1` (tangent `t1`).
    pub fn hermite(p0: &Self, t0: &Self, t1: &Self, p1: &Self, t: f64) -> Self {
        let tt = t * t;
        let f1 = tt * (2.0 * t - 3.0) + 1.0;
        let f2 = tt * (t - 2.0) + t;
        let f3 = tt * (t - 1.0);
        let f4 = tt * (3.0 - 2.0 * t);
        p0.scale(f1)
            .add(&t0.scale(f2))
            .add(&t1.scale(f3))
            .add(&p1.scale(f4))
    }

    /// Cubic Bézier blend with control points `p0..p3`.
    pub fn bezier(p0: &Self, p1: &Self, p2: &Self, p3: &Self, t: f64) -> Self {
        let inv = 1.0 - t;
        let inv_sq = inv * inv;
        let tt = t * t;
        let f1 = inv_sq * inv;
        let f2 = 3.0 * t * inv_sq;
        let f3 = 3.0 * tt * inv;
        let f4 = tt * t;
        p0.scale(f1)
            .add(&p1.scale(f2))
            .add(&p2.scale(f3))
            .add(&p3.scale(f4))
    }

    /// Multiplies by a 3×3 matrix (`m * self`).
    pub fn transform_mat3(&self, m: &Mat3) -> Self {
        let a = m.to_array();
        Self::new(
            a[0] * self.x + a[3] * self.y + a[6] * self.z,
            a[1] * self.x + a[4] * self.y + a[7] * self.z,
            a[2] * self.x + a[5] * self.y + a[8] * self.z,
        )
    }

    /// Transforms as a point with perspective divide.
    ///
    /// A resulting `w` of exactly zero is treated as `1` so directions at
    /// infinity do not turn into NaN.
    #[allow(clippy::float_cmp)]
    pub fn transform_mat4(&self, m: &Mat4) -> Self {
        let v = m.transform_vec4(&self.extend(1.0));
        let w = if v.w == 0.0 { 1.0 } else { v.w };
        Self::new(v.x / w, v.y / w, v.z / w)
    }

    /// Rotates by a quaternion (`q * v * q⁻¹` for unit `q`).
    pub fn transform_quat(&self, q: &Quat) -> Self {
        let qv = Self::new(q.x, q.y, q.z);
        let uv = qv.cross(self);
        let uuv = qv.cross(&uv);
        self.add(&uv.scale(2.0 * q.w)).add(&uuv.scale(2.0))
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
