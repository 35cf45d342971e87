// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use core::fmt;

use crate::approx::ApproxEq;
use crate::error::{check_index, window, window_mut};
use crate::mat3::Mat3;
use crate::mat4::Mat4;
use crate::scalar::{clamp, safe_inverse, EPSILON};
use crate::vec3::Vec3;
use crate::MathError;

/// Quaternion stored as `(x, y, z, w)` with `w` the scalar part.
///
/// * All angles are expressed in radians.
/// * Unit length is not maintained automatically; call
///   [`Quat::normalize`] where a rotation is required.
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Quat {
    /// Vector part, X.
    pub x: f64,
    /// Vector part, Y.
    pub y: f64,
    /// Vector part, Z.
    pub z: f64,
    /// Scalar part.
    pub w: f64,
}

impl Default for Quat {
    fn default() -> Self {
        Self::identity()
    }
}

impl Quat {
    /// Creates a quaternion from components.
    ///
    /// Use [`Quat::from_axis_angle`] for axis/angle construction.
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    /// Returns the identity quaternion.
    pub const fn identity() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    /// Overwrites all components in place.
    pub fn set(&mut self, x: f64, y: f64, z: f64, w: f64) {
        *self = Self::new(x, y, z, w);
    }

    /// Returns the quaternion as an array.
    pub const fn to_array(self) -> [f64; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Reads four components from `buf` starting at `offset`.
    pub fn from_slice(buf: &[f64], offset: usize) -> Result<Self, MathError> {
        let mut it = window(buf, offset, 4)?.iter().copied();
        let mut next = || it.next().unwrap_or_default();
        Ok(Self::new(next(), next(), next(), next()))
    }

    /// Writes the components into `out` starting at `offset`.
    pub fn write_to_slice(&self, out: &mut [f64], offset: usize) -> Result<(), MathError> {
        window_mut(out, offset, 4)?.copy_from_slice(&self.to_array());
        Ok(())
    }

    /// Component at `index` (`0..4` = x, y, z, w).
    pub fn get(&self, index: usize) -> Result<f64, MathError> {
        check_index(index, 4)?;
        Ok(self.to_array()[index])
    }

    /// Overwrites the component at `index`.
    pub fn set_index(&mut self, index: usize, value: f64) -> Result<(), MathError> {
        check_index(index, 4)?;
        let mut arr = self.to_array();
        arr[index] = value;
        *self = Self::from(arr);
        Ok(())
    }

    /// Constructs a quaternion from a rotation axis and angle in radians.
    ///
    /// Returns the identity quaternion when the axis length is ≤ `EPSILON`.
    pub fn from_axis_angle(axis: Vec3, angle: f64) -> Self {
        let len = axis.length();
        if len <= EPSILON {
            return Self::identity();
        }
        let norm_axis = axis.div_scalar(len);
        let (sin_half, cos_half) = (angle * 0.5).sin_cos();
        let v = norm_axis.scale(sin_half);
        Self::new(v.x, v.y, v.z, cos_half)
    }

    /// Rotation axis and angle of a unit quaternion.
    ///
    /// When `sin(angle / 2)` is below `EPSILON` (no rotation) the axis is
    /// reported as +X.
    pub fn axis_angle(&self) -> (Vec3, f64) {
        let angle = clamp(self.w, -1.0, 1.0).acos() * 2.0;
        let s = (angle / 2.0).sin();
        if s > EPSILON {
            (Vec3::new(self.x / s, self.y / s, self.z / s), angle)
        } else {
            (Vec3::UNIT_X, angle)
        }
    }

    /// Rotation from Euler angles in radians, applied X then Y then Z in the
    /// rotating frame (`R = R_x * R_y * R_z`).
    pub fn from_euler(x: f64, y: f64, z: f64) -> Self {
        let (s1, c1) = (x / 2.0).sin_cos();
        let (s2, c2) = (y / 2.0).sin_cos();
        let (s3, c3) = (z / 2.0).sin_cos();
        Self::new(
            s1 * c2 * c3 + c1 * s2 * s3,
            c1 * s2 * c3 - s1 * c2 * s3,
            c1 * c2 * s3 + s1 * s2 * c3,
            c1 * c2 * c3 - s1 * s2 * s3,
        )
    }

    /// Rotation from a pure rotation matrix.
    ///
    /// Trace-based extraction: when the trace is positive the `w` term is
    /// recovered first; otherwise the branch for the largest diagonal entry
    /// is taken so the square root stays well away from zero.
    pub fn from_mat3(m: &Mat3) -> Self {
        let a = m.to_array();
        let (m11, m12, m13) = (a[0], a[3], a[6]);
        let (m21, m22, m23) = (a[1], a[4], a[7]);
        let (m31, m32, m33) = (a[2], a[5], a[8]);
        let trace = m11 + m22 + m33;

        if trace > 0.0 {
            let s = 0.5 / (trace + 1.0).sqrt();
            Self::new((m32 - m23) * s, (m13 - m31) * s, (m21 - m12) * s, 0.25 / s)
        } else if m11 > m22 && m11 > m33 {
            let s = 2.0 * (1.0 + m11 - m22 - m33).sqrt();
            Self::new(0.25 * s, (m12 + m21) / s, (m13 + m31) / s, (m32 - m23) / s)
        } else if m22 > m33 {
            let s = 2.0 * (1.0 + m22 - m11 - m33).sqrt();
            Self::new((m12 + m21) / s, 0.25 * s, (m23 + m32) / s, (m13 - m31) / s)
        } else {
            let s = 2.0 * (1.0 + m33 - m11 - m22).sqrt();
            Self::new((m13 + m31) / s, (m23 + m32) / s, 0.25 * s, (m21 - m12) / s)
        }
    }

    /// Shortest-arc rotation taking unit vector `from` onto unit vector `to`.
    ///
    /// Opposite vectors rotate by π about an axis perpendicular to `from`.
    pub fn rotation_to(from: &Vec3, to: &Vec3) -> Self {
        let dot = from.dot(to);
        if dot < -1.0 + EPSILON {
            let mut axis = Vec3::UNIT_X.cross(from);
            if axis.length() < EPSILON {
                axis = Vec3::UNIT_Y.cross(from);
            }
            return Self::from_axis_angle(axis, core::f64::consts::PI);
        }
        if dot > 1.0 - EPSILON {
            return Self::identity();
        }
        let c = from.cross(to);
        Self::new(c.x, c.y, c.z, 1.0 + dot).normalize()
    }

    /// Hamilton product of two quaternions (`self * other`).
    ///
    /// Operand order matters: the result applies the rotation of `other`
    /// first and then the rotation of `self`. Quaternion multiplication is
    /// non‑commutative.
    ///
    /// # Examples
    /// ```
    /// use core::f64::consts::FRAC_PI_2;
    /// use glkit_math::{Quat, Vec3};
    /// let yaw = Quat::from_axis_angle(Vec3::UNIT_Y, FRAC_PI_2);
    /// let pitch = Quat::from_axis_angle(Vec3::UNIT_X, FRAC_PI_2);
    /// let composed = yaw.multiply(&pitch); // pitch, then yaw
    /// assert_ne!(composed.to_array(), pitch.multiply(&yaw).to_array());
    /// ```
    pub fn multiply(&self, other: &Self) -> Self {
        let (ax, ay, az, aw) = (self.x, self.y, self.z, self.w);
        let (bx, by, bz, bw) = (other.x, other.y, other.z, other.w);
        Self::new(
            aw * bx + ax * bw + ay * bz - az * by,
            aw * by - ax * bz + ay * bw + az * bx,
            aw * bz + ax * by - ay * bx + az * bw,
            aw * bw - ax * bx - ay * by - az * bz,
        )
    }

    /// Reverse-order product (`other * self`).
    pub fn premultiply(&self, other: &Self) -> Self {
        other.multiply(self)
    }

    /// Rotates about the local X axis by `angle` radians (`self * R_x`).
    pub fn rotate_x(&self, angle: f64) -> Self {
        self.multiply(&Self::from_axis_angle(Vec3::UNIT_X, angle))
    }

    /// Rotates about the local Y axis by `angle` radians (`self * R_y`).
    pub fn rotate_y(&self, angle: f64) -> Self {
        self.multiply(&Self::from_axis_angle(Vec3::UNIT_Y, angle))
    }

    /// Rotates about the local Z axis by `angle` radians (`self * R_z`).
    pub fn rotate_z(&self, angle: f64) -> Self {
        self.multiply(&Self::from_axis_angle(Vec3::UNIT_Z, angle))
    }

    /// Component-wise sum.
    pub fn add(&self, other: &Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z, self.w + other.w)
    }

    /// Multiplies every component by `s`.
    pub fn scale(&self, s: f64) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s, self.w * s)
    }

    /// Four-dimensional dot product.
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Squared norm.
    pub fn length_squared(&self) -> f64 {
        self.dot(self)
    }

    /// Norm, overflow-safe for large finite components.
    pub fn length(&self) -> f64 {
        self.x.hypot(self.y).hypot(self.z).hypot(self.w)
    }

    /// Normalises the quaternion; returns identity when the norm is ≤ `EPSILON`.
    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len <= EPSILON {
            return Self::identity();
        }
        self.scale(1.0 / len)
    }

    /// Conjugate `(-x, -y, -z, w)`; the inverse for unit quaternions.
    pub fn conjugate(&self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// Multiplicative inverse `conj(q) / |q|²`; the zero quaternion maps to zero.
    pub fn invert(&self) -> Self {
        self.conjugate().scale(safe_inverse(self.length_squared()))
    }

    /// Angle in radians of the rotation taking `self` to `other` (unit inputs).
    pub fn angle_to(&self, other: &Self) -> f64 {
        2.0 * clamp(self.dot(other).abs(), -1.0, 1.0).acos()
    }

    /// Component-wise linear blend; not renormalized.
    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        self.add(&other.sub_raw(self).scale(t))
    }

    fn sub_raw(&self, other: &Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z, self.w - other.w)
    }

    /// Spherical interpolation from `self` toward `other`; see [`Quat::slerp_of`].
    pub fn slerp(&self, other: &Self, t: f64) -> Self {
        Self::slerp_of(self, other, t)
    }

    /// Spherical interpolation between `a` and `b`.
    ///
    /// - Takes the shortest path: when `a · b < 0`, `b` is negated.
    /// - When `1 - |a · b| <= EPSILON` the quaternions are nearly identical
    ///   and `sin(Ω)` would vanish, so a plain linear blend is used.
    pub fn slerp_of(a: &Self, b: &Self, t: f64) -> Self {
        let mut cos_omega = a.dot(b);
        let b = if cos_omega < 0.0 {
            cos_omega = -cos_omega;
            b.scale(-1.0)
        } else {
            *b
        };

        let (scale_a, scale_b) = if 1.0 - cos_omega > EPSILON {
            let omega = cos_omega.acos();
            let sin_omega = omega.sin();
            (
                ((1.0 - t) * omega).sin() / sin_omega,
                (t * omega).sin() / sin_omega,
            )
        } else {
            (1.0 - t, t)
        };

        a.scale(scale_a).add(&b.scale(scale_b))
    }

    /// Spherical quadrangle interpolation through `a`, `b`, `c`, `d`.
    ///
    /// Blends `slerp(a, d, t)` and `slerp(b, c, t)` by `2t(1 - t)`.
    pub fn sqlerp_of(a: &Self, b: &Self, c: &Self, d: &Self, t: f64) -> Self {
        let outer = Self::slerp_of(a, d, t);
        let inner = Self::slerp_of(b, c, t);
        Self::slerp_of(&outer, &inner, 2.0 * t * (1.0 - t))
    }

    /// Rotates a vector by this quaternion.
    pub fn rotate_vec3(&self, v: &Vec3) -> Vec3 {
        v.transform_quat(self)
    }

    /// Converts to a 3×3 rotation matrix.
    pub fn to_mat3(&self) -> Mat3 {
        Mat3::from_quat(self)
    }

    /// Converts to a 4×4 rotation matrix.
    pub fn to_mat4(&self) -> Mat4 {
        Mat4::from_quat(self)
    }
}

impl ApproxEq for Quat {
    fn approx_eq_eps(&self, other: &Self, eps: f64) -> bool {
        self.to_array().approx_eq_eps(&other.to_array(), eps)
    }
}

impl From<[f64; 4]> for Quat {
    fn from(value: [f64; 4]) -> Self {
        let [x, y, z, w] = value;
        Self::new(x, y, z, w)
    }
}

impl From<Quat> for [f64; 4] {
    fn from(value: Quat) -> Self {
        value.to_array()
    }
}

impl core::ops::Mul for Quat {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl core::ops::Mul<Vec3> for Quat {
    type Output = Vec3;
    fn mul(self, rhs: Vec3) -> Vec3 {
        rhs.transform_quat(&self)
    }
}

impl core::ops::Neg for Quat {
    type Output = Self;
    fn neg(self) -> Self {
        self.scale(-1.0)
    }
}

impl fmt::Display for Quat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x, self.y, self.z, self.w)
    }
}
