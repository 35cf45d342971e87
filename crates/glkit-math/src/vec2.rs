// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use core::fmt;

use crate::mat3::Mat3;
use crate::ops::impl_vector;
use crate::scalar::{clamp, EPSILON};

/// 2D vector used for screen-space positions, texture coordinates and
/// [`crate::Rect`] corners.
#[derive(Debug, Default, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vec2 {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
}

impl_vector!(Vec2, 2, x, y);

impl Vec2 {
    /// `(0, 0)`.
    pub const ZERO: Self = Self::new(0.0, 0.0);
    /// `(1, 1)`.
    pub const ONE: Self = Self::new(1.0, 1.0);
    /// Unit vector along +X.
    pub const UNIT_X: Self = Self::new(1.0, 0.0);
    /// Unit vector along +Y.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0);

    /// Creates a vector from components.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Overwrites both components in place.
    pub fn set(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    /// Z component of the 3D cross product `(x, y, 0) × (ox, oy, 0)`.
    pub fn cross(&self, other: &Self) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Unit vector in the same direction; the zero vector stays zero.
    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len > 0.0 {
            self.div_scalar(len)
        } else {
            Self::ZERO
        }
    }

    /// Counter-clockwise perpendicular `(-y, x)`.
    pub fn perp(&self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Polar angle of the vector in radians, in `(-π, π]`.
    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Unsigned angle between two vectors in radians.
    ///
    /// Returns `π/2` when either vector has zero length.
    pub fn angle_to(&self, other: &Self) -> f64 {
        let cosine = self.normalize().dot(&other.normalize());
        clamp(cosine, -1.0, 1.0).acos()
    }

    /// Rotates counter-clockwise by `angle` radians about the origin.
    pub fn rotate(&self, angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(self.x * c - self.y * s, self.x * s + self.y * c)
    }

    /// Rotates counter-clockwise by `angle` radians about `origin`.
    pub fn rotate_around(&self, origin: &Self, angle: f64) -> Self {
        self.sub(origin).rotate(angle).add(origin)
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

    /// Transforms the vector as a 2D point (homogeneous `w = 1`).
    pub fn transform_mat3(&self, m: &Mat3) -> Self {
        let a = m.to_array();
        Self::new(
            a[0] * self.x + a[3] * self.y + a[6],
            a[1] * self.x + a[4] * self.y + a[7],
        )
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ApproxEq;
    use core::f64::consts::FRAC_PI_2;

    #[test]
    fn rotate_quarter_turn() {
        let v = Vec2::UNIT_X.rotate(FRAC_PI_2);
        assert!(v.approx_eq(&Vec2::UNIT_Y), "got {v}");
    }

    #[test]
    fn invert_guards_zero() {
        assert_eq!(Vec2::new(0.0, 4.0).invert(), Vec2::new(0.0, 0.25));
    }
}
