// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use core::fmt;

use crate::mat4::Mat4;
use crate::ops::impl_vector;
use crate::vec3::Vec3;

/// 4D vector, most often a homogeneous point or an RGBA color.
#[derive(Debug, Default, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vec4 {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
    /// Z component.
    pub z: f64,
    /// W component (homogeneous weight).
    pub w: f64,
}

impl_vector!(Vec4, 4, x, y, z, w);

impl Vec4 {
    /// `(0, 0, 0, 0)`.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Homogeneous origin `(0, 0, 0, 1)`.
    pub const ORIGIN: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Creates a vector from components.
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    /// Homogeneous point `(x, y, z, 1)`.
    pub const fn point(x: f64, y: f64, z: f64) -> Self {
        Self::new(x, y, z, 1.0)
    }

    /// Overwrites all components in place.
    pub fn set(&mut self, x: f64, y: f64, z: f64, w: f64) {
        self.x = x;
        self.y = y;
        self.z = z;
        self.w = w;
    }

    /// Drops `w`.
    pub const fn xyz(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Homogeneous normalization: divides every component by `w`.
    ///
    /// Unlike the 2D/3D `normalize`, this does not produce a unit-length
    /// vector. A `w` of exactly zero (a direction) returns `self` unchanged.
    ///
    /// ```
    /// use glkit_math::Vec4;
    /// assert_eq!(Vec4::new(2.0, 4.0, 6.0, 2.0).normalize(), Vec4::new(1.0, 2.0, 3.0, 1.0));
    /// assert_eq!(Vec4::new(2.0, 4.0, 6.0, 0.0).normalize(), Vec4::new(2.0, 4.0, 6.0, 0.0));
    /// ```
    #[allow(clippy::float_cmp)]
    pub fn normalize(&self) -> Self {
        if self.w == 0.0 {
            return *self;
        }
        self.div_scalar(self.w)
    }

    /// Multiplies by a 4×4 matrix (`m * self`).
    pub fn transform_mat4(&self, m: &Mat4) -> Self {
        m.transform_vec4(self)
    }
}

impl fmt::Display for Vec4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x, self.y, self.z, self.w)
    }
}
