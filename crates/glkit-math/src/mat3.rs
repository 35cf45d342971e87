// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use core::fmt;

use tracing::trace;

use crate::approx::ApproxEq;
use crate::error::{check_index, window, window_mut};
use crate::mat4::Mat4;
use crate::quat::Quat;
use crate::vec3::Vec3;
use crate::MathError;

/// Column-major 3×3 matrix.
///
/// Serves two roles: the rotation/scale block of a [`Mat4`] (normal
/// matrices, quaternion extraction) and a 2D affine transform in
/// homogeneous coordinates (translation lives in the last column).
///
/// `to_array` yields the nine values column by column, the layout
/// `uniformMatrix3fv` expects.
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[repr(C)]
pub struct Mat3 {
    data: [f64; 9],
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mat3 {
    /// Returns the identity matrix.
    pub const fn identity() -> Self {
        Self {
            data: [
                1.0, 0.0, 0.0, // col 0
                0.0, 1.0, 0.0, // col 1
                0.0, 0.0, 1.0, // col 2
            ],
        }
    }

    /// Creates a matrix from column-major array data.
    pub const fn new(data: [f64; 9]) -> Self {
        Self { data }
    }

    /// Builds a matrix from three column vectors.
    pub const fn from_cols(c0: Vec3, c1: Vec3, c2: Vec3) -> Self {
        Self::new([c0.x, c0.y, c0.z, c1.x, c1.y, c1.z, c2.x, c2.y, c2.z])
    }

    /// Reads nine column-major values from `buf` starting at `offset`.
    pub fn from_slice(buf: &[f64], offset: usize) -> Result<Self, MathError> {
        let mut data = [0.0; 9];
        data.copy_from_slice(window(buf, offset, 9)?);
        Ok(Self { data })
    }

    /// Writes the nine column-major values into `out` at `offset`.
    pub fn write_to_slice(&self, out: &mut [f64], offset: usize) -> Result<(), MathError> {
        window_mut(out, offset, 9)?.copy_from_slice(&self.data);
        Ok(())
    }

    /// Returns the matrix as a column-major array.
    pub const fn to_array(self) -> [f64; 9] {
        self.data
    }

    /// Column-major values narrowed to `f32` for uniform upload.
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_f32_array(self) -> [f32; 9] {
        self.data.map(|v| v as f32)
    }

    /// Element at flat column-major `index`.
    pub fn get(&self, index: usize) -> Result<f64, MathError> {
        check_index(index, 9)?;
        Ok(self.data[index])
    }

    /// Overwrites the element at flat column-major `index`.
    pub fn set_index(&mut self, index: usize, value: f64) -> Result<(), MathError> {
        check_index(index, 9)?;
        self.data[index] = value;
        Ok(())
    }

    /// Overwrites all nine values in place.
    pub fn set(&mut self, data: [f64; 9]) {
        self.data = data;
    }

    /// Element at `row`, `col`; both must be `< 3`.
    pub fn at(&self, row: usize, col: usize) -> Result<f64, MathError> {
        check_index(row, 3)?;
        check_index(col, 3)?;
        Ok(self.data[col * 3 + row])
    }

    /// Column `index` as a vector.
    pub fn col(&self, index: usize) -> Result<Vec3, MathError> {
        check_index(index, 3)?;
        let o = index * 3;
        Ok(Vec3::new(self.data[o], self.data[o + 1], self.data[o + 2]))
    }

    fn el(&self, row: usize, col: usize) -> f64 {
        self.data[col * 3 + row]
    }

    /// 2D translation (homogeneous).
    pub const fn translation(tx: f64, ty: f64) -> Self {
        Self::new([1.0, 0.0, 0.0, 0.0, 1.0, 0.0, tx, ty, 1.0])
    }

    /// 2D counter-clockwise rotation by `angle` radians.
    pub fn rotation(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([c, s, 0.0, -s, c, 0.0, 0.0, 0.0, 1.0])
    }

    /// 2D non-uniform scale.
    pub const fn scale(sx: f64, sy: f64) -> Self {
        Self::new([sx, 0.0, 0.0, 0.0, sy, 0.0, 0.0, 0.0, 1.0])
    }

    /// Maps pixel coordinates (origin top-left, y down) of a `width` ×
    /// `height` canvas to clip space.
    pub fn projection(width: f64, height: f64) -> Self {
        Self::new([
            2.0 / width, 0.0, 0.0,
            0.0, -2.0 / height, 0.0,
            -1.0, 1.0, 1.0,
        ])
    }

    /// Rotation matrix for a (unit) quaternion.
    pub fn from_quat(q: &Quat) -> Self {
        let (x, y, z, w) = (q.x, q.y, q.z, q.w);
        let x2 = x + x;
        let y2 = y + y;
        let z2 = z + z;

        let xx = x * x2;
        let yx = y * x2;
        let yy = y * y2;
        let zx = z * x2;
        let zy = z * y2;
        let zz = z * z2;
        let wx = w * x2;
        let wy = w * y2;
        let wz = w * z2;

        Self::new([
            1.0 - yy - zz, yx + wz, zx - wy,
            yx - wz, 1.0 - xx - zz, zy + wx,
            zx + wy, zy - wx, 1.0 - xx - yy,
        ])
    }

    /// Upper-left 3×3 block of a 4×4 matrix.
    pub fn from_mat4(m: &Mat4) -> Self {
        let a = m.to_array();
        Self::new([a[0], a[1], a[2], a[4], a[5], a[6], a[8], a[9], a[10]])
    }

    /// Inverse-transpose of the upper-left 3×3 block of `m`, for transforming
    /// normals. `None` when that block is singular.
    pub fn normal_from_mat4(m: &Mat4) -> Option<Self> {
        Self::from_mat4(m).invert().map(|inv| inv.transpose())
    }

    /// Multiplies the matrix with another matrix (`self * rhs`).
    ///
    /// `rhs` is applied first when transforming column vectors.
    pub fn multiply(&self, rhs: &Self) -> Self {
        let mut out = [0.0; 9];
        for col in 0..3 {
            for row in 0..3 {
                out[col * 3 + row] = self.el(row, 0) * rhs.el(0, col)
                    + self.el(row, 1) * rhs.el(1, col)
                    + self.el(row, 2) * rhs.el(2, col);
            }
        }
        Self::new(out)
    }

    /// Reverse-order product (`lhs * self`).
    pub fn premultiply(&self, lhs: &Self) -> Self {
        lhs.multiply(self)
    }

    /// Element-wise sum.
    pub fn add(&self, other: &Self) -> Self {
        Self::new(core::array::from_fn(|i| self.data[i] + other.data[i]))
    }

    /// Element-wise difference.
    pub fn sub(&self, other: &Self) -> Self {
        Self::new(core::array::from_fn(|i| self.data[i] - other.data[i]))
    }

    /// Multiplies every element by `s`.
    pub fn scale_by(&self, s: f64) -> Self {
        Self::new(self.data.map(|v| v * s))
    }

    /// Transpose.
    pub fn transpose(&self) -> Self {
        let a = &self.data;
        Self::new([a[0], a[3], a[6], a[1], a[4], a[7], a[2], a[5], a[8]])
    }

    /// Determinant by cofactor expansion along the first column.
    pub fn determinant(&self) -> f64 {
        let [a00, a01, a02, a10, a11, a12, a20, a21, a22] = self.data;
        a00 * (a22 * a11 - a12 * a21)
            + a01 * (-a22 * a10 + a12 * a20)
            + a02 * (a21 * a10 - a11 * a20)
    }

    /// Classical adjoint (transpose of the cofactor matrix).
    pub fn adjoint(&self) -> Self {
        let [a00, a01, a02, a10, a11, a12, a20, a21, a22] = self.data;
        Self::new([
            a11 * a22 - a12 * a21,
            a02 * a21 - a01 * a22,
            a01 * a12 - a02 * a11,
            a12 * a20 - a10 * a22,
            a00 * a22 - a02 * a20,
            a02 * a10 - a00 * a12,
            a10 * a21 - a11 * a20,
            a01 * a20 - a00 * a21,
            a00 * a11 - a01 * a10,
        ])
    }

    /// Inverse via cofactors, or `None` when the determinant is exactly zero.
    ///
    /// ```
    /// use glkit_math::Mat3;
    /// assert!(Mat3::new([1.0, 2.0, 3.0, 2.0, 4.0, 6.0, 0.0, 0.0, 1.0]).invert().is_none());
    /// ```
    #[allow(clippy::float_cmp)]
    pub fn invert(&self) -> Option<Self> {
        let det = self.determinant();
        if det == 0.0 {
            trace!(det, "mat3 invert: singular matrix");
            return None;
        }
        Some(self.adjoint().scale_by(1.0 / det))
    }
}

impl ApproxEq for Mat3 {
    fn approx_eq_eps(&self, other: &Self, eps: f64) -> bool {
        self.data.approx_eq_eps(&other.data, eps)
    }
}

impl From<[f64; 9]> for Mat3 {
    fn from(value: [f64; 9]) -> Self {
        Self { data: value }
    }
}

impl From<Mat3> for [f64; 9] {
    fn from(value: Mat3) -> Self {
        value.data
    }
}

impl core::ops::Mul for Mat3 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl core::ops::Mul<Vec3> for Mat3 {
    type Output = Vec3;
    fn mul(self, rhs: Vec3) -> Vec3 {
        rhs.transform_mat3(&self)
    }
}

impl fmt::Display for Mat3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            writeln!(
                f,
                "[{}, {}, {}]",
                self.el(row, 0),
                self.el(row, 1),
                self.el(row, 2)
            )?;
        }
        Ok(())
    }
}
