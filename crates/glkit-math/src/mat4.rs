// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use core::fmt;

use tracing::trace;

use crate::approx::ApproxEq;
use crate::error::{check_index, window, window_mut};
use crate::mat3::Mat3;
use crate::quat::Quat;
use crate::scalar::EPSILON;
use crate::transform::Transform;
use crate::vec3::Vec3;
use crate::vec4::Vec4;
use crate::MathError;

/// Column‑major 4×4 matrix.
///
/// - Stored in column‑major order to align with GPU uploads:
///   `to_array()` is exactly what `uniformMatrix4fv` expects.
/// - Represents affine or projective transforms. Helper methods treat points
///   homogeneously (`w = 1`) and directions with `w = 0`.
///
/// # Examples
/// ```
/// use glkit_math::{Mat4, Vec3};
/// let t = Mat4::translation(5.0, -3.0, 2.0);
/// let p = Vec3::new(2.0, 4.0, -1.0);
/// assert_eq!(t.transform_point(&p).to_array(), [7.0, 1.0, 1.0]);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[repr(C)]
pub struct Mat4 {
    data: [f64; 16],
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mat4 {
    /// Returns the identity matrix.
    ///
    /// Column-major layout with ones on the diagonal.
    pub const fn identity() -> Self {
        Self {
            data: [
                1.0, 0.0, 0.0, 0.0, // col 0
                0.0, 1.0, 0.0, 0.0, // col 1
                0.0, 0.0, 1.0, 0.0, // col 2
                0.0, 0.0, 0.0, 1.0, // col 3
            ],
        }
    }

    /// Creates a matrix from column-major array data.
    pub const fn new(data: [f64; 16]) -> Self {
        Self { data }
    }

    /// Builds a matrix from four column vectors.
    pub const fn from_cols(c0: Vec4, c1: Vec4, c2: Vec4, c3: Vec4) -> Self {
        Self::new([
            c0.x, c0.y, c0.z, c0.w, //
            c1.x, c1.y, c1.z, c1.w, //
            c2.x, c2.y, c2.z, c2.w, //
            c3.x, c3.y, c3.z, c3.w,
        ])
    }

    /// Reads sixteen column-major values from `buf` starting at `offset`.
    pub fn from_slice(buf: &[f64], offset: usize) -> Result<Self, MathError> {
        let mut data = [0.0; 16];
        data.copy_from_slice(window(buf, offset, 16)?);
        Ok(Self { data })
    }

    /// Writes the sixteen column-major values into `out` at `offset`.
    pub fn write_to_slice(&self, out: &mut [f64], offset: usize) -> Result<(), MathError> {
        window_mut(out, offset, 16)?.copy_from_slice(&self.data);
        Ok(())
    }

    /// Returns the matrix as a column‑major array.
    pub const fn to_array(self) -> [f64; 16] {
        self.data
    }

    /// Column-major values narrowed to `f32` for uniform upload.
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_f32_array(self) -> [f32; 16] {
        self.data.map(|v| v as f32)
    }

    /// Element at flat column-major `index`.
    pub fn get(&self, index: usize) -> Result<f64, MathError> {
        check_index(index, 16)?;
        Ok(self.data[index])
    }

    /// Overwrites the element at flat column-major `index`.
    pub fn set_index(&mut self, index: usize, value: f64) -> Result<(), MathError> {
        check_index(index, 16)?;
        self.data[index] = value;
        Ok(())
    }

    /// Overwrites all sixteen values in place.
    pub fn set(&mut self, data: [f64; 16]) {
        self.data = data;
    }

    /// Element at `row`, `col`; both must be `< 4`.
    pub fn at(&self, row: usize, col: usize) -> Result<f64, MathError> {
        check_index(row, 4)?;
        check_index(col, 4)?;
        Ok(self.data[col * 4 + row])
    }

    /// Column `index` as a vector.
    pub fn col(&self, index: usize) -> Result<Vec4, MathError> {
        check_index(index, 4)?;
        let o = index * 4;
        Ok(Vec4::new(
            self.data[o],
            self.data[o + 1],
            self.data[o + 2],
            self.data[o + 3],
        ))
    }

    fn el(&self, row: usize, col: usize) -> f64 {
        self.data[col * 4 + row]
    }

    /// Builds a translation matrix.
    ///
    /// Column-major layout: translation occupies the last column.
    pub const fn translation(tx: f64, ty: f64, tz: f64) -> Self {
        Self {
            data: [
                1.0, 0.0, 0.0, 0.0, // col 0
                0.0, 1.0, 0.0, 0.0, // col 1
                0.0, 0.0, 1.0, 0.0, // col 2
                tx, ty, tz, 1.0, // col 3 (translation)
            ],
        }
    }

    /// Builds a non-uniform scale matrix.
    pub const fn scale(sx: f64, sy: f64, sz: f64) -> Self {
        Self {
            data: [
                sx, 0.0, 0.0, 0.0, // col 0
                0.0, sy, 0.0, 0.0, // col 1
                0.0, 0.0, sz, 0.0, // col 2
                0.0, 0.0, 0.0, 1.0, // col 3
            ],
        }
    }

    /// Builds a rotation matrix around the X axis by `angle` radians.
    pub fn rotation_x(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([
            1.0, 0.0, 0.0, 0.0, //
            0.0, c, s, 0.0, //
            0.0, -s, c, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Builds a rotation matrix around the Y axis by `angle` radians.
    pub fn rotation_y(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([
            c, 0.0, -s, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            s, 0.0, c, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Builds a rotation matrix around the Z axis by `angle` radians.
    pub fn rotation_z(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([
            c, s, 0.0, 0.0, //
            -s, c, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Builds a rotation matrix from an axis and angle in radians.
    ///
    /// The axis is normalized internally; a zero-length axis yields the
    /// identity rotation.
    pub fn rotation_axis_angle(axis: Vec3, angle: f64) -> Self {
        Self::from_quat(&Quat::from_axis_angle(axis, angle))
    }

    /// Builds a rotation matrix from Euler angles in radians.
    ///
    /// Ordering: `R = R_y(yaw) * R_x(pitch) * R_z(roll)`.
    ///
    /// # Examples
    /// ```
    /// use core::f64::consts::FRAC_PI_2;
    /// use glkit_math::{Mat4, Vec3};
    /// // Yaw=90°: +Z maps to +X
    /// let r = Mat4::rotation_from_euler(FRAC_PI_2, 0.0, 0.0);
    /// let v = r.transform_direction(&Vec3::UNIT_Z);
    /// assert!((v.x - 1.0).abs() < 1e-12);
    /// ```
    pub fn rotation_from_euler(yaw: f64, pitch: f64, roll: f64) -> Self {
        Self::rotation_y(yaw)
            .multiply(&Self::rotation_x(pitch))
            .multiply(&Self::rotation_z(roll))
    }

    /// Rotation matrix for a quaternion. The quaternion is used as given;
    /// normalize it first if it is not unit length.
    pub fn from_quat(q: &Quat) -> Self {
        Self::compose(&Vec3::ZERO, q, &Vec3::ONE)
    }

    /// Embeds a 3×3 matrix as the upper-left block of an identity.
    pub fn from_mat3(m: &Mat3) -> Self {
        let a = m.to_array();
        Self::new([
            a[0], a[1], a[2], 0.0, //
            a[3], a[4], a[5], 0.0, //
            a[6], a[7], a[8], 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// View matrix for a camera at `eye` looking at `center`.
    ///
    /// When `eye` and `center` coincide (within `EPSILON` per axis) the
    /// identity is returned. When the view direction is parallel to `up` the
    /// right vector is zero-length; right and recomputed up are then set to
    /// zero, producing a singular matrix.
    pub fn look_at(eye: &Vec3, center: &Vec3, up: &Vec3) -> Self {
        if (eye.x - center.x).abs() < EPSILON
            && (eye.y - center.y).abs() < EPSILON
            && (eye.z - center.z).abs() < EPSILON
        {
            trace!("mat4 look_at: eye == center, returning identity");
            return Self::identity();
        }

        let z = eye.sub(center);
        let z = z.div_scalar(z.length());

        let x = up.cross(&z);
        let x_len = x.length();
        let x = if x_len > 0.0 {
            x.div_scalar(x_len)
        } else {
            trace!("mat4 look_at: view direction parallel to up");
            Vec3::ZERO
        };

        let y = z.cross(&x);
        let y_len = y.length();
        let y = if y_len > 0.0 {
            y.div_scalar(y_len)
        } else {
            Vec3::ZERO
        };

        Self::new([
            x.x, y.x, z.x, 0.0, //
            x.y, y.y, z.y, 0.0, //
            x.z, y.z, z.z, 0.0, //
            -x.dot(eye),
            -y.dot(eye),
            -z.dot(eye),
            1.0,
        ])
    }

    /// Right-handed perspective projection onto OpenGL clip space
    /// (depth in `[-1, 1]`).
    ///
    /// `fovy` is the vertical field of view in radians. Passing
    /// `f64::INFINITY` for `far` yields an infinite far plane.
    pub fn perspective(fovy: f64, aspect: f64, near: f64, far: f64) -> Self {
        let f = 1.0 / (fovy / 2.0).tan();
        let (m22, m32) = if far.is_finite() {
            let nf = 1.0 / (near - far);
            ((far + near) * nf, 2.0 * far * near * nf)
        } else {
            (-1.0, -2.0 * near)
        };
        Self::new([
            f / aspect, 0.0, 0.0, 0.0, //
            0.0, f, 0.0, 0.0, //
            0.0, 0.0, m22, -1.0, //
            0.0, 0.0, m32, 0.0,
        ])
    }

    /// Off-center perspective projection from the near-plane rectangle.
    pub fn frustum(left: f64, right: f64, bottom: f64, top: f64, near: f64, far: f64) -> Self {
        let rl = 1.0 / (right - left);
        let tb = 1.0 / (top - bottom);
        let nf = 1.0 / (near - far);
        Self::new([
            near * 2.0 * rl, 0.0, 0.0, 0.0, //
            0.0, near * 2.0 * tb, 0.0, 0.0, //
            (right + left) * rl, (top + bottom) * tb, (far + near) * nf, -1.0, //
            0.0, 0.0, far * near * 2.0 * nf, 0.0,
        ])
    }

    /// Orthographic projection onto OpenGL clip space (depth in `[-1, 1]`).
    pub fn ortho(left: f64, right: f64, bottom: f64, top: f64, near: f64, far: f64) -> Self {
        let lr = 1.0 / (left - right);
        let bt = 1.0 / (bottom - top);
        let nf = 1.0 / (near - far);
        Self::new([
            -2.0 * lr, 0.0, 0.0, 0.0, //
            0.0, -2.0 * bt, 0.0, 0.0, //
            0.0, 0.0, 2.0 * nf, 0.0, //
            (left + right) * lr,
            (top + bottom) * bt,
            (far + near) * nf,
            1.0,
        ])
    }

    /// Builds `T * R * S`: scale first, then rotate by `rotation`, then
    /// translate by `position`.
    pub fn compose(position: &Vec3, rotation: &Quat, scale: &Vec3) -> Self {
        let (x, y, z, w) = (rotation.x, rotation.y, rotation.z, rotation.w);
        let x2 = x + x;
        let y2 = y + y;
        let z2 = z + z;

        let xx = x * x2;
        let xy = x * y2;
        let xz = x * z2;
        let yy = y * y2;
        let yz = y * z2;
        let zz = z * z2;
        let wx = w * x2;
        let wy = w * y2;
        let wz = w * z2;

        let (sx, sy, sz) = (scale.x, scale.y, scale.z);
        Self::new([
            (1.0 - (yy + zz)) * sx,
            (xy + wz) * sx,
            (xz - wy) * sx,
            0.0,
            (xy - wz) * sy,
            (1.0 - (xx + zz)) * sy,
            (yz + wx) * sy,
            0.0,
            (xz + wy) * sz,
            (yz - wx) * sz,
            (1.0 - (xx + yy)) * sz,
            0.0,
            position.x,
            position.y,
            position.z,
            1.0,
        ])
    }

    /// Splits an affine matrix into position, rotation and scale.
    ///
    /// - Position is the translation column.
    /// - Scale is the length of each basis column; the X scale takes the sign
    ///   of the determinant so mirrored transforms keep their handedness.
    /// - Rotation is extracted from the basis columns divided by scale, using
    ///   the same branch selection as [`Quat::from_mat3`].
    ///
    /// A zero scale column contributes a zero column to the rotation basis.
    #[allow(clippy::float_cmp)]
    pub fn decompose(&self) -> Transform {
        let position = self.get_translation();

        let c0 = Vec3::new(self.data[0], self.data[1], self.data[2]);
        let c1 = Vec3::new(self.data[4], self.data[5], self.data[6]);
        let c2 = Vec3::new(self.data[8], self.data[9], self.data[10]);

        let mut sx = c0.length();
        let sy = c1.length();
        let sz = c2.length();
        if self.determinant() < 0.0 {
            sx = -sx;
        }
        let scale = Vec3::new(sx, sy, sz);
        if sx == 0.0 || sy == 0.0 || sz == 0.0 {
            trace!(%scale, "mat4 decompose: zero scale column");
        }

        // Divide rather than multiply by the reciprocal: 1/s overflows for
        // subnormal scales.
        let unit = |c: Vec3, s: f64| if s == 0.0 { Vec3::ZERO } else { c.div_scalar(s) };
        let basis = Mat3::from_cols(unit(c0, sx), unit(c1, sy), unit(c2, sz));
        let rotation = Quat::from_mat3(&basis);

        Transform::new(position, rotation, scale)
    }

    /// Translation column.
    pub fn get_translation(&self) -> Vec3 {
        Vec3::new(self.data[12], self.data[13], self.data[14])
    }

    /// Length of each basis column (always non-negative).
    pub fn get_scaling(&self) -> Vec3 {
        Vec3::new(
            Vec3::new(self.data[0], self.data[1], self.data[2]).length(),
            Vec3::new(self.data[4], self.data[5], self.data[6]).length(),
            Vec3::new(self.data[8], self.data[9], self.data[10]).length(),
        )
    }

    /// Rotation of the basis with scale divided out.
    pub fn get_rotation(&self) -> Quat {
        self.decompose().rotation
    }

    /// Multiplies the matrix with another matrix (`self * rhs`).
    ///
    /// Multiplication follows column‑major semantics: `rhs`'s columns are
    /// transformed through `self`, so `rhs` applies first to a point.
    ///
    /// # Examples
    /// ```
    /// use glkit_math::Mat4;
    /// let a = Mat4::identity();
    /// let b = Mat4::scale(2.0, 3.0, 4.0);
    /// assert_eq!(a.multiply(&b).to_array(), b.to_array());
    /// ```
    pub fn multiply(&self, rhs: &Self) -> Self {
        let mut out = [0.0; 16];
        for row in 0..4 {
            for col in 0..4 {
                let mut sum = 0.0;
                for k in 0..4 {
                    sum += self.el(row, k) * rhs.el(k, col);
                }
                out[col * 4 + row] = sum;
            }
        }
        Self::new(out)
    }

    /// Reverse-order product (`lhs * self`): `lhs` applies after `self`.
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
        Self::new(core::array::from_fn(|i| self.el(i / 4, i % 4)))
    }

    fn cofactor_pairs(&self) -> [f64; 12] {
        let a = &self.data;
        let (a00, a01, a02, a03) = (a[0], a[1], a[2], a[3]);
        let (a10, a11, a12, a13) = (a[4], a[5], a[6], a[7]);
        let (a20, a21, a22, a23) = (a[8], a[9], a[10], a[11]);
        let (a30, a31, a32, a33) = (a[12], a[13], a[14], a[15]);
        [
            a00 * a11 - a01 * a10,
            a00 * a12 - a02 * a10,
            a00 * a13 - a03 * a10,
            a01 * a12 - a02 * a11,
            a01 * a13 - a03 * a11,
            a02 * a13 - a03 * a12,
            a20 * a31 - a21 * a30,
            a20 * a32 - a22 * a30,
            a20 * a33 - a23 * a30,
            a21 * a32 - a22 * a31,
            a21 * a33 - a23 * a31,
            a22 * a33 - a23 * a32,
        ]
    }

    /// Determinant by cofactor expansion over 2×2 minors.
    pub fn determinant(&self) -> f64 {
        let [b00, b01, b02, b03, b04, b05, b06, b07, b08, b09, b10, b11] = self.cofactor_pairs();
        b00 * b11 - b01 * b10 + b02 * b09 + b03 * b08 - b04 * b07 + b05 * b06
    }

    /// Classical adjoint (transpose of the cofactor matrix).
    pub fn adjoint(&self) -> Self {
        let a = &self.data;
        let (a00, a01, a02, a03) = (a[0], a[1], a[2], a[3]);
        let (a10, a11, a12, a13) = (a[4], a[5], a[6], a[7]);
        let (a20, a21, a22, a23) = (a[8], a[9], a[10], a[11]);
        let (a30, a31, a32, a33) = (a[12], a[13], a[14], a[15]);
        let [b00, b01, b02, b03, b04, b05, b06, b07, b08, b09, b10, b11] = self.cofactor_pairs();
        Self::new([
            a11 * b11 - a12 * b10 + a13 * b09,
            a02 * b10 - a01 * b11 - a03 * b09,
            a31 * b05 - a32 * b04 + a33 * b03,
            a22 * b04 - a21 * b05 - a23 * b03,
            a12 * b08 - a10 * b11 - a13 * b07,
            a00 * b11 - a02 * b08 + a03 * b07,
            a32 * b02 - a30 * b05 - a33 * b01,
            a20 * b05 - a22 * b02 + a23 * b01,
            a10 * b10 - a11 * b08 + a13 * b06,
            a01 * b08 - a00 * b10 - a03 * b06,
            a30 * b04 - a31 * b02 + a33 * b00,
            a21 * b02 - a20 * b04 - a23 * b00,
            a11 * b07 - a10 * b09 - a12 * b06,
            a00 * b09 - a01 * b07 + a02 * b06,
            a31 * b01 - a30 * b03 - a32 * b00,
            a20 * b03 - a21 * b01 + a22 * b00,
        ])
    }

    /// Inverse via cofactors, or `None` when the determinant is exactly zero.
    #[allow(clippy::float_cmp)]
    pub fn invert(&self) -> Option<Self> {
        let det = self.determinant();
        if det == 0.0 {
            trace!(det, "mat4 invert: singular matrix");
            return None;
        }
        Some(self.adjoint().scale_by(1.0 / det))
    }

    /// Multiplies a homogeneous vector (`self * v`).
    pub fn transform_vec4(&self, v: &Vec4) -> Vec4 {
        let row = |r: usize| {
            self.el(r, 0) * v.x + self.el(r, 1) * v.y + self.el(r, 2) * v.z + self.el(r, 3) * v.w
        };
        Vec4::new(row(0), row(1), row(2), row(3))
    }

    /// Transforms a point (assumes `w = 1`, no perspective divide).
    ///
    /// Use [`Vec3::transform_mat4`] when the matrix is projective.
    pub fn transform_point(&self, point: &Vec3) -> Vec3 {
        self.transform_vec4(&point.extend(1.0)).xyz()
    }

    /// Transforms a direction vector (ignores translation, `w = 0`).
    pub fn transform_direction(&self, direction: &Vec3) -> Vec3 {
        self.transform_vec4(&direction.extend(0.0)).xyz()
    }
}

impl ApproxEq for Mat4 {
    fn approx_eq_eps(&self, other: &Self, eps: f64) -> bool {
        self.data.approx_eq_eps(&other.data, eps)
    }
}

impl From<[f64; 16]> for Mat4 {
    fn from(value: [f64; 16]) -> Self {
        Self { data: value }
    }
}

impl From<Mat4> for [f64; 16] {
    fn from(value: Mat4) -> Self {
        value.data
    }
}

impl core::ops::Mul for Mat4 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl core::ops::Mul<&Mat4> for Mat4 {
    type Output = Self;
    fn mul(self, rhs: &Mat4) -> Self::Output {
        self.multiply(rhs)
    }
}

impl core::ops::MulAssign for Mat4 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.multiply(&rhs);
    }
}

impl core::ops::MulAssign<&Mat4> for Mat4 {
    fn mul_assign(&mut self, rhs: &Mat4) {
        *self = self.multiply(rhs);
    }
}

impl core::ops::Mul<Vec4> for Mat4 {
    type Output = Vec4;
    fn mul(self, rhs: Vec4) -> Vec4 {
        self.transform_vec4(&rhs)
    }
}

impl fmt::Display for Mat4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..4 {
            writeln!(
                f,
                "[{}, {}, {}, {}]",
                self.el(row, 0),
                self.el(row, 1),
                self.el(row, 2),
                self.el(row, 3)
            )?;
        }
        Ok(())
    }
}
