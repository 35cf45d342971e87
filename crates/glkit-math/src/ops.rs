// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared component-wise surface for the fixed-arity vector types.
//!
//! `impl_vector!` expands to the inherent arithmetic methods, the operator
//! traits (vector ⊕ vector and vector ⊕ scalar), indexing, slice I/O, and the
//! array conversions. Geometry that differs per arity (normalize, cross,
//! transforms) lives next to each type.

macro_rules! impl_vector {
    ($ty:ident, $n:literal, $($field:ident),+) => {
        impl $ty {
            /// Number of components.
            pub const LEN: usize = $n;

            /// Vector with every component set to `value`.
            pub const fn splat(value: f64) -> Self {
                Self { $($field: value),+ }
            }

            /// Reads `Self::LEN` components from `buf` starting at `offset`.
            pub fn from_slice(buf: &[f64], offset: usize) -> Result<Self, crate::MathError> {
                let src = crate::error::window(buf, offset, $n)?;
                let mut it = src.iter().copied();
                Ok(Self { $($field: it.next().unwrap_or_default()),+ })
            }

            /// Writes the components into `out` starting at `offset`.
            pub fn write_to_slice(&self, out: &mut [f64], offset: usize) -> Result<(), crate::MathError> {
                let dst = crate::error::window_mut(out, offset, $n)?;
                dst.copy_from_slice(&self.to_array());
                Ok(())
            }

            /// Returns the components as an array.
            pub const fn to_array(self) -> [f64; $n] {
                [$(self.$field),+]
            }

            /// Returns the components narrowed to `f32` for GPU upload.
            #[allow(clippy::cast_possible_truncation)]
            pub fn to_f32_array(self) -> [f32; $n] {
                [$(self.$field as f32),+]
            }

            /// Component at `index`, or [`crate::MathError::IndexOutOfRange`].
            pub fn get(&self, index: usize) -> Result<f64, crate::MathError> {
                crate::error::check_index(index, $n)?;
                Ok(self.to_array()[index])
            }

            /// Overwrites the component at `index` in place.
            pub fn set_index(&mut self, index: usize, value: f64) -> Result<(), crate::MathError> {
                crate::error::check_index(index, $n)?;
                let mut arr = self.to_array();
                arr[index] = value;
                *self = Self::from(arr);
                Ok(())
            }

            /// Component-wise sum.
            pub fn add(&self, other: &Self) -> Self {
                Self { $($field: self.$field + other.$field),+ }
            }

            /// Component-wise difference.
            pub fn sub(&self, other: &Self) -> Self {
                Self { $($field: self.$field - other.$field),+ }
            }

            /// Component-wise product.
            pub fn mul(&self, other: &Self) -> Self {
                Self { $($field: self.$field * other.$field),+ }
            }

            /// Component-wise quotient (IEEE semantics, no zero guard).
            pub fn div(&self, other: &Self) -> Self {
                Self { $($field: self.$field / other.$field),+ }
            }

            /// Component-wise truncated remainder.
            pub fn rem(&self, other: &Self) -> Self {
                Self { $($field: self.$field % other.$field),+ }
            }

            /// Adds `scalar` to every component.
            pub fn add_scalar(&self, scalar: f64) -> Self {
                Self { $($field: self.$field + scalar),+ }
            }

            /// Subtracts `scalar` from every component.
            pub fn sub_scalar(&self, scalar: f64) -> Self {
                Self { $($field: self.$field - scalar),+ }
            }

            /// Multiplies every component by `scalar`.
            pub fn scale(&self, scalar: f64) -> Self {
                Self { $($field: self.$field * scalar),+ }
            }

            /// Divides every component by `scalar` (IEEE semantics).
            pub fn div_scalar(&self, scalar: f64) -> Self {
                Self { $($field: self.$field / scalar),+ }
            }

            /// Truncated remainder of every component by `scalar`.
            pub fn rem_scalar(&self, scalar: f64) -> Self {
                Self { $($field: self.$field % scalar),+ }
            }

            /// Component-wise reciprocal; zero components stay zero.
            pub fn invert(&self) -> Self {
                Self { $($field: crate::scalar::safe_inverse(self.$field)),+ }
            }

            /// Component-wise absolute value.
            pub fn abs(&self) -> Self {
                Self { $($field: self.$field.abs()),+ }
            }

            /// Component-wise floor.
            pub fn floor(&self) -> Self {
                Self { $($field: self.$field.floor()),+ }
            }

            /// Component-wise ceiling.
            pub fn ceil(&self) -> Self {
                Self { $($field: self.$field.ceil()),+ }
            }

            /// Component-wise rounding (half away from zero).
            pub fn round(&self) -> Self {
                Self { $($field: self.$field.round()),+ }
            }

            /// Component-wise minimum.
            pub fn min(&self, other: &Self) -> Self {
                Self { $($field: self.$field.min(other.$field)),+ }
            }

            /// Component-wise maximum.
            pub fn max(&self, other: &Self) -> Self {
                Self { $($field: self.$field.max(other.$field)),+ }
            }

            /// Clamps every component into `[min, max]` of the matching bound.
            pub fn clamp(&self, min: &Self, max: &Self) -> Self {
                Self { $($field: crate::scalar::clamp(self.$field, min.$field, max.$field)),+ }
            }

            /// Dot product.
            pub fn dot(&self, other: &Self) -> f64 {
                0.0 $(+ self.$field * other.$field)+
            }

            /// Squared magnitude.
            pub fn length_squared(&self) -> f64 {
                self.dot(self)
            }

            /// Magnitude, accumulated with `hypot` so finite components
            /// never overflow or underflow the intermediate sum of squares.
            pub fn length(&self) -> f64 {
                0.0_f64 $(.hypot(self.$field))+
            }

            /// Squared distance to `other`.
            pub fn distance_squared(&self, other: &Self) -> f64 {
                self.sub(other).length_squared()
            }

            /// Distance to `other`.
            pub fn distance(&self, other: &Self) -> f64 {
                self.sub(other).length()
            }

            /// Linear blend `self + (other - self) * t`; `t` is not clamped.
            pub fn lerp(&self, other: &Self, t: f64) -> Self {
                Self { $($field: crate::scalar::lerp(self.$field, other.$field, t)),+ }
            }
        }

        impl crate::ApproxEq for $ty {
            fn approx_eq_eps(&self, other: &Self, eps: f64) -> bool {
                true $(&& (self.$field - other.$field).abs() <= eps)+
            }
        }

        impl From<[f64; $n]> for $ty {
            fn from(value: [f64; $n]) -> Self {
                let [$($field),+] = value;
                Self { $($field),+ }
            }
        }

        impl From<$ty> for [f64; $n] {
            fn from(value: $ty) -> Self {
                value.to_array()
            }
        }

        impl IntoIterator for $ty {
            type Item = f64;
            type IntoIter = core::array::IntoIter<f64, $n>;

            fn into_iter(self) -> Self::IntoIter {
                self.to_array().into_iter()
            }
        }

        impl core::ops::Neg for $ty {
            type Output = Self;
            fn neg(self) -> Self {
                Self { $($field: -self.$field),+ }
            }
        }

        crate::ops::impl_vector!(@binop $ty, Add, add, AddAssign, add_assign, +, $($field),+);
        crate::ops::impl_vector!(@binop $ty, Sub, sub, SubAssign, sub_assign, -, $($field),+);
        crate::ops::impl_vector!(@binop $ty, Mul, mul, MulAssign, mul_assign, *, $($field),+);
        crate::ops::impl_vector!(@binop $ty, Div, div, DivAssign, div_assign, /, $($field),+);
        crate::ops::impl_vector!(@binop $ty, Rem, rem, RemAssign, rem_assign, %, $($field),+);

        impl core::ops::Mul<$ty> for f64 {
            type Output = $ty;
            fn mul(self, rhs: $ty) -> $ty {
                rhs * self
            }
        }
    };

    (@binop $ty:ident, $tr:ident, $method:ident, $atr:ident, $amethod:ident, $op:tt, $($field:ident),+) => {
        impl core::ops::$tr for $ty {
            type Output = Self;
            fn $method(self, rhs: Self) -> Self {
                Self { $($field: self.$field $op rhs.$field),+ }
            }
        }

        impl core::ops::$tr<f64> for $ty {
            type Output = Self;
            fn $method(self, rhs: f64) -> Self {
                Self { $($field: self.$field $op rhs),+ }
            }
        }

        impl core::ops::$atr for $ty {
            fn $amethod(&mut self, rhs: Self) {
                $(self.$field = self.$field $op rhs.$field;)+
            }
        }

        impl core::ops::$atr<f64> for $ty {
            fn $amethod(&mut self, rhs: f64) {
                $(self.$field = self.$field $op rhs;)+
            }
        }
    };
}

pub(crate) use impl_vector;
