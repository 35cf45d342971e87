// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Approximate equality.
//!
//! Floating values in this crate are never compared exactly by the public
//! `approx_eq*` surface. Two values are equal when every component differs
//! by at most `eps`.

use crate::scalar::EPSILON;

/// Component-wise approximate equality.
pub trait ApproxEq {
    /// Returns `true` when every component differs by at most `eps`.
    fn approx_eq_eps(&self, other: &Self, eps: f64) -> bool;

    /// [`ApproxEq::approx_eq_eps`] with the crate-wide [`EPSILON`].
    fn approx_eq(&self, other: &Self) -> bool {
        self.approx_eq_eps(other, EPSILON)
    }
}

impl ApproxEq for f64 {
    fn approx_eq_eps(&self, other: &Self, eps: f64) -> bool {
        (self - other).abs() <= eps
    }
}

impl<const N: usize> ApproxEq for [f64; N] {
    fn approx_eq_eps(&self, other: &Self, eps: f64) -> bool {
        self.iter()
            .zip(other.iter())
            .all(|(a, b)| a.approx_eq_eps(b, eps))
    }
}
