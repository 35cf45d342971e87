// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Scalar helpers shared by every value type.

use std::f64::consts::TAU;

/// Global epsilon used for approximate equality and degeneracy checks.
pub const EPSILON: f64 = 1e-6;

/// Clamps `value` to the inclusive `[min, max]` range.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    debug_assert!(min <= max, "invalid clamp range: {min} > {max}");
    value.max(min).min(max)
}

/// Converts degrees to radians.
pub fn deg_to_rad(value: f64) -> f64 {
    value * (TAU / 360.0)
}

/// Converts radians to degrees.
pub fn rad_to_deg(value: f64) -> f64 {
    value * (360.0 / TAU)
}

/// Linear interpolation `a + (b - a) * t`; `t` is not clamped.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Reciprocal with the library's zero guard: `1/0` yields `0`.
///
/// ```
/// use glkit_math::safe_inverse;
/// assert_eq!(safe_inverse(4.0), 0.25);
/// assert_eq!(safe_inverse(0.0), 0.0);
/// ```
#[allow(clippy::float_cmp)]
pub fn safe_inverse(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        1.0 / value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deg_rad_roundtrip() {
        for deg in [0.0, 45.0, 90.0, 180.0, -270.0] {
            assert!((rad_to_deg(deg_to_rad(deg)) - deg).abs() <= EPSILON);
        }
    }

    #[test]
    fn safe_inverse_handles_negative_zero() {
        assert_eq!(safe_inverse(-0.0), 0.0);
        assert_eq!(safe_inverse(-2.0), -0.5);
    }
}
