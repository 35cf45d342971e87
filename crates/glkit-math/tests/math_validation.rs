// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
//! Fixture-driven validation of vector, matrix and quaternion routines.
//!
//! Expected values come from an independent double-precision reference. The
//! fixture file pins them so a regression in the cofactor expansion or the
//! projection formulas shows up as a concrete diff.

use once_cell::sync::Lazy;
use serde::Deserialize;

use glkit_math::{Mat4, Quat, Vec3};

static FIXTURES: Lazy<Fixtures> = Lazy::new(|| {
    serde_json::from_str(include_str!("fixtures/math-fixtures.json"))
        .expect("math fixtures parse")
});

#[derive(Debug, Deserialize)]
struct Fixtures {
    #[serde(default)]
    tolerance: Tolerance,
    vec3: Vec3Cases,
    mat4: Mat4Cases,
    quat: QuatCases,
}

/// Absolute floor plus a bound relative to the reference magnitude.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
struct Tolerance {
    absolute: f64,
    relative: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            absolute: 1e-9,
            relative: 1e-9,
        }
    }
}

impl Tolerance {
    fn check(&self, label: &str, actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len(), "{label}: arity");
        for (i, (&got, &want)) in actual.iter().zip(expected).enumerate() {
            let bound = self.absolute.max(self.relative * want.abs());
            assert!(
                (got - want).abs() <= bound,
                "{label}[{i}]: want {want}, got {got} (bound {bound})"
            );
        }
    }
}

/// Two operands and the reference result.
#[derive(Debug, Deserialize)]
struct Pair<A, R> {
    a: A,
    b: A,
    expected: R,
}

/// One operand and the reference result.
#[derive(Debug, Deserialize)]
struct Single<V, R> {
    value: V,
    expected: R,
}

/// A matrix applied to a vector.
#[derive(Debug, Deserialize)]
struct Applied {
    matrix: [f64; 16],
    vector: [f64; 3],
    expected: [f64; 3],
}

#[derive(Debug, Deserialize)]
struct MatrixCase<R> {
    matrix: [f64; 16],
    expected: R,
}

#[derive(Debug, Deserialize)]
struct Vec3Cases {
    add: Vec<Pair<[f64; 3], [f64; 3]>>,
    dot: Vec<Pair<[f64; 3], f64>>,
    cross: Vec<Pair<[f64; 3], [f64; 3]>>,
    length: Vec<Single<[f64; 3], f64>>,
    normalize: Vec<Single<[f64; 3], [f64; 3]>>,
}

#[derive(Debug, Deserialize)]
struct Mat4Cases {
    multiply: Vec<Pair<[f64; 16], [f64; 16]>>,
    transform_point: Vec<Applied>,
    transform_direction: Vec<Applied>,
    determinant: Vec<MatrixCase<f64>>,
    invert: Vec<MatrixCase<[f64; 16]>>,
    perspective: Vec<Perspective>,
    ortho: Vec<Ortho>,
    look_at: Vec<LookAt>,
}

#[derive(Debug, Deserialize)]
struct Perspective {
    fovy: f64,
    aspect: f64,
    near: f64,
    far: f64,
    expected: [f64; 16],
}

#[derive(Debug, Deserialize)]
struct Ortho {
    left: f64,
    right: f64,
    bottom: f64,
    top: f64,
    near: f64,
    far: f64,
    expected: [f64; 16],
}

#[derive(Debug, Deserialize)]
struct LookAt {
    eye: [f64; 3],
    center: [f64; 3],
    up: [f64; 3],
    expected: [f64; 16],
}

#[derive(Debug, Deserialize)]
struct QuatCases {
    from_axis_angle: Vec<AxisAngle>,
    multiply: Vec<Pair<[f64; 4], [f64; 4]>>,
    normalize: Vec<Single<[f64; 4], [f64; 4]>>,
    to_mat4: Vec<Single<[f64; 4], [f64; 16]>>,
    slerp: Vec<Slerp>,
}

#[derive(Debug, Deserialize)]
struct AxisAngle {
    axis: [f64; 3],
    angle: f64,
    expected: [f64; 4],
}

#[derive(Debug, Deserialize)]
struct Slerp {
    a: [f64; 4],
    b: [f64; 4],
    t: f64,
    expected: [f64; 4],
}

fn nonempty<'a, T>(set: &str, cases: &'a [T]) -> &'a [T] {
    assert!(!cases.is_empty(), "fixture set {set} is empty");
    cases
}

#[test]
fn vec3_matches_reference() {
    let fx = &*FIXTURES;
    let tol = fx.tolerance;
    for (i, c) in nonempty("vec3.add", &fx.vec3.add).iter().enumerate() {
        let got = Vec3::from(c.a) + Vec3::from(c.b);
        tol.check(&format!("vec3.add#{i}"), &got.to_array(), &c.expected);
    }
    for (i, c) in nonempty("vec3.dot", &fx.vec3.dot).iter().enumerate() {
        let got = Vec3::from(c.a).dot(&Vec3::from(c.b));
        tol.check(&format!("vec3.dot#{i}"), &[got], &[c.expected]);
    }
    for (i, c) in nonempty("vec3.cross", &fx.vec3.cross).iter().enumerate() {
        let got = Vec3::from(c.a).cross(&Vec3::from(c.b));
        tol.check(&format!("vec3.cross#{i}"), &got.to_array(), &c.expected);
    }
    for (i, c) in nonempty("vec3.length", &fx.vec3.length).iter().enumerate() {
        let got = Vec3::from(c.value).length();
        tol.check(&format!("vec3.length#{i}"), &[got], &[c.expected]);
    }
    for (i, c) in nonempty("vec3.normalize", &fx.vec3.normalize)
        .iter()
        .enumerate()
    {
        let got = Vec3::from(c.value).normalize();
        tol.check(&format!("vec3.normalize#{i}"), &got.to_array(), &c.expected);
    }
}

#[test]
fn mat4_products_and_vector_transforms_match_reference() {
    let fx = &*FIXTURES;
    let tol = fx.tolerance;
    for (i, c) in nonempty("mat4.multiply", &fx.mat4.multiply).iter().enumerate() {
        let got = Mat4::from(c.a) * Mat4::from(c.b);
        tol.check(&format!("mat4.multiply#{i}"), &got.to_array(), &c.expected);
    }
    for (i, c) in nonempty("mat4.transform_point", &fx.mat4.transform_point)
        .iter()
        .enumerate()
    {
        let got = Mat4::from(c.matrix).transform_point(&Vec3::from(c.vector));
        tol.check(&format!("mat4.transform_point#{i}"), &got.to_array(), &c.expected);
    }
    for (i, c) in nonempty("mat4.transform_direction", &fx.mat4.transform_direction)
        .iter()
        .enumerate()
    {
        let got = Mat4::from(c.matrix).transform_direction(&Vec3::from(c.vector));
        tol.check(
            &format!("mat4.transform_direction#{i}"),
            &got.to_array(),
            &c.expected,
        );
    }
}

#[test]
fn mat4_cofactor_routines_match_reference() {
    let fx = &*FIXTURES;
    let tol = fx.tolerance;
    for (i, c) in nonempty("mat4.determinant", &fx.mat4.determinant)
        .iter()
        .enumerate()
    {
        let got = Mat4::from(c.matrix).determinant();
        tol.check(&format!("mat4.determinant#{i}"), &[got], &[c.expected]);
    }
    for (i, c) in nonempty("mat4.invert", &fx.mat4.invert).iter().enumerate() {
        let Some(got) = Mat4::from(c.matrix).invert() else {
            panic!("mat4.invert#{i}: fixture matrix is singular");
        };
        tol.check(&format!("mat4.invert#{i}"), &got.to_array(), &c.expected);
    }
}

#[test]
fn mat4_camera_matrices_match_reference() {
    let fx = &*FIXTURES;
    let tol = fx.tolerance;
    for (i, c) in nonempty("mat4.perspective", &fx.mat4.perspective)
        .iter()
        .enumerate()
    {
        let got = Mat4::perspective(c.fovy, c.aspect, c.near, c.far);
        tol.check(&format!("mat4.perspective#{i}"), &got.to_array(), &c.expected);
    }
    for (i, c) in nonempty("mat4.ortho", &fx.mat4.ortho).iter().enumerate() {
        let got = Mat4::ortho(c.left, c.right, c.bottom, c.top, c.near, c.far);
        tol.check(&format!("mat4.ortho#{i}"), &got.to_array(), &c.expected);
    }
    for (i, c) in nonempty("mat4.look_at", &fx.mat4.look_at).iter().enumerate() {
        let [eye, center, up] = [c.eye, c.center, c.up].map(Vec3::from);
        let got = Mat4::look_at(&eye, &center, &up);
        tol.check(&format!("mat4.look_at#{i}"), &got.to_array(), &c.expected);
    }
}

#[test]
fn quat_matches_reference() {
    let fx = &*FIXTURES;
    let tol = fx.tolerance;
    for (i, c) in nonempty("quat.from_axis_angle", &fx.quat.from_axis_angle)
        .iter()
        .enumerate()
    {
        let got = Quat::from_axis_angle(Vec3::from(c.axis), c.angle);
        tol.check(&format!("quat.from_axis_angle#{i}"), &got.to_array(), &c.expected);
    }
    for (i, c) in nonempty("quat.multiply", &fx.quat.multiply).iter().enumerate() {
        let got = Quat::from(c.a) * Quat::from(c.b);
        tol.check(&format!("quat.multiply#{i}"), &got.to_array(), &c.expected);
    }
    for (i, c) in nonempty("quat.normalize", &fx.quat.normalize)
        .iter()
        .enumerate()
    {
        let got = Quat::from(c.value).normalize();
        tol.check(&format!("quat.normalize#{i}"), &got.to_array(), &c.expected);
    }
    for (i, c) in nonempty("quat.to_mat4", &fx.quat.to_mat4).iter().enumerate() {
        let got = Quat::from(c.value).to_mat4();
        tol.check(&format!("quat.to_mat4#{i}"), &got.to_array(), &c.expected);
    }
    for (i, c) in nonempty("quat.slerp", &fx.quat.slerp).iter().enumerate() {
        let got = Quat::from(c.a).slerp(&Quat::from(c.b), c.t);
        tol.check(&format!("quat.slerp#{i}"), &got.to_array(), &c.expected);
    }
}
