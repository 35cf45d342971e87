#![allow(missing_docs)]
use glkit_math::{ApproxEq, Mat4, Quat, Transform, Vec3};

fn sample() -> Transform {
    Transform::new(
        Vec3::new(3.0, -1.0, 0.5),
        Quat::from_axis_angle(Vec3::new(0.2, 1.0, -0.4), 0.9),
        Vec3::new(2.0, 0.5, 1.5),
    )
}

#[test]
fn identity_is_default_and_maps_to_identity_matrix() {
    assert_eq!(Transform::default(), Transform::identity());
    assert_eq!(Transform::identity().to_mat4(), Mat4::identity());
}

#[test]
fn transform_point_matches_composed_matrix() {
    let t = sample();
    let m: Mat4 = t.into();
    for p in [Vec3::ZERO, Vec3::ONE, Vec3::new(-4.0, 2.0, 7.5)] {
        let direct = t.transform_point(&p);
        let via_matrix = m.transform_point(&p);
        assert!(direct.approx_eq(&via_matrix), "{direct} vs {via_matrix}");
    }
}

#[test]
fn matrix_round_trip_recovers_components() {
    let t = sample();
    let back = Transform::from_mat4(&t.to_mat4());
    assert!(back.approx_eq(&t), "{back:?} vs {t:?}");
    let via_from: Transform = t.to_mat4().into();
    assert!(via_from.approx_eq(&t));
}

#[test]
fn approx_eq_ignores_quaternion_sign() {
    let t = sample();
    let flipped = Transform::new(t.position, -t.rotation, t.scale);
    assert!(t.approx_eq(&flipped));
    let moved = Transform::new(t.position.add(&Vec3::UNIT_X), t.rotation, t.scale);
    assert!(!t.approx_eq(&moved));
}
