#![allow(missing_docs)]
use glkit_math::{ApproxEq, Mat3, Mat4, Vec2, Vec3};

// Columns (2, 1, 0), (0, 3, 1), (1, 0, 4); determinant 25.
fn sample() -> Mat3 {
    Mat3::new([2.0, 1.0, 0.0, 0.0, 3.0, 1.0, 1.0, 0.0, 4.0])
}

#[test]
fn mat3_determinant_known_value() {
    assert_eq!(sample().determinant(), 25.0);
    assert_eq!(Mat3::identity().determinant(), 1.0);
    assert_eq!(Mat3::scale(2.0, -3.0).determinant(), -6.0);
}

#[test]
fn mat3_invert_is_two_sided_inverse() {
    let m = sample();
    let inv = m.invert().expect("non-singular");
    assert!((m * inv).approx_eq(&Mat3::identity()), "{}", m * inv);
    assert!((inv * m).approx_eq(&Mat3::identity()), "{}", inv * m);
}

#[test]
fn mat3_adjoint_is_inverse_times_determinant() {
    let m = sample();
    let inv = m.invert().expect("non-singular");
    assert!(m.adjoint().approx_eq(&inv.scale_by(m.determinant())));
    // Exact integer cofactors for the sample matrix.
    assert_eq!(
        m.adjoint().to_array(),
        [12.0, -4.0, 1.0, 1.0, 8.0, -2.0, -3.0, 1.0, 6.0]
    );
}

#[test]
fn mat3_invert_undoes_2d_affine() {
    let m = Mat3::translation(3.0, -2.0) * Mat3::rotation(0.4) * Mat3::scale(2.0, 0.5);
    let inv = m.invert().expect("affine with non-zero scale");
    let p = Vec2::new(1.5, -7.0);
    let back = p.transform_mat3(&m).transform_mat3(&inv);
    assert!(back.approx_eq(&p), "{back}");
}

#[test]
fn mat3_invert_singular_is_none() {
    assert!(Mat3::scale(1.0, 0.0).invert().is_none());
    let rank_two = Mat3::from_cols(Vec3::UNIT_X, Vec3::UNIT_Y, Vec3::new(1.0, 1.0, 0.0));
    assert!(rank_two.invert().is_none());
}

#[test]
fn normal_matrix_of_non_uniform_scale() {
    let n = Mat3::normal_from_mat4(&Mat4::scale(2.0, 4.0, 1.0)).expect("invertible block");
    assert!(n.approx_eq(&Mat3::new([0.5, 0.0, 0.0, 0.0, 0.25, 0.0, 0.0, 0.0, 1.0])));
}

#[test]
fn normal_matrix_of_rotation_is_the_rotation() {
    let m = Mat4::translation(4.0, 5.0, 6.0) * Mat4::rotation_y(0.7);
    let n = Mat3::normal_from_mat4(&m).expect("rotation is invertible");
    assert!(n.approx_eq(&Mat3::from_mat4(&m)));
}

#[test]
fn normal_matrix_of_singular_block_is_none() {
    assert!(Mat3::normal_from_mat4(&Mat4::scale(1.0, 0.0, 1.0)).is_none());
}
