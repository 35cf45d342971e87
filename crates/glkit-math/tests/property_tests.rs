#![allow(missing_docs)]
use proptest::prelude::*;

use glkit_math::{ApproxEq, Mat4, Quat, Vec3};

fn vec3_in(range: core::ops::Range<f64>) -> impl Strategy<Value = Vec3> {
    (range.clone(), range.clone(), range).prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

fn rotation() -> impl Strategy<Value = Quat> {
    (vec3_in(-1.0..1.0), -6.0f64..6.0).prop_map(|(axis, angle)| Quat::from_axis_angle(axis, angle))
}

fn signed_scale() -> impl Strategy<Value = f64> {
    (0.2f64..5.0, any::<bool>()).prop_map(|(m, neg)| if neg { -m } else { m })
}

proptest! {
    #[test]
    fn vec3_add_then_sub_restores(v in vec3_in(-1.0e3..1.0e3), w in vec3_in(-1.0e3..1.0e3)) {
        prop_assert!(v.add(&w).sub(&w).approx_eq(&v));
    }

    #[test]
    fn composed_matrix_times_inverse_is_identity(
        p in vec3_in(-100.0..100.0),
        q in rotation(),
        s in vec3_in(0.2..5.0),
    ) {
        let m = Mat4::compose(&p, &q, &s);
        let inv = m.invert();
        prop_assert!(inv.is_some());
        if let Some(inv) = inv {
            prop_assert!(m.multiply(&inv).approx_eq(&Mat4::identity()));
            prop_assert!(inv.multiply(&m).approx_eq(&Mat4::identity()));
        }
    }

    #[test]
    fn decompose_recovers_positive_scale_components(
        p in vec3_in(-100.0..100.0),
        q in rotation(),
        s in vec3_in(0.2..5.0),
    ) {
        let t = Mat4::compose(&p, &q, &s).decompose();
        prop_assert!(t.position.approx_eq(&p));
        prop_assert!(t.scale.approx_eq(&s));
        prop_assert!(t.rotation.approx_eq(&q) || t.rotation.approx_eq(&-q));
    }

    #[test]
    fn decompose_then_compose_restores_matrix(
        p in vec3_in(-100.0..100.0),
        q in rotation(),
        sx in signed_scale(),
        sy in signed_scale(),
        sz in signed_scale(),
    ) {
        let m = Mat4::compose(&p, &q, &Vec3::new(sx, sy, sz));
        let t = m.decompose();
        let back = Mat4::compose(&t.position, &t.rotation, &t.scale);
        prop_assert!(back.approx_eq(&m), "{m} vs {back}");
    }

    #[test]
    fn slerp_of_equal_quaternions_is_identity_op(q in rotation(), t in 0.0f64..1.0) {
        let s = Quat::slerp_of(&q, &q, t);
        prop_assert!(s.approx_eq(&q));
    }

    #[test]
    fn rotation_preserves_length(q in rotation(), v in vec3_in(-10.0..10.0)) {
        let r = q.rotate_vec3(&v);
        prop_assert!((r.length() - v.length()).abs() < 1e-9);
    }
}
