#![allow(missing_docs)]
#![cfg(feature = "serde")]

use glkit_math::{ApproxEq, Mat4, Quat, Rect, Transform, Vec3};

#[test]
fn vec3_serializes_as_named_fields() {
    let v = Vec3::new(1.0, -2.5, 3.0);
    let json = serde_json::to_value(v).expect("serialize vec3");
    assert_eq!(json, serde_json::json!({ "x": 1.0, "y": -2.5, "z": 3.0 }));
    let back: Vec3 = serde_json::from_value(json).expect("deserialize vec3");
    assert_eq!(back, v);
}

#[test]
fn mat4_serializes_as_flat_column_major_array() {
    let m = Mat4::translation(1.0, 2.0, 3.0);
    let json = serde_json::to_value(m).expect("serialize mat4");
    let flat: Vec<f64> = serde_json::from_value(json.clone()).expect("flat array");
    assert_eq!(flat, m.to_array().to_vec());
    assert_eq!(flat[12..15], [1.0, 2.0, 3.0]);
    let back: Mat4 = serde_json::from_value(json).expect("deserialize mat4");
    assert_eq!(back, m);
}

#[test]
fn transform_and_rect_survive_json() {
    let t = Transform::new(
        Vec3::new(0.5, 0.0, -1.0),
        Quat::from_axis_angle(Vec3::UNIT_Y, 0.4),
        Vec3::ONE,
    );
    let s = serde_json::to_string(&t).expect("serialize transform");
    let back: Transform = serde_json::from_str(&s).expect("deserialize transform");
    assert!(back.approx_eq(&t));

    let r = Rect::new(0.0, 0.0, 640.0, 480.0);
    let s = serde_json::to_string(&r).expect("serialize rect");
    assert_eq!(serde_json::from_str::<Rect>(&s).expect("deserialize rect"), r);
}
