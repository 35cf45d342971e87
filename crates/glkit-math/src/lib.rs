// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! glkit-math: the linear algebra core of the glkit WebGL2 teaching toolkit.
//!
//! Value types for 2D/3D/4D vectors, 3×3/4×4 column-major matrices,
//! quaternions, TRS transforms, and axis-aligned rectangles. Everything is
//! `f64`, `Copy`, and free of I/O; the WebGL layer consumes these types as
//! flat column-major arrays (`to_array`, `to_f32_array`, or a
//! `bytemuck::cast_slice` over a slice of values).
//!
//! Degenerate numerics never raise. Zero-length vector normalization yields the
//! zero vector, `invert` on a singular matrix yields `None`, and scalar
//! inverses map `1/0` to `0`. Only bounds-checked accessors return
//! [`MathError`].
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::unreadable_literal,
    clippy::missing_const_for_fn,
    clippy::suboptimal_flops,
    clippy::many_single_char_names,
    clippy::similar_names,
    clippy::should_implement_trait
)]

mod approx;
mod error;
mod mat3;
mod mat4;
mod ops;
mod quat;
mod rect;
mod scalar;
mod transform;
mod vec2;
mod vec3;
mod vec4;

pub use approx::ApproxEq;
pub use error::MathError;
pub use mat3::Mat3;
pub use mat4::Mat4;
pub use quat::Quat;
pub use rect::Rect;
pub use scalar::{clamp, deg_to_rad, lerp, rad_to_deg, safe_inverse, EPSILON};
pub use transform::Transform;
pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vec4::Vec4;
