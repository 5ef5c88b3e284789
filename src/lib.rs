//! # quatrix
//!
//! Fixed-size vectors, square matrices and quaternions for 2D/3D geometry.
//! Stack-allocated, no heap allocation, `no_std` compatible.
//!
//! ## Quick start
//!
//! ```
//! use quatrix::{AlmostEqual, AlmostEqualContext, Matrix3, Quaternion, Vector3};
//!
//! let axis = Vector3::new(0.0_f64, 0.0, 1.0);
//! let angle = core::f64::consts::FRAC_PI_2;
//!
//! // The same rotation as a matrix and as a quaternion
//! let m = Matrix3::rotation(&axis, angle);
//! let q = Quaternion::from_axis_angle(&axis, angle);
//!
//! let ctx = AlmostEqualContext::default();
//! assert!(m.almost_eq(&ctx, &q.to_rotation_matrix3()));
//!
//! let v = Vector3::new(1.0, 0.0, 0.0);
//! assert!((m * v).almost_eq(&ctx, &Vector3::new(0.0, 1.0, 0.0)));
//! ```
//!
//! ## Modules
//!
//! - [`vector`]: `Vector<T, N>` with `x/y/z/w` accessors, dot and cross
//!   products, normalization, clamping, projection, interpolation and
//!   Gram-Schmidt orthonormalization.
//!
//! - [`matrix`]: `Matrix<T, M, N>` with const-generic dimensions, column-major
//!   storage and row-major `(row, col)` addressing. Square 2×2/3×3/4×4 matrices
//!   add determinants, adjugate and Gauss-Jordan inversion, range-checked row
//!   operations, rotations, translations and look-at.
//!
//! - [`quaternion`]: `(x, y, z, w)` quaternions with the Hamilton product,
//!   axis-angle and rotation-matrix conversion, linear and spherical-linear
//!   interpolation, and look-at.
//!
//! - [`almost`]: [`AlmostEqualContext`] and the [`AlmostEqual`] trait for
//!   comparing floating-point results with relative and absolute tolerances.
//!   Vectors, matrices and quaternions also implement the `approx` traits, so
//!   `assert_relative_eq!` and friends work on them.
//!
//! - [`linalg`]: [`LinalgError`](linalg::LinalgError), the error type for range
//!   violations and singular inversion.
//!
//! - [`traits`]: Element trait hierarchy:
//!   - [`Scalar`]: `f32`, `f64`, `i32`, `i64`
//!   - [`FloatScalar`]: `f32`, `f64`, used by everything needing `sqrt` or trigonometry
//!
//! ## Cargo features
//!
//! | Feature   | Default  | Description |
//! |-----------|----------|-------------|
//! | `std`     | yes      | Hardware FPU via system libm, `std::error::Error` for `LinalgError` |
//! | `libm`    | no       | Pure-Rust software float fallback for `no_std` |
//! | `tracing` | no       | Trace-level events for singular inversion and degenerate normalization |

#![cfg_attr(not(feature = "std"), no_std)]

/// Emit a trace-level event when the `tracing` feature is enabled.
macro_rules! trace_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::trace!($($arg)*);
    };
}

pub mod almost;
pub mod linalg;
pub mod matrix;
pub mod quaternion;
pub mod traits;
pub mod vector;

pub use almost::{almost_equal, AlmostEqual, AlmostEqualContext};
pub use linalg::LinalgError;
pub use matrix::Matrix;
pub use matrix::aliases::{Matrix2, Matrix3, Matrix4};
pub use quaternion::Quaternion;
pub use traits::{FloatScalar, Scalar};
pub use vector::{Vector, Vector2, Vector3, Vector4};
