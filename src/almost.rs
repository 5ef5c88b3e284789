//! Tolerance-based floating-point comparison.
//!
//! Two reals `a` and `b` are *almost equal* under a context `c` when
//!
//! ```text
//! |a - b| <= max(c.absolute, c.relative * max(|a|, |b|))
//! ```
//!
//! This is [`approx::RelativeEq`] with `epsilon = c.absolute` and
//! `max_relative = c.relative`. Vectors, matrices and quaternions implement
//! `AbsDiffEq`, `RelativeEq` and `UlpsEq` component-wise, so the `approx`
//! assertion macros work on them directly. Almost-equality is not
//! transitive: `a ≈ b` and `b ≈ c` says nothing about `a ≈ c`.

use approx::RelativeEq;

use crate::traits::FloatScalar;

/// Tolerances for [`almost_equal`] and the [`AlmostEqual`] trait.
///
/// ```
/// use quatrix::{almost_equal, AlmostEqualContext};
///
/// let ctx = AlmostEqualContext::new(1.0e-6_f64, 1.0e-9);
/// assert!(almost_equal(&ctx, 1.0, 1.0 + 1.0e-7));
/// assert!(!almost_equal(&ctx, 1.0, 1.001));
/// assert!(almost_equal(&ctx, 0.0, 1.0e-10));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlmostEqualContext<T> {
    /// Largest tolerated difference relative to the larger magnitude.
    pub relative: T,
    /// Tolerated difference regardless of magnitude.
    pub absolute: T,
}

impl<T: FloatScalar> AlmostEqualContext<T> {
    /// Create a context from a relative and an absolute tolerance.
    #[inline]
    pub fn new(relative: T, absolute: T) -> Self {
        Self { relative, absolute }
    }

    /// Context that only accepts bit-for-bit equal values (and equal infinities).
    #[inline]
    pub fn exact() -> Self {
        Self {
            relative: T::zero(),
            absolute: T::zero(),
        }
    }
}

impl<T: FloatScalar> Default for AlmostEqualContext<T> {
    fn default() -> Self {
        Self {
            relative: T::RELATIVE_EPSILON,
            absolute: T::ABSOLUTE_EPSILON,
        }
    }
}

/// Scalar almost-equality. NaN is never almost equal to anything.
#[inline]
pub fn almost_equal<T: FloatScalar>(ctx: &AlmostEqualContext<T>, a: T, b: T) -> bool {
    a.relative_eq(&b, ctx.absolute, ctx.relative)
}

/// Almost-equality under an [`AlmostEqualContext`].
///
/// Implemented for everything whose [`RelativeEq`] epsilon is the element
/// type: `f32`, `f64`, and vectors, matrices and quaternions of those. All
/// components must be almost equal simultaneously.
pub trait AlmostEqual<T: Copy>: RelativeEq<Epsilon = T> {
    #[inline]
    fn almost_eq(&self, ctx: &AlmostEqualContext<T>, other: &Self) -> bool {
        self.relative_eq(other, ctx.absolute, ctx.relative)
    }
}

impl<T: Copy, U: RelativeEq<Epsilon = T>> AlmostEqual<T> for U {}
