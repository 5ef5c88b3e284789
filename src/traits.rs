use approx::RelativeEq;
use core::fmt::Debug;
use num_traits::{Float, Num, NumCast};

/// Trait for types that can be used as vector, matrix and quaternion elements.
///
/// Implemented for `f32`, `f64`, `i32` and `i64`. Every element type is
/// signed, so component-wise absolute values and negation are always
/// available. As with the primitive integers, negating `i32::MIN` or
/// `i64::MIN` overflows: it panics in debug builds and wraps in release.
pub trait Scalar: Copy + PartialEq + PartialOrd + Debug + Num + NumCast {
    /// Single-letter tag used by the bracketed `Display` format
    /// (`F`, `D`, `I`, `L`).
    const TAG: char;

    /// Smaller of two values. Never NaN-aware.
    #[inline]
    fn min_of(self, other: Self) -> Self {
        if other < self { other } else { self }
    }

    /// Larger of two values. Never NaN-aware.
    #[inline]
    fn max_of(self, other: Self) -> Self {
        if other > self { other } else { self }
    }

    /// Absolute value.
    ///
    /// # Panics
    ///
    /// On the integer `MIN` value in debug builds, like [`i32::abs`].
    #[inline]
    fn abs_of(self) -> Self {
        if self < Self::zero() { Self::zero() - self } else { self }
    }
}

/// Trait for floating-point elements.
///
/// Required by operations that need `sqrt`, `sin`, `acos`, etc.
/// (normalization, interpolation, rotations, inversion).
pub trait FloatScalar: Scalar + Float + RelativeEq<Epsilon = Self> {
    /// Default relative tolerance for [`AlmostEqualContext`](crate::AlmostEqualContext).
    const RELATIVE_EPSILON: Self;
    /// Default absolute tolerance for [`AlmostEqualContext`](crate::AlmostEqualContext).
    const ABSOLUTE_EPSILON: Self;

    /// `2` in this type, for half-angle and doubling formulas.
    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }
}

macro_rules! impl_scalar {
    ($($t:ty => $tag:literal),*) => {
        $(
            impl Scalar for $t {
                const TAG: char = $tag;
            }
        )*
    };
}

impl_scalar!(f32 => 'F', f64 => 'D', i32 => 'I', i64 => 'L');

macro_rules! impl_float_scalar {
    ($($t:ty => ($rel:expr, $abs:expr)),*) => {
        $(
            impl FloatScalar for $t {
                const RELATIVE_EPSILON: $t = $rel;
                const ABSOLUTE_EPSILON: $t = $abs;
            }
        )*
    };
}

impl_float_scalar!(f32 => (1.0e-5, 1.0e-6), f64 => (1.0e-10, 1.0e-12));
