use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::traits::Scalar;
use super::Vector;

// ── Component-wise addition / subtraction ───────────────────────────

impl<T: Scalar, const N: usize> Add for Vector<T, N> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.zip_map(&rhs, |a, b| a + b)
    }
}

impl<T: Scalar, const N: usize> AddAssign for Vector<T, N> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Scalar, const N: usize> Sub for Vector<T, N> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.zip_map(&rhs, |a, b| a - b)
    }
}

impl<T: Scalar, const N: usize> SubAssign for Vector<T, N> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Scalar, const N: usize> Neg for Vector<T, N> {
    type Output = Self;

    /// Negate every component. Overflows (and panics in debug builds) on an
    /// integer `MIN` component, as primitive negation does.
    #[inline]
    fn neg(self) -> Self {
        self.map(|c| T::zero() - c)
    }
}

impl<T: Scalar, const N: usize> Neg for &Vector<T, N> {
    type Output = Vector<T, N>;

    #[inline]
    fn neg(self) -> Vector<T, N> {
        (*self).neg()
    }
}

// ── Scaling ─────────────────────────────────────────────────────────

impl<T: Scalar, const N: usize> Mul<T> for Vector<T, N> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self {
        self.map(|c| c * rhs)
    }
}

impl<T: Scalar, const N: usize> Mul<T> for &Vector<T, N> {
    type Output = Vector<T, N>;

    #[inline]
    fn mul(self, rhs: T) -> Vector<T, N> {
        (*self).mul(rhs)
    }
}

impl<T: Scalar, const N: usize> MulAssign<T> for Vector<T, N> {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

// ── Reference variants ──────────────────────────────────────────────
// Vector is Copy, so &Vector ops just deref and delegate.

macro_rules! forward_ref_binop {
    ($Op:ident, $method:ident) => {
        impl<T: Scalar, const N: usize> $Op<Vector<T, N>> for &Vector<T, N> {
            type Output = Vector<T, N>;
            #[inline]
            fn $method(self, rhs: Vector<T, N>) -> Vector<T, N> {
                (*self).$method(rhs)
            }
        }

        impl<T: Scalar, const N: usize> $Op<&Vector<T, N>> for Vector<T, N> {
            type Output = Vector<T, N>;
            #[inline]
            fn $method(self, rhs: &Vector<T, N>) -> Vector<T, N> {
                self.$method(*rhs)
            }
        }

        impl<T: Scalar, const N: usize> $Op<&Vector<T, N>> for &Vector<T, N> {
            type Output = Vector<T, N>;
            #[inline]
            fn $method(self, rhs: &Vector<T, N>) -> Vector<T, N> {
                (*self).$method(*rhs)
            }
        }
    };
}

forward_ref_binop!(Add, add);
forward_ref_binop!(Sub, sub);

impl<T: Scalar, const N: usize> AddAssign<&Vector<T, N>> for Vector<T, N> {
    #[inline]
    fn add_assign(&mut self, rhs: &Vector<T, N>) {
        self.add_assign(*rhs);
    }
}

impl<T: Scalar, const N: usize> SubAssign<&Vector<T, N>> for Vector<T, N> {
    #[inline]
    fn sub_assign(&mut self, rhs: &Vector<T, N>) {
        self.sub_assign(*rhs);
    }
}

// ── scalar * vector (concrete impls to avoid orphan rules) ──────────

macro_rules! impl_scalar_mul {
    ($($t:ty),*) => {
        $(
            impl<const N: usize> Mul<Vector<$t, N>> for $t {
                type Output = Vector<$t, N>;

                #[inline]
                fn mul(self, rhs: Vector<$t, N>) -> Vector<$t, N> {
                    rhs * self
                }
            }

            impl<const N: usize> Mul<&Vector<$t, N>> for $t {
                type Output = Vector<$t, N>;

                #[inline]
                fn mul(self, rhs: &Vector<$t, N>) -> Vector<$t, N> {
                    *rhs * self
                }
            }
        )*
    };
}

impl_scalar_mul!(f32, f64, i32, i64);
