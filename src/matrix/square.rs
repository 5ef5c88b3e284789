//! Square-matrix algebra: trace, determinants by cofactor expansion,
//! adjugates and adjugate inversion for the 2×2, 3×3 and 4×4 sizes.

use crate::almost::{almost_equal, AlmostEqualContext};
use crate::linalg::LinalgError;
use crate::matrix::Matrix2;
use crate::traits::{FloatScalar, Scalar};
use crate::Matrix;

impl<T: Scalar, const N: usize> Matrix<T, N, N> {
    /// Sum of diagonal elements.
    pub fn trace(&self) -> T {
        let mut sum = T::zero();
        for i in 0..N {
            sum = sum + self.data[i][i];
        }
        sum
    }
}

// ── Determinants ────────────────────────────────────────────────────

impl<T: Scalar> Matrix2<T> {
    /// `ad - bc`.
    #[inline]
    pub fn det(&self) -> T {
        self[(0, 0)] * self[(1, 1)] - self[(0, 1)] * self[(1, 0)]
    }

    /// The element left after deleting `row` and `col`.
    pub fn minor(&self, row: usize, col: usize) -> T {
        assert!(row < 2 && col < 2, "minor ({row}, {col}) out of range for 2x2 matrix");
        self[(1 - row, 1 - col)]
    }
}

// Larger sizes expand along the first row into the next size down.
macro_rules! impl_cofactor_expansion {
    ($n:literal => $sub:literal) => {
        impl<T: Scalar> Matrix<T, $n, $n> {
            /// The matrix left after deleting `row` and `col`.
            pub fn submatrix(&self, row: usize, col: usize) -> Matrix<T, $sub, $sub> {
                assert!(
                    row < $n && col < $n,
                    "submatrix ({row}, {col}) out of range for {}x{} matrix",
                    $n,
                    $n
                );
                let mut out = Matrix::<T, $sub, $sub>::zeros();
                for j in 0..$sub {
                    let src_col = if j < col { j } else { j + 1 };
                    for i in 0..$sub {
                        let src_row = if i < row { i } else { i + 1 };
                        out.data[j][i] = self.data[src_col][src_row];
                    }
                }
                out
            }

            /// Determinant of the submatrix left after deleting `row` and `col`.
            #[inline]
            pub fn minor(&self, row: usize, col: usize) -> T {
                self.submatrix(row, col).det()
            }

            /// Determinant by cofactor expansion along the first row.
            pub fn det(&self) -> T {
                let mut sum = T::zero();
                for j in 0..$n {
                    sum = sum + self.data[j][0] * self.cofactor(0, j);
                }
                sum
            }
        }
    };
}

impl_cofactor_expansion!(3 => 2);
impl_cofactor_expansion!(4 => 3);

// ── Adjugate and inversion ──────────────────────────────────────────

macro_rules! impl_adjugate_inverse {
    ($($n:literal),*) => {
        $(
            impl<T: Scalar> Matrix<T, $n, $n> {
                /// Signed minor: `(-1)^(row + col) * minor(row, col)`.
                #[inline]
                pub fn cofactor(&self, row: usize, col: usize) -> T {
                    let m = self.minor(row, col);
                    if (row + col) % 2 == 0 { m } else { T::zero() - m }
                }

                /// Transpose of the cofactor matrix.
                pub fn adjugate(&self) -> Self {
                    let mut out = Self::zeros();
                    for i in 0..$n {
                        for j in 0..$n {
                            out.data[i][j] = self.cofactor(i, j);
                        }
                    }
                    out
                }
            }

            impl<T: FloatScalar> Matrix<T, $n, $n> {
                /// Inverse as `adjugate / det`.
                ///
                /// Fails with [`LinalgError::Singular`] only when the determinant
                /// is exactly zero. Use
                /// [`inverse_with_tolerance`](Self::inverse_with_tolerance) to also
                /// reject nearly singular input.
                #[must_use = "inversion can fail on a singular matrix"]
                pub fn inverse(&self) -> Result<Self, LinalgError> {
                    let det = self.det();
                    if det == T::zero() {
                        trace_event!(size = $n, "inverting singular matrix");
                        return Err(LinalgError::Singular);
                    }
                    Ok(self.adjugate() * (T::one() / det))
                }

                /// Inverse that also fails when the determinant is almost
                /// equal to zero under `ctx`.
                #[must_use = "inversion can fail on a singular matrix"]
                pub fn inverse_with_tolerance(
                    &self,
                    ctx: &AlmostEqualContext<T>,
                ) -> Result<Self, LinalgError> {
                    let det = self.det();
                    if almost_equal(ctx, det, T::zero()) {
                        trace_event!(size = $n, det = ?det, "inverting nearly singular matrix");
                        return Err(LinalgError::Singular);
                    }
                    Ok(self.adjugate() * (T::one() / det))
                }

                /// Replace `self` with its inverse. On failure `self` is left as is.
                #[must_use = "inversion can fail on a singular matrix"]
                pub fn invert_in_place(&mut self) -> Result<&mut Self, LinalgError> {
                    *self = self.inverse()?;
                    Ok(self)
                }
            }
        )*
    };
}

impl_adjugate_inverse!(2, 3, 4);
