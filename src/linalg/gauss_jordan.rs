use crate::linalg::LinalgError;
use crate::traits::FloatScalar;
use crate::Matrix;

impl<T: FloatScalar, const N: usize> Matrix<T, N, N> {
    /// Inverse by Gauss-Jordan elimination with partial pivoting.
    ///
    /// Works for any square size. Every step is one of the elementary row
    /// operations ([`exchange_rows_in_place`](Self::exchange_rows_in_place),
    /// [`scale_row_in_place`](Self::scale_row_in_place),
    /// [`add_row_scaled_in_place`](Self::add_row_scaled_in_place)) applied to
    /// `self` and to an identity matrix in lockstep.
    ///
    /// Fails with [`LinalgError::Singular`] when a column has no nonzero
    /// pivot.
    ///
    /// ```
    /// use quatrix::{AlmostEqual, AlmostEqualContext, Matrix3};
    ///
    /// let m = Matrix3::new([[0.0, 2.0, 1.0], [1.0, 0.0, 0.0], [3.0, 1.0, 2.0]]);
    /// let inv = m.inverse_gauss_jordan().unwrap();
    /// let ctx = AlmostEqualContext::default();
    /// assert!((m * inv).almost_eq(&ctx, &Matrix3::eye()));
    /// assert!(inv.almost_eq(&ctx, &m.inverse().unwrap()));
    /// ```
    #[must_use = "inversion can fail on a singular matrix"]
    pub fn inverse_gauss_jordan(&self) -> Result<Self, LinalgError> {
        let mut a = *self;
        let mut inv = Self::eye();

        for col in 0..N {
            // Partial pivoting: largest magnitude at or below the diagonal
            let mut pivot_row = col;
            let mut max_val = a[(col, col)].abs();
            for row in (col + 1)..N {
                let val = a[(row, col)].abs();
                if val > max_val {
                    max_val = val;
                    pivot_row = row;
                }
            }

            if max_val == T::zero() {
                trace_event!(size = N, col, "no pivot in Gauss-Jordan elimination");
                return Err(LinalgError::Singular);
            }

            if pivot_row != col {
                a.exchange_rows_in_place(col, pivot_row)?;
                inv.exchange_rows_in_place(col, pivot_row)?;
            }

            let inv_pivot = T::one() / a[(col, col)];
            a.scale_row_in_place(col, inv_pivot)?;
            inv.scale_row_in_place(col, inv_pivot)?;

            for row in 0..N {
                if row == col {
                    continue;
                }
                let k = -a[(row, col)];
                if k != T::zero() {
                    a.add_row_scaled_in_place(row, col, row, k)?;
                    inv.add_row_scaled_in_place(row, col, row, k)?;
                }
            }
        }

        Ok(inv)
    }
}
