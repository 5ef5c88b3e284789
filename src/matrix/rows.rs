//! Row and column access, and the elementary row operations.
//!
//! The row operations are the building blocks of Gauss-Jordan elimination.
//! Each checks every index argument independently and leaves the matrix
//! untouched when any of them is out of range.

use crate::linalg::{check_col, check_row, LinalgError};
use crate::traits::Scalar;
use crate::vector::Vector;
use crate::Matrix;

// ── Row / Column access ─────────────────────────────────────────────

impl<T: Scalar, const M: usize, const N: usize> Matrix<T, M, N> {
    /// Extract row `i` as a vector. Panics if `i >= M`.
    ///
    /// ```
    /// use quatrix::{Matrix, Vector2};
    /// let m = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
    /// assert_eq!(m.row(0), Vector2::new(1.0, 2.0));
    /// ```
    pub fn row(&self, i: usize) -> Vector<T, N> {
        assert!(i < M, "row {i} out of range for {M}x{N} matrix");
        let mut v = Vector::zeros();
        for (slot, column) in v.data.iter_mut().zip(self.data.iter()) {
            *slot = column[i];
        }
        v
    }

    /// Set row `i` from a vector. Panics if `i >= M`.
    pub fn set_row(&mut self, i: usize, v: &Vector<T, N>) -> &mut Self {
        assert!(i < M, "row {i} out of range for {M}x{N} matrix");
        for (column, &x) in self.data.iter_mut().zip(v.iter()) {
            column[i] = x;
        }
        self
    }

    /// Extract column `j` as a vector. Panics if `j >= N`.
    ///
    /// ```
    /// use quatrix::{Matrix, Vector2};
    /// let m = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
    /// assert_eq!(m.col(1), Vector2::new(2.0, 4.0));
    /// ```
    pub fn col(&self, j: usize) -> Vector<T, M> {
        assert!(j < N, "column {j} out of range for {M}x{N} matrix");
        Vector::from_array(self.data[j])
    }

    /// Set column `j` from a vector. Panics if `j >= N`.
    pub fn set_col(&mut self, j: usize, v: &Vector<T, M>) -> &mut Self {
        assert!(j < N, "column {j} out of range for {M}x{N} matrix");
        self.data[j] = v.data;
        self
    }

    /// Range-checked [`row`](Self::row).
    #[must_use = "the range check result must be inspected"]
    pub fn try_row(&self, i: usize) -> Result<Vector<T, N>, LinalgError> {
        check_row(i, M)?;
        Ok(self.row(i))
    }

    /// Range-checked [`col`](Self::col).
    #[must_use = "the range check result must be inspected"]
    pub fn try_col(&self, j: usize) -> Result<Vector<T, M>, LinalgError> {
        check_col(j, N)?;
        Ok(self.col(j))
    }

    /// Range-checked [`set_row`](Self::set_row).
    #[must_use = "the range check result must be inspected"]
    pub fn try_set_row(&mut self, i: usize, v: &Vector<T, N>) -> Result<&mut Self, LinalgError> {
        check_row(i, M)?;
        Ok(self.set_row(i, v))
    }
}

// ── Elementary row operations ───────────────────────────────────────

impl<T: Scalar, const M: usize, const N: usize> Matrix<T, M, N> {
    /// Swap rows `a` and `b` in place.
    #[must_use = "the range check result must be inspected"]
    pub fn exchange_rows_in_place(&mut self, a: usize, b: usize) -> Result<&mut Self, LinalgError> {
        check_row(a, M)?;
        check_row(b, M)?;
        if a != b {
            for column in self.data.iter_mut() {
                column.swap(a, b);
            }
        }
        Ok(self)
    }

    /// Copy of `self` with rows `a` and `b` swapped.
    ///
    /// ```
    /// use quatrix::Matrix2;
    /// let m = Matrix2::new([[1.0, 2.0], [3.0, 4.0]]);
    /// assert_eq!(m.exchange_rows(0, 1), Ok(Matrix2::new([[3.0, 4.0], [1.0, 2.0]])));
    /// ```
    #[must_use = "the range check result must be inspected"]
    pub fn exchange_rows(&self, a: usize, b: usize) -> Result<Self, LinalgError> {
        let mut out = *self;
        out.exchange_rows_in_place(a, b)?;
        Ok(out)
    }

    /// Multiply every element of row `row` by `k`, in place.
    #[must_use = "the range check result must be inspected"]
    pub fn scale_row_in_place(&mut self, row: usize, k: T) -> Result<&mut Self, LinalgError> {
        check_row(row, M)?;
        for column in self.data.iter_mut() {
            column[row] = column[row] * k;
        }
        Ok(self)
    }

    /// Copy of `self` with row `row` multiplied by `k`.
    #[must_use = "the range check result must be inspected"]
    pub fn scale_row(&self, row: usize, k: T) -> Result<Self, LinalgError> {
        let mut out = *self;
        out.scale_row_in_place(row, k)?;
        Ok(out)
    }

    /// `row[dst] = row[a] + row[b] * k`, in place.
    ///
    /// `dst` may equal `a` or `b`; both source rows are read before the
    /// destination is written.
    #[must_use = "the range check result must be inspected"]
    pub fn add_row_scaled_in_place(
        &mut self,
        a: usize,
        b: usize,
        dst: usize,
        k: T,
    ) -> Result<&mut Self, LinalgError> {
        check_row(a, M)?;
        check_row(b, M)?;
        check_row(dst, M)?;
        for column in self.data.iter_mut() {
            column[dst] = column[a] + column[b] * k;
        }
        Ok(self)
    }

    /// Copy of `self` with `row[dst] = row[a] + row[b] * k`.
    ///
    /// ```
    /// use quatrix::Matrix2;
    /// let m = Matrix2::new([[1.0, 2.0], [3.0, 4.0]]);
    /// let r = m.add_row_scaled(0, 1, 0, 2.0).unwrap();
    /// assert_eq!(r, Matrix2::new([[7.0, 10.0], [3.0, 4.0]]));
    /// ```
    #[must_use = "the range check result must be inspected"]
    pub fn add_row_scaled(&self, a: usize, b: usize, dst: usize, k: T) -> Result<Self, LinalgError> {
        let mut out = *self;
        out.add_row_scaled_in_place(a, b, dst, k)?;
        Ok(out)
    }
}
