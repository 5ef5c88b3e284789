pub mod aliases;
mod block;
mod ops;
mod rows;
mod square;
mod transform;
mod util;

use core::ops::{Index, IndexMut};

use crate::linalg::{check_col, check_row, LinalgError};
use crate::traits::Scalar;
use crate::vector::Vector;

/// Fixed-size matrix with `M` rows and `N` columns.
///
/// Storage is column-major: `data[col][row]`. Every public accessor is
/// addressed `(row, col)` regardless. Stack-allocated, no-std compatible.
///
/// # Examples
///
/// ```
/// use quatrix::Matrix;
///
/// let a = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
/// assert_eq!(a[(0, 1)], 2.0);
/// assert_eq!(a.nrows(), 2);
/// assert_eq!(a.ncols(), 2);
///
/// let b: Matrix<f64, 3, 3> = Matrix::default();
/// assert_eq!(b, Matrix::eye());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Matrix<T, const M: usize, const N: usize> {
    pub(crate) data: [[T; M]; N],
}

impl<T, const M: usize, const N: usize> Matrix<T, M, N> {
    /// Create a matrix from a row-major 2D array.
    ///
    /// The input is `[[row0], [row1], ...]` (M arrays of N elements each).
    /// Internally transposed to column-major storage.
    #[inline]
    pub fn new(rows: [[T; N]; M]) -> Self
    where
        T: Copy,
    {
        let init = rows[0][0];
        let mut data: [[T; M]; N] = [[init; M]; N];
        for (col, column) in data.iter_mut().enumerate() {
            for (row, slot) in column.iter_mut().enumerate() {
                *slot = rows[row][col];
            }
        }
        Self { data }
    }

    /// Number of rows.
    #[inline]
    pub const fn nrows(&self) -> usize {
        M
    }

    /// Number of columns.
    #[inline]
    pub const fn ncols(&self) -> usize {
        N
    }
}

impl<T: Scalar, const M: usize, const N: usize> Matrix<T, M, N> {
    /// Create a matrix filled with zeros.
    pub fn zeros() -> Self {
        Self {
            data: [[T::zero(); M]; N],
        }
    }

    /// Create a matrix from row vectors.
    pub fn from_rows(rows: &[Vector<T, N>; M]) -> Self {
        let mut m = Self::zeros();
        for (i, r) in rows.iter().enumerate() {
            m.set_row(i, r);
        }
        m
    }

    /// Overwrite every element with zero.
    pub fn set_zero(&mut self) -> &mut Self {
        *self = Self::zeros();
        self
    }

    /// Range-checked element read at `(row, col)`.
    #[must_use = "the range check result must be inspected"]
    pub fn try_get(&self, row: usize, col: usize) -> Result<T, LinalgError> {
        check_row(row, M)?;
        check_col(col, N)?;
        Ok(self.data[col][row])
    }

    /// Range-checked element write at `(row, col)`.
    #[must_use = "the range check result must be inspected"]
    pub fn try_set(&mut self, row: usize, col: usize, value: T) -> Result<&mut Self, LinalgError> {
        check_row(row, M)?;
        check_col(col, N)?;
        self.data[col][row] = value;
        Ok(self)
    }
}

impl<T: Scalar, const N: usize> Matrix<T, N, N> {
    /// Create an identity matrix (square matrices only).
    pub fn eye() -> Self {
        let mut m = Self::zeros();
        for i in 0..N {
            m.data[i][i] = T::one();
        }
        m
    }

    /// Overwrite with the identity matrix.
    pub fn set_identity(&mut self) -> &mut Self {
        *self = Self::eye();
        self
    }
}

impl<T: Scalar, const N: usize> Default for Matrix<T, N, N> {
    /// The identity matrix.
    fn default() -> Self {
        Self::eye()
    }
}

// Labelled element accessors, `r{row}c{col}` and `set_r{row}c{col}`.
macro_rules! impl_element_accessors {
    ($n:literal; $($get:ident, $set:ident => ($row:literal, $col:literal)),* $(,)?) => {
        impl<T: Scalar> Matrix<T, $n, $n> {
            $(
                #[inline]
                pub fn $get(&self) -> T {
                    self.data[$col][$row]
                }

                #[inline]
                pub fn $set(&mut self, value: T) -> &mut Self {
                    self.data[$col][$row] = value;
                    self
                }
            )*
        }
    };
}

impl_element_accessors!(2;
    r0c0, set_r0c0 => (0, 0), r0c1, set_r0c1 => (0, 1),
    r1c0, set_r1c0 => (1, 0), r1c1, set_r1c1 => (1, 1),
);
impl_element_accessors!(3;
    r0c0, set_r0c0 => (0, 0), r0c1, set_r0c1 => (0, 1), r0c2, set_r0c2 => (0, 2),
    r1c0, set_r1c0 => (1, 0), r1c1, set_r1c1 => (1, 1), r1c2, set_r1c2 => (1, 2),
    r2c0, set_r2c0 => (2, 0), r2c1, set_r2c1 => (2, 1), r2c2, set_r2c2 => (2, 2),
);
impl_element_accessors!(4;
    r0c0, set_r0c0 => (0, 0), r0c1, set_r0c1 => (0, 1), r0c2, set_r0c2 => (0, 2), r0c3, set_r0c3 => (0, 3),
    r1c0, set_r1c0 => (1, 0), r1c1, set_r1c1 => (1, 1), r1c2, set_r1c2 => (1, 2), r1c3, set_r1c3 => (1, 3),
    r2c0, set_r2c0 => (2, 0), r2c1, set_r2c1 => (2, 1), r2c2, set_r2c2 => (2, 2), r2c3, set_r2c3 => (2, 3),
    r3c0, set_r3c0 => (3, 0), r3c1, set_r3c1 => (3, 1), r3c2, set_r3c2 => (3, 2), r3c3, set_r3c3 => (3, 3),
);

// Index by (row, col) tuple
impl<T, const M: usize, const N: usize> Index<(usize, usize)> for Matrix<T, M, N> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < M && col < N,
            "index ({row}, {col}) out of range for {M}x{N} matrix"
        );
        &self.data[col][row]
    }
}

impl<T, const M: usize, const N: usize> IndexMut<(usize, usize)> for Matrix<T, M, N> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(
            row < M && col < N,
            "index ({row}, {col}) out of range for {M}x{N} matrix"
        );
        &mut self.data[col][row]
    }
}

pub use aliases::*;
