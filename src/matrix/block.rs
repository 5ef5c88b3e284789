use crate::traits::Scalar;
use crate::Matrix;

impl<T: Scalar, const M: usize, const N: usize> Matrix<T, M, N> {
    /// Copy out the `P×Q` block whose top-left element is `(row, col)`.
    ///
    /// Panics if the block extends past the matrix.
    ///
    /// ```
    /// use quatrix::{Matrix2, Matrix3};
    /// let m = Matrix3::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
    /// let b: Matrix2<f64> = m.block(1, 1);
    /// assert_eq!(b, Matrix2::new([[5.0, 6.0], [8.0, 9.0]]));
    /// ```
    pub fn block<const P: usize, const Q: usize>(&self, row: usize, col: usize) -> Matrix<T, P, Q> {
        assert!(
            row + P <= M && col + Q <= N,
            "block at ({row}, {col}) of size {P}x{Q} out of range for {M}x{N} matrix"
        );
        let mut out = Matrix::<T, P, Q>::zeros();
        for (dst, src) in out.data.iter_mut().zip(&self.data[col..col + Q]) {
            dst.copy_from_slice(&src[row..row + P]);
        }
        out
    }

    /// Overwrite the block whose top-left element is `(row, col)` with `src`.
    ///
    /// Panics if the block extends past the matrix.
    pub fn set_block<const P: usize, const Q: usize>(
        &mut self,
        row: usize,
        col: usize,
        src: &Matrix<T, P, Q>,
    ) -> &mut Self {
        assert!(
            row + P <= M && col + Q <= N,
            "block at ({row}, {col}) of size {P}x{Q} out of range for {M}x{N} matrix"
        );
        for (dst, column) in self.data[col..col + Q].iter_mut().zip(src.data.iter()) {
            dst[row..row + P].copy_from_slice(column);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::{Matrix2, Matrix3, Matrix4};

    #[test]
    fn block_extract() {
        let m = Matrix4::from_fn(|i, j| (i * 4 + j) as i32);
        let b: Matrix2<i32> = m.block(1, 2);
        assert_eq!(b, Matrix2::new([[6, 7], [10, 11]]));

        let row: Matrix<i32, 1, 4> = m.block(3, 0);
        assert_eq!(row, Matrix::new([[12, 13, 14, 15]]));
    }

    #[test]
    fn block_whole_matrix() {
        let m = Matrix3::new([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
        assert_eq!(m.block::<3, 3>(0, 0), m);
    }

    #[test]
    fn set_block_roundtrip() {
        let mut m = Matrix4::<f64>::zeros();
        let patch = Matrix2::new([[1.0, 2.0], [3.0, 4.0]]);
        m.set_block(2, 1, &patch);
        assert_eq!(m[(2, 1)], 1.0);
        assert_eq!(m[(3, 2)], 4.0);
        assert_eq!(m[(1, 1)], 0.0);
        assert_eq!(m.block::<2, 2>(2, 1), patch);
    }

    #[test]
    fn set_block_chains() {
        let mut m = Matrix3::<i64>::zeros();
        m.set_block(0, 0, &Matrix::new([[1]]))
            .set_block(2, 2, &Matrix::new([[9]]));
        assert_eq!(m.trace(), 10);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn block_out_of_range_panics() {
        let m = Matrix3::<f64>::eye();
        let _: Matrix2<f64> = m.block(2, 0);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn set_block_out_of_range_panics() {
        let mut m = Matrix3::<f64>::eye();
        m.set_block(0, 2, &Matrix2::<f64>::eye());
    }
}
