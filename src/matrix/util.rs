use core::fmt;

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::traits::Scalar;
use crate::Matrix;

// ── Constructors ────────────────────────────────────────────────────

impl<T, const M: usize, const N: usize> Matrix<T, M, N> {
    /// Create a matrix by calling `f(row, col)` for each element.
    ///
    /// ```
    /// use quatrix::Matrix;
    /// let m: Matrix<f64, 3, 3> = Matrix::from_fn(|i, j| {
    ///     if i == j { 1.0 } else { 0.0 }
    /// });
    /// assert_eq!(m, Matrix::eye());
    /// ```
    pub fn from_fn(f: impl Fn(usize, usize) -> T) -> Self
    where
        T: Copy + Default,
    {
        let mut data = [[T::default(); M]; N];
        for (j, column) in data.iter_mut().enumerate() {
            for (i, slot) in column.iter_mut().enumerate() {
                *slot = f(i, j);
            }
        }
        Self { data }
    }

    /// Apply a function to every element, producing a new matrix.
    ///
    /// ```
    /// use quatrix::Matrix;
    /// let m = Matrix::new([[1.0_f64, 4.0], [9.0, 16.0]]);
    /// let r = m.map(|x: f64| x.sqrt());
    /// assert_eq!(r, Matrix::new([[1.0, 2.0], [3.0, 4.0]]));
    /// ```
    pub fn map<U>(&self, f: impl Fn(T) -> U) -> Matrix<U, M, N>
    where
        T: Copy,
    {
        Matrix {
            data: self.data.map(|column| column.map(&f)),
        }
    }
}

// ── Element-wise operations ─────────────────────────────────────────

impl<T: Scalar, const M: usize, const N: usize> Matrix<T, M, N> {
    /// Element-wise absolute value.
    ///
    /// ```
    /// use quatrix::Matrix;
    /// let m = Matrix::new([[1, -2], [-3, 4]]);
    /// assert_eq!(m.abs(), Matrix::new([[1, 2], [3, 4]]));
    /// ```
    pub fn abs(&self) -> Self {
        self.map(|x| x.abs_of())
    }
}

// ── Approximate equality ────────────────────────────────────────────

impl<T, const M: usize, const N: usize> AbsDiffEq for Matrix<T, M, N>
where
    T: AbsDiffEq<Epsilon = T> + Copy,
{
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.data
            .iter()
            .flatten()
            .zip(other.data.iter().flatten())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T, const M: usize, const N: usize> RelativeEq for Matrix<T, M, N>
where
    T: RelativeEq<Epsilon = T> + Copy,
{
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.data
            .iter()
            .flatten()
            .zip(other.data.iter().flatten())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<T, const M: usize, const N: usize> UlpsEq for Matrix<T, M, N>
where
    T: UlpsEq<Epsilon = T> + Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: T, max_ulps: u32) -> bool {
        self.data
            .iter()
            .flatten()
            .zip(other.data.iter().flatten())
            .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}

// ── Display ─────────────────────────────────────────────────────────

impl<T: Scalar, const M: usize, const N: usize> fmt::Display for Matrix<T, M, N> {
    /// `[MatrixI{M}x{N}{tag} [r0c0 r0c1] [r1c0 r1c1]]`, rows in order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[MatrixI{}x{}{}", M, N, T::TAG)?;
        for i in 0..M {
            write!(f, " [")?;
            for j in 0..N {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:?}", self.data[j][i])?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}
