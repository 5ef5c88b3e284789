pub(crate) mod gauss_jordan;

/// Errors from range-checked access, row operations and inversion.
///
/// Range errors mean the caller passed an index outside `[0, bound)`.
/// `Singular` is an expected, recoverable outcome of inverting a matrix
/// with zero determinant.
///
/// ```
/// use quatrix::{Matrix2, linalg::LinalgError};
///
/// let singular = Matrix2::new([[1.0_f64, 2.0], [2.0, 4.0]]);
/// assert_eq!(singular.inverse().unwrap_err(), LinalgError::Singular);
///
/// let m = Matrix2::<f64>::eye();
/// assert_eq!(
///     m.exchange_rows(0, 2).unwrap_err(),
///     LinalgError::RowOutOfRange { row: 2, rows: 2 },
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinalgError {
    /// Matrix is singular.
    Singular,
    /// Row index outside `[0, rows)`.
    RowOutOfRange { row: usize, rows: usize },
    /// Column index outside `[0, cols)`.
    ColumnOutOfRange { col: usize, cols: usize },
    /// Vector component index outside `[0, len)`.
    ComponentOutOfRange { index: usize, len: usize },
}

impl core::fmt::Display for LinalgError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LinalgError::Singular => write!(f, "matrix is singular"),
            LinalgError::RowOutOfRange { row, rows } => {
                write!(f, "row {row} out of range for matrix with {rows} rows")
            }
            LinalgError::ColumnOutOfRange { col, cols } => {
                write!(f, "column {col} out of range for matrix with {cols} columns")
            }
            LinalgError::ComponentOutOfRange { index, len } => {
                write!(f, "component {index} out of range for vector of length {len}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LinalgError {}

#[inline]
pub(crate) fn check_row(row: usize, rows: usize) -> Result<(), LinalgError> {
    if row < rows {
        Ok(())
    } else {
        Err(LinalgError::RowOutOfRange { row, rows })
    }
}

#[inline]
pub(crate) fn check_col(col: usize, cols: usize) -> Result<(), LinalgError> {
    if col < cols {
        Ok(())
    } else {
        Err(LinalgError::ColumnOutOfRange { col, cols })
    }
}
