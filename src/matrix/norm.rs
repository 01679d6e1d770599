use crate::traits::{FloatScalar, Scalar};

use super::{Matrix, MatrixError};

// ── Column norms ────────────────────────────────────────────────────

impl<T: FloatScalar> Matrix<T> {
    /// Euclidean norm of column `col`: `sqrt(Σ m[i][col]²)` over all
    /// rows. Panics on a ragged row too short to hold the column.
    ///
    /// ```
    /// use svdkit::Matrix;
    /// let m = Matrix::from([[3.0_f64], [4.0]]);
    /// assert!((m.column_norm(0) - 5.0).abs() < 1e-12);
    /// ```
    pub fn column_norm(&self, col: usize) -> T {
        let mut sum = T::zero();
        for row in &self.rows {
            sum = sum + row[col] * row[col];
        }
        sum.sqrt()
    }

    /// New matrix with every column divided by that column's Euclidean
    /// norm, producing unit column vectors.
    ///
    /// A zero-norm column is the caller's responsibility to avoid; the
    /// division follows IEEE semantics (inf/nan) rather than being
    /// checked.
    ///
    /// ```
    /// use svdkit::Matrix;
    /// let m = Matrix::from([[3.0_f64], [4.0]]);
    /// let u = m.normalized_columns();
    /// assert!((u.column_norm(0) - 1.0).abs() < 1e-12);
    /// assert!((u[0][0] - 0.6).abs() < 1e-12);
    /// ```
    pub fn normalized_columns(&self) -> Self {
        let mut res = Matrix::fill(self.nrows(), self.ncols(), T::zero());
        for j in 0..self.ncols() {
            let coef = self.column_norm(j);
            for i in 0..self.nrows() {
                res.rows[i][j] = self.rows[i][j] / coef;
            }
        }
        res
    }
}

// ── Column-vector dot product ───────────────────────────────────────

/// Dot product of two column vectors.
///
/// Both operands must be single-column matrices (first row of length 1)
/// with equal row counts; fails with [`MatrixError::InvalidOperand`]
/// otherwise.
///
/// ```
/// use svdkit::{column_dot, Matrix};
/// let a = Matrix::from([[1.0_f64], [2.0], [3.0]]);
/// let b = Matrix::from([[4.0_f64], [5.0], [6.0]]);
/// assert_eq!(column_dot(&a, &b), Ok(32.0));
/// ```
pub fn column_dot<T: Scalar>(lhs: &Matrix<T>, rhs: &Matrix<T>) -> Result<T, MatrixError> {
    if lhs.ncols() != 1 || rhs.ncols() != 1 || lhs.nrows() != rhs.nrows() {
        return Err(MatrixError::InvalidOperand);
    }
    let mut sum = T::zero();
    for i in 0..lhs.nrows() {
        sum = sum + lhs.rows[i][0] * rhs.rows[i][0];
    }
    Ok(sum)
}
