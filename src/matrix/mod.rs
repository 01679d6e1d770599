pub mod aliases;
mod norm;
mod ops;

pub use norm::column_dot;

use alloc::vec;
use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

use crate::traits::Scalar;

/// Error raised by matrix arithmetic and the SVD engine.
///
/// Returned by the fallible `try_*` arithmetic methods, [`column_dot`],
/// and everything in [`crate::svd`] that builds on them. The operator
/// impls (`+`, `*`, `+=`, ...) panic with this error's message instead.
///
/// ```
/// use svdkit::{Matrix, MatrixError};
///
/// let mut empty = Matrix::<f64>::new();
/// assert_eq!(empty.try_scale(2.0), Err(MatrixError::InvalidOperand));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// Operand shapes or emptiness make the operation undefined.
    InvalidOperand,
}

impl core::fmt::Display for MatrixError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MatrixError::InvalidOperand => write!(f, "invalid operand for matrix arithmetic"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MatrixError {}

/// Dense row-oriented matrix with tolerated raggedness.
///
/// Owns a sequence of numeric rows (`Vec<Vec<T>>`). The shape is
/// *nominally* rectangular but not enforced: individual rows may have
/// different lengths. [`ncols`](Matrix::ncols) reports the length of the
/// first row, [`is_rectangular`](Matrix::is_rectangular) tells whether
/// every row actually matches it. Operations that require a rectangular
/// shape (multiplication, norms, normalization) assume it and panic on
/// rows that are too short; element-wise addition instead truncates to
/// the shorter row.
///
/// # Examples
///
/// ```
/// use svdkit::Matrix;
///
/// let a = Matrix::from([[1.0_f64, 2.0], [3.0, 4.0]]);
/// assert_eq!(a[0][1], 2.0);
/// assert_eq!(a.nrows(), 2);
/// assert_eq!(a.ncols(), 2);
/// assert!(a.is_rectangular());
///
/// let b = &a * &a.transpose();
/// assert_eq!(b[0][0], 5.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Matrix<T> {
    pub(crate) rows: Vec<Vec<T>>,
}

// ── Constructors ────────────────────────────────────────────────────

impl<T> Matrix<T> {
    /// Create a matrix with no rows.
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Create a matrix of `n` zero-length rows.
    ///
    /// ```
    /// use svdkit::Matrix;
    /// let m = Matrix::<f64>::with_rows(5);
    /// assert_eq!(m.nrows(), 5);
    /// assert_eq!(m.ncols(), 0);
    /// assert!(m.is_empty());
    /// ```
    pub fn with_rows(n: usize) -> Self {
        let mut rows = Vec::with_capacity(n);
        rows.resize_with(n, Vec::new);
        Self { rows }
    }

    /// Adopt rows verbatim, raggedness included.
    ///
    /// ```
    /// use svdkit::Matrix;
    /// let m = Matrix::from_rows(vec![vec![1, 2, 3], vec![4]]);
    /// assert_eq!(m.nrows(), 2);
    /// assert_eq!(m.ncols(), 3);
    /// assert!(!m.is_rectangular());
    /// ```
    pub fn from_rows(rows: Vec<Vec<T>>) -> Self {
        Self { rows }
    }
}

impl<T: Scalar> Matrix<T> {
    /// Create an `nrows x ncols` matrix filled with `value`.
    ///
    /// ```
    /// use svdkit::Matrix;
    /// let m = Matrix::fill(3, 4, 5);
    /// assert_eq!(m.ncols(), 4);
    /// assert_eq!(m.nrows(), 3);
    /// assert_eq!(m.size(), 12);
    /// assert_eq!(m[2][3], 5);
    /// ```
    pub fn fill(nrows: usize, ncols: usize, value: T) -> Self {
        Self {
            rows: vec![vec![value; ncols]; nrows],
        }
    }
}

impl<T> From<Vec<Vec<T>>> for Matrix<T> {
    fn from(rows: Vec<Vec<T>>) -> Self {
        Self::from_rows(rows)
    }
}

impl<T: Scalar, const M: usize, const N: usize> From<[[T; N]; M]> for Matrix<T> {
    /// Build from a rectangular array literal.
    ///
    /// ```
    /// use svdkit::Matrix;
    /// let m = Matrix::from([[1, 2], [3, 4]]);
    /// assert_eq!(m[1][0], 3);
    /// ```
    fn from(rows: [[T; N]; M]) -> Self {
        Self {
            rows: rows.iter().map(|row| row.to_vec()).collect(),
        }
    }
}

// ── Shape queries ───────────────────────────────────────────────────

impl<T> Matrix<T> {
    /// Nominal column count: the length of the first row (0 if no rows).
    #[inline]
    pub fn ncols(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Row count.
    #[inline]
    pub fn nrows(&self) -> usize {
        self.rows.len()
    }

    /// Nominal element capacity: `nrows() * ncols()`.
    #[inline]
    pub fn size(&self) -> usize {
        self.nrows() * self.ncols()
    }

    /// True element count: the sum of actual row lengths.
    ///
    /// Equals [`size`](Matrix::size) iff the matrix
    /// [`is_rectangular`](Matrix::is_rectangular).
    pub fn actual_size(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// Whether the matrix is non-empty and truly rectangular: at least
    /// one row, and every row as long as the first.
    pub fn is_rectangular(&self) -> bool {
        let ncols = self.ncols();
        ncols != 0 && self.rows.iter().all(|row| row.len() == ncols)
    }

    /// Whether every row has zero length (including the zero-row case).
    ///
    /// An empty matrix is rejected by all arithmetic.
    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(Vec::is_empty)
    }
}

// ── Row access ──────────────────────────────────────────────────────

impl<T> Matrix<T> {
    /// Row `i`, or `None` when out of range.
    pub fn row(&self, i: usize) -> Option<&[T]> {
        self.rows.get(i).map(Vec::as_slice)
    }

    /// First row. Panics if the matrix has no rows.
    pub fn first_row(&self) -> &[T] {
        &self.rows[0]
    }

    /// Last row. Panics if the matrix has no rows.
    pub fn last_row(&self) -> &[T] {
        &self.rows[self.rows.len() - 1]
    }

    /// Exchange the contents of two matrices in O(1).
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(&mut self.rows, &mut other.rows);
    }
}

impl<T> Index<usize> for Matrix<T> {
    type Output = Vec<T>;

    #[inline]
    fn index(&self, row: usize) -> &Vec<T> {
        &self.rows[row]
    }
}

impl<T> IndexMut<usize> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, row: usize) -> &mut Vec<T> {
        &mut self.rows[row]
    }
}

// ── Mutation ────────────────────────────────────────────────────────

impl<T> Matrix<T> {
    /// Append a row. Zero-length rows are silently dropped.
    ///
    /// ```
    /// use svdkit::Matrix;
    /// let mut m = Matrix::new();
    /// m.push_row(vec![1, 2]);
    /// m.push_row(vec![]);
    /// assert_eq!(m.nrows(), 1);
    /// ```
    pub fn push_row(&mut self, row: Vec<T>) {
        if !row.is_empty() {
            self.rows.push(row);
        }
    }

    /// Append every non-empty row of `other`, preserving order.
    pub fn push_rows(&mut self, other: Matrix<T>) {
        for row in other.rows {
            self.push_row(row);
        }
    }

    /// Horizontal concatenation: grow the row count to the larger of the
    /// two operands, then append row `i` of `other` to the end of own
    /// row `i`. Own rows with no counterpart in `other` are unchanged.
    ///
    /// ```
    /// use svdkit::Matrix;
    /// let mut m = Matrix::from([[1, 2], [3, 4]]);
    /// m.push_cols(Matrix::from([[5], [6]]));
    /// assert_eq!(m[0], vec![1, 2, 5]);
    /// assert_eq!(m[1], vec![3, 4, 6]);
    /// ```
    pub fn push_cols(&mut self, other: Matrix<T>) {
        if other.nrows() > self.nrows() {
            self.rows.resize_with(other.nrows(), Vec::new);
        }
        for (own, extra) in self.rows.iter_mut().zip(other.rows) {
            own.extend(extra);
        }
    }

    /// Remove the last row, if any.
    pub fn pop_row(&mut self) {
        self.rows.pop();
    }

    /// Remove the last element of every non-empty row. Ragged-safe:
    /// each row shrinks independently, already-empty rows are left alone.
    pub fn pop_col(&mut self) {
        for row in &mut self.rows {
            row.pop();
        }
    }
}

// ── Display ─────────────────────────────────────────────────────────

impl<T: core::fmt::Display> core::fmt::Display for Matrix<T> {
    /// Elements separated by four spaces, rows by a newline, no trailing
    /// newline after the last row.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i != 0 {
                writeln!(f)?;
            }
            for (j, x) in row.iter().enumerate() {
                if j != 0 {
                    write!(f, "    ")?;
                }
                write!(f, "{}", x)?;
            }
        }
        Ok(())
    }
}
