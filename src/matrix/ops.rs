use alloc::vec::Vec;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::traits::Scalar;

use super::{Matrix, MatrixError};

// ── Fallible arithmetic ─────────────────────────────────────────────
//
// These methods carry the failure contract; the operator impls below
// are thin panicking wrappers over them.

impl<T: Scalar> Matrix<T> {
    /// Add `rhs` to every actual element of every row.
    ///
    /// Fails with [`MatrixError::InvalidOperand`] when the matrix
    /// [`is_empty`](Matrix::is_empty).
    pub fn try_add_scalar(&mut self, rhs: T) -> Result<(), MatrixError> {
        if self.is_empty() {
            return Err(MatrixError::InvalidOperand);
        }
        for row in &mut self.rows {
            for x in row {
                *x = *x + rhs;
            }
        }
        Ok(())
    }

    /// Subtract `rhs` from every actual element (`self += -rhs`).
    pub fn try_sub_scalar(&mut self, rhs: T) -> Result<(), MatrixError> {
        self.try_add_scalar(T::zero() - rhs)
    }

    /// Multiply every actual element of every row by `rhs`.
    ///
    /// Fails with [`MatrixError::InvalidOperand`] when the matrix
    /// [`is_empty`](Matrix::is_empty).
    pub fn try_scale(&mut self, rhs: T) -> Result<(), MatrixError> {
        if self.is_empty() {
            return Err(MatrixError::InvalidOperand);
        }
        for row in &mut self.rows {
            for x in row {
                *x = *x * rhs;
            }
        }
        Ok(())
    }

    /// Divide every element by `rhs`, implemented as multiplication by
    /// the reciprocal `1/rhs`. For integral `T` the reciprocal truncates
    /// per the type's own arithmetic (a known numeric-precision caveat).
    pub fn try_div_scalar(&mut self, rhs: T) -> Result<(), MatrixError> {
        self.try_scale(T::one() / rhs)
    }

    /// Element-wise addition per corresponding row.
    ///
    /// Requires equal `ncols()` (non-zero) and equal `nrows()`; fails
    /// with [`MatrixError::InvalidOperand`] otherwise. Each row pair is
    /// added up to the shorter of the two actual lengths: mismatched
    /// ragged tails are silently ignored, and rows already processed
    /// stay modified if a later row is shorter (partial application is
    /// part of this path's contract).
    pub fn try_add_assign(&mut self, rhs: &Self) -> Result<(), MatrixError> {
        if self.ncols() != rhs.ncols() || self.nrows() != rhs.nrows() || self.ncols() == 0 {
            return Err(MatrixError::InvalidOperand);
        }
        for (own, other) in self.rows.iter_mut().zip(&rhs.rows) {
            let len = own.len().min(other.len());
            for j in 0..len {
                own[j] = own[j] + other[j];
            }
        }
        Ok(())
    }

    /// Element-wise subtraction: `self += -rhs`. Same contract as
    /// [`try_add_assign`](Matrix::try_add_assign).
    pub fn try_sub_assign(&mut self, rhs: &Self) -> Result<(), MatrixError> {
        self.try_add_assign(&rhs.clone().neg())
    }

    /// Dense matrix product with nominal shape
    /// `self.nrows() x rhs.ncols()`, accumulating from `T::zero()`.
    ///
    /// Requires `self.ncols() == rhs.nrows()` with both operands' column
    /// counts non-zero; fails with [`MatrixError::InvalidOperand`]
    /// otherwise. Panics if a ragged row is too short for the nominal
    /// shape.
    ///
    /// ```
    /// use svdkit::Matrix;
    /// let a = Matrix::from([[1, 2, 3], [4, 5, 6]]);
    /// let b = Matrix::from([[7, 8], [9, 10], [11, 12]]);
    /// let c = a.try_mul(&b).unwrap();
    /// assert_eq!(c, Matrix::from([[58, 64], [139, 154]]));
    /// ```
    pub fn try_mul(&self, rhs: &Self) -> Result<Self, MatrixError> {
        if self.ncols() != rhs.nrows() || self.ncols() == 0 || rhs.ncols() == 0 {
            return Err(MatrixError::InvalidOperand);
        }
        let m = self.nrows();
        let n = self.ncols();
        let p = rhs.ncols();
        let mut res = Matrix::fill(m, p, T::zero());
        for i in 0..m {
            for j in 0..p {
                let mut acc = T::zero();
                for k in 0..n {
                    acc = acc + self.rows[i][k] * rhs.rows[k][j];
                }
                res.rows[i][j] = acc;
            }
        }
        Ok(res)
    }

    /// In-place product: builds a fresh result and swaps it in only on
    /// success, so `self` is untouched when the operation fails.
    pub fn try_mul_assign(&mut self, rhs: &Self) -> Result<(), MatrixError> {
        let mut res = self.try_mul(rhs)?;
        self.swap(&mut res);
        Ok(())
    }

    /// Negate every element (`x -> 0 - x`). Infallible: a negated empty
    /// matrix is still empty.
    pub fn neg(mut self) -> Self {
        for row in &mut self.rows {
            for x in row {
                *x = T::zero() - *x;
            }
        }
        self
    }
}

// ── Transpose ───────────────────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Transpose: new row `i` collects element `i` of each original row,
    /// for `i` in `[0, ncols())`.
    ///
    /// Ragged rows missing element `i` contribute nothing, so ragged
    /// input transposes lossily; rectangular input round-trips exactly
    /// (`m.transpose().transpose() == m`).
    ///
    /// ```
    /// use svdkit::Matrix;
    /// let m = Matrix::from([[1, 2, 3], [4, 5, 6]]);
    /// assert_eq!(m.transpose(), Matrix::from([[1, 4], [2, 5], [3, 6]]));
    /// ```
    pub fn transpose(&self) -> Self {
        let mut res = Matrix::new();
        for i in 0..self.ncols() {
            let new_row: Vec<T> = self
                .rows
                .iter()
                .filter_map(|row| row.get(i).copied())
                .collect();
            res.push_row(new_row);
        }
        res
    }

    /// Consuming transpose with identical observable output.
    pub fn into_transpose(self) -> Self {
        self.transpose()
    }
}

// ── Element-wise addition ───────────────────────────────────────────

impl<T: Scalar> Add for Matrix<T> {
    type Output = Self;
    fn add(mut self, rhs: Self) -> Self {
        self.try_add_assign(&rhs).expect("matrix addition");
        self
    }
}

impl<T: Scalar> Add<&Matrix<T>> for Matrix<T> {
    type Output = Matrix<T>;
    fn add(mut self, rhs: &Matrix<T>) -> Matrix<T> {
        self.try_add_assign(rhs).expect("matrix addition");
        self
    }
}

impl<T: Scalar> Add<Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;
    fn add(self, rhs: Matrix<T>) -> Matrix<T> {
        // Not `rhs + self`: the receiver's row structure must win when
        // the operands are ragged.
        self.clone() + &rhs
    }
}

impl<T: Scalar> Add<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;
    fn add(self, rhs: &Matrix<T>) -> Matrix<T> {
        self.clone() + rhs
    }
}

impl<T: Scalar> Add<T> for Matrix<T> {
    type Output = Self;
    fn add(mut self, rhs: T) -> Self {
        self.try_add_scalar(rhs).expect("matrix-scalar addition");
        self
    }
}

impl<T: Scalar> AddAssign for Matrix<T> {
    fn add_assign(&mut self, rhs: Self) {
        self.try_add_assign(&rhs).expect("matrix addition");
    }
}

impl<T: Scalar> AddAssign<&Matrix<T>> for Matrix<T> {
    fn add_assign(&mut self, rhs: &Matrix<T>) {
        self.try_add_assign(rhs).expect("matrix addition");
    }
}

impl<T: Scalar> AddAssign<T> for Matrix<T> {
    fn add_assign(&mut self, rhs: T) {
        self.try_add_scalar(rhs).expect("matrix-scalar addition");
    }
}

// ── Element-wise subtraction ────────────────────────────────────────

impl<T: Scalar> Sub for Matrix<T> {
    type Output = Self;
    fn sub(mut self, rhs: Self) -> Self {
        self.try_sub_assign(&rhs).expect("matrix subtraction");
        self
    }
}

impl<T: Scalar> Sub<&Matrix<T>> for Matrix<T> {
    type Output = Matrix<T>;
    fn sub(mut self, rhs: &Matrix<T>) -> Matrix<T> {
        self.try_sub_assign(rhs).expect("matrix subtraction");
        self
    }
}

impl<T: Scalar> Sub<Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;
    fn sub(self, rhs: Matrix<T>) -> Matrix<T> {
        self.clone() - &rhs
    }
}

impl<T: Scalar> Sub<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;
    fn sub(self, rhs: &Matrix<T>) -> Matrix<T> {
        self.clone() - rhs
    }
}

impl<T: Scalar> Sub<T> for Matrix<T> {
    type Output = Self;
    fn sub(mut self, rhs: T) -> Self {
        self.try_sub_scalar(rhs).expect("matrix-scalar subtraction");
        self
    }
}

impl<T: Scalar> SubAssign for Matrix<T> {
    fn sub_assign(&mut self, rhs: Self) {
        self.try_sub_assign(&rhs).expect("matrix subtraction");
    }
}

impl<T: Scalar> SubAssign<&Matrix<T>> for Matrix<T> {
    fn sub_assign(&mut self, rhs: &Matrix<T>) {
        self.try_sub_assign(rhs).expect("matrix subtraction");
    }
}

impl<T: Scalar> SubAssign<T> for Matrix<T> {
    fn sub_assign(&mut self, rhs: T) {
        self.try_sub_scalar(rhs).expect("matrix-scalar subtraction");
    }
}

// ── Negation ────────────────────────────────────────────────────────

impl<T: Scalar> Neg for Matrix<T> {
    type Output = Self;
    fn neg(self) -> Self {
        Matrix::neg(self)
    }
}

impl<T: Scalar> Neg for &Matrix<T> {
    type Output = Matrix<T>;
    fn neg(self) -> Matrix<T> {
        self.clone().neg()
    }
}

// ── Matrix multiplication ───────────────────────────────────────────

impl<T: Scalar> Mul for Matrix<T> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        (&self).mul(&rhs)
    }
}

impl<T: Scalar> Mul<&Matrix<T>> for Matrix<T> {
    type Output = Matrix<T>;
    fn mul(self, rhs: &Matrix<T>) -> Matrix<T> {
        (&self).mul(rhs)
    }
}

impl<T: Scalar> Mul<Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;
    fn mul(self, rhs: Matrix<T>) -> Matrix<T> {
        self.mul(&rhs)
    }
}

impl<T: Scalar> Mul<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;
    fn mul(self, rhs: &Matrix<T>) -> Matrix<T> {
        self.try_mul(rhs).expect("matrix multiplication")
    }
}

impl<T: Scalar> MulAssign for Matrix<T> {
    fn mul_assign(&mut self, rhs: Self) {
        self.try_mul_assign(&rhs).expect("matrix multiplication");
    }
}

impl<T: Scalar> MulAssign<&Matrix<T>> for Matrix<T> {
    fn mul_assign(&mut self, rhs: &Matrix<T>) {
        self.try_mul_assign(rhs).expect("matrix multiplication");
    }
}

// ── Scalar multiplication and division ──────────────────────────────

impl<T: Scalar> Mul<T> for Matrix<T> {
    type Output = Self;
    fn mul(mut self, rhs: T) -> Self {
        self.try_scale(rhs).expect("matrix-scalar multiplication");
        self
    }
}

impl<T: Scalar> Mul<T> for &Matrix<T> {
    type Output = Matrix<T>;
    fn mul(self, rhs: T) -> Matrix<T> {
        self.clone() * rhs
    }
}

impl<T: Scalar> MulAssign<T> for Matrix<T> {
    fn mul_assign(&mut self, rhs: T) {
        self.try_scale(rhs).expect("matrix-scalar multiplication");
    }
}

impl<T: Scalar> Div<T> for Matrix<T> {
    type Output = Self;
    fn div(mut self, rhs: T) -> Self {
        self.try_div_scalar(rhs).expect("matrix-scalar division");
        self
    }
}

impl<T: Scalar> Div<T> for &Matrix<T> {
    type Output = Matrix<T>;
    fn div(self, rhs: T) -> Matrix<T> {
        self.clone() / rhs
    }
}

impl<T: Scalar> DivAssign<T> for Matrix<T> {
    fn div_assign(&mut self, rhs: T) {
        self.try_div_scalar(rhs).expect("matrix-scalar division");
    }
}

// ── scalar * matrix, scalar + matrix (concrete impls) ───────────────

macro_rules! impl_scalar_lhs_ops {
    ($($t:ty),*) => {
        $(
            impl Mul<Matrix<$t>> for $t {
                type Output = Matrix<$t>;
                fn mul(self, rhs: Matrix<$t>) -> Matrix<$t> {
                    rhs * self
                }
            }

            impl Mul<&Matrix<$t>> for $t {
                type Output = Matrix<$t>;
                fn mul(self, rhs: &Matrix<$t>) -> Matrix<$t> {
                    rhs * self
                }
            }

            impl Add<Matrix<$t>> for $t {
                type Output = Matrix<$t>;
                fn add(self, rhs: Matrix<$t>) -> Matrix<$t> {
                    rhs + self
                }
            }
        )*
    };
}

impl_scalar_lhs_ops!(f32, f64, i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn scalar_add_and_scale() {
        let mut m = Matrix::from([[1, 2], [3, 4]]);
        m.try_add_scalar(10).unwrap();
        assert_eq!(m, Matrix::from([[11, 12], [13, 14]]));
        m.try_scale(2).unwrap();
        assert_eq!(m, Matrix::from([[22, 24], [26, 28]]));
    }

    #[test]
    fn scalar_ops_cover_ragged_tails() {
        let mut m = Matrix::from_rows(vec![vec![1, 2, 3], vec![4]]);
        m.try_scale(2).unwrap();
        assert_eq!(m, Matrix::from_rows(vec![vec![2, 4, 6], vec![8]]));
    }

    #[test]
    fn scalar_ops_reject_empty() {
        let mut row_less = Matrix::<i32>::new();
        assert_eq!(row_less.try_add_scalar(1), Err(MatrixError::InvalidOperand));
        // All-zero-length rows count as empty too.
        let mut hollow = Matrix::<i32>::with_rows(3);
        assert_eq!(hollow.try_scale(2), Err(MatrixError::InvalidOperand));
    }

    #[test]
    fn add_assign_matrix() {
        let mut a = Matrix::from([[1, 2], [3, 4]]);
        a.try_add_assign(&Matrix::from([[5, 6], [7, 8]])).unwrap();
        assert_eq!(a, Matrix::from([[6, 8], [10, 12]]));
    }

    #[test]
    fn add_assign_truncates_ragged_tails() {
        // Nominal shapes (first rows) match; raggedness is in row 1.
        let mut a = Matrix::from_rows(vec![vec![1, 2], vec![3, 4, 5]]);
        let b = Matrix::from_rows(vec![vec![10, 10], vec![10]]);
        a.try_add_assign(&b).unwrap();
        // Row 1: only the overlapping first element touched.
        assert_eq!(a, Matrix::from_rows(vec![vec![11, 12], vec![13, 4, 5]]));

        // The truncation also runs when the operand's tail is longer.
        let mut c = Matrix::from_rows(vec![vec![1, 2], vec![3]]);
        let d = Matrix::from_rows(vec![vec![10, 10], vec![10, 10, 10]]);
        c.try_add_assign(&d).unwrap();
        assert_eq!(c, Matrix::from_rows(vec![vec![11, 12], vec![13]]));
    }

    #[test]
    fn add_assign_shape_mismatch() {
        let mut a = Matrix::from([[1, 2], [3, 4]]);
        let wide = Matrix::from([[1, 2, 3], [4, 5, 6]]);
        let tall = Matrix::from([[1, 2]]);
        assert_eq!(a.try_add_assign(&wide), Err(MatrixError::InvalidOperand));
        assert_eq!(a.try_add_assign(&tall), Err(MatrixError::InvalidOperand));
        let mut empty = Matrix::<i32>::new();
        let also_empty = Matrix::<i32>::new();
        assert_eq!(
            empty.try_add_assign(&also_empty),
            Err(MatrixError::InvalidOperand)
        );
    }

    #[test]
    fn sub_yields_zero() {
        let m = Matrix::from([[1, -2], [3, -4]]);
        let zero = Matrix::fill(2, 2, 0);
        assert_eq!(m.clone() + (-m.clone()), zero);
        assert_eq!(m.clone() - m, zero);
    }

    #[test]
    fn multiply_square() {
        let a = Matrix::from([[1, 2], [3, 4]]);
        let b = Matrix::from([[5, 6], [7, 8]]);
        assert_eq!(&a * &b, Matrix::from([[19, 22], [43, 50]]));
    }

    #[test]
    fn multiply_rectangular() {
        let a = Matrix::from([[1, 2, 3], [4, 5, 6]]);
        let b = Matrix::from([[7, 8], [9, 10], [11, 12]]);
        let c = a.try_mul(&b).unwrap();
        assert_eq!(c.nrows(), 2);
        assert_eq!(c.ncols(), 2);
        assert_eq!(c, Matrix::from([[58, 64], [139, 154]]));
    }

    #[test]
    fn multiply_identity() {
        let a = Matrix::from([[1, 2], [3, 4]]);
        let id = Matrix::from([[1, 0], [0, 1]]);
        assert_eq!(&a * &id, a);
        assert_eq!(&id * &a, a);
    }

    #[test]
    fn multiply_rejects_incompatible() {
        let a = Matrix::from([[1, 2, 3]]);
        let b = Matrix::from([[1, 2], [3, 4]]);
        assert_eq!(a.try_mul(&b), Err(MatrixError::InvalidOperand));
        let empty = Matrix::<i32>::new();
        assert_eq!(a.try_mul(&empty), Err(MatrixError::InvalidOperand));
        assert_eq!(empty.try_mul(&a), Err(MatrixError::InvalidOperand));
    }

    #[test]
    fn mul_assign_untouched_on_failure() {
        let mut a = Matrix::from([[1, 2]]);
        let before = a.clone();
        assert_eq!(
            a.try_mul_assign(&Matrix::from([[1, 2]])),
            Err(MatrixError::InvalidOperand)
        );
        assert_eq!(a, before);
        a.try_mul_assign(&Matrix::from([[3], [4]])).unwrap();
        assert_eq!(a, Matrix::from([[11]]));
    }

    #[test]
    fn scalar_associativity() {
        let m = Matrix::from([[1.0_f64, 2.0], [3.0, 4.0]]);
        let lhs = (&m * 3.0) * 0.5;
        let rhs = &m * (3.0 * 0.5);
        assert_eq!(lhs, rhs);
    }

    #[test]
    fn scalar_lhs_variants() {
        let m = Matrix::from([[1, 2], [3, 4]]);
        assert_eq!(3 * &m, &m * 3);
        assert_eq!(10 + m.clone(), m.clone() + 10);
    }

    #[test]
    fn div_is_reciprocal_multiplication() {
        let m = Matrix::from([[2.0_f64, 4.0], [6.0, 8.0]]);
        assert_eq!(&m / 2.0, Matrix::from([[1.0, 2.0], [3.0, 4.0]]));
        // Integral reciprocal truncates: 1/2 == 0.
        let i = Matrix::from([[2, 4]]);
        assert_eq!(i / 2, Matrix::from([[0, 0]]));
    }

    #[test]
    #[should_panic(expected = "matrix addition")]
    fn operator_panics_on_mismatch() {
        let _ = Matrix::from([[1, 2]]) + Matrix::from([[1, 2, 3]]);
    }

    #[test]
    fn assign_operator_forms() {
        let mut m = Matrix::from([[1.0_f64, 2.0], [3.0, 4.0]]);
        m += Matrix::fill(2, 2, 1.0);
        m -= Matrix::fill(2, 2, 1.0);
        m *= 2.0;
        m /= 2.0;
        m += 5.0;
        m -= 5.0;
        assert_eq!(m, Matrix::from([[1.0, 2.0], [3.0, 4.0]]));
        m *= Matrix::from([[1.0, 0.0], [0.0, 1.0]]);
        assert_eq!(m, Matrix::from([[1.0, 2.0], [3.0, 4.0]]));
    }

    #[test]
    fn ref_variants_agree() {
        let a = Matrix::from([[1, 2], [3, 4]]);
        let b = Matrix::from([[5, 6], [7, 8]]);
        let sum = &a + &b;
        assert_eq!(sum, a.clone() + &b);
        assert_eq!(sum, &a + b.clone());
        assert_eq!(sum, a.clone() + b.clone());
        let prod = &a * &b;
        assert_eq!(prod, a.clone() * &b);
        assert_eq!(prod, &a * b.clone());
        assert_eq!(prod, a.clone() * b.clone());
    }

    #[test]
    fn transpose_rectangular() {
        let m = Matrix::from([[1, 2, 3], [4, 5, 6]]);
        let t = m.transpose();
        assert_eq!(t, Matrix::from([[1, 4], [2, 5], [3, 6]]));
        assert_eq!(t.transpose(), m);
        assert_eq!(m.clone().into_transpose(), t);
    }

    #[test]
    fn transpose_involution() {
        let m = Matrix::from([[7, 2, -5], [-9, 8, -5], [24, -6, 8]]);
        assert_eq!(m.transpose().transpose(), m);
    }

    #[test]
    fn transpose_ragged_is_lossy() {
        let m = Matrix::from_rows(vec![vec![1, 2, 3], vec![4]]);
        // Column 0 is complete; columns 1 and 2 only exist in row 0.
        let t = m.transpose();
        assert_eq!(t, Matrix::from_rows(vec![vec![1, 4], vec![2], vec![3]]));
    }

    #[test]
    fn transpose_row_less() {
        let m = Matrix::<i32>::new();
        assert_eq!(m.transpose(), Matrix::new());
    }
}
