//! Singular value decomposition via power iteration with deflation.
//!
//! The dominant eigenpair of the Gram matrix `Aᵗ·A` is extracted by
//! power iteration, the found component is deflated away, and the next
//! pair is extracted from the remainder — one singular triplet per pass.
//! Chosen over QR/Jacobi methods for implementation simplicity: the
//! trade-off is sensitivity to clustered eigenvalues and error
//! accumulation across deflation steps.

use crate::matrix::{column_dot, Matrix, MatrixError};
use crate::traits::FloatScalar;

/// Default hard cap on power-iteration sweeps.
///
/// A termination guarantee for non-convergent symmetric inputs (e.g.
/// repeated eigenvalues). Hitting the cap is not an error: the current
/// estimate is returned as-is, and callers cannot distinguish
/// "converged" from "capped".
pub const DEFAULT_MAX_ITER: usize = 1000;

/// Result of [`compute_svd`]: the three factors of `A ≈ U·Σ·Vᵗ`.
#[derive(Debug, Clone, PartialEq)]
pub struct Svd<T> {
    /// Left singular vectors, one column per extracted component.
    pub u: Matrix<T>,
    /// Diagonal matrix whose `(i, i)` entry is the i-th singular value.
    pub sigma: Matrix<T>,
    /// Right singular vectors, one column per extracted component.
    pub v: Matrix<T>,
}

/// Dominant eigenvalue/eigenvector pair of a symmetric matrix via power
/// iteration, with the default iteration cap.
///
/// See [`dominant_eigenpair_with_cap`].
pub fn dominant_eigenpair<T: FloatScalar>(
    m: &Matrix<T>,
    tol: T,
) -> Result<(T, Matrix<T>), MatrixError> {
    dominant_eigenpair_with_cap(m, tol, DEFAULT_MAX_ITER)
}

/// Dominant eigenpair of a symmetric matrix via power iteration.
///
/// The candidate vector starts as the normalized all-ones column. Each
/// sweep multiplies it through `m`, estimates the eigenvalue by the
/// Rayleigh quotient `(y·u)/(u·u)`, and re-normalizes. Iteration stops
/// when the residual `‖m·u − λ·u‖` drops to `tol`, or after `max_iter`
/// sweeps — the current estimate is returned either way.
///
/// The returned eigenvector is a unit-norm column matrix. No
/// orthogonality against previously extracted eigenvectors is enforced
/// here; across components that is entirely the caller's deflation.
///
/// Propagates [`MatrixError::InvalidOperand`] from the inner arithmetic
/// (e.g. a zero-sized input).
pub fn dominant_eigenpair_with_cap<T: FloatScalar>(
    m: &Matrix<T>,
    tol: T,
    max_iter: usize,
) -> Result<(T, Matrix<T>), MatrixError> {
    let mut u = Matrix::fill(m.ncols(), 1, T::one()).normalized_columns();
    let mut eigenval;
    let mut sweep = 0usize;
    loop {
        let y = m.try_mul(&u)?;
        eigenval = column_dot(&y, &u)? / column_dot(&u, &u)?;
        u = y.normalized_columns();

        let mut residual = m.try_mul(&u)?;
        let mut scaled = u.clone();
        scaled.try_scale(eigenval)?;
        residual.try_sub_assign(&scaled)?;
        if residual.column_norm(0) <= tol || sweep >= max_iter {
            break;
        }
        sweep += 1;
    }
    Ok((eigenval, u))
}

/// Singular value decomposition of `mat` by deflated power iteration,
/// with the default iteration cap. See [`compute_svd_with_cap`].
///
/// ```
/// use svdkit::{compute_svd, Matrix};
///
/// let m = Matrix::from([[7.0_f64, 2.0, -5.0], [-9.0, 8.0, -5.0], [24.0, -6.0, 8.0]]);
/// let svd = compute_svd(&m, 3, 1e-6).unwrap();
/// let rebuilt = &svd.u * &svd.sigma * svd.v.transpose();
/// for i in 0..3 {
///     for j in 0..3 {
///         assert!((m[i][j] - rebuilt[i][j]).abs() < 1e-4);
///     }
/// }
/// ```
pub fn compute_svd<T: FloatScalar>(
    mat: &Matrix<T>,
    num_vec: usize,
    tol: T,
) -> Result<Svd<T>, MatrixError> {
    compute_svd_with_cap(mat, num_vec, tol, DEFAULT_MAX_ITER)
}

/// Singular value decomposition by deflated power iteration.
///
/// Forms the Gram matrix `G = matᵗ·mat` (symmetric positive
/// semi-definite), then extracts `num_vec` singular triplets: the
/// dominant eigenpair `(λ, v)` of the current `G`, deflation
/// `G -= λ·v·vᵗ`, singular value `σ = √λ` onto the diagonal of `Σ`,
/// left vector `mat·v / σ` appended as a column of `U`, and `v` itself
/// appended as a column of `V`.
///
/// `num_vec` must not exceed the rank of the Gram matrix: requesting
/// more yields eigenpairs of vanishing or negative eigenvalues with
/// undefined numeric quality (not guarded, per the design).
pub fn compute_svd_with_cap<T: FloatScalar>(
    mat: &Matrix<T>,
    num_vec: usize,
    tol: T,
    max_iter: usize,
) -> Result<Svd<T>, MatrixError> {
    let mut gram = mat.transpose().try_mul(mat)?;
    let mut sigma = Matrix::fill(num_vec, num_vec, T::zero());
    let mut u = Matrix::new();
    let mut v = Matrix::new();
    for i in 0..num_vec {
        let (eigenval, eigenvec) = dominant_eigenpair_with_cap(&gram, tol, max_iter)?;

        let mut component = eigenvec.try_mul(&eigenvec.transpose())?;
        component.try_scale(eigenval)?;
        gram.try_sub_assign(&component)?;

        let singular = eigenval.sqrt();
        sigma[i][i] = singular;

        let mut left = mat.try_mul(&eigenvec)?;
        left.try_div_scalar(singular)?;
        u.push_cols(left);
        v.push_cols(eigenvec);
    }
    Ok(Svd { u, sigma, v })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dominant_eigenpair_diagonal() {
        // Eigenvalues 5 and 2; dominant eigenvector is e1.
        let m = Matrix::from([[5.0_f64, 0.0], [0.0, 2.0]]);
        let (l, v) = dominant_eigenpair(&m, 1e-10).unwrap();
        assert!((l - 5.0).abs() < 1e-8);
        assert!((v[0][0].abs() - 1.0).abs() < 1e-6);
        assert!(v[1][0].abs() < 1e-6);
        assert!((v.column_norm(0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn dominant_eigenpair_symmetric() {
        // [[2, 1], [1, 2]] has eigenvalues 3 and 1.
        let m = Matrix::from([[2.0_f64, 1.0], [1.0, 2.0]]);
        let (l, v) = dominant_eigenpair(&m, 1e-10).unwrap();
        assert!((l - 3.0).abs() < 1e-8);
        // Eigenvector proportional to [1, 1].
        assert!((v[0][0] - v[1][0]).abs() < 1e-6);
    }

    #[test]
    fn dominant_eigenpair_zero_size_is_invalid() {
        let m = Matrix::<f64>::new();
        assert_eq!(
            dominant_eigenpair(&m, 1e-6),
            Err(MatrixError::InvalidOperand)
        );
    }

    #[test]
    fn iteration_cap_returns_estimate() {
        // Eigenvalues of equal magnitude and opposite sign make power
        // iteration oscillate forever; only the cap terminates it.
        let m = Matrix::from([[2.0_f64, 0.0], [0.0, -2.0]]);
        let (l, v) = dominant_eigenpair_with_cap(&m, 1e-12, 10).unwrap();
        // The Rayleigh estimate stays pinned at 0 between the two poles.
        assert!(l.abs() < 1e-9);
        assert!((v.column_norm(0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn svd_shapes() {
        let m = Matrix::from([[7.0_f64, 2.0, -5.0], [-9.0, 8.0, -5.0], [24.0, -6.0, 8.0]]);
        let svd = compute_svd(&m, 2, 1e-6).unwrap();
        assert_eq!(svd.u.nrows(), 3);
        assert_eq!(svd.u.ncols(), 2);
        assert_eq!(svd.sigma.nrows(), 2);
        assert_eq!(svd.sigma.ncols(), 2);
        assert_eq!(svd.v.nrows(), 3);
        assert_eq!(svd.v.ncols(), 2);
        assert_eq!(svd.sigma[0][1], 0.0);
    }

    #[test]
    fn singular_values_descend() {
        let m = Matrix::from([[7.0_f64, 2.0, -5.0], [-9.0, 8.0, -5.0], [24.0, -6.0, 8.0]]);
        let svd = compute_svd(&m, 3, 1e-8).unwrap();
        assert!(svd.sigma[0][0] >= svd.sigma[1][1]);
        assert!(svd.sigma[1][1] >= svd.sigma[2][2]);
        assert!(svd.sigma[2][2] > 0.0);
    }

    #[test]
    fn zero_components_requested() {
        let m = Matrix::from([[1.0_f64, 0.0], [0.0, 1.0]]);
        let svd = compute_svd(&m, 0, 1e-6).unwrap();
        assert_eq!(svd.u.nrows(), 0);
        assert_eq!(svd.sigma.size(), 0);
        assert_eq!(svd.v.nrows(), 0);
    }
}
