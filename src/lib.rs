//! # svdkit
//!
//! Dense, ragged-row-tolerant numeric matrix with arithmetic semantics,
//! plus a singular value decomposition built on power iteration with
//! deflation. Pure Rust, no-std compatible (`alloc` required).
//!
//! ## Quick start
//!
//! ```
//! use svdkit::{compute_svd, Matrix};
//!
//! let m = Matrix::from([[7.0_f64, 2.0, -5.0], [-9.0, 8.0, -5.0], [24.0, -6.0, 8.0]]);
//! let svd = compute_svd(&m, 3, 1e-6).unwrap();
//!
//! // U · Σ · Vᵗ reconstructs the input.
//! let rebuilt = &svd.u * &svd.sigma * svd.v.transpose();
//! for i in 0..3 {
//!     for j in 0..3 {
//!         assert!((m[i][j] - rebuilt[i][j]).abs() < 1e-4);
//!     }
//! }
//! ```
//!
//! ## Modules
//!
//! - [`matrix`] — [`Matrix<T>`]: an owned `Vec<Vec<T>>` row container.
//!   Rows of unequal length ("ragged" input) are tolerated throughout
//!   construction and mutation; arithmetic either truncates to the
//!   shorter row (addition) or panics on rows too short for the nominal
//!   shape (multiplication, norms). Fallible `try_*` methods return
//!   [`MatrixError::InvalidOperand`] on shape/emptiness mismatches; the
//!   operator impls (`+`, `*`, `+=`, ...) panic instead.
//!
//! - [`svd`] — [`compute_svd`]: Gram matrix, power-iteration eigenpair
//!   extraction, deflation, one singular triplet per pass. The
//!   iteration cap ([`DEFAULT_MAX_ITER`], overridable through the
//!   `*_with_cap` variants) guarantees termination on non-convergent
//!   inputs; hitting it is not an error.
//!
//! - [`csr`] — text-format CSR parsing into a dense [`Matrix`], an
//!   adapter outside the numeric core.
//!
//! ## Cargo features
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std`   | yes     | Hardware FPU via system libm; `std::error::Error` impls |
//! | `libm`  | no      | Pure-Rust software float fallback for no_std targets |

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod csr;
pub mod matrix;
pub mod svd;
pub mod traits;

pub use matrix::aliases::{Matrixf32, Matrixf64, Matrixi32, Matrixi64, Matrixu32, Matrixu64};
pub use matrix::{column_dot, Matrix, MatrixError};
pub use svd::{
    compute_svd, compute_svd_with_cap, dominant_eigenpair, dominant_eigenpair_with_cap, Svd,
    DEFAULT_MAX_ITER,
};
pub use traits::{FloatScalar, Scalar};
