//! CSR text-format adapter.
//!
//! Parses a dense [`Matrix`] from compressed-sparse-row text: a header
//! line with the row length and the row count, then three
//! whitespace-delimited lines — column indices, row pointers
//! (`nrows + 1` entries), and values. An external adapter to the numeric
//! core: it only ever produces a `Matrix`, never consumes one.
//!
//! ```
//! use svdkit::csr::parse_csr;
//!
//! let text = "3 2\n0 2 1\n0 2 3\n5 7 9";
//! let m = parse_csr::<i32>(text).unwrap();
//! assert_eq!(m[0], vec![5, 0, 7]);
//! assert_eq!(m[1], vec![0, 9, 0]);
//! ```

use alloc::vec::Vec;
use core::str::FromStr;

use crate::matrix::Matrix;
use crate::traits::Scalar;

/// Errors from CSR text parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CsrError {
    /// Input ended before all four sections were read.
    UnexpectedEof,
    /// A token failed to parse as a number.
    InvalidNumber,
    /// Index or pointer structure inconsistent with the declared shape.
    Malformed,
}

impl core::fmt::Display for CsrError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CsrError::UnexpectedEof => write!(f, "unexpected end of CSR input"),
            CsrError::InvalidNumber => write!(f, "invalid number in CSR input"),
            CsrError::Malformed => write!(f, "CSR structure inconsistent with declared shape"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CsrError {}

/// Parse a dense matrix from CSR text.
///
/// Header: row length (column count) first, row count second — the
/// order the upstream producer writes them in. The row-pointer line
/// must hold `nrows + 1` monotone entries; each stored value lands at
/// `m[row][indices[j]]`, everything else is `T::zero()`.
pub fn parse_csr<T>(input: &str) -> Result<Matrix<T>, CsrError>
where
    T: Scalar + FromStr,
{
    let mut lines = input.lines();
    let mut header = lines
        .next()
        .ok_or(CsrError::UnexpectedEof)?
        .split_whitespace();
    let ncols: usize = parse_token(header.next())?;
    let nrows: usize = parse_token(header.next())?;

    let indices: Vec<usize> = parse_numbers(lines.next())?;
    let indptr: Vec<usize> = parse_numbers(lines.next())?;
    let values: Vec<T> = parse_numbers(lines.next())?;

    if indptr.len() != nrows + 1 || values.len() != indices.len() {
        return Err(CsrError::Malformed);
    }

    let mut res = Matrix::fill(nrows, ncols, T::zero());
    for i in 0..nrows {
        if indptr[i] > indptr[i + 1] || indptr[i + 1] > indices.len() {
            return Err(CsrError::Malformed);
        }
        for j in indptr[i]..indptr[i + 1] {
            let col = indices[j];
            if col >= ncols {
                return Err(CsrError::Malformed);
            }
            res[i][col] = values[j];
        }
    }
    Ok(res)
}

fn parse_token<N: FromStr>(token: Option<&str>) -> Result<N, CsrError> {
    token
        .ok_or(CsrError::UnexpectedEof)?
        .parse()
        .map_err(|_| CsrError::InvalidNumber)
}

fn parse_numbers<N: FromStr>(line: Option<&str>) -> Result<Vec<N>, CsrError> {
    let line = line.ok_or(CsrError::UnexpectedEof)?;
    line.split_whitespace()
        .map(|token| token.parse().map_err(|_| CsrError::InvalidNumber))
        .collect()
}
