//! Sparse and dense container building blocks.
//!
//! This crate is deliberately small. It exists so that
//! [`precond`](https://docs.rs/precond), the crate implementing ordering and
//! factorization, has a concrete sparse/dense container to build, test, and
//! benchmark against. The algorithms in `precond` are written against the
//! trait surface defined here ([`NonZeros`], [`RowNonZeros`], [`ColNonZeros`])
//! rather than against [`Csr`] directly, so any container satisfying those
//! traits can stand in for it.
//!
//! A matrix is represented one of two ways on the way into `precond`:
//!
//! - As a [`SparseTriplets`] builder, which accepts non-zero entries in any
//!   order via `set(i, j, v)` and converts to [`Csr`] once assembly is done.
//! - As a [`Csr`], immutable compressed-row storage, which is what the
//!   factorizer and substitution kernels actually iterate over.
//!
//! ```
//! use precond_matrix::{NonZeros, SparseTriplets};
//!
//! let mut triplets = SparseTriplets::new(2, 2);
//! triplets.set(0, 0, 1.0);
//! triplets.set(0, 1, 2.0);
//! triplets.set(1, 0, 3.0);
//! triplets.set(1, 1, 4.0);
//!
//! let csr = triplets.to_csr();
//! let mut seen = Vec::new();
//! csr.for_each_non_zero(|i, j, v| seen.push((i, j, v)));
//! assert_eq!(seen.len(), 4);
//! ```

pub mod csr;
pub mod dense;
pub mod triplets;

pub use crate::csr::Csr;
pub use crate::dense::{Dense, DenseVector};
pub use crate::triplets::SparseTriplets;

use thiserror::Error;

/// Errors raised while building or inspecting a sparse/dense container.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A coordinate passed to `set` fell outside the declared dimensions.
    #[error("index ({row}, {col}) out of bounds for a {rows}x{cols} matrix")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}

/// Visits every non-zero entry of a matrix as `(row, col, value)` triples.
///
/// No particular visitation order is guaranteed or required by callers.
pub trait NonZeros {
    /// Number of rows.
    fn rows(&self) -> usize;

    /// Number of columns.
    fn cols(&self) -> usize;

    /// Invokes `f` once per non-zero entry.
    fn for_each_non_zero(&self, f: impl FnMut(usize, usize, f64));
}

/// Visits the non-zero entries of a single row.
pub trait RowNonZeros {
    /// Invokes `f` once per non-zero entry of `row`.
    fn for_each_row_non_zero(&self, row: usize, f: impl FnMut(usize, usize, f64));
}

/// Visits the non-zero entries of a single column.
pub trait ColNonZeros {
    /// Invokes `f` once per non-zero entry of `col`.
    fn for_each_col_non_zero(&self, col: usize, f: impl FnMut(usize, usize, f64));
}
