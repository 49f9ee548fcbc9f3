//! Building blocks for constructing preconditioners for iterative solvers of
//! sparse linear systems `A x = b`.
//!
//! Three coupled pieces live here:
//!
//! - [`amd::approximate_minimum_degree`]: a heuristic symmetric permutation
//!   of a sparsity graph that reduces fill-in during factorization, built on
//!   a pluggable [`degree::DegreeEstimator`] strategy.
//! - [`ilu::ilu0`] / [`ilu::ic0`]: incomplete LU/Cholesky factorization with
//!   zero fill-in, producing a [`factor::Factored`] pair of triangular
//!   factors whose sparsity pattern never exceeds the input's.
//! - [`pivot::partial_pivot`]: a row permutation driving each column's pivot
//!   to the row of maximum absolute value below the diagonal.
//!
//! ```
//! use precond::prelude::*;
//! use precond_matrix::Dense;
//!
//! let a = Dense::new(2, 2, vec![1.0, 2.0, 3.0, 4.0]);
//! let lu = ilu0(&a, 2).unwrap();
//!
//! let mut x = [0.0; 2];
//! lu.solve(&mut x, false, &[1.0, 1.0]).unwrap();
//! assert!((x[0] - -1.0).abs() < 1e-6);
//! assert!((x[1] - 1.0).abs() < 1e-6);
//! ```
//!
//! The core is single-threaded and synchronous: every call builds its own
//! working state, runs to completion, and returns. There is no background
//! work, no file format, and no CLI surface; see `SPEC_FULL.md` in the
//! workspace root for the full design rationale.

pub mod adjacency;
pub mod amd;
pub mod context;
pub mod degree;
pub mod factor;
pub mod ilu;
pub mod pivot;
pub mod prelude;

use thiserror::Error as ThisError;

/// Errors raised by the ordering and factorization routines in this crate.
#[derive(ThisError, Debug, Clone, PartialEq)]
pub enum Error {
    /// The factorizer was given a matrix with `rows != cols`.
    #[error("matrix must be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    /// A diagonal entry fell below the pivot tolerance during factorization.
    #[error("zero pivot at row {row}: |{value}| < {tolerance}")]
    ZeroPivot {
        row: usize,
        value: f64,
        tolerance: f64,
    },

    /// IC(0) encountered a non-positive diagonal entry and cannot take its
    /// square root.
    #[error("matrix is not positive definite: diagonal {value} at row {row} is not positive")]
    NotPositiveDefinite { row: usize, value: f64 },

    /// `solve` was called with a `dst`/`rhs` whose length does not match the
    /// factor dimension.
    #[error("dimension mismatch: factor is {expected}x{expected}, got dst={dst}, rhs={rhs}")]
    DimensionMismatch {
        expected: usize,
        dst: usize,
        rhs: usize,
    },

    /// An adjacency list failed the well-formedness precondition required by
    /// some degree estimators.
    #[error("invalid adjacency list: {reason}")]
    InvalidInput { reason: &'static str },

    /// `EliminationContext::minimum_active_degree` was called with no active
    /// vertices remaining.
    #[error("no active nodes remain in the elimination context")]
    NoActiveNodes,
}
