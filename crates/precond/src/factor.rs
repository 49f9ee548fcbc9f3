//! The pair of triangular factors produced by [`crate::ilu::ilu0`]/[`crate::ilu::ic0`],
//! and the forward/backward substitution that turns them into a solver.

use std::cell::OnceCell;

use precond_matrix::{Csr, NonZeros, RowNonZeros};

use crate::Error;

/// An incomplete LU (or Cholesky) factorization, ready to solve `A x = b`
/// by substitution.
///
/// The transposed factors needed for `solve(.., transposed: true, ..)` are
/// computed once, on first use, and cached, since most callers only ever
/// solve one direction, so there is no reason to pay for a transpose
/// neither of them asked for.
#[derive(Debug)]
pub struct Factored {
    lower: Csr,
    upper: Csr,
    lower_t: OnceCell<Csr>,
    upper_t: OnceCell<Csr>,
}

impl Factored {
    /// Wraps a pre-computed unit-lower-triangular `lower` and upper-triangular
    /// `upper` factor. `ilu0`/`ic0` are the usual way to obtain these; this
    /// constructor is for callers assembling a factorization from their own
    /// elimination.
    pub fn new(lower: Csr, upper: Csr) -> Self {
        Self {
            lower,
            upper,
            lower_t: OnceCell::new(),
            upper_t: OnceCell::new(),
        }
    }

    pub fn lower(&self) -> &Csr {
        &self.lower
    }

    pub fn upper(&self) -> &Csr {
        &self.upper
    }

    fn lower_transposed(&self) -> &Csr {
        self.lower_t.get_or_init(|| self.lower.transpose())
    }

    fn upper_transposed(&self) -> &Csr {
        self.upper_t.get_or_init(|| self.upper.transpose())
    }

    /// Solves `A x = rhs` (or `A^T x = rhs` when `transposed`) in place into
    /// `dst`, using the triangular factors as a preconditioner/solver:
    /// forward substitution through the lower factor followed by backward
    /// substitution through the upper factor (swapped, transposed, when
    /// `transposed` is set).
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if `dst.len()` or `rhs.len()`
    /// doesn't match the factor's dimension.
    pub fn solve(&self, dst: &mut [f64], transposed: bool, rhs: &[f64]) -> Result<(), Error> {
        let n = self.lower.rows();
        if dst.len() != n || rhs.len() != n {
            return Err(Error::DimensionMismatch {
                expected: n,
                dst: dst.len(),
                rhs: rhs.len(),
            });
        }

        let mut tmp = vec![0.0; n];
        if transposed {
            forward_substitute(self.upper_transposed(), &mut tmp, rhs);
            backward_substitute(self.lower_transposed(), dst, &tmp);
        } else {
            forward_substitute(&self.lower, &mut tmp, rhs);
            backward_substitute(&self.upper, dst, &tmp);
        }
        Ok(())
    }
}

fn forward_substitute(lower: &impl RowNonZeros, dst: &mut [f64], rhs: &[f64]) {
    let n = rhs.len();
    for i in 0..n {
        let mut sum = 0.0;
        let mut diag = 1.0;
        lower.for_each_row_non_zero(i, |_, j, v| {
            if j < i {
                sum += v * dst[j];
            } else if j == i {
                diag = v;
            }
        });
        dst[i] = (rhs[i] - sum) / diag;
    }
}

fn backward_substitute(upper: &impl RowNonZeros, dst: &mut [f64], rhs: &[f64]) {
    let n = rhs.len();
    for i in (0..n).rev() {
        let mut sum = 0.0;
        let mut diag = 1.0;
        upper.for_each_row_non_zero(i, |_, j, v| {
            if j > i {
                sum += v * dst[j];
            } else if j == i {
                diag = v;
            }
        });
        dst[i] = (rhs[i] - sum) / diag;
    }
}
