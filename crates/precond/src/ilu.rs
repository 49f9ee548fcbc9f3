//! Incomplete factorization with zero fill-in: ILU(0) and its symmetric
//! specialization IC(0), producing triangular factors whose sparsity never
//! exceeds the input matrix's own pattern.

use log::info;
use std::time::Instant;

use precond_matrix::{NonZeros, SparseTriplets};

use crate::factor::Factored;
use crate::Error;

const DIAGONAL_TOLERANCE: f64 = 1e-8;

fn check_diagonal(lu: &SparseTriplets, n: usize, require_positive: bool) -> Result<(), Error> {
    for i in 0..n {
        if !lu.contains(i, i) {
            return Err(Error::ZeroPivot {
                row: i,
                value: 0.0,
                tolerance: DIAGONAL_TOLERANCE,
            });
        }
        let diag = lu.get(i, i);
        if diag.abs() < DIAGONAL_TOLERANCE {
            return Err(Error::ZeroPivot {
                row: i,
                value: diag,
                tolerance: DIAGONAL_TOLERANCE,
            });
        }
        if require_positive && diag < DIAGONAL_TOLERANCE {
            return Err(Error::NotPositiveDefinite { row: i, value: diag });
        }
    }
    Ok(())
}

fn load_triplets(a: &impl NonZeros, n: usize) -> SparseTriplets {
    let mut lu = SparseTriplets::new(n, n);
    a.for_each_non_zero(|i, j, v| lu.set(i, j, v));
    lu
}

/// Splits a combined LU working matrix into separate lower (unit diagonal)
/// and upper triangular [`precond_matrix::Csr`] factors.
fn split_lu(lu: &SparseTriplets, n: usize) -> (SparseTriplets, SparseTriplets) {
    let mut lower = SparseTriplets::new(n, n);
    let mut upper = SparseTriplets::new(n, n);

    for i in 0..n {
        for j in lu.row_keys(i) {
            let v = lu.get(i, j);
            if j >= i {
                upper.set(i, j, v);
            } else {
                lower.set(i, j, v);
            }
        }
    }
    for i in 0..n {
        lower.set(i, i, 1.0);
    }

    (lower, upper)
}

/// Computes the ILU(0) factorization of `a`, an `n x n` matrix: `A ~= L U`
/// with `L` unit lower triangular and `U` upper triangular, both restricted
/// to `a`'s sparsity pattern.
///
/// Elimination only ever updates entries already present in the working
/// matrix; fill-in that would fall outside `a`'s pattern is silently
/// dropped rather than inserted, which is what makes this "incomplete"
/// relative to a full LU factorization.
///
/// # Errors
///
/// Returns [`Error::NotSquare`] if `a.rows() != a.cols()`, or
/// [`Error::ZeroPivot`] if any diagonal entry is absent or smaller in
/// absolute value than `1e-8`, checked against the *input* diagonal before
/// elimination starts, matching the original zero-fill-in algorithm this is
/// based on, which does not re-check diagonals updated mid-elimination.
pub fn ilu0(a: &impl NonZeros, n: usize) -> Result<Factored, Error> {
    if a.rows() != a.cols() || a.rows() != n {
        return Err(Error::NotSquare {
            rows: a.rows(),
            cols: a.cols(),
        });
    }

    let started = Instant::now();
    let mut lu = load_triplets(a, n);
    check_diagonal(&lu, n, false)?;

    for i in 0..n {
        let diag = lu.get(i, i);
        let rows_below: Vec<usize> = lu.row_keys(i).filter(|&j| j > i).collect();
        for j in rows_below {
            let l_ji = lu.get(j, i) / diag;
            lu.set(j, i, l_ji);

            let cols_in_row_j: Vec<usize> = lu.row_keys(j).filter(|&k| k > i).collect();
            for k in cols_in_row_j {
                let updated = lu.get(j, k) - l_ji * lu.get(i, k);
                lu.set(j, k, updated);
            }
        }
    }

    let (lower, upper) = split_lu(&lu, n);
    info!("ilu0: factorized {n}x{n} matrix in {:?}", started.elapsed());

    Ok(Factored::new(lower.to_csr(), upper.to_csr()))
}

/// Computes the incomplete Cholesky factorization IC(0) of symmetric
/// positive-definite `a`: `A ~= L L^T` with `L` lower triangular,
/// restricted to `a`'s sparsity pattern.
///
/// IC(0) is ILU(0) specialized to `U = L^T`, so only the lower triangle of
/// `a` needs to be supplied (and is all that's read); the upper factor is
/// derived as `L`'s transpose rather than computed separately.
///
/// # Errors
///
/// Returns [`Error::NotSquare`] if `a.rows() != a.cols()`, or
/// [`Error::NotPositiveDefinite`] if any diagonal entry is absent, not
/// positive, or smaller than `1e-8`.
pub fn ic0(a: &impl NonZeros, n: usize) -> Result<Factored, Error> {
    if a.rows() != a.cols() || a.rows() != n {
        return Err(Error::NotSquare {
            rows: a.rows(),
            cols: a.cols(),
        });
    }

    let started = Instant::now();
    let mut lower = SparseTriplets::new(n, n);
    a.for_each_non_zero(|i, j, v| lower.set(i, j, v));
    check_diagonal(&lower, n, true)?;

    for i in 0..n {
        let diag = lower.get(i, i).sqrt();
        lower.set(i, i, diag);

        let rows_below: Vec<usize> = lower.row_keys(i).filter(|&j| j > i).collect();

        // Normalize the whole of column i first: each entry only depends on
        // the original A[j][i] and the just-computed diagonal, so this is
        // safe to do before any of the rank-1 updates below read it back.
        for &j in &rows_below {
            let l_ji = lower.get(j, i) / diag;
            lower.set(j, i, l_ji);
        }

        for &j in &rows_below {
            let l_ji = lower.get(j, i);
            let cols_in_row_j: Vec<usize> = lower.row_keys(j).filter(|&k| k > i).collect();
            for k in cols_in_row_j {
                let l_ki = lower.get(k, i);
                let updated = lower.get(j, k) - l_ji * l_ki;
                lower.set(j, k, updated);
            }
        }
    }

    let lower_csr = lower.to_csr();
    let upper_csr = lower_csr.transpose();
    info!("ic0: factorized {n}x{n} matrix in {:?}", started.elapsed());

    Ok(Factored::new(lower_csr, upper_csr))
}
