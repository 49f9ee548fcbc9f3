//! Exercises the full ordering-then-factorization pipeline the way a caller
//! assembling a preconditioner for an iterative solver actually would.

use precond::prelude::*;
use precond_matrix::{Dense, RowNonZeros, SparseTriplets};

fn five_point_laplacian(n: usize) -> Dense {
    // 1-D analogue of a 5-point stencil: tridiagonal, diagonally dominant.
    let mut a = Dense::zeros(n, n);
    for i in 0..n {
        a.set(i, i, 4.0);
        if i > 0 {
            a.set(i, i - 1, -1.0);
        }
        if i + 1 < n {
            a.set(i, i + 1, -1.0);
        }
    }
    a
}

#[test]
fn amd_then_ilu0_solves_a_tridiagonal_system() {
    let n = 6;
    let a = five_point_laplacian(n);

    let mut adj = adjacency_list(&a);
    let ordering = approximate_minimum_degree(&mut adj, None).unwrap();
    assert_eq!(ordering.len(), n);
    let mut seen = ordering.clone();
    seen.sort_unstable();
    assert_eq!(seen, (0..n).collect::<Vec<_>>());

    let factored = ilu0(&a, n).unwrap();
    let rhs = vec![1.0; n];
    let mut x = vec![0.0; n];
    factored.solve(&mut x, false, &rhs).unwrap();

    // Tridiagonal means zero fill-in, so this is a genuine LU solve: residual
    // should be tight.
    for i in 0..n {
        let mut row_dot = 0.0;
        a.for_each_row_non_zero(i, |_, j, v| row_dot += v * x[j]);
        assert!((row_dot - rhs[i]).abs() < 1e-9);
    }
}

#[test]
fn ic0_then_partial_pivot_round_trip() {
    let n = 4;
    let a = five_point_laplacian(n);

    let factored = ic0(&a, n).unwrap();
    let mut x = vec![0.0; n];
    let rhs = vec![2.0; n];
    factored.solve(&mut x, false, &rhs).unwrap();

    let mut transposed_x = vec![0.0; n];
    factored.solve(&mut transposed_x, true, &rhs).unwrap();
    // A is symmetric, and IC(0) factors a symmetric matrix, so solving
    // A^T x = b must agree with solving A x = b up to floating point noise.
    for i in 0..n {
        assert!((x[i] - transposed_x[i]).abs() < 1e-9);
    }

    let pivot = partial_pivot(&a, n);
    assert_eq!(pivot.len(), n);
}

#[test]
fn validate_rejects_a_disconnected_vertex() {
    let mut triplets = SparseTriplets::new(3, 3);
    triplets.set(0, 1, 1.0);
    triplets.set(1, 0, 1.0);
    // vertex 2 has no neighbors at all.
    let csr = triplets.to_csr();

    let adj = adjacency_list(&csr);
    assert!(validate(&adj).is_err());
}
