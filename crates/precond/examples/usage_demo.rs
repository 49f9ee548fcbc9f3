//! Minimal end-to-end demonstration: order a small sparsity graph, factorize
//! it with ILU(0), and solve against a right-hand side.
//!
//! Run with `RUST_LOG=info cargo run -p precond --example usage_demo` to see
//! the factorization timing log.

use precond::prelude::*;
use precond_matrix::Dense;

fn main() {
    env_logger::init();

    let n = 5;
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

    let mut adj = adjacency_list(&a);
    let ordering = approximate_minimum_degree(&mut adj, None).expect("ordering");
    println!("elimination order: {ordering:?}");

    let factored = ilu0(&a, n).expect("factorization");
    let rhs = vec![1.0; n];
    let mut x = vec![0.0; n];
    factored.solve(&mut x, false, &rhs).expect("solve");
    println!("solution: {x:?}");
}
