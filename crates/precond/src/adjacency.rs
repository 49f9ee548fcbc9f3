//! Extraction and well-formedness checking of the sparsity graph `precond`'s
//! ordering routines operate on.

use precond_matrix::NonZeros;

use crate::Error;

/// Builds adjacency lists for the symmetrized sparsity graph of `a`.
///
/// Each non-zero `(i, j, _)` with `i != j` contributes `j` to `adj[i]` and
/// `i` to `adj[j]`; self-entries are skipped, and a pair visited twice (e.g.
/// because the caller's matrix has both `(i, j)` and `(j, i)` non-zero)
/// contributes only one copy to each list. The output has `a.rows()` entries,
/// one per vertex; vertices with no non-zero entries get an empty list.
///
/// # Examples
///
/// ```
/// use precond::adjacency::adjacency_list;
/// use precond_matrix::Dense;
///
/// // 0 -- 2, 0 -- 3, 1 -- 3
/// let mut a = Dense::zeros(4, 4);
/// a.set(0, 2, 1.0);
/// a.set(0, 3, 1.0);
/// a.set(1, 3, 1.0);
///
/// let adj = adjacency_list(&a);
/// assert_eq!(adj[0], vec![2, 3]);
/// assert_eq!(adj[3], vec![0, 1]);
/// ```
pub fn adjacency_list(a: &impl NonZeros) -> Vec<Vec<usize>> {
    let n = a.rows();
    let mut seen: Vec<ahash::AHashSet<usize>> = vec![ahash::AHashSet::default(); n];

    a.for_each_non_zero(|i, j, _| {
        if i == j {
            return;
        }
        seen[i].insert(j);
        seen[j].insert(i);
    });

    seen.into_iter().map(|s| s.into_iter().collect()).collect()
}

/// Checks that `adj` is well-formed enough for degree estimators that need
/// to address every vertex reachable by index, i.e. [`crate::degree::quotient::QuotientExactDegree`].
///
/// Fails with [`Error::InvalidInput`] if any vertex has no neighbors, or if
/// the largest neighbor index does not equal `adj.len() - 1`.
pub fn validate(adj: &[Vec<usize>]) -> Result<(), Error> {
    if adj.is_empty() {
        return Ok(());
    }

    if adj.iter().any(Vec::is_empty) {
        return Err(Error::InvalidInput {
            reason: "every vertex must have at least one neighbor",
        });
    }

    let max_neighbor = adj.iter().flatten().copied().max().unwrap_or(0);
    if max_neighbor != adj.len() - 1 {
        return Err(Error::InvalidInput {
            reason: "largest neighbor index must equal len(adj) - 1",
        });
    }

    Ok(())
}
