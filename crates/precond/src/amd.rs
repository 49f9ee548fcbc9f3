//! Approximate minimum degree ordering: a heuristic symmetric permutation
//! that tends to reduce fill-in when the reordered matrix is later
//! factorized.

use crate::context::EliminationContext;
use crate::degree::weighted_enode::WeightedEnode;
use crate::degree::DegreeEstimator;
use crate::{adjacency, Error};

/// Computes an elimination ordering for the sparsity graph described by
/// `adj`, repeatedly eliminating the active vertex of minimum estimated
/// degree (ties broken by lowest index) until every vertex has been
/// ordered.
///
/// `adj` is taken `&mut` because estimators like [`crate::degree::formed_edge::FormedEdgeDegree`]
/// insert fill edges into it as elimination proceeds; callers that don't
/// need the mutated adjacency afterward can simply discard it.
///
/// When `estimator` is `None`, a fresh [`WeightedEnode`] is used, the same
/// default the original minimum degree implementation this crate is based
/// on falls back to.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if the chosen estimator requires
/// well-formed adjacency (currently only [`crate::degree::quotient::QuotientExactDegree`])
/// and [`adjacency::validate`] rejects `adj`.
pub fn approximate_minimum_degree(
    adj: &mut [Vec<usize>],
    estimator: Option<&mut dyn DegreeEstimator>,
) -> Result<Vec<usize>, Error> {
    let mut default_estimator = WeightedEnode::new(adj.len());
    let estimator = match estimator {
        Some(e) => e,
        None => &mut default_estimator,
    };

    if estimator.requires_well_formed_adjacency() {
        adjacency::validate(adj)?;
    }

    let n = adj.len();
    let mut ctx = EliminationContext::new(n);
    let mut degrees: Vec<usize> = (0..n).map(|v| estimator.degree(v, adj, &ctx)).collect();
    let mut ordering = Vec::with_capacity(n);

    for _ in 0..n {
        let node = ctx.minimum_active_degree(|v| degrees[v])?;
        ordering.push(node);
        ctx.eliminate(node);
        estimator.on_eliminated(node, adj, &ctx);

        for &neighbor in &adj[node] {
            if ctx.is_active(neighbor) {
                degrees[neighbor] = estimator.degree(neighbor, adj, &ctx);
            }
        }
    }

    Ok(ordering)
}
