use crate::context::EliminationContext;
use crate::degree::DegreeEstimator;

/// Estimates degree without re-traversing the graph, by giving every vertex
/// a weight (all starting at 1) and summing the weights of `node`'s
/// neighbors, including eliminated ones ("e-nodes").
///
/// When a vertex is eliminated its weight is rewritten to the degree it had
/// just before elimination minus its own prior weight, which lets its
/// former neighbors' degree sums keep accounting for the mass it
/// represented without the O(degree) chain-walk [`crate::degree::quotient::QuotientExactDegree`]
/// needs. This is the default estimator [`crate::amd::approximate_minimum_degree`]
/// reaches for when the caller passes no explicit estimator.
#[derive(Debug, Clone)]
pub struct WeightedEnode {
    weights: Vec<usize>,
}

impl WeightedEnode {
    pub fn new(n: usize) -> Self {
        Self { weights: vec![1; n] }
    }
}

impl DegreeEstimator for WeightedEnode {
    fn degree(&mut self, node: usize, adj: &[Vec<usize>], _ctx: &EliminationContext) -> usize {
        adj[node].iter().map(|&n| self.weights[n]).sum()
    }

    fn on_eliminated(
        &mut self,
        eliminated: usize,
        adj: &mut [Vec<usize>],
        ctx: &EliminationContext,
    ) {
        let degree = self.degree(eliminated, adj, ctx);
        self.weights[eliminated] = degree - self.weights[eliminated];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_degree_equals_neighbor_count() {
        let adj = vec![vec![1, 2], vec![0], vec![0]];
        let ctx = EliminationContext::new(3);
        let mut est = WeightedEnode::new(3);
        assert_eq!(est.degree(0, &adj, &ctx), 2);
    }

    #[test]
    fn on_eliminated_updates_weight_from_prior_degree() {
        let adj = vec![vec![1, 2], vec![0], vec![0]];
        let mut ctx = EliminationContext::new(3);
        let mut est = WeightedEnode::new(3);

        ctx.eliminate(0);
        est.on_eliminated(0, &mut adj.clone(), &ctx);
        // degree(0) was 1+1=2, weight(0) was 1, so new weight is 2-1=1.
        assert_eq!(est.weights[0], 1);
    }
}
