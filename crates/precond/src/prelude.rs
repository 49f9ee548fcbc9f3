//! Convenience re-export of the crate's public surface.

pub use crate::adjacency::{adjacency_list, validate};
pub use crate::amd::approximate_minimum_degree;
pub use crate::context::EliminationContext;
pub use crate::degree::formed_edge::FormedEdgeDegree;
pub use crate::degree::quotient::QuotientExactDegree;
pub use crate::degree::simple::SimpleDegree;
pub use crate::degree::weighted_enode::WeightedEnode;
pub use crate::degree::DegreeEstimator;
pub use crate::factor::Factored;
pub use crate::ilu::{ic0, ilu0};
pub use crate::pivot::{partial_pivot, Pivot};
pub use crate::Error;

pub use precond_matrix::{ColNonZeros, NonZeros, RowNonZeros};
