//! Career scoring and ranking

pub mod affinity;
pub mod ranker;
pub mod scorer;

pub use affinity::{AffinityGraph, TraitRelevance};
pub use ranker::{CareerRanker, RankedCareerList};
pub use scorer::{CareerScorer, ScoredCareer};
