//! Multi-factor career scoring

use crate::config::ScoringConfig;
use crate::profile::catalog::CareerCandidate;
use crate::profile::scores::{FieldScoreMap, TraitScoreMap};
use crate::recommend::affinity::{AffinityGraph, TraitRelevance};
use log::debug;
use serde::{Deserialize, Serialize};

/// A catalog entry paired with the score of one scoring pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCareer {
    pub candidate: CareerCandidate,
    pub score: f64,
}

/// Breakdown of a single career score.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoreComponents {
    pub base: f64,
    pub affinity: f64,
    pub traits: f64,
}

impl ScoreComponents {
    /// Sum of the components. Not renormalised; may exceed 1.
    pub fn total(&self) -> f64 {
        self.base + self.affinity + self.traits
    }
}

/// Combines field scores, trait scores and field affinity into one number per career.
///
/// score = base
///       + Σ affinity(field, f) * fieldScores[f] * affinity_weight   (f in top fields, f ≠ field)
///       + (Σ traitScores[t] * trait_weight) * trait_boost_weight    (t relevant to field)
#[derive(Debug, Clone)]
pub struct CareerScorer {
    graph: AffinityGraph,
    relevance: TraitRelevance,
    weights: ScoringConfig,
}

impl CareerScorer {
    pub fn new(graph: AffinityGraph, relevance: TraitRelevance, weights: ScoringConfig) -> Self {
        Self {
            graph,
            relevance,
            weights,
        }
    }

    /// Scorer over the reference tables, with the configured default affinity.
    pub fn from_config(weights: ScoringConfig) -> Self {
        let graph = AffinityGraph::reference().with_default_weight(weights.default_affinity);
        Self::new(graph, TraitRelevance::reference(), weights)
    }

    pub fn graph(&self) -> &AffinityGraph {
        &self.graph
    }

    pub fn score(
        &self,
        candidate: &CareerCandidate,
        field_scores: &FieldScoreMap,
        trait_scores: &TraitScoreMap,
    ) -> f64 {
        self.components(candidate, field_scores, trait_scores).total()
    }

    pub fn components(
        &self,
        candidate: &CareerCandidate,
        field_scores: &FieldScoreMap,
        trait_scores: &TraitScoreMap,
    ) -> ScoreComponents {
        let field = candidate.field;
        let base = field_scores.get(field);

        let affinity: f64 = field_scores
            .top(self.weights.top_fields)
            .into_iter()
            .filter(|(other, _)| *other != field)
            .map(|(other, score)| self.graph.affinity(field, other) * score * self.weights.affinity_weight)
            .sum();

        let trait_boost: f64 = self
            .relevance
            .traits_for(field)
            .iter()
            .map(|t| trait_scores.get(*t) * self.weights.trait_weight)
            .sum();

        let components = ScoreComponents {
            base,
            affinity,
            traits: trait_boost * self.weights.trait_boost_weight,
        };
        debug!(
            "Scored {} ({:?}): base={:.3} affinity={:.3} traits={:.3}",
            candidate.name, field, components.base, components.affinity, components.traits
        );
        components
    }

    pub fn score_all(
        &self,
        catalog: &[CareerCandidate],
        field_scores: &FieldScoreMap,
        trait_scores: &TraitScoreMap,
    ) -> Vec<ScoredCareer> {
        catalog
            .iter()
            .map(|candidate| ScoredCareer {
                candidate: candidate.clone(),
                score: self.score(candidate, field_scores, trait_scores),
            })
            .collect()
    }
}

impl Default for CareerScorer {
    fn default() -> Self {
        Self::from_config(ScoringConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::fields::{EngineeringField, PersonalityTrait};
    use std::collections::BTreeMap;
    use EngineeringField::*;

    fn candidate(field: EngineeringField) -> CareerCandidate {
        CareerCandidate::new("Carrera de prueba", "Instituto", "Ciudad", field, "4 años", "")
    }

    #[test]
    fn test_score_matches_documented_formula() {
        let scorer = CareerScorer::default();
        let graph = scorer.graph().clone();
        let fields: FieldScoreMap = [(ComputerScience, 0.9), (Mechanical, 0.85), (Electrical, 0.8)]
            .into_iter()
            .collect();
        let traits = TraitScoreMap::new();

        let expected = 0.9
            + graph.affinity(ComputerScience, Mechanical) * 0.85 * 0.3
            + graph.affinity(ComputerScience, Electrical) * 0.8 * 0.3;
        let actual = scorer.score(&candidate(ComputerScience), &fields, &traits);
        assert!((actual - expected).abs() < 1e-9, "expected {}, got {}", expected, actual);
    }

    #[test]
    fn test_trait_contribution_is_four_hundredths_per_point() {
        // No relevance table => only field terms
        let scorer = CareerScorer::new(
            AffinityGraph::reference(),
            TraitRelevance::new(BTreeMap::from([(Civil, vec![PersonalityTrait::Practical])])),
            ScoringConfig::default(),
        );
        let fields = FieldScoreMap::new();
        let traits: TraitScoreMap = [(PersonalityTrait::Practical, 1.0)].into_iter().collect();

        let components = scorer.components(&candidate(Civil), &fields, &traits);
        assert_eq!(components.base, 0.0);
        assert_eq!(components.affinity, 0.0);
        assert!((components.traits - 0.04).abs() < 1e-12);
    }

    #[test]
    fn test_missing_scores_yield_zero() {
        let scorer = CareerScorer::default();
        let score = scorer.score(&candidate(Robotics), &FieldScoreMap::new(), &TraitScoreMap::new());
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_own_field_excluded_from_affinity_term() {
        let scorer = CareerScorer::default();
        let fields: FieldScoreMap = [(Civil, 1.0)].into_iter().collect();
        let components = scorer.components(&candidate(Civil), &fields, &TraitScoreMap::new());
        assert_eq!(components.base, 1.0);
        assert_eq!(components.affinity, 0.0);
    }

    #[test]
    fn test_only_top_three_fields_contribute() {
        let scorer = CareerScorer::default();
        let fields: FieldScoreMap = [
            (Mechatronics, 0.9),
            (Robotics, 0.8),
            (Electrical, 0.7),
            (Mechanical, 0.6),
        ]
        .into_iter()
        .collect();
        let graph = scorer.graph().clone();

        // Civil is not in the top three; its own base is 0
        let components = scorer.components(&candidate(Civil), &fields, &TraitScoreMap::new());
        let expected = graph.affinity(Civil, Mechatronics) * 0.9 * 0.3
            + graph.affinity(Civil, Robotics) * 0.8 * 0.3
            + graph.affinity(Civil, Electrical) * 0.7 * 0.3;
        assert!((components.affinity - expected).abs() < 1e-12);
    }

    #[test]
    fn test_score_monotonic_in_own_field() {
        let scorer = CareerScorer::default();
        let traits: TraitScoreMap = [(PersonalityTrait::Analytical, 0.5)].into_iter().collect();
        let mut previous = f64::MIN;

        for step in 0..=20 {
            let value = step as f64 / 20.0;
            let fields: FieldScoreMap = [(ComputerScience, value), (Mechanical, 0.6), (Electrical, 0.55)]
                .into_iter()
                .collect();
            let score = scorer.score(&candidate(ComputerScience), &fields, &traits);
            assert!(score >= previous, "score dropped at {}", value);
            previous = score;
        }
    }

    #[test]
    fn test_score_drops_when_own_field_enters_top_three() {
        let scorer = CareerScorer::default();
        let fields_with = |civil: f64| -> FieldScoreMap {
            [(Mechanical, 0.6), (Environmental, 0.55), (Industrial, 0.5), (Civil, civil)]
                .into_iter()
                .collect()
        };
        let traits = TraitScoreMap::new();

        // Below Industrial, all three neighbours feed the affinity term
        let below = scorer.score(&candidate(Civil), &fields_with(0.49), &traits);
        // Above it, Civil takes the third slot and Industrial's share is lost
        let above = scorer.score(&candidate(Civil), &fields_with(0.51), &traits);

        assert!((below - 0.739).abs() < 1e-9);
        assert!((above - 0.699).abs() < 1e-9);
        assert!(above < below);
    }

    #[test]
    fn test_score_can_exceed_one() {
        let scorer = CareerScorer::default();
        let fields: FieldScoreMap = [(Mechatronics, 1.0), (Robotics, 1.0), (Mechanical, 1.0)]
            .into_iter()
            .collect();
        let traits: TraitScoreMap = PersonalityTrait::ALL.iter().map(|t| (*t, 1.0)).collect();
        assert!(scorer.score(&candidate(Mechatronics), &fields, &traits) > 1.0);
    }
}
