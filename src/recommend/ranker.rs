//! Ranking, truncation, fill-up and display padding of scored careers

use crate::config::RankingConfig;
use crate::profile::catalog::CareerCandidate;
use crate::profile::scores::{FieldScoreMap, TraitScoreMap};
use crate::recommend::scorer::{CareerScorer, ScoredCareer};
use log::debug;
use serde::Serialize;

/// Ordered recommendation list.
///
/// The first `unique_len` entries are distinct careers in rank order. The
/// remaining entries repeat the head of the list so a carousel can wrap
/// around without a visible seam.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedCareerList {
    entries: Vec<ScoredCareer>,
    unique_len: usize,
}

impl RankedCareerList {
    pub fn entries(&self) -> &[ScoredCareer] {
        &self.entries
    }

    /// Distinct careers, best first.
    pub fn ranked(&self) -> &[ScoredCareer] {
        &self.entries[..self.unique_len]
    }

    /// Trailing copies appended for continuous scrolling.
    pub fn padding(&self) -> &[ScoredCareer] {
        &self.entries[self.unique_len..]
    }

    pub fn unique_len(&self) -> usize {
        self.unique_len
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScoredCareer> {
        self.entries.iter()
    }

    /// Whether the entry at `index` repeats an earlier one.
    pub fn is_repeat(&self, index: usize) -> bool {
        index >= self.unique_len && index < self.entries.len()
    }
}

#[derive(Debug, Clone)]
pub struct CareerRanker {
    scorer: CareerScorer,
    config: RankingConfig,
}

impl CareerRanker {
    pub fn new(scorer: CareerScorer, config: RankingConfig) -> Self {
        Self { scorer, config }
    }

    pub fn scorer(&self) -> &CareerScorer {
        &self.scorer
    }

    /// Score the whole catalog and build the display list.
    ///
    /// 1. score every candidate
    /// 2. stable sort by descending score (ties keep catalog order)
    /// 3. keep the top `max_results`
    /// 4. fill up to `min_results` with unselected catalog entries, in catalog order
    /// 5. re-append the first `min(len, padding_copies)` entries
    pub fn rank(
        &self,
        catalog: &[CareerCandidate],
        field_scores: &FieldScoreMap,
        trait_scores: &TraitScoreMap,
    ) -> RankedCareerList {
        let mut scored = self.scorer.score_all(catalog, field_scores, trait_scores);
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored.truncate(self.config.max_results);

        if scored.len() < self.config.min_results {
            let fill: Vec<ScoredCareer> = catalog
                .iter()
                .filter(|c| !scored.iter().any(|s| s.candidate.is_same_career(c)))
                .take(self.config.min_results - scored.len())
                .map(|c| ScoredCareer {
                    candidate: c.clone(),
                    score: self.scorer.score(c, field_scores, trait_scores),
                })
                .collect();
            debug!("Filling ranked list with {} catalog entries", fill.len());
            scored.extend(fill);
        }

        let unique_len = scored.len();
        let copies = unique_len.min(self.config.padding_copies);
        let padding: Vec<ScoredCareer> = scored[..copies].to_vec();
        scored.extend(padding);

        debug!(
            "Ranked {} careers ({} distinct, {} padding)",
            scored.len(),
            unique_len,
            copies
        );

        RankedCareerList {
            entries: scored,
            unique_len,
        }
    }
}

impl Default for CareerRanker {
    fn default() -> Self {
        Self::new(CareerScorer::default(), RankingConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::catalog::CareerCatalog;
    use crate::profile::fields::EngineeringField::{self, *};

    fn career(name: &str, field: EngineeringField) -> CareerCandidate {
        CareerCandidate::new(name, "Instituto", "Ciudad", field, "4 años", "")
    }

    fn strong_cs_profile() -> FieldScoreMap {
        [(ComputerScience, 0.9), (Mechanical, 0.85), (Electrical, 0.8), (Civil, 0.1)]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_reference_catalog_produces_eight_plus_four() {
        let ranker = CareerRanker::default();
        let catalog = CareerCatalog::reference();
        let list = ranker.rank(catalog.as_slice(), &strong_cs_profile(), &TraitScoreMap::new());

        assert_eq!(list.unique_len(), 8);
        assert_eq!(list.len(), 12);
        assert_eq!(list.padding().len(), 4);
    }

    #[test]
    fn test_ranked_head_sorted_descending() {
        let ranker = CareerRanker::default();
        let catalog = CareerCatalog::reference();
        let list = ranker.rank(catalog.as_slice(), &strong_cs_profile(), &TraitScoreMap::new());

        for pair in list.ranked().windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
        assert_eq!(list.ranked()[0].candidate.field, ComputerScience);
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let ranker = CareerRanker::default();
        let catalog: Vec<CareerCandidate> = (0..10).map(|i| career(&format!("C{}", i), Civil)).collect();
        let list = ranker.rank(&catalog, &FieldScoreMap::new(), &TraitScoreMap::new());

        let names: Vec<&str> = list.ranked().iter().map(|s| s.candidate.name.as_str()).collect();
        assert_eq!(names, vec!["C0", "C1", "C2", "C3", "C4", "C5", "C6", "C7"]);
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let ranker = CareerRanker::default();
        let catalog = CareerCatalog::reference();
        let fields = strong_cs_profile();
        let traits = TraitScoreMap::new();

        let first = ranker.rank(catalog.as_slice(), &fields, &traits);
        let second = ranker.rank(catalog.as_slice(), &fields, &traits);
        assert_eq!(first, second);
    }

    #[test]
    fn test_padding_duplicates_head_in_order() {
        let ranker = CareerRanker::default();
        let catalog = CareerCatalog::reference();
        let list = ranker.rank(catalog.as_slice(), &strong_cs_profile(), &TraitScoreMap::new());

        for (head, tail) in list.ranked().iter().zip(list.padding()) {
            assert!(head.candidate.is_same_career(&tail.candidate));
        }
        assert!(list.is_repeat(8));
        assert!(!list.is_repeat(7));
    }

    #[test]
    fn test_small_catalog_is_exhausted_then_padded() {
        let ranker = CareerRanker::default();
        let catalog: Vec<CareerCandidate> = [Mechatronics, Robotics, Civil, Chemical, Industrial]
            .iter()
            .enumerate()
            .map(|(i, f)| career(&format!("C{}", i), *f))
            .collect();
        let list = ranker.rank(&catalog, &strong_cs_profile(), &TraitScoreMap::new());

        // Five distinct careers, then four repeats
        assert_eq!(list.unique_len(), 5);
        assert_eq!(list.len(), 9);
        assert!(list.len() >= 6);
    }

    #[test]
    fn test_fill_to_minimum_when_max_results_small() {
        let config = RankingConfig {
            max_results: 8,
            min_results: 6,
            padding_copies: 4,
        };
        // Truncate to 3 first, then fill from catalog order
        let narrow = RankingConfig { max_results: 3, ..config };
        let ranker = CareerRanker::new(CareerScorer::default(), narrow);
        let catalog = CareerCatalog::reference();
        let list = ranker.rank(catalog.as_slice(), &strong_cs_profile(), &TraitScoreMap::new());

        assert_eq!(list.unique_len(), 6);
        let head = list.ranked();
        for i in 0..head.len() {
            for j in (i + 1)..head.len() {
                assert!(!head[i].candidate.is_same_career(&head[j].candidate));
            }
        }
    }

    #[test]
    fn test_list_serializes_entries_and_unique_len() {
        let ranker = CareerRanker::default();
        let list = ranker.rank(CareerCatalog::reference().as_slice(), &strong_cs_profile(), &TraitScoreMap::new());
        let json = serde_json::to_value(&list).unwrap();

        assert_eq!(json["unique_len"], 8);
        assert_eq!(json["entries"].as_array().unwrap().len(), 12);
        assert_eq!(json["entries"][8], json["entries"][0]);
    }

    #[test]
    fn test_empty_catalog_gives_empty_list() {
        let ranker = CareerRanker::default();
        let list = ranker.rank(&[], &strong_cs_profile(), &TraitScoreMap::new());
        assert!(list.is_empty());
    }

    #[test]
    fn test_single_entry_catalog_pads_once() {
        let ranker = CareerRanker::default();
        let catalog = vec![career("Solo", Civil)];
        let list = ranker.rank(&catalog, &FieldScoreMap::new(), &TraitScoreMap::new());
        assert_eq!(list.len(), 2);
        assert!(list.entries()[0].candidate.is_same_career(&list.entries()[1].candidate));
    }
}
