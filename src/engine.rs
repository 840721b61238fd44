//! Recommendation engine: catalog, ranking and narrative extraction wired from config

use crate::analysis::{AnalysisSource, NarrativeComposer, PerCareerAnalysis};
use crate::config::Config;
use crate::error::{PathfinderError, Result};
use crate::profile::{CareerCandidate, CareerCatalog, ScoreProfile};
use crate::recommend::{CareerRanker, CareerScorer, RankedCareerList};
use log::info;

/// Minimum Jaro-Winkler similarity for a "did you mean" suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.75;

pub struct RecommendationEngine {
    catalog: CareerCatalog,
    ranker: CareerRanker,
    composer: NarrativeComposer,
}

impl RecommendationEngine {
    pub fn new(catalog: CareerCatalog, ranker: CareerRanker, composer: NarrativeComposer) -> Self {
        Self {
            catalog,
            ranker,
            composer,
        }
    }

    /// Engine over the reference catalog, tuned by `config`.
    pub fn from_config(config: &Config) -> Result<Self> {
        let scorer = CareerScorer::from_config(config.scoring);
        let ranker = CareerRanker::new(scorer, config.ranking);
        let composer = NarrativeComposer::with_markers(&config.analysis.boundary_markers)?;
        Ok(Self::new(CareerCatalog::reference(), ranker, composer))
    }

    pub fn with_catalog(mut self, catalog: CareerCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn catalog(&self) -> &CareerCatalog {
        &self.catalog
    }

    pub fn composer(&self) -> &NarrativeComposer {
        &self.composer
    }

    pub fn recommend(&self, profile: &ScoreProfile) -> RankedCareerList {
        let list = self
            .ranker
            .rank(self.catalog.as_slice(), &profile.field_scores, &profile.trait_scores);
        info!(
            "Recommended {} careers from a catalog of {}",
            list.unique_len(),
            self.catalog.len()
        );
        list
    }

    pub fn analyze(&self, career_name: &str, source: &AnalysisSource) -> Option<PerCareerAnalysis> {
        source.career_analysis_for(career_name, &self.composer)
    }

    pub fn can_generate_analysis_for(&self, career_name: &str, source: &AnalysisSource) -> bool {
        source.can_generate_analysis_for(career_name, &self.composer)
    }

    /// Catalog entry named `name`, or an `UnknownCareer` error carrying the
    /// closest catalog name when one is similar enough.
    pub fn resolve_career(&self, name: &str) -> Result<&CareerCandidate> {
        if let Some(career) = self.catalog.find_by_name(name) {
            return Ok(career);
        }

        let message = match self.catalog.closest_name(name) {
            Some((closest, similarity)) if similarity >= SUGGESTION_THRESHOLD => {
                format!("'{}' (did you mean '{}'?)", name, closest.name)
            }
            _ => format!("'{}'", name),
        };
        Err(PathfinderError::UnknownCareer(message))
    }
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new(CareerCatalog::reference(), CareerRanker::default(), NarrativeComposer::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::EngineeringField;

    #[test]
    fn test_from_default_config_matches_default_engine() {
        let engine = RecommendationEngine::from_config(&Config::default()).unwrap();
        let profile = ScoreProfile::new(
            [(EngineeringField::Biomedical, 0.95)].into_iter().collect(),
            Default::default(),
        );
        let from_config = engine.recommend(&profile);
        let default = RecommendationEngine::default().recommend(&profile);
        assert_eq!(from_config, default);
        assert_eq!(from_config.ranked()[0].candidate.field, EngineeringField::Biomedical);
    }

    #[test]
    fn test_resolve_career_suggests_closest_name() {
        let engine = RecommendationEngine::default();
        assert!(engine.resolve_career("ingeniería biomédica").is_ok());

        let err = engine.resolve_career("Ingenieria Biomedica").unwrap_err();
        assert!(err.to_string().contains("did you mean 'Ingeniería Biomédica'"));
    }

    #[test]
    fn test_analyze_raw_text() {
        let engine = RecommendationEngine::default();
        let source = AnalysisSource::from("La Bioinformática une datos y biología. Fin".to_string());
        assert!(engine.can_generate_analysis_for("Bioinformática", &source));
        assert!(engine.analyze("Bioinformática", &source).is_some());
        assert!(engine.analyze("Carrera Inexistente", &source).is_none());
    }
}
