//! Report structures combining ranked careers, profile feedback and narratives

use crate::analysis::{AnalysisSource, PerCareerAnalysis, StructuredAnalysis};
use crate::engine::RecommendationEngine;
use crate::profile::feedback::{feedback, ProfileSnapshot};
use crate::profile::{EngineeringField, ScoreProfile};
use crate::recommend::RankedCareerList;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything a formatter needs to render one recommendation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationReport {
    /// Strongest fields and traits plus the raw score maps
    pub profile: ProfileSnapshot,

    /// Spanish feedback paragraph about the profile
    pub feedback: String,

    /// Ranked careers in display order, padding included
    pub careers: Vec<CareerLine>,

    /// Narratives for the distinct ranked careers that have one
    pub narratives: Vec<CareerNarrative>,

    /// Document-wide analysis, when an analysis source was given
    pub structured_analysis: Option<StructuredAnalysis>,

    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerLine {
    /// 1-based position in the display list
    pub rank: usize,
    pub name: String,
    pub institution: String,
    pub city: String,
    pub field: EngineeringField,
    pub field_label: String,
    pub duration: String,
    /// Unclamped combined score
    pub score: f64,
    /// `score` as a whole percentage, clamped to 0..=100
    pub match_percentage: u8,
    /// Trailing copy of an earlier entry
    pub is_repeat: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerNarrative {
    pub career: String,
    pub institution: String,
    pub analysis: PerCareerAnalysis,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub version: String,
    pub scores_file: Option<String>,
    pub analysis_file: Option<String>,
    pub catalog_size: usize,
}

/// Percentage shown to users. Raw scores can exceed 1; the clamp lives here only.
pub fn display_percentage(score: f64) -> u8 {
    (score * 100.0).round().clamp(0.0, 100.0) as u8
}

impl RecommendationReport {
    pub fn build(
        engine: &RecommendationEngine,
        profile: &ScoreProfile,
        ranked: &RankedCareerList,
        source: Option<&AnalysisSource>,
    ) -> Self {
        let careers = Self::create_career_lines(ranked);

        let narratives = source
            .map(|source| {
                ranked
                    .ranked()
                    .iter()
                    .filter_map(|scored| {
                        engine
                            .analyze(&scored.candidate.name, source)
                            .map(|analysis| CareerNarrative {
                                career: scored.candidate.name.clone(),
                                institution: scored.candidate.institution.clone(),
                                analysis,
                            })
                    })
                    .collect()
            })
            .unwrap_or_default();

        let structured_analysis = source.and_then(|source| source.structured(engine.composer()));

        Self {
            profile: ProfileSnapshot::from_profile(profile),
            feedback: feedback(profile),
            careers,
            narratives,
            structured_analysis,
            metadata: ReportMetadata {
                generated_at: Utc::now(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                scores_file: None,
                analysis_file: None,
                catalog_size: engine.catalog().len(),
            },
        }
    }

    pub fn with_files(mut self, scores_file: Option<String>, analysis_file: Option<String>) -> Self {
        self.metadata.scores_file = scores_file;
        self.metadata.analysis_file = analysis_file;
        self
    }

    fn create_career_lines(ranked: &RankedCareerList) -> Vec<CareerLine> {
        ranked
            .iter()
            .enumerate()
            .map(|(index, scored)| {
                let candidate = &scored.candidate;
                CareerLine {
                    rank: index + 1,
                    name: candidate.name.clone(),
                    institution: candidate.institution.clone(),
                    city: candidate.city.clone(),
                    field: candidate.field,
                    field_label: candidate.field.label().to_string(),
                    duration: candidate.duration.clone(),
                    score: scored.score,
                    match_percentage: display_percentage(scored.score),
                    is_repeat: ranked.is_repeat(index),
                }
            })
            .collect()
    }

    /// Lines for distinct careers only.
    pub fn distinct_careers(&self) -> impl Iterator<Item = &CareerLine> {
        self.careers.iter().filter(|line| !line.is_repeat)
    }

    pub fn narrative_for(&self, career: &str) -> Option<&CareerNarrative> {
        self.narratives.iter().find(|n| n.career == career)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{FieldScoreMap, TraitScoreMap};

    fn profile() -> ScoreProfile {
        let fields: FieldScoreMap = [
            (EngineeringField::Mechatronics, 1.0),
            (EngineeringField::Robotics, 0.95),
            (EngineeringField::Electrical, 0.9),
        ]
        .into_iter()
        .collect();
        ScoreProfile::new(fields, TraitScoreMap::new())
    }

    #[test]
    fn test_display_percentage_is_clamped() {
        assert_eq!(display_percentage(1.37), 100);
        assert_eq!(display_percentage(-0.2), 0);
        assert_eq!(display_percentage(0.456), 46);
    }

    #[test]
    fn test_build_without_analysis() {
        let engine = RecommendationEngine::default();
        let profile = profile();
        let ranked = engine.recommend(&profile);
        let report = RecommendationReport::build(&engine, &profile, &ranked, None);

        assert_eq!(report.careers.len(), 12);
        assert_eq!(report.distinct_careers().count(), 8);
        assert!(report.careers[8].is_repeat);
        assert_eq!(report.careers[0].rank, 1);
        assert_eq!(report.careers[0].name, "Ingeniería Mecatrónica");
        assert!(report.careers[0].score > 1.0);
        assert_eq!(report.careers[0].match_percentage, 100);
        assert!(report.narratives.is_empty());
        assert!(report.structured_analysis.is_none());
        assert_eq!(report.profile.primary_field, EngineeringField::Mechatronics);
    }

    #[test]
    fn test_build_with_raw_analysis() {
        let engine = RecommendationEngine::default();
        let profile = profile();
        let ranked = engine.recommend(&profile);
        let source = AnalysisSource::from(
            "La Ingeniería Mecatrónica combina tus fortalezas. La Robótica también encaja".to_string(),
        );
        let report = RecommendationReport::build(&engine, &profile, &ranked, Some(&source));

        let narrative = report.narrative_for("Ingeniería Mecatrónica").unwrap();
        assert_eq!(
            narrative.analysis.why_recommended,
            "La Ingeniería Mecatrónica combina tus fortalezas."
        );
        assert!(report.structured_analysis.is_some());
    }
}
