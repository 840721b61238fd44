//! Backend analysis payload

use crate::analysis::composer::{NarrativeComposer, PerCareerAnalysis};
use crate::analysis::detailed::StructuredAnalysis;
use crate::error::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub status: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub response_id: i64,
    #[serde(default)]
    pub llm_result_id: i64,
    #[serde(default)]
    pub llm_provider: String,
    #[serde(default)]
    pub mbti_profile: MbtiProfile,
    #[serde(default)]
    pub mi_scores: MiScores,
    #[serde(default)]
    pub mi_ranking: Vec<String>,
    #[serde(default)]
    pub career_recommendations: Vec<CareerRecommendation>,
    #[serde(default)]
    pub career_analysis: Option<String>,
    #[serde(default)]
    pub detailed_analysis: Option<StructuredAnalysis>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MbtiProfile {
    pub code: String,
    pub weights: MbtiWeights,
    #[serde(default)]
    pub vector: Vec<i32>,
}

/// Preference strength on each MBTI axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MbtiWeights {
    #[serde(rename = "E/I")]
    pub extraversion_introversion: f64,
    #[serde(rename = "S/N")]
    pub sensing_intuition: f64,
    #[serde(rename = "T/F")]
    pub thinking_feeling: f64,
    #[serde(rename = "J/P")]
    pub judging_perceiving: f64,
}

/// Multiple-intelligence scores.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MiScores {
    #[serde(rename = "Lin")]
    pub linguistic: f64,
    #[serde(rename = "LogMath")]
    pub logical_math: f64,
    #[serde(rename = "Spa")]
    pub spatial: f64,
    #[serde(rename = "BodKin")]
    pub bodily_kinesthetic: f64,
    #[serde(rename = "Mus")]
    pub musical: f64,
    #[serde(rename = "Inter")]
    pub interpersonal: f64,
    #[serde(rename = "Intra")]
    pub intrapersonal: f64,
    #[serde(rename = "Nat")]
    pub naturalist: f64,
}

impl MiScores {
    /// (short code, score) pairs, highest first. Ties keep declaration order.
    pub fn ranked(&self) -> Vec<(&'static str, f64)> {
        let mut pairs = vec![
            ("Lin", self.linguistic),
            ("LogMath", self.logical_math),
            ("Spa", self.spatial),
            ("BodKin", self.bodily_kinesthetic),
            ("Mus", self.musical),
            ("Inter", self.interpersonal),
            ("Intra", self.intrapersonal),
            ("Nat", self.naturalist),
        ];
        pairs.sort_by(|a, b| b.1.total_cmp(&a.1));
        pairs
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerRecommendation {
    pub nombre: String,
    pub universidad: String,
    pub ciudad: String,
    #[serde(default)]
    pub match_score: f64,
    #[serde(default)]
    pub career_analysis: Option<PerCareerAnalysis>,
}

impl CareerRecommendation {
    /// Identity used to recognise the same recommendation twice.
    pub fn id(&self) -> String {
        format!("{}{}", self.nombre, self.universidad)
    }
}

impl AnalysisResponse {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn raw_text(&self) -> Option<&str> {
        self.career_analysis.as_deref().filter(|t| !t.trim().is_empty())
    }

    /// The supplied structured analysis, or one derived from the raw text.
    pub fn analysis(&self, composer: &NarrativeComposer) -> Option<StructuredAnalysis> {
        if let Some(detailed) = &self.detailed_analysis {
            return Some(detailed.clone());
        }
        self.raw_text()
            .map(|text| StructuredAnalysis::from_raw_with(composer.sections(), composer.lists(), text))
    }

    /// Recommendation whose name matches `career_name`, ignoring case.
    pub fn recommendation(&self, career_name: &str) -> Option<&CareerRecommendation> {
        let wanted = career_name.trim().to_lowercase();
        self.career_recommendations
            .iter()
            .find(|r| r.nombre.to_lowercase() == wanted)
    }

    pub fn career_analysis_for(&self, career_name: &str, composer: &NarrativeComposer) -> Option<PerCareerAnalysis> {
        let supplied = self
            .recommendation(career_name)
            .and_then(|r| r.career_analysis.as_ref());
        composer.compose(career_name, self.raw_text().unwrap_or_default(), supplied)
    }

    pub fn can_generate_analysis_for(&self, career_name: &str, composer: &NarrativeComposer) -> bool {
        self.raw_text()
            .map(|text| composer.can_generate_analysis_for(career_name, text))
            .unwrap_or(false)
    }

    pub fn is_success(&self) -> bool {
        self.status.eq_ignore_ascii_case("success") || self.status.eq_ignore_ascii_case("ok")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str = r#"{
        "status": "success",
        "message": "Análisis completado",
        "response_id": 41,
        "llm_result_id": 7,
        "llm_provider": "openai",
        "mbti_profile": {
            "code": "INTJ",
            "weights": {"E/I": -0.4, "S/N": 0.6, "T/F": 0.3, "J/P": -0.2},
            "vector": [0, 1, 1, 0]
        },
        "mi_scores": {"Lin": 0.5, "LogMath": 0.9, "Spa": 0.7, "BodKin": 0.2,
                      "Mus": 0.1, "Inter": 0.4, "Intra": 0.6, "Nat": 0.3},
        "mi_ranking": ["LogMath", "Spa", "Intra"],
        "career_recommendations": [
            {"nombre": "Ingeniería en Robótica", "universidad": "TEC", "ciudad": "Monterrey",
             "match_score": 0.92,
             "career_analysis": {"personality_fit": "p", "intelligences_fit": "i",
                                 "skills_to_focus": ["s"], "why_recommended": "w"}},
            {"nombre": "Ingeniería Civil", "universidad": "UNAM", "ciudad": "CDMX", "match_score": 0.71}
        ],
        "career_analysis": "La Ingeniería Civil diseña infraestructura. Otra frase."
    }"#;

    #[test]
    fn test_parses_backend_payload() {
        let response = AnalysisResponse::from_json(PAYLOAD).unwrap();
        assert!(response.is_success());
        assert_eq!(response.mbti_profile.code, "INTJ");
        assert_eq!(response.mbti_profile.weights.sensing_intuition, 0.6);
        assert_eq!(response.mi_scores.logical_math, 0.9);
        assert_eq!(response.career_recommendations.len(), 2);
        assert_eq!(response.mi_scores.ranked()[0].0, "LogMath");
    }

    #[test]
    fn test_embedded_analysis_preferred() {
        let response = AnalysisResponse::from_json(PAYLOAD).unwrap();
        let composer = NarrativeComposer::default();
        let analysis = response.career_analysis_for("Ingeniería en Robótica", &composer).unwrap();
        assert_eq!(analysis.why_recommended, "w");
    }

    #[test]
    fn test_falls_back_to_raw_text() {
        let response = AnalysisResponse::from_json(PAYLOAD).unwrap();
        let composer = NarrativeComposer::default();
        let analysis = response.career_analysis_for("Ingeniería Civil", &composer).unwrap();
        assert_eq!(analysis.why_recommended, "La Ingeniería Civil diseña infraestructura.");
        assert!(response.can_generate_analysis_for("Ingeniería Civil", &composer));
        assert!(!response.can_generate_analysis_for("Carrera Inexistente", &composer));
    }

    #[test]
    fn test_analysis_derived_when_not_supplied() {
        let response = AnalysisResponse::from_json(PAYLOAD).unwrap();
        let analysis = response.analysis(&NarrativeComposer::default()).unwrap();
        assert_eq!(analysis.opportunities.len(), 3);
    }

    #[test]
    fn test_no_analysis_without_text_or_structure() {
        let response = AnalysisResponse::from_json(r#"{"status": "success"}"#).unwrap();
        assert!(response.analysis(&NarrativeComposer::default()).is_none());
        assert!(response
            .career_analysis_for("Ingeniería Civil", &NarrativeComposer::default())
            .is_none());
    }

    #[test]
    fn test_recommendation_id() {
        let response = AnalysisResponse::from_json(PAYLOAD).unwrap();
        assert_eq!(response.career_recommendations[1].id(), "Ingeniería CivilUNAM");
    }
}
