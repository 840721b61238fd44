//! Document-wide structured analysis

use crate::analysis::list::ListExtractor;
use crate::analysis::section::{
    SectionExtractor, INTELLIGENCES_HEADER, MBTI_HEADER, OPPORTUNITIES_HEADER, SKILLS_HEADER, WHY_HEADER,
};
use serde::{Deserialize, Serialize};

pub const PERSONALITY_UNAVAILABLE: &str = "Análisis de personalidad no disponible";
pub const INTELLIGENCES_UNAVAILABLE: &str = "Análisis de inteligencias no disponible";
pub const RATIONALE_UNAVAILABLE: &str = "Justificación de recomendaciones no disponible";

pub const DEFAULT_OPPORTUNITIES: [&str; 3] = [
    "Trabajar en proyectos innovadores y de impacto social",
    "Desarrollar soluciones creativas a problemas importantes",
    "Contribuir al cuidado del medio ambiente",
];

pub const DEFAULT_CHALLENGES: [&str; 3] = [
    "Adaptarse a entornos técnicos y cuantitativos",
    "Mejorar habilidades de comunicación interpersonal",
    "Equilibrar idealismo con practicidad en soluciones",
];

const CHALLENGES_LABEL: &str = "Desafíos";
const OPPORTUNITIES_LABEL: &str = "Oportunidades:";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuredAnalysis {
    pub personality_summary: String,
    pub intelligences_summary: String,
    pub recommendation_rationale: String,
    pub suggested_skills: Vec<String>,
    pub opportunities: Vec<String>,
    pub challenges: Vec<String>,
}

impl StructuredAnalysis {
    /// Derive every field from a raw analysis document using the default extractors.
    pub fn from_raw(text: &str) -> Self {
        Self::from_raw_with(&SectionExtractor::default(), &ListExtractor::default(), text)
    }

    pub fn from_raw_with(sections: &SectionExtractor, lists: &ListExtractor, text: &str) -> Self {
        let section_or = |header: &str, fallback: &str| {
            sections
                .extract(text, header)
                .unwrap_or_else(|| fallback.to_string())
        };

        Self {
            personality_summary: section_or(WHY_HEADER, PERSONALITY_UNAVAILABLE),
            intelligences_summary: section_or(INTELLIGENCES_HEADER, INTELLIGENCES_UNAVAILABLE),
            recommendation_rationale: section_or(MBTI_HEADER, RATIONALE_UNAVAILABLE),
            suggested_skills: lists.extract(sections, text, SKILLS_HEADER),
            opportunities: opportunities(sections, text),
            challenges: challenges(sections, text),
        }
    }
}

fn non_empty_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn or_default(items: Vec<String>, defaults: &[&str]) -> Vec<String> {
    if items.is_empty() {
        defaults.iter().map(|s| s.to_string()).collect()
    } else {
        items
    }
}

/// Lines of the opportunities section before the challenges label.
pub fn opportunities(sections: &SectionExtractor, text: &str) -> Vec<String> {
    let items = sections
        .extract(text, OPPORTUNITIES_HEADER)
        .map(|section| {
            let before = section.split(CHALLENGES_LABEL).next().unwrap_or_default();
            non_empty_lines(before)
                .into_iter()
                .filter(|line| !line.contains(OPPORTUNITIES_LABEL))
                .collect()
        })
        .unwrap_or_default();
    or_default(items, &DEFAULT_OPPORTUNITIES)
}

/// Lines of the opportunities section after the last challenges label.
pub fn challenges(sections: &SectionExtractor, text: &str) -> Vec<String> {
    let items = sections
        .extract(text, OPPORTUNITIES_HEADER)
        .and_then(|section| {
            section
                .rsplit_once(CHALLENGES_LABEL)
                .map(|(_, after)| non_empty_lines(after.trim_start_matches(':')))
        })
        .unwrap_or_default();
    or_default(items, &DEFAULT_CHALLENGES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::list::DEFAULT_SKILLS;

    const DOC: &str = "### Por qué estas carreras son adecuadas para este perfil específico\n\
        Encajan con tu curiosidad.\n\
        ### Cómo las inteligencias múltiples del usuario se relacionan con las demandas de cada carrera\n\
        Tu inteligencia espacial ayuda.\n\
        ### Qué habilidades específicas podría desarrollar el usuario\n\
        • Programación\n\
        • Liderazgo\n\
        ### Oportunidades y desafíos\n\
        Oportunidades:\n\
        - Empleo en hospitales\n\
        - Investigación aplicada\n\
        Desafíos:\n\
        - Carga matemática alta\n";

    #[test]
    fn test_from_raw_extracts_sections() {
        let analysis = StructuredAnalysis::from_raw(DOC);
        assert_eq!(analysis.personality_summary, "Encajan con tu curiosidad.");
        assert_eq!(analysis.intelligences_summary, "Tu inteligencia espacial ayuda.");
        assert_eq!(analysis.recommendation_rationale, RATIONALE_UNAVAILABLE);
        assert_eq!(analysis.suggested_skills, vec!["Programación", "Liderazgo"]);
    }

    #[test]
    fn test_opportunities_and_challenges_split() {
        let analysis = StructuredAnalysis::from_raw(DOC);
        assert_eq!(analysis.opportunities, vec!["- Empleo en hospitales", "- Investigación aplicada"]);
        assert_eq!(analysis.challenges, vec!["- Carga matemática alta"]);
    }

    #[test]
    fn test_defaults_when_sections_missing() {
        let analysis = StructuredAnalysis::from_raw("Texto sin estructura");
        assert_eq!(analysis.personality_summary, PERSONALITY_UNAVAILABLE);
        assert_eq!(analysis.intelligences_summary, INTELLIGENCES_UNAVAILABLE);
        assert_eq!(analysis.suggested_skills, DEFAULT_SKILLS.to_vec());
        assert_eq!(analysis.opportunities, DEFAULT_OPPORTUNITIES.to_vec());
        assert_eq!(analysis.challenges, DEFAULT_CHALLENGES.to_vec());
    }

    #[test]
    fn test_challenges_default_without_label() {
        let text = "Oportunidades y desafíos\nCrecimiento profesional\n";
        let sections = SectionExtractor::default();
        assert_eq!(opportunities(&sections, text), vec!["Crecimiento profesional"]);
        assert_eq!(challenges(&sections, text), DEFAULT_CHALLENGES.to_vec());
    }

    #[test]
    fn test_round_trips_through_json() {
        let analysis = StructuredAnalysis::from_raw(DOC);
        let json = serde_json::to_string(&analysis).unwrap();
        assert!(json.contains("\"suggested_skills\""));
        let parsed: StructuredAnalysis = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, analysis);
    }
}
