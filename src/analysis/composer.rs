//! Per-career narrative assembly from a raw analysis document

use crate::analysis::list::ListExtractor;
use crate::analysis::mentions::{self, find_mentions, general_field, sentences_containing};
use crate::analysis::section::{
    SectionExtractor, INTELLIGENCES_HEADER, MBTI_HEADER, SKILLS_HEADER, WHY_HEADER,
};
use crate::error::Result;
use log::debug;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PERSONALITY_FIT: &str = "Tu perfil MBTI se alinea bien con las demandas de esta carrera";
pub const DEFAULT_INTELLIGENCES_FIT: &str = "Tus inteligencias múltiples te dan una base sólida para esta carrera";

/// Rationale for recommending one career.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerCareerAnalysis {
    pub personality_fit: String,
    pub intelligences_fit: String,
    pub skills_to_focus: Vec<String>,
    pub why_recommended: String,
}

/// Builds a [`PerCareerAnalysis`] from free text when none was supplied.
#[derive(Debug, Default)]
pub struct NarrativeComposer {
    sections: SectionExtractor,
    lists: ListExtractor,
}

impl NarrativeComposer {
    pub fn new(sections: SectionExtractor, lists: ListExtractor) -> Self {
        Self { sections, lists }
    }

    pub fn with_markers(markers: &[String]) -> Result<Self> {
        Ok(Self::new(SectionExtractor::with_markers(markers)?, ListExtractor::default()))
    }

    pub fn sections(&self) -> &SectionExtractor {
        &self.sections
    }

    pub fn lists(&self) -> &ListExtractor {
        &self.lists
    }

    /// A supplied analysis is returned unchanged. Otherwise one is derived
    /// from `raw_text`, or `None` when the text never mentions the career.
    pub fn compose(
        &self,
        career_name: &str,
        raw_text: &str,
        supplied: Option<&PerCareerAnalysis>,
    ) -> Option<PerCareerAnalysis> {
        if let Some(analysis) = supplied {
            return Some(analysis.clone());
        }
        let career_name = career_name.trim();
        if career_name.is_empty() || raw_text.trim().is_empty() {
            return None;
        }

        let career_mentions = find_mentions(career_name, raw_text);
        if career_mentions.is_empty() {
            debug!("No mentions of '{}' in analysis text", career_name);
            return None;
        }

        let personality_fit = self
            .relevant_section_for_career(raw_text, career_name, MBTI_HEADER)
            .unwrap_or_else(|| DEFAULT_PERSONALITY_FIT.to_string());
        let intelligences_fit = self
            .relevant_section_for_career(raw_text, career_name, INTELLIGENCES_HEADER)
            .unwrap_or_else(|| DEFAULT_INTELLIGENCES_FIT.to_string());
        let skills_to_focus = self.lists.extract(&self.sections, raw_text, SKILLS_HEADER);
        let why_recommended = self.why_recommended(career_name, raw_text, &career_mentions);

        Some(PerCareerAnalysis {
            personality_fit,
            intelligences_fit,
            skills_to_focus,
            why_recommended,
        })
    }

    pub fn can_generate_analysis_for(&self, career_name: &str, raw_text: &str) -> bool {
        !raw_text.trim().is_empty() && mentions::has_mentions(career_name, raw_text)
    }

    /// Sentences of the `header` section that mention the career, else its
    /// general field, else the section's first sentence.
    pub fn relevant_section_for_career(&self, text: &str, career_name: &str, header: &str) -> Option<String> {
        let section = self.sections.extract_non_empty(text, header)?;
        let pieces = mentions::sentences(&section);

        let mut relevant = sentences_containing(&pieces, career_name);
        if relevant.is_empty() {
            if let Some(field) = general_field(career_name) {
                relevant = sentences_containing(&pieces, field);
            }
        }
        if relevant.is_empty() {
            relevant = pieces.first().map(|s| vec![s.trim().to_string()]).unwrap_or_default();
        }

        if relevant.is_empty() {
            None
        } else {
            Some(join_sentences(&relevant))
        }
    }

    pub fn why_recommended(&self, career_name: &str, text: &str, career_mentions: &[String]) -> String {
        if !career_mentions.is_empty() {
            return join_sentences(career_mentions);
        }

        if let Some(section) = self.sections.extract(text, WHY_HEADER) {
            let first = mentions::sentences(&section).into_iter().next().map(str::trim).unwrap_or("");
            return format!("La carrera de {} se alinea bien con tu perfil. {}", career_name, first);
        }

        default_why_recommended(career_name)
    }
}

pub fn default_why_recommended(career_name: &str) -> String {
    format!(
        "La carrera de {} se recomienda porque se alinea con tus características de personalidad e \
         inteligencias múltiples, ofreciéndote un camino profesional donde podrás aplicar tus habilidades \
         naturales mientras contribuyes significativamente en un campo importante.",
        career_name
    )
}

/// `a. b. c.` with no doubled final period.
pub fn join_sentences<S: AsRef<str>>(sentences: &[S]) -> String {
    let pieces: Vec<&str> = sentences
        .iter()
        .map(|s| s.as_ref().trim().trim_end_matches('.'))
        .collect();
    format!("{}.", pieces.join(mentions::SENTENCE_DELIMITER))
}
