//! Where a career analysis comes from: bare text or a full backend payload

use crate::analysis::composer::{NarrativeComposer, PerCareerAnalysis};
use crate::analysis::detailed::StructuredAnalysis;
use crate::analysis::response::AnalysisResponse;

#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisSource {
    Raw(String),
    Payload(Box<AnalysisResponse>),
}

impl AnalysisSource {
    pub fn raw_text(&self) -> Option<&str> {
        match self {
            AnalysisSource::Raw(text) => Some(text.as_str()).filter(|t| !t.trim().is_empty()),
            AnalysisSource::Payload(response) => response.raw_text(),
        }
    }

    pub fn structured(&self, composer: &NarrativeComposer) -> Option<StructuredAnalysis> {
        match self {
            AnalysisSource::Raw(_) => self
                .raw_text()
                .map(|text| StructuredAnalysis::from_raw_with(composer.sections(), composer.lists(), text)),
            AnalysisSource::Payload(response) => response.analysis(composer),
        }
    }

    pub fn career_analysis_for(&self, career_name: &str, composer: &NarrativeComposer) -> Option<PerCareerAnalysis> {
        match self {
            AnalysisSource::Raw(text) => composer.compose(career_name, text, None),
            AnalysisSource::Payload(response) => response.career_analysis_for(career_name, composer),
        }
    }

    pub fn can_generate_analysis_for(&self, career_name: &str, composer: &NarrativeComposer) -> bool {
        match self {
            AnalysisSource::Raw(text) => composer.can_generate_analysis_for(career_name, text),
            AnalysisSource::Payload(response) => response.can_generate_analysis_for(career_name, composer),
        }
    }

    pub fn payload(&self) -> Option<&AnalysisResponse> {
        match self {
            AnalysisSource::Payload(response) => Some(response.as_ref()),
            AnalysisSource::Raw(_) => None,
        }
    }
}

impl From<String> for AnalysisSource {
    fn from(text: String) -> Self {
        AnalysisSource::Raw(text)
    }
}

impl From<AnalysisResponse> for AnalysisSource {
    fn from(response: AnalysisResponse) -> Self {
        AnalysisSource::Payload(Box::new(response))
    }
}
