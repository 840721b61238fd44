//! Header-delimited section slicing of raw analysis documents

use crate::error::{PathfinderError, Result};
use aho_corasick::{AhoCorasick, MatchKind};
use log::debug;

pub const MBTI_HEADER: &str = "Cómo las características del perfil MBTI se alinean con cada carrera recomendada";
pub const INTELLIGENCES_HEADER: &str =
    "Cómo las inteligencias múltiples del usuario se relacionan con las demandas de cada carrera";
pub const SKILLS_HEADER: &str = "Qué habilidades específicas podría desarrollar el usuario";
pub const WHY_HEADER: &str = "Por qué estas carreras son adecuadas para este perfil específico";
pub const OPPORTUNITIES_HEADER: &str = "Oportunidades y desafíos";

pub const DEFAULT_BOUNDARY_MARKERS: [&str; 3] = ["###", "Conclusión", "Oportunidades y desafíos"];

/// Slices the text that follows a header up to the next boundary marker.
#[derive(Debug, Clone)]
pub struct SectionExtractor {
    boundaries: AhoCorasick,
    markers: Vec<String>,
}

impl SectionExtractor {
    pub fn new() -> Result<Self> {
        Self::with_markers(DEFAULT_BOUNDARY_MARKERS)
    }

    pub fn with_markers<I, S>(markers: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let markers: Vec<String> = markers
            .into_iter()
            .map(|m| m.as_ref().to_string())
            .filter(|m| !m.is_empty())
            .collect();

        if markers.is_empty() {
            return Err(PathfinderError::Configuration(
                "At least one section boundary marker is required".to_string(),
            ));
        }

        let boundaries = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostFirst)
            .build(&markers)
            .map_err(|e| PathfinderError::Processing(format!("Failed to build boundary matcher: {}", e)))?;

        Ok(Self { boundaries, markers })
    }

    pub fn markers(&self) -> &[String] {
        &self.markers
    }

    /// Trimmed text between the first occurrence of `header` and the nearest
    /// following boundary marker (or the end of the text).
    ///
    /// Header matching is case-sensitive. Returns `None` when the header is absent.
    pub fn extract(&self, text: &str, header: &str) -> Option<String> {
        if header.is_empty() {
            return None;
        }

        let Some(start) = text.find(header) else {
            debug!("Section '{}' not found", header);
            return None;
        };
        let rest = &text[start + header.len()..];

        let end = self
            .boundaries
            .find(rest)
            .map(|m| m.start())
            .unwrap_or(rest.len());

        Some(rest[..end].trim().to_string())
    }

    /// Like [`extract`](Self::extract) but treats an empty section as missing.
    pub fn extract_non_empty(&self, text: &str, header: &str) -> Option<String> {
        self.extract(text, header).filter(|s| !s.is_empty())
    }
}

impl Default for SectionExtractor {
    fn default() -> Self {
        Self::new().expect("Failed to create default section extractor")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = "## Análisis\n\
        ### Qué habilidades específicas podría desarrollar el usuario\n\
        - **Python:** programación\n\
        ### Conclusión\nFin.";

    #[test]
    fn test_extracts_until_next_heading() {
        let extractor = SectionExtractor::default();
        let section = extractor.extract(DOC, SKILLS_HEADER).unwrap();
        assert_eq!(section, "- **Python:** programación");
    }

    #[test]
    fn test_missing_header_is_absent() {
        let extractor = SectionExtractor::default();
        assert!(extractor.extract(DOC, WHY_HEADER).is_none());
    }

    #[test]
    fn test_header_match_is_case_sensitive() {
        let extractor = SectionExtractor::default();
        let lower = SKILLS_HEADER.to_lowercase();
        assert!(extractor.extract(DOC, &lower).is_none());
    }

    #[test]
    fn test_runs_to_end_without_boundary() {
        let extractor = SectionExtractor::default();
        let text = "Por qué estas carreras son adecuadas para este perfil específico\n  Porque sí.  \n";
        assert_eq!(extractor.extract(text, WHY_HEADER).unwrap(), "Porque sí.");
    }

    #[test]
    fn test_earliest_boundary_wins() {
        let extractor = SectionExtractor::default();
        let text = "Inicio\nuno Conclusión dos ### tres";
        assert_eq!(extractor.extract(text, "Inicio").unwrap(), "uno");
    }

    #[test]
    fn test_header_followed_directly_by_boundary_is_empty() {
        let extractor = SectionExtractor::default();
        let text = "Inicio### Siguiente";
        assert_eq!(extractor.extract(text, "Inicio").unwrap(), "");
        assert!(extractor.extract_non_empty(text, "Inicio").is_none());
    }

    #[test]
    fn test_extraction_is_repeatable() {
        let extractor = SectionExtractor::default();
        assert_eq!(extractor.extract(DOC, SKILLS_HEADER), extractor.extract(DOC, SKILLS_HEADER));
    }

    #[test]
    fn test_custom_markers() {
        let extractor = SectionExtractor::with_markers(["FIN"]).unwrap();
        let text = "Cabecera texto ### sigue FIN resto";
        assert_eq!(extractor.extract(text, "Cabecera").unwrap(), "texto ### sigue");
    }

    #[test]
    fn test_empty_marker_set_rejected() {
        let markers: Vec<String> = vec![String::new()];
        assert!(SectionExtractor::with_markers(markers).is_err());
    }
}
