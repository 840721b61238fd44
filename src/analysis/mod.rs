//! Heuristic extraction of structured rationale from free-text analysis documents

pub mod composer;
pub mod detailed;
pub mod list;
pub mod mentions;
pub mod response;
pub mod section;
pub mod source;

pub use composer::{NarrativeComposer, PerCareerAnalysis};
pub use detailed::StructuredAnalysis;
pub use list::{LineStrategy, ListExtractor, ListStrategy, MergedStrategy, PatternStrategy};
pub use mentions::find_mentions;
pub use response::{AnalysisResponse, CareerRecommendation};
pub use section::SectionExtractor;
pub use source::AnalysisSource;
