//! User profile data: fields, traits, score maps and the career catalog

pub mod catalog;
pub mod feedback;
pub mod fields;
pub mod scores;

pub use catalog::{CareerCandidate, CareerCatalog};
pub use fields::{EngineeringField, PersonalityTrait};
pub use scores::{FieldScoreMap, ScoreMap, ScoreProfile, TraitScoreMap};
