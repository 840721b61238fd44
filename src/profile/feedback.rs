//! Profile summaries derived from a user's score maps

use crate::profile::fields::{EngineeringField, PersonalityTrait};
use crate::profile::scores::{FieldScoreMap, ScoreProfile, TraitScoreMap};
use serde::{Deserialize, Serialize};

const INCOMPLETE_PROFILE: &str = "¡Completa la prueba para ver tus resultados!";

/// Anonymised view of a profile, suitable for export alongside a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSnapshot {
    pub primary_field: EngineeringField,
    pub secondary_field: EngineeringField,
    pub primary_trait: PersonalityTrait,
    pub secondary_trait: PersonalityTrait,
    pub field_scores: FieldScoreMap,
    pub trait_scores: TraitScoreMap,
}

impl ProfileSnapshot {
    pub fn from_profile(profile: &ScoreProfile) -> Self {
        Self {
            primary_field: profile.field_scores.primary(),
            secondary_field: profile.field_scores.secondary(),
            primary_trait: profile.trait_scores.primary(),
            secondary_trait: profile.trait_scores.secondary(),
            field_scores: profile.field_scores.clone(),
            trait_scores: profile.trait_scores.clone(),
        }
    }
}

/// Short Spanish narrative about the user's strongest field and trait.
pub fn feedback(profile: &ScoreProfile) -> String {
    if profile.is_empty() {
        return INCOMPLETE_PROFILE.to_string();
    }

    let primary_field = profile.field_scores.primary();
    let secondary_field = profile.field_scores.secondary();
    let primary_trait = profile.trait_scores.primary();

    let mut text = format!(
        "¡Basado en tus elecciones, podrías disfrutar explorando {}!\n\n",
        primary_field.label()
    );
    text.push_str(&format!(
        "Pareces ser alguien que {}. ",
        lowercase_first(primary_trait.description())
    ));
    text.push_str(&format!(
        "Tus intereses se alinean bien con {}, que {}\n\n",
        primary_field.label(),
        lowercase_first(primary_field.description())
    ));
    text.push_str(&format!(
        "También podrías disfrutar {}, especialmente si estás interesado en {}.\n\n",
        secondary_field.label(),
        lowercase_first(secondary_field.real_world_example())
    ));
    text.push_str("Los ingenieros en estos campos trabajan en proyectos emocionantes como:\n");
    text.push_str(&format!("• {}\n", primary_field.real_world_example()));
    text.push_str(&format!("• {}", secondary_field.real_world_example()));
    text
}

fn lowercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
