//! Score maps produced by the vocational quiz

use crate::profile::fields::{EngineeringField, PersonalityTrait};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Key of a score map: a closed enum whose `Ord` is its declaration order.
pub trait ScoreKey: Copy + Ord {
    /// Reported as primary when the map is empty.
    const FALLBACK_PRIMARY: Self;
    /// Reported as secondary when the map has fewer than two entries.
    const FALLBACK_SECONDARY: Self;
}

impl ScoreKey for EngineeringField {
    const FALLBACK_PRIMARY: Self = EngineeringField::Mechatronics;
    const FALLBACK_SECONDARY: Self = EngineeringField::Robotics;
}

impl ScoreKey for PersonalityTrait {
    const FALLBACK_PRIMARY: Self = PersonalityTrait::ProblemSolver;
    const FALLBACK_SECONDARY: Self = PersonalityTrait::Creative;
}

/// Mapping from a field or trait to a score, nominally in [0,1].
///
/// Missing entries read as 0.0. Iteration follows declaration order of the
/// key enum, which also breaks ties in [`ScoreMap::top`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreMap<K: Ord>(BTreeMap<K, f64>);

pub type FieldScoreMap = ScoreMap<EngineeringField>;
pub type TraitScoreMap = ScoreMap<PersonalityTrait>;

impl<K: ScoreKey> Default for ScoreMap<K> {
    fn default() -> Self {
        Self(BTreeMap::new())
    }
}

impl<K: ScoreKey> FromIterator<(K, f64)> for ScoreMap<K> {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<K: ScoreKey> ScoreMap<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: K, score: f64) {
        self.0.insert(key, score);
    }

    /// Score for `key`, 0.0 when absent.
    pub fn get(&self, key: K) -> f64 {
        self.0.get(&key).copied().unwrap_or(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (K, f64)> + '_ {
        self.0.iter().map(|(k, v)| (*k, *v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The `n` highest-scoring entries, descending; equal scores keep declaration order.
    pub fn top(&self, n: usize) -> Vec<(K, f64)> {
        let mut entries: Vec<(K, f64)> = self.iter().collect();
        entries.sort_by(|a, b| b.1.total_cmp(&a.1));
        entries.truncate(n);
        entries
    }

    pub fn primary(&self) -> K {
        self.top(1).first().map(|(k, _)| *k).unwrap_or(K::FALLBACK_PRIMARY)
    }

    pub fn secondary(&self) -> K {
        self.top(2).get(1).map(|(k, _)| *k).unwrap_or(K::FALLBACK_SECONDARY)
    }

    pub fn max(&self) -> Option<f64> {
        self.0.values().copied().max_by(|a, b| a.total_cmp(b))
    }

    /// Score relative to the strongest entry; 0.0 when nothing scored above zero.
    pub fn normalized(&self, key: K) -> f64 {
        match self.max() {
            Some(max) if max > 0.0 => self.get(key) / max,
            _ => 0.0,
        }
    }
}

/// A user's quiz outcome: both score maps, as loaded from a profile file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreProfile {
    #[serde(default)]
    pub field_scores: FieldScoreMap,
    #[serde(default)]
    pub trait_scores: TraitScoreMap,
}

impl ScoreProfile {
    pub fn new(field_scores: FieldScoreMap, trait_scores: TraitScoreMap) -> Self {
        Self {
            field_scores,
            trait_scores,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.field_scores.is_empty() && self.trait_scores.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use EngineeringField::*;

    #[test]
    fn test_missing_entries_default_to_zero() {
        let scores: FieldScoreMap = [(ComputerScience, 0.9)].into_iter().collect();
        assert_eq!(scores.get(ComputerScience), 0.9);
        assert_eq!(scores.get(Civil), 0.0);
    }

    #[test]
    fn test_top_breaks_ties_by_declaration_order() {
        let scores: FieldScoreMap = [(Civil, 0.5), (Robotics, 0.5), (Mechanical, 0.7), (Mechatronics, 0.5)]
            .into_iter()
            .collect();
        let top: Vec<EngineeringField> = scores.top(3).into_iter().map(|(f, _)| f).collect();
        assert_eq!(top, vec![Mechanical, Mechatronics, Robotics]);
    }

    #[test]
    fn test_primary_and_secondary_fallbacks() {
        let empty = FieldScoreMap::new();
        assert_eq!(empty.primary(), Mechatronics);
        assert_eq!(empty.secondary(), Robotics);

        let traits = TraitScoreMap::new();
        assert_eq!(traits.primary(), PersonalityTrait::ProblemSolver);
        assert_eq!(traits.secondary(), PersonalityTrait::Creative);

        let one: FieldScoreMap = [(Chemical, 0.2)].into_iter().collect();
        assert_eq!(one.primary(), Chemical);
        assert_eq!(one.secondary(), Robotics);
    }

    #[test]
    fn test_normalized_relative_to_max() {
        let scores: FieldScoreMap = [(Civil, 0.4), (Electrical, 0.8)].into_iter().collect();
        assert!((scores.normalized(Civil) - 0.5).abs() < 1e-12);
        assert_eq!(scores.normalized(Electrical), 1.0);

        let zeros: FieldScoreMap = [(Civil, 0.0)].into_iter().collect();
        assert_eq!(zeros.normalized(Civil), 0.0);
    }

    #[test]
    fn test_profile_deserializes_from_json() {
        let json = r#"{
            "field_scores": {"computerScience": 0.9, "Ingeniería Mecánica": 0.85},
            "trait_scores": {"analytical": 0.7}
        }"#;
        let profile: ScoreProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.field_scores.get(ComputerScience), 0.9);
        assert_eq!(profile.field_scores.get(Mechanical), 0.85);
        assert_eq!(profile.trait_scores.get(PersonalityTrait::Analytical), 0.7);
    }

    #[test]
    fn test_profile_missing_maps_default_empty() {
        let profile: ScoreProfile = serde_json::from_str("{}").unwrap();
        assert!(profile.is_empty());
    }
}
