//! Field-to-field affinity graph and field-to-trait relevance table

use crate::profile::fields::{EngineeringField, PersonalityTrait};
use std::collections::{BTreeMap, HashMap};

pub const DEFAULT_AFFINITY: f64 = 0.1;

/// Undirected, sparse weighted graph over engineering fields.
///
/// Edges are stored under an ordered key so lookups are symmetric. Any pair
/// without an edge (self-pairs included) resolves to the default weight.
#[derive(Debug, Clone)]
pub struct AffinityGraph {
    edges: HashMap<(EngineeringField, EngineeringField), f64>,
    default_weight: f64,
}

impl AffinityGraph {
    pub fn new(default_weight: f64) -> Self {
        Self {
            edges: HashMap::new(),
            default_weight,
        }
    }

    /// Add or replace the edge between `a` and `b`. Weight is clamped into (0,1].
    pub fn with_edge(mut self, a: EngineeringField, b: EngineeringField, weight: f64) -> Self {
        self.edges.insert(Self::edge_key(a, b), weight.clamp(f64::MIN_POSITIVE, 1.0));
        self
    }

    pub fn with_default_weight(mut self, default_weight: f64) -> Self {
        self.default_weight = default_weight;
        self
    }

    pub fn affinity(&self, a: EngineeringField, b: EngineeringField) -> f64 {
        self.edges
            .get(&Self::edge_key(a, b))
            .copied()
            .unwrap_or(self.default_weight)
    }

    pub fn default_weight(&self) -> f64 {
        self.default_weight
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn edge_key(a: EngineeringField, b: EngineeringField) -> (EngineeringField, EngineeringField) {
        if a <= b { (a, b) } else { (b, a) }
    }

    /// Relatedness between the disciplines offered in the catalog.
    pub fn reference() -> Self {
        use EngineeringField::*;

        Self::new(DEFAULT_AFFINITY)
            .with_edge(Mechatronics, Robotics, 0.9)
            .with_edge(Mechatronics, Mechanical, 0.8)
            .with_edge(Mechatronics, Electrical, 0.8)
            .with_edge(Mechatronics, ComputerScience, 0.6)
            .with_edge(Mechatronics, Industrial, 0.4)
            .with_edge(Robotics, ComputerScience, 0.7)
            .with_edge(Robotics, Electrical, 0.6)
            .with_edge(Robotics, Mechanical, 0.6)
            .with_edge(Robotics, Biomedical, 0.3)
            .with_edge(ComputerScience, Electrical, 0.5)
            .with_edge(ComputerScience, Mechanical, 0.3)
            .with_edge(ComputerScience, Industrial, 0.4)
            .with_edge(ComputerScience, Biomedical, 0.4)
            .with_edge(Electrical, Mechanical, 0.5)
            .with_edge(Electrical, Biomedical, 0.4)
            .with_edge(Mechanical, Industrial, 0.5)
            .with_edge(Mechanical, Civil, 0.5)
            .with_edge(Mechanical, Biomedical, 0.3)
            .with_edge(Industrial, Chemical, 0.4)
            .with_edge(Industrial, Civil, 0.4)
            .with_edge(Biomedical, Chemical, 0.5)
            .with_edge(Biomedical, Environmental, 0.3)
            .with_edge(Environmental, Chemical, 0.7)
            .with_edge(Environmental, Civil, 0.6)
            .with_edge(Chemical, Civil, 0.2)
    }
}

impl Default for AffinityGraph {
    fn default() -> Self {
        Self::reference()
    }
}

/// Which personality traits matter for each field.
#[derive(Debug, Clone)]
pub struct TraitRelevance {
    table: BTreeMap<EngineeringField, Vec<PersonalityTrait>>,
}

impl TraitRelevance {
    pub fn new(table: BTreeMap<EngineeringField, Vec<PersonalityTrait>>) -> Self {
        Self { table }
    }

    /// Relevant traits for `field`, empty when the field has no entry.
    pub fn traits_for(&self, field: EngineeringField) -> &[PersonalityTrait] {
        self.table.get(&field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn reference() -> Self {
        use EngineeringField::*;
        use PersonalityTrait::*;

        let table = BTreeMap::from([
            (Mechatronics, vec![ProblemSolver, Practical, Analytical]),
            (Robotics, vec![Creative, ProblemSolver, Analytical]),
            (ComputerScience, vec![Analytical, ProblemSolver, DetailOriented]),
            (Electrical, vec![Analytical, DetailOriented, Practical]),
            (Mechanical, vec![Practical, ProblemSolver, DetailOriented]),
            (Industrial, vec![BigPictureThinker, TeamPlayer, Communicator]),
            (Biomedical, vec![DetailOriented, Analytical, Communicator]),
            (Environmental, vec![BigPictureThinker, Creative, TeamPlayer]),
            (Chemical, vec![Analytical, DetailOriented, Practical]),
            (Civil, vec![Practical, TeamPlayer, BigPictureThinker]),
        ]);
        Self::new(table)
    }
}

impl Default for TraitRelevance {
    fn default() -> Self {
        Self::reference()
    }
}
