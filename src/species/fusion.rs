//! FusionRegistry — rare hidden species produced by specific pairings

use super::catalog::SpeciesId;
use crate::genome::Genome;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Unordered species pair, stored lower id first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SpeciesPair(SpeciesId, SpeciesId);

impl SpeciesPair {
    pub fn new(a: SpeciesId, b: SpeciesId) -> Self {
        if a <= b {
            Self(a, b)
        } else {
            Self(b, a)
        }
    }

    pub fn first(&self) -> SpeciesId {
        self.0
    }

    pub fn second(&self) -> SpeciesId {
        self.1
    }
}

/// What a pairing can fuse into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fusion {
    pub result: SpeciesId,
    /// The child's hidden trigger must strictly exceed this (0–255)
    pub trigger_threshold: u8,
    pub rarity: u8,
}

#[derive(Debug, Clone, Default)]
pub struct FusionRegistry {
    fusions: BTreeMap<SpeciesPair, Fusion>,
}

impl FusionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the fusion for a pair, in either order
    pub fn register(&mut self, a: SpeciesId, b: SpeciesId, fusion: Fusion) {
        self.fusions.insert(SpeciesPair::new(a, b), fusion);
    }

    pub fn get(&self, a: SpeciesId, b: SpeciesId) -> Option<&Fusion> {
        self.fusions.get(&SpeciesPair::new(a, b))
    }

    pub fn can_fuse(&self, a: SpeciesId, b: SpeciesId) -> bool {
        self.get(a, b).is_some()
    }

    /// Fusion result if the child genome clears the pair's threshold
    pub fn check_trigger(&self, a: SpeciesId, b: SpeciesId, child: &Genome) -> Option<SpeciesId> {
        let fusion = self.get(a, b)?;
        if child.hidden_species_trigger() > fusion.trigger_threshold {
            Some(fusion.result)
        } else {
            None
        }
    }

    /// All entries, ordered by pair
    pub fn entries(&self) -> impl Iterator<Item = (&SpeciesPair, &Fusion)> {
        self.fusions.iter()
    }

    pub fn len(&self) -> usize {
        self.fusions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fusions.is_empty()
    }
}
