//! SpeciesCatalog — the registry of species templates
//!
//! Built once (from config or by hand), then shared read-only behind an
//! `Arc`. All list queries are sorted by species id.

use super::gender::GenderRule;
use super::interpreter::GeneInterpreter;
use crate::genome::Genome;
use crate::pet::Stage;
use crate::traits::{PartType, SpecialAppearance};
use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Numeric species id; the hundreds digit signals the category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpeciesId(pub u16);

impl SpeciesId {
    pub const CAT: SpeciesId = SpeciesId(101);
    pub const DOG: SpeciesId = SpeciesId(102);
    pub const RABBIT: SpeciesId = SpeciesId(103);
    pub const PARROT: SpeciesId = SpeciesId(201);
    pub const OWL: SpeciesId = SpeciesId(202);
    pub const GOLDFISH: SpeciesId = SpeciesId(301);
    pub const TROPICAL_FISH: SpeciesId = SpeciesId(302);
    pub const LIZARD: SpeciesId = SpeciesId(401);
    pub const SLIME: SpeciesId = SpeciesId(501);
    pub const PHOENIX: SpeciesId = SpeciesId(502);
    pub const DRAGON: SpeciesId = SpeciesId(503);
    pub const GRIFFIN: SpeciesId = SpeciesId(504);
    pub const UNICORN: SpeciesId = SpeciesId(505);
    pub const FIRE_SPIRIT: SpeciesId = SpeciesId(601);
    pub const WATER_SPIRIT: SpeciesId = SpeciesId(602);

    /// Category implied by the id range
    pub fn category(self) -> Category {
        Category::from_id(self)
    }
}

impl fmt::Display for SpeciesId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Unknown,
    Mammal,
    Avian,
    Fish,
    Reptile,
    Fantasy,
    Elemental,
}

impl Category {
    pub fn from_id(id: SpeciesId) -> Self {
        match id.0 / 100 {
            1 => Category::Mammal,
            2 => Category::Avian,
            3 => Category::Fish,
            4 => Category::Reptile,
            5 => Category::Fantasy,
            6 => Category::Elemental,
            _ => Category::Unknown,
        }
    }
}

/// Gating applied before a pet may breed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreedingRules {
    pub min_stage: Stage,
    pub min_level: u32,
    pub min_happiness: u8,
    /// Sexual breeding cooldown, hours
    pub cooldown_hours: u32,
    /// Self-replication cooldown, hours
    pub self_breed_cooldown_hours: u32,
}

impl Default for BreedingRules {
    fn default() -> Self {
        Self {
            min_stage: Stage::Adult,
            min_level: 10,
            min_happiness: 50,
            cooldown_hours: 24,
            self_breed_cooldown_hours: 48,
        }
    }
}

impl BreedingRules {
    pub fn cooldown(&self, self_breed: bool) -> Duration {
        let hours = if self_breed {
            self.self_breed_cooldown_hours
        } else {
            self.cooldown_hours
        };
        Duration::hours(hours as i64)
    }
}

/// A species template
#[derive(Clone)]
pub struct Species {
    pub id: SpeciesId,
    pub name: String,
    pub category: Category,
    /// 1–5
    pub rarity: u8,
    /// Obtainable only through fusion
    pub is_hidden: bool,
    pub base_parts: Vec<PartType>,
    pub special_parts: Vec<PartType>,
    pub gender_rule: GenderRule,
    pub breeding_rules: BreedingRules,
    pub interpreter: Arc<dyn GeneInterpreter>,
}

impl Species {
    /// Template with default gender and breeding rules
    pub fn new(
        id: SpeciesId,
        name: impl Into<String>,
        rarity: u8,
        interpreter: Arc<dyn GeneInterpreter>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category: id.category(),
            rarity: rarity.clamp(1, 5),
            is_hidden: false,
            base_parts: vec![PartType::None],
            special_parts: Vec::new(),
            gender_rule: GenderRule::default(),
            breeding_rules: BreedingRules::default(),
            interpreter,
        }
    }

    pub fn hidden(mut self) -> Self {
        self.is_hidden = true;
        self
    }

    pub fn with_gender_rule(mut self, rule: GenderRule) -> Self {
        self.gender_rule = rule;
        self
    }

    pub fn with_breeding_rules(mut self, rules: BreedingRules) -> Self {
        self.breeding_rules = rules;
        self
    }

    pub fn with_special_parts(mut self, parts: Vec<PartType>) -> Self {
        self.special_parts = parts;
        self
    }
}

impl fmt::Debug for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Species")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("category", &self.category)
            .field("rarity", &self.rarity)
            .field("is_hidden", &self.is_hidden)
            .field("interpreter", &self.interpreter.archetype())
            .finish()
    }
}

/// Species registry, keyed and ordered by id
#[derive(Debug, Default, Clone)]
pub struct SpeciesCatalog {
    species: BTreeMap<SpeciesId, Species>,
}

impl SpeciesCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a species
    pub fn register(&mut self, species: Species) {
        self.species.insert(species.id, species);
    }

    pub fn get(&self, id: SpeciesId) -> Option<&Species> {
        self.species.get(&id)
    }

    pub fn contains(&self, id: SpeciesId) -> bool {
        self.species.contains_key(&id)
    }

    pub fn interpreter(&self, id: SpeciesId) -> Option<&Arc<dyn GeneInterpreter>> {
        self.species.get(&id).map(|s| &s.interpreter)
    }

    pub fn by_category(&self, category: Category) -> Vec<&Species> {
        self.species.values().filter(|s| s.category == category).collect()
    }

    /// Species obtainable without fusion
    pub fn visible(&self) -> Vec<&Species> {
        self.species.values().filter(|s| !s.is_hidden).collect()
    }

    pub fn hidden(&self) -> Vec<&Species> {
        self.species.values().filter(|s| s.is_hidden).collect()
    }

    pub fn all(&self) -> Vec<&Species> {
        self.species.values().collect()
    }

    pub fn len(&self) -> usize {
        self.species.len()
    }

    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }

    /// Decode region 1 with the species' interpreter; unknown species
    /// decode to nothing
    pub fn interpret(&self, id: SpeciesId, genome: &Genome) -> SpecialAppearance {
        match self.interpreter(id) {
            Some(interpreter) => interpreter.interpret(genome),
            None => SpecialAppearance::new(),
        }
    }
}
