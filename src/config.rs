//! Catalog configuration — species templates and fusion pairs from JSON
//!
//! The registries are built once at startup and shared immutably. A default
//! table is bundled with the crate; deployments can point at their own file.

use crate::error::ConfigError;
use crate::pet::Stage;
use crate::species::{
    BreedingRules, Fusion, FusionRegistry, GenderRule, InterpreterFactory, Species,
    SpeciesCatalog, SpeciesId,
};
use crate::traits::PartType;
use log::info;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Catalog shipped with the crate
pub const BUNDLED_CATALOG: &str = include_str!("../config/species.json");

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub species: Vec<SpeciesEntry>,
    #[serde(default)]
    pub fusions: Vec<FusionEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeciesEntry {
    pub id: u16,
    pub name: String,
    pub rarity: u8,
    #[serde(default)]
    pub is_hidden: bool,
    /// Archetype name looked up in the interpreter factory
    pub interpreter_type: String,
    #[serde(default)]
    pub base_parts: Vec<PartType>,
    #[serde(default)]
    pub special_parts: Vec<PartType>,
    #[serde(default)]
    pub gender_rule: GenderRuleEntry,
    #[serde(default)]
    pub breed_rules: BreedRulesEntry,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenderRuleKind {
    #[default]
    Default,
    Asexual,
    Hermaphrodite,
    Mixed,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenderRuleEntry {
    #[serde(rename = "type", default)]
    pub kind: GenderRuleKind,
    #[serde(default)]
    pub male_ratio: u32,
    #[serde(default)]
    pub female_ratio: u32,
    #[serde(default)]
    pub hermaphrodite_ratio: u32,
    /// Only read for asexual species; absent means true
    #[serde(default)]
    pub can_self_breed: Option<bool>,
}

/// Breeding overrides; absent or zero fields keep the defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BreedRulesEntry {
    #[serde(default)]
    pub min_stage: Option<Stage>,
    #[serde(default)]
    pub min_level: u32,
    #[serde(default)]
    pub min_happiness: u8,
    #[serde(default)]
    pub cooldown_hours: u32,
    #[serde(default)]
    pub self_breed_cooldown_hours: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FusionEntry {
    pub species_a: u16,
    pub species_b: u16,
    pub result: u16,
    pub trigger_threshold: u8,
    pub rarity: u8,
}

impl CatalogConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json_str(&data)?;
        info!(
            "Loaded catalog config from {:?}: {} species, {} fusions",
            path.as_ref(),
            config.species.len(),
            config.fusions.len()
        );
        Ok(config)
    }

    pub fn from_json_str(data: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(data)?)
    }

    /// The table bundled with the crate
    pub fn bundled() -> Result<Self, ConfigError> {
        Self::from_json_str(BUNDLED_CATALOG)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl GenderRuleEntry {
    pub fn to_rule(&self) -> GenderRule {
        match self.kind {
            GenderRuleKind::Default => GenderRule::default(),
            GenderRuleKind::Asexual => GenderRule {
                can_self_breed: self.can_self_breed.unwrap_or(true),
                ..GenderRule::asexual()
            },
            GenderRuleKind::Hermaphrodite => GenderRule::hermaphrodite(),
            GenderRuleKind::Mixed => {
                GenderRule::mixed(self.male_ratio, self.female_ratio, self.hermaphrodite_ratio)
            }
        }
    }
}

impl BreedRulesEntry {
    pub fn to_rules(&self) -> BreedingRules {
        let mut rules = BreedingRules::default();
        if let Some(stage) = self.min_stage {
            rules.min_stage = stage;
        }
        if self.min_level > 0 {
            rules.min_level = self.min_level;
        }
        if self.min_happiness > 0 {
            rules.min_happiness = self.min_happiness;
        }
        if self.cooldown_hours > 0 {
            rules.cooldown_hours = self.cooldown_hours;
        }
        if self.self_breed_cooldown_hours > 0 {
            rules.self_breed_cooldown_hours = self.self_breed_cooldown_hours;
        }
        rules
    }
}

/// Build the species catalog, resolving each interpreter through `factory`
pub fn build_catalog(
    config: &CatalogConfig,
    factory: &InterpreterFactory,
) -> Result<SpeciesCatalog, ConfigError> {
    let mut catalog = SpeciesCatalog::new();
    for entry in &config.species {
        let interpreter =
            factory
                .get(&entry.interpreter_type)
                .ok_or_else(|| ConfigError::UnknownInterpreter {
                    id: entry.id,
                    name: entry.name.clone(),
                    archetype: entry.interpreter_type.clone(),
                })?;

        let mut species = Species::new(SpeciesId(entry.id), entry.name.clone(), entry.rarity, interpreter)
            .with_gender_rule(entry.gender_rule.to_rule())
            .with_breeding_rules(entry.breed_rules.to_rules())
            .with_special_parts(entry.special_parts.clone());
        if !entry.base_parts.is_empty() {
            species.base_parts = entry.base_parts.clone();
        }
        if entry.is_hidden {
            species = species.hidden();
        }
        catalog.register(species);
    }
    info!("Species catalog ready: {} species ({} hidden)", catalog.len(), catalog.hidden().len());
    Ok(catalog)
}

pub fn build_fusions(config: &CatalogConfig) -> FusionRegistry {
    let mut registry = FusionRegistry::new();
    for entry in &config.fusions {
        registry.register(
            SpeciesId(entry.species_a),
            SpeciesId(entry.species_b),
            Fusion {
                result: SpeciesId(entry.result),
                trigger_threshold: entry.trigger_threshold,
                rarity: entry.rarity,
            },
        );
    }
    registry
}
