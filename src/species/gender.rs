//! Gender — pairing compatibility and genome-driven resolution

use crate::genome::{Dice, Genome};
use serde::{Deserialize, Serialize};

/// Percent chance two hermaphrodite parents pass the trait on
const HERMAPHRODITE_INHERIT_CHANCE: u32 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    /// Genderless; reproduces only by self-replication
    None,
    Male,
    Female,
    Hermaphrodite,
}

impl Gender {
    pub fn symbol(self) -> &'static str {
        match self {
            Gender::None => "○",
            Gender::Male => "♂",
            Gender::Female => "♀",
            Gender::Hermaphrodite => "⚥",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Gender::None => "none",
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Hermaphrodite => "hermaphrodite",
        }
    }

    /// Symmetric pairing relation. `None` never pairs.
    pub fn can_breed_with(self, other: Gender) -> bool {
        use Gender::*;
        matches!(
            (self, other),
            (Male, Female)
                | (Female, Male)
                | (Male, Hermaphrodite)
                | (Hermaphrodite, Male)
                | (Female, Hermaphrodite)
                | (Hermaphrodite, Female)
                | (Hermaphrodite, Hermaphrodite)
        )
    }
}

/// Per-species gender policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenderRule {
    /// Allowed genders in resolution order, each with its weight
    pub weights: Vec<(Gender, u32)>,
    pub can_self_breed: bool,
}

impl Default for GenderRule {
    /// Male / female, 50 / 50
    fn default() -> Self {
        Self {
            weights: vec![(Gender::Male, 50), (Gender::Female, 50)],
            can_self_breed: false,
        }
    }
}

impl GenderRule {
    /// Genderless, reproduces by self-replication
    pub fn asexual() -> Self {
        Self {
            weights: vec![(Gender::None, 100)],
            can_self_breed: true,
        }
    }

    pub fn hermaphrodite() -> Self {
        Self {
            weights: vec![(Gender::Hermaphrodite, 100)],
            can_self_breed: false,
        }
    }

    pub fn mixed(male: u32, female: u32, hermaphrodite: u32) -> Self {
        Self {
            weights: vec![
                (Gender::Male, male),
                (Gender::Female, female),
                (Gender::Hermaphrodite, hermaphrodite),
            ],
            can_self_breed: false,
        }
    }

    pub fn allowed(&self) -> impl Iterator<Item = Gender> + '_ {
        self.weights.iter().map(|(g, _)| *g)
    }

    pub fn allows(&self, gender: Gender) -> bool {
        self.allowed().any(|g| g == gender)
    }

    fn first(&self) -> Gender {
        self.weights.first().map(|(g, _)| *g).unwrap_or(Gender::None)
    }

    fn single(&self) -> Option<Gender> {
        match self.weights.as_slice() {
            [(g, _)] => Some(*g),
            _ => None,
        }
    }
}

/// Resolve a gender from field 0 of the genome
pub fn determine_gender(genome: &Genome, rule: &GenderRule) -> Gender {
    if let Some(g) = rule.single() {
        return g;
    }

    // config weights are arbitrary u32; 15 × their sum fits in u64
    let total: u64 = rule.weights.iter().map(|(_, w)| *w as u64).sum();
    if total == 0 {
        return rule.first();
    }

    let scaled = genome.field_at(0) as u64 * total / 16;
    let mut accumulated = 0u64;
    for (gender, weight) in &rule.weights {
        accumulated += *weight as u64;
        if scaled < accumulated {
            return *gender;
        }
    }
    rule.first()
}

/// Resolve an offspring's gender, favoring hermaphroditism when both
/// parents are hermaphrodites
pub fn determine_child_gender<D: Dice + ?Sized>(
    parent1: Gender,
    parent2: Gender,
    child: &Genome,
    rule: &GenderRule,
    dice: &mut D,
) -> Gender {
    if let Some(g) = rule.single() {
        return g;
    }

    if parent1 == Gender::Hermaphrodite
        && parent2 == Gender::Hermaphrodite
        && rule.allows(Gender::Hermaphrodite)
        && dice.roll(100) < HERMAPHRODITE_INHERIT_CHANCE
    {
        return Gender::Hermaphrodite;
    }

    determine_gender(child, rule)
}
