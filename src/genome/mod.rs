//! Genome — the heritable code behind every pet
//!
//! A genome is 40 independent 4-bit fields. It is immutable; offspring
//! genomes are produced by self-replication (with mutation) or by sexual
//! inheritance, always drawing from a caller-supplied `Dice`.

mod dice;
mod dna;
mod replication;

pub use dice::{Dice, ScriptedDice};
pub use dna::{Genome, Region, GENOME_LEN, REGION_LEN};
pub use dna::{
    BODY_TYPE, EVOLUTION_TENDENCY, EYE_COLOR, EYE_SHAPE, HIDDEN_TRIGGER_PAIR,
    MUTATION_FACTOR_PAIR, PATTERN_DENSITY, PATTERN_TYPE, PERSONALITY_START, PRIMARY_HUE,
    PRIMARY_SATURATION, RECESSIVE_FIELDS, SECONDARY_HUE, SKILL_STRENGTH, SKILL_TYPE_PAIR,
    SPECIAL_SLOTS,
};
pub use replication::{
    inherit, inherit_traced, self_replicate, FieldSource, InheritanceBands, RecessiveRule,
    SELF_BREED_MUTATION_RATE,
};
