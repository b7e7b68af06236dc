//! Replication — how genomes are copied and combined
//!
//! Two reproduction modes:
//! - asexual self-replication with an independent per-field mutation rate
//! - sexual inheritance with a weighted per-field source draw followed by
//!   the recessive override on the last three hidden fields

use super::dice::Dice;
use super::dna::{Genome, GENOME_LEN, RECESSIVE_FIELDS};
use serde::{Deserialize, Serialize};

/// Mutation rate applied to self-replicated offspring
pub const SELF_BREED_MUTATION_RATE: f64 = 0.15;

/// Percent bands for the per-field source draw (cumulative, out of 100)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct InheritanceBands {
    /// Below this: parent 1's field
    pub parent1: u32,
    /// Below this: parent 2's field
    pub parent2: u32,
    /// Below this: integer average of both; otherwise a random field
    pub blend: u32,
}

impl Default for InheritanceBands {
    fn default() -> Self {
        Self {
            parent1: 45,
            parent2: 90,
            blend: 97,
        }
    }
}

/// Rules for the recessive-field override
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RecessiveRule {
    /// Largest parent difference that still counts as "near-equal"
    pub max_gap: u8,
    /// Percent chance a near-equal pair forces the larger value
    pub dominance_chance: u32,
}

impl Default for RecessiveRule {
    fn default() -> Self {
        Self {
            max_gap: 2,
            dominance_chance: 75,
        }
    }
}

/// Where a child field came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldSource {
    Parent1,
    Parent2,
    Blend,
    Mutation,
}

/// Copy `parent`, redrawing each field uniformly with probability `rate`
pub fn self_replicate<D: Dice + ?Sized>(parent: &Genome, rate: f64, dice: &mut D) -> Genome {
    let rate = rate.clamp(0.0, 1.0);
    let mut fields = *parent.fields();
    for f in fields.iter_mut() {
        if dice.unit() < rate {
            *f = dice.roll(16) as u8;
        }
    }
    Genome::from_fields(fields)
}

/// Sexual inheritance with the default bands and recessive rule
pub fn inherit<D: Dice + ?Sized>(parent1: &Genome, parent2: &Genome, dice: &mut D) -> Genome {
    inherit_traced(
        parent1,
        parent2,
        &InheritanceBands::default(),
        &RecessiveRule::default(),
        dice,
    )
    .0
}

/// Sexual inheritance, also reporting the source draw for every field.
///
/// The reported source reflects the generic draw, before the recessive
/// override.
pub fn inherit_traced<D: Dice + ?Sized>(
    parent1: &Genome,
    parent2: &Genome,
    bands: &InheritanceBands,
    recessive: &RecessiveRule,
    dice: &mut D,
) -> (Genome, [FieldSource; GENOME_LEN]) {
    let mut fields = [0u8; GENOME_LEN];
    let mut sources = [FieldSource::Parent1; GENOME_LEN];

    for pos in 0..GENOME_LEN {
        let a = parent1.field_at(pos);
        let b = parent2.field_at(pos);
        let roll = dice.roll(100);
        let (value, source) = if roll < bands.parent1 {
            (a, FieldSource::Parent1)
        } else if roll < bands.parent2 {
            (b, FieldSource::Parent2)
        } else if roll < bands.blend {
            ((a + b) / 2, FieldSource::Blend)
        } else {
            (dice.roll(16) as u8, FieldSource::Mutation)
        };
        fields[pos] = value;
        sources[pos] = source;
    }

    for &pos in RECESSIVE_FIELDS.iter() {
        let a = parent1.field_at(pos);
        let b = parent2.field_at(pos);
        if a == b {
            fields[pos] = a;
        } else if a.abs_diff(b) <= recessive.max_gap && dice.roll(100) < recessive.dominance_chance {
            fields[pos] = a.max(b);
        }
    }

    (Genome::from_fields(fields), sources)
}
