//! Genome — the 40-field heritable code of a pet
//!
//! A genome is 40 hexadecimal digits. Each digit is an independent 4-bit
//! field, grouped into five 8-field regions:
//!
//! | Region | Fields | Drives |
//! |---|---|---|
//! | 0 | 0–7   | generic appearance |
//! | 1 | 8–15  | species-special parts |
//! | 2 | 16–23 | personality |
//! | 3 | 24–31 | skill |
//! | 4 | 32–39 | hidden / recessive |
//!
//! Construction never fails: malformed input is replaced by a fresh random
//! genome and the replacement is logged.

use super::dice::Dice;
use log::warn;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Number of fields in a genome
pub const GENOME_LEN: usize = 40;
/// Fields per region
pub const REGION_LEN: usize = 8;

/// Named regions of the genome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Appearance,
    Special,
    Personality,
    Skill,
    Hidden,
}

impl Region {
    /// First field of the region
    pub fn start(self) -> usize {
        match self {
            Region::Appearance => 0,
            Region::Special => 8,
            Region::Personality => 16,
            Region::Skill => 24,
            Region::Hidden => 32,
        }
    }

    pub fn range(self) -> std::ops::Range<usize> {
        self.start()..self.start() + REGION_LEN
    }
}

// Field positions
pub const PRIMARY_HUE: usize = 0;
pub const PRIMARY_SATURATION: usize = 1;
pub const SECONDARY_HUE: usize = 2;
pub const BODY_TYPE: usize = 3;
pub const PATTERN_TYPE: usize = 4;
pub const PATTERN_DENSITY: usize = 5;
pub const EYE_SHAPE: usize = 6;
pub const EYE_COLOR: usize = 7;
pub const SPECIAL_SLOTS: [usize; 4] = [8, 10, 12, 14];
pub const PERSONALITY_START: usize = 16;
pub const SKILL_TYPE_PAIR: usize = 24;
pub const SKILL_STRENGTH: usize = 26;
pub const MUTATION_FACTOR_PAIR: usize = 32;
pub const HIDDEN_TRIGGER_PAIR: usize = 34;
pub const EVOLUTION_TENDENCY: usize = 36;
pub const RECESSIVE_FIELDS: [usize; 3] = [37, 38, 39];

/// Immutable 40-field genome
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Genome {
    fields: [u8; GENOME_LEN],
}

impl Genome {
    /// Build from raw field values; each is masked to 4 bits
    pub fn from_fields(fields: [u8; GENOME_LEN]) -> Self {
        let mut masked = fields;
        for f in masked.iter_mut() {
            *f &= 0x0f;
        }
        Self { fields: masked }
    }

    /// Generate a uniformly random genome
    pub fn random<D: Dice + ?Sized>(dice: &mut D) -> Self {
        let mut fields = [0u8; GENOME_LEN];
        for f in fields.iter_mut() {
            *f = dice.roll(16) as u8;
        }
        Self { fields }
    }

    /// Strict parse: `None` unless `code` is exactly 40 hex digits
    pub fn parse(code: &str) -> Option<Self> {
        if code.len() != GENOME_LEN {
            return None;
        }
        let bytes = hex::decode(code).ok()?;
        let mut fields = [0u8; GENOME_LEN];
        for (i, b) in bytes.iter().enumerate() {
            fields[i * 2] = b >> 4;
            fields[i * 2 + 1] = b & 0x0f;
        }
        Some(Self { fields })
    }

    /// Parse `code`, regenerating a fresh genome when it is malformed
    pub fn parse_or_regenerate<D: Dice + ?Sized>(code: &str, dice: &mut D) -> Self {
        match Self::parse(code) {
            Some(genome) => genome,
            None => {
                warn!("Malformed genome '{}', regenerating", code);
                Self::random(dice)
            }
        }
    }

    /// Field value at `pos` (0–15); out-of-range positions read as 0
    pub fn field_at(&self, pos: usize) -> u8 {
        self.fields.get(pos).copied().unwrap_or(0)
    }

    /// Two adjacent fields read as one byte (0–255)
    pub fn field_pair_at(&self, pos: usize) -> u8 {
        (self.field_at(pos) << 4) | self.field_at(pos + 1)
    }

    pub fn fields(&self) -> &[u8; GENOME_LEN] {
        &self.fields
    }

    pub fn region(&self, region: Region) -> &[u8] {
        &self.fields[region.range()]
    }

    /// Special slot `slot` (0–3): (value, modifier)
    pub fn special_slot(&self, slot: usize) -> (u8, u8) {
        match SPECIAL_SLOTS.get(slot) {
            Some(&pos) => (self.field_at(pos), self.field_at(pos + 1)),
            None => (0, 0),
        }
    }

    /// Mutation factor (0–255), informational
    pub fn mutation_factor(&self) -> u8 {
        self.field_pair_at(MUTATION_FACTOR_PAIR)
    }

    /// Value compared against fusion thresholds (0–255)
    pub fn hidden_species_trigger(&self) -> u8 {
        self.field_pair_at(HIDDEN_TRIGGER_PAIR)
    }

    /// Evolution tendency (0–15), informational
    pub fn evolution_tendency(&self) -> u8 {
        self.field_at(EVOLUTION_TENDENCY)
    }

    /// Canonical lowercase hex code
    pub fn code(&self) -> String {
        let bytes: Vec<u8> = self
            .fields
            .chunks(2)
            .map(|pair| (pair[0] << 4) | pair[1])
            .collect();
        hex::encode(bytes)
    }

    /// Number of fields that differ from `other`
    pub fn distance(&self, other: &Genome) -> usize {
        self.fields
            .iter()
            .zip(other.fields.iter())
            .filter(|(a, b)| a != b)
            .count()
    }
}

impl fmt::Display for Genome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code())
    }
}

impl fmt::Debug for Genome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Genome({})", self.code())
    }
}

impl Serialize for Genome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.code())
    }
}

impl<'de> Deserialize<'de> for Genome {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Ok(Genome::parse_or_regenerate(&code, &mut rand::thread_rng()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const CODE: &str = "0123456789abcdef0123456789abcdef01234567";

    #[test]
    fn test_parse_and_accessors() {
        let g = Genome::parse(CODE).unwrap();
        assert_eq!(g.field_at(0), 0);
        assert_eq!(g.field_at(10), 0xa);
        assert_eq!(g.field_at(15), 0xf);
        assert_eq!(g.field_pair_at(14), 0xef);
        assert_eq!(g.field_pair_at(34), 0x23);
        // the low half past the end reads as zero
        assert_eq!(g.field_pair_at(39), 0x70);
        assert_eq!(g.field_at(99), 0);
        assert_eq!(g.to_string(), CODE);
    }

    #[test]
    fn test_uppercase_is_canonicalized() {
        let g = Genome::parse(&CODE.to_uppercase()).unwrap();
        assert_eq!(g.code(), CODE);
    }

    #[test]
    fn test_malformed_regenerates() {
        let mut rng = StdRng::seed_from_u64(1);
        let too_long = format!("{CODE}0");
        for bad in ["", "abc", "zz23456789abcdef0123456789abcdef01234567", too_long.as_str()] {
            assert!(Genome::parse(bad).is_none());
            let g = Genome::parse_or_regenerate(bad, &mut rng);
            assert_eq!(g.code().len(), GENOME_LEN);
            assert!(g.fields().iter().all(|f| *f < 16));
        }
    }

    #[test]
    fn test_special_slots() {
        let g = Genome::parse(CODE).unwrap();
        assert_eq!(g.special_slot(0), (8, 9));
        assert_eq!(g.special_slot(3), (0xe, 0xf));
        assert_eq!(g.special_slot(4), (0, 0));
    }

    #[test]
    fn test_from_fields_masks() {
        let g = Genome::from_fields([0xff; GENOME_LEN]);
        assert!(g.fields().iter().all(|f| *f == 0x0f));
    }

    #[test]
    fn test_serde_string_form() {
        let g = Genome::parse(CODE).unwrap();
        let json = serde_json::to_string(&g).unwrap();
        assert_eq!(json, format!("\"{CODE}\""));
        let back: Genome = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);
    }
}
