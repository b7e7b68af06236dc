//! Traits — pure derivations from a genome
//!
//! Appearance (region 0), special parts (region 1, via a species
//! interpreter), personality (region 2) and skill (region 3).

mod appearance;
mod personality;
mod skill;
mod special;

pub use appearance::{
    percent_of_field, Appearance, BodyType, ColorSwatch, EyeShape, PatternType, SWATCHES,
};
pub use personality::{Personality, TemperReaction};
pub use skill::{Skill, SkillKind, SkillRarity, MAX_SKILL_LEVEL};
pub use special::{PartAppearance, PartType, SpecialAppearance, MAX_PARTS};
