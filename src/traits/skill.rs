//! Skill — a pet's unique ability, decoded from region 3

use crate::genome::{Genome, SKILL_STRENGTH, SKILL_TYPE_PAIR};
use serde::{Deserialize, Serialize};

/// Highest skill level reachable through gameplay
pub const MAX_SKILL_LEVEL: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillKind {
    None,
    /// Extra coins
    Lucky,
    /// Better visit rewards
    Charming,
    /// Slower status decay
    Endurance,
    /// Stronger feeding
    Gluttony,
    /// Stronger play
    Playful,
    /// Stronger cleaning
    CleanLover,
    /// Better gift affinity
    Friendly,
    /// More random events
    Curious,
}

impl SkillKind {
    pub const ALL: [SkillKind; 9] = [
        SkillKind::None,
        SkillKind::Lucky,
        SkillKind::Charming,
        SkillKind::Endurance,
        SkillKind::Gluttony,
        SkillKind::Playful,
        SkillKind::CleanLover,
        SkillKind::Friendly,
        SkillKind::Curious,
    ];

    fn from_pair(pair: u8) -> Self {
        Self::ALL[pair as usize % Self::ALL.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SkillRarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub kind: SkillKind,
    /// 1–5, advanced by gameplay
    pub level: u8,
    /// 1–5, fixed by the genome
    pub strength: u8,
}

impl Skill {
    pub fn from_genome(genome: &Genome) -> Self {
        let strength = (genome.field_at(SKILL_STRENGTH) / 3 + 1).min(5);
        Self {
            kind: SkillKind::from_pair(genome.field_pair_at(SKILL_TYPE_PAIR)),
            level: 1,
            strength,
        }
    }

    pub fn effect_multiplier(&self) -> f64 {
        1.0 + self.level as f64 * 0.1 + self.strength as f64 * 0.02
    }

    /// Returns `false` once the level cap is reached
    pub fn level_up(&mut self) -> bool {
        if self.level >= MAX_SKILL_LEVEL {
            return false;
        }
        self.level += 1;
        true
    }

    pub fn is(&self, kind: SkillKind) -> bool {
        self.kind == kind
    }

    pub fn name(&self) -> &'static str {
        match self.kind {
            SkillKind::None => "None",
            SkillKind::Lucky => "Lucky Star",
            SkillKind::Charming => "Charmer",
            SkillKind::Endurance => "Iron Body",
            SkillKind::Gluttony => "Big Eater",
            SkillKind::Playful => "Playmaker",
            SkillKind::CleanLover => "Neat Freak",
            SkillKind::Friendly => "Social Butterfly",
            SkillKind::Curious => "Explorer",
        }
    }

    pub fn description(&self) -> &'static str {
        match self.kind {
            SkillKind::None => "No special skill",
            SkillKind::Lucky => "Chance of bonus coins when earning coins",
            SkillKind::Charming => "Both sides earn more from visits",
            SkillKind::Endurance => "Status decays more slowly",
            SkillKind::Gluttony => "Feeding restores more hunger",
            SkillKind::Playful => "Playing restores more happiness",
            SkillKind::CleanLover => "Cleaning restores more cleanliness",
            SkillKind::Friendly => "Gifts earn extra affinity",
            SkillKind::Curious => "Random events trigger more often",
        }
    }

    pub fn rarity(&self) -> SkillRarity {
        match self.strength {
            s if s >= 4 => SkillRarity::Legendary,
            3 => SkillRarity::Epic,
            2 => SkillRarity::Rare,
            _ => SkillRarity::Common,
        }
    }
}
