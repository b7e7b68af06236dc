//! SpecialAppearance — species-specific parts decoded from region 1
//!
//! What each slot means depends on the species' gene interpreter; this
//! module only holds the resulting value objects.

use serde::{Deserialize, Serialize};

/// Most parts a special appearance carries
pub const MAX_PARTS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartType {
    None,
    Ear,
    Tail,
    Fur,
    Wing,
    Beak,
    Crest,
    Fin,
    Scale,
    TailFin,
    Shell,
    Horn,
    Armor,
    Aura,
    Claw,
    Whisker,
}

impl PartType {
    pub fn name(self) -> &'static str {
        match self {
            PartType::None => "none",
            PartType::Ear => "ear",
            PartType::Tail => "tail",
            PartType::Fur => "fur",
            PartType::Wing => "wing",
            PartType::Beak => "beak",
            PartType::Crest => "crest",
            PartType::Fin => "fin",
            PartType::Scale => "scale",
            PartType::TailFin => "tail_fin",
            PartType::Shell => "shell",
            PartType::Horn => "horn",
            PartType::Armor => "armor",
            PartType::Aura => "aura",
            PartType::Claw => "claw",
            PartType::Whisker => "whisker",
        }
    }
}

/// One decoded part
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartAppearance {
    pub part_type: PartType,
    pub style_name: String,
    /// 0–15, selects the style
    pub raw_value: u8,
    /// 0–15, free for rendering
    pub modifier: u8,
}

/// Ordered list of up to four parts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialAppearance {
    parts: Vec<PartAppearance>,
}

impl SpecialAppearance {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a part; ignored once four parts are present
    pub fn push(&mut self, part: PartAppearance) {
        if self.parts.len() < MAX_PARTS {
            self.parts.push(part);
        }
    }

    pub fn parts(&self) -> &[PartAppearance] {
        &self.parts
    }

    /// First part of the given type
    pub fn part(&self, part_type: PartType) -> Option<&PartAppearance> {
        self.parts.iter().find(|p| p.part_type == part_type)
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }
}
