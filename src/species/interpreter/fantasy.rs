//! Fantasy archetypes: slime, phoenix and dragon
//!
//! Slimes have no real anatomy, so their slots borrow part types: the
//! tail slot holds the body shape, scale the texture, horn the core.
//! Elemental spirits decode with the slime tables too.

use super::{GeneInterpreter, PartPalette};
use crate::traits::PartType;

#[derive(Debug, Clone, Copy, Default)]
pub struct Slime;

#[derive(Debug, Clone, Copy, Default)]
pub struct Phoenix;

#[derive(Debug, Clone, Copy, Default)]
pub struct Dragon;

static SLIME: [PartPalette; 4] = [
    PartPalette {
        part: PartType::Tail,
        styles: [
            "round", "oval", "droplet", "irregular",
            "star", "heart", "cube", "pyramid",
            "cloud", "bubble", "jelly", "pudding",
            "melting", "bouncy", "splitting", "merged",
        ],
    },
    PartPalette {
        part: PartType::Scale,
        styles: [
            "clear", "translucent", "opaque", "glowing",
            "twinkling", "ombre", "rainbow", "metallic",
            "jelly", "crystal", "gel", "liquid",
            "fizzy", "starry", "cloudy", "molten",
        ],
    },
    PartPalette {
        part: PartType::Horn,
        styles: [
            "coreless", "single", "multi", "star",
            "heart", "crystal", "flame", "frost",
            "thunder", "dark", "light", "rainbow",
            "floating", "spinning", "pulsing", "mystic",
        ],
    },
    PartPalette {
        part: PartType::Aura,
        styles: [
            "none", "faint", "strong", "pulsing",
            "rainbow", "flame", "frost", "thunder",
            "shadow", "holy", "nature", "starry",
            "ripple", "bubble", "petal", "snowflake",
        ],
    },
];

static PHOENIX: [PartPalette; 4] = [
    PartPalette {
        part: PartType::Wing,
        styles: [
            "flame", "radiant", "rainbow", "golden",
            "crimson", "amber", "violet", "white",
            "phoenix", "vermilion", "rebirth", "eternal",
            "blazing", "holy", "solar", "stellar",
        ],
    },
    PartPalette {
        part: PartType::Crest,
        styles: [
            "flame", "radiant", "rainbow", "golden",
            "plumed", "phoenix", "royal", "divine",
            "solar", "stellar", "streaming", "eternal",
            "vermilion", "rebirth", "renewal", "holy",
        ],
    },
    PartPalette {
        part: PartType::Tail,
        styles: [
            "flame", "radiant", "rainbow", "golden",
            "peacock", "phoenix", "streaming", "stellar",
            "nine-tailed", "three-tailed", "seven-tailed", "single",
            "vermilion", "rebirth", "renewal", "eternal",
        ],
    },
    PartPalette {
        part: PartType::Aura,
        styles: [
            "flame", "radiant", "rainbow", "golden",
            "solar", "stellar", "phoenix", "rebirth",
            "renewal", "eternal", "holy", "scorching",
            "warm", "hope", "life", "miracle",
        ],
    },
];

static DRAGON: [PartPalette; 4] = [
    PartPalette {
        part: PartType::Wing,
        styles: [
            "bat", "feathered", "bone", "membrane",
            "crystal", "flame", "frost", "thunder",
            "shadow", "radiant", "twin", "four-winged",
            "small", "giant", "tattered", "flawless",
        ],
    },
    PartPalette {
        part: PartType::Horn,
        styles: [
            "single", "twin", "curved", "straight",
            "spiral", "forked", "crown", "antler",
            "crystal", "flame", "frost", "thunder",
            "shadow", "radiant", "ancient", "sacred",
        ],
    },
    PartPalette {
        part: PartType::Armor,
        styles: [
            "fine scale", "thick scale", "plate", "bone",
            "crystal", "firerock", "ice", "runic",
            "shadow", "radiant", "ancient", "sacred",
            "magma", "ocean", "forest", "sky",
        ],
    },
    PartPalette {
        part: PartType::Tail,
        styles: [
            "spiked", "mace", "blade", "feathered",
            "serpent", "whip", "flame", "frost",
            "thunder", "venom", "radiant", "shadow",
            "forked", "ringed", "serrated", "supple",
        ],
    },
];

impl GeneInterpreter for Slime {
    fn archetype(&self) -> &'static str {
        "slime"
    }

    fn palettes(&self) -> &'static [PartPalette; 4] {
        &SLIME
    }
}

impl GeneInterpreter for Phoenix {
    fn archetype(&self) -> &'static str {
        "phoenix"
    }

    fn palettes(&self) -> &'static [PartPalette; 4] {
        &PHOENIX
    }
}

impl GeneInterpreter for Dragon {
    fn archetype(&self) -> &'static str {
        "dragon"
    }

    fn palettes(&self) -> &'static [PartPalette; 4] {
        &DRAGON
    }
}
