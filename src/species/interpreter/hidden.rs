//! Hidden-species archetypes: griffin and unicorn

use super::{GeneInterpreter, PartPalette};
use crate::traits::PartType;

#[derive(Debug, Clone, Copy, Default)]
pub struct Griffin;

#[derive(Debug, Clone, Copy, Default)]
pub struct Unicorn;

static GRIFFIN: [PartPalette; 4] = [
    PartPalette {
        part: PartType::Wing,
        styles: [
            "eagle", "owl", "angelic", "golden",
            "feathered", "radiant", "dark", "rainbow",
            "storm", "thunder", "flame", "frost",
            "giant", "small", "invisible", "sacred",
        ],
    },
    PartPalette {
        part: PartType::Ear,
        styles: [
            "cat", "eagle tuft", "pointed", "round",
            "elfin", "lion", "tiger", "leopard",
            "plush", "feathered", "metallic", "crystal",
            "mythic", "ancient", "royal", "wild",
        ],
    },
    PartPalette {
        part: PartType::Tail,
        styles: [
            "lion", "cat", "bird", "feathered",
            "eagle", "phoenix", "fluffy", "slender",
            "double", "triple", "ringed", "blade",
            "lightning", "flame", "storm", "royal",
        ],
    },
    PartPalette {
        part: PartType::Claw,
        styles: [
            "eagle", "lion", "tiger", "leopard",
            "gold", "silver", "bronze", "iron",
            "razor", "giant", "invisible", "lightning",
            "flame", "frost", "holy", "shadow",
        ],
    },
];

// Mane reuses the fur slot.
static UNICORN: [PartPalette; 4] = [
    PartPalette {
        part: PartType::Horn,
        styles: [
            "crystal", "radiant", "rainbow", "golden",
            "silver", "pearl", "diamond", "moonlight",
            "stellar", "sacred", "nature", "fairy",
            "spiral", "straight", "curved", "forked",
        ],
    },
    PartPalette {
        part: PartType::Fur,
        styles: [
            "shimmering mane", "rainbow mane", "golden mane", "silver mane",
            "white mane", "starry mane", "moonlit mane", "petal mane",
            "silk mane", "wavy mane", "flowing mane", "fluffy mane",
            "long mane", "short mane", "braided mane", "natural mane",
        ],
    },
    PartPalette {
        part: PartType::Tail,
        styles: [
            "meteor", "rainbow", "golden", "silver",
            "white", "starry", "moonlit", "petal",
            "silk", "wavy", "flowing", "fluffy",
            "long", "short", "braided", "natural",
        ],
    },
    PartPalette {
        part: PartType::Aura,
        styles: [
            "moonlight", "stellar", "rainbow", "holy",
            "nature", "fairy", "dream", "pure",
            "hope", "love", "healing", "blessing",
            "guardian", "wisdom", "courage", "peace",
        ],
    },
];

impl GeneInterpreter for Griffin {
    fn archetype(&self) -> &'static str {
        "griffin"
    }

    fn palettes(&self) -> &'static [PartPalette; 4] {
        &GRIFFIN
    }
}

impl GeneInterpreter for Unicorn {
    fn archetype(&self) -> &'static str {
        "unicorn"
    }

    fn palettes(&self) -> &'static [PartPalette; 4] {
        &UNICORN
    }
}
