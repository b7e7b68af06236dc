//! Aquatic archetypes, sharing one set of fin and scale tables

use super::{GeneInterpreter, PartPalette};
use crate::traits::PartType;

#[derive(Debug, Clone, Copy, Default)]
pub struct Goldfish;

#[derive(Debug, Clone, Copy, Default)]
pub struct TropicalFish;

static AQUATIC: [PartPalette; 4] = [
    PartPalette {
        part: PartType::Fin,
        styles: [
            "small", "large", "fan", "triangular",
            "streamlined", "feathered", "clear", "colorful",
            "pointed", "round", "serrated", "flowing",
            "stiff", "soft", "forked", "continuous",
        ],
    },
    PartPalette {
        part: PartType::Scale,
        styles: [
            "fine", "large", "scaleless", "diamond",
            "cycloid", "ctenoid", "placoid", "bony plate",
            "shimmering", "matte", "rainbow", "clear",
            "metallic", "pearl", "ombre", "speckled",
        ],
    },
    PartPalette {
        part: PartType::TailFin,
        styles: [
            "fan", "scissor", "swallow", "round",
            "pointed", "lyre", "butterfly", "phoenix",
            "double", "triple", "veil", "ribbon",
            "lion", "peacock", "meteor", "comet",
        ],
    },
    PartPalette {
        part: PartType::Whisker,
        styles: [
            "none", "short", "long", "curled",
            "two barbels", "four barbels", "six barbels", "eight barbels",
            "thick", "thin", "clear", "glowing",
            "tentacle", "feathered", "forked", "fluffy",
        ],
    },
];

impl GeneInterpreter for Goldfish {
    fn archetype(&self) -> &'static str {
        "goldfish"
    }

    fn palettes(&self) -> &'static [PartPalette; 4] {
        &AQUATIC
    }
}

impl GeneInterpreter for TropicalFish {
    fn archetype(&self) -> &'static str {
        "tropical_fish"
    }

    fn palettes(&self) -> &'static [PartPalette; 4] {
        &AQUATIC
    }
}
