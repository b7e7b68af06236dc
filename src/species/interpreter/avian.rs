//! Avian archetypes. Parrot and owl decode with the same tables and
//! differ only by name.

use super::{GeneInterpreter, PartPalette};
use crate::traits::PartType;

#[derive(Debug, Clone, Copy, Default)]
pub struct Parrot;

#[derive(Debug, Clone, Copy, Default)]
pub struct Owl;

static AVIAN: [PartPalette; 4] = [
    PartPalette {
        part: PartType::Wing,
        styles: [
            "small", "round", "pointed", "broad",
            "feathered", "angelic", "bat", "dragonfly",
            "wide", "narrow", "rainbow", "translucent",
            "plumed", "downy", "radiant", "shadow",
        ],
    },
    PartPalette {
        part: PartType::Beak,
        styles: [
            "short", "long", "curved", "straight",
            "sharp", "blunt", "wide", "narrow",
            "hooked", "flat", "conical", "tweezer",
            "painted", "black", "orange", "red",
        ],
    },
    PartPalette {
        part: PartType::Crest,
        styles: [
            "bare", "small", "large", "upright",
            "fan", "spiked", "tufted", "royal",
            "mohawk", "curled", "puffy", "streamlined",
            "rainbow", "ombre", "glowing", "crown",
        ],
    },
    PartPalette {
        part: PartType::Tail,
        styles: [
            "short", "long", "fan", "clipped",
            "swallow", "round", "pointed", "square",
            "peacock", "phoenix", "ribbon", "ombre",
            "fluffy", "slender", "curled", "forked",
        ],
    },
];

impl GeneInterpreter for Parrot {
    fn archetype(&self) -> &'static str {
        "parrot"
    }

    fn palettes(&self) -> &'static [PartPalette; 4] {
        &AVIAN
    }
}

impl GeneInterpreter for Owl {
    fn archetype(&self) -> &'static str {
        "owl"
    }

    fn palettes(&self) -> &'static [PartPalette; 4] {
        &AVIAN
    }
}
