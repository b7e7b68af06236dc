//! Mammal archetypes: feline and canine

use super::{GeneInterpreter, PartPalette};
use crate::traits::PartType;

/// Cats, and rabbits until they get their own tables
#[derive(Debug, Clone, Copy, Default)]
pub struct Feline;

#[derive(Debug, Clone, Copy, Default)]
pub struct Canine;

static FELINE: [PartPalette; 4] = [
    PartPalette {
        part: PartType::Ear,
        styles: [
            "upright", "folded", "curled", "round",
            "pointed", "drooping", "small upright", "large round",
            "triangular", "bat", "elfin", "tufted",
            "short", "long", "wide", "narrow",
        ],
    },
    PartPalette {
        part: PartType::Tail,
        styles: [
            "long", "short", "fluffy", "slender",
            "curled", "straight", "thick", "thin",
            "lion", "squirrel", "pom-pom", "tailless",
            "kinked", "ringed", "plumed", "ombre",
        ],
    },
    PartPalette {
        part: PartType::Fur,
        styles: [
            "short", "long", "curly", "wavy",
            "velvet", "downy", "coarse", "fine",
            "double coat", "single coat", "fluffy", "sleek",
            "tabby", "tiger stripe", "leopard spot", "shaded",
        ],
    },
    PartPalette {
        part: PartType::Whisker,
        styles: [
            "long", "short", "curly", "straight",
            "thick", "thin", "dense", "sparse",
            "white", "black", "grey", "rainbow",
            "bent", "bushy", "dainty", "regal",
        ],
    },
];

// The canine muzzle reuses the whisker slot.
static CANINE: [PartPalette; 4] = [
    PartPalette {
        part: PartType::Ear,
        styles: [
            "prick", "drop", "semi-prick", "rose",
            "bat", "button", "folded", "flying",
            "triangular", "round", "pointed", "large",
            "small", "feathered", "thin", "thick",
        ],
    },
    PartPalette {
        part: PartType::Tail,
        styles: [
            "curled", "straight", "bent", "sickle",
            "corkscrew", "docked", "brush", "saber",
            "plumed", "squirrel", "whip", "ring",
            "low-set", "high-set", "fluffy", "smooth",
        ],
    },
    PartPalette {
        part: PartType::Fur,
        styles: [
            "short", "long", "curly", "wire",
            "silky", "downy", "double coat", "single coat",
            "fluffy", "smooth", "coarse", "fine",
            "wavy", "straight", "mottled", "satin",
        ],
    },
    PartPalette {
        part: PartType::Whisker,
        styles: [
            "long muzzle", "short muzzle", "square muzzle", "pointed muzzle",
            "wide muzzle", "narrow muzzle", "flat muzzle", "upturned muzzle",
            "black nose", "pink nose", "spotted nose", "butterfly nose",
            "big nose", "small nose", "wet nose", "dry nose",
        ],
    },
];

impl GeneInterpreter for Feline {
    fn archetype(&self) -> &'static str {
        "feline"
    }

    fn palettes(&self) -> &'static [PartPalette; 4] {
        &FELINE
    }
}

impl GeneInterpreter for Canine {
    fn archetype(&self) -> &'static str {
        "canine"
    }

    fn palettes(&self) -> &'static [PartPalette; 4] {
        &CANINE
    }
}
