//! Appearance — generic looks decoded from region 0

use crate::genome::{
    Genome, BODY_TYPE, EYE_COLOR, EYE_SHAPE, PATTERN_DENSITY, PATTERN_TYPE, PRIMARY_HUE,
    PRIMARY_SATURATION, SECONDARY_HUE,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The 16 color swatches a hue field selects from
pub const SWATCHES: [&str; 16] = [
    "#FF6B6B", "#FF8E53", "#FFD93D", "#6BCB77",
    "#4D96FF", "#9B59B6", "#E91E63", "#00BCD4",
    "#8BC34A", "#FF5722", "#673AB7", "#2196F3",
    "#FF9800", "#9C27B0", "#3F51B5", "#F44336",
];

/// Degrees of hue per swatch step
const HUE_STEP: u16 = 24;
/// Saturation used for the secondary color
const SECONDARY_SATURATION: u8 = 50;

/// Scale a 4-bit field onto 0–100 (`field × 6.67`, floored)
pub fn percent_of_field(field: u8) -> u8 {
    ((field.min(15) as u16 * 667) / 100) as u8
}

/// A bucketed color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSwatch {
    pub swatch: u8,
    pub hue: u16,
    pub saturation: u8,
}

impl ColorSwatch {
    fn new(field: u8, saturation: u8) -> Self {
        let swatch = field & 0x0f;
        Self {
            swatch,
            hue: swatch as u16 * HUE_STEP,
            saturation,
        }
    }

    pub fn hex(&self) -> &'static str {
        SWATCHES[self.swatch as usize % SWATCHES.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BodyType {
    Petite,
    Small,
    Medium,
    Sturdy,
}

impl BodyType {
    fn from_field(field: u8) -> Self {
        match field % 4 {
            0 => BodyType::Petite,
            1 => BodyType::Small,
            2 => BodyType::Medium,
            _ => BodyType::Sturdy,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PatternType {
    Solid,
    Spotted,
    Striped,
    Gradient,
    Bicolor,
    Tricolor,
    Starry,
    Cloud,
}

impl PatternType {
    fn from_field(field: u8) -> Self {
        match field % 8 {
            0 => PatternType::Solid,
            1 => PatternType::Spotted,
            2 => PatternType::Striped,
            3 => PatternType::Gradient,
            4 => PatternType::Bicolor,
            5 => PatternType::Tricolor,
            6 => PatternType::Starry,
            _ => PatternType::Cloud,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EyeShape {
    Round,
    Almond,
    Droopy,
    Upturned,
    Narrow,
    Wide,
    Sleepy,
    Sparkly,
}

impl EyeShape {
    fn from_field(field: u8) -> Self {
        match field % 8 {
            0 => EyeShape::Round,
            1 => EyeShape::Almond,
            2 => EyeShape::Droopy,
            3 => EyeShape::Upturned,
            4 => EyeShape::Narrow,
            5 => EyeShape::Wide,
            6 => EyeShape::Sleepy,
            _ => EyeShape::Sparkly,
        }
    }
}

/// Generic appearance value object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appearance {
    pub primary: ColorSwatch,
    pub secondary: ColorSwatch,
    pub body_type: BodyType,
    pub eye_shape: EyeShape,
    /// 0–15, an index into `SWATCHES`
    pub eye_color: u8,
    pub pattern: PatternType,
    /// 0–15
    pub pattern_density: u8,
}

impl Appearance {
    pub fn from_genome(genome: &Genome) -> Self {
        Self {
            primary: ColorSwatch::new(
                genome.field_at(PRIMARY_HUE),
                percent_of_field(genome.field_at(PRIMARY_SATURATION)),
            ),
            secondary: ColorSwatch::new(genome.field_at(SECONDARY_HUE), SECONDARY_SATURATION),
            body_type: BodyType::from_field(genome.field_at(BODY_TYPE)),
            eye_shape: EyeShape::from_field(genome.field_at(EYE_SHAPE)),
            eye_color: genome.field_at(EYE_COLOR),
            pattern: PatternType::from_field(genome.field_at(PATTERN_TYPE)),
            pattern_density: genome.field_at(PATTERN_DENSITY),
        }
    }
}

impl fmt::Display for Appearance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} body, {:?} pattern, {} / {}",
            self.body_type,
            self.pattern,
            self.primary.hex(),
            self.secondary.hex()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_scale() {
        assert_eq!(percent_of_field(0), 0);
        assert_eq!(percent_of_field(3), 20);
        assert_eq!(percent_of_field(8), 53);
        assert_eq!(percent_of_field(15), 100);
    }

    #[test]
    fn test_decode_region_zero() {
        let g = Genome::parse("f3a6b2c900000000000000000000000000000000").unwrap();
        let a = Appearance::from_genome(&g);
        assert_eq!(a.primary.swatch, 15);
        assert_eq!(a.primary.hue, 360);
        assert_eq!(a.primary.saturation, 20);
        assert_eq!(a.primary.hex(), "#F44336");
        assert_eq!(a.secondary.swatch, 10);
        assert_eq!(a.secondary.saturation, 50);
        assert_eq!(a.body_type, BodyType::Medium); // 6 % 4
        assert_eq!(a.pattern, PatternType::Gradient); // 11 % 8
        assert_eq!(a.pattern_density, 2);
        assert_eq!(a.eye_shape, EyeShape::Narrow); // 12 % 8
        assert_eq!(a.eye_color, 9);
    }

    #[test]
    fn test_deterministic() {
        let g = Genome::from_fields([7; crate::genome::GENOME_LEN]);
        assert_eq!(Appearance::from_genome(&g), Appearance::from_genome(&g));
    }
}
