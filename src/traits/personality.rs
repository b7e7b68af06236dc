//! Personality — eight behavioral traits decoded from region 2
//!
//! Each trait is a field scaled onto 0–100. The multipliers below feed the
//! pet actions (decay and experience); the descriptive ones are exposed for
//! callers and unused by the core.

use super::appearance::percent_of_field;
use crate::genome::{Genome, PERSONALITY_START};
use serde::{Deserialize, Serialize};

/// How the pet reacts to interaction, by temper band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperReaction {
    Calm,
    Docile,
    Gentle,
    Irritable,
    Explosive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Personality {
    /// Drives happiness decay and play experience
    pub activity: u8,
    /// Drives hunger decay and feed experience
    pub appetite: u8,
    pub social: u8,
    pub curiosity: u8,
    pub temper: u8,
    pub loyalty: u8,
    pub intelligence: u8,
    pub playfulness: u8,
}

impl Personality {
    pub fn from_genome(genome: &Genome) -> Self {
        let t = |offset: usize| percent_of_field(genome.field_at(PERSONALITY_START + offset));
        Self {
            activity: t(0),
            appetite: t(1),
            social: t(2),
            curiosity: t(3),
            temper: t(4),
            loyalty: t(5),
            intelligence: t(6),
            playfulness: t(7),
        }
    }

    /// Hungry pets get hungry faster
    pub fn hunger_decay_rate(&self) -> f64 {
        banded_rate(self.appetite)
    }

    /// Active pets need more interaction
    pub fn happiness_decay_rate(&self) -> f64 {
        banded_rate(self.activity)
    }

    pub fn feed_exp_bonus(&self) -> f64 {
        if self.appetite > 70 {
            1.2
        } else {
            1.0
        }
    }

    pub fn play_exp_bonus(&self) -> f64 {
        let mut bonus = 1.0;
        if self.activity > 70 {
            bonus += 0.1;
        }
        if self.playfulness > 70 {
            bonus += 0.1;
        }
        bonus
    }

    pub fn visit_bonus(&self) -> f64 {
        if self.social > 70 {
            1.5
        } else if self.social > 50 {
            1.2
        } else {
            1.0
        }
    }

    /// Up to +50% chance of random events
    pub fn random_event_chance(&self) -> f64 {
        1.0 + self.curiosity as f64 / 200.0
    }

    pub fn learning_speed(&self) -> f64 {
        1.0 + self.intelligence as f64 / 200.0
    }

    pub fn loyalty_bonus(&self) -> f64 {
        if self.loyalty > 70 {
            1.3
        } else if self.loyalty > 50 {
            1.15
        } else {
            1.0
        }
    }

    pub fn temper_reaction(&self) -> TemperReaction {
        match self.temper {
            t if t > 80 => TemperReaction::Explosive,
            t if t > 60 => TemperReaction::Irritable,
            t if t > 40 => TemperReaction::Gentle,
            t if t > 20 => TemperReaction::Docile,
            _ => TemperReaction::Calm,
        }
    }

    /// Short English summary of the pronounced traits
    pub fn describe(&self) -> String {
        let mut traits = Vec::new();
        push_band(&mut traits, self.activity, "lively", Some("calm"));
        push_band(&mut traits, self.appetite, "greedy", Some("picky"));
        push_band(&mut traits, self.social, "sociable", Some("shy"));
        push_band(&mut traits, self.curiosity, "curious", Some("cautious"));
        push_band(&mut traits, self.intelligence, "clever", Some("goofy"));
        push_band(&mut traits, self.playfulness, "playful", None);
        push_band(&mut traits, self.loyalty, "loyal", None);

        if traits.is_empty() {
            "easygoing".to_string()
        } else {
            traits.join(", ")
        }
    }
}

fn banded_rate(trait_value: u8) -> f64 {
    if trait_value > 70 {
        1.3
    } else if trait_value < 30 {
        0.8
    } else {
        1.0
    }
}

fn push_band(out: &mut Vec<&'static str>, value: u8, high: &'static str, low: Option<&'static str>) {
    if value > 70 {
        out.push(high);
    } else if value < 30 {
        if let Some(low) = low {
            out.push(low);
        }
    }
}
