//! Gene interpreters — species-specific decoding of region 1
//!
//! Each archetype owns four part slots with a 16-style palette per slot.
//! Slot `i` reads special value `i` and its modifier from the genome and
//! picks `palette[value % 16]`. New archetypes plug in through
//! `InterpreterFactory::register` without touching the existing ones.

mod aquatic;
mod avian;
mod fantasy;
mod hidden;
mod mammal;

pub use aquatic::{Goldfish, TropicalFish};
pub use avian::{Owl, Parrot};
pub use fantasy::{Dragon, Phoenix, Slime};
pub use hidden::{Griffin, Unicorn};
pub use mammal::{Canine, Feline};

use crate::genome::Genome;
use crate::traits::{PartAppearance, PartType, SpecialAppearance};
use std::collections::HashMap;
use std::sync::Arc;

/// Styles one part slot can take
#[derive(Debug, Clone, Copy)]
pub struct PartPalette {
    pub part: PartType,
    pub styles: [&'static str; 16],
}

/// Decodes region 1 of a genome into species-specific parts
pub trait GeneInterpreter: Send + Sync {
    /// Factory name of this interpreter
    fn archetype(&self) -> &'static str;

    /// The four slot palettes, in slot order
    fn palettes(&self) -> &'static [PartPalette; 4];

    fn interpret(&self, genome: &Genome) -> SpecialAppearance {
        decode_slots(genome, self.palettes())
    }
}

/// Shared slot decoding: slot `i` reads special value/modifier `i`
pub fn decode_slots(genome: &Genome, palettes: &[PartPalette]) -> SpecialAppearance {
    let mut special = SpecialAppearance::new();
    for (slot, palette) in palettes.iter().enumerate() {
        let (value, modifier) = genome.special_slot(slot);
        special.push(PartAppearance {
            part_type: palette.part,
            style_name: palette.styles[value as usize % palette.styles.len()].to_string(),
            raw_value: value,
            modifier,
        });
    }
    special
}

type Constructor = Box<dyn Fn() -> Arc<dyn GeneInterpreter> + Send + Sync>;

/// Registry of interpreter constructors, keyed by archetype name
pub struct InterpreterFactory {
    constructors: HashMap<String, Constructor>,
}

impl Default for InterpreterFactory {
    /// Factory with every built-in archetype registered
    fn default() -> Self {
        let mut factory = Self::empty();
        factory.register("feline", || Arc::new(Feline));
        factory.register("canine", || Arc::new(Canine));
        factory.register("parrot", || Arc::new(Parrot));
        factory.register("owl", || Arc::new(Owl));
        factory.register("goldfish", || Arc::new(Goldfish));
        factory.register("tropical_fish", || Arc::new(TropicalFish));
        factory.register("slime", || Arc::new(Slime));
        factory.register("phoenix", || Arc::new(Phoenix));
        factory.register("dragon", || Arc::new(Dragon));
        factory.register("griffin", || Arc::new(Griffin));
        factory.register("unicorn", || Arc::new(Unicorn));
        factory
    }
}

impl InterpreterFactory {
    pub fn empty() -> Self {
        Self {
            constructors: HashMap::new(),
        }
    }

    /// Add or replace an archetype
    pub fn register<F>(&mut self, name: &str, ctor: F)
    where
        F: Fn() -> Arc<dyn GeneInterpreter> + Send + Sync + 'static,
    {
        self.constructors.insert(name.to_string(), Box::new(ctor));
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn GeneInterpreter>> {
        self.constructors.get(name).map(|ctor| ctor())
    }

    pub fn has(&self, name: &str) -> bool {
        self.constructors.contains_key(name)
    }

    /// Registered archetype names, sorted
    pub fn types(&self) -> Vec<String> {
        let mut names: Vec<String> = self.constructors.keys().cloned().collect();
        names.sort();
        names
    }
}
