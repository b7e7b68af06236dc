//! Species — templates, gender policy, gene interpreters and fusions

mod catalog;
mod fusion;
mod gender;
pub mod interpreter;

pub use catalog::{BreedingRules, Category, Species, SpeciesCatalog, SpeciesId};
pub use fusion::{Fusion, FusionRegistry, SpeciesPair};
pub use gender::{determine_child_gender, determine_gender, Gender, GenderRule};
pub use interpreter::{GeneInterpreter, InterpreterFactory, PartPalette};
