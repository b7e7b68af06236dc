//! Breeding — sexual crosses, self-replication and offspring forecasts

mod engine;

pub use engine::{BreedingEngine, BreedingResult, SpeciesProbability};
