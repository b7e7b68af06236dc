//! Genepet — heritable pet genomes
//!
//! A 40-field hexadecimal genome drives everything a pet is: colors and
//! body shape, species-specific parts, personality, a skill and gender.
//! Pets grow through stages, breed (sexually or by self-replication) and
//! occasionally fuse into hidden species.

pub mod breeding;
pub mod config;
pub mod error;
pub mod genome;
pub mod pet;
pub mod service;
pub mod species;
pub mod storage;
pub mod traits;

pub use breeding::{BreedingEngine, BreedingResult, SpeciesProbability};
pub use config::CatalogConfig;
pub use error::{ConfigError, PetError, StoreError};
pub use genome::{Dice, Genome};
pub use pet::{DomainEvent, EventSink, FoodType, Pet, Stage};
pub use service::PetService;
pub use species::{Gender, Species, SpeciesCatalog, SpeciesId};
pub use storage::{PetRepository, PetStore};
