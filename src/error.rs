//! Error types for genepet
//!
//! Every domain-rule violation is a named, recoverable variant. Callers are
//! expected to branch on them (show a message, retry later), never to treat
//! them as defects.

use crate::species::SpeciesId;

/// Domain-rule failures raised by pet actions and the breeding engine
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PetError {
    #[error("Species not found: {0}")]
    SpeciesNotFound(SpeciesId),

    #[error("Species cannot reproduce on its own")]
    CannotSelfBreed,

    #[error("Genders are not compatible for breeding")]
    IncompatibleGender,

    #[error("Breeding cooldown is still active")]
    BreedCooldownActive,

    #[error("Pet has not reached the required stage")]
    PetNotMature,

    #[error("Pet level is too low")]
    PetLevelTooLow,

    #[error("Pet is not happy enough")]
    PetUnhappy,

    #[error("Pet is still an egg")]
    PetIsEgg,

    #[error("Pet is already full")]
    PetIsFull,

    #[error("Pet is already happy")]
    PetIsHappy,

    #[error("Pet is already clean")]
    PetIsClean,

    #[error("Pet is too tired")]
    PetIsTired,
}

/// Failures while turning external configuration into registries
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Species {id} ({name}): unknown interpreter type '{archetype}'")]
    UnknownInterpreter {
        id: u16,
        name: String,
        archetype: String,
    },
}

/// Failures raised by pet repositories
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Pet not found: {0}")]
    NotFound(String),
}
