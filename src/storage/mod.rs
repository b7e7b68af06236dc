//! Pet persistence
//!
//! `PetRepository` is the port the service layer talks to. `PetStore` is a
//! small JSON-file implementation: everything lives in memory and `flush`
//! writes the whole store back to disk.

use crate::error::StoreError;
use crate::pet::Pet;
use chrono::{DateTime, Utc};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Storage port for pets
pub trait PetRepository {
    /// `StoreError::NotFound` when no pet has this id
    fn find_by_id(&self, id: Uuid) -> Result<Pet, StoreError>;

    fn find_by_owner(&self, owner_id: u64) -> Result<Vec<Pet>, StoreError>;

    /// Insert or replace
    fn save(&mut self, pet: &Pet) -> Result<(), StoreError>;

    fn delete(&mut self, id: Uuid) -> Result<(), StoreError>;

    /// A page of pets in a stable order (oldest first)
    fn list(&self, offset: usize, limit: usize) -> Result<Vec<Pet>, StoreError>;

    fn count(&self) -> Result<usize, StoreError>;
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PetStore {
    pub pets: HashMap<Uuid, Pet>,
    pub metadata: StoreMetadata,
    #[serde(skip)]
    path: Option<PathBuf>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StoreMetadata {
    pub owner: String,
    pub created_at: DateTime<Utc>,
    pub total_pets_ever: u64,
    pub total_deleted: u64,
}

impl PetStore {
    /// Load the store at `path`, or start an empty one if the file is
    /// missing or unreadable
    pub fn open(path: impl AsRef<Path>, owner: &str) -> Self {
        let path = path.as_ref().to_path_buf();
        if path.exists() {
            match std::fs::read_to_string(&path)
                .map_err(StoreError::from)
                .and_then(|data| serde_json::from_str::<PetStore>(&data).map_err(StoreError::from))
            {
                Ok(mut store) => {
                    info!("Opened pet store {:?} with {} pets", path, store.pets.len());
                    store.path = Some(path);
                    return store;
                }
                Err(e) => warn!("Could not read pet store {:?}, starting empty: {}", path, e),
            }
        }
        let mut store = Self::in_memory(owner);
        store.path = Some(path);
        store
    }

    /// A store with no backing file; `flush` is a no-op
    pub fn in_memory(owner: &str) -> Self {
        Self {
            pets: HashMap::new(),
            metadata: StoreMetadata {
                owner: owner.to_string(),
                created_at: Utc::now(),
                total_pets_ever: 0,
                total_deleted: 0,
            },
            path: None,
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Write the whole store to its backing file
    pub fn flush(&self) -> Result<(), StoreError> {
        if let Some(path) = &self.path {
            let json = serde_json::to_string_pretty(self)?;
            std::fs::write(path, json)?;
        }
        Ok(())
    }

    /// Look a pet up by full id or by a unique id prefix
    pub fn resolve(&self, id_or_prefix: &str) -> Result<Uuid, StoreError> {
        if let Ok(id) = Uuid::parse_str(id_or_prefix) {
            return Ok(id);
        }
        let mut matches = self
            .pets
            .keys()
            .filter(|id| id.to_string().starts_with(id_or_prefix));
        match (matches.next(), matches.next()) {
            (Some(id), None) if !id_or_prefix.is_empty() => Ok(*id),
            _ => Err(StoreError::NotFound(id_or_prefix.to_string())),
        }
    }

    fn ordered(&self) -> Vec<&Pet> {
        let mut pets: Vec<&Pet> = self.pets.values().collect();
        pets.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        pets
    }

    pub fn summary(&self) -> String {
        let total = self.pets.len();
        let avg_level = if total > 0 {
            self.pets.values().map(|p| p.level as f64).sum::<f64>() / total as f64
        } else {
            0.0
        };
        let max_generation = self.pets.values().map(|p| p.generation).max().unwrap_or(0);
        format!(
            "PetStore '{}' | {} pets ({} ever) | avg level {:.1} | max generation {}",
            self.metadata.owner, total, self.metadata.total_pets_ever, avg_level, max_generation
        )
    }
}

impl PetRepository for PetStore {
    fn find_by_id(&self, id: Uuid) -> Result<Pet, StoreError> {
        self.pets
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    fn find_by_owner(&self, owner_id: u64) -> Result<Vec<Pet>, StoreError> {
        Ok(self
            .ordered()
            .into_iter()
            .filter(|p| p.owner_id == owner_id)
            .cloned()
            .collect())
    }

    fn save(&mut self, pet: &Pet) -> Result<(), StoreError> {
        if self.pets.insert(pet.id, pet.clone()).is_none() {
            self.metadata.total_pets_ever += 1;
        }
        Ok(())
    }

    fn delete(&mut self, id: Uuid) -> Result<(), StoreError> {
        self.pets
            .remove(&id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        self.metadata.total_deleted += 1;
        Ok(())
    }

    fn list(&self, offset: usize, limit: usize) -> Result<Vec<Pet>, StoreError> {
        Ok(self
            .ordered()
            .into_iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }

    fn count(&self) -> Result<usize, StoreError> {
        Ok(self.pets.len())
    }
}
