//! PetService — the application-facing entry points
//!
//! Wraps the catalog, the fusion table and the breeding engine, and runs
//! the periodic status decay over a repository.

use crate::breeding::{BreedingEngine, BreedingResult, SpeciesProbability};
use crate::config::{build_catalog, build_fusions, CatalogConfig};
use crate::error::{ConfigError, PetError, StoreError};
use crate::genome::{Dice, Genome};
use crate::pet::{EventSink, Pet};
use crate::species::{
    determine_gender, FusionRegistry, InterpreterFactory, Species, SpeciesCatalog, SpeciesId,
};
use crate::storage::PetRepository;
use crate::traits::SpecialAppearance;
use chrono::{DateTime, Utc};
use log::{info, warn};
use std::sync::Arc;
use uuid::Uuid;

/// Pets loaded per repository page during bulk decay
pub const DECAY_BATCH_SIZE: usize = 100;

/// What a bulk decay pass touched
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecayReport {
    pub visited: usize,
    pub saved: usize,
    pub failed: usize,
    pub events: usize,
}

pub struct PetService {
    catalog: Arc<SpeciesCatalog>,
    engine: BreedingEngine,
}

impl PetService {
    pub fn new(catalog: Arc<SpeciesCatalog>, fusions: Arc<FusionRegistry>) -> Self {
        let engine = BreedingEngine::new(Arc::clone(&catalog), fusions);
        Self { catalog, engine }
    }

    pub fn from_config(config: &CatalogConfig, factory: &InterpreterFactory) -> Result<Self, ConfigError> {
        let catalog = build_catalog(config, factory)?;
        let fusions = build_fusions(config);
        Ok(Self::new(Arc::new(catalog), Arc::new(fusions)))
    }

    /// Service over the bundled catalog and built-in interpreters
    pub fn bundled() -> Result<Self, ConfigError> {
        Self::from_config(&CatalogConfig::bundled()?, &InterpreterFactory::default())
    }

    pub fn catalog(&self) -> &SpeciesCatalog {
        &self.catalog
    }

    pub fn engine(&self) -> &BreedingEngine {
        &self.engine
    }

    // --- Creation ---

    /// A new egg of `species_id` with a random genome
    pub fn create_pet<D: Dice + ?Sized>(
        &self,
        owner_id: u64,
        name: &str,
        species_id: SpeciesId,
        now: DateTime<Utc>,
        dice: &mut D,
    ) -> Result<Pet, PetError> {
        let species = self
            .catalog
            .get(species_id)
            .ok_or(PetError::SpeciesNotFound(species_id))?;
        Ok(Self::hatch(owner_id, name, species, now, dice))
    }

    /// A new egg of a visible species, common species weighted higher
    pub fn create_random_pet<D: Dice + ?Sized>(
        &self,
        owner_id: u64,
        name: &str,
        now: DateTime<Utc>,
        dice: &mut D,
    ) -> Result<Pet, PetError> {
        let visible = self.catalog.visible();
        let total: u32 = visible.iter().map(|s| spawn_weight(s)).sum();
        if total == 0 {
            return Err(PetError::SpeciesNotFound(SpeciesId(0)));
        }

        let roll = dice.roll(total);
        let mut accumulated = 0;
        let mut chosen = visible[0];
        for &species in &visible {
            accumulated += spawn_weight(species);
            if roll < accumulated {
                chosen = species;
                break;
            }
        }
        Ok(Self::hatch(owner_id, name, chosen, now, dice))
    }

    fn hatch<D: Dice + ?Sized>(
        owner_id: u64,
        name: &str,
        species: &Species,
        now: DateTime<Utc>,
        dice: &mut D,
    ) -> Pet {
        let genome = Genome::random(dice);
        let gender = determine_gender(&genome, &species.gender_rule);
        let pet = Pet::new(owner_id, name, species, genome, gender, now);
        info!(
            "New {} egg '{}' ({}) for owner {}",
            species.name, pet.name, pet.id, owner_id
        );
        pet
    }

    // --- Breeding ---

    pub fn breed<D: Dice + ?Sized>(
        &self,
        parent1: &mut Pet,
        parent2: &mut Pet,
        child_name: &str,
        owner_id: u64,
        now: DateTime<Utc>,
        dice: &mut D,
    ) -> Result<BreedingResult, PetError> {
        self.engine
            .breed(parent1, Some(parent2), child_name, owner_id, now, dice)
    }

    pub fn self_breed<D: Dice + ?Sized>(
        &self,
        parent: &mut Pet,
        child_name: &str,
        owner_id: u64,
        now: DateTime<Utc>,
        dice: &mut D,
    ) -> Result<BreedingResult, PetError> {
        self.engine.breed(parent, None, child_name, owner_id, now, dice)
    }

    pub fn can_breed_pair(&self, parent1: &Pet, parent2: &Pet, now: DateTime<Utc>) -> Result<(), PetError> {
        self.engine.can_breed_pair(parent1, parent2, now)
    }

    pub fn can_self_breed(&self, pet: &Pet, now: DateTime<Utc>) -> Result<(), PetError> {
        self.engine.can_self_breed(pet, now)
    }

    pub fn predict(&self, parent1: &Pet, parent2: &Pet) -> Vec<SpeciesProbability> {
        self.engine.predict_offspring_species(parent1, parent2)
    }

    // --- Queries ---

    /// Overall ranking score
    pub fn pet_score(&self, pet: &Pet) -> u64 {
        let rarity = self.catalog.get(pet.species_id).map_or(0, |s| s.rarity as u64);
        let status = (pet.hunger as u64 + pet.happiness as u64 + pet.cleanliness as u64) / 3;
        pet.level as u64 * 10
            + pet.skill.strength as u64 * 50
            + rarity * 100
            + status
            + pet.stage().index() as u64 * 100
            + pet.generation as u64 * 20
    }

    pub fn interpret_appearance(&self, pet: &Pet) -> SpecialAppearance {
        self.catalog.interpret(pet.species_id, pet.genome())
    }

    // --- Loading ---

    /// Fetch a pet and rebind it to its species
    pub fn load_pet<R: PetRepository + ?Sized>(&self, repo: &R, id: Uuid) -> Result<Pet, StoreError> {
        let mut pet = repo.find_by_id(id)?;
        self.refresh(&mut pet);
        Ok(pet)
    }

    /// Recompute the species parts of a loaded pet from its genome
    pub fn refresh(&self, pet: &mut Pet) {
        match self.catalog.get(pet.species_id) {
            Some(species) => pet.rebind(species),
            None => warn!("Pet {} has unknown species {}", pet.id, pet.species_id.0),
        }
    }

    // --- Scheduling ---

    /// Decay every stored pet by `hours`, saving each one and publishing its
    /// events. A pet that fails to save is logged and skipped.
    pub fn decay_all<R, S>(
        &self,
        repo: &mut R,
        hours: f64,
        now: DateTime<Utc>,
        sink: &mut S,
    ) -> Result<DecayReport, StoreError>
    where
        R: PetRepository + ?Sized,
        S: EventSink + ?Sized,
    {
        let mut report = DecayReport::default();
        let mut offset = 0;
        loop {
            let batch = repo.list(offset, DECAY_BATCH_SIZE)?;
            if batch.is_empty() {
                break;
            }
            offset += batch.len();

            for mut pet in batch {
                report.visited += 1;
                self.refresh(&mut pet);
                pet.decay_status(hours, now);
                let events = pet.drain_events();
                match repo.save(&pet) {
                    Ok(()) => {
                        report.saved += 1;
                        report.events += events.len();
                        sink.publish_all(events);
                    }
                    Err(e) => {
                        report.failed += 1;
                        warn!("Decay: failed to save pet {}: {}", pet.id, e);
                    }
                }
            }
        }
        info!(
            "Decay pass ({:.1}h): {} pets, {} saved, {} failed, {} events",
            hours, report.visited, report.saved, report.failed, report.events
        );
        Ok(report)
    }
}

fn spawn_weight(species: &Species) -> u32 {
    6u32.saturating_sub(species.rarity as u32).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genome::ScriptedDice;
    use crate::pet::{DomainEvent, Stage, StatusWarning};
    use crate::storage::PetStore;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    fn service() -> PetService {
        PetService::bundled().unwrap()
    }

    #[test]
    fn test_create_pet() {
        let svc = service();
        let mut rng = StdRng::seed_from_u64(21);
        let pet = svc.create_pet(7, "Mochi", SpeciesId::CAT, Utc::now(), &mut rng).unwrap();
        assert_eq!(pet.species_id, SpeciesId::CAT);
        assert_eq!(pet.stage(), Stage::Egg);
        assert_eq!(pet.owner_id, 7);
        assert_eq!(pet.special, svc.interpret_appearance(&pet));

        let err = svc.create_pet(7, "x", SpeciesId(999), Utc::now(), &mut rng).unwrap_err();
        assert_eq!(err, PetError::SpeciesNotFound(SpeciesId(999)));
    }

    #[test]
    fn test_random_pet_weights() {
        let svc = service();
        // visible by id: 101(5) 102(5) 103(5) 201(4) 202(3) 301(5) 302(4)
        // 501(4) 502(2) 601(3) 602(3) → total 43
        let first = svc
            .create_random_pet(1, "a", Utc::now(), &mut ScriptedDice::new(vec![0]).with_fallback(3))
            .unwrap();
        assert_eq!(first.species_id, SpeciesId::CAT);
        let owl = svc
            .create_random_pet(1, "b", Utc::now(), &mut ScriptedDice::new(vec![19]).with_fallback(3))
            .unwrap();
        assert_eq!(owl.species_id, SpeciesId::OWL);
        let last = svc
            .create_random_pet(1, "c", Utc::now(), &mut ScriptedDice::new(vec![42]).with_fallback(3))
            .unwrap();
        assert_eq!(last.species_id, SpeciesId::WATER_SPIRIT);
    }

    #[test]
    fn test_random_pet_never_hidden() {
        let svc = service();
        let mut rng = StdRng::seed_from_u64(99);
        for i in 0..200 {
            let pet = svc.create_random_pet(1, &format!("p{i}"), Utc::now(), &mut rng).unwrap();
            assert!(!svc.catalog().get(pet.species_id).unwrap().is_hidden);
        }
    }

    #[test]
    fn test_pet_score() {
        let svc = service();
        let mut rng = StdRng::seed_from_u64(2);
        let mut pet = svc.create_pet(1, "Score", SpeciesId::PHOENIX, Utc::now(), &mut rng).unwrap();
        pet.level = 12;
        pet.set_stage(Stage::Teen);
        pet.generation = 2;
        pet.hunger = 60;
        pet.happiness = 70;
        pet.cleanliness = 80;
        let expected = 120 + pet.skill.strength as u64 * 50 + 400 + 70 + 200 + 40;
        assert_eq!(svc.pet_score(&pet), expected);
    }

    #[test]
    fn test_breed_through_service() {
        let svc = service();
        let now = Utc::now();
        let mut rng = StdRng::seed_from_u64(12);
        let mut slime = svc.create_pet(1, "Goo", SpeciesId::SLIME, now, &mut rng).unwrap();
        slime.set_stage(Stage::Adult);
        slime.level = 5;
        slime.happiness = 90;
        assert_eq!(svc.can_self_breed(&slime, now), Ok(()));
        let result = svc.self_breed(&mut slime, "Goo Jr", 1, now, &mut rng).unwrap();
        assert_eq!(result.species_id, SpeciesId::SLIME);
        assert_eq!(svc.can_self_breed(&slime, now), Err(PetError::BreedCooldownActive));
    }

    #[test]
    fn test_load_pet_rebuilds_parts() {
        let svc = service();
        let mut rng = StdRng::seed_from_u64(13);
        let pet = svc.create_pet(1, "Patch", SpeciesId::CAT, Utc::now(), &mut rng).unwrap();
        let mut json = serde_json::to_value(&pet).unwrap();
        json["genome"] = "corrupt".into();
        let damaged: Pet = serde_json::from_value(json).unwrap();
        assert!(damaged.special.is_empty());

        let mut store = PetStore::in_memory("load");
        store.save(&damaged).unwrap();
        let loaded = svc.load_pet(&store, pet.id).unwrap();
        assert_eq!(loaded.genome(), damaged.genome());
        assert_eq!(loaded.special, svc.interpret_appearance(&loaded));
        assert_eq!(loaded.special.len(), 4);

        assert!(matches!(svc.load_pet(&store, Uuid::new_v4()), Err(StoreError::NotFound(_))));
    }

    fn aged(svc: &PetService, rng: &mut StdRng, n: usize) -> PetStore {
        let mut store = PetStore::in_memory("decay");
        let t0 = Utc::now();
        for i in 0..n {
            let mut pet = svc
                .create_pet(1, &format!("p{i}"), SpeciesId::CAT, t0 + chrono::Duration::milliseconds(i as i64), rng)
                .unwrap();
            pet.set_stage(Stage::Child);
            pet.hunger = 35;
            pet.happiness = 90;
            pet.cleanliness = 90;
            pet.drain_events();
            store.save(&pet).unwrap();
        }
        store
    }

    #[test]
    fn test_decay_all_walks_every_batch() {
        let svc = service();
        let mut rng = StdRng::seed_from_u64(31);
        let mut store = aged(&svc, &mut rng, 230);
        let mut sink: Vec<DomainEvent> = Vec::new();

        let report = svc.decay_all(&mut store, 3.0, Utc::now(), &mut sink).unwrap();
        assert_eq!(report.visited, 230);
        assert_eq!(report.saved, 230);
        assert_eq!(report.failed, 0);
        assert_eq!(report.events, sink.len());
        for pet in store.pets.values() {
            assert!(pet.hunger < 35);
        }
        // hunger 35 drops below 30 for every pet
        let hungry = sink
            .iter()
            .filter(|e| matches!(e, DomainEvent::PetStatusWarning { warning: StatusWarning::Hungry, .. }))
            .count();
        assert_eq!(hungry, 230);
    }

    /// Store that refuses to save one chosen pet
    struct FlakyStore {
        inner: PetStore,
        broken: Uuid,
    }

    impl PetRepository for FlakyStore {
        fn find_by_id(&self, id: Uuid) -> Result<Pet, StoreError> {
            self.inner.find_by_id(id)
        }
        fn find_by_owner(&self, owner_id: u64) -> Result<Vec<Pet>, StoreError> {
            self.inner.find_by_owner(owner_id)
        }
        fn save(&mut self, pet: &Pet) -> Result<(), StoreError> {
            if pet.id == self.broken {
                return Err(StoreError::Io(std::io::Error::new(std::io::ErrorKind::Other, "disk full")));
            }
            self.inner.save(pet)
        }
        fn delete(&mut self, id: Uuid) -> Result<(), StoreError> {
            self.inner.delete(id)
        }
        fn list(&self, offset: usize, limit: usize) -> Result<Vec<Pet>, StoreError> {
            self.inner.list(offset, limit)
        }
        fn count(&self) -> Result<usize, StoreError> {
            self.inner.count()
        }
    }

    #[test]
    fn test_decay_all_skips_failed_save() {
        let svc = service();
        let mut rng = StdRng::seed_from_u64(32);
        let inner = aged(&svc, &mut rng, 3);
        let before: HashMap<Uuid, u8> = inner.pets.values().map(|p| (p.id, p.hunger)).collect();
        let broken = inner.list(1, 1).unwrap()[0].id;
        let mut store = FlakyStore { inner, broken };
        let mut sink: Vec<DomainEvent> = Vec::new();

        let report = svc.decay_all(&mut store, 3.0, Utc::now(), &mut sink).unwrap();
        assert_eq!(report.visited, 3);
        assert_eq!(report.saved, 2);
        assert_eq!(report.failed, 1);
        assert!(sink.iter().all(|e| e.pet_id() != broken));
        assert_eq!(store.inner.pets[&broken].hunger, before[&broken]);
    }
}
