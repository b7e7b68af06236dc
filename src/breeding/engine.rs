//! BreedingEngine — produces offspring from one or two parents
//!
//! Sexual breeding mixes both genomes field by field and may cross into a
//! rare fusion species. Asexual breeding copies the parent's genome with
//! mutation. Every gate is checked before any parent is touched.

use crate::error::PetError;
use crate::genome::{inherit, self_replicate, Dice, Genome, SELF_BREED_MUTATION_RATE};
use crate::pet::Pet;
use crate::species::{
    determine_child_gender, FusionRegistry, Gender, Species, SpeciesCatalog, SpeciesId,
};
use chrono::{DateTime, Duration, Utc};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Percent band for inheriting parent 1's species in a cross-species pairing
const PARENT1_SPECIES_BAND: u32 = 45;
/// Upper edge of parent 2's band; the rest rolls for a fusion
const PARENT2_SPECIES_BAND: u32 = 90;

/// Outcome of a successful breeding
#[derive(Debug, Clone)]
pub struct BreedingResult {
    pub child: Pet,
    pub species_id: SpeciesId,
    pub gender: Gender,
    /// The child is a fusion species
    pub is_hidden: bool,
    /// Parent species that fused, when `is_hidden`
    pub fusion_from: Option<(SpeciesId, SpeciesId)>,
}

/// One entry of an offspring forecast
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesProbability {
    pub species_id: SpeciesId,
    /// Integer percent
    pub probability: u32,
    pub is_hidden: bool,
}

pub struct BreedingEngine {
    catalog: Arc<SpeciesCatalog>,
    fusions: Arc<FusionRegistry>,
}

impl BreedingEngine {
    pub fn new(catalog: Arc<SpeciesCatalog>, fusions: Arc<FusionRegistry>) -> Self {
        Self { catalog, fusions }
    }

    pub fn catalog(&self) -> &SpeciesCatalog {
        &self.catalog
    }

    pub fn fusions(&self) -> &FusionRegistry {
        &self.fusions
    }

    /// Breed `parent1` with `parent2`, or on its own when `parent2` is `None`
    pub fn breed<D: Dice + ?Sized>(
        &self,
        parent1: &mut Pet,
        parent2: Option<&mut Pet>,
        child_name: &str,
        owner_id: u64,
        now: DateTime<Utc>,
        dice: &mut D,
    ) -> Result<BreedingResult, PetError> {
        match parent2 {
            None => self.self_breed(parent1, child_name, owner_id, now, dice),
            Some(parent2) => self.sexual_breed(parent1, parent2, child_name, owner_id, now, dice),
        }
    }

    fn self_breed<D: Dice + ?Sized>(
        &self,
        parent: &mut Pet,
        child_name: &str,
        owner_id: u64,
        now: DateTime<Utc>,
        dice: &mut D,
    ) -> Result<BreedingResult, PetError> {
        let species = self.self_breed_species(parent, now)?;

        let genome = self_replicate(parent.genome(), SELF_BREED_MUTATION_RATE, dice);
        let gender = parent.gender;
        let child = Pet::new(owner_id, child_name, species, genome, gender, now).with_lineage(
            parent.id,
            None,
            parent.generation + 1,
        );

        parent.mark_bred(now);
        info!(
            "Self-bred {} → {} (species {}, gen {}, {} fields mutated)",
            parent.id,
            child.id,
            species.id,
            child.generation,
            genome.distance(parent.genome())
        );

        Ok(BreedingResult {
            species_id: species.id,
            gender,
            is_hidden: false,
            fusion_from: None,
            child,
        })
    }

    fn sexual_breed<D: Dice + ?Sized>(
        &self,
        parent1: &mut Pet,
        parent2: &mut Pet,
        child_name: &str,
        owner_id: u64,
        now: DateTime<Utc>,
        dice: &mut D,
    ) -> Result<BreedingResult, PetError> {
        self.can_breed_pair(parent1, parent2, now)?;

        let genome = inherit(parent1.genome(), parent2.genome(), dice);
        let (species_id, is_hidden) =
            self.resolve_child_species(parent1.species_id, parent2.species_id, &genome, dice);
        let species = self
            .catalog
            .get(species_id)
            .ok_or(PetError::SpeciesNotFound(species_id))?;

        let gender =
            determine_child_gender(parent1.gender, parent2.gender, &genome, &species.gender_rule, dice);
        let generation = parent1.generation.max(parent2.generation) + 1;
        let child = Pet::new(owner_id, child_name, species, genome, gender, now).with_lineage(
            parent1.id,
            Some(parent2.id),
            generation,
        );

        parent1.mark_bred(now);
        parent2.mark_bred(now);

        let fusion_from = is_hidden.then_some((parent1.species_id, parent2.species_id));
        if is_hidden {
            info!(
                "Fusion! {} × {} produced hidden species {} ({})",
                parent1.species_id, parent2.species_id, species.id, species.name
            );
        } else {
            info!(
                "Bred {} × {} → {} (species {}, {:?}, gen {})",
                parent1.id, parent2.id, child.id, species.id, gender, generation
            );
        }

        Ok(BreedingResult {
            species_id: species.id,
            gender,
            is_hidden,
            fusion_from,
            child,
        })
    }

    /// Pick the offspring species for a pairing. Falls back to parent 1's
    /// species when the outcome is not in the catalog.
    pub fn resolve_child_species<D: Dice + ?Sized>(
        &self,
        parent1: SpeciesId,
        parent2: SpeciesId,
        child: &Genome,
        dice: &mut D,
    ) -> (SpeciesId, bool) {
        if parent1 == parent2 {
            return (parent1, false);
        }

        let roll = dice.roll(100);
        let (species, is_hidden) = if roll < PARENT1_SPECIES_BAND {
            (parent1, false)
        } else if roll < PARENT2_SPECIES_BAND {
            (parent2, false)
        } else if let Some(fused) = self.fusions.check_trigger(parent1, parent2, child) {
            (fused, true)
        } else {
            debug!(
                "Fusion band hit for {} × {} but trigger {} fell short",
                parent1,
                parent2,
                child.hidden_species_trigger()
            );
            if dice.roll(2) == 0 {
                (parent1, false)
            } else {
                (parent2, false)
            }
        };

        if self.catalog.contains(species) {
            (species, is_hidden)
        } else {
            warn!(
                "Resolved species {} is not in the catalog, falling back to {}",
                species, parent1
            );
            (parent1, false)
        }
    }

    /// Check every gate for a sexual pairing without changing anything
    pub fn can_breed_pair(&self, parent1: &Pet, parent2: &Pet, now: DateTime<Utc>) -> Result<(), PetError> {
        let species1 = self.species_of(parent1)?;
        let species2 = self.species_of(parent2)?;

        if !parent1.gender.can_breed_with(parent2.gender) {
            return Err(PetError::IncompatibleGender);
        }

        parent1.check_breeding(&species1.breeding_rules, false, now)?;
        parent2.check_breeding(&species2.breeding_rules, false, now)?;
        Ok(())
    }

    /// Check every gate for self-replication without changing anything
    pub fn can_self_breed(&self, pet: &Pet, now: DateTime<Utc>) -> Result<(), PetError> {
        self.self_breed_species(pet, now).map(|_| ())
    }

    /// Time left before `pet` may breed again; zero when ready or unknown
    pub fn breeding_cooldown(&self, pet: &Pet, self_breed: bool, now: DateTime<Utc>) -> Duration {
        match self.catalog.get(pet.species_id) {
            Some(species) => pet.breeding_cooldown(&species.breeding_rules, self_breed, now),
            None => Duration::zero(),
        }
    }

    /// Forecast offspring species as integer percentages
    pub fn predict_offspring_species(&self, parent1: &Pet, parent2: &Pet) -> Vec<SpeciesProbability> {
        let (a, b) = (parent1.species_id, parent2.species_id);
        if a == b {
            return vec![SpeciesProbability {
                species_id: a,
                probability: 100,
                is_hidden: false,
            }];
        }

        let mut forecast = vec![
            SpeciesProbability {
                species_id: a,
                probability: PARENT1_SPECIES_BAND,
                is_hidden: false,
            },
            SpeciesProbability {
                species_id: b,
                probability: PARENT2_SPECIES_BAND - PARENT1_SPECIES_BAND,
                is_hidden: false,
            },
        ];

        if let Some(fusion) = self.fusions.get(a, b) {
            let hidden = (10 * (255 - fusion.trigger_threshold as u32) / 255).max(1);
            let remaining = 100 - hidden;
            for entry in forecast.iter_mut() {
                entry.probability = remaining * entry.probability / PARENT2_SPECIES_BAND;
            }
            forecast.push(SpeciesProbability {
                species_id: fusion.result,
                probability: hidden,
                is_hidden: true,
            });
        }

        forecast
    }

    fn species_of(&self, pet: &Pet) -> Result<&Species, PetError> {
        self.catalog
            .get(pet.species_id)
            .ok_or(PetError::SpeciesNotFound(pet.species_id))
    }

    fn self_breed_species(&self, pet: &Pet, now: DateTime<Utc>) -> Result<&Species, PetError> {
        let species = self.species_of(pet)?;
        if !species.gender_rule.can_self_breed {
            return Err(PetError::CannotSelfBreed);
        }
        pet.check_breeding(&species.breeding_rules, true, now)?;
        Ok(species)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genome::{ScriptedDice, GENOME_LEN, HIDDEN_TRIGGER_PAIR};
    use crate::pet::Stage;
    use crate::species::interpreter::{Feline, Parrot, Slime};
    use crate::species::{Fusion, GenderRule};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn engine() -> BreedingEngine {
        let mut catalog = SpeciesCatalog::new();
        catalog.register(Species::new(SpeciesId::CAT, "Cat", 1, Arc::new(Feline)));
        catalog.register(Species::new(SpeciesId::DOG, "Dog", 1, Arc::new(Feline)));
        catalog.register(Species::new(SpeciesId::PARROT, "Parrot", 2, Arc::new(Parrot)));
        catalog.register(
            Species::new(SpeciesId::SLIME, "Slime", 2, Arc::new(Slime))
                .with_gender_rule(GenderRule::asexual()),
        );
        catalog.register(
            Species::new(SpeciesId::GRIFFIN, "Griffin", 5, Arc::new(Feline)).hidden(),
        );

        let mut fusions = FusionRegistry::new();
        fusions.register(
            SpeciesId::CAT,
            SpeciesId::PARROT,
            Fusion { result: SpeciesId::GRIFFIN, trigger_threshold: 200, rarity: 5 },
        );
        // unicorn is not in this catalog
        fusions.register(
            SpeciesId::DOG,
            SpeciesId::PARROT,
            Fusion { result: SpeciesId::UNICORN, trigger_threshold: 0, rarity: 5 },
        );
        fusions.register(
            SpeciesId::SLIME,
            SpeciesId::PARROT,
            Fusion { result: SpeciesId::GRIFFIN, trigger_threshold: 170, rarity: 5 },
        );
        BreedingEngine::new(Arc::new(catalog), Arc::new(fusions))
    }

    fn adult(engine: &BreedingEngine, species: SpeciesId, gender: Gender) -> Pet {
        let mut rng = StdRng::seed_from_u64(species.0 as u64);
        let s = engine.catalog().get(species).unwrap();
        let mut pet = Pet::new(1, "Parent", s, Genome::random(&mut rng), gender, Utc::now());
        pet.set_stage(Stage::Adult);
        pet.level = 10;
        pet.happiness = 80;
        pet.drain_events();
        pet
    }

    fn trigger_genome(trigger: u8) -> Genome {
        let mut fields = [0u8; GENOME_LEN];
        fields[HIDDEN_TRIGGER_PAIR] = trigger >> 4;
        fields[HIDDEN_TRIGGER_PAIR + 1] = trigger & 0x0f;
        Genome::from_fields(fields)
    }

    #[test]
    fn test_species_roll_bands() {
        let e = engine();
        let g = trigger_genome(255);
        let (cat, dog) = (SpeciesId::CAT, SpeciesId::DOG);
        assert_eq!(e.resolve_child_species(cat, dog, &g, &mut ScriptedDice::new(vec![44])), (cat, false));
        assert_eq!(e.resolve_child_species(cat, dog, &g, &mut ScriptedDice::new(vec![70])), (dog, false));
        // no fusion for cat × dog: 50/50 fallback
        assert_eq!(e.resolve_child_species(cat, dog, &g, &mut ScriptedDice::new(vec![95, 0])), (cat, false));
        assert_eq!(e.resolve_child_species(cat, dog, &g, &mut ScriptedDice::new(vec![95, 1])), (dog, false));
    }

    #[test]
    fn test_same_species_draws_nothing() {
        let e = engine();
        let mut dice = ScriptedDice::new(vec![99]);
        let got = e.resolve_child_species(SpeciesId::CAT, SpeciesId::CAT, &trigger_genome(255), &mut dice);
        assert_eq!(got, (SpeciesId::CAT, false));
        assert_eq!(dice.consumed(), 0);
    }

    #[test]
    fn test_fusion_trigger() {
        let e = engine();
        let (cat, parrot) = (SpeciesId::CAT, SpeciesId::PARROT);
        let got = e.resolve_child_species(cat, parrot, &trigger_genome(201), &mut ScriptedDice::new(vec![95]));
        assert_eq!(got, (SpeciesId::GRIFFIN, true));
        // threshold not exceeded: coin flip between parents
        let got = e.resolve_child_species(cat, parrot, &trigger_genome(200), &mut ScriptedDice::new(vec![95, 1]));
        assert_eq!(got, (parrot, false));
    }

    #[test]
    fn test_missing_fusion_species_falls_back() {
        let e = engine();
        let got = e.resolve_child_species(
            SpeciesId::DOG,
            SpeciesId::PARROT,
            &trigger_genome(100),
            &mut ScriptedDice::new(vec![95]),
        );
        assert_eq!(got, (SpeciesId::DOG, false));
    }

    #[test]
    fn test_sexual_breed() {
        let e = engine();
        let mut mom = adult(&e, SpeciesId::CAT, Gender::Female);
        let mut dad = adult(&e, SpeciesId::CAT, Gender::Male);
        dad.generation = 3;
        let now = Utc::now();
        let mut rng = StdRng::seed_from_u64(11);

        let result = e.breed(&mut mom, Some(&mut dad), "Kit", 2, now, &mut rng).unwrap();
        assert_eq!(result.species_id, SpeciesId::CAT);
        assert!(!result.is_hidden);
        assert!(result.fusion_from.is_none());

        let mut child = result.child;
        assert_eq!(child.generation, 4);
        assert_eq!(child.owner_id, 2);
        assert_eq!(child.stage(), Stage::Egg);
        assert_eq!(child.parent1, Some(mom.id));
        assert_eq!(child.parent2, Some(dad.id));
        assert_eq!(child.drain_events()[0].event_name(), "pet.created");
        assert_eq!(mom.last_breed_at, Some(now));
        assert_eq!(dad.last_breed_at, Some(now));
    }

    #[test]
    fn test_gate_order_and_no_mutation_on_error() {
        let e = engine();
        let now = Utc::now();
        let mut rng = StdRng::seed_from_u64(5);

        let mut a = adult(&e, SpeciesId::CAT, Gender::Male);
        let mut b = adult(&e, SpeciesId::CAT, Gender::Male);
        b.level = 1; // would fail gating, but gender is checked first
        let err = e.breed(&mut a, Some(&mut b), "x", 1, now, &mut rng).unwrap_err();
        assert_eq!(err, PetError::IncompatibleGender);

        b.gender = Gender::Female;
        a.happiness = 10;
        let err = e.breed(&mut a, Some(&mut b), "x", 1, now, &mut rng).unwrap_err();
        assert_eq!(err, PetError::PetUnhappy);

        a.happiness = 80;
        let err = e.breed(&mut a, Some(&mut b), "x", 1, now, &mut rng).unwrap_err();
        assert_eq!(err, PetError::PetLevelTooLow);
        assert!(a.last_breed_at.is_none());
        assert!(b.last_breed_at.is_none());

        let mut stray = adult(&e, SpeciesId::CAT, Gender::Female);
        stray.species_id = SpeciesId(999);
        let err = e.can_breed_pair(&a, &stray, now).unwrap_err();
        assert_eq!(err, PetError::SpeciesNotFound(SpeciesId(999)));
    }

    #[test]
    fn test_sexual_cooldown() {
        let e = engine();
        let now = Utc::now();
        let mut mom = adult(&e, SpeciesId::CAT, Gender::Female);
        let dad = adult(&e, SpeciesId::CAT, Gender::Male);
        mom.mark_bred(now - Duration::hours(23));
        assert_eq!(e.can_breed_pair(&mom, &dad, now), Err(PetError::BreedCooldownActive));
        assert_eq!(e.breeding_cooldown(&mom, false, now), Duration::hours(1));
        mom.mark_bred(now - Duration::hours(24));
        assert_eq!(e.can_breed_pair(&mom, &dad, now), Ok(()));
    }

    #[test]
    fn test_self_breed() {
        let e = engine();
        let now = Utc::now();
        let mut slime = adult(&e, SpeciesId::SLIME, Gender::None);
        slime.generation = 1;
        let mut rng = StdRng::seed_from_u64(8);

        let result = e.breed(&mut slime, None, "Blob", 1, now, &mut rng).unwrap();
        assert_eq!(result.species_id, SpeciesId::SLIME);
        assert_eq!(result.gender, Gender::None);
        assert_eq!(result.child.generation, 2);
        assert_eq!(result.child.parent1, Some(slime.id));
        assert!(result.child.parent2.is_none());

        // self-breed cooldown is 48h
        assert_eq!(e.can_self_breed(&slime, now + Duration::hours(47)), Err(PetError::BreedCooldownActive));
        assert_eq!(e.can_self_breed(&slime, now + Duration::hours(48)), Ok(()));
    }

    #[test]
    fn test_self_breed_requires_rule() {
        let e = engine();
        let mut cat = adult(&e, SpeciesId::CAT, Gender::Female);
        let mut rng = StdRng::seed_from_u64(1);
        let err = e.breed(&mut cat, None, "x", 1, Utc::now(), &mut rng).unwrap_err();
        assert_eq!(err, PetError::CannotSelfBreed);
        assert!(cat.last_breed_at.is_none());
    }

    #[test]
    fn test_predict() {
        let e = engine();
        let cat = adult(&e, SpeciesId::CAT, Gender::Female);
        let cat2 = adult(&e, SpeciesId::CAT, Gender::Male);
        let dog = adult(&e, SpeciesId::DOG, Gender::Male);
        let parrot = adult(&e, SpeciesId::PARROT, Gender::Male);

        let same = e.predict_offspring_species(&cat, &cat2);
        assert_eq!(same.len(), 1);
        assert_eq!(same[0].probability, 100);

        let plain: Vec<u32> = e.predict_offspring_species(&cat, &dog).iter().map(|p| p.probability).collect();
        assert_eq!(plain, vec![45, 45]);

        // hidden = max(1, 10 × 55 / 255) = 2, remaining 98 → 49 each
        let fused = e.predict_offspring_species(&cat, &parrot);
        let probs: Vec<u32> = fused.iter().map(|p| p.probability).collect();
        assert_eq!(probs, vec![49, 49, 2]);
        assert!(fused[2].is_hidden);
        assert_eq!(fused[2].species_id, SpeciesId::GRIFFIN);
    }

    #[test]
    fn test_predict_odd_remaining_sums_to_99() {
        let e = engine();
        let slime = adult(&e, SpeciesId::SLIME, Gender::None);
        let parrot = adult(&e, SpeciesId::PARROT, Gender::Male);
        // threshold 170: hidden = 10 × 85 / 255 = 3, remaining 97 → 48 each
        let probs: Vec<u32> = e.predict_offspring_species(&slime, &parrot).iter().map(|p| p.probability).collect();
        assert_eq!(probs, vec![48, 48, 3]);
        assert_eq!(probs.iter().sum::<u32>(), 99);

        // threshold 0: hidden = 10, remaining 90 → 45 each
        let dog = adult(&e, SpeciesId::DOG, Gender::Female);
        let probs: Vec<u32> = e.predict_offspring_species(&dog, &parrot).iter().map(|p| p.probability).collect();
        assert_eq!(probs, vec![45, 45, 10]);
    }
}
