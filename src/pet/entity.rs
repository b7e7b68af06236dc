//! Pet — the aggregate root
//!
//! All state changes go through the action methods, which validate first
//! and mutate second. Every action takes the current time from the caller
//! and appends its domain events to an internal buffer that the caller
//! drains once the surrounding transaction completes.

use super::events::{DomainEvent, StatusWarning};
use super::stage::Stage;
use crate::error::PetError;
use crate::genome::Genome;
use crate::species::{BreedingRules, Gender, Species, SpeciesId};
use crate::traits::{Appearance, Personality, Skill, SkillKind, SpecialAppearance, MAX_SKILL_LEVEL};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Upper bound of every status value
pub const STATUS_MAX: u8 = 100;
/// Below this a status raises a warning after decay
pub const LOW_STATUS: u8 = 30;
/// Below this energy the pet counts as tired
pub const TIRED_ENERGY: u8 = 20;
/// Energy required to play
pub const PLAY_MIN_ENERGY: u8 = 10;

const DECAY_PER_HOUR: f64 = 5.0;
const ENERGY_REGEN_PER_HOUR: f64 = 10.0;
const PLAY_RESTORE: u32 = 20;
const PLAY_ENERGY_COST: u8 = 15;
const CLEAN_RESTORE: u32 = 30;
const CLEAN_EXP: u32 = 5;
const REST_ENERGY: u32 = 30;
const FEED_HAPPINESS: u32 = 5;
const BASE_ACTION_EXP: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodType {
    Basic,
    Premium,
    Special,
}

impl FoodType {
    pub fn hunger_restore(self) -> u32 {
        match self {
            FoodType::Basic => 20,
            FoodType::Premium => 40,
            FoodType::Special => 60,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "basic" => Some(FoodType::Basic),
            "premium" => Some(FoodType::Premium),
            "special" => Some(FoodType::Special),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "PetRecord")]
pub struct Pet {
    pub id: Uuid,
    pub owner_id: u64,
    pub name: String,
    pub species_id: SpeciesId,
    pub gender: Gender,
    genome: Genome,

    // Derived from the genome; refreshed by `rebind`
    pub appearance: Appearance,
    pub special: SpecialAppearance,
    pub personality: Personality,
    pub skill: Skill,

    stage: Stage,
    pub level: u32,
    pub exp: u32,

    pub hunger: u8,
    pub happiness: u8,
    pub cleanliness: u8,
    pub energy: u8,

    pub parent1: Option<Uuid>,
    pub parent2: Option<Uuid>,
    pub generation: u32,
    pub last_breed_at: Option<DateTime<Utc>>,

    pub born_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub last_fed_at: Option<DateTime<Utc>>,
    pub last_played_at: Option<DateTime<Utc>>,
    pub last_cleaned_at: Option<DateTime<Utc>>,

    #[serde(skip)]
    events: Vec<DomainEvent>,
}

impl Pet {
    /// A fresh egg of `species`, recording `PetCreated`
    pub fn new(
        owner_id: u64,
        name: impl Into<String>,
        species: &Species,
        genome: Genome,
        gender: Gender,
        now: DateTime<Utc>,
    ) -> Self {
        let mut pet = Self {
            id: Uuid::new_v4(),
            owner_id,
            name: name.into(),
            species_id: species.id,
            gender,
            genome,
            appearance: Appearance::from_genome(&genome),
            special: species.interpreter.interpret(&genome),
            personality: Personality::from_genome(&genome),
            skill: Skill::from_genome(&genome),
            stage: Stage::Egg,
            level: 1,
            exp: 0,
            hunger: 50,
            happiness: 50,
            cleanliness: 50,
            energy: STATUS_MAX,
            parent1: None,
            parent2: None,
            generation: 0,
            last_breed_at: None,
            born_at: now,
            created_at: now,
            last_fed_at: None,
            last_played_at: None,
            last_cleaned_at: None,
            events: Vec::new(),
        };
        pet.events.push(DomainEvent::PetCreated {
            pet_id: pet.id,
            owner_id,
            name: pet.name.clone(),
            genome: genome.code(),
            at: now,
        });
        pet
    }

    /// Record parentage on a freshly bred pet
    pub fn with_lineage(mut self, parent1: Uuid, parent2: Option<Uuid>, generation: u32) -> Self {
        self.parent1 = Some(parent1);
        self.parent2 = parent2;
        self.generation = generation;
        self
    }

    /// Bind to `species` and recompute every derived trait. Skill level is
    /// gameplay progress and survives the rebind.
    pub fn rebind(&mut self, species: &Species) {
        let level = self.skill.level;
        self.species_id = species.id;
        self.appearance = Appearance::from_genome(&self.genome);
        self.special = species.interpreter.interpret(&self.genome);
        self.personality = Personality::from_genome(&self.genome);
        self.skill = Skill::from_genome(&self.genome);
        self.skill.level = level;
    }

    pub fn genome(&self) -> &Genome {
        &self.genome
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    // --- Actions ---

    /// Returns the experience gained
    pub fn feed(&mut self, food: FoodType, now: DateTime<Utc>) -> Result<u32, PetError> {
        self.ensure_hatched()?;
        if self.hunger >= STATUS_MAX {
            return Err(PetError::PetIsFull);
        }

        let mut restore = food.hunger_restore();
        if self.personality.appetite > 70 {
            restore = scale(restore, 1.2);
        }
        if self.skill.is(SkillKind::Gluttony) {
            restore = scale(restore, self.skill.effect_multiplier());
        }

        self.hunger = raise(self.hunger, restore);
        self.happiness = raise(self.happiness, FEED_HAPPINESS);
        self.last_fed_at = Some(now);

        let exp = (BASE_ACTION_EXP * self.personality.feed_exp_bonus()) as u32;
        self.events.push(DomainEvent::PetFed {
            pet_id: self.id,
            owner_id: self.owner_id,
            food,
            exp_gained: exp,
            at: now,
        });
        self.gain_exp(exp, now);
        Ok(exp)
    }

    /// Returns the experience gained
    pub fn play(&mut self, now: DateTime<Utc>) -> Result<u32, PetError> {
        self.ensure_hatched()?;
        if self.happiness >= STATUS_MAX {
            return Err(PetError::PetIsHappy);
        }
        if self.energy < PLAY_MIN_ENERGY {
            return Err(PetError::PetIsTired);
        }

        let mut restore = PLAY_RESTORE;
        if self.personality.activity > 70 {
            restore = scale(restore, 1.2);
        }
        if self.skill.is(SkillKind::Playful) {
            restore = scale(restore, self.skill.effect_multiplier());
        }

        self.happiness = raise(self.happiness, restore);
        self.energy = self.energy.saturating_sub(PLAY_ENERGY_COST);
        self.last_played_at = Some(now);

        let exp = (BASE_ACTION_EXP * self.personality.play_exp_bonus()) as u32;
        self.events.push(DomainEvent::PetPlayed {
            pet_id: self.id,
            owner_id: self.owner_id,
            exp_gained: exp,
            at: now,
        });
        self.gain_exp(exp, now);
        Ok(exp)
    }

    /// Returns the experience gained
    pub fn clean(&mut self, now: DateTime<Utc>) -> Result<u32, PetError> {
        self.ensure_hatched()?;
        if self.cleanliness >= STATUS_MAX {
            return Err(PetError::PetIsClean);
        }

        let mut restore = CLEAN_RESTORE;
        if self.skill.is(SkillKind::CleanLover) {
            restore = scale(restore, self.skill.effect_multiplier());
        }

        self.cleanliness = raise(self.cleanliness, restore);
        self.last_cleaned_at = Some(now);

        self.events.push(DomainEvent::PetCleaned {
            pet_id: self.id,
            owner_id: self.owner_id,
            exp_gained: CLEAN_EXP,
            at: now,
        });
        self.gain_exp(CLEAN_EXP, now);
        Ok(CLEAN_EXP)
    }

    /// Recover energy
    pub fn rest(&mut self) -> Result<(), PetError> {
        self.ensure_hatched()?;
        self.energy = raise(self.energy, REST_ENERGY);
        Ok(())
    }

    /// Apply `hours` of elapsed time, then warn about any low status.
    /// Eggs are unaffected.
    pub fn decay_status(&mut self, hours: f64, now: DateTime<Utc>) {
        if self.stage == Stage::Egg || hours.is_nan() || hours <= 0.0 {
            return;
        }

        let mut base = DECAY_PER_HOUR;
        if self.skill.is(SkillKind::Endurance) {
            base /= self.skill.effect_multiplier();
        }

        self.hunger = lower(self.hunger, base * self.personality.hunger_decay_rate() * hours);
        self.happiness = lower(
            self.happiness,
            base * self.personality.happiness_decay_rate() * hours,
        );
        self.cleanliness = lower(self.cleanliness, base * hours);
        self.energy = raise(self.energy, floor_u32(ENERGY_REGEN_PER_HOUR * hours));

        let warnings = [
            (self.is_hungry(), StatusWarning::Hungry),
            (self.is_unhappy(), StatusWarning::Unhappy),
            (self.is_dirty(), StatusWarning::Dirty),
        ];
        for (raised, warning) in warnings {
            if raised {
                self.events.push(DomainEvent::PetStatusWarning {
                    pet_id: self.id,
                    owner_id: self.owner_id,
                    warning,
                    at: now,
                });
            }
        }
    }

    /// Grant experience, levelling up and evolving as far as it reaches
    pub fn gain_exp(&mut self, amount: u32, now: DateTime<Utc>) {
        self.exp = self.exp.saturating_add(amount);

        while self.exp >= self.exp_to_next_level() {
            self.exp -= self.exp_to_next_level();
            self.level += 1;
            self.events.push(DomainEvent::PetLevelUp {
                pet_id: self.id,
                owner_id: self.owner_id,
                new_level: self.level,
                at: now,
            });
        }

        while let Some((next, required)) = self.stage.next() {
            if self.level < required {
                break;
            }
            self.stage = next;
            self.events.push(DomainEvent::PetEvolved {
                pet_id: self.id,
                owner_id: self.owner_id,
                new_stage: next,
                at: now,
            });
        }
    }

    pub fn exp_to_next_level(&self) -> u32 {
        self.level.saturating_mul(100)
    }

    // --- Breeding ---

    /// Check the per-pet breeding gates without changing anything
    pub fn check_breeding(
        &self,
        rules: &BreedingRules,
        self_breed: bool,
        now: DateTime<Utc>,
    ) -> Result<(), PetError> {
        if self.stage < rules.min_stage {
            return Err(PetError::PetNotMature);
        }
        if self.level < rules.min_level {
            return Err(PetError::PetLevelTooLow);
        }
        if self.happiness < rules.min_happiness {
            return Err(PetError::PetUnhappy);
        }
        if self.breeding_cooldown(rules, self_breed, now) > Duration::zero() {
            return Err(PetError::BreedCooldownActive);
        }
        Ok(())
    }

    /// Time left before the applicable cooldown expires; zero when ready
    pub fn breeding_cooldown(
        &self,
        rules: &BreedingRules,
        self_breed: bool,
        now: DateTime<Utc>,
    ) -> Duration {
        match self.last_breed_at {
            Some(last) => {
                let remaining = rules.cooldown(self_breed) - (now - last);
                remaining.max(Duration::zero())
            }
            None => Duration::zero(),
        }
    }

    pub fn mark_bred(&mut self, now: DateTime<Utc>) {
        self.last_breed_at = Some(now);
    }

    // --- Queries ---

    pub fn is_hungry(&self) -> bool {
        self.hunger < LOW_STATUS
    }

    pub fn is_unhappy(&self) -> bool {
        self.happiness < LOW_STATUS
    }

    pub fn is_dirty(&self) -> bool {
        self.cleanliness < LOW_STATUS
    }

    pub fn is_tired(&self) -> bool {
        self.energy < TIRED_ENERGY
    }

    pub fn events(&self) -> &[DomainEvent] {
        &self.events
    }

    /// Take every buffered event, leaving the buffer empty
    pub fn drain_events(&mut self) -> Vec<DomainEvent> {
        std::mem::take(&mut self.events)
    }

    fn ensure_hatched(&self) -> Result<(), PetError> {
        if self.stage == Stage::Egg {
            Err(PetError::PetIsEgg)
        } else {
            Ok(())
        }
    }

    #[cfg(test)]
    pub(crate) fn set_stage(&mut self, stage: Stage) {
        self.stage = stage;
    }
}

/// Stored form of a `Pet`. Only state that is not derivable from the genome
/// is trusted; everything else is recomputed on load.
#[derive(Deserialize)]
struct PetRecord {
    id: Uuid,
    owner_id: u64,
    name: String,
    species_id: SpeciesId,
    gender: Gender,
    genome: String,
    #[serde(default)]
    special: SpecialAppearance,
    #[serde(default)]
    skill: Option<StoredSkill>,
    stage: Stage,
    level: u32,
    exp: u32,
    hunger: u8,
    happiness: u8,
    cleanliness: u8,
    energy: u8,
    parent1: Option<Uuid>,
    parent2: Option<Uuid>,
    generation: u32,
    last_breed_at: Option<DateTime<Utc>>,
    born_at: DateTime<Utc>,
    created_at: DateTime<Utc>,
    last_fed_at: Option<DateTime<Utc>>,
    last_played_at: Option<DateTime<Utc>>,
    last_cleaned_at: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
struct StoredSkill {
    level: u8,
}

impl From<PetRecord> for Pet {
    fn from(record: PetRecord) -> Self {
        // A regenerated genome invalidates the stored parts; they stay empty
        // until the pet is rebound to its species.
        let (genome, special) = match Genome::parse(&record.genome) {
            Some(genome) => (genome, record.special),
            None => {
                let genome = Genome::parse_or_regenerate(&record.genome, &mut rand::thread_rng());
                (genome, SpecialAppearance::new())
            }
        };

        let mut skill = Skill::from_genome(&genome);
        if let Some(stored) = record.skill {
            skill.level = stored.level.clamp(1, MAX_SKILL_LEVEL);
        }
        let level = record.level.max(1);

        Self {
            id: record.id,
            owner_id: record.owner_id,
            name: record.name,
            species_id: record.species_id,
            gender: record.gender,
            genome,
            appearance: Appearance::from_genome(&genome),
            special,
            personality: Personality::from_genome(&genome),
            skill,
            stage: record.stage.max(Stage::for_level(level)),
            level,
            exp: record.exp,
            hunger: record.hunger.min(STATUS_MAX),
            happiness: record.happiness.min(STATUS_MAX),
            cleanliness: record.cleanliness.min(STATUS_MAX),
            energy: record.energy.min(STATUS_MAX),
            parent1: record.parent1,
            parent2: record.parent2,
            generation: record.generation,
            last_breed_at: record.last_breed_at,
            born_at: record.born_at,
            created_at: record.created_at,
            last_fed_at: record.last_fed_at,
            last_played_at: record.last_played_at,
            last_cleaned_at: record.last_cleaned_at,
            events: Vec::new(),
        }
    }
}

fn scale(amount: u32, factor: f64) -> u32 {
    floor_u32(amount as f64 * factor)
}

fn floor_u32(value: f64) -> u32 {
    value.max(0.0).floor() as u32
}

fn raise(value: u8, amount: u32) -> u8 {
    (value as u32).saturating_add(amount).min(STATUS_MAX as u32) as u8
}

fn lower(value: u8, amount: f64) -> u8 {
    (value as u32).saturating_sub(floor_u32(amount)) as u8
}
