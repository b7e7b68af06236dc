//! Domain events buffered on the pet aggregate and drained by the caller

use super::stage::Stage;
use super::FoodType;
use chrono::{DateTime, Utc};
use log::info;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusWarning {
    Hungry,
    Unhappy,
    Dirty,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DomainEvent {
    PetCreated {
        pet_id: Uuid,
        owner_id: u64,
        name: String,
        genome: String,
        at: DateTime<Utc>,
    },
    PetFed {
        pet_id: Uuid,
        owner_id: u64,
        food: FoodType,
        exp_gained: u32,
        at: DateTime<Utc>,
    },
    PetPlayed {
        pet_id: Uuid,
        owner_id: u64,
        exp_gained: u32,
        at: DateTime<Utc>,
    },
    PetCleaned {
        pet_id: Uuid,
        owner_id: u64,
        exp_gained: u32,
        at: DateTime<Utc>,
    },
    PetLevelUp {
        pet_id: Uuid,
        owner_id: u64,
        new_level: u32,
        at: DateTime<Utc>,
    },
    PetEvolved {
        pet_id: Uuid,
        owner_id: u64,
        new_stage: Stage,
        at: DateTime<Utc>,
    },
    PetStatusWarning {
        pet_id: Uuid,
        owner_id: u64,
        warning: StatusWarning,
        at: DateTime<Utc>,
    },
}

impl DomainEvent {
    /// Dotted routing name
    pub fn event_name(&self) -> &'static str {
        match self {
            DomainEvent::PetCreated { .. } => "pet.created",
            DomainEvent::PetFed { .. } => "pet.fed",
            DomainEvent::PetPlayed { .. } => "pet.played",
            DomainEvent::PetCleaned { .. } => "pet.cleaned",
            DomainEvent::PetLevelUp { .. } => "pet.level_up",
            DomainEvent::PetEvolved { .. } => "pet.evolved",
            DomainEvent::PetStatusWarning { .. } => "pet.status_warning",
        }
    }

    pub fn pet_id(&self) -> Uuid {
        match self {
            DomainEvent::PetCreated { pet_id, .. }
            | DomainEvent::PetFed { pet_id, .. }
            | DomainEvent::PetPlayed { pet_id, .. }
            | DomainEvent::PetCleaned { pet_id, .. }
            | DomainEvent::PetLevelUp { pet_id, .. }
            | DomainEvent::PetEvolved { pet_id, .. }
            | DomainEvent::PetStatusWarning { pet_id, .. } => *pet_id,
        }
    }
}

/// Where drained events go
pub trait EventSink {
    fn publish(&mut self, event: DomainEvent);

    fn publish_all(&mut self, events: Vec<DomainEvent>) {
        for event in events {
            self.publish(event);
        }
    }
}

impl EventSink for Vec<DomainEvent> {
    fn publish(&mut self, event: DomainEvent) {
        self.push(event);
    }
}

/// Logs every event at `info`
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl EventSink for LogSink {
    fn publish(&mut self, event: DomainEvent) {
        info!("{} pet={}", event.event_name(), event.pet_id());
    }
}
