//! Pet — the aggregate, its growth stages and the events it emits

mod entity;
mod events;
mod stage;

pub use entity::{FoodType, Pet, LOW_STATUS, PLAY_MIN_ENERGY, STATUS_MAX, TIRED_ENERGY};
pub use events::{DomainEvent, EventSink, LogSink, StatusWarning};
pub use stage::Stage;
