pub mod actuator;
pub mod analysis;
pub mod catalog;
pub mod device;
mod error;
pub mod house;
pub mod identity;
pub mod measurement;
pub mod reading;
pub mod room;
pub mod sensor;
pub mod values;

pub use actuator::Actuator;
pub use catalog::{
    ActuatorModel, ActuatorModelKind, ActuatorType, SensorModel, SensorModelKind, SensorType,
};
pub use device::Device;
pub use error::DomainError;
pub use house::House;
pub use identity::{IdGenerator, SequentialGenerator, UuidGenerator};
pub use measurement::{ActuatorValue, SensorValue};
pub use reading::SensorReading;
pub use room::Room;
pub use sensor::Sensor;

/// Entry point of a cluster of domain objects.
///
/// Two aggregates are the same entity when their identities match;
/// `same_as` additionally compares every attribute.
pub trait AggregateRoot {
    type Id: Clone + Ord + std::fmt::Display + Send + Sync;

    fn identity(&self) -> &Self::Id;

    fn same_as(&self, other: &Self) -> bool;
}
