mod memory;
mod sql;

use std::sync::Arc;

use async_trait::async_trait;
use time::OffsetDateTime;

pub use memory::*;
pub use sql::*;

use crate::configs::Storage;
use crate::domain::values::{
    ActuatorId, ActuatorTypeId, DeviceId, HouseId, RoomId, SensorId, SensorReadingId,
    SensorTypeId,
};
use crate::domain::{
    Actuator, ActuatorModel, ActuatorModelKind, ActuatorType, Device, DomainError, House, Room,
    Sensor, SensorModel, SensorModelKind, SensorReading, SensorType,
};

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("{entity} {id} already exists")]
    Conflict { entity: &'static str, id: String },

    #[error("{entity} {id} does not exist")]
    Missing { entity: &'static str, id: String },

    #[error("Stored {entity} is invalid: {source}")]
    Corrupted {
        entity: &'static str,
        #[source]
        source: DomainError,
    },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Persistence shared by every aggregate.
#[async_trait]
pub trait Repository<K: Send + Sync, E: Send>: Send + Sync {
    /// Stores a new aggregate, rejecting a duplicate identity.
    async fn save(&self, entity: E) -> Result<E, RepositoryError>;

    /// Every stored aggregate, ordered by identity.
    async fn find_all(&self) -> Result<Vec<E>, RepositoryError>;

    async fn of_identity(&self, id: &K) -> Result<Option<E>, RepositoryError>;

    async fn contains_identity(&self, id: &K) -> Result<bool, RepositoryError> {
        Ok(self.of_identity(id).await?.is_some())
    }
}

#[async_trait]
pub trait HouseRepository: Repository<HouseId, House> {
    async fn update(&self, house: House) -> Result<House, RepositoryError>;
}

#[async_trait]
pub trait RoomRepository: Repository<RoomId, Room> {
    async fn find_by_house(&self, house_id: &HouseId) -> Result<Vec<Room>, RepositoryError>;

    async fn find_outside_rooms(&self) -> Result<Vec<Room>, RepositoryError>;
}

#[async_trait]
pub trait DeviceRepository: Repository<DeviceId, Device> {
    async fn update(&self, device: Device) -> Result<Device, RepositoryError>;

    async fn find_by_room(&self, room_id: &RoomId) -> Result<Vec<Device>, RepositoryError>;

    async fn find_active(&self) -> Result<Vec<Device>, RepositoryError>;
}

#[async_trait]
pub trait SensorRepository: Repository<SensorId, Sensor> {
    async fn find_by_device(&self, device_id: &DeviceId) -> Result<Vec<Sensor>, RepositoryError>;
}

#[async_trait]
pub trait ActuatorRepository: Repository<ActuatorId, Actuator> {
    async fn update(&self, actuator: Actuator) -> Result<Actuator, RepositoryError>;

    async fn find_by_device(&self, device_id: &DeviceId)
    -> Result<Vec<Actuator>, RepositoryError>;
}

pub trait SensorTypeRepository: Repository<SensorTypeId, SensorType> {}

pub trait ActuatorTypeRepository: Repository<ActuatorTypeId, ActuatorType> {}

#[async_trait]
pub trait SensorModelRepository: Repository<SensorModelKind, SensorModel> {
    async fn find_by_sensor_type(
        &self,
        sensor_type_id: &SensorTypeId,
    ) -> Result<Vec<SensorModel>, RepositoryError>;
}

#[async_trait]
pub trait ActuatorModelRepository: Repository<ActuatorModelKind, ActuatorModel> {
    async fn find_by_actuator_type(
        &self,
        actuator_type_id: &ActuatorTypeId,
    ) -> Result<Vec<ActuatorModel>, RepositoryError>;
}

/// Readings are always returned oldest first.
#[async_trait]
pub trait SensorReadingRepository: Repository<SensorReadingId, SensorReading> {
    async fn find_by_device(
        &self,
        device_id: &DeviceId,
    ) -> Result<Vec<SensorReading>, RepositoryError>;

    /// Readings of the device with `start <= timestamp <= end`.
    async fn find_by_device_within_period(
        &self,
        device_id: &DeviceId,
        start: OffsetDateTime,
        end: OffsetDateTime,
    ) -> Result<Vec<SensorReading>, RepositoryError>;

    /// Readings of the sensor with `start <= timestamp <= end`.
    async fn find_by_sensor_within_period(
        &self,
        sensor_id: &SensorId,
        start: OffsetDateTime,
        end: OffsetDateTime,
    ) -> Result<Vec<SensorReading>, RepositoryError>;
}

/// Handles to every repository, sharing one backend.
#[derive(Clone)]
pub struct Repositories {
    pub houses: Arc<dyn HouseRepository>,
    pub rooms: Arc<dyn RoomRepository>,
    pub devices: Arc<dyn DeviceRepository>,
    pub sensors: Arc<dyn SensorRepository>,
    pub actuators: Arc<dyn ActuatorRepository>,
    pub sensor_types: Arc<dyn SensorTypeRepository>,
    pub actuator_types: Arc<dyn ActuatorTypeRepository>,
    pub sensor_models: Arc<dyn SensorModelRepository>,
    pub actuator_models: Arc<dyn ActuatorModelRepository>,
    pub readings: Arc<dyn SensorReadingRepository>,
}

impl Repositories {
    pub fn in_memory() -> Self {
        Self {
            houses: Arc::new(MemoryHouseRepository::default()),
            rooms: Arc::new(MemoryRoomRepository::default()),
            devices: Arc::new(MemoryDeviceRepository::default()),
            sensors: Arc::new(MemorySensorRepository::default()),
            actuators: Arc::new(MemoryActuatorRepository::default()),
            sensor_types: Arc::new(MemorySensorTypeRepository::default()),
            actuator_types: Arc::new(MemoryActuatorTypeRepository::default()),
            sensor_models: Arc::new(MemorySensorModelRepository::default()),
            actuator_models: Arc::new(MemoryActuatorModelRepository::default()),
            readings: Arc::new(MemorySensorReadingRepository::default()),
        }
    }

    pub fn sqlite(storage: Arc<Storage>) -> Self {
        Self {
            houses: Arc::new(SqlHouseRepository::new(storage.clone())),
            rooms: Arc::new(SqlRoomRepository::new(storage.clone())),
            devices: Arc::new(SqlDeviceRepository::new(storage.clone())),
            sensors: Arc::new(SqlSensorRepository::new(storage.clone())),
            actuators: Arc::new(SqlActuatorRepository::new(storage.clone())),
            sensor_types: Arc::new(SqlSensorTypeRepository::new(storage.clone())),
            actuator_types: Arc::new(SqlActuatorTypeRepository::new(storage.clone())),
            sensor_models: Arc::new(SqlSensorModelRepository::new(storage.clone())),
            actuator_models: Arc::new(SqlActuatorModelRepository::new(storage.clone())),
            readings: Arc::new(SqlSensorReadingRepository::new(storage)),
        }
    }
}
