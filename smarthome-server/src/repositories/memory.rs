use std::collections::BTreeMap;

use async_trait::async_trait;
use time::OffsetDateTime;
use tokio::sync::RwLock;

use super::{
    ActuatorModelRepository, ActuatorRepository, ActuatorTypeRepository, DeviceRepository,
    HouseRepository, Repository, RepositoryError, RoomRepository, SensorModelRepository,
    SensorReadingRepository, SensorRepository, SensorTypeRepository,
};
use crate::domain::values::{ActuatorTypeId, DeviceId, HouseId, RoomId, SensorId, SensorTypeId};
use crate::domain::{
    Actuator, ActuatorModel, ActuatorType, AggregateRoot, Device, House, Room, Sensor,
    SensorModel, SensorReading, SensorType,
};

/// Aggregates kept in a map ordered by identity.
pub struct MemoryStore<E: AggregateRoot> {
    entity: &'static str,
    entries: RwLock<BTreeMap<E::Id, E>>,
}

impl<E> MemoryStore<E>
where
    E: AggregateRoot + Clone + Send + Sync,
{
    pub fn new(entity: &'static str) -> Self {
        Self {
            entity,
            entries: RwLock::new(BTreeMap::new()),
        }
    }

    pub async fn insert(&self, entity: E) -> Result<E, RepositoryError> {
        let mut entries = self.entries.write().await;
        if entries.contains_key(entity.identity()) {
            return Err(RepositoryError::Conflict {
                entity: self.entity,
                id: entity.identity().to_string(),
            });
        }
        entries.insert(entity.identity().clone(), entity.clone());
        Ok(entity)
    }

    pub async fn replace(&self, entity: E) -> Result<E, RepositoryError> {
        let mut entries = self.entries.write().await;
        match entries.get_mut(entity.identity()) {
            Some(stored) => {
                *stored = entity.clone();
                Ok(entity)
            }
            None => Err(RepositoryError::Missing {
                entity: self.entity,
                id: entity.identity().to_string(),
            }),
        }
    }

    pub async fn get(&self, id: &E::Id) -> Option<E> {
        self.entries.read().await.get(id).cloned()
    }

    pub async fn filter(&self, predicate: impl Fn(&E) -> bool) -> Vec<E> {
        self.entries
            .read()
            .await
            .values()
            .filter(|entity| predicate(entity))
            .cloned()
            .collect()
    }

    pub async fn all(&self) -> Vec<E> {
        self.filter(|_| true).await
    }
}

macro_rules! memory_repository {
    ($name:ident, $entity:ty, $label:literal) => {
        pub struct $name {
            store: MemoryStore<$entity>,
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    store: MemoryStore::new($label),
                }
            }
        }

        #[async_trait]
        impl Repository<<$entity as AggregateRoot>::Id, $entity> for $name {
            async fn save(&self, entity: $entity) -> Result<$entity, RepositoryError> {
                self.store.insert(entity).await
            }

            async fn find_all(&self) -> Result<Vec<$entity>, RepositoryError> {
                Ok(self.store.all().await)
            }

            async fn of_identity(
                &self,
                id: &<$entity as AggregateRoot>::Id,
            ) -> Result<Option<$entity>, RepositoryError> {
                Ok(self.store.get(id).await)
            }
        }
    };
}

memory_repository!(MemoryHouseRepository, House, "House");
memory_repository!(MemoryRoomRepository, Room, "Room");
memory_repository!(MemoryDeviceRepository, Device, "Device");
memory_repository!(MemorySensorRepository, Sensor, "Sensor");
memory_repository!(MemoryActuatorRepository, Actuator, "Actuator");
memory_repository!(MemorySensorTypeRepository, SensorType, "Sensor type");
memory_repository!(MemoryActuatorTypeRepository, ActuatorType, "Actuator type");
memory_repository!(MemorySensorModelRepository, SensorModel, "Sensor model");
memory_repository!(MemoryActuatorModelRepository, ActuatorModel, "Actuator model");
memory_repository!(MemorySensorReadingRepository, SensorReading, "Sensor reading");

#[async_trait]
impl HouseRepository for MemoryHouseRepository {
    async fn update(&self, house: House) -> Result<House, RepositoryError> {
        self.store.replace(house).await
    }
}

#[async_trait]
impl RoomRepository for MemoryRoomRepository {
    async fn find_by_house(&self, house_id: &HouseId) -> Result<Vec<Room>, RepositoryError> {
        Ok(self.store.filter(|room| room.house_id() == house_id).await)
    }

    async fn find_outside_rooms(&self) -> Result<Vec<Room>, RepositoryError> {
        Ok(self.store.filter(|room| !room.is_inside()).await)
    }
}

#[async_trait]
impl DeviceRepository for MemoryDeviceRepository {
    async fn update(&self, device: Device) -> Result<Device, RepositoryError> {
        self.store.replace(device).await
    }

    async fn find_by_room(&self, room_id: &RoomId) -> Result<Vec<Device>, RepositoryError> {
        Ok(self.store.filter(|device| device.room_id() == room_id).await)
    }

    async fn find_active(&self) -> Result<Vec<Device>, RepositoryError> {
        Ok(self.store.filter(Device::is_active).await)
    }
}

#[async_trait]
impl SensorRepository for MemorySensorRepository {
    async fn find_by_device(&self, device_id: &DeviceId) -> Result<Vec<Sensor>, RepositoryError> {
        Ok(self.store.filter(|sensor| sensor.device_id() == device_id).await)
    }
}

#[async_trait]
impl ActuatorRepository for MemoryActuatorRepository {
    async fn update(&self, actuator: Actuator) -> Result<Actuator, RepositoryError> {
        self.store.replace(actuator).await
    }

    async fn find_by_device(
        &self,
        device_id: &DeviceId,
    ) -> Result<Vec<Actuator>, RepositoryError> {
        Ok(self.store.filter(|actuator| actuator.device_id() == device_id).await)
    }
}

impl SensorTypeRepository for MemorySensorTypeRepository {}

impl ActuatorTypeRepository for MemoryActuatorTypeRepository {}

#[async_trait]
impl SensorModelRepository for MemorySensorModelRepository {
    async fn find_by_sensor_type(
        &self,
        sensor_type_id: &SensorTypeId,
    ) -> Result<Vec<SensorModel>, RepositoryError> {
        Ok(self
            .store
            .filter(|model| model.sensor_type_id() == sensor_type_id)
            .await)
    }
}

#[async_trait]
impl ActuatorModelRepository for MemoryActuatorModelRepository {
    async fn find_by_actuator_type(
        &self,
        actuator_type_id: &ActuatorTypeId,
    ) -> Result<Vec<ActuatorModel>, RepositoryError> {
        Ok(self
            .store
            .filter(|model| model.actuator_type_id() == actuator_type_id)
            .await)
    }
}

impl MemorySensorReadingRepository {
    async fn chronological(
        &self,
        predicate: impl Fn(&SensorReading) -> bool,
    ) -> Vec<SensorReading> {
        let mut readings = self.store.filter(predicate).await;
        readings.sort_by(|left, right| {
            left.timestamp()
                .cmp(&right.timestamp())
                .then_with(|| left.identity().cmp(right.identity()))
        });
        readings
    }
}

#[async_trait]
impl SensorReadingRepository for MemorySensorReadingRepository {
    async fn find_by_device(
        &self,
        device_id: &DeviceId,
    ) -> Result<Vec<SensorReading>, RepositoryError> {
        Ok(self
            .chronological(|reading| reading.device_id() == device_id)
            .await)
    }

    async fn find_by_device_within_period(
        &self,
        device_id: &DeviceId,
        start: OffsetDateTime,
        end: OffsetDateTime,
    ) -> Result<Vec<SensorReading>, RepositoryError> {
        Ok(self
            .chronological(|reading| reading.device_id() == device_id && reading.within(start, end))
            .await)
    }

    async fn find_by_sensor_within_period(
        &self,
        sensor_id: &SensorId,
        start: OffsetDateTime,
        end: OffsetDateTime,
    ) -> Result<Vec<SensorReading>, RepositoryError> {
        Ok(self
            .chronological(|reading| reading.sensor_id() == sensor_id && reading.within(start, end))
            .await)
    }
}
