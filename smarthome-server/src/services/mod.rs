mod actuator_service;
mod catalog_service;
mod device_service;
mod device_type_service;
mod house_service;
mod reading_service;
mod room_service;
mod sensor_service;
mod weather_service;

use std::sync::Arc;

pub use actuator_service::*;
pub use catalog_service::*;
pub use device_service::*;
pub use device_type_service::*;
pub use house_service::*;
pub use reading_service::*;
pub use room_service::*;
pub use sensor_service::*;
pub use weather_service::*;

use crate::domain::{DomainError, IdGenerator};
use crate::errors::ApiError;
use crate::repositories::{RepositoryError, Repositories};

/// Application services sharing one set of repositories.
#[derive(Clone)]
pub struct Services {
    pub houses: Arc<HouseService>,
    pub rooms: Arc<RoomService>,
    pub devices: Arc<DeviceService>,
    pub device_types: Arc<DeviceTypeService>,
    pub sensors: Arc<SensorService>,
    pub actuators: Arc<ActuatorService>,
    pub catalog: Arc<CatalogService>,
    pub readings: Arc<ReadingService>,
    pub weather: Arc<WeatherService>,
}

impl Services {
    pub fn new(
        repositories: &Repositories,
        ids: Arc<dyn IdGenerator>,
        gateway: Arc<dyn WeatherGateway>,
    ) -> Self {
        let devices = Arc::new(DeviceService::new(repositories, ids.clone()));

        Self {
            houses: Arc::new(HouseService::new(repositories, ids.clone())),
            rooms: Arc::new(RoomService::new(repositories, ids.clone())),
            device_types: Arc::new(DeviceTypeService::new(repositories)),
            sensors: Arc::new(SensorService::new(repositories, ids.clone())),
            actuators: Arc::new(ActuatorService::new(repositories, ids.clone())),
            catalog: Arc::new(CatalogService::new(repositories)),
            readings: Arc::new(ReadingService::new(repositories, devices.clone(), ids)),
            weather: Arc::new(WeatherService::new(gateway)),
            devices,
        }
    }
}

/// Parses a caller supplied identity, or mints a fresh one.
fn identity_or_generate<I>(given: Option<String>, ids: &dyn IdGenerator) -> Result<I, DomainError>
where
    I: TryFrom<String, Error = DomainError>,
{
    I::try_from(given.unwrap_or_else(|| ids.generate()))
}

/// Maps a duplicate identity to the resource specific error.
fn on_conflict<E>(conflict: E) -> impl FnOnce(RepositoryError) -> ApiError
where
    E: Into<ApiError>,
{
    move |error| match error {
        RepositoryError::Conflict { .. } => conflict.into(),
        error => error.into(),
    }
}
