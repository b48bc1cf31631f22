use crate::domain::DomainError;
use crate::repositories::RepositoryError;

use super::{
    ActuatorError, CatalogError, DeviceError, HouseError, ReadingError, RoomError, SensorError,
    WeatherError,
};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("House error: {0}")]
    HouseError(#[from] HouseError),

    #[error("Room error: {0}")]
    RoomError(#[from] RoomError),

    #[error("Device error: {0}")]
    DeviceError(#[from] DeviceError),

    #[error("Sensor error: {0}")]
    SensorError(#[from] SensorError),

    #[error("Actuator error: {0}")]
    ActuatorError(#[from] ActuatorError),

    #[error("Catalog error: {0}")]
    CatalogError(#[from] CatalogError),

    #[error("Reading error: {0}")]
    ReadingError(#[from] ReadingError),

    #[error("Weather error: {0}")]
    WeatherError(#[from] WeatherError),

    #[error("Validation error: {0}")]
    ValidationError(#[from] DomainError),

    #[error("Repository error: {0}")]
    RepositoryError(#[from] RepositoryError),

    #[error("Internal error: {0}")]
    InternalError(#[from] anyhow::Error),
}
