use std::sync::Arc;

use smarthome_api::models::CreateSensorRequest;

use super::{identity_or_generate, on_conflict};
use crate::domain::values::{DeviceId, SensorId};
use crate::domain::{AggregateRoot, IdGenerator, Sensor, SensorModelKind};
use crate::errors::{ApiError, CatalogError, DeviceError, SensorError};
use crate::repositories::{
    DeviceRepository, Repositories, Repository, SensorModelRepository, SensorRepository,
};

pub struct SensorService {
    devices: Arc<dyn DeviceRepository>,
    sensors: Arc<dyn SensorRepository>,
    sensor_models: Arc<dyn SensorModelRepository>,
    ids: Arc<dyn IdGenerator>,
}

impl SensorService {
    pub fn new(repositories: &Repositories, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            devices: repositories.devices.clone(),
            sensors: repositories.sensors.clone(),
            sensor_models: repositories.sensor_models.clone(),
            ids,
        }
    }

    pub async fn add_sensor(&self, request: CreateSensorRequest) -> Result<Sensor, ApiError> {
        let device_id = self.existing_device(&request.device_id).await?;
        let model: SensorModelKind = request.sensor_model_id.parse()?;
        if !self.sensor_models.contains_identity(&model).await? {
            return Err(CatalogError::SensorModelNotFound.into());
        }

        let id: SensorId = identity_or_generate(request.id, self.ids.as_ref())?;
        let sensor = self
            .sensors
            .save(Sensor::new(id, device_id, model))
            .await
            .map_err(on_conflict(SensorError::SensorExists))?;

        tracing::info!(
            sensor_id = %sensor.identity(),
            device_id = %sensor.device_id(),
            model = %sensor.model(),
            "sensor created"
        );

        Ok(sensor)
    }

    pub async fn sensors_by_device(&self, device_id: &str) -> Result<Vec<Sensor>, ApiError> {
        let device_id = self.existing_device(device_id).await?;

        Ok(self.sensors.find_by_device(&device_id).await?)
    }

    pub async fn get_sensor(&self, id: &str) -> Result<Sensor, ApiError> {
        let id = SensorId::new(id)?;

        self.sensors
            .of_identity(&id)
            .await?
            .ok_or_else(|| SensorError::SensorNotFound.into())
    }

    pub async fn is_temperature_sensor(&self, id: &str) -> Result<bool, ApiError> {
        Ok(self.get_sensor(id).await?.is_temperature())
    }

    async fn existing_device(&self, device_id: &str) -> Result<DeviceId, ApiError> {
        let device_id = DeviceId::new(device_id)?;

        if !self.devices.contains_identity(&device_id).await? {
            return Err(DeviceError::DeviceNotFound.into());
        }

        Ok(device_id)
    }
}
