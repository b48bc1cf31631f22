use std::sync::Arc;

use smarthome_api::models::{CreateActuatorRequest, UpdateRollerBlindRequest};
use time::OffsetDateTime;

use super::{identity_or_generate, on_conflict};
use crate::domain::values::{ActuatorId, DeviceId, Reading, SensorId, SensorReadingId};
use crate::domain::{
    Actuator, ActuatorModelKind, ActuatorValue, AggregateRoot, IdGenerator, SensorModelKind,
    SensorReading,
};
use crate::errors::{ActuatorError, ApiError, CatalogError, DeviceError, SensorError};
use crate::repositories::{
    ActuatorModelRepository, ActuatorRepository, DeviceRepository, Repositories, Repository,
    RepositoryError, SensorReadingRepository, SensorRepository,
};

pub struct ActuatorService {
    devices: Arc<dyn DeviceRepository>,
    sensors: Arc<dyn SensorRepository>,
    actuators: Arc<dyn ActuatorRepository>,
    actuator_models: Arc<dyn ActuatorModelRepository>,
    readings: Arc<dyn SensorReadingRepository>,
    ids: Arc<dyn IdGenerator>,
}

impl ActuatorService {
    pub fn new(repositories: &Repositories, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            devices: repositories.devices.clone(),
            sensors: repositories.sensors.clone(),
            actuators: repositories.actuators.clone(),
            actuator_models: repositories.actuator_models.clone(),
            readings: repositories.readings.clone(),
            ids,
        }
    }

    pub async fn add_actuator(
        &self,
        request: CreateActuatorRequest,
    ) -> Result<Actuator, ApiError> {
        let device_id = self.existing_device(&request.device_id).await?;
        let model: ActuatorModelKind = request.actuator_model_id.parse()?;
        if !self.actuator_models.contains_identity(&model).await? {
            return Err(CatalogError::ActuatorModelNotFound.into());
        }

        let id: ActuatorId = identity_or_generate(request.id, self.ids.as_ref())?;
        let actuator = self
            .actuators
            .save(Actuator::new(id, device_id, model))
            .await
            .map_err(on_conflict(ActuatorError::ActuatorExists))?;

        tracing::info!(
            actuator_id = %actuator.identity(),
            device_id = %actuator.device_id(),
            model = %actuator.model(),
            "actuator created"
        );

        Ok(actuator)
    }

    pub async fn actuators_by_device(&self, device_id: &str) -> Result<Vec<Actuator>, ApiError> {
        let device_id = self.existing_device(device_id).await?;

        Ok(self.actuators.find_by_device(&device_id).await?)
    }

    pub async fn get_actuator(&self, id: &str) -> Result<Actuator, ApiError> {
        let id = ActuatorId::new(id)?;

        self.actuators
            .of_identity(&id)
            .await?
            .ok_or_else(|| ActuatorError::ActuatorNotFound.into())
    }

    /// Moves a roller blind and records the new position through the
    /// position sensor of the same device.
    pub async fn update_roller_blind(
        &self,
        id: &str,
        request: UpdateRollerBlindRequest,
    ) -> Result<Actuator, ApiError> {
        let mut actuator = self.get_actuator(id).await?;
        if actuator.model() != ActuatorModelKind::Opncl0100 {
            return Err(ActuatorError::NotRollerBlind.into());
        }

        let sensor = self
            .sensors
            .of_identity(&SensorId::new(request.sensor_id)?)
            .await?
            .ok_or(SensorError::SensorNotFound)?;
        if sensor.model() != SensorModelKind::Cap200 {
            return Err(ActuatorError::NotPositionSensor.into());
        }
        if sensor.device_id() != actuator.device_id() {
            return Err(ActuatorError::DeviceMismatch.into());
        }

        let raw = request.value.to_string();
        let value = ActuatorValue::parse(ActuatorModelKind::Opncl0100, &raw)?;
        let measured = sensor.measure(&raw)?;
        actuator.set_value(value)?;

        // The position is only applied once its reading is stored.
        let reading = SensorReading::new(
            SensorReadingId::new(self.ids.generate())?,
            sensor.device_id().clone(),
            sensor.identity().clone(),
            Reading::new(measured.to_string())?,
            OffsetDateTime::now_utc(),
        );
        self.readings.save(reading).await?;

        let actuator = self.actuators.update(actuator).await.map_err(|e| match e {
            RepositoryError::Missing { .. } => ActuatorError::ActuatorNotFound.into(),
            e => ApiError::from(e),
        })?;

        tracing::info!(
            actuator_id = %actuator.identity(),
            sensor_id = %sensor.identity(),
            position = request.value,
            "roller blind moved"
        );

        Ok(actuator)
    }

    async fn existing_device(&self, device_id: &str) -> Result<DeviceId, ApiError> {
        let device_id = DeviceId::new(device_id)?;

        if !self.devices.contains_identity(&device_id).await? {
            return Err(DeviceError::DeviceNotFound.into());
        }

        Ok(device_id)
    }
}
