use std::sync::Arc;

use smarthome_api::models::{
    CreateActuatorModelRequest, CreateActuatorTypeRequest, CreateSensorModelRequest,
    CreateSensorTypeRequest,
};

use super::on_conflict;
use crate::domain::values::{ActuatorTypeId, Description, SensorTypeId, Unit};
use crate::domain::{
    ActuatorModel, ActuatorModelKind, ActuatorType, AggregateRoot, SensorModel, SensorModelKind,
    SensorType,
};
use crate::errors::{ApiError, CatalogError};
use crate::repositories::{
    ActuatorModelRepository, ActuatorTypeRepository, Repositories, Repository,
    SensorModelRepository, SensorTypeRepository,
};

/// Sensor and actuator types, and the hardware models implementing them.
pub struct CatalogService {
    sensor_types: Arc<dyn SensorTypeRepository>,
    actuator_types: Arc<dyn ActuatorTypeRepository>,
    sensor_models: Arc<dyn SensorModelRepository>,
    actuator_models: Arc<dyn ActuatorModelRepository>,
}

impl CatalogService {
    pub fn new(repositories: &Repositories) -> Self {
        Self {
            sensor_types: repositories.sensor_types.clone(),
            actuator_types: repositories.actuator_types.clone(),
            sensor_models: repositories.sensor_models.clone(),
            actuator_models: repositories.actuator_models.clone(),
        }
    }

    pub async fn create_sensor_type(
        &self,
        request: CreateSensorTypeRequest,
    ) -> Result<SensorType, ApiError> {
        let sensor_type = SensorType::new(
            SensorTypeId::new(request.id)?,
            Description::new(request.description)?,
            Unit::new(request.unit)?,
        );

        let sensor_type = self
            .sensor_types
            .save(sensor_type)
            .await
            .map_err(on_conflict(CatalogError::SensorTypeExists))?;

        tracing::info!(sensor_type_id = %sensor_type.identity(), "sensor type created");

        Ok(sensor_type)
    }

    pub async fn sensor_types(&self) -> Result<Vec<SensorType>, ApiError> {
        Ok(self.sensor_types.find_all().await?)
    }

    pub async fn sensor_type(&self, id: &str) -> Result<SensorType, ApiError> {
        self.sensor_types
            .of_identity(&SensorTypeId::new(id)?)
            .await?
            .ok_or_else(|| CatalogError::SensorTypeNotFound.into())
    }

    pub async fn create_actuator_type(
        &self,
        request: CreateActuatorTypeRequest,
    ) -> Result<ActuatorType, ApiError> {
        let actuator_type = ActuatorType::new(
            ActuatorTypeId::new(request.id)?,
            Description::new(request.description)?,
            Unit::new(request.unit)?,
        );

        let actuator_type = self
            .actuator_types
            .save(actuator_type)
            .await
            .map_err(on_conflict(CatalogError::ActuatorTypeExists))?;

        tracing::info!(actuator_type_id = %actuator_type.identity(), "actuator type created");

        Ok(actuator_type)
    }

    pub async fn actuator_types(&self) -> Result<Vec<ActuatorType>, ApiError> {
        Ok(self.actuator_types.find_all().await?)
    }

    pub async fn actuator_type(&self, id: &str) -> Result<ActuatorType, ApiError> {
        self.actuator_types
            .of_identity(&ActuatorTypeId::new(id)?)
            .await?
            .ok_or_else(|| CatalogError::ActuatorTypeNotFound.into())
    }

    pub async fn add_sensor_model(
        &self,
        request: CreateSensorModelRequest,
    ) -> Result<SensorModel, ApiError> {
        let kind: SensorModelKind = request.id.parse()?;
        let sensor_type = self.sensor_type(&request.sensor_type_id).await?;

        let model = self
            .sensor_models
            .save(SensorModel::new(kind, sensor_type.identity().clone()))
            .await
            .map_err(on_conflict(CatalogError::SensorModelExists))?;

        tracing::info!(model = %kind, sensor_type_id = %model.sensor_type_id(), "sensor model registered");

        Ok(model)
    }

    pub async fn sensor_model(&self, id: &str) -> Result<SensorModel, ApiError> {
        let kind: SensorModelKind = id.parse()?;

        self.sensor_models
            .of_identity(&kind)
            .await?
            .ok_or_else(|| CatalogError::SensorModelNotFound.into())
    }

    pub async fn sensor_models_by_type(
        &self,
        sensor_type_id: &str,
    ) -> Result<Vec<SensorModel>, ApiError> {
        let sensor_type = self.sensor_type(sensor_type_id).await?;

        Ok(self
            .sensor_models
            .find_by_sensor_type(sensor_type.identity())
            .await?)
    }

    pub async fn add_actuator_model(
        &self,
        request: CreateActuatorModelRequest,
    ) -> Result<ActuatorModel, ApiError> {
        let kind: ActuatorModelKind = request.id.parse()?;
        let actuator_type = self.actuator_type(&request.actuator_type_id).await?;

        let model = self
            .actuator_models
            .save(ActuatorModel::new(kind, actuator_type.identity().clone()))
            .await
            .map_err(on_conflict(CatalogError::ActuatorModelExists))?;

        tracing::info!(model = %kind, actuator_type_id = %model.actuator_type_id(), "actuator model registered");

        Ok(model)
    }

    pub async fn actuator_model(&self, id: &str) -> Result<ActuatorModel, ApiError> {
        let kind: ActuatorModelKind = id.parse()?;

        self.actuator_models
            .of_identity(&kind)
            .await?
            .ok_or_else(|| CatalogError::ActuatorModelNotFound.into())
    }

    pub async fn actuator_models_by_type(
        &self,
        actuator_type_id: &str,
    ) -> Result<Vec<ActuatorModel>, ApiError> {
        let actuator_type = self.actuator_type(actuator_type_id).await?;

        Ok(self
            .actuator_models
            .find_by_actuator_type(actuator_type.identity())
            .await?)
    }
}
