use std::collections::BTreeMap;
use std::sync::Arc;

use crate::domain::values::DeviceId;
use crate::domain::{AggregateRoot, Device};
use crate::errors::ApiError;
use crate::repositories::{
    ActuatorModelRepository, ActuatorRepository, ActuatorTypeRepository, DeviceRepository,
    Repositories, Repository, SensorModelRepository, SensorRepository, SensorTypeRepository,
};

/// Groups devices by what their sensors and actuators do.
pub struct DeviceTypeService {
    devices: Arc<dyn DeviceRepository>,
    sensors: Arc<dyn SensorRepository>,
    actuators: Arc<dyn ActuatorRepository>,
    sensor_types: Arc<dyn SensorTypeRepository>,
    actuator_types: Arc<dyn ActuatorTypeRepository>,
    sensor_models: Arc<dyn SensorModelRepository>,
    actuator_models: Arc<dyn ActuatorModelRepository>,
}

impl DeviceTypeService {
    pub fn new(repositories: &Repositories) -> Self {
        Self {
            devices: repositories.devices.clone(),
            sensors: repositories.sensors.clone(),
            actuators: repositories.actuators.clone(),
            sensor_types: repositories.sensor_types.clone(),
            actuator_types: repositories.actuator_types.clone(),
            sensor_models: repositories.sensor_models.clone(),
            actuator_models: repositories.actuator_models.clone(),
        }
    }

    /// Devices keyed by the description of each sensor or actuator type they
    /// host. A device appears at most once under a description.
    pub async fn devices_by_functionality(
        &self,
    ) -> Result<BTreeMap<String, Vec<Device>>, ApiError> {
        let devices: BTreeMap<DeviceId, Device> = self
            .devices
            .find_all()
            .await?
            .into_iter()
            .map(|device| (device.identity().clone(), device))
            .collect();

        let sensor_types: BTreeMap<_, _> = self
            .sensor_types
            .find_all()
            .await?
            .into_iter()
            .map(|sensor_type| (sensor_type.identity().clone(), sensor_type))
            .collect();
        let sensor_models: BTreeMap<_, _> = self
            .sensor_models
            .find_all()
            .await?
            .into_iter()
            .map(|model| (*model.identity(), model))
            .collect();

        let actuator_types: BTreeMap<_, _> = self
            .actuator_types
            .find_all()
            .await?
            .into_iter()
            .map(|actuator_type| (actuator_type.identity().clone(), actuator_type))
            .collect();
        let actuator_models: BTreeMap<_, _> = self
            .actuator_models
            .find_all()
            .await?
            .into_iter()
            .map(|model| (*model.identity(), model))
            .collect();

        let mut grouped: BTreeMap<String, BTreeMap<DeviceId, Device>> = BTreeMap::new();
        let mut group = |description: &str, device_id: &DeviceId| {
            if let Some(device) = devices.get(device_id) {
                grouped
                    .entry(description.to_string())
                    .or_default()
                    .entry(device_id.clone())
                    .or_insert_with(|| device.clone());
            }
        };

        for sensor in self.sensors.find_all().await? {
            let sensor_type = sensor_models
                .get(&sensor.model())
                .and_then(|model| sensor_types.get(model.sensor_type_id()));
            if let Some(sensor_type) = sensor_type {
                group(sensor_type.description().as_str(), sensor.device_id());
            }
        }

        for actuator in self.actuators.find_all().await? {
            let actuator_type = actuator_models
                .get(&actuator.model())
                .and_then(|model| actuator_types.get(model.actuator_type_id()));
            if let Some(actuator_type) = actuator_type {
                group(actuator_type.description().as_str(), actuator.device_id());
            }
        }

        Ok(grouped
            .into_iter()
            .map(|(description, devices)| (description, devices.into_values().collect()))
            .collect())
    }
}
