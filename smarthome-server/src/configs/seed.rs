use std::fs;
use std::path::Path;

use anyhow::Context;
use axum::http::StatusCode;
use serde::Deserialize;
use smarthome_api::models::{
    CreateActuatorModelRequest, CreateActuatorRequest, CreateActuatorTypeRequest,
    CreateDeviceRequest, CreateHouseRequest, CreateRoomRequest, CreateSensorModelRequest,
    CreateSensorReadingRequest, CreateSensorRequest, CreateSensorTypeRequest,
};

use crate::errors::ApiError;
use crate::services::Services;

/// Initial data loaded at startup. Entries reference each other by
/// identifier, so houses, rooms, devices, sensors and actuators that others
/// point to should carry an explicit `id`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SeedData {
    pub sensor_types: Vec<CreateSensorTypeRequest>,
    pub actuator_types: Vec<CreateActuatorTypeRequest>,
    pub sensor_models: Vec<CreateSensorModelRequest>,
    pub actuator_models: Vec<CreateActuatorModelRequest>,
    pub houses: Vec<CreateHouseRequest>,
    pub rooms: Vec<CreateRoomRequest>,
    pub devices: Vec<CreateDeviceRequest>,
    pub sensors: Vec<CreateSensorRequest>,
    pub actuators: Vec<CreateActuatorRequest>,
    pub readings: Vec<CreateSensorReadingRequest>,
}

impl SeedData {
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read seed file {}", path.display()))?;

        Self::parse(&content).with_context(|| format!("invalid seed file {}", path.display()))
    }

    pub fn parse(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Creates every entry in dependency order. Entries that already exist
    /// are skipped, readings are always appended.
    pub async fn apply(&self, services: &Services) -> anyhow::Result<()> {
        let mut created = 0;

        for request in &self.sensor_types {
            created += skip_existing(
                "sensor type",
                &request.id,
                services.catalog.create_sensor_type(request.clone()).await,
            )?;
        }
        for request in &self.actuator_types {
            created += skip_existing(
                "actuator type",
                &request.id,
                services.catalog.create_actuator_type(request.clone()).await,
            )?;
        }
        for request in &self.sensor_models {
            created += skip_existing(
                "sensor model",
                &request.id,
                services.catalog.add_sensor_model(request.clone()).await,
            )?;
        }
        for request in &self.actuator_models {
            created += skip_existing(
                "actuator model",
                &request.id,
                services.catalog.add_actuator_model(request.clone()).await,
            )?;
        }
        for request in &self.houses {
            created += skip_existing(
                "house",
                request.id.as_deref().unwrap_or_default(),
                services.houses.add_house(request.clone()).await,
            )?;
        }
        for request in &self.rooms {
            created += skip_existing(
                "room",
                &request.name,
                services.rooms.add_room(request.clone()).await,
            )?;
        }
        for request in &self.devices {
            created += skip_existing(
                "device",
                &request.name,
                services.devices.add_device(request.clone()).await,
            )?;
        }
        for request in &self.sensors {
            created += skip_existing(
                "sensor",
                request.id.as_deref().unwrap_or(&request.sensor_model_id),
                services.sensors.add_sensor(request.clone()).await,
            )?;
        }
        for request in &self.actuators {
            created += skip_existing(
                "actuator",
                request.id.as_deref().unwrap_or(&request.actuator_model_id),
                services.actuators.add_actuator(request.clone()).await,
            )?;
        }
        for request in &self.readings {
            if let Some(timestamp) = request.timestamp {
                let exists = services
                    .readings
                    .contains_reading(&request.sensor_id, timestamp)
                    .await
                    .with_context(|| format!("failed to look up reading of {}", request.sensor_id))?;
                if exists {
                    tracing::debug!(
                        "reading of {} at {} already present, skipped",
                        request.sensor_id,
                        timestamp
                    );
                    continue;
                }
            }

            services
                .readings
                .add_reading(request.clone())
                .await
                .with_context(|| format!("failed to seed reading of {}", request.sensor_id))?;
            created += 1;
        }

        tracing::info!(created, "seed data applied");

        Ok(())
    }
}

fn skip_existing<T>(kind: &str, name: &str, result: Result<T, ApiError>) -> anyhow::Result<usize> {
    match result {
        Ok(_) => Ok(1),
        Err(e) if e.status_code() == StatusCode::CONFLICT => {
            tracing::debug!("{} {} already present, skipped", kind, name);
            Ok(0)
        }
        Err(e) => Err(anyhow::Error::new(e).context(format!("failed to seed {kind} {name}"))),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::SequentialGenerator;
    use crate::repositories::Repositories;
    use crate::services::{HttpWeatherGateway, Services};

    const SEED: &str = r#"
        [[sensor_types]]
        id = "temperature"
        description = "Temperature"
        unit = "Celsius"

        [[sensor_models]]
        id = "GA100K"
        sensor_type_id = "temperature"

        [[houses]]
        id = "home"

        [houses.location]
        address = "Rua das Flores 12"
        country = "Portugal"
        zip_code = "4050-262"
        latitude = 41.14
        longitude = -8.61

        [[rooms]]
        id = "kitchen"
        house_id = "home"
        name = "Kitchen"
        floor = 0
        dimensions = { length = 4.0, width = 3.5, height = 2.6 }
        is_inside = true

        [[devices]]
        id = "thermostat"
        room_id = "kitchen"
        name = "Thermostat"
        model = "T-1000"

        [[sensors]]
        id = "kitchen-temperature"
        device_id = "thermostat"
        sensor_model_id = "GA100K"

        [[readings]]
        device_id = "thermostat"
        sensor_id = "kitchen-temperature"
        value = "21"
        timestamp = "2024-01-15T08:00:00Z"
    "#;

    fn services() -> Services {
        let gateway = HttpWeatherGateway::new(&crate::configs::Weather {
            base_url: "http://localhost:1".to_string(),
            group_number: 1,
            timeout_secs: 1,
        })
        .unwrap();

        Services::new(
            &Repositories::in_memory(),
            Arc::new(SequentialGenerator::new("seed")),
            Arc::new(gateway),
        )
    }

    #[test]
    fn test_parse_seed() {
        let seed = SeedData::parse(SEED).unwrap();

        assert_eq!(seed.houses.len(), 1);
        assert_eq!(seed.rooms[0].dimensions.width, 3.5);
        assert!(seed.readings[0].timestamp.is_some());
        assert!(seed.actuators.is_empty());
    }

    #[tokio::test]
    async fn test_apply_seed_twice() {
        let seed = SeedData::parse(SEED).unwrap();
        let services = services();

        seed.apply(&services).await.unwrap();
        seed.apply(&services).await.unwrap();

        assert_eq!(services.houses.list_houses().await.unwrap().len(), 1);
        assert_eq!(services.devices.devices_in_room("kitchen").await.unwrap().len(), 1);
        assert_eq!(
            services.readings.readings_by_device("thermostat").await.unwrap().len(),
            1
        );
    }

    #[tokio::test]
    async fn test_apply_rejects_dangling_reference() {
        let seed = SeedData::parse(
            r#"
            [[devices]]
            room_id = "attic"
            name = "Lamp"
            model = "L-1"
            "#,
        )
        .unwrap();

        assert!(seed.apply(&services()).await.is_err());
    }
}
