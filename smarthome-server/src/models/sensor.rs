use serde::{Deserialize, Serialize};

use super::Table;
use crate::domain::values::{DeviceId, SensorId};
use crate::domain::{AggregateRoot, DomainError, Sensor};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct SensorRow {
    pub id: String,
    pub device_id: String,
    pub sensor_model_id: String,
}

impl From<&Sensor> for SensorRow {
    fn from(sensor: &Sensor) -> Self {
        Self {
            id: sensor.identity().to_string(),
            device_id: sensor.device_id().to_string(),
            sensor_model_id: sensor.model().to_string(),
        }
    }
}

impl TryFrom<SensorRow> for Sensor {
    type Error = DomainError;

    fn try_from(row: SensorRow) -> Result<Self, Self::Error> {
        Ok(Sensor::new(
            SensorId::new(row.id)?,
            DeviceId::new(row.device_id)?,
            row.sensor_model_id.parse()?,
        ))
    }
}

#[derive(Clone)]
pub struct SensorTable;

impl Table for SensorTable {
    fn name(&self) -> &'static str {
        "sensors"
    }

    fn create(&self) -> String {
        String::from(
            r#"
            CREATE TABLE IF NOT EXISTS sensors (
                id VARCHAR(64) PRIMARY KEY,
                device_id VARCHAR(64) NOT NULL,
                sensor_model_id VARCHAR(32) NOT NULL,
                FOREIGN KEY (device_id) REFERENCES devices (id) ON DELETE CASCADE,
                FOREIGN KEY (sensor_model_id) REFERENCES sensor_models (id)
            );
            "#,
        )
    }

    fn dispose(&self) -> String {
        String::from("DROP TABLE IF EXISTS sensors;")
    }

    fn dependencies(&self) -> Vec<&'static str> {
        vec!["devices", "sensor_models"]
    }
}
