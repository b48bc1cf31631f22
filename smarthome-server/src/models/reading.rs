use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::Table;
use crate::domain::values::{DeviceId, Reading, SensorId, SensorReadingId};
use crate::domain::{AggregateRoot, DomainError, SensorReading};

/// Timestamps are kept as UNIX milliseconds so range filters compare numbers.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct SensorReadingRow {
    pub id: String,
    pub device_id: String,
    pub sensor_id: String,
    pub reading: String,
    pub timestamp: i64,
}

/// Whole milliseconds at or before `at`.
pub fn to_millis(at: OffsetDateTime) -> i64 {
    at.unix_timestamp_nanos().div_euclid(1_000_000) as i64
}

/// Whole milliseconds at or after `at`, used for lower range bounds.
pub fn to_millis_ceil(at: OffsetDateTime) -> i64 {
    let nanos = at.unix_timestamp_nanos();
    let millis = nanos.div_euclid(1_000_000);
    if nanos.rem_euclid(1_000_000) == 0 {
        millis as i64
    } else {
        (millis + 1) as i64
    }
}

pub fn from_millis(millis: i64) -> Result<OffsetDateTime, DomainError> {
    OffsetDateTime::from_unix_timestamp_nanos(i128::from(millis) * 1_000_000).map_err(|_| {
        DomainError::InvalidValue {
            model: "timestamp",
            value: millis.to_string(),
        }
    })
}

impl From<&SensorReading> for SensorReadingRow {
    fn from(reading: &SensorReading) -> Self {
        Self {
            id: reading.identity().to_string(),
            device_id: reading.device_id().to_string(),
            sensor_id: reading.sensor_id().to_string(),
            reading: reading.reading().to_string(),
            timestamp: to_millis(reading.timestamp()),
        }
    }
}

impl TryFrom<SensorReadingRow> for SensorReading {
    type Error = DomainError;

    fn try_from(row: SensorReadingRow) -> Result<Self, Self::Error> {
        Ok(SensorReading::new(
            SensorReadingId::new(row.id)?,
            DeviceId::new(row.device_id)?,
            SensorId::new(row.sensor_id)?,
            Reading::new(row.reading)?,
            from_millis(row.timestamp)?,
        ))
    }
}

#[derive(Clone)]
pub struct SensorReadingTable;

impl Table for SensorReadingTable {
    fn name(&self) -> &'static str {
        "sensor_readings"
    }

    fn create(&self) -> String {
        String::from(
            r#"
            CREATE TABLE IF NOT EXISTS sensor_readings (
                id VARCHAR(64) PRIMARY KEY,
                device_id VARCHAR(64) NOT NULL,
                sensor_id VARCHAR(64) NOT NULL,
                reading VARCHAR(255) NOT NULL,
                timestamp INTEGER NOT NULL,
                FOREIGN KEY (device_id) REFERENCES devices (id) ON DELETE CASCADE,
                FOREIGN KEY (sensor_id) REFERENCES sensors (id) ON DELETE CASCADE
            );
            CREATE INDEX IF NOT EXISTS sensor_readings_device_time
                ON sensor_readings (device_id, timestamp);
            "#,
        )
    }

    fn dispose(&self) -> String {
        String::from("DROP TABLE IF EXISTS sensor_readings;")
    }

    fn dependencies(&self) -> Vec<&'static str> {
        vec!["devices", "sensors"]
    }
}
